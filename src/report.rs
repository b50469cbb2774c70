use std::io::Write;

use chrono::{DateTime, Local};

use crate::classifier::{ChatModel, EarlyCareerClassifier};
use crate::listing::{Listing, ListingRecord};

pub const LISTINGS_HEADER: &str = "== All Job Listings ==";
pub const EARLY_CAREER_SUFFIX: &str = " [early-career]";

/// Prints the listings block and returns one export row per listing.
///
/// With a classifier every title is sent to the model; a failed call aborts the run.
pub fn write_listings<M: ChatModel, W: Write>(
    listings: &[Listing],
    classifier: Option<&EarlyCareerClassifier<M>>,
    scraped_at: DateTime<Local>,
    out: &mut W,
) -> anyhow::Result<Vec<ListingRecord>> {
    let mut records = Vec::with_capacity(listings.len());

    writeln!(out, "\n{LISTINGS_HEADER}")?;
    for listing in listings {
        let early_career = classifier
            .map(|c| c.classify_job_title(&listing.title))
            .transpose()?;

        if early_career == Some(true) {
            writeln!(out, "{}{}", listing.display(), EARLY_CAREER_SUFFIX)?;
        } else {
            writeln!(out, "{}", listing.display())?;
        }
        records.push(ListingRecord::new(listing, early_career, scraped_at));
    }

    Ok(records)
}
