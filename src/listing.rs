use chrono::{DateTime, Local};
use serde::Serialize;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// A job posting pulled out of a candidate element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub location: String,
}

impl Listing {
    /// Title and location run together, the way the job board listing is printed.
    pub fn display(&self) -> String {
        format!("{}{}", self.title, self.location)
    }
}

/// One row of the CSV export.
#[derive(Debug, Serialize)]
pub struct ListingRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Listing")]
    pub display: String,
    #[serde(rename = "EarlyCareer")]
    pub early_career: Option<bool>,
    #[serde(rename = "ScrapedAt")]
    pub scraped_at: String,
}

impl ListingRecord {
    pub fn new(listing: &Listing, early_career: Option<bool>, scraped_at: DateTime<Local>) -> Self {
        Self {
            title: listing.title.clone(),
            location: listing.location.clone(),
            display: listing.display(),
            early_career,
            scraped_at: scraped_at.to_rfc3339(),
        }
    }
}
