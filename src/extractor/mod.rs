//! Heuristic extraction of job postings from a job board search page.
//!
//! The page is run through an ordered list of [`matchers::Matcher`]s. The first
//! one that finds anything supplies the candidate elements; each candidate is
//! then searched for a title-like and a location-like text fragment.

use scraper::{ElementRef, Html};
use tracing::{debug, info};

use crate::listing::{Listing, UNKNOWN_LOCATION, UNKNOWN_TITLE};

pub mod fields;
pub mod matchers;

use matchers::{find_candidates, Matcher, MATCHERS};

/// Number of candidates looked at when no limit is given.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// An element considered as a possible posting, kept around for diagnostics.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub tag: String,
    pub classes: Vec<String>,
    pub text: String,
}

impl Candidate {
    pub fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            tag: element.value().name().to_string(),
            classes: element.value().classes().map(str::to_string).collect(),
            text: fields::element_text(element),
        }
    }

    fn preview(&self) -> String {
        self.text.chars().take(200).collect()
    }
}

#[derive(Clone)]
pub struct Extractor {
    matchers: Vec<Matcher>,
    limit: Option<usize>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_limit(DEFAULT_CANDIDATE_LIMIT)
    }
}

impl Extractor {
    /// `0` disables the limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            matchers: MATCHERS.to_vec(),
            limit: (limit > 0).then_some(limit),
        }
    }

    pub fn with_matchers(mut self, matchers: Vec<Matcher>) -> Self {
        self.matchers = matchers;
        self
    }

    pub fn extract(&self, html: &str) -> Vec<Listing> {
        self.extract_with_stats(html).listings
    }

    /// Like [`Extractor::extract`], also reporting which matcher fired and how
    /// many elements it found before the candidate limit was applied.
    pub fn extract_with_stats(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);

        let (matcher, elements) = match find_candidates(&document, &self.matchers) {
            Some((name, found)) => {
                info!("Found {} elements with selector: {}", found.len(), name);
                (Some(name), found)
            }
            None => (None, Vec::new()),
        };
        let total_found = elements.len();
        info!("Total found: {} job elements", total_found);

        let limit = self.limit.unwrap_or(total_found);
        let listings = elements
            .into_iter()
            .take(limit)
            .enumerate()
            .filter_map(|(i, element)| {
                let candidate = Candidate::from_element(element);
                debug!(
                    index = i + 1,
                    tag = %candidate.tag,
                    classes = ?candidate.classes,
                    "Text preview: {}",
                    candidate.preview()
                );

                let title =
                    fields::find_title(element).unwrap_or_else(|| UNKNOWN_TITLE.to_string());
                if title == UNKNOWN_TITLE {
                    return None;
                }
                let location =
                    fields::find_location(element).unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
                let listing = Listing { title, location };
                debug!("Extracted: {}", listing.display());
                Some(listing)
            })
            .collect();

        Extraction {
            matcher,
            total_found,
            listings,
        }
    }
}

/// Outcome of one extraction pass.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub matcher: Option<&'static str>,
    pub total_found: usize,
    pub listings: Vec<Listing>,
}

/// Display strings for every posting found with the default settings.
pub fn extract_listings(html: &str) -> Vec<String> {
    Extractor::default()
        .extract(html)
        .iter()
        .map(Listing::display)
        .collect()
}
