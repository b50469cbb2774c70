//! Scrapes a job board search page for postings and, on request, asks a chat
//! model whether each title is an early-career role.

pub mod classifier;
pub mod export;
pub mod extractor;
pub mod fetcher;
pub mod listing;
pub mod logging;
pub mod report;

pub use classifier::{ChatModel, ClassifierConfig, ClassifyError, EarlyCareerClassifier};
pub use extractor::{extract_listings, Extractor};
pub use fetcher::{FetchedPage, Fetcher, FetcherConfig};
pub use listing::Listing;
