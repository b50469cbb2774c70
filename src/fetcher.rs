use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};

pub const DEFAULT_JOBS_URL: &str = "https://www.cdwjobs.com/search/jobs";
pub const DEFAULT_REFERER: &str = "https://www.cdwjobs.com/";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// How much of the body goes into the debug log.
const BODY_PREVIEW_CHARS: usize = 1000;

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub referer: String,
    /// `None` leaves the request unbounded.
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            referer: DEFAULT_REFERER.to_string(),
            timeout: None,
        }
    }
}

/// Whatever the server sent back, successful or not.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub final_url: String,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers(&config.referer)?)
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Issues a single GET. Non-2xx responses are handed back like any other page.
    pub fn fetch(&self, url: &str) -> anyhow::Result<FetchedPage> {
        info!("Fetching job board: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("HTTP request to {url} failed"))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .text()
            .context("Failed to read response body")?;

        let page = FetchedPage {
            status,
            final_url,
            body,
        };

        info!("Response status: {}", page.status);
        info!("Response URL: {}", page.final_url);
        if !page.is_success() {
            warn!("Job board answered with status {}; processing the body anyway", page.status);
        }
        debug!(
            "First {} characters of HTML:\n{}",
            BODY_PREVIEW_CHARS,
            page.body.chars().take(BODY_PREVIEW_CHARS).collect::<String>()
        );

        Ok(page)
    }
}

fn browser_headers(referer: &str) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE));
    headers.insert(
        header::REFERER,
        HeaderValue::from_str(referer).with_context(|| format!("Invalid referer: {referer}"))?,
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    Ok(headers)
}
