mod common;

use std::time::Duration;

use common::Stub;
use job_board_scrape::{extract_listings, Fetcher, FetcherConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

const LISTING_PAGE: &str = r#"<html><body>
    <div class="job-listing">
        <h3>Software Engineer I</h3>
        <span class="location">Chicago, United States</span>
    </div>
</body></html>"#;

// Values with commas are compared whole rather than as header lists.
fn header_is(req: &Request, name: &str, expected: &str) -> bool {
    req.headers
        .get(name)
        .map_or(false, |value| value.as_bytes() == expected.as_bytes())
}

fn fetcher() -> Fetcher {
    Fetcher::new(FetcherConfig {
        referer: "https://jobs.example.com/".to_string(),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap()
}

#[test]
fn sends_browser_headers() {
    let stub = Stub::start();
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/search/jobs"))
            .and(header("referer", "https://jobs.example.com/"))
            .and(|req: &Request| header_is(req, "accept-language", "en-US,en;q=0.5"))
            .and(|req: &Request| {
                header_is(
                    req,
                    "user-agent",
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
                )
            })
            .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
            .expect(1),
    );

    let page = fetcher().fetch(&stub.url("/search/jobs")).unwrap();
    assert_eq!(page.status, 200);
    assert!(page.is_success());
    assert_eq!(
        extract_listings(&page.body),
        vec!["Software Engineer IChicago, United States".to_string()]
    );
}

#[test]
fn error_status_is_returned_not_raised() {
    let stub = Stub::start();
    stub.mount(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("<html><body>Access denied</body></html>")),
    );

    let page = fetcher().fetch(&stub.url("/search/jobs")).unwrap();
    assert_eq!(page.status, 403);
    assert!(page.body.contains("Access denied"));
    assert!(extract_listings(&page.body).is_empty());
}

#[test]
fn final_url_follows_redirects() {
    let stub = Stub::start();
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/search/jobs")),
    );
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/search/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE)),
    );

    let page = fetcher().fetch(&stub.url("/jobs")).unwrap();
    assert_eq!(page.status, 200);
    assert_eq!(page.final_url, stub.url("/search/jobs"));
}

#[test]
fn configured_timeout_is_enforced() {
    let stub = Stub::start();
    stub.mount(
        Mock::given(method("GET")).respond_with(
            ResponseTemplate::new(200)
                .set_body_string(LISTING_PAGE)
                .set_delay(Duration::from_secs(3)),
        ),
    );

    let fetcher = Fetcher::new(FetcherConfig {
        timeout: Some(Duration::from_millis(200)),
        ..FetcherConfig::default()
    })
    .unwrap();
    assert!(fetcher.fetch(&stub.url("/search/jobs")).is_err());
}
