use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::fields::{contains_any, element_text};

/// Occupation nouns a generic `div` must mention to count as a posting.
pub const POSTING_KEYWORDS: &[&str] = &[
    "engineer",
    "manager",
    "specialist",
    "analyst",
    "developer",
    "coordinator",
];

/// Finds candidate posting elements. `None` means "nothing here, try the next one".
pub type MatchFn = for<'a> fn(&'a Html) -> Option<Vec<ElementRef<'a>>>;

#[derive(Clone, Copy)]
pub struct Matcher {
    pub name: &'static str,
    pub find: MatchFn,
}

macro_rules! css_matcher {
    ($fn_name:ident, $css:literal) => {
        pub fn $fn_name(document: &Html) -> Option<Vec<ElementRef<'_>>> {
            select_nonempty(document, $css)
        }
    };
}

css_matcher!(job_divs, "div[class*='job']");
css_matcher!(listing_divs, "div[class*='listing']");
css_matcher!(card_divs, "div[class*='card']");
css_matcher!(result_divs, "div[class*='result']");
css_matcher!(job_links, "a[class*='job']");
css_matcher!(job_list_items, "li[class*='job']");
css_matcher!(job_articles, "article[class*='job']");

/// Every `div` whose text mentions an occupation keyword, nested ones included.
pub fn keyword_divs(document: &Html) -> Option<Vec<ElementRef<'_>>> {
    let selector = Selector::parse("div").ok()?;
    let found: Vec<_> = document
        .select(&selector)
        .filter(|div| {
            let text = element_text(*div);
            let hit = contains_any(&text.to_lowercase(), POSTING_KEYWORDS);
            if hit {
                debug!(
                    "Found potential job div: {}",
                    text.chars().take(100).collect::<String>()
                );
            }
            hit
        })
        .collect();

    (!found.is_empty()).then_some(found)
}

/// Priority order. The first matcher that returns `Some` wins outright.
pub const MATCHERS: [Matcher; 8] = [
    Matcher { name: "div[class*='job']", find: job_divs },
    Matcher { name: "div[class*='listing']", find: listing_divs },
    Matcher { name: "div[class*='card']", find: card_divs },
    Matcher { name: "div[class*='result']", find: result_divs },
    Matcher { name: "a[class*='job']", find: job_links },
    Matcher { name: "li[class*='job']", find: job_list_items },
    Matcher { name: "article[class*='job']", find: job_articles },
    Matcher { name: "div containing an occupation keyword", find: keyword_divs },
];

pub fn find_candidates<'a>(
    document: &'a Html,
    matchers: &[Matcher],
) -> Option<(&'static str, Vec<ElementRef<'a>>)> {
    matchers
        .iter()
        .find_map(|matcher| (matcher.find)(document).map(|found| (matcher.name, found)))
}

fn select_nonempty<'a>(document: &'a Html, css: &str) -> Option<Vec<ElementRef<'a>>> {
    let selector = Selector::parse(css).ok()?;
    let found: Vec<_> = document.select(&selector).collect();
    (!found.is_empty()).then_some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_css_matcher_parses() {
        for matcher in &MATCHERS[..7] {
            assert!(Selector::parse(matcher.name).is_ok(), "{}", matcher.name);
        }
    }

    #[test]
    fn class_substring_match() {
        let doc = Html::parse_document(r#"<div class="search-result-item">x</div>"#);
        assert!(job_divs(&doc).is_none());
        assert_eq!(result_divs(&doc).map(|v| v.len()), Some(1));
    }

    #[test]
    fn earlier_matcher_wins_even_when_later_ones_match_more() {
        let doc = Html::parse_document(
            r#"<div class="card">a</div><div class="card">b</div>
               <div class="listing">c</div>"#,
        );
        let (name, found) = find_candidates(&doc, &MATCHERS).unwrap();
        assert_eq!(name, "div[class*='listing']");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn keyword_fallback_keeps_nested_divs() {
        let doc = Html::parse_document("<div><div>Project Manager</div></div><div>Lunch menu</div>");
        assert_eq!(keyword_divs(&doc).map(|v| v.len()), Some(2));
    }

    #[test]
    fn keyword_fallback_ignores_administrator() {
        let doc = Html::parse_document("<div>Database Administrator</div>");
        assert!(keyword_divs(&doc).is_none());
    }

    #[test]
    fn no_matcher_fires_on_unrelated_markup() {
        let doc = Html::parse_document("<main><p>Welcome to our careers site</p></main>");
        assert!(find_candidates(&doc, &MATCHERS).is_none());
    }
}
