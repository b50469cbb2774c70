use scraper::ElementRef;

/// Occupation nouns that mark a text fragment as a job title.
pub const TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "manager",
    "specialist",
    "analyst",
    "developer",
    "coordinator",
    "administrator",
];

pub const PLACE_KEYWORDS: &[&str] = &[
    "united states",
    "canada",
    "uk",
    "london",
    "chicago",
    "montreal",
];

const TITLE_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "a", "span", "div"];
const LOCATION_TAGS: &[&str] = &["span", "div", "p"];

// Exclusive bounds, in chars.
const MIN_TITLE_LEN: usize = 5;
const MAX_TITLE_LEN: usize = 100;

pub(super) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub(super) fn contains_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack_lower.contains(keyword))
}

/// First title-ish descendant (document order, the element itself excluded).
pub fn find_title(element: ElementRef<'_>) -> Option<String> {
    trimmed_texts(element, TITLE_TAGS).find(|text| {
        let len = text.chars().count();
        len > MIN_TITLE_LEN
            && len < MAX_TITLE_LEN
            && contains_any(&text.to_lowercase(), TITLE_KEYWORDS)
    })
}

pub fn find_location(element: ElementRef<'_>) -> Option<String> {
    trimmed_texts(element, LOCATION_TAGS)
        .find(|text| text.contains(',') && contains_any(&text.to_lowercase(), PLACE_KEYWORDS))
}

fn trimmed_texts<'a>(
    element: ElementRef<'a>,
    tags: &'static [&'static str],
) -> impl Iterator<Item = String> + 'a {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |descendant| {
            let name = descendant.value().name();
            tags.iter().any(|tag| *tag == name)
        })
        .map(|descendant| element_text(descendant).trim().to_string())
}
