//! Best-effort article extraction.
//!
//! Title and content are each located by an ordered chain of selector
//! strategies: portal-specific selectors first (tuned for Naver news
//! markup), generic document structure second, a literal placeholder last.
//! First non-empty match wins. This degrades gracefully on arbitrary pages
//! but is explicitly not a general-purpose readability algorithm.

pub mod model;

pub use model::ExtractedArticle;

use crate::fetcher::types::PageResponse;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Cap on extracted content, in characters, to stay inside model token
/// limits. Truncated content gets [`TRUNCATION_MARKER`] appended.
pub const MAX_CONTENT_CHARS: usize = 3000;
pub const TRUNCATION_MARKER: &str = "...";

pub const NO_TITLE_PLACEHOLDER: &str = "제목 없음";
pub const NO_CONTENT_PLACEHOLDER: &str = "내용 없음";

// Ordered most-specific first; extend with more portal selectors as needed.
static TITLE_CHAIN: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    parse_chain(&[
        "#title_area",
        ".media_end_head_headline",
        "h1",
        "title",
    ])
});

static CONTENT_CHAIN: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    parse_chain(&[
        "#dic_area",
        "#newsct_article",
        ".news_end_body_content",
        "article",
        "div.content",
    ])
});

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

fn parse_chain(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .map(|s| Selector::parse(s).expect("invalid extraction selector"))
        .collect()
}

/// Extract title and content from a fetched page.
///
/// Never fails: unparseable or unrecognized markup degrades to the
/// placeholder strings.
pub fn extract(page: &PageResponse) -> ExtractedArticle {
    let document = Html::parse_document(&page.body_utf8);

    let title = select_first(&document, &TITLE_CHAIN)
        .unwrap_or_else(|| NO_TITLE_PLACEHOLDER.to_string());
    let content = select_first(&document, &CONTENT_CHAIN)
        .map(|text| truncate_chars(&text, MAX_CONTENT_CHARS))
        .unwrap_or_else(|| NO_CONTENT_PLACEHOLDER.to_string());

    ExtractedArticle {
        url: page.url_final.clone(),
        title,
        content,
    }
}

/// Run the selector chain in order; first selector yielding non-empty text
/// wins.
fn select_first(document: &Html, chain: &[Selector]) -> Option<String> {
    for selector in chain {
        if let Some(element) = document.select(selector).next() {
            let text = normalize_text(&element.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Collapse whitespace runs (including newlines between paragraphs) to
/// single spaces and trim the ends.
fn normalize_text(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

/// Truncate to `max` characters (not bytes; content is mostly Korean) and
/// append the marker when anything was cut.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
