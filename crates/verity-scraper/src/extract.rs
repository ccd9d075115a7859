//! Headline extraction from HTML

use scraper::{Html, Selector};
use std::sync::LazyLock;

static OG_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("valid selector"));
static TWITTER_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="twitter:title"]"#).expect("valid selector"));
static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("valid selector"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));

/// Collapse whitespace runs to single spaces and trim
pub fn clean_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(clean_title)
        .filter(|t| !t.is_empty())
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| clean_title(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
}

/// Extract the headline of an article page
///
/// Sources are tried in order: `og:title`, `twitter:title`, the first `<h1>`,
/// then `<title>`. The first non-blank candidate wins.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    meta_content(&document, &OG_TITLE)
        .or_else(|| meta_content(&document, &TWITTER_TITLE))
        .or_else(|| first_text(&document, &H1))
        .or_else(|| first_text(&document, &TITLE))
}
