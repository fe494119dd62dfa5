// src/extract.rs
//
// Pulls the marked post links out of a fetched page. The target site template
// tags each post link with data-hook="anchorViewer"; that attribute is the
// whole scraping contract, so everything else in the page is ignored.

use scraper::{Html, Selector};
use url::Url;

use crate::error::NoAnchorsFound;
use crate::params::ANCHOR_SELECTOR;
use crate::schema::ListItem;

/// Parse `html` and build one `ListItem` per marked anchor, in document
/// order, positions 1..=n. Zero matches is a sentinel, not a transport
/// failure; the caller reports it and skips the URL.
pub fn extract_items(html: &str, page_url: &str) -> Result<Vec<ListItem>, NoAnchorsFound> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse(ANCHOR_SELECTOR) {
        Ok(s) => s,
        Err(_) => return Err(NoAnchorsFound { url: page_url.to_string() }),
    };

    let items: Vec<ListItem> = document
        .select(&selector)
        .enumerate()
        .map(|(i, anchor)| {
            let name = anchor.text().collect::<String>();
            let href = anchor.value().attr("href").unwrap_or("");
            ListItem::new(i + 1, name, resolve_url(page_url, href))
        })
        .collect();

    if items.is_empty() {
        return Err(NoAnchorsFound { url: page_url.to_string() });
    }
    Ok(items)
}

/// Resolve `href` against the page URL per standard URL resolution rules.
/// The original tool concatenated the two strings, which breaks for absolute
/// hrefs and non-slash-terminated bases; concatenation survives only as the
/// fallback when the page URL itself doesn't parse.
fn resolve_url(base: &str, href: &str) -> String {
    match Url::parse(base) {
        Ok(b) => match b.join(href) {
            Ok(u) => u.to_string(),
            Err(_) => format!("{base}{href}"),
        },
        Err(_) => format!("{base}{href}"),
    }
}
