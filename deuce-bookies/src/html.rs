//! Helpers for scraping rendered pages.

use anyhow::anyhow;
use scraper::{ElementRef, Selector};

pub fn selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|err| anyhow!("invalid selector '{css}': {err}"))
}

/// The element's text content with whitespace collapsed.
pub fn text_of(element: &ElementRef) -> String {
    let mut text = String::new();
    for token in element.text().flat_map(str::split_whitespace) {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(token);
    }
    text
}
