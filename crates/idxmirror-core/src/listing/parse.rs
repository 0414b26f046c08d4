//! Anchor extraction from index HTML.

use super::ListingEntry;
use scraper::{Html, Selector};

const ENTRY_SELECTOR: &str = "table td a";

/// Returns every `table td a` anchor carrying an `href`, in document order.
///
/// The HTML parser is error-tolerant, so any text decodes to some document;
/// an `Err` only reports a broken selector.
pub fn parse_listing(html: &str) -> Result<Vec<ListingEntry>, String> {
    let selector =
        Selector::parse(ENTRY_SELECTOR).map_err(|e| format!("bad selector {ENTRY_SELECTOR}: {e:?}"))?;
    let document = Html::parse_document(html);

    let entries = document
        .select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let text: String = anchor.text().collect();
            Some(ListingEntry::new(href, text.trim()))
        })
        .collect();
    Ok(entries)
}
