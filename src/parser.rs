use std::collections::HashMap;

use feed_rs::model::Entry;
use feed_rs::parser;
use tracing::debug;

use crate::error::Result;

pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_LINK: &str = "#";

/// One entry from the source feed, with missing fields already defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Raw date text as it appeared in the feed; empty if absent
    pub published_at: String,
}

/// Parse raw feed bytes into items, in document order.
pub fn parse(raw: &[u8]) -> Result<Vec<FeedItem>> {
    let parsed = parser::parse(raw)?;

    // feed_rs normalizes pubDate into a DateTime, so keep the raw text around
    let raw_dates = extract_raw_pub_dates(raw);

    let items: Vec<FeedItem> = parsed
        .entries
        .iter()
        .map(|entry| {
            let raw_date = entry
                .links
                .first()
                .and_then(|l| raw_dates.get(l.href.trim()))
                .cloned();
            FeedItem::from_entry(entry, raw_date)
        })
        .collect();

    debug!("Parsed {} items from feed", items.len());
    Ok(items)
}

impl FeedItem {
    fn from_entry(entry: &Entry, raw_date: Option<String>) -> Self {
        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let link = entry
            .links
            .first()
            .map(|l| l.href.trim().to_string())
            .unwrap_or_else(|| DEFAULT_LINK.to_string());

        let description = entry
            .summary
            .as_ref()
            .map(|s| s.content.trim().to_string())
            .unwrap_or_default();

        let published_at = raw_date
            .or_else(|| entry.published.map(|dt| dt.to_rfc2822()))
            .unwrap_or_default();

        Self {
            title,
            link,
            description,
            published_at,
        }
    }
}

/// Raw `<pubDate>` text keyed by the `<link>` of its `<item>`.
pub fn extract_raw_pub_dates(xml_bytes: &[u8]) -> HashMap<String, String> {
    let mut dates = HashMap::new();
    let xml_str = match std::str::from_utf8(xml_bytes) {
        Ok(s) => s,
        Err(_) => return dates,
    };

    for item in item_blocks(xml_str) {
        let link = extract_xml_element(item, "link");
        let pub_date = extract_xml_element(item, "pubDate");

        if let (Some(link), Some(pub_date)) = (link, pub_date) {
            dates.entry(link).or_insert(pub_date);
        }
    }

    dates
}

/// Bodies of `<item>` elements, with or without attributes on the open tag.
fn item_blocks(xml: &str) -> impl Iterator<Item = &str> {
    xml.split("<item").skip(1).filter_map(|rest| {
        let open_end = rest.find('>')?;
        let attrs = &rest[..open_end];
        // skips `<items>`, `<itemCount>` and self-closing `<item/>`
        if !attrs.is_empty() && !attrs.starts_with(char::is_whitespace) {
            return None;
        }

        let body = &rest[open_end + 1..];
        let end = body.find("</item>").unwrap_or(body.len());
        Some(&body[..end])
    })
}

pub fn extract_xml_element(xml: &str, tag: &str) -> Option<String> {
    let start_tag = format!("<{}>", tag);
    let end_tag = format!("</{}>", tag);

    let start = xml.find(&start_tag)? + start_tag.len();
    let end = xml[start..].find(&end_tag)? + start;

    Some(xml[start..end].trim().to_string())
}
