use chrono::Utc;
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{DaruiError, Result};
use crate::domain::{Entry, FetchedFeed};

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse a fetched document into a display title plus entries.
    ///
    /// The display title falls back to the feed URL when the document
    /// carries none; missing entry titles and links become empty strings.
    pub fn normalize(&self, feed_url: &str, body: &[u8]) -> Result<FetchedFeed> {
        let feed = parser::parse(body).map_err(|e| DaruiError::FeedParse(e.to_string()))?;

        let title = feed
            .title
            .map(|t| decode_html_entities(&t.content).to_string())
            .unwrap_or_else(|| feed_url.to_string());

        let entries: Vec<Entry> = feed
            .entries
            .into_iter()
            .map(|entry| Entry {
                title: entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string())
                    .unwrap_or_default(),
                link: entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default(),
                published_at: entry
                    .published
                    .or(entry.updated)
                    .map(|dt| dt.with_timezone(&Utc)),
            })
            .collect();

        Ok(FetchedFeed { title, entries })
    }
}
