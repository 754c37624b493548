use chrono::{DateTime, Utc};

/// One item from a fetched feed.
///
/// Titles and links are plain strings; an entry missing either normalizes
/// to the empty string rather than an absent value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// A feed as fetched and parsed: its display title plus entries, in
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedFeed {
    pub title: String,
    pub entries: Vec<Entry>,
}
