/// A single matched entry, as it will appear in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub title: String,
    pub link: String,
}

/// All matches recorded for one feed, keyed by the feed's display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMatches {
    pub feed_title: String,
    pub records: Vec<MatchRecord>,
}

/// Matches accumulated over one pass, grouped by feed.
///
/// Groups appear in feed-processing order, records in fetched entry order.
/// Duplicates are kept: overlapping rules may legitimately record the same
/// entry more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    groups: Vec<FeedMatches>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under `feed_title`, creating the group on first use.
    pub fn push(&mut self, feed_title: &str, record: MatchRecord) {
        match self.groups.iter_mut().find(|g| g.feed_title == feed_title) {
            Some(group) => group.records.push(record),
            None => self.groups.push(FeedMatches {
                feed_title: feed_title.to_string(),
                records: vec![record],
            }),
        }
    }

    pub fn groups(&self) -> &[FeedMatches] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
