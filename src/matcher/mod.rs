//! Title matching against a feed's compiled rule.

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::domain::{FetchedFeed, MatchRecord, ResultSet};

/// Scan a fetched feed and record every entry whose title matches.
///
/// The search is unanchored: a hit anywhere in the title counts. When
/// `since` is given, entries with a known publication date earlier than it
/// are skipped; undated entries always pass. The current pass never sets
/// `since` (every run re-reports all matching entries), but the hook is
/// here so last-checked filtering can be wired in without reshaping the
/// matcher.
pub fn scan(
    feed: &FetchedFeed,
    pattern: &Regex,
    since: Option<DateTime<Utc>>,
    results: &mut ResultSet,
) {
    for entry in &feed.entries {
        if let (Some(cutoff), Some(published)) = (since, entry.published_at) {
            if published < cutoff {
                continue;
            }
        }

        if pattern.is_match(&entry.title) {
            results.push(
                &feed.title,
                MatchRecord {
                    title: entry.title.clone(),
                    link: entry.link.clone(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::Entry;
    use crate::rules;

    fn entry(title: &str, link: &str) -> Entry {
        Entry {
            title: title.into(),
            link: link.into(),
            published_at: None,
        }
    }

    fn feed(title: &str, entries: Vec<Entry>) -> FetchedFeed {
        FetchedFeed {
            title: title.into(),
            entries,
        }
    }

    #[test]
    fn test_scan_records_only_matching_titles() {
        let pattern = rules::compile(&["rust".to_string()]).unwrap();
        let feed = feed(
            "Tech News",
            vec![
                entry("Rust 2.0 announced", "http://x/1"),
                entry("Nothing to see", "http://x/2"),
            ],
        );

        let mut results = ResultSet::new();
        scan(&feed, &pattern, None, &mut results);

        assert_eq!(results.groups().len(), 1);
        assert_eq!(results.groups()[0].feed_title, "Tech News");
        assert_eq!(
            results.groups()[0].records,
            vec![MatchRecord {
                title: "Rust 2.0 announced".into(),
                link: "http://x/1".into(),
            }]
        );
    }

    #[test]
    fn test_scan_groups_feeds_in_processing_order() {
        let pattern = rules::compile(&["news".to_string()]).unwrap();
        let first = feed("A", vec![entry("news from a", "http://a/1")]);
        let second = feed("B", vec![entry("news from b", "http://b/1")]);

        let mut results = ResultSet::new();
        scan(&first, &pattern, None, &mut results);
        scan(&second, &pattern, None, &mut results);

        let titles: Vec<_> = results.groups().iter().map(|g| g.feed_title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_scan_on_no_matches_leaves_results_empty() {
        let pattern = rules::compile(&["absent".to_string()]).unwrap();
        let feed = feed("A", vec![entry("something else", "http://a/1")]);

        let mut results = ResultSet::new();
        scan(&feed, &pattern, None, &mut results);

        assert!(results.is_empty());
    }

    #[test]
    fn test_scan_since_skips_older_entries() {
        let pattern = rules::compile(&["news".to_string()]).unwrap();
        let cutoff = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let mut old = entry("old news", "http://a/1");
        old.published_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut fresh = entry("fresh news", "http://a/2");
        fresh.published_at = Some(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());

        let feed = feed("A", vec![old, fresh]);
        let mut results = ResultSet::new();
        scan(&feed, &pattern, Some(cutoff), &mut results);

        assert_eq!(results.groups()[0].records.len(), 1);
        assert_eq!(results.groups()[0].records[0].title, "fresh news");
    }

    #[test]
    fn test_scan_since_keeps_undated_entries() {
        let pattern = rules::compile(&["news".to_string()]).unwrap();
        let cutoff = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let feed = feed("A", vec![entry("undated news", "http://a/1")]);

        let mut results = ResultSet::new();
        scan(&feed, &pattern, Some(cutoff), &mut results);

        assert_eq!(results.groups()[0].records.len(), 1);
    }
}
