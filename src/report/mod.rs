//! Report rendering.

use crate::domain::ResultSet;

/// Render the accumulated matches as a multi-line report.
///
/// Pure function of the result set: the same input renders byte-for-byte
/// the same string, and an empty set renders the empty string. Each feed
/// block is the feed title, one `:: title [link]` line per match, then a
/// blank line.
pub fn render(results: &ResultSet) -> String {
    let mut report = String::new();

    for group in results.groups() {
        report.push_str(&group.feed_title);
        report.push('\n');
        for record in &group.records {
            report.push_str(":: ");
            report.push_str(&record.title);
            report.push_str(" [");
            report.push_str(&record.link);
            report.push_str("]\n");
        }
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchRecord;

    #[test]
    fn test_empty_result_set_renders_empty_string() {
        assert_eq!(render(&ResultSet::new()), "");
    }

    #[test]
    fn test_single_match_format() {
        let mut results = ResultSet::new();
        results.push(
            "Tech News",
            MatchRecord {
                title: "Widget v2 released".into(),
                link: "http://x/1".into(),
            },
        );

        assert_eq!(render(&results), "Tech News\n:: Widget v2 released [http://x/1]\n\n");
    }

    #[test]
    fn test_feeds_render_as_separate_blocks_in_order() {
        let mut results = ResultSet::new();
        results.push(
            "A",
            MatchRecord {
                title: "a1".into(),
                link: "http://a/1".into(),
            },
        );
        results.push(
            "A",
            MatchRecord {
                title: "a2".into(),
                link: "http://a/2".into(),
            },
        );
        results.push(
            "B",
            MatchRecord {
                title: "b1".into(),
                link: "http://b/1".into(),
            },
        );

        assert_eq!(
            render(&results),
            "A\n:: a1 [http://a/1]\n:: a2 [http://a/2]\n\nB\n:: b1 [http://b/1]\n\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut results = ResultSet::new();
        results.push(
            "A",
            MatchRecord {
                title: "a1".into(),
                link: "http://a/1".into(),
            },
        );

        assert_eq!(render(&results), render(&results));
    }
}
