use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::{AppContext, Result};
use crate::checkpoint::Loaded;
use crate::domain::ResultSet;
use crate::{matcher, report, rules};

/// Run one full pass: scan every configured feed, then deliver the report.
pub async fn run(ctx: &AppContext, print: bool, no_email: bool) -> Result<()> {
    let last = ctx.checkpoint.load();
    if let Some(at) = last.to_datetime() {
        tracing::debug!("last pass recorded at {}", at);
    } else if last == Loaded::Corrupt {
        tracing::debug!(
            "ignoring unreadable checkpoint at {}",
            ctx.checkpoint.path().display()
        );
    }

    let results = scan_feeds(ctx).await;
    let report = report::render(&results);

    // Recorded whether or not anything matched; a failed save only costs
    // the next run's filtering opportunity.
    if let Err(e) = ctx.checkpoint.save(unix_now()) {
        tracing::debug!(
            "could not record pass time at {}: {}",
            ctx.checkpoint.path().display(),
            e
        );
    }

    if print {
        print!("{report}");
    }

    if !no_email && !report.is_empty() {
        ctx.mailer.send(&report)?;
    }

    Ok(())
}

/// Scan all configured feeds sequentially.
///
/// A failing feed is logged and skipped; it never takes the rest of the
/// run down with it.
pub async fn scan_feeds(ctx: &AppContext) -> ResultSet {
    let mut results = ResultSet::new();

    for feed in &ctx.config.feeds {
        if let Err(e) = scan_feed(ctx, &feed.rss, &feed.rules, &mut results).await {
            tracing::warn!("skipping feed {}: {}", feed.rss, e);
        }
    }

    results
}

async fn scan_feed(
    ctx: &AppContext,
    url: &str,
    rule_list: &[String],
    results: &mut ResultSet,
) -> Result<()> {
    let pattern = rules::compile(rule_list)?;
    let body = ctx.fetcher.fetch(url).await?;
    let fetched = ctx.normalizer.normalize(url, &body)?;

    tracing::debug!("{}: {} entries fetched", fetched.title, fetched.entries.len());
    matcher::scan(&fetched, &pattern, None, results);
    Ok(())
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
