//! # darui
//!
//! A small RSS watcher: fetch configured feeds, match entry titles against
//! per-feed regular-expression rules, and mail (or print) a report of the
//! matches.
//!
//! One invocation is one pass:
//!
//! ```text
//! Config → Fetcher → Normalizer → Matcher → ResultSet → Report → Delivery
//! ```
//!
//! Feeds are processed sequentially and fail independently: a broken rule
//! or unreachable host degrades the report instead of killing the run. A
//! per-user checkpoint file records when the last pass completed.

/// Application error type and the [`AppContext`](app::AppContext) struct
/// that wires the collaborators together.
pub mod app;

/// Last-checked timestamp persistence, one plain-text file per user.
pub mod checkpoint;

/// Command-line surface and the single-pass orchestration.
pub mod cli;

/// Configuration model, `darui.json` discovery, and load-time validation.
pub mod config;

/// SMTP delivery of the rendered report.
pub mod delivery;

/// Core domain models: fetched entries and the accumulated result set.
pub mod domain;

/// Feed fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for fetching a feed document
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Title matching against a feed's compiled rule.
pub mod matcher;

/// Feed parsing: raw bytes into a display title plus entries.
pub mod normalizer;

/// Report rendering.
pub mod report;

/// Per-feed rule compilation.
pub mod rules;
