//! Configuration loading and validation.
//!
//! `darui.json` is searched for in (1) the path given on the command line,
//! (2) `$XDG_CONFIG_HOME/darui.json`, (3) next to the executable; the
//! first candidate that exists and parses wins. The schema is validated at
//! load time so a bad config fails before any feed is fetched.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE: &str = "darui.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub feeds: Vec<FeedSpec>,
    pub email: EmailConfig,
}

/// One configured feed: its URL and the regular-expression fragments
/// matched against entry titles.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSpec {
    pub rss: String,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub from: String,
    pub to: String,
    /// SMTP host of the local transport.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

impl Config {
    /// Search the standard locations and load the first usable file.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        Self::discover_in(explicit, xdg.as_deref(), exe_dir.as_deref())
    }

    fn discover_in(
        explicit: Option<&Path>,
        xdg: Option<&Path>,
        exe_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(path) = explicit {
            candidates.push(path.to_path_buf());
        }
        if let Some(xdg) = xdg {
            candidates.push(xdg.join(CONFIG_FILE));
        }
        if let Some(dir) = exe_dir {
            candidates.push(dir.join(CONFIG_FILE));
        }

        for candidate in &candidates {
            if !candidate.is_file() {
                continue;
            }
            match Self::load(candidate) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("unusable configuration at {}: {}", candidate.display(), e);
                }
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Load and validate a single configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    // An empty rules list is legal here; it surfaces as a feed-local error
    // when the feed's pattern is compiled.
    fn validate(&self) -> Result<(), ConfigError> {
        for feed in &self.feeds {
            url::Url::parse(&feed.rss).map_err(|source| ConfigError::InvalidFeedUrl {
                url: feed.rss.clone(),
                source,
            })?;
        }

        if self.email.from.is_empty() {
            return Err(ConfigError::MissingField("email.from"));
        }
        if self.email.to.is_empty() {
            return Err(ConfigError::MissingField("email.to"));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no usable configuration file found")]
    NotFound,

    #[error("failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid feed url {url}: {source}")]
    InvalidFeedUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("missing required configuration value: {0}")]
    MissingField(&'static str),
}
