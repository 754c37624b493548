//! Last-checked timestamp persistence.
//!
//! One plain-text file per invoking user, holding a single floating-point
//! Unix timestamp. The store is a best-effort cache: it records when the
//! last pass completed but does not yet gate which entries are reported.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

const FILE_SUFFIX: &str = ".darui";

/// Outcome of reading the checkpoint file.
///
/// A missing file (first run) and an unreadable or unparsable one are
/// distinguished so callers can log the difference; both fall back to the
/// unset default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Loaded {
    Timestamp(f64),
    Missing,
    Corrupt,
}

impl Loaded {
    /// The loaded value, or 0.0 when missing or corrupt.
    pub fn timestamp(self) -> f64 {
        match self {
            Loaded::Timestamp(ts) => ts,
            Loaded::Missing | Loaded::Corrupt => 0.0,
        }
    }

    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        match self {
            Loaded::Timestamp(ts) => {
                let secs = ts.trunc() as i64;
                let nanos = (ts.fract() * 1e9) as u32;
                DateTime::from_timestamp(secs, nanos)
            }
            Loaded::Missing | Loaded::Corrupt => None,
        }
    }
}

/// Persists the time of the last completed pass for one user.
///
/// Constructed explicitly with a base directory so callers (and tests)
/// control where state lives; nothing here is process-global.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    /// Store for `user` under `base_dir`: `<base_dir>/<user>.darui`.
    pub fn new<P: AsRef<Path>>(base_dir: P, user: &str) -> Self {
        Self {
            path: base_dir.as_ref().join(format!("{user}{FILE_SUFFIX}")),
        }
    }

    /// Store for the invoking user under the shared temporary directory.
    pub fn for_current_user() -> Self {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        Self::new(std::env::temp_dir(), &user)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted timestamp. Never fails the run.
    pub fn load(&self) -> Loaded {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Loaded::Missing,
            Err(_) => return Loaded::Corrupt,
        };

        match contents.trim().parse::<f64>() {
            Ok(ts) => Loaded::Timestamp(ts),
            Err(_) => Loaded::Corrupt,
        }
    }

    /// Overwrite the file with `timestamp`.
    pub fn save(&self, timestamp: f64) -> io::Result<()> {
        fs::write(&self.path, format!("{timestamp}"))
    }
}
