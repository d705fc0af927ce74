//! Disk-backed memoization for reference/block data.
//!
//! One file per (ticker, field, options) key, trusted unconditionally on
//! every hit. This layer never invalidates or expires entries; staleness
//! is the caller's problem. The cache directory is not locked, so
//! concurrent callers sharing a key can race.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use lazy_static::lazy_static;

use crate::errors::BlpError;
use crate::models::{Overrides, Table};

/// Environment variable naming the cache root directory.
pub const ROOT_ENV: &str = "BLPX_ROOT";

lazy_static! {
    /// Cache root from the environment, resolved once per process.
    static ref ENV_ROOT: Option<PathBuf> = std::env::var_os(ROOT_ENV).map(PathBuf::from);
}

/// Cache-path resolver and table store.
///
/// Without a root directory every lookup misses and nothing is written,
/// so callers can hold a `RefCache` unconditionally.
#[derive(Clone, Debug, Default)]
pub struct RefCache {
    root: Option<PathBuf>,
}

impl RefCache {
    /// A cache rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// A cache rooted at `BLPX_ROOT`, disabled when the variable is unset.
    pub fn from_env() -> Self {
        Self {
            root: ENV_ROOT.clone(),
        }
    }

    /// A cache that never hits and never writes.
    pub fn disabled() -> Self {
        Self { root: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.root.is_some()
    }

    /// Deterministic path for one (ticker, field, options) key, or `None`
    /// when caching is disabled.
    ///
    /// Layout: `<root>/<asset class>/<ticker>/<field>/<descriptor>.<ext>`,
    /// where the asset class is the last whitespace-separated token of the
    /// ticker and the descriptor encodes the as-of date (when `has_date`)
    /// and the override set, `ovrd=None` when empty.
    pub fn ref_path(
        &self,
        ticker: &str,
        field: &str,
        ext: &str,
        has_date: bool,
        overrides: &Overrides,
    ) -> Option<PathBuf> {
        let root = self.root.as_ref()?;
        let asset_class = ticker.split_whitespace().last().unwrap_or(ticker);
        let proper_ticker = ticker.replace('/', "_");

        let mut parts: Vec<String> = Vec::new();
        if has_date {
            parts.push(format!("asof={}", Local::now().format("%Y-%m-%d")));
        }
        if overrides.is_empty() {
            parts.push("ovrd=None".to_string());
        } else {
            parts.extend(
                overrides
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value)),
            );
        }

        Some(
            root.join(asset_class)
                .join(proper_ticker)
                .join(field)
                .join(format!("{}.{}", parts.join(", "), ext)),
        )
    }

    /// Deserialize a cached table.
    pub fn load(&self, path: &Path) -> Result<Table, BlpError> {
        let file = fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Persist a table, creating parent directories as needed.
    pub fn store(&self, path: &Path, table: &Table) -> Result<(), BlpError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        Ok(serde_json::to_writer(file, table)?)
    }
}
