//! `StringList` and the load-or-fallback routine behind every provider.
use std::{fs, path::Path};

use rand::Rng;
use tracing::{debug, warn};

use crate::lib::errors::SourceUnavailable;

/// Ordered, non-empty list of non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringList(Vec<String>);

impl StringList {
    /// Validate parsed entries. Rejects an empty list and empty entries.
    pub fn new(entries: Vec<String>) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("array is empty".into());
        }
        if let Some(index) = entries.iter().position(|entry| entry.is_empty()) {
            return Err(format!("entry {index} is an empty string"));
        }
        Ok(Self(entries))
    }

    /// Build a list from a hardcoded fallback. `entries` must not be empty.
    pub fn from_static(entries: &[&str]) -> Self {
        Self(entries.iter().map(|entry| entry.to_string()).collect())
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|entry| entry == value)
    }

    /// Pick one entry uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }
}

/// Read `path` as a JSON array of strings.
pub fn try_load_list(path: &Path) -> Result<StringList, SourceUnavailable> {
    let raw = fs::read_to_string(path).map_err(|source| SourceUnavailable::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<String> =
        serde_json::from_str(&raw).map_err(|source| SourceUnavailable::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    StringList::new(entries).map_err(|message| SourceUnavailable::Empty {
        path: path.to_path_buf(),
        message,
    })
}

/// Load `path`, substituting `fallback` when the source is unavailable.
pub fn load_list(path: &Path, fallback: &[&str]) -> StringList {
    try_load_list(path)
        .inspect(|list| {
            debug!(
                target: "mcp_demo::providers",
                path = %path.display(),
                entries = list.len(),
                "Read string list"
            );
        })
        .unwrap_or_else(|err| {
            warn!(
                target: "mcp_demo::providers",
                path = %err.path().display(),
                reason = %err,
                fallback_entries = fallback.len(),
                "String list unavailable; using fallback"
            );
            StringList::from_static(fallback)
        })
}
