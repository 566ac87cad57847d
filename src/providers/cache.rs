//! Lazily loaded, never invalidated string list per provider.
use std::{path::PathBuf, sync::{Arc, OnceLock}};

use rand::Rng;
use tracing::info;

use super::list::{load_list, StringList};

/// Provider of one category of random text backed by a JSON file.
///
/// The list is read on first access and shared for the lifetime of the
/// provider. `OnceLock` keeps the read to a single execution even when
/// several tool calls race for the first access.
#[derive(Debug)]
pub struct StringListProvider {
    kind: &'static str,
    path: PathBuf,
    fallback: &'static [&'static str],
    cache: OnceLock<Arc<StringList>>,
}

impl StringListProvider {
    pub fn new(kind: &'static str, path: PathBuf, fallback: &'static [&'static str]) -> Self {
        Self {
            kind,
            path,
            fallback,
            cache: OnceLock::new(),
        }
    }

    pub fn fallback(&self) -> StringList {
        StringList::from_static(self.fallback)
    }

    /// Read the backing file without touching the cache.
    pub fn load_list(&self) -> StringList {
        load_list(&self.path, self.fallback)
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Cached list, loading it on the first call.
    pub fn list(&self) -> Arc<StringList> {
        Arc::clone(self.cache.get_or_init(|| {
            let list = self.load_list();
            info!(
                target: "mcp_demo::providers",
                kind = self.kind,
                path = %self.path.display(),
                entries = list.len(),
                "Cached string list"
            );
            Arc::new(list)
        }))
    }

    pub fn random_entry(&self) -> String {
        self.random_entry_with(&mut rand::thread_rng())
    }

    pub fn random_entry_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.list().choose(rng).to_string()
    }
}
