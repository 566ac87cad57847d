//! The two providers served by MCP Demo: rejection reasons and quotes.
use std::{path::PathBuf, sync::Arc};

use super::cache::StringListProvider;
use crate::server::config::DataSection;

pub const REASONS_KIND: &str = "reasons";
pub const QUOTES_KIND: &str = "quotes";

/// Used when `reasons.json` cannot be loaded.
pub const FALLBACK_REASONS: &[&str] = &[
    "I appreciate the thought, but I'll have to pass.",
    "That's not something I can commit to right now.",
    "I'm going to respectfully decline.",
    "My schedule doesn't allow for that.",
    "Not today, thanks for asking though!",
];

/// Used when `quotes.json` cannot be loaded.
pub const FALLBACK_QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
    "You are never too old to set another goal or to dream a new dream. - C.S. Lewis",
];

pub fn reason_provider(path: PathBuf) -> StringListProvider {
    StringListProvider::new(REASONS_KIND, path, FALLBACK_REASONS)
}

pub fn quote_provider(path: PathBuf) -> StringListProvider {
    StringListProvider::new(QUOTES_KIND, path, FALLBACK_QUOTES)
}

/// Reason and quote providers shared by every connection of a server process.
#[derive(Debug, Clone)]
pub struct ServerProviders {
    reasons: Arc<StringListProvider>,
    quotes: Arc<StringListProvider>,
}

impl ServerProviders {
    pub fn new(reasons: StringListProvider, quotes: StringListProvider) -> Self {
        Self {
            reasons: Arc::new(reasons),
            quotes: Arc::new(quotes),
        }
    }

    pub fn from_config(data: &DataSection) -> Self {
        Self::new(
            reason_provider(data.reasons_path.clone()),
            quote_provider(data.quotes_path.clone()),
        )
    }

    pub fn reasons(&self) -> &StringListProvider {
        &self.reasons
    }

    pub fn quotes(&self) -> &StringListProvider {
        &self.quotes
    }

    pub fn random_reason(&self) -> String {
        self.reasons.random_entry()
    }

    pub fn random_quote(&self) -> String {
        self.quotes.random_entry()
    }
}
