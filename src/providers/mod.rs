//! JSON-backed random text providers with a load-once cache and fallback lists.
pub mod cache;
pub mod catalog;
pub mod list;

pub use cache::StringListProvider;
pub use catalog::{
    quote_provider, reason_provider, ServerProviders, FALLBACK_QUOTES, FALLBACK_REASONS,
    QUOTES_KIND, REASONS_KIND,
};
pub use list::{load_list, try_load_list, StringList};
