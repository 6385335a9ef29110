//! Company lookup through the Google Custom Search JSON API.

pub(crate) mod client;
pub(crate) mod flatten;
pub(crate) mod types;

pub use client::{GoogleSearchClient, SearchError, WebSearch};
pub use flatten::flatten_results;
pub use types::SearchResultItem;
