//! Movie backend access

pub mod api;
pub mod types;

pub use api::{SearchClient, SearchError};
pub use types::SearchResult;
