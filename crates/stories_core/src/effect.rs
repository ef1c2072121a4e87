use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the search term to durable storage.
    PersistSearchTerm { key: String, value: String },
    /// Issue exactly one GET for the committed URL.
    FetchStories { request_id: RequestId, url: String },
}
