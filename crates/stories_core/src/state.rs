use url::form_urlencoded;

use crate::view_model::AppViewModel;
use crate::{stories_reducer, StoriesAction, StoriesState};

/// Base of the public Hacker News search endpoint; the query is appended.
pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";
/// Search term used when nothing usable is stored.
pub const DEFAULT_SEARCH_TERM: &str = "React";
/// Storage slot holding the search term.
pub const SEARCH_STORAGE_KEY: &str = "search";

pub type RequestId = u64;

/// Appends the url-encoded search term to the endpoint base.
pub fn build_search_url(endpoint: &str, search_term: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(search_term.as_bytes()).collect();
    format!("{endpoint}{encoded}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    endpoint: String,
    search_term: String,
    committed_url: String,
    stories: StoriesState,
    last_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(API_ENDPOINT, DEFAULT_SEARCH_TERM)
    }
}

impl AppState {
    /// Starts from a restored search term; the committed URL is derived from it once.
    pub fn new(endpoint: impl Into<String>, search_term: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let search_term = search_term.into();
        let committed_url = build_search_url(&endpoint, &search_term);
        Self {
            endpoint,
            search_term,
            committed_url,
            stories: StoriesState::new(),
            last_request_id: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_term: self.search_term.clone(),
            stories: self.stories.items.clone(),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            failure: self.stories.failure,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn committed_url(&self) -> &str {
        &self.committed_url
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    /// Id of the most recently issued request, or 0 before the first one.
    pub fn last_request_id(&self) -> RequestId {
        self.last_request_id
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.search_term != term {
            self.search_term = term;
            self.dirty = true;
        }
    }

    pub(crate) fn commit_search(&mut self) {
        self.committed_url = build_search_url(&self.endpoint, &self.search_term);
    }

    pub(crate) fn next_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    pub(crate) fn is_latest(&self, request_id: RequestId) -> bool {
        request_id == self.last_request_id
    }

    pub(crate) fn dispatch(&mut self, action: StoriesAction) {
        let before = std::mem::take(&mut self.stories);
        let after = stories_reducer(before, action);
        self.stories = after;
        self.dirty = true;
    }
}
