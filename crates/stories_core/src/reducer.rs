use std::fmt;

use crate::Story;

/// Why the last fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// Transport-level problem: connect, timeout, redirect loop, oversize body.
    Network,
    /// The server answered with a non-success status.
    HttpStatus(u16),
    /// The body was not the expected JSON.
    Decode,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network => write!(f, "network error"),
            FetchFailure::HttpStatus(code) => write!(f, "http status {code}"),
            FetchFailure::Decode => write!(f, "malformed response"),
        }
    }
}

/// Fetch lifecycle of the story list.
///
/// `is_loading` and `is_error` are never both set, and `failure` is `Some`
/// exactly when `is_error` is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub items: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
    pub failure: Option<FetchFailure>,
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A request was issued.
    FetchInit,
    /// The request resolved; replaces the whole list.
    FetchSuccess(Vec<Story>),
    /// The request failed; the previous list stays visible.
    FetchFailure(FetchFailure),
    /// User dismissed a story.
    RemoveStory(Story),
}

impl StoriesAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoriesAction::FetchInit => "STORIES_FETCH_INIT",
            StoriesAction::FetchSuccess(_) => "STORIES_FETCH_SUCCESS",
            StoriesAction::FetchFailure(_) => "STORIES_FETCH_FAILURE",
            StoriesAction::RemoveStory(_) => "REMOVE_STORY",
        }
    }
}

/// Pure reducer for the story list.
///
/// No catch-all arm: a new action kind does not compile until it is handled here.
pub fn stories_reducer(state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            is_loading: true,
            is_error: false,
            failure: None,
            ..state
        },
        StoriesAction::FetchSuccess(items) => StoriesState {
            items,
            is_loading: false,
            is_error: false,
            failure: None,
        },
        StoriesAction::FetchFailure(reason) => StoriesState {
            is_loading: false,
            is_error: true,
            failure: Some(reason),
            ..state
        },
        StoriesAction::RemoveStory(target) => {
            let mut state = state;
            state.items.retain(|story| story.id != target.id);
            state
        }
    }
}
