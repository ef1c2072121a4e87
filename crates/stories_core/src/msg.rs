use crate::{FetchFailure, RequestId, Story};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished startup; fetch the restored search term.
    Started,
    /// User edited the search box (full current text).
    SearchInput(String),
    /// User submitted the current search term.
    SearchSubmitted,
    /// User dismissed a story from the list.
    RemoveStory(Story),
    /// Engine is about to send the request.
    FetchStarted { request_id: RequestId },
    /// Engine decoded a page of hits.
    FetchSucceeded {
        request_id: RequestId,
        stories: Vec<Story>,
    },
    /// Engine gave up on the request.
    FetchFailed {
        request_id: RequestId,
        failure: FetchFailure,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
}
