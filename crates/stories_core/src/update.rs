use stories_logging::{stories_debug, stories_info};

use crate::{AppState, Effect, Msg, RequestId, StoriesAction, SEARCH_STORAGE_KEY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![begin_fetch(&mut state)],
        Msg::SearchInput(text) => {
            state.set_search_term(text.clone());
            // Typing never fetches; it only keeps the stored term current.
            vec![Effect::PersistSearchTerm {
                key: SEARCH_STORAGE_KEY.to_string(),
                value: text,
            }]
        }
        Msg::SearchSubmitted => {
            state.commit_search();
            vec![begin_fetch(&mut state)]
        }
        Msg::RemoveStory(story) => {
            state.dispatch(StoriesAction::RemoveStory(story));
            Vec::new()
        }
        Msg::FetchStarted { request_id } => {
            apply_if_latest(&mut state, request_id, StoriesAction::FetchInit);
            Vec::new()
        }
        Msg::FetchSucceeded {
            request_id,
            stories,
        } => {
            apply_if_latest(&mut state, request_id, StoriesAction::FetchSuccess(stories));
            Vec::new()
        }
        Msg::FetchFailed {
            request_id,
            failure,
        } => {
            apply_if_latest(&mut state, request_id, StoriesAction::FetchFailure(failure));
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn begin_fetch(state: &mut AppState) -> Effect {
    let request_id = state.next_request();
    // Loading shows before the engine reports FetchStarted.
    state.dispatch(StoriesAction::FetchInit);
    let url = state.committed_url().to_string();
    stories_info!("FetchStories request_id={} url={}", request_id, url);
    Effect::FetchStories { request_id, url }
}

fn apply_if_latest(state: &mut AppState, request_id: RequestId, action: StoriesAction) {
    if !state.is_latest(request_id) {
        stories_debug!(
            "Dropping stale {} for request_id={} (latest={})",
            action.name(),
            request_id,
            state.last_request_id()
        );
        return;
    }
    state.dispatch(action);
}
