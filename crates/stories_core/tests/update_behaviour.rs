use std::sync::Once;

use pretty_assertions::assert_eq;
use stories_core::{
    update, AppState, Effect, FetchFailure, Msg, RequestId, Story, StoryId, API_ENDPOINT,
    DEFAULT_SEARCH_TERM, SEARCH_STORAGE_KEY,
};

const ENDPOINT: &str = "https://search.test/api?query=";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stories_logging::initialize_for_tests);
}

fn story(id: &str) -> Story {
    Story {
        id: StoryId::new(id),
        title: format!("Story {id}"),
        url: format!("https://example.com/{id}"),
        author: "dang".to_string(),
        num_comments: 0,
        points: 1,
    }
}

fn fetch_request(effects: &[Effect]) -> (RequestId, String) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchStories { request_id, url } => Some((*request_id, url.clone())),
            _ => None,
        })
        .expect("fetch effect")
}

fn type_and_submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::SearchInput(input.to_string()));
    update(state, Msg::SearchSubmitted)
}

#[test]
fn default_state_targets_public_endpoint_with_default_term() {
    let state = AppState::default();

    assert_eq!(state.search_term(), DEFAULT_SEARCH_TERM);
    assert_eq!(state.committed_url(), format!("{API_ENDPOINT}React"));
}

#[test]
fn started_fetches_restored_term() {
    init_logging();
    let state = AppState::new(ENDPOINT, "Redux");

    let (state, effects) = update(state, Msg::Started);

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            request_id: 1,
            url: format!("{ENDPOINT}Redux"),
        }]
    );
    assert_eq!(state.last_request_id(), 1);
}

#[test]
fn search_input_persists_but_does_not_fetch() {
    init_logging();
    let state = AppState::new(ENDPOINT, "React");

    let (mut state, effects) = update(state, Msg::SearchInput("Rust".to_string()));

    assert_eq!(
        effects,
        vec![Effect::PersistSearchTerm {
            key: SEARCH_STORAGE_KEY.to_string(),
            value: "Rust".to_string(),
        }]
    );
    assert_eq!(state.search_term(), "Rust");
    assert_eq!(state.committed_url(), format!("{ENDPOINT}React"));
    assert_eq!(state.last_request_id(), 0);
    assert!(state.consume_dirty());
}

#[test]
fn every_keystroke_is_persisted() {
    init_logging();
    let mut state = AppState::new(ENDPOINT, "");
    let mut persisted = Vec::new();

    for text in ["R", "Ru", "Rus", "Rust"] {
        let (next, effects) = update(state, Msg::SearchInput(text.to_string()));
        state = next;
        for effect in effects {
            match effect {
                Effect::PersistSearchTerm { value, .. } => persisted.push(value),
                Effect::FetchStories { .. } => panic!("typing must not fetch"),
            }
        }
    }

    assert_eq!(persisted, vec!["R", "Ru", "Rus", "Rust"]);
}

#[test]
fn submit_commits_encoded_url_and_emits_one_fetch() {
    init_logging();
    let state = AppState::new(ENDPOINT, "React");

    let (state, effects) = type_and_submit(state, "rust & c++");

    assert_eq!(effects.len(), 1);
    let (request_id, url) = fetch_request(&effects);
    assert_eq!(request_id, 1);
    assert_eq!(url, format!("{ENDPOINT}rust+%26+c%2B%2B"));
    assert_eq!(state.committed_url(), url);
}

#[test]
fn resubmitting_same_term_issues_new_request() {
    init_logging();
    let state = AppState::new(ENDPOINT, "React");

    let (state, first) = update(state, Msg::SearchSubmitted);
    let (state, second) = update(state, Msg::SearchSubmitted);

    let (first_id, first_url) = fetch_request(&first);
    let (second_id, second_url) = fetch_request(&second);
    assert_eq!(first_url, second_url);
    assert!(second_id > first_id);
    assert_eq!(state.last_request_id(), second_id);
}

#[test]
fn fetch_lifecycle_flows_through_reducer() {
    init_logging();
    let (state, effects) = update(AppState::new(ENDPOINT, "React"), Msg::Started);
    let (request_id, _) = fetch_request(&effects);

    let (state, _) = update(state, Msg::FetchStarted { request_id });
    let view = state.view();
    assert!(view.is_loading);
    assert!(!view.is_error);

    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id,
            stories: vec![story("1"), story("2")],
        },
    );
    let view = state.view();
    assert!(!view.is_loading);
    assert_eq!(view.story_count(), 2);
    assert!(state.consume_dirty());

    let (state, effects) = update(state, Msg::RemoveStory(story("1")));
    assert!(effects.is_empty());
    assert_eq!(state.view().stories, vec![story("2")]);
}

#[test]
fn failure_is_reported_with_reason() {
    init_logging();
    let (state, effects) = update(AppState::new(ENDPOINT, "React"), Msg::Started);
    let (request_id, _) = fetch_request(&effects);

    let (state, _) = update(state, Msg::FetchStarted { request_id });
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            request_id,
            failure: FetchFailure::HttpStatus(502),
        },
    );

    let view = state.view();
    assert!(view.is_error);
    assert!(!view.is_loading);
    assert_eq!(view.failure, Some(FetchFailure::HttpStatus(502)));
}

#[test]
fn stale_response_cannot_overwrite_newer_results() {
    init_logging();
    let state = AppState::new(ENDPOINT, "React");
    let (state, first) = type_and_submit(state, "old");
    let (state, second) = type_and_submit(state, "new");
    let (old_id, _) = fetch_request(&first);
    let (new_id, _) = fetch_request(&second);

    let (state, _) = update(state, Msg::FetchStarted { request_id: new_id });
    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: new_id,
            stories: vec![story("fresh")],
        },
    );
    assert!(state.consume_dirty());

    // The older request resolves last.
    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: old_id,
            stories: vec![story("stale")],
        },
    );
    assert!(!state.consume_dirty());

    let (state, _) = update(
        state,
        Msg::FetchFailed {
            request_id: old_id,
            failure: FetchFailure::Network,
        },
    );

    let view = state.view();
    assert_eq!(view.stories, vec![story("fresh")]);
    assert!(!view.is_error);
}

#[test]
fn stale_init_does_not_flip_loading() {
    init_logging();
    let state = AppState::new(ENDPOINT, "React");
    let (state, first) = update(state, Msg::SearchSubmitted);
    let (state, second) = update(state, Msg::SearchSubmitted);
    let (old_id, _) = fetch_request(&first);
    let (new_id, _) = fetch_request(&second);

    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: new_id,
            stories: vec![story("1")],
        },
    );
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::FetchStarted { request_id: old_id });

    assert!(!state.view().is_loading);
    assert!(!state.consume_dirty());
}

#[test]
fn loading_shows_as_soon_as_fetch_is_issued() {
    init_logging();
    let (mut state, _) = update(AppState::new(ENDPOINT, "React"), Msg::Started);
    assert!(state.view().is_loading);
    assert!(state.consume_dirty());

    let (state, effects) = update(
        state,
        Msg::FetchFailed {
            request_id: 1,
            failure: FetchFailure::Network,
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().is_error);

    let (state, _) = type_and_submit(state, "Rust");
    let view = state.view();
    assert!(view.is_loading);
    assert!(!view.is_error);
    assert_eq!(view.failure, None);
}

#[test]
fn tick_does_not_mark_dirty() {
    let (mut next, effects) = update(AppState::default(), Msg::Tick);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn input_after_submit_does_not_change_committed_url() {
    init_logging();
    let (state, effects) = type_and_submit(AppState::new(ENDPOINT, ""), "tokio");
    let (_, url) = fetch_request(&effects);

    let (state, _) = update(state, Msg::SearchInput("tokio-util".to_string()));

    assert_eq!(state.committed_url(), url);
    assert_eq!(state.view().search_term, "tokio-util");
}
