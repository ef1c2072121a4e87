//! Hacker Stories core: pure state machine, story reducer and view-model helpers.
mod effect;
mod msg;
mod reducer;
mod state;
mod story;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use reducer::{stories_reducer, FetchFailure, StoriesAction, StoriesState};
pub use state::{
    build_search_url, AppState, RequestId, API_ENDPOINT, DEFAULT_SEARCH_TERM, SEARCH_STORAGE_KEY,
};
pub use story::{Story, StoryId};
pub use update::update;
pub use view_model::AppViewModel;
