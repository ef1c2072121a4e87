use crate::{FetchFailure, Story};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    pub stories: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
    pub failure: Option<FetchFailure>,
}

impl AppViewModel {
    pub fn story_count(&self) -> usize {
        self.stories.len()
    }
}
