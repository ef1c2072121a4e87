use std::time::Duration;

pub const APP_TITLE: &str = "My Hacker Stories";
pub const SEARCH_LABEL: &str = "Search: ";
pub const LOADING_TEXT: &str = "Loading ...";
pub const ERROR_TEXT: &str = "Something went wrong ...";
pub const DISMISS_LABEL: &str = "Dismiss";
pub const LIST_HEADERS: [&str; 5] = ["Title", "Author", "Comments", "Points", "Action"];
pub const SEARCH_HINT: &str = "Enter: search | Tab: list | Esc: quit";
pub const LIST_HINT: &str = "Up/Down: select | d/Del: dismiss | Tab or /: search | q: quit";
pub const TICK_RATE: Duration = Duration::from_millis(75);
