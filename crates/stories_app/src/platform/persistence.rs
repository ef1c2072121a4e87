use std::path::Path;

use stories_core::{DEFAULT_SEARCH_TERM, SEARCH_STORAGE_KEY};
use stories_engine::{RonFileStore, StorageState};
use stories_logging::stories_info;

pub(crate) fn open_storage(state_dir: &Path) -> StorageState<RonFileStore> {
    let store = RonFileStore::new(state_dir);
    stories_info!("Using store {:?}", store.path());
    StorageState::new(store)
}

/// Search term from the last run, or the default when none was stored.
pub(crate) fn restore_search_term(storage: &StorageState<RonFileStore>) -> String {
    let term = storage.get(SEARCH_STORAGE_KEY, DEFAULT_SEARCH_TERM);
    stories_info!("Restored search term {:?}", term);
    term
}
