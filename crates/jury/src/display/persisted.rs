//! Display state whose collapse flags survive restarts.
//!
//! Only the collapse mapping is written to the store. Sort state lives in
//! memory for the current view.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::state::DisplayState;
use super::store::KeyValueStore;
use crate::error::Result;
use crate::sort::SortState;

/// Store key holding the JSON collapse mapping of poster sessions
pub const COLLAPSED_SESSIONS_KEY: &str = "jury.collapsedSessions";

pub struct PersistentDisplayState<S: KeyValueStore> {
    store: S,
    key: String,
    state: DisplayState,
}

impl<S: KeyValueStore> PersistentDisplayState<S> {
    /// Load the session collapse state from `store`
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, COLLAPSED_SESSIONS_KEY)
    }

    /// Load from `store` under a custom key.
    ///
    /// Missing, unreadable or unparsable content yields an empty mapping, so
    /// every bucket starts collapsed.
    pub fn load_with_key(store: S, key: &str) -> Self {
        let collapsed = match store.get(key) {
            Ok(Some(content)) => match serde_json::from_str::<HashMap<String, bool>>(&content) {
                Ok(map) => {
                    debug!("Loaded {} collapse flag(s) from {}", map.len(), key);
                    map
                }
                Err(e) => {
                    warn!("Ignoring corrupt display state under {}: {}", key, e);
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!("Failed to read display state under {}: {}", key, e);
                HashMap::new()
            }
        };

        Self {
            store,
            key: key.to_string(),
            state: DisplayState::from_collapsed(collapsed),
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn is_collapsed(&self, key: &str) -> bool {
        self.state.is_collapsed(key)
    }

    /// Flip and persist a bucket's collapse flag, returning the new value
    pub fn toggle(&mut self, key: &str) -> Result<bool> {
        let collapsed = self.state.toggle(key);
        self.save()?;
        Ok(collapsed)
    }

    pub fn set_collapsed(&mut self, key: &str, collapsed: bool) -> Result<()> {
        self.state.set_collapsed(key, collapsed);
        self.save()
    }

    pub fn sort(&self, key: &str) -> Option<SortState> {
        self.state.sort(key)
    }

    pub fn set_sort(&mut self, key: &str, column: &str) -> Option<SortState> {
        self.state.set_sort(key, column)
    }

    fn save(&mut self) -> Result<()> {
        let content = serde_json::to_string(self.state.collapsed())?;
        self.store.set(&self.key, &content)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::store::{FileStore, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_toggle_unseen_session_expands_and_persists() {
        let mut persisted = PersistentDisplayState::load(MemoryStore::new());
        assert!(persisted.is_collapsed("Monday"));

        assert!(!persisted.toggle("Monday").unwrap());

        let store = persisted.into_store();
        let raw = store.get(COLLAPSED_SESSIONS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"Monday":false}"#);

        let reloaded = PersistentDisplayState::load(store);
        assert!(!reloaded.is_collapsed("Monday"));
        assert!(reloaded.is_collapsed("Tuesday"));
    }

    #[test]
    fn test_corrupt_state_falls_back_to_collapsed() {
        let mut store = MemoryStore::new();
        store.set(COLLAPSED_SESSIONS_KEY, "{\"Monday\": fal").unwrap();

        let persisted = PersistentDisplayState::load(store);
        assert!(persisted.is_collapsed("Monday"));
        assert!(persisted.state().collapsed().is_empty());
    }

    #[test]
    fn test_wrong_shape_falls_back_to_collapsed() {
        let mut store = MemoryStore::new();
        store.set(COLLAPSED_SESSIONS_KEY, "[1, 2, 3]").unwrap();

        let persisted = PersistentDisplayState::load(store);
        assert!(persisted.state().collapsed().is_empty());
    }

    #[test]
    fn test_sort_is_not_persisted() {
        let mut persisted = PersistentDisplayState::load(MemoryStore::new());
        persisted.toggle("Tuesday").unwrap();
        assert!(persisted.set_sort("Tuesday", "Poster_Title").is_some());

        let reloaded = PersistentDisplayState::load(persisted.into_store());
        assert_eq!(reloaded.sort("Tuesday"), None);
        assert!(!reloaded.is_collapsed("Tuesday"));
    }

    #[test]
    fn test_file_backed_roundtrip() {
        let dir = TempDir::new().unwrap();

        let mut persisted = PersistentDisplayState::load(FileStore::in_dir(dir.path()));
        persisted.toggle("Wednesday").unwrap();
        persisted.set_collapsed("Thursday", false).unwrap();

        let reloaded = PersistentDisplayState::load(FileStore::in_dir(dir.path()));
        assert!(!reloaded.is_collapsed("Wednesday"));
        assert!(!reloaded.is_collapsed("Thursday"));
        assert!(reloaded.is_collapsed("Monday"));
    }
}
