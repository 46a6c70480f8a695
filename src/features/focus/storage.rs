//! Tracker state persistence.
//!
//! The whole [`TrackerState`] is one JSON blob under a fixed key. A missing,
//! unreadable, or corrupt blob loads as the empty default.

use super::tracker::TrackerState;
use crate::error::FocusError;
use crate::storage::KeyValueStore;

/// Key the tracker blob is stored under.
pub const STATE_KEY: &str = "focusWaveData_v1";

/// Loads and saves tracker state through a key-value store.
pub struct TrackerStore<S> {
    store: S,
}

impl<S: KeyValueStore> TrackerStore<S> {
    /// Wrap a key-value store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted state, falling back to the empty default.
    pub fn load(&self) -> TrackerState {
        let raw = match self.store.load(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return TrackerState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read tracker state, starting empty");
                return TrackerState::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "corrupt tracker state, starting empty");
                TrackerState::default()
            }
        }
    }

    /// Persist `state`, replacing what was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying store fails.
    pub fn save(&self, state: &TrackerState) -> Result<(), FocusError> {
        let blob = serde_json::to_string(state)?;
        self.store.save(STATE_KEY, &blob)?;
        tracing::debug!(
            records = state.sessions.len(),
            streak = state.streak,
            "tracker state saved"
        );
        Ok(())
    }

    #[cfg(test)]
    pub(crate) const fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::tracker::record_completion;
    use crate::storage::{Database, MemoryStore};
    use chrono::NaiveDate;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, FocusError> {
            Err(FocusError::Database("disk on fire".to_string()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), FocusError> {
            Err(FocusError::Database("disk on fire".to_string()))
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_missing_state_is_default() {
        let store = TrackerStore::new(MemoryStore::new());
        assert_eq!(store.load(), TrackerState::default());
    }

    #[test]
    fn test_corrupt_state_is_default() {
        for blob in ["not json", "[]", r#"{"sessions": 5}"#, ""] {
            let store = TrackerStore::new(MemoryStore::with_entry(STATE_KEY, blob));
            assert_eq!(store.load(), TrackerState::default(), "blob: {blob:?}");
        }
    }

    #[test]
    fn test_unreadable_store_is_default() {
        let store = TrackerStore::new(BrokenStore);
        assert_eq!(store.load(), TrackerState::default());
        assert!(store.save(&TrackerState::default()).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let store = TrackerStore::new(MemoryStore::new());
        let state = record_completion(25.0, date(), TrackerState::default());

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_reads_camel_case_blob() {
        let blob = r#"{"sessions":[{"date":"2024-01-01","minutes":35}],"streak":2,"lastFocusDate":"2024-01-01"}"#;
        let store = TrackerStore::new(MemoryStore::with_entry(STATE_KEY, blob));

        let state = store.load();
        assert_eq!(state.streak, 2);
        assert_eq!(state.last_focus_date, Some(date()));
        assert!((state.sessions[0].minutes - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sqlite_backed_store() {
        let store = TrackerStore::new(Database::open_in_memory().unwrap());
        let state = record_completion(10.0, date(), TrackerState::default());

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
        assert!(store.inner().load(STATE_KEY).unwrap().is_some());
    }
}
