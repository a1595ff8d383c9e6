use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{KeyValueStore, LocalStore, StorageError};

/// Keeps in-progress form values across reloads.
///
/// Nothing here is allowed to break the form: unreadable or corrupt drafts
/// restore as the empty draft, and failed writes are only logged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftStore<S> {
    storage: S,
}

impl DraftStore<LocalStore> {
    pub fn browser() -> Self {
        Self::new(LocalStore)
    }
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn restore<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.storage.read(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding unreadable draft {}: {}", key, e);
                T::default()
            }
        }
    }

    pub fn persist<T: Serialize>(&self, key: &str, draft: &T) {
        if let Err(e) = self.try_persist(key, draft) {
            warn!("Draft {} not saved: {}", key, e);
        }
    }

    fn try_persist<T: Serialize>(&self, key: &str, draft: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(draft).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.write(key, &raw)
    }

    pub fn clear(&self, key: &str) {
        self.storage.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::ContactDraft;
    use crate::storage::memory::MemoryStore;

    const KEY: &str = "contact_form_data";

    #[test]
    fn missing_draft_restores_empty() {
        let store = DraftStore::new(MemoryStore::new());
        assert_eq!(store.restore::<ContactDraft>(KEY), ContactDraft::default());
    }

    #[test]
    fn corrupt_draft_restores_empty() {
        let store = DraftStore::new(MemoryStore::new().with_item(KEY, "{not json"));
        assert_eq!(store.restore::<ContactDraft>(KEY), ContactDraft::default());

        let store = DraftStore::new(MemoryStore::new().with_item(KEY, "[1, 2, 3]"));
        assert_eq!(store.restore::<ContactDraft>(KEY), ContactDraft::default());
    }

    #[test]
    fn persisted_draft_round_trips() {
        let store = DraftStore::new(MemoryStore::new());
        let draft = ContactDraft {
            email: "jane@biz.com".into(),
            ..ContactDraft::default()
        };
        store.persist(KEY, &draft);
        assert_eq!(store.restore::<ContactDraft>(KEY), draft);
    }

    #[test]
    fn partial_draft_is_merged_over_defaults() {
        let store = DraftStore::new(MemoryStore::new().with_item(KEY, r#"{"name":"Jane"}"#));
        let draft: ContactDraft = store.restore(KEY);
        assert_eq!(draft.name, "Jane");
        assert_eq!(draft.project_type, ContactDraft::default().project_type);
    }

    #[test]
    fn rejected_write_is_swallowed() {
        let store = DraftStore::new(MemoryStore::rejecting_writes());
        store.persist(KEY, &ContactDraft::default());
        assert_eq!(store.restore::<ContactDraft>(KEY), ContactDraft::default());
    }

    #[test]
    fn clear_removes_the_key() {
        let memory = MemoryStore::new();
        let store = DraftStore::new(&memory);
        store.persist(KEY, &ContactDraft::default());
        assert!(memory.contains(KEY));
        store.clear(KEY);
        assert!(!memory.contains(KEY));
    }
}
