use super::*;
use crate::util::storage::MemoryStorage;

/// Storage that can be told to fail reads or writes.
#[derive(Debug, Clone, Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    fail_reads: bool,
    fail_writes: bool,
}

impl TokenStorage for FlakyStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read("quota".to_owned()));
        }
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota".to_owned()));
        }
        self.inner.write(key, value)
    }
}

fn stored(storage: &MemoryStorage) -> Option<String> {
    storage.read(TOKEN_KEY).unwrap()
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    assert!(!SessionState::default().is_authenticated());
}

#[test]
fn non_empty_token_is_authenticated() {
    let state = SessionState { token: "x".to_owned() };
    assert!(state.is_authenticated());
}

// =============================================================
// set_token / remove_token
// =============================================================

#[test]
fn new_store_is_unauthenticated_before_initialize() {
    let store = SessionStore::new(MemoryStorage::with_entry(TOKEN_KEY, "abc"), HttpDefaults::new(""));
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), "");
}

#[test]
fn set_token_updates_memory_storage_and_header() {
    let storage = MemoryStorage::new();
    let http = HttpDefaults::new("");
    let mut store = SessionStore::new(storage.clone(), http.clone());

    store.set_token("t-42").unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.token(), "t-42");
    assert_eq!(stored(&storage).as_deref(), Some("t-42"));
    assert_eq!(http.authorization().as_deref(), Some("Token t-42"));
}

#[test]
fn set_token_twice_is_idempotent() {
    let storage = MemoryStorage::new();
    let http = HttpDefaults::new("");
    let mut store = SessionStore::new(storage.clone(), http.clone());

    store.set_token("same").unwrap();
    let once = (store.state().clone(), stored(&storage), http.authorization());
    store.set_token("same").unwrap();
    let twice = (store.state().clone(), stored(&storage), http.authorization());

    assert_eq!(once, twice);
}

#[test]
fn set_token_rejects_empty_token() {
    let storage = MemoryStorage::new();
    let http = HttpDefaults::new("");
    let mut store = SessionStore::new(storage.clone(), http.clone());

    assert_eq!(store.set_token(""), Err(SessionError::EmptyToken));
    assert!(!store.is_authenticated());
    assert_eq!(stored(&storage), None);
    assert_eq!(http.authorization(), None);
}

#[test]
fn set_token_storage_failure_leaves_session_unchanged() {
    let http = HttpDefaults::new("");
    let storage = FlakyStorage { fail_writes: true, ..FlakyStorage::default() };
    let mut store = SessionStore::new(storage, http.clone());

    let err = store.set_token("t").unwrap_err();

    assert!(matches!(err, SessionError::Storage(StorageError::Write(_))));
    assert!(!store.is_authenticated());
    assert_eq!(http.authorization(), None);
}

#[test]
fn remove_token_clears_all_three() {
    let storage = MemoryStorage::new();
    let http = HttpDefaults::new("");
    let mut store = SessionStore::new(storage.clone(), http.clone());
    store.set_token("t").unwrap();

    store.remove_token().unwrap();

    assert!(!store.is_authenticated());
    assert_eq!(stored(&storage).as_deref(), Some(""));
    assert_eq!(http.authorization(), None);
}

#[test]
fn remove_token_storage_failure_still_signs_out() {
    let http = HttpDefaults::new("");
    let mut store = SessionStore::new(FlakyStorage::default(), http.clone());
    store.set_token("t").unwrap();
    store.storage.fail_writes = true;

    let err = store.remove_token().unwrap_err();

    assert!(matches!(err, SessionError::Storage(_)));
    assert!(!store.is_authenticated());
    assert_eq!(http.authorization(), None);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_stored_token_is_unauthenticated() {
    let http = HttpDefaults::new("");
    let mut store = SessionStore::new(MemoryStorage::new(), http.clone());
    store.initialize();
    assert!(!store.is_authenticated());
    assert_eq!(http.authorization(), None);
}

#[test]
fn initialize_with_empty_stored_token_is_unauthenticated() {
    let mut store = SessionStore::new(MemoryStorage::with_entry(TOKEN_KEY, ""), HttpDefaults::new(""));
    store.initialize();
    assert!(!store.is_authenticated());
}

#[test]
fn initialize_with_stored_token_matches_set_token() {
    let restored_http = HttpDefaults::new("");
    let mut restored = SessionStore::new(MemoryStorage::with_entry(TOKEN_KEY, "abc123"), restored_http.clone());
    restored.initialize();

    let direct_storage = MemoryStorage::new();
    let direct_http = HttpDefaults::new("");
    let mut direct = SessionStore::new(direct_storage.clone(), direct_http.clone());
    direct.set_token("abc123").unwrap();

    assert!(restored.is_authenticated());
    assert_eq!(restored_http.authorization().as_deref(), Some("Token abc123"));
    assert_eq!(restored.state(), direct.state());
    assert_eq!(restored_http.authorization(), direct_http.authorization());
    assert_eq!(restored.storage.read(TOKEN_KEY).unwrap(), stored(&direct_storage));
}

#[test]
fn initialize_with_read_only_storage_restores_session() {
    let http = HttpDefaults::new("");
    let storage = FlakyStorage {
        inner: MemoryStorage::with_entry(TOKEN_KEY, "abc123"),
        fail_writes: true,
        ..FlakyStorage::default()
    };
    let mut store = SessionStore::new(storage, http.clone());

    store.initialize();

    assert!(store.is_authenticated());
    assert_eq!(store.token(), "abc123");
    assert_eq!(store.storage.read(TOKEN_KEY).unwrap().as_deref(), Some("abc123"));
    assert_eq!(http.authorization().as_deref(), Some("Token abc123"));
}

#[test]
fn initialize_with_unreadable_storage_fails_safe() {
    let http = HttpDefaults::new("");
    let storage = FlakyStorage { fail_reads: true, ..FlakyStorage::default() };
    let mut store = SessionStore::new(storage, http.clone());

    store.initialize();

    assert!(!store.is_authenticated());
    assert_eq!(http.authorization(), None);
}
