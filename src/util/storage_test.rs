use super::*;

/// Storage whose every operation fails, for degrade-path tests.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read { key: key.to_owned(), reason: "SecurityError".to_owned() })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================================
// admin flag encoding
// =============================================================================

#[test]
fn encode_admin_flag_is_literal() {
    assert_eq!(encode_admin_flag(true), "true");
    assert_eq!(encode_admin_flag(false), "false");
}

#[test]
fn decode_admin_flag_only_accepts_exact_true() {
    assert!(decode_admin_flag(Some("true")));
    assert!(!decode_admin_flag(Some("false")));
    assert!(!decode_admin_flag(Some("TRUE")));
    assert!(!decode_admin_flag(Some("1")));
    assert!(!decode_admin_flag(Some("")));
    assert!(!decode_admin_flag(None));
}

// =============================================================================
// PersistedCredentialStore
// =============================================================================

#[test]
fn read_empty_storage_is_anonymous() {
    let store = PersistedCredentialStore::new(MemoryStorage::default());
    assert_eq!(store.read(), SessionCredential::anonymous());
}

#[test]
fn write_persists_string_layout() {
    let storage = MemoryStorage::default();
    let store = PersistedCredentialStore::new(storage.clone());
    store.write(SessionCredential::new("tok", true)).unwrap();

    assert_eq!(storage.get("token").unwrap().as_deref(), Some("tok"));
    assert_eq!(storage.get("isAdmin").unwrap().as_deref(), Some("true"));
}

#[test]
fn write_then_read_survives_new_store_instance() {
    let storage = MemoryStorage::default();
    PersistedCredentialStore::new(storage.clone()).write(SessionCredential::new("tok", false)).unwrap();

    // A fresh store over the same storage stands in for a page reload.
    let reloaded = PersistedCredentialStore::new(storage).read();
    assert_eq!(reloaded.token(), Some("tok"));
    assert!(!reloaded.is_admin());
}

#[test]
fn write_anonymous_removes_token() {
    let storage = MemoryStorage::default();
    let store = PersistedCredentialStore::new(storage.clone());
    store.write(SessionCredential::new("tok", true)).unwrap();
    store.write(SessionCredential::anonymous()).unwrap();

    assert_eq!(storage.get("token").unwrap(), None);
    assert_eq!(storage.get("isAdmin").unwrap().as_deref(), Some("false"));
    assert!(!store.read().is_authenticated());
}

#[test]
fn clear_removes_both_keys() {
    let storage = MemoryStorage::default();
    let store = PersistedCredentialStore::new(storage.clone());
    store.write(SessionCredential::new("tok", true)).unwrap();
    store.clear().unwrap();

    assert_eq!(storage.get("token").unwrap(), None);
    assert_eq!(storage.get("isAdmin").unwrap(), None);
}

#[test]
fn hand_written_truthy_admin_string_is_not_admin() {
    let storage = MemoryStorage::default();
    storage.set("token", "tok").unwrap();
    storage.set("isAdmin", "yes").unwrap();
    let cred = PersistedCredentialStore::new(storage).read();
    assert!(cred.is_authenticated());
    assert!(!cred.is_admin());
}

#[test]
fn leftover_admin_flag_without_token_is_not_admin() {
    let storage = MemoryStorage::default();
    storage.set("isAdmin", "true").unwrap();
    let cred = PersistedCredentialStore::new(storage).read();
    assert!(cred.admin_flag());
    assert!(!cred.is_admin());
}

#[test]
fn prefix_applies_to_both_keys() {
    let storage = MemoryStorage::default();
    let store = PersistedCredentialStore::with_prefix(storage.clone(), "arena_");
    store.write(SessionCredential::new("tok", true)).unwrap();

    assert_eq!(storage.get("arena_token").unwrap().as_deref(), Some("tok"));
    assert_eq!(storage.get("arena_isAdmin").unwrap().as_deref(), Some("true"));
    assert_eq!(storage.get("token").unwrap(), None);
}

#[test]
fn read_failure_degrades_to_anonymous() {
    let store = PersistedCredentialStore::new(BrokenStorage);
    assert_eq!(store.read(), SessionCredential::anonymous());
}

#[test]
fn write_failure_is_reported() {
    let store = PersistedCredentialStore::new(BrokenStorage);
    assert_eq!(store.write(SessionCredential::new("tok", false)), Err(StorageError::Unavailable));
    assert_eq!(store.clear(), Err(StorageError::Unavailable));
}
