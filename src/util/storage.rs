//! Persisted session credential on top of string key–value storage.
//!
//! Layout (string values, survives reloads within one browser profile):
//! - `token`: absent, or the bearer token
//! - `isAdmin`: absent, `"true"` or `"false"`
//!
//! The boolean is encoded only here; everything above this module sees a
//! typed [`SessionCredential`]. Keys may carry a configured prefix. No
//! cross-tab synchronisation is attempted.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::state::session::{CredentialStore, SessionCredential};

pub const TOKEN_KEY: &str = "token";
pub const ADMIN_KEY: &str = "isAdmin";

/// Error from a key–value storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Minimal string key–value storage, shaped after `window.localStorage`.
pub trait KeyValueStorage {
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Encode the admin flag the way the persisted layout expects.
#[must_use]
pub fn encode_admin_flag(is_admin: bool) -> &'static str {
    if is_admin { "true" } else { "false" }
}

/// Decode a persisted admin flag. Only the exact string `"true"` is true;
/// anything else, including `"1"` or `"TRUE"`, is false.
#[must_use]
pub fn decode_admin_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// In-process storage, shared by clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call so the handle stays
/// `Send + Sync` and tolerates storage being disabled mid-session.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
    }
}

/// [`CredentialStore`] backed by key–value storage.
#[derive(Clone, Debug)]
pub struct PersistedCredentialStore<S> {
    storage: S,
    token_key: String,
    admin_key: String,
}

impl<S: KeyValueStorage> PersistedCredentialStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_prefix(storage, "")
    }

    #[must_use]
    pub fn with_prefix(storage: S, prefix: &str) -> Self {
        Self { storage, token_key: format!("{prefix}{TOKEN_KEY}"), admin_key: format!("{prefix}{ADMIN_KEY}") }
    }

    fn try_read(&self) -> Result<SessionCredential, StorageError> {
        let token = self.storage.get(&self.token_key)?;
        let admin = self.storage.get(&self.admin_key)?;
        Ok(SessionCredential::from_parts(token, decode_admin_flag(admin.as_deref())))
    }
}

impl<S: KeyValueStorage> CredentialStore for PersistedCredentialStore<S> {
    fn read(&self) -> SessionCredential {
        match self.try_read() {
            Ok(credential) => credential,
            Err(e) => {
                log::warn!("session storage read failed ({e}); treating session as anonymous");
                SessionCredential::anonymous()
            }
        }
    }

    fn write(&self, credential: SessionCredential) -> Result<(), StorageError> {
        // Drop the role first so a failed write never pairs an elevated flag
        // with the new token.
        self.storage.set(&self.admin_key, encode_admin_flag(false))?;
        match credential.token() {
            Some(token) => self.storage.set(&self.token_key, token)?,
            None => self.storage.remove(&self.token_key)?,
        }
        self.storage.set(&self.admin_key, encode_admin_flag(credential.admin_flag()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.token_key)?;
        self.storage.remove(&self.admin_key)
    }
}
