//! Session credential for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the credential once per successful sign-in; the
//! navigation interceptor and entry guards read it on every page transition.
//! Logout clears it. There is no expiry tracking: a stored token counts as
//! signed in until something clears it.
//!
//! TRADE-OFFS
//! ==========
//! Stores are injected rather than read from ambient globals so tests can
//! swap in fake credentials without touching browser storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::util::storage::StorageError;

/// Logged-in state: an optional bearer token plus the admin role flag.
///
/// The two fields are always replaced together; see [`CredentialStore::write`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCredential {
    token: Option<String>,
    is_admin: bool,
}

/// Which login endpoint produced a [`LoginResponse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginKind {
    Team,
    Admin,
}

/// Body returned by `POST /auth/login` and `POST /auth/login/admin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub team_id: i64,
    pub team_name: String,
}

impl SessionCredential {
    /// The signed-out credential: no token, not admin.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(token: impl Into<String>, is_admin: bool) -> Self {
        Self { token: Some(token.into()), is_admin }
    }

    /// Build the raw pair as persisted, without normalising anything.
    #[must_use]
    pub fn from_parts(token: Option<String>, is_admin: bool) -> Self {
        Self { token, is_admin }
    }

    /// Build the credential the login flow stores after a successful sign-in.
    #[must_use]
    pub fn from_login(response: &LoginResponse, kind: LoginKind) -> Self {
        Self::new(response.token.clone(), kind == LoginKind::Admin)
    }

    /// The bearer token, if one is present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Admin role, honoured only alongside a token.
    ///
    /// A leftover admin flag with no token (partial logout, hand-edited
    /// storage) reads as not admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_admin && self.is_authenticated()
    }

    /// The stored admin flag as-is, for the persistence layer.
    #[must_use]
    pub fn admin_flag(&self) -> bool {
        self.is_admin
    }
}

/// Read/write access to the process-wide session credential.
///
/// `read` never fails: anything unreadable degrades to
/// [`SessionCredential::anonymous`]. `write` replaces token and admin flag as
/// one unit; no caller ever observes one updated without the other.
pub trait CredentialStore {
    fn read(&self) -> SessionCredential;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage rejects the write.
    fn write(&self, credential: SessionCredential) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage rejects the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Non-persistent store, shared by clone. Nothing survives a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<SessionCredential>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new(credential: SessionCredential) -> Self {
        Self { inner: Arc::new(RwLock::new(credential)) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read(&self) -> SessionCredential {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                log::warn!("session store lock poisoned; treating session as anonymous");
                SessionCredential::anonymous()
            }
        }
    }

    fn write(&self, credential: SessionCredential) -> Result<(), StorageError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = credential;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.write(SessionCredential::anonymous())
    }
}
