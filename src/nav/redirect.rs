//! Redirect-back plumbing shared with the login and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The interceptor encodes the originally requested location into the login
//! route's query; after a successful sign-in the login page hands that query
//! back here to learn where to go. Only same-origin absolute paths are
//! honoured, so a crafted `?redirect=//evil.example` lands on the default
//! page instead.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::config::NavConfig;
use crate::routing::Location;
use crate::state::session::{CredentialStore, LoginKind, LoginResponse, SessionCredential};
use crate::util::storage::StorageError;

/// Login location that remembers `target` for redirect-back.
#[must_use]
pub fn login_redirect(target: &Location, config: &NavConfig) -> Location {
    Location::new(&config.login_path).with_query(config.redirect_param.as_str(), target.full_path())
}

/// Where to go after signing in from `login`.
#[must_use]
pub fn post_login_destination(login: &Location, config: &NavConfig) -> Location {
    match login.query_value(&config.redirect_param) {
        Some(raw) if is_safe_redirect(raw, config) => Location::parse(raw),
        _ => Location::new(&config.landing_path),
    }
}

fn is_safe_redirect(raw: &str, config: &NavConfig) -> bool {
    if !raw.starts_with('/') || raw.starts_with("//") || raw.contains('\\') {
        return false;
    }
    // Browsers strip tab/CR/LF before parsing, so `/\t/host` becomes `//host`.
    if raw.chars().any(char::is_control) {
        return false;
    }
    Location::parse(raw).path != config.login_path
}

/// Store the credential from a login response and pick the next location.
///
/// # Errors
///
/// Returns [`StorageError`] when the credential cannot be persisted.
pub fn complete_login<S: CredentialStore>(
    store: &S,
    response: &LoginResponse,
    kind: LoginKind,
    login: &Location,
    config: &NavConfig,
) -> Result<Location, StorageError> {
    store.write(SessionCredential::from_login(response, kind))?;
    log::info!("signed in as {} ({kind:?})", response.team_name);
    Ok(post_login_destination(login, config))
}

/// Clear the session and return the login location.
///
/// # Errors
///
/// Returns [`StorageError`] when the stored credential cannot be removed.
pub fn sign_out<S: CredentialStore>(store: &S, config: &NavConfig) -> Result<Location, StorageError> {
    store.clear()?;
    log::info!("signed out");
    Ok(Location::new(&config.login_path))
}
