//! Route-entry guards.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::config::NavConfig;
use crate::routing::EntryGuard;
use crate::state::session::SessionCredential;

use super::decision::{Decision, NavigationIntent};

/// Token required. Sends anonymous users to login without a redirect-back
/// query.
#[must_use]
pub fn auth_guard(_intent: &NavigationIntent<'_>, credential: &SessionCredential, config: &NavConfig) -> Decision {
    if credential.is_authenticated() { Decision::Proceed } else { Decision::redirect(&config.login_path) }
}

/// Admin role required. Anyone else goes to the denied path, token or not.
#[must_use]
pub fn admin_guard(_intent: &NavigationIntent<'_>, credential: &SessionCredential, config: &NavConfig) -> Decision {
    if credential.is_admin() { Decision::Proceed } else { Decision::redirect(&config.denied_path) }
}

impl EntryGuard {
    #[must_use]
    pub fn check(self, intent: &NavigationIntent<'_>, credential: &SessionCredential, config: &NavConfig) -> Decision {
        match self {
            Self::Auth => auth_guard(intent, credential, config),
            Self::Admin => admin_guard(intent, credential, config),
        }
    }
}
