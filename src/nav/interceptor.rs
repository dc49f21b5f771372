//! Global navigation interceptor: the single check run before every
//! navigation, from route metadata and token presence alone.
//!
//! Rules, first match wins:
//! 1. target requires auth, no token → login, with `redirect=<target full path>`
//! 2. token present, target is the login path → landing path
//! 3. otherwise → proceed
//!
//! Rule 2 keeps a signed-in user off the login page, which is what stops the
//! login ↔ landing bounce after one hop.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use crate::config::NavConfig;
use crate::state::session::SessionCredential;

use super::decision::{Decision, NavigationIntent};
use super::redirect::login_redirect;

/// Apply the interceptor rules to an already-read credential.
#[must_use]
pub fn intercept(intent: &NavigationIntent<'_>, credential: &SessionCredential, config: &NavConfig) -> Decision {
    if intent.requires_auth() && !credential.is_authenticated() {
        return Decision::RedirectTo(login_redirect(intent.target, config));
    }
    if credential.is_authenticated() && intent.target.path == config.login_path {
        return Decision::redirect(&config.landing_path);
    }
    Decision::Proceed
}
