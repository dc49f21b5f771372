//! The full decision pipeline: route table + credential store + both gates.
//!
//! TRADE-OFFS
//! ==========
//! The credential is read once per decision (and once per redirect chain in
//! `resolve`) and the snapshot is shared by both gates, so a login completing
//! mid-decision cannot make the interceptor and a guard disagree.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::sync::Arc;

use crate::config::NavConfig;
use crate::routing::{Location, RouteTable, RouteTableError};
use crate::state::session::{CredentialStore, SessionCredential};

use super::decision::{Decision, NavigationIntent};
use super::interceptor::intercept;

/// Failure while following a redirect chain. Single decisions never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("redirect loop: {}", chain.join(" -> "))]
    RedirectLoop { chain: Vec<String> },
    #[error("gave up after {limit} redirects")]
    TooManyRedirects { limit: usize },
}

/// Where a navigation finally commits, and the redirects taken to get there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub location: Location,
    pub redirects: Vec<Location>,
}

/// Run the global interceptor, then every entry guard on the matched chain
/// (parent first). The first redirect wins.
#[must_use]
pub fn evaluate(intent: &NavigationIntent<'_>, credential: &SessionCredential, config: &NavConfig) -> Decision {
    let global = intercept(intent, credential, config);
    if !global.is_proceed() {
        return global;
    }
    if let Some(matched) = &intent.matched {
        for guard in matched.guards() {
            let decision = guard.check(intent, credential, config);
            if !decision.is_proceed() {
                return decision;
            }
        }
    }
    Decision::Proceed
}

#[derive(Clone, Debug)]
pub struct NavigationPipeline<S> {
    table: Arc<RouteTable>,
    store: S,
    config: Arc<NavConfig>,
}

impl<S: CredentialStore> NavigationPipeline<S> {
    /// Validate `table` against `config` and build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError`] when the table breaks a structural rule.
    pub fn new(table: RouteTable, store: S, config: NavConfig) -> Result<Self, RouteTableError> {
        table.validate(&config)?;
        Ok(Self { table: Arc::new(table), store, config: Arc::new(config) })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide one navigation step against the current credential.
    #[must_use]
    pub fn decide(&self, target: &Location, source: Option<&Location>) -> Decision {
        let credential = self.store.read();
        self.decide_with(&credential, target, source)
    }

    fn decide_with(&self, credential: &SessionCredential, target: &Location, source: Option<&Location>) -> Decision {
        let intent = NavigationIntent { target, matched: self.table.resolve(&target.path), source };
        let decision = evaluate(&intent, credential, &self.config);
        log::debug!(
            "navigate {} -> {target}: {decision}",
            source.map_or_else(|| "<initial>".to_owned(), Location::full_path)
        );
        decision
    }

    /// Follow redirects from `target` until a location proceeds.
    ///
    /// Each redirect is a fresh navigation from the same `source`. Revisiting
    /// a location, or exceeding `max_redirects`, aborts the chain.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] on a loop or an over-long chain.
    pub fn resolve(&self, target: Location, source: Option<&Location>) -> Result<Resolution, NavigationError> {
        let credential = self.store.read();
        let mut current = target;
        let mut visited = vec![current.full_path()];
        let mut redirects = Vec::new();

        loop {
            let next = match self.decide_with(&credential, &current, source) {
                Decision::Proceed => return Ok(Resolution { location: current, redirects }),
                Decision::RedirectTo(next) => next,
            };

            let key = next.full_path();
            if visited.contains(&key) {
                visited.push(key);
                log::warn!("aborting redirect loop: {}", visited.join(" -> "));
                return Err(NavigationError::RedirectLoop { chain: visited });
            }
            if redirects.len() >= self.config.max_redirects {
                log::warn!("aborting redirect chain after {} hops at {key}", redirects.len());
                return Err(NavigationError::TooManyRedirects { limit: self.config.max_redirects });
            }

            log::info!("redirect {current} -> {next}");
            visited.push(key);
            redirects.push(next.clone());
            current = next;
        }
    }
}
