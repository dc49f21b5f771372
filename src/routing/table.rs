//! Route descriptors, the canonical arena route table, and startup checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is built once and never mutated. Policy hangs off it in two
//! forms: `meta.requires_auth` (read by the global interceptor, inherited by
//! children) and an optional entry guard (run after the interceptor, parent
//! first). The admin guard sits on the `/admin` subtree root so every child,
//! deep-linked or not, passes through it.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::config::NavConfig;

use super::matcher::{RouteMatch, match_routes};

/// Per-route entry policy beyond the global authenticated split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryGuard {
    /// Requires a token; redirects to login without redirect-back.
    Auth,
    /// Requires the admin role; redirects to the denied path.
    Admin,
}

/// Declarative flags read by the global interceptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Absolute (`/team`) at the top level, relative (`tasks/new`) for
    /// children. `:name` segments capture a path parameter.
    pub path: String,
    pub name: Option<String>,
    pub meta: RouteMeta,
    pub entry_guard: Option<EntryGuard>,
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self { path: path.to_owned(), name: None, meta: RouteMeta::default(), entry_guard: None, children: Vec::new() }
    }

    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    #[must_use]
    pub fn guard(mut self, guard: EntryGuard) -> Self {
        self.entry_guard = Some(guard);
        self
    }

    #[must_use]
    pub fn child(mut self, child: RouteDescriptor) -> Self {
        self.children.push(child);
        self
    }

    /// Path split into non-empty segments.
    pub(crate) fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Segments with parameter names erased, for sibling uniqueness checks.
    fn shape(&self) -> Vec<&str> {
        self.segments().map(|s| if s.starts_with(':') { ":" } else { s }).collect()
    }
}

/// Startup validation failure. A table that fails here is a programming
/// error, never a navigation-time condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("invalid route path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
    #[error("duplicate route path {path:?} under {parent:?}")]
    DuplicatePath { parent: String, path: String },
    #[error("login route {path:?} must not require authentication or carry a guard")]
    LoginRouteProtected { path: String },
    #[error("no route matches required path {path:?}")]
    MissingRoute { path: String },
    #[error("redirect target {path:?} would redirect again: {reason}")]
    GuardedRedirectTarget { path: String, reason: &'static str },
    #[error("admin guard on {path:?} must sit on a top-level route")]
    NestedAdminGuard { path: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// The arena's route policy.
    ///
    /// - `/auth` sign-in, public
    /// - `/` dashboard, public
    /// - `/team` team workspace, requires auth
    /// - `/submit/:task_id` solution submission, auth entry guard
    /// - `/admin` (+ `tasks`, `tasks/new`, `solutions`), requires auth and admin
    #[must_use]
    pub fn canonical() -> Self {
        Self::new(vec![
            RouteDescriptor::new("/auth").named("auth"),
            RouteDescriptor::new("/").named("dashboard"),
            RouteDescriptor::new("/team").named("team").requires_auth(),
            RouteDescriptor::new("/submit/:task_id").named("submit").guard(EntryGuard::Auth),
            RouteDescriptor::new("/admin")
                .named("admin")
                .requires_auth()
                .guard(EntryGuard::Admin)
                .child(RouteDescriptor::new("tasks").named("admin-tasks"))
                .child(RouteDescriptor::new("tasks/new").named("admin-task-new"))
                .child(RouteDescriptor::new("solutions").named("admin-solutions")),
        ])
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Resolve a normalised path to its parent-first route chain.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        match_routes(&self.routes, path)
    }

    /// Check structural invariants against the configured well-known paths.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteTableError`] found.
    pub fn validate(&self, config: &NavConfig) -> Result<(), RouteTableError> {
        validate_scope(&self.routes, "/", true)?;

        let login = self.resolve(&config.login_path).ok_or_else(|| missing(&config.login_path))?;
        if login.requires_auth() || login.guards().next().is_some() {
            return Err(RouteTableError::LoginRouteProtected { path: config.login_path.clone() });
        }

        let denied = self.resolve(&config.denied_path).ok_or_else(|| missing(&config.denied_path))?;
        if denied.requires_auth() || denied.guards().next().is_some() {
            return Err(RouteTableError::GuardedRedirectTarget {
                path: config.denied_path.clone(),
                reason: "denied path must be public",
            });
        }

        let landing = self.resolve(&config.landing_path).ok_or_else(|| missing(&config.landing_path))?;
        if std::ptr::eq(landing.leaf(), login.leaf()) {
            return Err(RouteTableError::GuardedRedirectTarget {
                path: config.landing_path.clone(),
                reason: "landing path resolves to the login route",
            });
        }
        if landing.guards().any(|g| g == EntryGuard::Admin) {
            return Err(RouteTableError::GuardedRedirectTarget {
                path: config.landing_path.clone(),
                reason: "landing path must not require the admin role",
            });
        }

        Ok(())
    }
}

fn missing(path: &str) -> RouteTableError {
    RouteTableError::MissingRoute { path: path.to_owned() }
}

fn validate_scope(routes: &[RouteDescriptor], parent: &str, top_level: bool) -> Result<(), RouteTableError> {
    let mut seen: Vec<Vec<&str>> = Vec::with_capacity(routes.len());
    for route in routes {
        check_path(route, top_level)?;

        if route.entry_guard == Some(EntryGuard::Admin) && !top_level {
            return Err(RouteTableError::NestedAdminGuard { path: route.path.clone() });
        }

        let shape = route.shape();
        if seen.contains(&shape) {
            return Err(RouteTableError::DuplicatePath { parent: parent.to_owned(), path: route.path.clone() });
        }
        seen.push(shape);

        validate_scope(&route.children, &route.path, false)?;
    }
    Ok(())
}

fn check_path(route: &RouteDescriptor, top_level: bool) -> Result<(), RouteTableError> {
    let invalid = |reason| RouteTableError::InvalidPath { path: route.path.clone(), reason };
    if top_level && !route.path.starts_with('/') {
        return Err(invalid("top-level paths must be absolute"));
    }
    if !top_level && route.path.starts_with('/') {
        return Err(invalid("child paths must be relative to their parent"));
    }
    if route.segments().any(|s| s == ":") {
        return Err(invalid("parameter segments need a name"));
    }
    Ok(())
}
