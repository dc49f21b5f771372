//! Per-navigation input and output values. Neither is ever stored.

use std::fmt;

use crate::routing::{Location, RouteMatch};

/// "Go to `target`, arriving from `source`."
#[derive(Clone, Debug)]
pub struct NavigationIntent<'a> {
    pub target: &'a Location,
    /// Matched route chain; `None` when no route matches the target path.
    pub matched: Option<RouteMatch<'a>>,
    /// Previously committed location; `None` on initial load.
    pub source: Option<&'a Location>,
}

impl NavigationIntent<'_> {
    /// True when the matched chain requires authentication. Unmatched paths
    /// carry no metadata and do not.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.matched.as_ref().is_some_and(|m| m.requires_auth())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    /// Cancel this navigation and start a new one to the given location.
    RedirectTo(Location),
}

impl Decision {
    /// Redirect to `path` with no query.
    #[must_use]
    pub fn redirect(path: &str) -> Self {
        Self::RedirectTo(Location::new(path))
    }

    #[must_use]
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<&Location> {
        match self {
            Self::Proceed => None,
            Self::RedirectTo(location) => Some(location),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceed => f.write_str("proceed"),
            Self::RedirectTo(location) => write!(f, "redirect to {location}"),
        }
    }
}
