//! Path → route chain resolution.
//!
//! Children match relative to their parent. Within one sibling scope, routes
//! with fewer `:param` segments are tried first (so `tasks/new` beats
//! `tasks/:id`), otherwise declaration order wins. The result lists the
//! matched routes parent-first, which is the order entry guards run in.

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;

use percent_encoding::percent_decode_str;

use super::table::{EntryGuard, RouteDescriptor};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    parents: Vec<&'a RouteDescriptor>,
    leaf: &'a RouteDescriptor,
    params: Vec<(String, String)>,
}

impl<'a> RouteMatch<'a> {
    /// The most specific matched route.
    #[must_use]
    pub fn leaf(&self) -> &'a RouteDescriptor {
        self.leaf
    }

    /// Matched routes from the top-level ancestor down to the leaf.
    pub fn chain(&self) -> impl Iterator<Item = &'a RouteDescriptor> + '_ {
        self.parents.iter().copied().chain(std::iter::once(self.leaf))
    }

    /// Leaf route name, if declared.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.leaf.name.as_deref()
    }

    /// True when any route on the chain sets `requires_auth`.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.chain().any(|r| r.meta.requires_auth)
    }

    /// Entry guards in evaluation order (parent first).
    pub fn guards(&self) -> impl Iterator<Item = EntryGuard> + '_ {
        self.chain().filter_map(|r| r.entry_guard)
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

pub(crate) fn match_routes<'a>(routes: &'a [RouteDescriptor], path: &str) -> Option<RouteMatch<'a>> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut parents = Vec::new();
    let mut params = Vec::new();
    let leaf = match_scope(routes, &segments, &mut parents, &mut params)?;
    Some(RouteMatch { parents, leaf, params })
}

fn match_scope<'a>(
    routes: &'a [RouteDescriptor],
    segments: &[&str],
    parents: &mut Vec<&'a RouteDescriptor>,
    params: &mut Vec<(String, String)>,
) -> Option<&'a RouteDescriptor> {
    let mut ordered: Vec<&'a RouteDescriptor> = routes.iter().collect();
    ordered.sort_by_key(|r| r.segments().filter(|s| s.starts_with(':')).count());

    for route in ordered {
        let Some((rest, captured)) = match_prefix(route, segments) else {
            continue;
        };
        let params_len = params.len();
        params.extend(captured);
        if rest.is_empty() {
            return Some(route);
        }
        parents.push(route);
        if let Some(leaf) = match_scope(&route.children, rest, parents, params) {
            return Some(leaf);
        }
        parents.pop();
        params.truncate(params_len);
    }
    None
}

type Captured = Vec<(String, String)>;

fn match_prefix<'s, 'p>(route: &RouteDescriptor, segments: &'s [&'p str]) -> Option<(&'s [&'p str], Captured)> {
    let mut captured = Vec::new();
    let mut rest = segments;
    for pattern in route.segments() {
        let (head, tail) = rest.split_first()?;
        if let Some(name) = pattern.strip_prefix(':') {
            captured.push((name.to_owned(), percent_decode_str(head).decode_utf8_lossy().into_owned()));
        } else if pattern != *head {
            return None;
        }
        rest = tail;
    }
    Some((rest, captured))
}
