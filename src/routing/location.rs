//! Resolved locations: a normalised path plus ordered query pairs.
//!
//! `full_path` is what the interceptor hands to the login route as the
//! redirect-back value, so rendering is deterministic (insertion order) and
//! keeps `/` readable inside query values (`/auth?redirect=/team`).

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left as-is inside a query key or value.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/')
    .remove(b':')
    .remove(b'@');

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Absolute path, no trailing slash except for `/` itself.
    pub path: String,
    /// Decoded query pairs in insertion order.
    pub query: Vec<(String, String)>,
}

impl Location {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self { path: normalize_path(path), query: Vec::new() }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value for `key`, if any.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Path plus encoded query string, e.g. `/admin/tasks?page=2`.
    #[must_use]
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| {
                format!("{}={}", utf8_percent_encode(k, QUERY_COMPONENT), utf8_percent_encode(v, QUERY_COMPONENT))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Parse a browser-style location string. Fragments are dropped, `+` in
    /// the query decodes to a space, and malformed escapes decode lossily.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);
        let (path, query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));
        Self { path: normalize_path(path), query: parse_query(query) }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

/// Parse `a=1&b=two` (with or without a leading `?`) into decoded pairs.
#[must_use]
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k), decode_component(v))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Ensure a leading `/`, collapse repeated slashes, drop a trailing `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
