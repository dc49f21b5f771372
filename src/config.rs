//! Navigation configuration: well-known paths and redirect limits.
//!
//! Values default to the paths the page components and the login flow rely
//! on. `from_env` exists for native test/tool runs; in the browser there is
//! no process environment and [`NavConfig::default`] applies.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routing::location::normalize_path;

pub const DEFAULT_LOGIN_PATH: &str = "/auth";
pub const DEFAULT_LANDING_PATH: &str = "/team";
pub const DEFAULT_DENIED_PATH: &str = "/";
pub const DEFAULT_REDIRECT_PARAM: &str = "redirect";
pub const DEFAULT_MAX_REDIRECTS: usize = 4;

/// Error returned while building a [`NavConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configured path is empty or not absolute.
    #[error("{key} must be an absolute path, got {value:?}")]
    InvalidPath { key: &'static str, value: String },
    /// The redirect query parameter name is empty.
    #[error("{key} must not be empty")]
    EmptyParam { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Public sign-in route; anonymous users are sent here.
    pub login_path: String,
    /// Authenticated landing route; signed-in users bounce here from login.
    pub landing_path: String,
    /// Where role checks send users that fail them.
    pub denied_path: String,
    /// Query key carrying the redirect-back destination on the login route.
    pub redirect_param: String,
    /// Hop limit when following a redirect chain.
    pub max_redirects: usize,
    /// Prefix for persisted storage keys (`token`, `isAdmin`).
    pub storage_prefix: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            login_path: normalize_path(DEFAULT_LOGIN_PATH),
            landing_path: normalize_path(DEFAULT_LANDING_PATH),
            denied_path: normalize_path(DEFAULT_DENIED_PATH),
            redirect_param: DEFAULT_REDIRECT_PARAM.to_owned(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            storage_prefix: String::new(),
        }
    }
}

impl NavConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `ARENA_LOGIN_PATH`: default `/auth`
    /// - `ARENA_LANDING_PATH`: default `/team`
    /// - `ARENA_DENIED_PATH`: default `/`
    /// - `ARENA_REDIRECT_PARAM`: default `redirect`
    /// - `ARENA_MAX_REDIRECTS`: default 4
    /// - `ARENA_STORAGE_PREFIX`: default empty
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a path is not absolute or the redirect
    /// parameter is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`NavConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let login_path = parse_path("ARENA_LOGIN_PATH", lookup("ARENA_LOGIN_PATH"), defaults.login_path)?;
        let landing_path = parse_path("ARENA_LANDING_PATH", lookup("ARENA_LANDING_PATH"), defaults.landing_path)?;
        let denied_path = parse_path("ARENA_DENIED_PATH", lookup("ARENA_DENIED_PATH"), defaults.denied_path)?;

        let redirect_param = match lookup("ARENA_REDIRECT_PARAM") {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::EmptyParam { key: "ARENA_REDIRECT_PARAM" });
            }
            Some(raw) => raw.trim().to_owned(),
            None => defaults.redirect_param,
        };

        let max_redirects = lookup("ARENA_MAX_REDIRECTS")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_redirects);

        let storage_prefix = lookup("ARENA_STORAGE_PREFIX").unwrap_or(defaults.storage_prefix);

        Ok(Self { login_path, landing_path, denied_path, redirect_param, max_redirects, storage_prefix })
    }
}

fn parse_path(key: &'static str, raw: Option<String>, default: String) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw.trim();
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidPath { key, value: raw });
    }
    // Stored in the same shape `Location` uses, so plain string equality holds.
    Ok(normalize_path(value))
}
