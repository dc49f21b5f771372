use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_empty() {
    let cfg = NavConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, NavConfig::default());
    assert_eq!(cfg.login_path, "/auth");
    assert_eq!(cfg.landing_path, "/team");
    assert_eq!(cfg.denied_path, "/");
    assert_eq!(cfg.redirect_param, "redirect");
    assert_eq!(cfg.max_redirects, DEFAULT_MAX_REDIRECTS);
    assert!(cfg.storage_prefix.is_empty());
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = NavConfig::from_lookup(lookup_from(&[
        ("ARENA_LOGIN_PATH", "/login"),
        ("ARENA_LANDING_PATH", "/home/"),
        ("ARENA_REDIRECT_PARAM", " next "),
        ("ARENA_MAX_REDIRECTS", "8"),
        ("ARENA_STORAGE_PREFIX", "arena_"),
    ]))
    .unwrap();
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.landing_path, "/home");
    assert_eq!(cfg.denied_path, "/");
    assert_eq!(cfg.redirect_param, "next");
    assert_eq!(cfg.max_redirects, 8);
    assert_eq!(cfg.storage_prefix, "arena_");
}

#[test]
fn from_lookup_rejects_relative_path() {
    let err = NavConfig::from_lookup(lookup_from(&[("ARENA_DENIED_PATH", "home")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPath { key: "ARENA_DENIED_PATH", value: "home".to_owned() });
}

#[test]
fn from_lookup_rejects_empty_redirect_param() {
    let err = NavConfig::from_lookup(lookup_from(&[("ARENA_REDIRECT_PARAM", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyParam { key: "ARENA_REDIRECT_PARAM" });
}

#[test]
fn from_lookup_invalid_max_redirects_falls_back() {
    let cfg = NavConfig::from_lookup(lookup_from(&[("ARENA_MAX_REDIRECTS", "lots")])).unwrap();
    assert_eq!(cfg.max_redirects, DEFAULT_MAX_REDIRECTS);
    let cfg = NavConfig::from_lookup(lookup_from(&[("ARENA_MAX_REDIRECTS", "0")])).unwrap();
    assert_eq!(cfg.max_redirects, DEFAULT_MAX_REDIRECTS);
}

#[test]
fn root_path_is_kept_as_is() {
    let cfg = NavConfig::from_lookup(lookup_from(&[("ARENA_DENIED_PATH", "/")])).unwrap();
    assert_eq!(cfg.denied_path, "/");
}

#[test]
fn paths_are_normalised_like_locations() {
    let cfg = NavConfig::from_lookup(lookup_from(&[
        ("ARENA_LOGIN_PATH", "//auth"),
        ("ARENA_LANDING_PATH", "/team//"),
        ("ARENA_DENIED_PATH", "/home//dash/"),
    ]))
    .unwrap();
    assert_eq!(cfg.login_path, "/auth");
    assert_eq!(cfg.landing_path, "/team");
    assert_eq!(cfg.denied_path, "/home/dash");
}
