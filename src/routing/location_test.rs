use super::*;

#[test]
fn normalize_path_variants() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("team"), "/team");
    assert_eq!(normalize_path("/admin/tasks/"), "/admin/tasks");
    assert_eq!(normalize_path("//admin///tasks"), "/admin/tasks");
}

#[test]
fn full_path_without_query_is_path() {
    assert_eq!(Location::new("/team").full_path(), "/team");
}

#[test]
fn full_path_keeps_slashes_readable_in_values() {
    let loc = Location::new("/auth").with_query("redirect", "/team");
    assert_eq!(loc.full_path(), "/auth?redirect=/team");
}

#[test]
fn full_path_encodes_reserved_characters() {
    let loc = Location::new("/auth").with_query("redirect", "/admin/tasks?page=2&sort=new");
    assert_eq!(loc.full_path(), "/auth?redirect=/admin/tasks%3Fpage%3D2%26sort%3Dnew");
}

#[test]
fn full_path_preserves_insertion_order() {
    let loc = Location::new("/admin/solutions").with_query("team", "3").with_query("task", "9");
    assert_eq!(loc.full_path(), "/admin/solutions?team=3&task=9");
}

#[test]
fn parse_splits_path_and_query() {
    let loc = Location::parse("/admin/tasks/?page=2&q=hello+world#top");
    assert_eq!(loc.path, "/admin/tasks");
    assert_eq!(loc.query_value("page"), Some("2"));
    assert_eq!(loc.query_value("q"), Some("hello world"));
}

#[test]
fn parse_decodes_nested_redirect() {
    let loc = Location::parse("/auth?redirect=%2Fadmin%2Ftasks%3Fpage%3D2");
    assert_eq!(loc.query_value("redirect"), Some("/admin/tasks?page=2"));
}

#[test]
fn parse_then_full_path_is_stable() {
    let raw = "/auth?redirect=/admin/tasks%3Fpage%3D2";
    assert_eq!(Location::parse(raw).full_path(), raw);
}

#[test]
fn parse_query_handles_bare_keys_and_empties() {
    assert_eq!(
        parse_query("?flag&&x="),
        vec![("flag".to_owned(), String::new()), ("x".to_owned(), String::new())]
    );
    assert!(parse_query("").is_empty());
}

#[test]
fn display_matches_full_path() {
    let loc = Location::new("/team").with_query("tab", "tasks");
    assert_eq!(loc.to_string(), loc.full_path());
}
