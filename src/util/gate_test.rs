use super::*;

#[test]
fn location_from_parts_handles_leading_question_mark() {
    let loc = location_from_parts("/auth", "?redirect=%2Fteam");
    assert_eq!(loc.path, "/auth");
    assert_eq!(loc.query_value("redirect"), Some("/team"));
}

#[test]
fn location_from_parts_handles_bare_search() {
    let loc = location_from_parts("/admin/tasks/", "page=3");
    assert_eq!(loc.full_path(), "/admin/tasks?page=3");
}

#[test]
fn location_from_parts_empty_search() {
    assert_eq!(location_from_parts("/", ""), Location::new("/"));
}
