use super::*;

fn summary(id: &str, updated_at: Option<&str>) -> SessionSummary {
    SessionSummary {
        id: id.to_owned(),
        title: format!("Session {id}"),
        updated_at: updated_at.map(ToOwned::to_owned),
    }
}

#[test]
fn default_is_empty() {
    let state = SessionsState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.revision, 0);
}

#[test]
fn bump_increments_revision() {
    let mut state = SessionsState::default();
    state.bump();
    state.bump();
    assert_eq!(state.revision, 2);
}

#[test]
fn set_items_sorts_newest_first() {
    let mut state = SessionsState { loading: true, ..SessionsState::default() };
    state.set_items(vec![
        summary("a", Some("2026-08-01T10:00:00Z")),
        summary("b", Some("2026-08-20T10:00:00Z")),
        summary("c", Some("2026-08-10T10:00:00Z")),
    ]);
    let ids: Vec<&str> = state.items.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
    assert!(!state.loading);
}

#[test]
fn sessions_without_timestamp_sort_last() {
    let mut state = SessionsState::default();
    state.set_items(vec![
        summary("old", None),
        summary("new", Some("2026-08-20T10:00:00Z")),
    ]);
    assert_eq!(state.items[0].id, "new");
    assert_eq!(state.items[1].id, "old");
}
