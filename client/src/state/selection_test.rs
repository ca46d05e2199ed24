use super::*;

#[test]
fn selection_starts_empty() {
    assert_eq!(JobSelection::default().current(), None);
}

#[test]
fn select_then_current_returns_same_id() {
    let mut selection = JobSelection::default();
    selection.select("64f1c2e9a1");
    assert_eq!(selection.current(), Some("64f1c2e9a1"));
}

#[test]
fn second_select_overwrites_first() {
    let mut selection = JobSelection::default();
    selection.select("first");
    selection.select("second");
    assert_eq!(selection.current(), Some("second"));
}

#[test]
fn clear_drops_selection() {
    let mut selection = JobSelection::default();
    selection.select("1");
    selection.clear();
    assert_eq!(selection.current(), None);
}
