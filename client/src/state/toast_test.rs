use super::*;

#[test]
fn show_replaces_current_toast() {
    let mut state = ToastState::default();
    state.show(ToastKind::Error, "Failed to delete job");
    state.show(ToastKind::Success, "Job deleted successfully");
    let current = state.current.unwrap();
    assert_eq!(current.kind, ToastKind::Success);
    assert_eq!(current.message, "Job deleted successfully");
}

#[test]
fn dismiss_hides_matching_toast() {
    let mut state = ToastState::default();
    let seq = state.show(ToastKind::Success, "done");
    state.dismiss(seq);
    assert!(state.current.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show(ToastKind::Success, "first");
    let second = state.show(ToastKind::Error, "second");
    state.dismiss(first);
    assert_eq!(state.current.as_ref().map(|t| t.seq), Some(second));
}
