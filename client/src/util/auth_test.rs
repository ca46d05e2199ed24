use super::*;
use crate::util::token_store::MemoryTokenStore;

fn signed_in() -> AuthState {
    AuthState { authenticated: true, loading: false }
}

fn signed_out() -> AuthState {
    AuthState { authenticated: false, loading: false }
}

#[test]
fn protected_route_allows_when_authenticated() {
    assert_eq!(guard(&signed_in(), RouteAccess::Protected), GuardDecision::Allow);
}

#[test]
fn protected_route_redirects_to_login_when_signed_out() {
    assert_eq!(
        guard(&signed_out(), RouteAccess::Protected),
        GuardDecision::Deny { redirect_to: "/login" }
    );
}

#[test]
fn protected_route_is_pending_while_loading() {
    let loading = AuthState::pending();
    assert_eq!(guard(&loading, RouteAccess::Protected), GuardDecision::Pending);

    // Re-evaluating while still loading stays a no-op.
    assert_eq!(guard(&loading, RouteAccess::Protected), GuardDecision::Pending);
}

#[test]
fn pending_wins_even_if_flag_is_set() {
    let state = AuthState { authenticated: true, loading: true };
    assert_eq!(guard(&state, RouteAccess::Protected), GuardDecision::Pending);
}

#[test]
fn public_route_always_allows() {
    assert_eq!(guard(&signed_out(), RouteAccess::Public), GuardDecision::Allow);
    assert_eq!(guard(&AuthState::pending(), RouteAccess::Public), GuardDecision::Allow);
}

#[test]
fn unknown_route_redirects_home() {
    assert_eq!(
        guard_path(&signed_in(), "/does-not-exist"),
        GuardDecision::Deny { redirect_to: "/" }
    );
}

#[test]
fn guard_path_classifies_detail_route() {
    assert_eq!(guard_path(&signed_out(), "/jobs/42"), GuardDecision::Deny { redirect_to: "/login" });
    assert_eq!(guard_path(&signed_in(), "/jobs/42"), GuardDecision::Allow);
}

#[test]
fn decision_follows_state_changes_without_caching() {
    let store = MemoryTokenStore::default();
    let mut state = AuthState::pending();
    assert_eq!(guard_path(&state, "/jobs/all-jobs"), GuardDecision::Pending);

    state.initialize(&store);
    assert_eq!(guard_path(&state, "/jobs/all-jobs"), GuardDecision::Deny { redirect_to: "/login" });

    store.set("tok");
    state.login_success();
    assert_eq!(guard_path(&state, "/jobs/all-jobs"), GuardDecision::Allow);
}

#[test]
fn end_session_clears_token_flag_and_selection() {
    let store = MemoryTokenStore::with_token("tok");
    let mut auth = AuthState::pending();
    auth.initialize(&store);
    let mut selection = JobSelection::default();
    selection.select("stale");

    end_session(&mut auth, &mut selection, &store);

    assert!(!auth.authenticated);
    assert_eq!(store.get(), None);
    assert_eq!(selection.current(), None);
}
