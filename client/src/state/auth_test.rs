use super::*;
use crate::util::token_store::MemoryTokenStore;

// =============================================================
// Startup
// =============================================================

#[test]
fn pending_state_is_loading_and_signed_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.authenticated);
}

#[test]
fn initialize_without_token_is_signed_out_and_loaded() {
    let store = MemoryTokenStore::default();
    let mut state = AuthState::pending();
    state.initialize(&store);
    assert!(!state.authenticated);
    assert!(!state.loading);
}

#[test]
fn initialize_with_token_is_signed_in() {
    let store = MemoryTokenStore::with_token("tok");
    let mut state = AuthState::pending();
    state.initialize(&store);
    assert!(state.authenticated);
    assert!(!state.loading);
}

#[test]
fn initialize_with_empty_token_is_signed_out() {
    let store = MemoryTokenStore::with_token("");
    let mut state = AuthState::pending();
    state.initialize(&store);
    assert!(!state.authenticated);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_then_logout_clears_credential() {
    let store = MemoryTokenStore::default();
    let mut state = AuthState::pending();
    state.initialize(&store);

    store.set("issued-token");
    state.login_success();
    assert!(state.authenticated);

    state.logout(&store);
    assert!(!state.authenticated);
    assert_eq!(store.get(), None);
}

#[test]
fn flag_does_not_follow_external_token_changes() {
    let store = MemoryTokenStore::default();
    let mut state = AuthState::pending();
    state.initialize(&store);

    store.set("written-elsewhere");
    assert!(!state.authenticated);
}
