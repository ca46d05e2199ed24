//! Shared auth helpers: the route guard and the logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision, evaluated fresh on each
//! render. While the startup check is still running the guard answers
//! `Pending` so neither content nor a redirect flashes on screen.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;
use crate::state::selection::JobSelection;
use crate::util::routes::{HOME_PATH, LOGIN_PATH, RouteAccess, classify};
use crate::util::token_store::TokenStore;

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the route's content.
    Allow,
    /// Render nothing but a redirect.
    Deny { redirect_to: &'static str },
    /// Auth is still loading; render nothing.
    Pending,
}

/// Decide whether a route of the given access class may render.
pub fn guard(state: &AuthState, access: RouteAccess) -> GuardDecision {
    match access {
        RouteAccess::Public => GuardDecision::Allow,
        RouteAccess::Unknown => GuardDecision::Deny { redirect_to: HOME_PATH },
        RouteAccess::Protected if state.loading => GuardDecision::Pending,
        RouteAccess::Protected if state.authenticated => GuardDecision::Allow,
        RouteAccess::Protected => GuardDecision::Deny { redirect_to: LOGIN_PATH },
    }
}

/// [`guard`] for a raw path.
pub fn guard_path(state: &AuthState, path: &str) -> GuardDecision {
    guard(state, classify(path))
}

/// End the session: drop the credential, the auth flag, and any stale
/// job selection.
pub fn end_session(auth: &mut AuthState, selection: &mut JobSelection, store: &impl TokenStore) {
    auth.logout(store);
    selection.clear();
}
