//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and the navbar to decide what may render. The
//! flag is recomputed only at startup, login and logout; it does not watch
//! the token slot for outside changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::token_store::TokenStore;

/// Authentication flags shared through context as `RwSignal<AuthState>`.
///
/// `loading` is true only until [`AuthState::initialize`] has run once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// State before the startup check: nothing is known yet.
    pub fn pending() -> Self {
        Self { authenticated: false, loading: true }
    }

    /// Derive the session flag from the token slot.
    pub fn initialize(&mut self, store: &impl TokenStore) {
        self.loading = true;
        self.authenticated = store.get().is_some();
        self.loading = false;
    }

    /// Mark the session live. The caller has already stored the credential.
    pub fn login_success(&mut self) {
        self.authenticated = true;
    }

    /// Drop the stored credential and mark the session ended.
    pub fn logout(&mut self, store: &impl TokenStore) {
        store.clear();
        self.authenticated = false;
    }
}
