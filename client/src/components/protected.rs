//! Route wrapper that applies the auth guard to its children.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard};
use crate::util::routes::RouteAccess;

/// Guard decision for a protected route, memoized so writes to the auth
/// signal that leave the decision unchanged do not notify.
pub fn protected_decision(auth: RwSignal<AuthState>) -> Memo<GuardDecision> {
    Memo::new(move |_| auth.with(|state| guard(state, RouteAccess::Protected)))
}

/// Render `children` only for an authenticated session.
///
/// The decision is recomputed whenever auth state changes, and the children
/// remount only when the decision itself changes. While auth is loading
/// nothing renders, not even the redirect.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = protected_decision(auth);

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Deny { redirect_to } => view! { <Redirect path=redirect_to/> }.into_any(),
        GuardDecision::Pending => ().into_any(),
    }
}
