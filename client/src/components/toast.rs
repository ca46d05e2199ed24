//! Toast outlet and the helper that raises a self-dismissing toast.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_VISIBLE_MS: u32 = 3_000;

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let seq = toasts.try_update(|t| t.show(kind, message));

    #[cfg(feature = "hydrate")]
    if let Some(seq) = seq {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            toasts.try_update(|t| t.dismiss(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Renders the current toast, if any.
#[component]
pub fn ToastOutlet() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    move || {
        toasts.get().current.map(|toast| {
            let seq = toast.seq;
            let is_success = toast.kind == ToastKind::Success;
            let is_error = toast.kind == ToastKind::Error;
            view! {
                <div
                    class="toast"
                    class:toast--success=is_success
                    class:toast--error=is_error
                    role="status"
                >
                    <span class="toast__message">{toast.message}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|t| t.dismiss(seq))
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
