//! Top navigation bar with session-aware actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once above the router outlet. Renders nothing until the auth
//! startup check has finished so signed-out links never flash for a
//! signed-in user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::selection::JobSelection;
use crate::util::auth::end_session;
use crate::util::routes::{ABOUT_PATH, ALL_JOBS_PATH, CREATE_JOB_PATH, HOME_PATH, LOGIN_PATH, MY_JOBS_PATH, REGISTER_PATH};
use crate::util::token_store::BrowserTokenStore;

const NAV_LINKS: [(&str, &str); 5] = [
    (HOME_PATH, "Home"),
    (ALL_JOBS_PATH, "Jobs List"),
    (CREATE_JOB_PATH, "Create Job"),
    (MY_JOBS_PATH, "My Jobs"),
    (ABOUT_PATH, "About"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);

    view! {
        <Show when=move || !auth.get().loading>
            <nav class="navbar">
                <div class="navbar__bar">
                    <a class="navbar__brand" href=HOME_PATH>"JobHunt"</a>
                    <div class="navbar__links">
                        <NavLinks class="navbar__link" menu_open=menu_open/>
                        <SessionActions class="navbar__auth" menu_open=menu_open/>
                    </div>
                    <button
                        class="navbar__menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="navbar__mobile">
                        <NavLinks class="navbar__mobile-link" menu_open=menu_open/>
                        <SessionActions class="navbar__mobile-auth" menu_open=menu_open/>
                    </div>
                </Show>
            </nav>
        </Show>
    }
}

#[component]
fn NavLinks(class: &'static str, menu_open: RwSignal<bool>) -> impl IntoView {
    NAV_LINKS
        .into_iter()
        .map(|(href, label)| {
            view! {
                <a class=class href=href on:click=move |_| menu_open.set(false)>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>()
}

/// Login/Register when signed out, Logout when signed in.
#[component]
fn SessionActions(class: &'static str, menu_open: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let selection = expect_context::<RwSignal<JobSelection>>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let mut next_auth = auth.get_untracked();
        let mut next_selection = selection.get_untracked();
        end_session(&mut next_auth, &mut next_selection, &BrowserTokenStore);
        auth.set(next_auth);
        selection.set(next_selection);
        menu_open.set(false);
        leptos::logging::log!("session ended");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class=class>
            <Show
                when=move || auth.get().authenticated
                fallback=move || {
                    view! {
                        <a class="btn navbar__login" href=LOGIN_PATH on:click=move |_| menu_open.set(false)>
                            "Login"
                        </a>
                        <a
                            class="btn btn--primary navbar__register"
                            href=REGISTER_PATH
                            on:click=move |_| menu_open.set(false)
                        >
                            "Register"
                        </a>
                    }
                }
            >
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </div>
    }
}
