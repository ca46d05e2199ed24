//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected::ProtectedRoute;
use crate::components::toast::ToastOutlet;
use crate::pages::{
    about::AboutPage, home::HomePage, job_create::JobCreatePage, job_detail::JobDetailPage, job_edit::JobEditPage,
    job_list::JobListPage, login::LoginPage, my_jobs::MyJobsPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, selection::JobSelection, toast::ToastState};
use crate::util::routes::HOME_PATH;
use crate::util::token_store::BrowserTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, selection, and toast contexts and sets up
/// client-side routing. Auth starts out loading; the startup check reads the
/// token store once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let selection = RwSignal::new(JobSelection::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(selection);
    provide_context(toasts);

    // Effects only run on the client, so SSR keeps rendering the loading state.
    Effect::new(move || {
        auth.update(|a| a.initialize(&BrowserTokenStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="JobHunt"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), StaticSegment("all-jobs"))
                        view=|| view! { <ProtectedRoute><JobListPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), StaticSegment("create"))
                        view=|| view! { <ProtectedRoute><JobCreatePage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), StaticSegment("my-jobs"))
                        view=|| view! { <ProtectedRoute><MyJobsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><JobEditPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><JobDetailPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <ToastOutlet/>
        </Router>
    }
}
