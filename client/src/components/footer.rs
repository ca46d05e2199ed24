//! Site footer shown under the home and job list pages.

use leptos::prelude::*;

use crate::util::routes::{ABOUT_PATH, ALL_JOBS_PATH, HOME_PATH};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"JobHunt"</span>
                <p>"Connecting talent with opportunity."</p>
            </div>
            <nav class="footer__links">
                <a href=HOME_PATH>"Home"</a>
                <a href=ALL_JOBS_PATH>"Browse Jobs"</a>
                <a href=ABOUT_PATH>"About"</a>
            </nav>
            <p class="footer__copyright">"© JobHunt. All rights reserved."</p>
        </footer>
    }
}
