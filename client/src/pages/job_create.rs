//! Create-job page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::job_form::{JobForm, JobFormFields};
use crate::net::api::require_token;
use crate::util::routes::ALL_JOBS_PATH;
use crate::util::token_store::BrowserTokenStore;

const CREATE_FAILED: &str = "Failed to create job";
const SIGNED_OUT_CREATE: &str = "Please log in to post a job";

#[component]
pub fn JobCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(JobForm::default());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = match form.with(JobForm::to_draft) {
            Ok(draft) => draft,
            Err(problem) => {
                message.set(problem.to_owned());
                return;
            }
        };
        // No credential means no request at all.
        let Ok(token) = require_token(&BrowserTokenStore) else {
            message.set(SIGNED_OUT_CREATE.to_owned());
            return;
        };
        submitting.set(true);
        message.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_job(&token, &draft).await {
                Ok(()) => navigate(ALL_JOBS_PATH, NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("create job failed: {e}");
                    message.try_set(e.user_message(CREATE_FAILED));
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <div class="job-form-page">
            <header class="job-form-page__header">
                <h1>"Post Your Dream Job"</h1>
                <p>"Reach top talent with our platform. Fill in the details below and find your perfect candidate!"</p>
            </header>
            <form class="job-form" on:submit=on_submit>
                <JobFormFields form=form/>
                <button class="btn btn--primary job-form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Posting Job..." } else { "🌟 Post Job Opportunity" }}
                </button>
                <Show when=move || !message.get().is_empty()>
                    <p class="job-form__message">{move || message.get()}</p>
                </Show>
            </form>
        </div>
    }
}
