//! Edit-job page at `/jobs/edit/:id`: load, prefill, submit an update.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::job_form::{JobForm, JobFormFields};
use crate::net::api::require_token;
use crate::state::jobs::{FETCH_JOB_FAILED, Fetch};
use crate::util::routes::MY_JOBS_PATH;
use crate::util::token_store::BrowserTokenStore;

const UPDATE_FAILED: &str = "Failed to update job";
const SIGNED_OUT_EDIT: &str = "Please log in to edit this job";

#[component]
pub fn JobEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let job_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let loaded = RwSignal::new(Fetch::<()>::Loading);
    let form = RwSignal::new(JobForm::default());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let load_id = job_id.clone();
    let load = move || {
        let id = load_id.clone();
        loaded.set(Fetch::Loading);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_job(&id).await {
                Ok(job) => {
                    form.try_set(JobForm::from_job(&job));
                    loaded.try_set(Fetch::Loaded(()));
                }
                Err(e) => {
                    leptos::logging::warn!("fetch job {id} for edit failed: {e}");
                    loaded.try_set(Fetch::Failed(FETCH_JOB_FAILED.to_owned()));
                }
            }
        });
    };

    let initial_load = load.clone();
    Effect::new(move || initial_load());

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
        let Ok(token) = require_token(&BrowserTokenStore) else {
            message.set(SIGNED_OUT_EDIT.to_owned());
            return;
        };
        submitting.set(true);
        message.set(String::new());

        let id = job_id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::update_job(&token, &id, &draft).await {
                Ok(()) => navigate(MY_JOBS_PATH, NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("update job {id} failed: {e}");
                    message.try_set(e.user_message(UPDATE_FAILED));
                }
            }
            submitting.try_set(false);
        });
    };

    move || {
        let on_submit = on_submit.clone();
        let load = load.clone();
        match loaded.get() {
            Fetch::Loading => view! { <p class="job-form-page__loading">"Loading job..."</p> }.into_any(),
            Fetch::Failed(problem) => view! {
                <div class="panel panel--error">
                    <h2 class="panel__title">"Error Loading Job"</h2>
                    <p class="panel__message">{problem}</p>
                    <button class="btn btn--primary" on:click=move |_| load()>"Try Again"</button>
                </div>
            }
            .into_any(),
            Fetch::Loaded(()) => view! {
                <div class="job-form-page">
                    <header class="job-form-page__header">
                        <h1>"Edit Job"</h1>
                        <p>"Update the details of your posting."</p>
                    </header>
                    <form class="job-form" on:submit=on_submit>
                        <JobFormFields form=form/>
                        <button
                            class="btn btn--primary job-form__submit"
                            type="submit"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                        <Show when=move || !message.get().is_empty()>
                            <p class="job-form__message">{move || message.get()}</p>
                        </Show>
                    </form>
                </div>
            }
            .into_any(),
        }
    }
}
