//! "My jobs" page: the signed-in user's postings with edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Deletes are confirmed first and applied to the local list only after the
//! backend acknowledged them; a failed delete leaves the list untouched and
//! raises an error toast.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::notify;
use crate::net::api::require_token;
use crate::net::types::Job;
use crate::state::jobs::{FETCH_MY_JOBS_FAILED, Fetch, MyJobsView, bullet_lines, my_jobs_view, remove_job};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::routes::{CREATE_JOB_PATH, job_edit_path};
use crate::util::token_store::BrowserTokenStore;

const DELETED_MESSAGE: &str = "Job deleted successfully";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete job";

/// Ask the user to confirm a delete. Outside the browser nothing is deleted.
fn confirm_delete() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this job posting?")
                    .ok()
            })
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[component]
pub fn MyJobsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let jobs = RwSignal::new(Fetch::<Vec<Job>>::Loading);

    let load = move || {
        jobs.set(Fetch::Loading);
        leptos::task::spawn_local(async move {
            let result = match require_token(&BrowserTokenStore) {
                Ok(token) => crate::net::api::fetch_my_jobs(&token).await,
                Err(e) => Err(e),
            };
            let next = match result {
                Ok(list) => Fetch::Loaded(list),
                Err(e) => {
                    leptos::logging::warn!("fetch my jobs failed: {e}");
                    notify(toasts, ToastKind::Error, FETCH_MY_JOBS_FAILED);
                    Fetch::Failed(FETCH_MY_JOBS_FAILED.to_owned())
                }
            };
            jobs.try_set(next);
        });
    };

    Effect::new(move || load());

    let on_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        let Ok(token) = require_token(&BrowserTokenStore) else {
            notify(toasts, ToastKind::Error, DELETE_FAILED_MESSAGE);
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_job(&token, &id).await {
                Ok(()) => {
                    jobs.try_update(|j| remove_job(j, &id));
                    notify(toasts, ToastKind::Success, DELETED_MESSAGE);
                }
                Err(e) => {
                    leptos::logging::warn!("delete job {id} failed: {e}");
                    notify(toasts, ToastKind::Error, DELETE_FAILED_MESSAGE);
                }
            }
        });
    };

    view! {
        <div class="my-jobs">
            <header class="my-jobs__header">
                <h1>"My Job Postings"</h1>
                <p>"Manage all your posted job opportunities"</p>
            </header>
            {move || match my_jobs_view(&jobs.get()) {
                MyJobsView::Loading => view! { <div class="loader" aria-busy="true"></div> }.into_any(),
                MyJobsView::Error(message) => view! {
                    <div class="panel panel--error">
                        <p class="panel__message">{message}</p>
                        <button class="btn btn--primary" on:click=move |_| load()>"Retry"</button>
                    </div>
                }
                .into_any(),
                MyJobsView::Empty => view! { <NoPostings/> }.into_any(),
                MyJobsView::Jobs(list) => view! {
                    <div class="my-jobs__grid">
                        {list
                            .into_iter()
                            .map(|job| view! { <MyJobCard job=job on_delete=on_delete/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn NoPostings() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <div class="panel">
            <h3 class="panel__title">"No jobs posted yet"</h3>
            <p class="panel__message">"Get started by posting your first job opportunity."</p>
            <button
                class="btn btn--primary"
                on:click=move |_| navigate(CREATE_JOB_PATH, NavigateOptions::default())
            >
                "Post a Job"
            </button>
        </div>
    }
}

#[component]
fn MyJobCard<F>(job: Job, on_delete: F) -> impl IntoView
where
    F: Fn(String) + Copy + Send + Sync + 'static,
{
    let navigate = use_navigate();
    let edit_href = job_edit_path(&job.id);
    let delete_id = job.id.clone();
    let job_type = job.job_type.unwrap_or_default().label();
    let responsibilities = bullet_lines(&job.responsibilities)
        .into_iter()
        .map(|line| view! { <li>{line.to_owned()}</li> })
        .collect::<Vec<_>>();
    let has_responsibilities = !responsibilities.is_empty();

    view! {
        <article class="my-job-card">
            <div class="my-job-card__badges">
                <span class="tag">{job_type}</span>
                {job.salary.as_ref().map(|s| view! { <span class="tag tag--salary">{s.display()}</span> })}
            </div>
            <h3 class="my-job-card__title">{job.title}</h3>
            <p class="my-job-card__description">{job.description}</p>
            {has_responsibilities.then(|| {
                view! {
                    <section class="my-job-card__responsibilities">
                        <h4>"Key Responsibilities"</h4>
                        <ul>{responsibilities}</ul>
                    </section>
                }
            })}
            <ul class="my-job-card__meta">
                <li>{job.company}</li>
                <li>{job.location}</li>
                <li>{job.contact}</li>
                {(!job.requirements.trim().is_empty()).then(|| view! { <li>{job.requirements}</li> })}
            </ul>
            <div class="my-job-card__actions">
                <button
                    class="btn my-job-card__edit"
                    on:click=move |_| navigate(&edit_href, NavigateOptions::default())
                >
                    "Edit"
                </button>
                <button class="btn btn--danger my-job-card__delete" on:click=move |_| on_delete(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
