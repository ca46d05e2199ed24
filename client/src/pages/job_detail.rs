//! Job detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The job id comes from the shared [`JobSelection`], not from the URL. With
//! no selection the page shows a prompt and makes no request.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Job;
use crate::state::jobs::{DetailView, FETCH_JOB_FAILED, Fetch, detail_view, or_placeholder};
use crate::state::selection::JobSelection;
use crate::util::routes::ALL_JOBS_PATH;

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<JobSelection>>();
    let navigate = use_navigate();

    // Read once on mount; later selections belong to later visits.
    let selected = selection.with_untracked(|s| s.current().map(str::to_owned));
    let job = RwSignal::new(Fetch::<Job>::Loading);

    let load = move |id: String| {
        job.set(Fetch::Loading);
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::fetch_job(&id).await {
                Ok(record) => Fetch::Loaded(record),
                Err(e) => {
                    leptos::logging::warn!("fetch job {id} failed: {e}");
                    Fetch::Failed(FETCH_JOB_FAILED.to_owned())
                }
            };
            job.try_set(next);
        });
    };

    if let Some(id) = selected.clone() {
        Effect::new(move || load(id.clone()));
    }

    let back_to_list = move |_: leptos::ev::MouseEvent| navigate(ALL_JOBS_PATH, NavigateOptions::default());

    move || {
        let back_to_list = back_to_list.clone();
        match detail_view(selected.as_deref(), &job.get()) {
            DetailView::NoSelection => view! {
                <div class="panel panel--notice">
                    <h2 class="panel__title">"No Job Selected"</h2>
                    <p class="panel__message">"Please select a job from the list to view details."</p>
                    <button class="btn btn--primary" on:click=back_to_list>"Browse Available Jobs"</button>
                </div>
            }
            .into_any(),
            DetailView::Loading => view! {
                <div class="job-detail job-detail--loading" aria-busy="true">
                    <div class="skeleton skeleton--title"></div>
                    {(0..6).map(|_| view! { <div class="skeleton skeleton--line"></div> }).collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
            DetailView::Error(message) => {
                let retry_id = selected.clone();
                view! {
                    <div class="panel panel--error">
                        <h2 class="panel__title">"Error Loading Job"</h2>
                        <p class="panel__message">{message}</p>
                        <div class="panel__actions">
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    if let Some(id) = retry_id.clone() {
                                        load(id);
                                    }
                                }
                            >
                                "Try Again"
                            </button>
                            <button class="btn" on:click=back_to_list>"Back to Jobs"</button>
                        </div>
                    </div>
                }
                .into_any()
            }
            DetailView::Loaded(record) => view! { <JobDetailCard job=record/> }.into_any(),
        }
    }
}

#[component]
fn JobDetailCard(job: Job) -> impl IntoView {
    let navigate = use_navigate();
    let on_back = move |_: leptos::ev::MouseEvent| navigate(ALL_JOBS_PATH, NavigateOptions::default());
    let job_type = job.job_type.unwrap_or_default().label();
    let responsibilities = or_placeholder(&job.responsibilities, "Not specified").to_owned();
    let contact = or_placeholder(&job.contact, "Contact HR department").to_owned();

    view! {
        <article class="job-detail">
            <header class="job-detail__header">
                <div>
                    <h1 class="job-detail__title">{job.title}</h1>
                    <div class="job-detail__tags">
                        <span class="tag">{job.company}</span>
                        <span class="tag">{job.location}</span>
                        <span class="tag">{job_type}</span>
                    </div>
                </div>
                {job.salary.as_ref().map(|s| view! { <div class="job-detail__salary">{s.display()}</div> })}
            </header>
            <section class="job-detail__section">
                <h2>"Job Overview"</h2>
                <p>{job.description}</p>
            </section>
            <section class="job-detail__section">
                <h2>"Requirements"</h2>
                <p class="job-detail__pre">{job.requirements}</p>
            </section>
            <div class="job-detail__grid">
                <section class="job-detail__info">
                    <h3>"Responsibilities"</h3>
                    <p>{responsibilities}</p>
                </section>
                <section class="job-detail__info">
                    <h3>"Contact Information"</h3>
                    <p>{contact}</p>
                </section>
            </div>
            <footer class="job-detail__footer">
                <button class="btn btn--link" on:click=on_back>"← Back to Jobs List"</button>
            </footer>
        </article>
    }
}
