//! Job list page with local search and type filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/api/jobs/all-jobs` once on mount and again only on a Retry or
//! Refresh click. Typing in the search box or changing the type dropdown
//! re-filters the loaded list without touching the network.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::job_card::JobCard;
use crate::net::types::{Job, JobType};
use crate::state::jobs::{FETCH_JOBS_FALLBACK, Fetch, JobFilter, ListMode, ListView, TypeFilter, list_view};

#[component]
pub fn JobListPage() -> impl IntoView {
    let jobs = RwSignal::new(Fetch::<Vec<Job>>::Loading);
    let filter = RwSignal::new(JobFilter::default());

    let load = move || {
        jobs.set(Fetch::Loading);
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::fetch_all_jobs().await {
                Ok(list) => Fetch::Loaded(list),
                Err(e) => {
                    leptos::logging::warn!("fetch jobs failed: {e}");
                    Fetch::Failed(e.user_message(FETCH_JOBS_FALLBACK))
                }
            };
            // The page may be gone by now; a late response is dropped.
            jobs.try_set(next);
        });
    };

    // Effects only run in the browser, so SSR renders the loading state.
    Effect::new(move || load());

    let view_state = Memo::new(move |_| list_view(&jobs.get(), &filter.get()));
    let mode = Memo::new(move |_| view_state.with(ListView::mode));

    move || match mode.get() {
        ListMode::Loading => view! { <ListSkeleton/> }.into_any(),
        ListMode::Error => view! {
            <div class="panel panel--error">
                <h3 class="panel__title">"Error Loading Jobs"</h3>
                <p class="panel__message">
                    {move || match view_state.get() {
                        ListView::Error(message) => message,
                        _ => String::new(),
                    }}
                </p>
                <button class="btn btn--primary" on:click=move |_| load()>"Retry"</button>
            </div>
        }
        .into_any(),
        ListMode::NoMatches => view! {
            <div class="panel">
                <h3 class="panel__title">"No Jobs Found"</h3>
                <p class="panel__message">
                    {move || match view_state.get() {
                        ListView::NoMatches(message) => message,
                        _ => String::new(),
                    }}
                </p>
                <button class="btn btn--primary" on:click=move |_| filter.set(JobFilter::default())>
                    "Clear Filters"
                </button>
            </div>
        }
        .into_any(),
        ListMode::NoJobs => view! {
            <div class="panel">
                <h3 class="panel__title">"No Jobs Available"</h3>
                <p class="panel__message">"We couldn't find any job listings matching your criteria."</p>
                <button class="btn btn--primary" on:click=move |_| load()>"Refresh Jobs"</button>
            </div>
        }
        .into_any(),
        ListMode::Jobs => view! {
            <div class="job-list">
                <header class="job-list__hero">
                    <h1>"Find Your " <span class="accent">"Dream Job"</span></h1>
                    <p>"Browse through our latest job openings and take the next step in your career"</p>
                </header>
                <FilterBar filter=filter/>
                <p class="job-list__count">
                    {move || match view_state.get() {
                        ListView::Jobs { shown, total } => format!("Showing {} of {total} jobs", shown.len()),
                        _ => String::new(),
                    }}
                </p>
                <div class="job-list__grid">
                    {move || match view_state.get() {
                        ListView::Jobs { shown, .. } => shown
                            .into_iter()
                            .map(|job| view! { <JobCard job=job/> })
                            .collect::<Vec<_>>(),
                        _ => Vec::new(),
                    }}
                </div>
            </div>
            <Footer/>
        }
        .into_any(),
    }
}

/// Search input and job type dropdown.
#[component]
fn FilterBar(filter: RwSignal<JobFilter>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="text"
                placeholder="Search jobs by title, company or keywords"
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
            />
            <select
                class="filter-bar__type"
                prop:value=move || filter.with(|f| f.job_type.label())
                on:change=move |ev| filter.update(|f| f.job_type = TypeFilter::from_label(&event_target_value(&ev)))
            >
                <option value="All">"All Types"</option>
                {JobType::ALL
                    .into_iter()
                    .map(|job_type| view! { <option value=job_type.label()>{job_type.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

#[component]
fn ListSkeleton() -> impl IntoView {
    view! {
        <div class="job-list job-list--loading" aria-busy="true">
            <div class="skeleton skeleton--title"></div>
            <div class="skeleton skeleton--subtitle"></div>
            <div class="job-list__grid">
                {(0..6)
                    .map(|_| {
                        view! {
                            <div class="job-card job-card--skeleton">
                                <div class="skeleton skeleton--line"></div>
                                <div class="skeleton skeleton--short"></div>
                                <div class="skeleton skeleton--block"></div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
