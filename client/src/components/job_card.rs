//! Card for one posting in the job list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Job, Salary};
use crate::state::jobs::or_placeholder;
use crate::state::selection::JobSelection;
use crate::util::routes::job_detail_path;

/// Summary card. "View Details" records the selection and then navigates,
/// in that order, so the detail page sees the id on mount.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let selection = expect_context::<RwSignal<JobSelection>>();
    let navigate = use_navigate();

    let id = job.id.clone();
    let on_view = move |_: leptos::ev::MouseEvent| {
        leptos::logging::log!("selected job {id}");
        selection.update(|s| s.select(id.clone()));
        navigate(&job_detail_path(&id), NavigateOptions::default());
    };

    let location = or_placeholder(&job.location, "Remote").to_owned();
    let job_type = job.job_type.unwrap_or_default().label();
    let salary = job.salary.as_ref().map(Salary::display);

    view! {
        <article class="job-card">
            <div class="job-card__body">
                <div class="job-card__header">
                    {job.logo.clone().map(|logo| {
                        view! { <img class="job-card__logo" src=logo alt=job.company.clone()/> }
                    })}
                    <div>
                        <h3 class="job-card__title">{job.title.clone()}</h3>
                        <p class="job-card__company">{job.company.clone()}</p>
                    </div>
                </div>
                <p class="job-card__description">{job.description.clone()}</p>
                <ul class="job-card__meta">
                    <li class="job-card__location">{location}</li>
                    <li class="job-card__type">{job_type}</li>
                    {salary.map(|s| view! { <li class="job-card__salary">{s}</li> })}
                </ul>
            </div>
            <div class="job-card__footer">
                <button class="btn btn--primary job-card__view" on:click=on_view>
                    "View Details →"
                </button>
            </div>
        </article>
    }
}
