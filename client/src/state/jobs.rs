//! View-local job data and the pure rules that decide what each view shows.
//!
//! DESIGN
//! ======
//! Pages keep a [`Fetch`] per request in an `RwSignal` and derive their
//! rendering branch from it. Keeping the branch selection here lets the
//! empty / error / no-match distinctions be tested without a renderer.
//! Filtering is local; changing the filter never fetches.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::{Job, JobType};

/// Fallback shown when the job list fails without a better message.
pub const FETCH_JOBS_FALLBACK: &str = "Failed to fetch jobs";
pub const FETCH_JOB_FAILED: &str = "Failed to fetch job details. Please try again.";
pub const FETCH_MY_JOBS_FAILED: &str = "Failed to load your jobs";

/// Lifecycle of one network request owned by a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fetch<T> {
    #[default]
    Loading,
    Loaded(T),
    /// Display-ready failure message.
    Failed(String),
}

/// Job type dropdown value; `All` disables type filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(JobType),
}

impl TypeFilter {
    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Only(job_type) => job_type.label(),
        }
    }

    /// Parse a `<select>` value; anything unrecognised means `All`.
    pub fn from_label(label: &str) -> Self {
        JobType::from_label(label).map_or(TypeFilter::All, TypeFilter::Only)
    }
}

/// Search box plus type dropdown on the job list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: String,
    pub job_type: TypeFilter,
}

impl JobFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.job_type != TypeFilter::All
    }

    /// Case-insensitive match on title, company, or description, and the
    /// selected type.
    pub fn matches(&self, job: &Job) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = job.title.to_lowercase().contains(&needle)
            || job.company.to_lowercase().contains(&needle)
            || job.description.to_lowercase().contains(&needle);
        let matches_type = match self.job_type {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => job.job_type == Some(wanted),
        };
        matches_search && matches_type
    }

    /// Message for the "No Jobs Found" panel.
    pub fn no_match_message(&self) -> String {
        if self.search.is_empty() {
            format!("No {} jobs available", self.job_type.label().to_lowercase())
        } else {
            format!("No jobs match \"{}\"", self.search)
        }
    }
}

/// Apply `filter`, keeping the backend's order.
pub fn filter_jobs(jobs: &[Job], filter: &JobFilter) -> Vec<Job> {
    jobs.iter().filter(|job| filter.matches(job)).cloned().collect()
}

/// Rendering branch of the job list.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    /// Retryable error panel.
    Error(String),
    /// Filters exclude every job.
    NoMatches(String),
    /// The backend returned no jobs at all.
    NoJobs,
    Jobs { shown: Vec<Job>, total: usize },
}

/// Discriminant of [`ListView`], so page chrome re-renders only when the
/// branch changes rather than on every keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    Loading,
    Error,
    NoMatches,
    NoJobs,
    Jobs,
}

impl ListView {
    pub fn mode(&self) -> ListMode {
        match self {
            ListView::Loading => ListMode::Loading,
            ListView::Error(_) => ListMode::Error,
            ListView::NoMatches(_) => ListMode::NoMatches,
            ListView::NoJobs => ListMode::NoJobs,
            ListView::Jobs { .. } => ListMode::Jobs,
        }
    }
}

pub fn list_view(fetch: &Fetch<Vec<Job>>, filter: &JobFilter) -> ListView {
    let jobs = match fetch {
        Fetch::Loading => return ListView::Loading,
        Fetch::Failed(message) => return ListView::Error(message.clone()),
        Fetch::Loaded(jobs) => jobs,
    };
    let shown = filter_jobs(jobs, filter);
    if shown.is_empty() && filter.is_active() {
        return ListView::NoMatches(filter.no_match_message());
    }
    if jobs.is_empty() {
        return ListView::NoJobs;
    }
    ListView::Jobs { shown, total: jobs.len() }
}

/// Rendering branch of the job detail view.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailView {
    NoSelection,
    Loading,
    Error(String),
    Loaded(Job),
}

pub fn detail_view(selected: Option<&str>, fetch: &Fetch<Job>) -> DetailView {
    if selected.is_none() {
        return DetailView::NoSelection;
    }
    match fetch {
        Fetch::Loading => DetailView::Loading,
        Fetch::Failed(message) => DetailView::Error(message.clone()),
        Fetch::Loaded(job) => DetailView::Loaded(job.clone()),
    }
}

/// Rendering branch of the "my jobs" view.
#[derive(Clone, Debug, PartialEq)]
pub enum MyJobsView {
    Loading,
    Error(String),
    Empty,
    Jobs(Vec<Job>),
}

pub fn my_jobs_view(fetch: &Fetch<Vec<Job>>) -> MyJobsView {
    match fetch {
        Fetch::Loading => MyJobsView::Loading,
        Fetch::Failed(message) => MyJobsView::Error(message.clone()),
        Fetch::Loaded(jobs) if jobs.is_empty() => MyJobsView::Empty,
        Fetch::Loaded(jobs) => MyJobsView::Jobs(jobs.clone()),
    }
}

/// Drop `id` from a loaded list. Called only after the backend confirmed
/// the delete.
pub fn remove_job(fetch: &mut Fetch<Vec<Job>>, id: &str) {
    if let Fetch::Loaded(jobs) = fetch {
        jobs.retain(|job| job.id != id);
    }
}

/// Non-blank lines of a multi-line field, for bullet rendering.
pub fn bullet_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Text or a placeholder when the field is blank.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() { placeholder } else { value }
}
