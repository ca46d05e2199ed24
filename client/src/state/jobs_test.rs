use super::*;

// =============================================================
// Helpers
// =============================================================

fn job(id: &str, title: &str, company: &str, job_type: JobType, description: &str) -> Job {
    Job {
        id: id.to_owned(),
        title: title.to_owned(),
        company: company.to_owned(),
        description: description.to_owned(),
        job_type: Some(job_type),
        ..Job::default()
    }
}

fn single_remote() -> Vec<Job> {
    vec![job("1", "A", "X", JobType::Remote, "d")]
}

fn mixed() -> Vec<Job> {
    vec![
        job("1", "Rust Engineer", "Acme", JobType::FullTime, "Systems work"),
        job("2", "Designer", "Globex", JobType::Contract, "UI for rust tooling"),
        job("3", "Intern", "Initech", JobType::Internship, "Learn"),
    ]
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn empty_filter_keeps_full_list() {
    let jobs = single_remote();
    let filter = JobFilter { search: String::new(), job_type: TypeFilter::All };
    assert_eq!(filter_jobs(&jobs, &filter), jobs);
    assert_eq!(
        list_view(&Fetch::Loaded(jobs.clone()), &filter),
        ListView::Jobs { shown: jobs, total: 1 }
    );
}

#[test]
fn search_without_hits_renders_no_matches_not_empty_state() {
    let filter = JobFilter { search: "zzz".to_owned(), job_type: TypeFilter::All };
    let view = list_view(&Fetch::Loaded(single_remote()), &filter);
    assert_eq!(view, ListView::NoMatches("No jobs match \"zzz\"".to_owned()));
    assert_eq!(view.mode(), ListMode::NoMatches);
}

#[test]
fn search_is_case_insensitive_across_title_company_description() {
    let jobs = mixed();
    let filter = JobFilter { search: "RUST".to_owned(), ..JobFilter::default() };
    let ids: Vec<String> = filter_jobs(&jobs, &filter).into_iter().map(|j| j.id).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let by_company = JobFilter { search: "initech".to_owned(), ..JobFilter::default() };
    assert_eq!(filter_jobs(&jobs, &by_company).len(), 1);
}

#[test]
fn type_filter_combines_with_search() {
    let jobs = mixed();
    let filter = JobFilter {
        search: "rust".to_owned(),
        job_type: TypeFilter::Only(JobType::Contract),
    };
    let shown = filter_jobs(&jobs, &filter);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "2");
}

#[test]
fn type_only_filter_message_names_type() {
    let filter = JobFilter { search: String::new(), job_type: TypeFilter::Only(JobType::PartTime) };
    assert_eq!(
        list_view(&Fetch::Loaded(mixed()), &filter),
        ListView::NoMatches("No part-time jobs available".to_owned())
    );
}

#[test]
fn type_filter_parses_select_values() {
    assert_eq!(TypeFilter::from_label("All"), TypeFilter::All);
    assert_eq!(TypeFilter::from_label("Remote"), TypeFilter::Only(JobType::Remote));
    assert_eq!(TypeFilter::from_label("bogus"), TypeFilter::All);
}

// =============================================================
// List branches
// =============================================================

#[test]
fn empty_backend_list_renders_no_jobs() {
    assert_eq!(list_view(&Fetch::Loaded(Vec::new()), &JobFilter::default()), ListView::NoJobs);
}

#[test]
fn active_filter_on_empty_backend_list_is_no_matches() {
    let filter = JobFilter { search: "a".to_owned(), ..JobFilter::default() };
    assert_eq!(list_view(&Fetch::Loaded(Vec::new()), &filter).mode(), ListMode::NoMatches);
}

#[test]
fn failed_fetch_renders_error_with_message() {
    let fetch = Fetch::Failed("No response from server - please try again later".to_owned());
    assert_eq!(
        list_view(&fetch, &JobFilter::default()),
        ListView::Error("No response from server - please try again later".to_owned())
    );
}

#[test]
fn loading_renders_loading() {
    assert_eq!(list_view(&Fetch::Loading, &JobFilter::default()), ListView::Loading);
}

#[test]
fn jobs_branch_reports_total_before_filtering() {
    let filter = JobFilter { search: "rust".to_owned(), ..JobFilter::default() };
    match list_view(&Fetch::Loaded(mixed()), &filter) {
        ListView::Jobs { shown, total } => {
            assert_eq!(shown.len(), 2);
            assert_eq!(total, 3);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

// =============================================================
// Detail and my-jobs branches
// =============================================================

#[test]
fn detail_without_selection_ignores_fetch_state() {
    assert_eq!(detail_view(None, &Fetch::Loading), DetailView::NoSelection);
    assert_eq!(detail_view(None, &Fetch::Failed("x".to_owned())), DetailView::NoSelection);
}

#[test]
fn detail_with_selection_follows_fetch() {
    let record = job("7", "T", "C", JobType::Remote, "d");
    assert_eq!(detail_view(Some("7"), &Fetch::Loading), DetailView::Loading);
    assert_eq!(
        detail_view(Some("7"), &Fetch::Loaded(record.clone())),
        DetailView::Loaded(record)
    );
    assert_eq!(
        detail_view(Some("7"), &Fetch::Failed(FETCH_JOB_FAILED.to_owned())),
        DetailView::Error(FETCH_JOB_FAILED.to_owned())
    );
}

#[test]
fn my_jobs_distinguishes_empty_from_error() {
    assert_eq!(my_jobs_view(&Fetch::Loaded(Vec::new())), MyJobsView::Empty);
    assert_eq!(
        my_jobs_view(&Fetch::Failed(FETCH_MY_JOBS_FAILED.to_owned())),
        MyJobsView::Error(FETCH_MY_JOBS_FAILED.to_owned())
    );
}

#[test]
fn remove_job_drops_only_matching_id() {
    let mut fetch = Fetch::Loaded(mixed());
    remove_job(&mut fetch, "2");
    let Fetch::Loaded(jobs) = fetch else { panic!("expected loaded") };
    let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn remove_job_is_noop_while_loading() {
    let mut fetch: Fetch<Vec<Job>> = Fetch::Loading;
    remove_job(&mut fetch, "1");
    assert_eq!(fetch, Fetch::Loading);
}

// =============================================================
// Text helpers
// =============================================================

#[test]
fn bullet_lines_skips_blank_lines() {
    assert_eq!(bullet_lines("Ship code\n\n  \nReview PRs\n"), vec!["Ship code", "Review PRs"]);
}

#[test]
fn or_placeholder_replaces_blank() {
    assert_eq!(or_placeholder("  ", "Not specified"), "Not specified");
    assert_eq!(or_placeholder("Lead team", "Not specified"), "Lead team");
}
