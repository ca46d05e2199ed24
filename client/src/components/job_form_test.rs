use super::*;

fn filled() -> JobForm {
    JobForm {
        title: " Backend Engineer ".to_owned(),
        company: "Acme".to_owned(),
        location: "Berlin".to_owned(),
        salary: "$80,000 - $100,000".to_owned(),
        contact: "hr@acme.test".to_owned(),
        description: "Build APIs".to_owned(),
        responsibilities: "Ship".to_owned(),
        requirements: "Rust".to_owned(),
        job_type: JobType::Contract,
    }
}

#[test]
fn to_draft_trims_text_fields() {
    let draft = filled().to_draft().unwrap();
    assert_eq!(draft.title, "Backend Engineer");
    assert_eq!(draft.job_type, JobType::Contract);
}

#[test]
fn to_draft_sends_range_salary_as_entered() {
    let form = JobForm { salary: " $80,000 - $100,000 ".to_owned(), ..filled() };
    assert_eq!(form.to_draft().unwrap().salary, "$80,000 - $100,000");
}

#[test]
fn to_draft_keeps_salary_text_that_looks_non_finite() {
    let form = JobForm { salary: "NaN".to_owned(), ..filled() };
    let value = serde_json::to_value(form.to_draft().unwrap()).unwrap();
    assert_eq!(value["salary"], "NaN");
}

#[test]
fn to_draft_requires_every_field() {
    for field in JobField::INPUTS.into_iter().chain(JobField::TEXTAREAS) {
        let mut form = filled();
        form.set(field, "   ".to_owned());
        assert_eq!(form.to_draft(), Err(MISSING_FIELDS_MESSAGE), "{field:?}");
    }
}

#[test]
fn set_and_get_address_same_field() {
    let mut form = JobForm::default();
    form.set(JobField::Requirements, "5 years".to_owned());
    assert_eq!(form.get(JobField::Requirements), "5 years");
    assert_eq!(form.get(JobField::Responsibilities), "");
}

#[test]
fn from_job_prefills_every_field() {
    let job = Job {
        id: "1".to_owned(),
        title: "T".to_owned(),
        company: "C".to_owned(),
        location: "L".to_owned(),
        salary: Some(Salary::Amount(1200.0)),
        contact: "c@x.test".to_owned(),
        description: "D".to_owned(),
        responsibilities: "R".to_owned(),
        requirements: "Q".to_owned(),
        job_type: Some(JobType::Remote),
        logo: None,
    };
    let form = JobForm::from_job(&job);
    assert_eq!(form.salary, "1200");
    assert_eq!(form.job_type, JobType::Remote);

    let draft = form.to_draft().unwrap();
    assert_eq!(draft.salary, "1200");
    assert_eq!(draft.contact, "c@x.test");
}

#[test]
fn from_job_prefills_text_salary_verbatim() {
    let job = Job {
        id: "1".to_owned(),
        title: "T".to_owned(),
        salary: Some(Salary::Text("$80,000 - $100,000".to_owned())),
        ..Job::default()
    };
    assert_eq!(JobForm::from_job(&job).salary, "$80,000 - $100,000");
}

#[test]
fn from_job_defaults_missing_type_to_full_time() {
    let job = Job { id: "1".to_owned(), title: "T".to_owned(), ..Job::default() };
    assert_eq!(JobForm::from_job(&job).job_type, JobType::FullTime);
}
