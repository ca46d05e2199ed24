//! Shared create/edit job form fields.
//!
//! ARCHITECTURE
//! ============
//! [`JobForm`] is the plain form model; [`JobFormFields`] renders it bound to
//! an `RwSignal<JobForm>`. The owning page supplies the `<form>` element,
//! the submit button, and the request it issues.

#[cfg(test)]
#[path = "job_form_test.rs"]
mod job_form_test;

use leptos::prelude::*;

use crate::net::types::{Job, JobDraft, JobType, Salary};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Text fields of the job form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    Location,
    Salary,
    Contact,
    Description,
    Responsibilities,
    Requirements,
}

impl JobField {
    /// Single-line inputs, in display order.
    pub const INPUTS: [JobField; 5] = [
        JobField::Title,
        JobField::Company,
        JobField::Location,
        JobField::Salary,
        JobField::Contact,
    ];

    /// Multi-line inputs, in display order.
    pub const TEXTAREAS: [JobField; 3] = [JobField::Description, JobField::Responsibilities, JobField::Requirements];

    pub fn label(self) -> &'static str {
        match self {
            JobField::Title => "Job Title",
            JobField::Company => "Company",
            JobField::Location => "Location",
            JobField::Salary => "Salary Range",
            JobField::Contact => "Contact",
            JobField::Description => "Job Description",
            JobField::Responsibilities => "Responsibilities",
            JobField::Requirements => "Requirements",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            JobField::Title => "e.g. Senior Frontend Developer",
            JobField::Company => "Your company name",
            JobField::Location => "e.g. New York or Remote",
            JobField::Salary => "e.g. $80,000 - $100,000",
            JobField::Contact => "hr@company.com",
            JobField::Description => "Describe the role, team, and company culture...",
            JobField::Responsibilities => "List key responsibilities (bullet points work well)...",
            JobField::Requirements => "List required skills and qualifications...",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            JobField::Contact => "email",
            _ => "text",
        }
    }
}

/// Form model; every field is text as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub contact: String,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub job_type: JobType,
}

impl JobForm {
    /// Prefill from an existing posting.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.as_ref().map(Salary::as_input).unwrap_or_default(),
            contact: job.contact.clone(),
            description: job.description.clone(),
            responsibilities: job.responsibilities.clone(),
            requirements: job.requirements.clone(),
            job_type: job.job_type.unwrap_or_default(),
        }
    }

    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::Title => &self.title,
            JobField::Company => &self.company,
            JobField::Location => &self.location,
            JobField::Salary => &self.salary,
            JobField::Contact => &self.contact,
            JobField::Description => &self.description,
            JobField::Responsibilities => &self.responsibilities,
            JobField::Requirements => &self.requirements,
        }
    }

    pub fn set(&mut self, field: JobField, value: String) {
        let slot = match field {
            JobField::Title => &mut self.title,
            JobField::Company => &mut self.company,
            JobField::Location => &mut self.location,
            JobField::Salary => &mut self.salary,
            JobField::Contact => &mut self.contact,
            JobField::Description => &mut self.description,
            JobField::Responsibilities => &mut self.responsibilities,
            JobField::Requirements => &mut self.requirements,
        };
        *slot = value;
    }

    /// Validate and convert to the request body.
    ///
    /// # Errors
    ///
    /// Returns a display message when any field is blank.
    pub fn to_draft(&self) -> Result<JobDraft, &'static str> {
        let any_blank = JobField::INPUTS
            .into_iter()
            .chain(JobField::TEXTAREAS)
            .any(|f| self.get(f).trim().is_empty());
        if any_blank {
            return Err(MISSING_FIELDS_MESSAGE);
        }

        Ok(JobDraft {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            company: self.company.trim().to_owned(),
            location: self.location.trim().to_owned(),
            salary: self.salary.trim().to_owned(),
            responsibilities: self.responsibilities.trim().to_owned(),
            requirements: self.requirements.trim().to_owned(),
            contact: self.contact.trim().to_owned(),
            job_type: self.job_type,
        })
    }
}

/// Inputs, textareas, and the job type dropdown bound to `form`.
#[component]
pub fn JobFormFields(form: RwSignal<JobForm>) -> impl IntoView {
    let dropdown_open = RwSignal::new(false);

    let inputs = JobField::INPUTS
        .into_iter()
        .map(|field| {
            view! {
                <label class="job-form__field">
                    <span class="job-form__label">{field.label()}</span>
                    <input
                        class="job-form__input"
                        type=field.input_type()
                        required=true
                        placeholder=field.placeholder()
                        prop:value=move || form.with(|f| f.get(field).to_owned())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    let textareas = JobField::TEXTAREAS
        .into_iter()
        .map(|field| {
            view! {
                <label class="job-form__field job-form__field--wide">
                    <span class="job-form__label">{field.label()}</span>
                    <textarea
                        class="job-form__textarea"
                        rows="4"
                        required=true
                        placeholder=field.placeholder()
                        prop:value=move || form.with(|f| f.get(field).to_owned())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    ></textarea>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="job-form__grid">{inputs}</div>
        {textareas}
        <div class="job-form__field">
            <span class="job-form__label">"Job Type"</span>
            <div class="job-form__dropdown">
                <button
                    type="button"
                    class="job-form__dropdown-toggle"
                    on:click=move |_| dropdown_open.update(|open| *open = !*open)
                >
                    <span>{move || form.with(|f| f.job_type.label())}</span>
                </button>
                <Show when=move || dropdown_open.get()>
                    <ul class="job-form__dropdown-menu">
                        {JobType::ALL
                            .into_iter()
                            .map(|job_type| {
                                view! {
                                    <li
                                        class="job-form__dropdown-item"
                                        class:job-form__dropdown-item--active=move || {
                                            form.with(|f| f.job_type == job_type)
                                        }
                                        on:click=move |_| {
                                            form.update(|f| f.job_type = job_type);
                                            dropdown_open.set(false);
                                        }
                                    >
                                        {job_type.label()}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}
