//! Wire DTOs for the job board REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, `jobType`). Optional or
//! loosely typed fields are decoded leniently so one odd record does not
//! fail a whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::format::format_salary;

/// Employment type of a posting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Remote,
    ];

    /// Label used both on the wire and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A job posting as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Backend document id.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Salary as the poster gave it, when they gave one.
    #[serde(default, deserialize_with = "deserialize_salary", skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub contact: String,
    /// `None` when absent or not one of the known labels.
    #[serde(
        default,
        rename = "jobType",
        deserialize_with = "deserialize_job_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_type: Option<JobType>,
    /// Company logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Posted salary: a plain amount or free text such as `$80,000 - $100,000`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    Amount(f64),
    Text(String),
}

impl Salary {
    /// Display text: amounts as `$85,000`, text verbatim.
    pub fn display(&self) -> String {
        match self {
            Salary::Amount(amount) => format_salary(*amount),
            Salary::Text(text) => text.clone(),
        }
    }

    /// Value for the salary input when editing.
    pub fn as_input(&self) -> String {
        match self {
            Salary::Amount(amount) => amount.to_string(),
            Salary::Text(text) => text.clone(),
        }
    }
}

/// Body for `POST /api/jobs/create` and `PUT /api/jobs/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    /// Sent as entered.
    pub salary: String,
    pub responsibilities: String,
    pub requirements: String,
    pub contact: String,
    pub job_type: JobType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Error body shape used by the backend (`{"message": "..."}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// Salary and job type never fail a record: unusable values read as absent.

fn deserialize_salary<'de, D>(deserializer: D) -> Result<Option<Salary>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64().filter(|n| n.is_finite()).map(Salary::Amount),
        serde_json::Value::String(raw) => {
            let raw = raw.trim();
            match raw.parse::<f64>() {
                _ if raw.is_empty() => None,
                Ok(amount) if amount.is_finite() => Some(Salary::Amount(amount)),
                _ => Some(Salary::Text(raw.to_owned())),
            }
        }
        _ => None,
    })
}

fn deserialize_job_type<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|label| JobType::from_label(label.trim())))
}
