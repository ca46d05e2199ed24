//! Client-side route table and path classification.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` registers the same paths with the router; the guard uses
//! [`classify`] to decide which ones need a session.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ABOUT_PATH: &str = "/about";
pub const ALL_JOBS_PATH: &str = "/jobs/all-jobs";
pub const CREATE_JOB_PATH: &str = "/jobs/create";
pub const MY_JOBS_PATH: &str = "/jobs/my-jobs";

/// Access class of a client-side path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Renders for everyone.
    Public,
    /// Requires an authenticated session.
    Protected,
    /// Matches no route; redirected home.
    Unknown,
}

/// Detail route for a job. The page itself reads the selection, not the id.
pub fn job_detail_path(id: &str) -> String {
    format!("/jobs/{id}")
}

pub fn job_edit_path(id: &str) -> String {
    format!("/jobs/edit/{id}")
}

/// Classify `path`, ignoring any query string, fragment, or trailing slash.
pub fn classify(path: &str) -> RouteAccess {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] | ["jobs", _] | ["jobs", "edit", _] => RouteAccess::Protected,
        ["login" | "register" | "about"] => RouteAccess::Public,
        _ => RouteAccess::Unknown,
    }
}
