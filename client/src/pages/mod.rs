//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its requests and their fetch state, and delegates
//! rendering details to `components`. No page error escapes to a global
//! handler.

pub mod about;
pub mod home;
pub mod job_create;
pub mod job_detail;
pub mod job_edit;
pub mod job_list;
pub mod login;
pub mod my_jobs;
pub mod register;
