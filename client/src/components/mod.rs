//! Reusable UI components shared across pages.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state from context and keep only presentation
//! state of their own; network calls belong to pages.

pub mod footer;
pub mod job_card;
pub mod job_form;
pub mod navbar;
pub mod protected;
pub mod toast;
