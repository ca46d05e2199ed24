//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `selection`, `jobs`, `toast`) so pages
//! depend on small focused models. Each model is plain data; `app` wraps
//! the shared ones in `RwSignal` contexts.

pub mod auth;
pub mod jobs;
pub mod selection;
pub mod toast;
