//! Networking modules for the job board REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` classifies their failures into
//! user-facing messages, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
