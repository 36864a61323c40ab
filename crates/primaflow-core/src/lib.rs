//! primaflow-core
//!
//! Pure domain types, snapshot key conventions, sanitization, and lead
//! scoring. No I/O — this is the shared vocabulary of the Primaflow funnel.

pub mod error;
pub mod models;
pub mod sanitize;
pub mod scoring;
pub mod snapshot_keys;
