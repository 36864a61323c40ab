//! primaflow-routing
//!
//! The routing engine: given the current response and the catalog, compute
//! the next step of the funnel. Pure — no I/O, no hidden state, the same
//! response always yields the same step.

pub mod engine;
pub mod step;

pub use engine::{Decision, decide, next_step, resolve_disqualify_reason};
pub use step::StepId;
