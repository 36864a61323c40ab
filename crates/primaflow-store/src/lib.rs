//! primaflow-store
//!
//! The response store: owns the session's single mutable
//! `AssessmentResponse`, merges screen-level patches into it, and persists
//! per-group snapshots to a local backend with a debounced writer.
//! Contact fields live in memory only and are never written to a backend.

pub mod backend;
pub mod error;
pub mod snapshot;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, SnapshotBackend};
pub use error::StoreError;
pub use store::{ResponseStore, StoreConfig};
