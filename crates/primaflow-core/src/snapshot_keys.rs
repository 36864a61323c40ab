//! Durable-storage key conventions.
//!
//! One namespaced key per logical step group, so a corrupt value only
//! costs that group's answers. Contact fields have no key on purpose:
//! they are never persisted.

/// Condition selections, free-text other conditions, confirmed primary.
pub const CONDITIONS: &str = "primaflow.conditions";

/// Sensations, pain level, treatment history.
pub const PROFILE: &str = "primaflow.profile";

/// Diagnosis, duration, age, risk answer, urgency, budget, affordability.
pub const QUALIFY: &str = "primaflow.qualify";

/// Additional info and session lifecycle timestamps.
pub const ADDITIONAL: &str = "primaflow.additional";

/// All group keys, in restore order.
pub const ALL: [&str; 4] = [CONDITIONS, PROFILE, QUALIFY, ADDITIONAL];
