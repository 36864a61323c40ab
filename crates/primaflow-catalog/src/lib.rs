//! primaflow-catalog
//!
//! The reference taxonomy: condition, treatment, and sensation tables.
//! Pure data — loaded once, never mutated. Branching decisions key off the
//! condition categories defined here.

pub mod conditions;
pub mod sensations;
pub mod treatments;

use serde::{Deserialize, Serialize};

use primaflow_core::models::DisqualifyReason;

/// Eligibility classification for a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Treatable,
    NonTreatable,
}

/// A catalog condition entry. `id` is stable and referenced from
/// `AssessmentResponse::selected_condition_ids`.
#[derive(Debug, Clone, Serialize)]
pub struct Condition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ConditionCategory,
    /// Optional grouping parent (e.g. "spine" for back and neck pain).
    pub parent_id: Option<&'static str>,
    /// Condition-specific disqualification reason, when copy exists for
    /// it. Absent means the category-level fallback applies.
    pub disqualify_reason: Option<DisqualifyReason>,
}

impl Condition {
    pub fn is_treatable(&self) -> bool {
        self.category == ConditionCategory::Treatable
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Treatment {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sensation {
    pub id: &'static str,
    pub name: &'static str,
}

/// All catalog conditions.
pub fn all_conditions() -> &'static [Condition] {
    conditions::table()
}

/// Look up a condition by id.
pub fn condition_by_id(id: &str) -> Option<&'static Condition> {
    conditions::table().iter().find(|c| c.id == id)
}

/// All conditions in a category.
pub fn conditions_by_category(category: ConditionCategory) -> Vec<&'static Condition> {
    conditions::table()
        .iter()
        .filter(|c| c.category == category)
        .collect()
}

/// Resolve a list of selected ids against the catalog.
///
/// Unresolved ids are dropped — an unknown id must never count as
/// treatable or non-treatable.
pub fn resolve_conditions(ids: &[String]) -> Vec<&'static Condition> {
    ids.iter().filter_map(|id| condition_by_id(id)).collect()
}

pub fn all_treatments() -> &'static [Treatment] {
    treatments::table()
}

pub fn treatment_by_id(id: &str) -> Option<&'static Treatment> {
    treatments::table().iter().find(|t| t.id == id)
}

pub fn all_sensations() -> &'static [Sensation] {
    sensations::table()
}

pub fn sensation_by_id(id: &str) -> Option<&'static Sensation> {
    sensations::table().iter().find(|s| s.id == id)
}
