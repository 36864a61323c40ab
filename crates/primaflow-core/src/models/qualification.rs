use serde::{Deserialize, Serialize};

/// Terminal classification of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationStatus {
    Qualified,
    Disqualified,
    #[default]
    Pending,
}

/// Enumerated key explaining why a session was routed to a terminal exit.
/// Used downstream to select explanatory copy, so the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisqualifyReason {
    /// Visitor answered yes on the suicidal-risk screen. Always wins.
    SafetyRisk,
    Fibromyalgia,
    ChronicFatigue,
    ActiveCancer,
    AutoimmuneCondition,
    /// Category-level fallback for a non-treatable condition with no
    /// condition-specific reason in the catalog.
    NonTreatableCondition,
    /// No selected conditions and no free-text signal.
    NoActionableDiagnosis,
    NoBudget,
    BudgetBelowMinimum,
}

/// Answer to the suicidal-risk screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAnswer {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Immediate,
    WithinMonth,
    FewMonths,
    Exploring,
}

/// Budget tier selection. `Under5k` is the lowest tier and the only one
/// that triggers the affordability-confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under-5k")]
    Under5k,
    #[serde(rename = "5k-15k")]
    From5kTo15k,
    #[serde(rename = "15k-30k")]
    From15kTo30k,
    #[serde(rename = "over-30k")]
    Over30k,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "under-30")]
    Under30,
    #[serde(rename = "30-45")]
    From30To45,
    #[serde(rename = "46-60")]
    From46To60,
    #[serde(rename = "over-60")]
    Over60,
}
