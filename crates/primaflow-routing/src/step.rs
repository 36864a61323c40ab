use serde::{Deserialize, Serialize};

/// The closed set of decision-point destinations.
///
/// Each variant maps 1:1 to a presentation route; the engine does not care
/// how a route is rendered. Adding a variant forces every match over steps
/// to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Safety-resources terminal. Hard disqualification, always wins.
    SafetyExit,
    /// Pain duration under the eligibility threshold. A softer terminal
    /// than disqualification — the visitor joins the waiting list.
    WaitingList,
    /// At least one treatable condition selected; confirm the primary.
    ConditionConfirmation,
    /// No catalog selection but free-text conditions present; flagged for
    /// manual review.
    ManualReview,
    /// Lowest budget tier; confirm affordability before continuing.
    AffordabilityCheck,
    /// Generic disqualification terminal.
    Disqualified,
    /// Qualified: results and lead capture.
    Results,
}

impl StepId {
    /// The externally-owned presentation route for this step.
    pub fn route_slug(&self) -> &'static str {
        match self {
            StepId::SafetyExit => "safety-resources",
            StepId::WaitingList => "waiting-list",
            StepId::ConditionConfirmation => "condition-confirmation",
            StepId::ManualReview => "manual-review",
            StepId::AffordabilityCheck => "affordability-check",
            StepId::Disqualified => "not-a-fit",
            StepId::Results => "results",
        }
    }

    /// True for steps that end the session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepId::SafetyExit | StepId::WaitingList | StepId::Disqualified
        )
    }
}
