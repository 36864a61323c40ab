use tracing::debug;

use primaflow_catalog::{Condition, resolve_conditions};
use primaflow_core::models::{
    AssessmentResponse, BudgetRange, DisqualifyReason, RiskAnswer,
};

use crate::step::StepId;

/// Months of pain below which the visitor is routed to the waiting list.
const MIN_PAIN_DURATION_MONTHS: u32 = 6;

/// A routing outcome: the next step, plus the disqualification reason to
/// record when the step is a disqualifying terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub step: StepId,
    pub disqualify_reason: Option<DisqualifyReason>,
}

impl Decision {
    fn proceed(step: StepId) -> Decision {
        Decision {
            step,
            disqualify_reason: None,
        }
    }

    fn disqualify(step: StepId, reason: DisqualifyReason) -> Decision {
        Decision {
            step,
            disqualify_reason: Some(reason),
        }
    }
}

/// Compute the next step for the current response.
///
/// Pure and idempotent: no I/O, no hidden state. Safe to call repeatedly
/// at every decision point with the latest merged response.
pub fn next_step(response: &AssessmentResponse) -> StepId {
    decide(response).step
}

/// Full decision, including the reason to record on disqualification.
///
/// Gate order: the risk gate runs first so a yes answer dominates every
/// other field value. The remaining gates run top-down; the first match
/// wins. Gates whose inputs are unanswered are skipped.
pub fn decide(response: &AssessmentResponse) -> Decision {
    // Risk gate. Supersedes any other outcome, including ones already
    // recorded on the response.
    if response.suicidal_risk == Some(RiskAnswer::Yes) {
        return Decision::disqualify(StepId::SafetyExit, DisqualifyReason::SafetyRisk);
    }

    // Duration gate. Not a disqualification — different terminal branch.
    if let Some(months) = response.pain_duration_months
        && months < MIN_PAIN_DURATION_MONTHS
    {
        return Decision::proceed(StepId::WaitingList);
    }

    // Condition gate. Skipped once the primary condition is confirmed.
    if response.condition_type.is_none() {
        if let Some(decision) = condition_gate(response) {
            return decision;
        }
    }

    // Budget gate. The affordability step never disqualifies; both of its
    // answers converge, so once answered the gate is passed.
    if response.budget == Some(BudgetRange::Under5k)
        && response.affordability_confirmed.is_none()
    {
        return Decision::proceed(StepId::AffordabilityCheck);
    }

    Decision::proceed(StepId::Results)
}

/// Evaluate the condition gate. Returns `None` when the gate is passed
/// (a treatable confirmation pathway is not needed here — `decide` skips
/// the whole gate once `condition_type` is set).
fn condition_gate(response: &AssessmentResponse) -> Option<Decision> {
    // Unknown ids are dropped during resolution: a malformed upstream id
    // must never qualify or disqualify anyone on its own.
    let resolved = resolve_conditions(&response.selected_condition_ids);

    if resolved.is_empty() {
        let has_free_text = response
            .other_conditions_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());

        if has_free_text {
            return Some(Decision::proceed(StepId::ManualReview));
        }
        // No actionable condition signal at all.
        return Some(Decision::disqualify(
            StepId::Disqualified,
            DisqualifyReason::NoActionableDiagnosis,
        ));
    }

    if resolved.iter().any(|c| c.is_treatable()) {
        // Treatable presence overrides any non-treatable co-selections.
        return Some(Decision::proceed(StepId::ConditionConfirmation));
    }

    let reason = resolve_disqualify_reason(false, &resolved);
    debug!(?reason, "all selected conditions non-treatable");
    Some(Decision::disqualify(StepId::Disqualified, reason))
}

/// Resolve a disqualification reason with total, deterministic precedence:
/// risk > named condition reason (by id) > category-level non-treatable
/// fallback > no-actionable default.
pub fn resolve_disqualify_reason(
    risk: bool,
    conditions: &[&'static Condition],
) -> DisqualifyReason {
    if risk {
        return DisqualifyReason::SafetyRisk;
    }
    if let Some(named) = conditions.iter().find_map(|c| c.disqualify_reason) {
        return named;
    }
    if !conditions.is_empty() {
        return DisqualifyReason::NonTreatableCondition;
    }
    DisqualifyReason::NoActionableDiagnosis
}
