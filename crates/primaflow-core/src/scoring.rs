//! Lead-scoring rules applied to the finished record.
//!
//! This is separate from routing: routing decides which screen the visitor
//! sees next, scoring stamps the sales-facing qualification tier onto the
//! outgoing submission.

use crate::models::qualification::{
    BudgetRange, DisqualifyReason, QualificationStatus, Urgency,
};

/// Determine the lead qualification tier from budget and urgency answers.
///
/// Rules:
/// - Disqualified: visitor confirmed they have no budget, or picked the
///   lowest tier.
/// - Qualified: budget in one of the two top tiers, or urgency is
///   immediate / within a month.
/// - Pending: everything else (mid-range budget, exploratory urgency, or
///   unanswered).
pub fn determine_qualification_status(
    has_budget: Option<bool>,
    budget: Option<BudgetRange>,
    urgency: Option<Urgency>,
) -> QualificationStatus {
    if has_budget == Some(false) {
        return QualificationStatus::Disqualified;
    }

    if budget == Some(BudgetRange::Under5k) {
        return QualificationStatus::Disqualified;
    }

    if matches!(
        budget,
        Some(BudgetRange::From15kTo30k) | Some(BudgetRange::Over30k)
    ) {
        return QualificationStatus::Qualified;
    }

    if matches!(urgency, Some(Urgency::Immediate) | Some(Urgency::WithinMonth)) {
        return QualificationStatus::Qualified;
    }

    QualificationStatus::Pending
}

/// Budget-side disqualification reason, when scoring disqualifies.
pub fn budget_disqualify_reason(
    has_budget: Option<bool>,
    budget: Option<BudgetRange>,
) -> Option<DisqualifyReason> {
    if has_budget == Some(false) {
        return Some(DisqualifyReason::NoBudget);
    }
    if budget == Some(BudgetRange::Under5k) {
        return Some(DisqualifyReason::BudgetBelowMinimum);
    }
    None
}
