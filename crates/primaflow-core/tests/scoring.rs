use primaflow_core::models::{BudgetRange, DisqualifyReason, QualificationStatus, Urgency};
use primaflow_core::scoring::{budget_disqualify_reason, determine_qualification_status};

#[test]
fn no_budget_disqualifies() {
    assert_eq!(
        determine_qualification_status(Some(false), None, Some(Urgency::Immediate)),
        QualificationStatus::Disqualified
    );
    assert_eq!(
        budget_disqualify_reason(Some(false), None),
        Some(DisqualifyReason::NoBudget)
    );
}

#[test]
fn lowest_tier_disqualifies() {
    assert_eq!(
        determine_qualification_status(Some(true), Some(BudgetRange::Under5k), None),
        QualificationStatus::Disqualified
    );
    assert_eq!(
        budget_disqualify_reason(Some(true), Some(BudgetRange::Under5k)),
        Some(DisqualifyReason::BudgetBelowMinimum)
    );
}

#[test]
fn top_tiers_qualify_regardless_of_urgency() {
    assert_eq!(
        determine_qualification_status(Some(true), Some(BudgetRange::From15kTo30k), None),
        QualificationStatus::Qualified
    );
    assert_eq!(
        determine_qualification_status(
            Some(true),
            Some(BudgetRange::Over30k),
            Some(Urgency::Exploring)
        ),
        QualificationStatus::Qualified
    );
}

#[test]
fn high_urgency_qualifies_mid_budget() {
    assert_eq!(
        determine_qualification_status(
            Some(true),
            Some(BudgetRange::From5kTo15k),
            Some(Urgency::WithinMonth)
        ),
        QualificationStatus::Qualified
    );
}

#[test]
fn everything_else_is_pending() {
    assert_eq!(
        determine_qualification_status(None, None, None),
        QualificationStatus::Pending
    );
    assert_eq!(
        determine_qualification_status(
            Some(true),
            Some(BudgetRange::From5kTo15k),
            Some(Urgency::FewMonths)
        ),
        QualificationStatus::Pending
    );
    assert_eq!(budget_disqualify_reason(None, None), None);
}
