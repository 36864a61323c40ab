use std::sync::LazyLock;

use primaflow_core::models::DisqualifyReason;

use crate::{Condition, ConditionCategory};

pub(crate) fn table() -> &'static [Condition] {
    static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
        use ConditionCategory::{NonTreatable, Treatable};

        vec![
            // Spine
            condition("back-pain", "Chronic Back Pain", Treatable, Some("spine"), None),
            condition("neck-pain", "Chronic Neck Pain", Treatable, Some("spine"), None),
            condition(
                "disc-degeneration",
                "Degenerative Disc Disease",
                Treatable,
                Some("spine"),
                None,
            ),
            condition("sciatica", "Sciatica", Treatable, Some("spine"), None),
            // Joints
            condition(
                "knee-osteoarthritis",
                "Knee Osteoarthritis",
                Treatable,
                Some("joint"),
                None,
            ),
            condition(
                "hip-osteoarthritis",
                "Hip Osteoarthritis",
                Treatable,
                Some("joint"),
                None,
            ),
            condition(
                "shoulder-injury",
                "Shoulder Injury",
                Treatable,
                Some("joint"),
                None,
            ),
            // Soft tissue
            condition("tendon-injury", "Tendon or Ligament Injury", Treatable, None, None),
            condition("sports-injury", "Chronic Sports Injury", Treatable, None, None),
            // Outside the treatment envelope. Conditions with dedicated
            // explanation copy carry their own reason key.
            condition(
                "fibromyalgia",
                "Fibromyalgia",
                NonTreatable,
                None,
                Some(DisqualifyReason::Fibromyalgia),
            ),
            condition(
                "chronic-fatigue",
                "Chronic Fatigue Syndrome",
                NonTreatable,
                None,
                Some(DisqualifyReason::ChronicFatigue),
            ),
            condition(
                "active-cancer",
                "Active Cancer",
                NonTreatable,
                None,
                Some(DisqualifyReason::ActiveCancer),
            ),
            condition(
                "autoimmune-flare",
                "Active Autoimmune Flare",
                NonTreatable,
                None,
                Some(DisqualifyReason::AutoimmuneCondition),
            ),
            condition("widespread-neuropathy", "Widespread Neuropathy", NonTreatable, None, None),
        ]
    });
    &CONDITIONS
}

fn condition(
    id: &'static str,
    name: &'static str,
    category: ConditionCategory,
    parent_id: Option<&'static str>,
    disqualify_reason: Option<DisqualifyReason>,
) -> Condition {
    Condition {
        id,
        name,
        category,
        parent_id,
        disqualify_reason,
    }
}
