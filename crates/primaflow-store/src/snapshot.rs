//! Per-group snapshot shapes.
//!
//! Each logical step group serializes to its own key so that one corrupt
//! value only costs that group's answers. Contact fields have no snapshot
//! shape at all.

use serde::{Deserialize, Serialize};

use primaflow_core::models::{
    AgeRange, AssessmentResponse, BudgetRange, DisqualifyReason, QualificationStatus,
    ResponsePatch, RiskAnswer, Urgency,
};
use primaflow_core::snapshot_keys;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsSnapshot {
    pub selected_condition_ids: Vec<String>,
    pub other_conditions_text: Option<String>,
    pub condition_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub sensations: Vec<String>,
    pub pain_level: Option<u8>,
    pub treatment_history: Vec<String>,
    pub other_treatments: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifySnapshot {
    pub has_clinical_diagnosis: Option<bool>,
    pub pain_duration_months: Option<u32>,
    pub age_range: Option<AgeRange>,
    pub suicidal_risk: Option<RiskAnswer>,
    pub future_spend_outlook: Option<String>,
    pub urgency: Option<Urgency>,
    pub budget: Option<BudgetRange>,
    pub affordability_confirmed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalSnapshot {
    pub started_at: Option<jiff::Timestamp>,
    pub completed_at: Option<jiff::Timestamp>,
    pub additional_info: Option<String>,
    pub qualification_status: QualificationStatus,
    pub disqualification_reason: Option<DisqualifyReason>,
}

/// Serialize the group identified by `key` out of the response.
pub fn capture_group(response: &AssessmentResponse, key: &str) -> Result<String, serde_json::Error> {
    match key {
        snapshot_keys::CONDITIONS => serde_json::to_string(&ConditionsSnapshot {
            selected_condition_ids: response.selected_condition_ids.clone(),
            other_conditions_text: response.other_conditions_text.clone(),
            condition_type: response.condition_type.clone(),
        }),
        snapshot_keys::PROFILE => serde_json::to_string(&ProfileSnapshot {
            sensations: response.sensations.clone(),
            pain_level: response.pain_level,
            treatment_history: response.treatment_history.clone(),
            other_treatments: response.other_treatments.clone(),
        }),
        snapshot_keys::QUALIFY => serde_json::to_string(&QualifySnapshot {
            has_clinical_diagnosis: response.has_clinical_diagnosis,
            pain_duration_months: response.pain_duration_months,
            age_range: response.age_range,
            suicidal_risk: response.suicidal_risk,
            future_spend_outlook: response.future_spend_outlook.clone(),
            urgency: response.urgency,
            budget: response.budget,
            affordability_confirmed: response.affordability_confirmed,
        }),
        snapshot_keys::ADDITIONAL => serde_json::to_string(&AdditionalSnapshot {
            started_at: response.started_at,
            completed_at: response.completed_at,
            additional_info: response.additional_info.clone(),
            qualification_status: response.qualification_status,
            disqualification_reason: response.disqualification_reason,
        }),
        other => unreachable!("unknown snapshot group key: {other}"),
    }
}

/// Parse the group identified by `key` and merge it into the response.
/// Returns a parse error without touching the response on corrupt input.
pub fn restore_group(
    response: &mut AssessmentResponse,
    key: &str,
    raw: &str,
) -> Result<(), serde_json::Error> {
    match key {
        snapshot_keys::CONDITIONS => {
            let snap: ConditionsSnapshot = serde_json::from_str(raw)?;
            response.selected_condition_ids = snap.selected_condition_ids;
            response.other_conditions_text = snap.other_conditions_text;
            response.condition_type = snap.condition_type;
        }
        snapshot_keys::PROFILE => {
            let snap: ProfileSnapshot = serde_json::from_str(raw)?;
            response.sensations = snap.sensations;
            response.pain_level = snap.pain_level;
            response.treatment_history = snap.treatment_history;
            response.other_treatments = snap.other_treatments;
        }
        snapshot_keys::QUALIFY => {
            let snap: QualifySnapshot = serde_json::from_str(raw)?;
            response.has_clinical_diagnosis = snap.has_clinical_diagnosis;
            response.pain_duration_months = snap.pain_duration_months;
            response.age_range = snap.age_range;
            response.suicidal_risk = snap.suicidal_risk;
            response.future_spend_outlook = snap.future_spend_outlook;
            response.urgency = snap.urgency;
            response.budget = snap.budget;
            response.affordability_confirmed = snap.affordability_confirmed;
        }
        snapshot_keys::ADDITIONAL => {
            let snap: AdditionalSnapshot = serde_json::from_str(raw)?;
            response.started_at = snap.started_at;
            response.completed_at = snap.completed_at;
            response.additional_info = snap.additional_info;
            response.qualification_status = snap.qualification_status;
            response.disqualification_reason = snap.disqualification_reason;
        }
        other => unreachable!("unknown snapshot group key: {other}"),
    }
    Ok(())
}

/// Which group keys a patch touches. Contact changes touch no group.
pub fn groups_for(patch: &ResponsePatch) -> Vec<&'static str> {
    let mut groups = Vec::new();

    if patch.selected_condition_ids.is_some()
        || patch.other_conditions_text.is_some()
        || patch.condition_type.is_some()
    {
        groups.push(snapshot_keys::CONDITIONS);
    }
    if patch.sensations.is_some()
        || patch.pain_level.is_some()
        || patch.treatment_history.is_some()
        || patch.other_treatments.is_some()
    {
        groups.push(snapshot_keys::PROFILE);
    }
    if patch.has_clinical_diagnosis.is_some()
        || patch.pain_duration_months.is_some()
        || patch.age_range.is_some()
        || patch.suicidal_risk.is_some()
        || patch.future_spend_outlook.is_some()
        || patch.urgency.is_some()
        || patch.budget.is_some()
        || patch.affordability_confirmed.is_some()
    {
        groups.push(snapshot_keys::QUALIFY);
    }
    if patch.started_at.is_some()
        || patch.completed_at.is_some()
        || patch.additional_info.is_some()
        || patch.qualification_status.is_some()
        || patch.disqualification_reason.is_some()
    {
        groups.push(snapshot_keys::ADDITIONAL);
    }

    groups
}
