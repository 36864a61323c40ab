use serde::{Deserialize, Serialize};

use crate::models::contact::ContactInfo;
use crate::models::qualification::{
    AgeRange, BudgetRange, DisqualifyReason, QualificationStatus, RiskAnswer, Urgency,
};

/// The single record accumulated across a visitor's session.
///
/// Every screen merges its answers into this struct via [`ResponsePatch`];
/// the routing engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub started_at: Option<jiff::Timestamp>,
    pub completed_at: Option<jiff::Timestamp>,

    // Qualification screens
    pub has_clinical_diagnosis: Option<bool>,
    pub pain_duration_months: Option<u32>,
    pub age_range: Option<AgeRange>,
    pub suicidal_risk: Option<RiskAnswer>,
    pub future_spend_outlook: Option<String>,

    // Condition screens
    pub selected_condition_ids: Vec<String>,
    pub other_conditions_text: Option<String>,
    /// Confirmed primary condition id. Set by the condition-confirmation
    /// step; once present the condition gate does not re-fire.
    pub condition_type: Option<String>,

    // Profile screens
    pub sensations: Vec<String>,
    pub pain_level: Option<u8>,
    pub treatment_history: Vec<String>,
    pub other_treatments: Option<String>,
    pub urgency: Option<Urgency>,
    pub budget: Option<BudgetRange>,
    pub affordability_confirmed: Option<bool>,
    pub additional_info: Option<String>,

    // Volatile only — excluded from every snapshot group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,

    pub qualification_status: QualificationStatus,
    pub disqualification_reason: Option<DisqualifyReason>,
}

impl AssessmentResponse {
    /// Fresh session record, stamped with its start time.
    pub fn new(started_at: jiff::Timestamp) -> Self {
        AssessmentResponse {
            started_at: Some(started_at),
            ..Default::default()
        }
    }

    /// Merge a partial patch, last-write-wins per field.
    ///
    /// Two fields are guarded: `disqualification_reason` is set at most
    /// once and never cleared or replaced, and `qualification_status`
    /// only ever moves out of `Pending`.
    pub fn apply(&mut self, patch: ResponsePatch) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = patch.$field {
                    self.$field = Some(v);
                })*
            };
        }
        merge!(
            started_at,
            completed_at,
            has_clinical_diagnosis,
            pain_duration_months,
            age_range,
            suicidal_risk,
            future_spend_outlook,
            other_conditions_text,
            condition_type,
            pain_level,
            other_treatments,
            urgency,
            budget,
            affordability_confirmed,
            additional_info,
            contact,
        );
        if let Some(ids) = patch.selected_condition_ids {
            self.selected_condition_ids = ids;
        }
        if let Some(sensations) = patch.sensations {
            self.sensations = sensations;
        }
        if let Some(history) = patch.treatment_history {
            self.treatment_history = history;
        }
        if let Some(status) = patch.qualification_status
            && self.qualification_status == QualificationStatus::Pending
        {
            self.qualification_status = status;
        }
        if let Some(reason) = patch.disqualification_reason
            && self.disqualification_reason.is_none()
        {
            self.disqualification_reason = Some(reason);
        }
    }

    /// Record a disqualification outcome. The first reason recorded is
    /// terminal for the session.
    pub fn disqualify(&mut self, reason: DisqualifyReason) {
        if self.disqualification_reason.is_none() {
            self.disqualification_reason = Some(reason);
        }
        if self.qualification_status == QualificationStatus::Pending {
            self.qualification_status = QualificationStatus::Disqualified;
        }
    }

    /// Wipe contact fields from memory.
    pub fn clear_contact(&mut self) {
        self.contact = None;
    }
}

/// Per-field partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePatch {
    pub started_at: Option<jiff::Timestamp>,
    pub completed_at: Option<jiff::Timestamp>,
    pub has_clinical_diagnosis: Option<bool>,
    pub pain_duration_months: Option<u32>,
    pub age_range: Option<AgeRange>,
    pub suicidal_risk: Option<RiskAnswer>,
    pub future_spend_outlook: Option<String>,
    pub selected_condition_ids: Option<Vec<String>>,
    pub other_conditions_text: Option<String>,
    pub condition_type: Option<String>,
    pub sensations: Option<Vec<String>>,
    pub pain_level: Option<u8>,
    pub treatment_history: Option<Vec<String>>,
    pub other_treatments: Option<String>,
    pub urgency: Option<Urgency>,
    pub budget: Option<BudgetRange>,
    pub affordability_confirmed: Option<bool>,
    pub additional_info: Option<String>,
    pub contact: Option<ContactInfo>,
    pub qualification_status: Option<QualificationStatus>,
    pub disqualification_reason: Option<DisqualifyReason>,
}
