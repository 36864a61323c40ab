//! Wire shapes for the submission endpoint.
//!
//! Field names are camelCase on the wire to match the backend contract.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use primaflow_core::models::{
    AssessmentResponse, BudgetRange, ContactInfo, DisqualifyReason, QualificationStatus,
    Urgency,
};
use primaflow_core::{sanitize, scoring};

use crate::error::SubmissionError;

/// Free-text answers are clamped to this length before they leave the
/// client, mirroring the backend's own limit.
const MAX_FREE_TEXT: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub assessment: AssessmentData,
    pub contact_info: ContactInfo,
    pub lead_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentData {
    pub conditions: Vec<String>,
    pub other_conditions: Option<String>,
    pub condition_type: Option<String>,
    pub sensations: Vec<String>,
    pub pain_duration_months: Option<u32>,
    pub pain_level: Option<u8>,
    pub previous_treatments: Vec<String>,
    pub other_treatments: Option<String>,
    pub urgency: Option<Urgency>,
    pub budget_range: Option<BudgetRange>,
    pub affordability_confirmed: Option<bool>,
    pub additional_info: Option<String>,
    pub qualification_status: QualificationStatus,
    pub disqualification_reason: Option<DisqualifyReason>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Timestamp,
}

/// Request provenance attached to the submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub user_agent: String,
    pub referrer: String,
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl Metadata {
    /// Stamp provenance for a submission happening now, with a fresh
    /// session id.
    pub fn new(user_agent: impl Into<String>, referrer: impl Into<String>) -> Metadata {
        Metadata {
            user_agent: user_agent.into(),
            referrer: referrer.into(),
            timestamp: Timestamp::now(),
            session_id: Some(uuid::Uuid::new_v4().to_string()),
        }
    }
}

/// Acknowledgment from a 2xx submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
    pub success: bool,
    pub assessment_id: String,
    pub lead_id: String,
}

/// Error body contract: `{ success: false, error, code?, errors?, details? }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl SubmitRequest {
    /// Build the outgoing payload from the accumulated response.
    ///
    /// Contact details must be present and valid; free text is sanitized;
    /// a still-pending qualification status is stamped from the
    /// lead-scoring rules before it goes out.
    pub fn from_response(
        response: &AssessmentResponse,
        completed_at: Timestamp,
        metadata: Option<Metadata>,
    ) -> Result<SubmitRequest, SubmissionError> {
        let contact = response
            .contact
            .as_ref()
            .ok_or_else(|| SubmissionError::IncompleteResponse("contact info missing".into()))?;
        contact
            .validate()
            .map_err(|e| SubmissionError::IncompleteResponse(e.to_string()))?;

        let mut qualification_status = response.qualification_status;
        let mut disqualification_reason = response.disqualification_reason;
        if qualification_status == QualificationStatus::Pending {
            qualification_status = scoring::determine_qualification_status(
                response.affordability_confirmed,
                response.budget,
                response.urgency,
            );
            if disqualification_reason.is_none() {
                disqualification_reason = scoring::budget_disqualify_reason(
                    response.affordability_confirmed,
                    response.budget,
                );
            }
        }

        Ok(SubmitRequest {
            assessment: AssessmentData {
                conditions: response.selected_condition_ids.clone(),
                other_conditions: sanitize_opt(&response.other_conditions_text),
                condition_type: response.condition_type.clone(),
                sensations: response.sensations.clone(),
                pain_duration_months: response.pain_duration_months,
                pain_level: response.pain_level,
                previous_treatments: response.treatment_history.clone(),
                other_treatments: sanitize_opt(&response.other_treatments),
                urgency: response.urgency,
                budget_range: response.budget,
                affordability_confirmed: response.affordability_confirmed,
                additional_info: sanitize_opt(&response.additional_info),
                qualification_status,
                disqualification_reason,
                started_at: response.started_at,
                completed_at,
            },
            contact_info: contact.normalized(),
            lead_source: "website".to_string(),
            metadata,
        })
    }
}

fn sanitize_opt(text: &Option<String>) -> Option<String> {
    text.as_deref()
        .map(|t| sanitize::sanitize_text(t, MAX_FREE_TEXT))
        .filter(|t| !t.is_empty())
}
