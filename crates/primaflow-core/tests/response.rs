use primaflow_core::models::{
    AssessmentResponse, BudgetRange, ContactInfo, DisqualifyReason, QualificationStatus,
    ResponsePatch, Urgency,
};

#[test]
fn apply_merges_last_write_wins() {
    let mut response = AssessmentResponse::default();

    response.apply(ResponsePatch {
        pain_duration_months: Some(3),
        ..Default::default()
    });
    response.apply(ResponsePatch {
        pain_duration_months: Some(12),
        budget: Some(BudgetRange::From5kTo15k),
        ..Default::default()
    });

    assert_eq!(response.pain_duration_months, Some(12));
    assert_eq!(response.budget, Some(BudgetRange::From5kTo15k));
}

#[test]
fn apply_leaves_untouched_fields_alone() {
    let mut response = AssessmentResponse::default();
    response.apply(ResponsePatch {
        selected_condition_ids: Some(vec!["back-pain".into()]),
        ..Default::default()
    });
    response.apply(ResponsePatch {
        urgency: Some(Urgency::Immediate),
        ..Default::default()
    });

    assert_eq!(response.selected_condition_ids, vec!["back-pain".to_string()]);
    assert_eq!(response.urgency, Some(Urgency::Immediate));
}

#[test]
fn disqualification_reason_is_terminal() {
    let mut response = AssessmentResponse::default();
    response.disqualify(DisqualifyReason::Fibromyalgia);
    response.disqualify(DisqualifyReason::NoActionableDiagnosis);

    assert_eq!(
        response.disqualification_reason,
        Some(DisqualifyReason::Fibromyalgia)
    );
    assert_eq!(
        response.qualification_status,
        QualificationStatus::Disqualified
    );
}

#[test]
fn patch_cannot_replace_existing_reason() {
    let mut response = AssessmentResponse::default();
    response.disqualify(DisqualifyReason::SafetyRisk);

    response.apply(ResponsePatch {
        disqualification_reason: Some(DisqualifyReason::NoBudget),
        qualification_status: Some(QualificationStatus::Qualified),
        ..Default::default()
    });

    assert_eq!(
        response.disqualification_reason,
        Some(DisqualifyReason::SafetyRisk)
    );
    // Status already left Pending, so the patch must not overwrite it.
    assert_eq!(
        response.qualification_status,
        QualificationStatus::Disqualified
    );
}

#[test]
fn clear_contact_wipes_contact_only() {
    let mut response = AssessmentResponse::default();
    response.apply(ResponsePatch {
        contact: Some(ContactInfo {
            name: "Jamie Doe".into(),
            email: "jamie@example.com".into(),
            phone: None,
        }),
        pain_level: Some(7),
        ..Default::default()
    });

    response.clear_contact();

    assert!(response.contact.is_none());
    assert_eq!(response.pain_level, Some(7));
}

#[test]
fn contact_validation_rejects_bad_shapes() {
    let bad_email = ContactInfo {
        name: "Jamie Doe".into(),
        email: "not-an-email".into(),
        phone: None,
    };
    assert!(bad_email.validate().is_err());

    let short_name = ContactInfo {
        name: "J".into(),
        email: "jamie@example.com".into(),
        phone: None,
    };
    assert!(short_name.validate().is_err());

    let good = ContactInfo {
        name: "Jamie Doe".into(),
        email: "jamie@example.com".into(),
        phone: Some("(555) 010-0199".into()),
    };
    assert!(good.validate().is_ok());
}

#[test]
fn name_length_counts_characters_not_bytes() {
    // 60 two-byte characters: over 100 bytes, well under 100 characters.
    let accented = ContactInfo {
        name: "é".repeat(60),
        email: "jamie@example.com".into(),
        phone: None,
    };
    assert!(accented.validate().is_ok());

    let too_long = ContactInfo {
        name: "é".repeat(101),
        email: "jamie@example.com".into(),
        phone: None,
    };
    assert!(too_long.validate().is_err());
}
