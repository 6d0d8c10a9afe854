use super::*;
use serde_json::json;

fn patient(organ: &str) -> Patient {
    Patient {
        patient_id: 7,
        organ_req: organ.to_owned(),
        reason_of_procurement: None,
        doctor_id: Some(3),
        user_id: Some(11),
    }
}

fn donor(organ: &str) -> Donor {
    Donor {
        donor_id: 4,
        organ_donated: organ.to_owned(),
        reason_of_donation: None,
        organization_id: Some(2),
        user_id: Some(12),
    }
}

// =============================================================
// organs_compatible
// =============================================================

#[test]
fn equal_organs_match_case_insensitively() {
    assert!(organs_compatible("Kidney", "kidney"));
    assert!(organs_compatible("KIDNEY", "Kidney"));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(organs_compatible("  Kidney ", "kidney"));
}

#[test]
fn different_organs_do_not_match() {
    assert!(!organs_compatible("Kidney", "Liver"));
}

#[test]
fn blank_organs_never_match() {
    assert!(!organs_compatible("", ""));
    assert!(!organs_compatible("   ", "   "));
    assert!(!organs_compatible("Kidney", ""));
}

// =============================================================
// manual_match_precheck
// =============================================================

#[test]
fn compatible_pairing_passes_the_precheck() {
    let p = patient("Kidney");
    let d = donor("kidney");
    assert!(manual_match_precheck(Some(&p), Some(&d)).is_ok());
}

#[test]
fn organ_mismatch_is_rejected_locally() {
    let p = patient("Kidney");
    let d = donor("Liver");
    let err = manual_match_precheck(Some(&p), Some(&d)).unwrap_err();
    assert!(err.contains("mismatch"));
}

#[test]
fn missing_selection_is_rejected() {
    let p = patient("Kidney");
    assert!(manual_match_precheck(Some(&p), None).is_err());
    assert!(manual_match_precheck(None, None).is_err());
}

// =============================================================
// MatchStatus::normalize
// =============================================================

#[test]
fn numeric_and_boolean_one_mean_confirmed() {
    assert_eq!(MatchStatus::normalize(Some(&json!(1))), MatchStatus::Confirmed);
    assert_eq!(MatchStatus::normalize(Some(&json!(true))), MatchStatus::Confirmed);
}

#[test]
fn numeric_and_boolean_zero_mean_pending() {
    assert_eq!(MatchStatus::normalize(Some(&json!(0))), MatchStatus::Pending);
    assert_eq!(MatchStatus::normalize(Some(&json!(false))), MatchStatus::Pending);
}

#[test]
fn generated_string_normalizes_to_pending() {
    assert_eq!(MatchStatus::normalize(Some(&json!("generated"))), MatchStatus::Pending);
    assert_eq!(MatchStatus::normalize(Some(&json!("Generated "))), MatchStatus::Pending);
}

#[test]
fn confirmed_and_pending_strings_normalize() {
    assert_eq!(MatchStatus::normalize(Some(&json!("Confirmed"))), MatchStatus::Confirmed);
    assert_eq!(MatchStatus::normalize(Some(&json!("pending"))), MatchStatus::Pending);
}

#[test]
fn unrecognized_strings_pass_through_lowercased() {
    assert_eq!(
        MatchStatus::normalize(Some(&json!("In Review"))),
        MatchStatus::Other("in review".to_owned())
    );
}

#[test]
fn absent_or_blank_status_defaults_to_pending() {
    assert_eq!(MatchStatus::normalize(None), MatchStatus::Pending);
    assert_eq!(MatchStatus::normalize(Some(&serde_json::Value::Null)), MatchStatus::Pending);
    assert_eq!(MatchStatus::normalize(Some(&json!(""))), MatchStatus::Pending);
}

#[test]
fn unrecognized_numbers_pass_through_as_decimal() {
    assert_eq!(MatchStatus::normalize(Some(&json!(2))), MatchStatus::Other("2".to_owned()));
}

#[test]
fn owned_labels_outlive_the_normalized_status() {
    // Tables render the label after the normalized value goes out of scope.
    let label = {
        let status = MatchStatus::normalize(Some(&json!("In Review")));
        status.label().to_owned()
    };
    assert_eq!(label, "in review");
}

#[test]
fn labels_match_the_tri_state() {
    assert_eq!(MatchStatus::Pending.label(), "pending");
    assert_eq!(MatchStatus::Confirmed.label(), "confirmed");
    assert_eq!(MatchStatus::Other("2".to_owned()).label(), "2");
}
