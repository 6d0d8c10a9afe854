use super::*;
use serde_json::json;

// =============================================================
// Deserialization against backend field names
// =============================================================

#[test]
fn user_row_parses_backend_casing() {
    let user: User = serde_json::from_value(json!({
        "User_ID": 12,
        "Name": "Asha",
        "Date_of_Birth": "1990-04-01",
        "Medical_history": "none",
        "City": "Pune"
    }))
    .unwrap();
    assert_eq!(user.user_id, 12);
    assert_eq!(user.name, "Asha");
    assert_eq!(user.city.as_deref(), Some("Pune"));
    assert!(user.street.is_none());
}

#[test]
fn donor_row_tolerates_null_optionals() {
    let donor: Donor = serde_json::from_value(json!({
        "Donor_ID": 4,
        "organ_donated": "Kidney",
        "reason_of_donation": null,
        "Organization_ID": null,
        "User_ID": 9
    }))
    .unwrap();
    assert_eq!(donor.donor_id, 4);
    assert!(donor.reason_of_donation.is_none());
    assert!(donor.organization_id.is_none());
    assert_eq!(donor.user_id, Some(9));
}

#[test]
fn match_record_keeps_status_raw() {
    let row: MatchRecord = serde_json::from_value(json!({
        "Patient_ID": 7,
        "Donor_ID": 4,
        "organ": "Kidney",
        "Status": 1
    }))
    .unwrap();
    assert_eq!(row.status, Some(json!(1)));
    assert_eq!(row.organ.as_deref(), Some("Kidney"));
}

// =============================================================
// Serialization of create payloads
// =============================================================

#[test]
fn new_user_serializes_blank_optionals_as_null() {
    let payload = serde_json::to_value(NewUser {
        user_id: 1,
        name: "Asha".to_owned(),
        date_of_birth: "1990-04-01".to_owned(),
        medical_insurance: None,
        medical_history: Some("none".to_owned()),
        street: None,
        city: None,
        state: None,
    })
    .unwrap();
    assert_eq!(payload["User_ID"], json!(1));
    assert_eq!(payload["Medical_insurance"], serde_json::Value::Null);
    assert_eq!(payload["Medical_history"], json!("none"));
}

#[test]
fn manual_match_request_uses_snake_case() {
    let payload = serde_json::to_value(ManualMatchRequest { patient_id: 7, donor_id: 4 }).unwrap();
    assert_eq!(payload, json!({"patient_id": 7, "donor_id": 4}));
}

// =============================================================
// coerce_list
// =============================================================

#[test]
fn non_array_bodies_coerce_to_empty() {
    let out: Vec<Donor> = coerce_list(json!({"error": "boom"}));
    assert!(out.is_empty());
    let out: Vec<Donor> = coerce_list(json!("nope"));
    assert!(out.is_empty());
}

#[test]
fn array_bodies_deserialize_row_by_row() {
    let out: Vec<Donor> = coerce_list(json!([
        {"Donor_ID": 1, "organ_donated": "Kidney"},
        {"Donor_ID": 2, "organ_donated": "Liver", "User_ID": 5}
    ]));
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].user_id, Some(5));
}

#[test]
fn malformed_rows_are_dropped_not_fatal() {
    let out: Vec<Donor> = coerce_list(json!([
        {"Donor_ID": 1, "organ_donated": "Kidney"},
        {"organ_donated": "Liver"}
    ]));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].donor_id, 1);
}

// =============================================================
// Searchable designated fields
// =============================================================

#[test]
fn user_search_fields_are_the_designated_columns() {
    let user = User {
        user_id: 12,
        name: "Asha".to_owned(),
        date_of_birth: Some("1990-04-01".to_owned()),
        medical_insurance: Some("ACME".to_owned()),
        medical_history: Some("none".to_owned()),
        street: Some("12 Elm".to_owned()),
        city: Some("Pune".to_owned()),
        state: Some("MH".to_owned()),
    };
    let fields = user.search_fields();
    assert!(fields.contains(&"Asha".to_owned()));
    assert!(fields.contains(&"Pune".to_owned()));
    // Insurance and street are not designated filter columns.
    assert!(!fields.contains(&"ACME".to_owned()));
    assert!(!fields.contains(&"12 Elm".to_owned()));
}

#[test]
fn donor_search_fields_include_numeric_ids() {
    let donor = Donor {
        donor_id: 4,
        organ_donated: "Kidney".to_owned(),
        reason_of_donation: None,
        organization_id: Some(22),
        user_id: Some(9),
    };
    let fields = donor.search_fields();
    assert!(fields.contains(&"22".to_owned()));
    assert!(fields.contains(&"9".to_owned()));
}
