use super::*;

// =============================================================
// Endpoint table
// =============================================================

#[test]
fn auth_routes() {
    assert_eq!(auth_login(), "/api/auth/login");
    assert_eq!(auth_logout(), "/api/auth/logout");
    assert_eq!(auth_me(), "/api/auth/me");
}

#[test]
fn collection_and_item_routes() {
    assert_eq!(users(), "/api/users");
    assert_eq!(user(12), "/api/users/12");
    assert_eq!(donors(), "/api/donors");
    assert_eq!(donor(4), "/api/donors/4");
    assert_eq!(patients(), "/api/patients");
}

#[test]
fn matching_and_report_routes() {
    assert_eq!(matching_auto(), "/api/matching/auto");
    assert_eq!(matching_manual(), "/api/matching/manual");
    assert_eq!(reports_summary(), "/api/reports/summary");
    assert_eq!(reports_matches(), "/api/reports/matches");
    assert_eq!(stats_summary(), "/api/stats/summary");
}

// =============================================================
// Composite patient key
// =============================================================

#[test]
fn patient_route_carries_both_key_parts() {
    assert_eq!(patient(7, "Kidney"), "/api/patients/7/Kidney");
}

#[test]
fn organ_segment_is_percent_encoded() {
    assert_eq!(patient(7, "Bone Marrow"), "/api/patients/7/Bone%20Marrow");
    assert_eq!(patient(7, "a/b"), "/api/patients/7/a%2Fb");
}

#[test]
fn unreserved_characters_survive_encoding() {
    assert_eq!(patient(1, "heart-valve_x.y~z"), "/api/patients/1/heart-valve_x.y~z");
}
