use super::*;

// =============================================================
// should_force_login
// =============================================================

#[test]
fn unauthorized_away_from_login_forces_redirect() {
    assert!(should_force_login(401, "/users"));
    assert!(should_force_login(401, "/"));
}

#[test]
fn unauthorized_on_login_page_does_not_redirect_again() {
    assert!(!should_force_login(401, "/login"));
}

#[test]
fn other_statuses_never_force_login() {
    assert!(!should_force_login(200, "/users"));
    assert!(!should_force_login(403, "/users"));
    assert!(!should_force_login(500, "/login"));
}

// =============================================================
// Non-browser stubs
// =============================================================

#[test]
fn confirm_is_false_outside_the_browser() {
    assert!(!confirm("Delete user 1?"));
}

#[test]
fn current_path_is_empty_outside_the_browser() {
    assert_eq!(current_path(), "");
}
