use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// GuardStatus
// =============================================================

#[test]
fn guard_with_token_starts_checking() {
    assert_eq!(GuardStatus::initial(true), GuardStatus::Checking);
}

#[test]
fn guard_without_token_skips_the_probe() {
    assert_eq!(GuardStatus::initial(false), GuardStatus::NoToken);
}

#[test]
fn only_missing_or_rejected_sessions_require_login() {
    assert!(GuardStatus::NoToken.requires_login());
    assert!(GuardStatus::Unauthed.requires_login());
    assert!(!GuardStatus::Checking.requires_login());
    assert!(!GuardStatus::Verified.requires_login());
}
