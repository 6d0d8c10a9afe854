//! Shared UI components: chrome, form controls, and inline messages.

pub mod alert;
pub mod form_field;
pub mod layout;
pub mod navbar;
pub mod require_auth;
pub mod sidebar;
pub mod stat_card;
