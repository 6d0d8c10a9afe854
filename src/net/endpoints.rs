//! Centralized endpoint table.
//!
//! Every request goes through these builders so a route changes in exactly
//! one place; the delete verbs use the same builders as the reads.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::fmt::Write as _;

/// Base path for the JSON API, same-origin and session-cookie authenticated.
pub const API_BASE: &str = "/api";

pub fn auth_login() -> String {
    format!("{API_BASE}/auth/login")
}

pub fn auth_logout() -> String {
    format!("{API_BASE}/auth/logout")
}

pub fn auth_me() -> String {
    format!("{API_BASE}/auth/me")
}

pub fn users() -> String {
    format!("{API_BASE}/users")
}

pub fn user(id: i64) -> String {
    format!("{API_BASE}/users/{id}")
}

pub fn donors() -> String {
    format!("{API_BASE}/donors")
}

pub fn donor(id: i64) -> String {
    format!("{API_BASE}/donors/{id}")
}

pub fn patients() -> String {
    format!("{API_BASE}/patients")
}

/// Patients are addressed by the composite key `(id, organ_req)`; the organ
/// is free text and must be encoded into its path segment.
pub fn patient(id: i64, organ_req: &str) -> String {
    format!("{API_BASE}/patients/{id}/{}", encode_segment(organ_req))
}

pub fn matching_auto() -> String {
    format!("{API_BASE}/matching/auto")
}

pub fn matching_manual() -> String {
    format!("{API_BASE}/matching/manual")
}

pub fn reports_summary() -> String {
    format!("{API_BASE}/reports/summary")
}

pub fn reports_matches() -> String {
    format!("{API_BASE}/reports/matches")
}

pub fn stats_summary() -> String {
    format!("{API_BASE}/stats/summary")
}

/// Percent-encode a single path segment (RFC 3986 unreserved set kept).
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
