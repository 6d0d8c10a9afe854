//! Domain rules for pairing donors with patients.
//!
//! The only compatibility rule enforced client-side is organ-type equality;
//! everything else (availability, uniqueness, persistence) belongs to the
//! backend. Match status arrives in heterogeneous encodings (numeric,
//! boolean, string) across endpoints and is normalized here for display.

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

use crate::net::types::{Donor, Patient};

/// Case-insensitive, trimmed equality between a required and a donated
/// organ. Blank values never match.
pub fn organs_compatible(required: &str, donated: &str) -> bool {
    let required = required.trim().to_lowercase();
    let donated = donated.trim().to_lowercase();
    !required.is_empty() && required == donated
}

/// Validate a manual match before any network call.
///
/// Returns the message to surface inline when the pairing is rejected
/// locally; the backend re-checks on its side regardless.
pub fn manual_match_precheck(patient: Option<&Patient>, donor: Option<&Donor>) -> Result<(), String> {
    let (Some(patient), Some(donor)) = (patient, donor) else {
        return Err("Select a patient and a donor.".to_owned());
    };
    if !organs_compatible(&patient.organ_req, &donor.organ_donated) {
        return Err(format!(
            "Organ mismatch: patient needs {} but donor offers {}.",
            patient.organ_req, donor.organ_donated
        ));
    }
    Ok(())
}

/// Normalized match status.
///
/// Backends have encoded this as `1`/`0`, `true`/`false`, and free-form
/// strings over time; the UI collapses all of them to a tri-state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    Pending,
    Confirmed,
    Other(String),
}

impl MatchStatus {
    /// Collapse a raw wire value into a `MatchStatus`.
    ///
    /// Numeric `1` and `true` mean confirmed, numeric `0` and `false` mean
    /// pending. `"generated"` is the backend's label for an unconfirmed
    /// auto-match, so it normalizes to pending, as do blank and absent
    /// values. Anything else passes through lowercased.
    pub fn normalize(raw: Option<&serde_json::Value>) -> Self {
        use serde_json::Value;
        match raw {
            None | Some(Value::Null) => Self::Pending,
            Some(Value::Bool(true)) => Self::Confirmed,
            Some(Value::Bool(false)) => Self::Pending,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(1) => Self::Confirmed,
                Some(0) => Self::Pending,
                _ => Self::Other(n.to_string()),
            },
            Some(Value::String(s)) => {
                let s = s.trim().to_lowercase();
                match s.as_str() {
                    "confirmed" => Self::Confirmed,
                    "" | "pending" | "generated" => Self::Pending,
                    _ => Self::Other(s),
                }
            }
            Some(other) => Self::Other(other.to_string()),
        }
    }

    /// Display label for tables and badges.
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Other(s) => s,
        }
    }
}
