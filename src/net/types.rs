//! Wire types for the portal's JSON API.
//!
//! Field names mirror the backend's mixed-case column names via serde
//! renames. Records are backend-owned and flat; optional columns may be
//! absent or null depending on the row, so they default to `None`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::state::list::Searchable;

/// The authenticated session's user, from `/auth/login` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
}

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Envelope for `/auth/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// A registered person record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "User_ID")]
    pub user_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date_of_Birth", default)]
    pub date_of_birth: Option<String>,
    #[serde(rename = "Medical_insurance", default)]
    pub medical_insurance: Option<String>,
    #[serde(rename = "Medical_history", default)]
    pub medical_history: Option<String>,
    #[serde(rename = "Street", default)]
    pub street: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "State", default)]
    pub state: Option<String>,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.name.clone()];
        for opt in [&self.medical_history, &self.city, &self.state] {
            if let Some(value) = opt {
                fields.push(value.clone());
            }
        }
        fields
    }
}

/// A donor record: who donates which organ, under which organization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    #[serde(rename = "Donor_ID")]
    pub donor_id: i64,
    #[serde(rename = "organ_donated")]
    pub organ_donated: String,
    #[serde(rename = "reason_of_donation", default)]
    pub reason_of_donation: Option<String>,
    #[serde(rename = "Organization_ID", default)]
    pub organization_id: Option<i64>,
    #[serde(rename = "User_ID", default)]
    pub user_id: Option<i64>,
}

impl Searchable for Donor {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.organ_donated.clone()];
        if let Some(reason) = &self.reason_of_donation {
            fields.push(reason.clone());
        }
        if let Some(org) = self.organization_id {
            fields.push(org.to_string());
        }
        if let Some(user) = self.user_id {
            fields.push(user.to_string());
        }
        fields
    }
}

/// A patient record, keyed by `(Patient_ID, organ_req)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "Patient_ID")]
    pub patient_id: i64,
    #[serde(rename = "organ_req")]
    pub organ_req: String,
    #[serde(rename = "reason_of_procurement", default)]
    pub reason_of_procurement: Option<String>,
    #[serde(rename = "Doctor_ID", default)]
    pub doctor_id: Option<i64>,
    #[serde(rename = "User_ID", default)]
    pub user_id: Option<i64>,
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.organ_req.clone()];
        if let Some(reason) = &self.reason_of_procurement {
            fields.push(reason.clone());
        }
        if let Some(doctor) = self.doctor_id {
            fields.push(doctor.to_string());
        }
        if let Some(user) = self.user_id {
            fields.push(user.to_string());
        }
        fields
    }
}

/// Dashboard counters from `/stats/summary`; a count the backend failed to
/// compute arrives as null.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub users: Option<i64>,
    #[serde(default)]
    pub donors: Option<i64>,
    #[serde(default)]
    pub patients: Option<i64>,
    #[serde(default)]
    pub matches: Option<i64>,
}

/// Aggregate counts from `/reports/summary`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReportsSummary {
    #[serde(default)]
    pub patients: Option<i64>,
    #[serde(default)]
    pub donors: Option<i64>,
    #[serde(default)]
    pub confirmed: i64,
    #[serde(default)]
    pub pending: i64,
}

/// One row of match history (`/reports/matches`) or an auto-generated
/// candidate (`/matching/auto`). Every field is optional because the two
/// sources join different tables; `status` stays raw JSON and is normalized
/// at render time.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Patient_ID", default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(rename = "Donor_ID", default)]
    pub donor_id: Option<i64>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub organ: Option<String>,
    #[serde(rename = "Date_of_transaction", default)]
    pub date_of_transaction: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<serde_json::Value>,
}

/// Body of `POST /matching/manual`.
#[derive(Clone, Debug, Serialize)]
pub struct ManualMatchRequest {
    pub patient_id: i64,
    pub donor_id: i64,
}

/// Fields of a `POST /users` payload; optionals blank in the form are sent
/// as explicit nulls.
#[derive(Clone, Debug, Serialize)]
pub struct NewUser {
    #[serde(rename = "User_ID")]
    pub user_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date_of_Birth")]
    pub date_of_birth: String,
    #[serde(rename = "Medical_insurance")]
    pub medical_insurance: Option<String>,
    #[serde(rename = "Medical_history")]
    pub medical_history: Option<String>,
    #[serde(rename = "Street")]
    pub street: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
}

/// Fields of a `POST /donors` payload.
#[derive(Clone, Debug, Serialize)]
pub struct NewDonor {
    #[serde(rename = "Donor_ID")]
    pub donor_id: i64,
    #[serde(rename = "organ_donated")]
    pub organ_donated: String,
    #[serde(rename = "reason_of_donation")]
    pub reason_of_donation: Option<String>,
    #[serde(rename = "Organization_ID")]
    pub organization_id: i64,
    #[serde(rename = "User_ID")]
    pub user_id: i64,
}

/// Fields of a `POST /patients` payload.
#[derive(Clone, Debug, Serialize)]
pub struct NewPatient {
    #[serde(rename = "Patient_ID")]
    pub patient_id: i64,
    #[serde(rename = "organ_req")]
    pub organ_req: String,
    #[serde(rename = "reason_of_procurement")]
    pub reason_of_procurement: Option<String>,
    #[serde(rename = "Doctor_ID")]
    pub doctor_id: i64,
    #[serde(rename = "User_ID")]
    pub user_id: i64,
}

/// Coerce a list body to a collection: non-array responses become empty,
/// and rows that fail to deserialize are dropped rather than poisoning the
/// whole list.
pub fn coerce_list<T: DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
    match value {
        serde_json::Value::Array(rows) => rows
            .into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect(),
        _ => Vec::new(),
    }
}
