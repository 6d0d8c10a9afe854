//! REST helpers for talking to the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authenticated by
//! the same-origin session cookie. Outside the browser the helpers are
//! inert stubs so the crate builds and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Callers get categorical `Err(String)` messages suitable for inline
//! display ("Failed to load donors."); transport detail goes to the console
//! only. Any 401 clears the stored token and redirects to `/login` once.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Donor, LoginResponse, ManualMatchRequest, MatchRecord, NewDonor, NewPatient, NewUser,
    Patient, ReportsSummary, SessionUser, StatsSummary, User,
};
#[cfg(feature = "hydrate")]
use super::endpoints;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

/// Bounce to `/login` when the backend says the session is gone.
/// Returns an error so the caller stops processing the response.
#[cfg(feature = "hydrate")]
fn guard_unauthorized(resp: &gloo_net::http::Response) -> Result<(), String> {
    if resp.status() == 401 {
        crate::util::browser::force_login_on_unauthorized(resp.status());
        return Err("Session expired. Please sign in again.".to_owned());
    }
    Ok(())
}

/// Pull the backend's `error`/`message` field out of a failure body, falling
/// back to the given categorical message.
#[cfg(feature = "hydrate")]
async fn error_message(resp: gloo_net::http::Response, fallback: &str) -> String {
    if let Ok(body) = resp.json::<serde_json::Value>().await {
        for key in ["error", "message"] {
            if let Some(text) = body.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    fallback.to_owned()
}

/// GET a collection, coercing any non-array body to an empty list.
#[cfg(feature = "hydrate")]
async fn get_list<T: DeserializeOwned>(url: &str, failure: &str) -> Result<Vec<T>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("GET {url} failed: {e}");
            failure.to_owned()
        })?;
    guard_unauthorized(&resp)?;
    if !resp.ok() {
        leptos::logging::warn!("GET {url} returned {}", resp.status());
        return Err(failure.to_owned());
    }
    let value = resp.json::<serde_json::Value>().await.map_err(|e| {
        leptos::logging::warn!("GET {url} body unreadable: {e}");
        failure.to_owned()
    })?;
    Ok(super::types::coerce_list(value))
}

/// GET a single JSON object.
#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str, failure: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("GET {url} failed: {e}");
            failure.to_owned()
        })?;
    guard_unauthorized(&resp)?;
    if !resp.ok() {
        leptos::logging::warn!("GET {url} returned {}", resp.status());
        return Err(failure.to_owned());
    }
    resp.json::<T>().await.map_err(|e| {
        leptos::logging::warn!("GET {url} body unreadable: {e}");
        failure.to_owned()
    })
}

/// POST a JSON payload, surfacing the backend's error message on failure.
#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B, failure: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| {
            leptos::logging::warn!("POST {url} encode failed: {e}");
            failure.to_owned()
        })?
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("POST {url} failed: {e}");
            failure.to_owned()
        })?;
    guard_unauthorized(&resp)?;
    if !resp.ok() {
        return Err(error_message(resp, failure).await);
    }
    Ok(())
}

/// PUT a JSON payload.
#[cfg(feature = "hydrate")]
async fn put_json<B: serde::Serialize>(url: &str, body: &B, failure: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::put(url)
        .json(body)
        .map_err(|e| {
            leptos::logging::warn!("PUT {url} encode failed: {e}");
            failure.to_owned()
        })?
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("PUT {url} failed: {e}");
            failure.to_owned()
        })?;
    guard_unauthorized(&resp)?;
    if !resp.ok() {
        return Err(error_message(resp, failure).await);
    }
    Ok(())
}

/// DELETE a resource.
#[cfg(feature = "hydrate")]
async fn delete(url: &str, failure: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(url)
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("DELETE {url} failed: {e}");
            failure.to_owned()
        })?;
    guard_unauthorized(&resp)?;
    if !resp.ok() {
        leptos::logging::warn!("DELETE {url} returned {}", resp.status());
        return Err(failure.to_owned());
    }
    Ok(())
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend's message for rejected credentials, or a generic
/// failure for transport errors.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "username": username, "password": password });
        let url = endpoints::auth_login();
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                leptos::logging::warn!("POST {url} failed: {e}");
                "Login failed. Please try again.".to_owned()
            })?;
        if !resp.ok() {
            return Err(error_message(resp, "Login failed. Please check your credentials.").await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|_| "Login failed. Please try again.".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(SERVER_STUB.to_owned())
    }
}

/// Terminate the session via `POST /auth/logout`. Failures are ignored;
/// local credentials are cleared regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&endpoints::auth_logout())
            .send()
            .await;
    }
}

/// Session liveness probe against `/auth/me`.
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_me() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoints::auth_me())
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<super::types::MeResponse>().await.ok()?;
        body.user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_list(&endpoints::users(), "Failed to load users.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn fetch_user(id: i64) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoints::user(id), "Failed to load user.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn create_user(payload: &NewUser) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&endpoints::users(), payload, "Failed to create user.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn update_user(id: i64, payload: &NewUser) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&endpoints::user(id), payload, "Failed to update user.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn delete_user(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&endpoints::user(id), "Failed to delete user.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn fetch_donors() -> Result<Vec<Donor>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_list(&endpoints::donors(), "Failed to load donors.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn create_donor(payload: &NewDonor) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&endpoints::donors(), payload, "Failed to register donor.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn delete_donor(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&endpoints::donor(id), "Failed to delete donor.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn fetch_patients() -> Result<Vec<Patient>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_list(&endpoints::patients(), "Failed to load patients.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn create_patient(payload: &NewPatient) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&endpoints::patients(), payload, "Failed to register patient.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn delete_patient(id: i64, organ_req: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&endpoints::patient(id, organ_req), "Failed to delete patient.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, organ_req);
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn fetch_auto_matches() -> Result<Vec<MatchRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_list(&endpoints::matching_auto(), "Failed to load match candidates.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn create_manual_match(payload: &ManualMatchRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&endpoints::matching_manual(), payload, "Failed to create match.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn fetch_reports_summary() -> Result<ReportsSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoints::reports_summary(), "Failed to load report summary.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn fetch_report_matches() -> Result<Vec<MatchRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_list(&endpoints::reports_matches(), "Failed to load match history.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

pub async fn fetch_stats() -> Result<StatsSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoints::stats_summary(), "Failed to load statistics.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}
