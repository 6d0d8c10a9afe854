//! Session token persistence.
//!
//! The backend authenticates via a session cookie; the token stored here is
//! an opaque marker that a login happened, used only to decide whether the
//! guarded routes should bother probing `/auth/me`. Reads and writes go to
//! `localStorage` and require a browser environment.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "transplant_link_token";

/// Read the stored session token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token after a successful login.
pub fn set_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the stored token on logout or a 401 from the backend.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// Whether a token is currently stored.
pub fn has_token() -> bool {
    read_token().is_some()
}
