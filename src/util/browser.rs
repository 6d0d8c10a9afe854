//! Window-level helpers: confirmation prompts and forced navigation.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Decide whether an HTTP status should force a trip back to the login
/// screen. A 401 anywhere except the login page itself clears credentials
/// and redirects; checking the current path keeps the redirect to a single
/// occurrence even when several in-flight calls fail together.
pub fn should_force_login(status: u16, current_path: &str) -> bool {
    status == 401 && current_path != "/login"
}

/// Current `location.pathname`, or an empty string outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Native confirmation dialog. Returns `false` outside the browser so
/// destructive actions never proceed during SSR or tests.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Clear credentials and hard-navigate to `/login` if the given status is an
/// authentication failure. Returns `true` when a redirect was issued.
pub fn force_login_on_unauthorized(status: u16) -> bool {
    if !should_force_login(status, &current_path()) {
        return false;
    }
    crate::util::session::clear_token();
    navigate_hard("/login");
    true
}

/// Full-page navigation via `location.href`, used where the router context
/// is unavailable (the 401 interceptor in the net layer).
pub fn navigate_hard(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
