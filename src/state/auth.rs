#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and loading status.
///
/// Provided as an `RwSignal` context by the root component; the navbar and
/// profile page read it, the guard and login/logout flows write it.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

/// Progress of the guarded-route session check.
///
/// `NoToken` and `Unauthed` both end in a redirect to `/login`; `Checking`
/// means a `/auth/me` probe is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStatus {
    NoToken,
    Checking,
    Verified,
    Unauthed,
}

impl GuardStatus {
    /// Initial guard state given whether a token is stored locally.
    /// Without a token there is nothing to verify against `/auth/me`.
    pub fn initial(has_token: bool) -> Self {
        if has_token { Self::Checking } else { Self::NoToken }
    }

    /// Whether this state must bounce the user to the login page.
    pub fn requires_login(self) -> bool {
        matches!(self, Self::NoToken | Self::Unauthed)
    }
}
