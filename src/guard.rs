//! Route protection as a pure function of [`SessionState`].

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/dashboard";

/// What a protected view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not resolved yet; show a loading indicator.
    Loading,
    RedirectToLogin,
    /// Render the protected content.
    Render,
}

#[must_use]
pub fn guard(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Initializing => GuardOutcome::Loading,
        SessionState::Unauthenticated => GuardOutcome::RedirectToLogin,
        SessionState::Authenticated(_) => GuardOutcome::Render,
    }
}

/// Where the login view should send an already-authenticated session.
#[must_use]
pub fn login_redirect(state: &SessionState) -> Option<&'static str> {
    state.is_authenticated().then_some(HOME_ROUTE)
}
