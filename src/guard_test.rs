use super::*;
use crate::test_support::user;
use crate::types::Role;

#[test]
fn guard_shows_loading_while_initializing() {
    assert_eq!(guard(&SessionState::Initializing), GuardOutcome::Loading);
}

#[test]
fn guard_redirects_when_unauthenticated() {
    assert_eq!(guard(&SessionState::Unauthenticated), GuardOutcome::RedirectToLogin);
}

#[test]
fn guard_renders_when_authenticated() {
    let state = SessionState::Authenticated(user("admin", Role::Administrator));
    assert_eq!(guard(&state), GuardOutcome::Render);
}

#[test]
fn login_redirect_only_for_authenticated() {
    assert_eq!(login_redirect(&SessionState::Initializing), None);
    assert_eq!(login_redirect(&SessionState::Unauthenticated), None);
    let state = SessionState::Authenticated(user("op1", Role::Operator));
    assert_eq!(login_redirect(&state), Some(HOME_ROUTE));
}
