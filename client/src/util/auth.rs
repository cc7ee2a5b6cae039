//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is wrapped in [`RequireAuth`], so all of them apply
//! identical loading and unauthenticated redirect behavior. The decision
//! itself is the core `guard`; this module only renders it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use ptas::guard::{GuardOutcome, LOGIN_ROUTE, guard};
use ptas::session::SessionState;

use crate::state::session::AppSession;

/// Route to leave for once the session has settled, if any.
fn unauth_redirect_target(state: &SessionState) -> Option<&'static str> {
    match guard(state) {
        GuardOutcome::RedirectToLogin => Some(LOGIN_ROUTE),
        GuardOutcome::Loading | GuardOutcome::Render => None,
    }
}

/// Redirect to `/login` whenever the session has loaded without a user.
pub fn install_unauth_redirect<F>(state: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = unauth_redirect_target(&state.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Render `children` only for an authenticated session.
///
/// Shows a spinner while the session initializes and redirects to the login
/// page once it is known to be unauthenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.cell().signal();
    install_unauth_redirect(state, use_navigate());

    view! {
        <Show
            when=move || guard(&state.get()) == GuardOutcome::Render
            fallback=|| {
                view! {
                    <div class="page-loading">
                        <div class="spinner"></div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
