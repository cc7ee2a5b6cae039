//! Login page: username + password against `/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use ptas::ApiError;
use ptas::guard::login_redirect;

use crate::state::session::AppSession;

pub const LOGIN_FAILED_MESSAGE: &str = "Error al iniciar sesión";
pub const MISSING_FIELDS_MESSAGE: &str = "Ingrese usuario y contraseña.";

/// Require both fields. Values are passed on exactly as typed.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Backend detail when present, otherwise the generic failure message.
pub fn login_error_message(err: &ApiError) -> String {
    err.detail().map_or_else(|| LOGIN_FAILED_MESSAGE.to_owned(), str::to_owned)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.cell().signal();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Covers both an already-logged-in visit and a successful submit.
    Effect::new(move || {
        if let Some(target) = login_redirect(&state.get()) {
            navigate(target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.login(&username_value, &password_value).await {
                    error.set(login_error_message(&e));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1>"PTAS"</h1>
                    <p class="login-card__subtitle">"Sistema de Gestión de Plantas de Tratamiento"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="login-message login-message--error">{move || error.get()}</div>
                    </Show>

                    <label class="label">"Usuario"</label>
                    <input
                        class="input"
                        type="text"
                        placeholder="admin"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />

                    <label class="label">"Contraseña"</label>
                    <input
                        class="input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    <button class="btn btn-primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
