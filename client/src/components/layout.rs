//! Sidebar layout shared by the protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `RequireAuth`, so a user is normally present; the user
//! card still falls back to placeholders while logout is in progress.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use ptas::guard::LOGIN_ROUTE;
use ptas::types::User;

use crate::state::session::AppSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { path: "/dashboard", label: "Dashboard", icon: "📊" },
    NavItem { path: "/measurements", label: "Mediciones", icon: "📈" },
    NavItem { path: "/equipment", label: "Equipos", icon: "⚙️" },
    NavItem { path: "/alerts", label: "Alertas", icon: "🔔" },
];

pub fn nav_item_class(current_path: &str, item_path: &str) -> &'static str {
    if current_path == item_path { "nav-item nav-item--active" } else { "nav-item" }
}

pub fn avatar_initial(user: Option<&User>) -> char {
    user.map_or('U', User::initial)
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.cell().signal();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let nav = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            view! {
                <a href=path class=move || nav_item_class(&pathname.get(), path)>
                    <span class="nav-item__icon">{item.icon}</span>
                    <span class="nav-item__label">{item.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <h1>"PTAS"</h1>
                    <p>"Gestión de Plantas"</p>
                </div>

                <nav class="sidebar__nav">{nav}</nav>

                <div class="sidebar__footer">
                    <div class="user-card">
                        <div class="user-card__avatar">
                            {move || avatar_initial(state.get().user()).to_string()}
                        </div>
                        <div class="user-card__info">
                            <p class="user-card__name">
                                {move || state.get().user().map(|u| u.full_name.clone()).unwrap_or_default()}
                            </p>
                            <p class="user-card__role">
                                {move || state.get().user().map_or("", |u| u.role.label())}
                            </p>
                        </div>
                    </div>
                    <button class="btn btn-secondary" on:click=on_logout>
                        "Cerrar Sesión"
                    </button>
                </div>
            </aside>

            <main class="app-main">{children()}</main>
        </div>
    }
}
