//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use ptas::config::ApiConfig;
use ptas::guard::HOME_ROUTE;

use crate::components::layout::Layout;
use crate::pages::{
    alerts::AlertsPage, dashboard::DashboardPage, equipment::EquipmentPage, login::LoginPage,
    measurements::MeasurementsPage,
};
use crate::state::session::new_app_session;
use crate::util::auth::RequireAuth;

/// Root application component.
///
/// Provides the API config and the session as contexts, derives the session
/// from storage once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        ApiConfig::default()
    });
    let session = new_app_session(&config.base_url);

    provide_context(config);
    provide_context(session.clone());

    // Reads storage only; nothing tracked, so this runs once after mount.
    Effect::new(move || session.initialize());

    view! {
        <Title text="PTAS"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_ROUTE/> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><Layout><DashboardPage/></Layout></RequireAuth> }
                />
                <Route
                    path=StaticSegment("measurements")
                    view=|| view! { <RequireAuth><Layout><MeasurementsPage/></Layout></RequireAuth> }
                />
                <Route
                    path=StaticSegment("equipment")
                    view=|| view! { <RequireAuth><Layout><EquipmentPage/></Layout></RequireAuth> }
                />
                <Route
                    path=StaticSegment("alerts")
                    view=|| view! { <RequireAuth><Layout><AlertsPage/></Layout></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
