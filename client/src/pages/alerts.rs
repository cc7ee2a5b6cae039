//! Alerts page: recent alerts with regulatory badges and a resolve action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolving sends `PUT /alerts/{id}/resolve` and only then marks the alert
//! resolved in the local list; a failed call leaves the list untouched.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use leptos::prelude::*;
use ptas::config::ApiConfig;
use ptas::types::Alert;

use crate::state::resources::ListState;
use crate::state::session::AppSession;
use crate::util::format::format_timestamp;

/// Notes sent with a resolve from this page.
pub const RESOLVE_NOTES: &str = "Resuelto";

pub fn severity_class(severity: &str) -> &'static str {
    match severity {
        "critical" => "badge badge--critical",
        "high" => "badge badge--high",
        "warning" => "badge badge--warning",
        _ => "badge badge--info",
    }
}

pub fn alert_card_class(severity: &str) -> &'static str {
    match severity {
        "critical" => "card alert-card alert-card--critical",
        "warning" => "card alert-card alert-card--warning",
        _ => "card alert-card alert-card--info",
    }
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let config = expect_context::<ApiConfig>();
    let list = RwSignal::new(ListState::<Alert>::default());
    let api = session.api().clone();

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        let (plant_id, limit) = (config.plant_id, config.list_limit);
        leptos::task::spawn_local(async move {
            let result = ptas::resources::alerts(&api, plant_id, limit).await;
            list.update(|s| s.finish(result, "alerts"));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let on_resolve = Callback::new(move |alert_id: i64| {
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match ptas::resources::resolve_alert(&api, alert_id, Some(RESOLVE_NOTES)).await {
                    Ok(_) => list.update(|s| {
                        s.mark_resolved(alert_id, Some(RESOLVE_NOTES));
                    }),
                    Err(e) => log::error!("error resolving alert {alert_id}: {e}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, alert_id);
        }
    });

    view! {
        <Show
            when=move || !list.get().loading
            fallback=|| view! { <div class="page-loading"><div class="spinner"></div></div> }
        >
            <div class="page">
                <div class="page__header">
                    <h1>"Alertas"</h1>
                </div>

                <div class="alert-list">
                    <For
                        each=move || list.get().items
                        key=|alert: &Alert| (alert.id, alert.resolved())
                        let:alert
                    >
                        {alert_card(alert, on_resolve)}
                    </For>
                </div>

                <Show when=move || list.get().items.is_empty()>
                    <div class="card empty-state">
                        <p>"No hay alertas"</p>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

fn alert_card(alert: Alert, on_resolve: Callback<i64>) -> impl IntoView {
    let alert_id = alert.id;
    let resolved = alert.resolved();
    let (ds90, ds609) = (alert.ds90_violation, alert.ds609_violation);

    view! {
        <div class=alert_card_class(&alert.severity)>
            <div class="alert-card__body">
                <div class="alert-card__badges">
                    <span class=severity_class(&alert.severity)>{alert.severity.to_uppercase()}</span>
                    <Show when=move || ds90>
                        <span class="badge badge--critical">"DS90"</span>
                    </Show>
                    <Show when=move || ds609>
                        <span class="badge badge--high">"DS609"</span>
                    </Show>
                    <Show when=move || resolved>
                        <span class="badge badge--ok">"Resuelto"</span>
                    </Show>
                </div>
                <h3>{alert.title}</h3>
                <p class="alert-card__message">{alert.message}</p>
                <p class="alert-card__time">{format_timestamp(&alert.created_at)}</p>
            </div>
            <Show when=move || !resolved>
                <button class="btn btn-secondary" on:click=move |_| on_resolve.run(alert_id)>
                    "Resolver"
                </button>
            </Show>
        </div>
    }
}
