//! Dashboard page: plant summary cards and the latest measurement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches `/dashboard/summary` once on mount
//! for the configured plant; a failed fetch renders the empty summary.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use ptas::config::ApiConfig;
use ptas::types::{DashboardSummary, EquipmentCounts, LastMeasurement};

use crate::state::resources::SummaryState;
use crate::state::session::AppSession;
use crate::util::format::{format_reading, format_timestamp};

pub fn critical_card_class(critical: u32) -> &'static str {
    if critical > 0 { "stat-card stat-card--danger" } else { "stat-card stat-card--success" }
}

pub fn compliance_mark(compliant: bool) -> &'static str {
    if compliant { "✓" } else { "✗" }
}

pub fn compliance_badge_class(compliant: bool) -> &'static str {
    if compliant { "badge badge--ok" } else { "badge badge--danger" }
}

/// `active/total`, e.g. `"3/4"`.
pub fn equipment_ratio(counts: &EquipmentCounts) -> String {
    format!("{}/{}", counts.active, counts.total)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let config = expect_context::<ApiConfig>();
    let summary = RwSignal::new(SummaryState::default());

    #[cfg(feature = "csr")]
    {
        let api = session.api().clone();
        let plant_id = config.plant_id;
        leptos::task::spawn_local(async move {
            let result = ptas::resources::dashboard_summary(&api, plant_id).await;
            summary.update(|s| s.finish(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, config);
    }

    view! {
        <Show
            when=move || !summary.get().loading
            fallback=|| view! { <div class="page-loading"><div class="spinner"></div></div> }
        >
            {move || summary_view(summary.get().summary)}
        </Show>
    }
}

fn summary_view(summary: Option<DashboardSummary>) -> impl IntoView {
    let plant_name = summary.as_ref().map_or_else(|| "Cargando...".to_owned(), |s| s.plant.name.clone());
    let alerts = summary.as_ref().map(|s| s.alerts.clone()).unwrap_or_default();
    let equipment = summary.as_ref().map(|s| s.equipment.clone()).unwrap_or_default();
    let ds90 = summary.as_ref().is_some_and(|s| s.compliance.ds90_compliant);
    let ds609 = summary.as_ref().is_some_and(|s| s.compliance.ds609_compliant);
    let last = summary.and_then(|s| s.last_measurement);

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Dashboard"</h1>
                <span class="page__subtitle">{plant_name}</span>
            </div>

            <div class="stat-grid">
                <div class=critical_card_class(alerts.critical)>
                    <p class="stat-card__label">"Alertas Críticas"</p>
                    <p class="stat-card__value">{alerts.critical}</p>
                </div>
                <div class="stat-card stat-card--warning">
                    <p class="stat-card__label">"Advertencias"</p>
                    <p class="stat-card__value">{alerts.warning}</p>
                </div>
                <div class="stat-card stat-card--info">
                    <p class="stat-card__label">"Equipos Activos"</p>
                    <p class="stat-card__value">{equipment_ratio(&equipment)}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Cumplimiento"</p>
                    <p class="stat-card__value">
                        <span class=compliance_badge_class(ds90)>"DS90 " {compliance_mark(ds90)}</span>
                        <span class=compliance_badge_class(ds609)>"DS609 " {compliance_mark(ds609)}</span>
                    </p>
                </div>
            </div>

            <div class="card">
                <h2>"Última Medición"</h2>
                {last_measurement_view(last)}
            </div>

            <div class="quick-links">
                <a href="/measurements" class="card quick-link">
                    <h3>"📊 Mediciones"</h3>
                    <p>"Registrar y ver mediciones"</p>
                </a>
                <a href="/equipment" class="card quick-link">
                    <h3>"⚙️ Equipos"</h3>
                    <p>"Gestión de equipos"</p>
                </a>
                <a href="/alerts" class="card quick-link">
                    <h3>"🔔 Alertas"</h3>
                    <p>"Ver alertas activas"</p>
                </a>
            </div>
        </div>
    }
}

fn last_measurement_view(last: Option<LastMeasurement>) -> AnyView {
    let Some(m) = last else {
        return view! { <p class="empty-state">"No hay mediciones registradas"</p> }.into_any();
    };

    view! {
        <div class="reading-grid">
            {reading("Fecha", format_timestamp(&m.timestamp))}
            {reading("pH", format_reading(m.ph, ""))}
            {reading("Caudal", format_reading(m.caudal_effluent_m3h, "m³/h"))}
            {reading("Cloro libre", format_reading(m.chlorine_free, "mg/L"))}
            {reading("SST", format_reading(m.sst, "mg/L"))}
            {reading("DBO5", format_reading(m.dbo5, "mg/L"))}
        </div>
    }
    .into_any()
}

fn reading(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="reading">
            <p class="reading__label">{label}</p>
            <p class="reading__value">{value}</p>
        </div>
    }
}
