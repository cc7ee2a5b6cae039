//! Measurements page: table of the latest field readings.

#[cfg(test)]
#[path = "measurements_test.rs"]
mod measurements_test;

use leptos::prelude::*;
use ptas::config::ApiConfig;
use ptas::types::Measurement;

use crate::state::resources::ListState;
use crate::state::session::AppSession;
use crate::util::format::{format_date, format_fixed};

/// Display label for a treatment phase; unknown phases pass through.
pub fn phase_label(phase: &str) -> &str {
    match phase {
        "afluente" => "Afluente",
        "pretratamiento" => "Pretratamiento",
        "reactor" => "Reactor",
        "clarificador" => "Clarificador",
        "desinfeccion" => "Desinfección",
        "lodos" => "Lodos",
        other => other,
    }
}

/// Badge class and label for a measurement's validation status.
pub fn validation_badge(validated: &str) -> (&'static str, &'static str) {
    match validated {
        "validated" => ("badge badge--ok", "Validado"),
        "pending" => ("badge badge--warning", "Pendiente"),
        _ => ("badge badge--danger", "Rechazado"),
    }
}

#[component]
pub fn MeasurementsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let config = expect_context::<ApiConfig>();
    let list = RwSignal::new(ListState::<Measurement>::default());

    #[cfg(feature = "csr")]
    {
        let api = session.api().clone();
        let (plant_id, limit) = (config.plant_id, config.list_limit);
        leptos::task::spawn_local(async move {
            let result = ptas::resources::measurements(&api, plant_id, limit).await;
            list.update(|s| s.finish(result, "measurements"));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, config);
    }

    view! {
        <Show
            when=move || !list.get().loading
            fallback=|| view! { <div class="page-loading"><div class="spinner"></div></div> }
        >
            <div class="page">
                <div class="page__header">
                    <h1>"Mediciones"</h1>
                </div>

                <div class="card card--table">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Fecha"</th>
                                <th>"Fase"</th>
                                <th>"pH"</th>
                                <th>"Temp (°C)"</th>
                                <th>"Caudal"</th>
                                <th>"SST"</th>
                                <th>"Estado"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || list.get().items key=|m: &Measurement| m.id let:m>
                                {measurement_row(m)}
                            </For>
                        </tbody>
                    </table>
                    <Show when=move || list.get().items.is_empty()>
                        <p class="empty-state">"No hay mediciones registradas"</p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

fn measurement_row(m: Measurement) -> impl IntoView {
    let (badge_class, badge_label) = validation_badge(&m.validated);
    view! {
        <tr>
            <td>{format_date(&m.timestamp).to_owned()}</td>
            <td><span class="badge badge--phase">{phase_label(&m.phase).to_owned()}</span></td>
            <td>{format_fixed(m.ph, 2)}</td>
            <td>{format_fixed(m.temperature, 1)}</td>
            <td>{format_fixed(m.caudal_effluent_m3h, 1)}</td>
            <td>{format_fixed(m.sst, 0)}</td>
            <td><span class=badge_class>{badge_label}</span></td>
        </tr>
    }
}
