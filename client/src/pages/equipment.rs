//! Equipment page: card grid of the plant's equipment.

#[cfg(test)]
#[path = "equipment_test.rs"]
mod equipment_test;

use leptos::prelude::*;
use ptas::config::ApiConfig;
use ptas::types::Equipment;

use crate::state::resources::ListState;
use crate::state::session::AppSession;

pub fn equipment_status_class(status: &str) -> &'static str {
    match status {
        "active" => "badge badge--ok",
        "maintenance" => "badge badge--warning",
        "broken" => "badge badge--danger",
        _ => "badge badge--neutral",
    }
}

/// Display label for an equipment status; unknown statuses pass through.
pub fn equipment_status_label(status: &str) -> &str {
    match status {
        "active" => "Activo",
        "inactive" => "Inactivo",
        "maintenance" => "Mantenimiento",
        "broken" => "Fuera de servicio",
        other => other,
    }
}

#[component]
pub fn EquipmentPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let config = expect_context::<ApiConfig>();
    let list = RwSignal::new(ListState::<Equipment>::default());

    #[cfg(feature = "csr")]
    {
        let api = session.api().clone();
        let plant_id = config.plant_id;
        leptos::task::spawn_local(async move {
            let result = ptas::resources::equipment(&api, plant_id).await;
            list.update(|s| s.finish(result, "equipment"));
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
                    <h1>"Equipos"</h1>
                </div>

                <div class="card-grid">
                    <For each=move || list.get().items key=|eq: &Equipment| eq.id let:eq>
                        {equipment_card(eq)}
                    </For>
                </div>

                <Show when=move || list.get().items.is_empty()>
                    <div class="card empty-state">
                        <p>"No hay equipos registrados"</p>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

fn equipment_card(eq: Equipment) -> impl IntoView {
    let status_class = equipment_status_class(&eq.status);
    let status_label = equipment_status_label(&eq.status).to_owned();
    let power = eq.power_kw.map(|kw| format!("{kw} kW"));

    view! {
        <div class="card equipment-card">
            <div class="equipment-card__header">
                <div>
                    <h3>{eq.name}</h3>
                    <p class="equipment-card__type">{eq.equipment_type}</p>
                </div>
                <span class=status_class>{status_label}</span>
            </div>
            <dl class="equipment-card__details">
                {detail_row("Código:", eq.code)}
                {detail_row("Marca:", eq.brand)}
                {detail_row("Potencia:", power)}
            </dl>
        </div>
    }
}

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|value| {
        view! {
            <div class="detail-row">
                <dt>{label}</dt>
                <dd>{value}</dd>
            </div>
        }
    })
}
