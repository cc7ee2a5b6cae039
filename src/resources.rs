//! Plant resource endpoints consumed by the dashboard pages.
//!
//! All calls rely on the stored bearer credential; a rejected credential
//! surfaces as [`ApiError::Unauthorized`].

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use crate::api::ApiClient;
use crate::error::{ApiError, CallKind};
use crate::storage::KeyValueStore;
use crate::transport::HttpTransport;
use crate::types::{Alert, AlertStats, DashboardSummary, Equipment, Measurement, Plant, ResolveAlert};

fn alert_resolve_endpoint(alert_id: i64) -> String {
    format!("/alerts/{alert_id}/resolve")
}

/// `GET /dashboard/summary?plant_id=...`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn dashboard_summary<T, S>(api: &ApiClient<T, S>, plant_id: i64) -> Result<DashboardSummary, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.get_json(CallKind::Protected, "/dashboard/summary", &[("plant_id", plant_id.to_string())])
        .await
}

/// `GET /measurements?plant_id=...&limit=...`, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn measurements<T, S>(api: &ApiClient<T, S>, plant_id: i64, limit: u32) -> Result<Vec<Measurement>, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.get_json(
        CallKind::Protected,
        "/measurements",
        &[("plant_id", plant_id.to_string()), ("limit", limit.to_string())],
    )
    .await
}

/// `GET /equipment?plant_id=...`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn equipment<T, S>(api: &ApiClient<T, S>, plant_id: i64) -> Result<Vec<Equipment>, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.get_json(CallKind::Protected, "/equipment", &[("plant_id", plant_id.to_string())])
        .await
}

/// `GET /alerts?plant_id=...&limit=...`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn alerts<T, S>(api: &ApiClient<T, S>, plant_id: i64, limit: u32) -> Result<Vec<Alert>, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.get_json(
        CallKind::Protected,
        "/alerts",
        &[("plant_id", plant_id.to_string()), ("limit", limit.to_string())],
    )
    .await
}

/// `GET /alerts/stats?plant_id=...`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn alert_stats<T, S>(api: &ApiClient<T, S>, plant_id: i64) -> Result<AlertStats, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.get_json(CallKind::Protected, "/alerts/stats", &[("plant_id", plant_id.to_string())])
        .await
}

/// `GET /plants`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn plants<T, S>(api: &ApiClient<T, S>) -> Result<Vec<Plant>, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.get_json(CallKind::Protected, "/plants", &[]).await
}

/// Mark an alert resolved via `PUT /alerts/{id}/resolve`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn resolve_alert<T, S>(api: &ApiClient<T, S>, alert_id: i64, notes: Option<&str>) -> Result<Alert, ApiError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    let body = ResolveAlert { resolution_notes: notes.map(str::to_owned) };
    api.put_json(CallKind::Protected, &alert_resolve_endpoint(alert_id), &body)
        .await
}
