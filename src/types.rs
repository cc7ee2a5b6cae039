//! Wire DTOs for the PTAS backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend response schemas field-for-field so serde
//! round-trips stay lossless. Timestamps stay ISO 8601 strings; the dashboard
//! only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Role assigned to a dashboard user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "administrador")]
    Administrator,
    #[serde(rename = "supervisor")]
    Supervisor,
    #[serde(rename = "operador")]
    Operator,
}

impl Role {
    /// Display label used in the sidebar user card.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrador",
            Self::Supervisor => "Supervisor",
            Self::Operator => "Operador",
        }
    }
}

/// An authenticated user as returned by `/auth/login` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: i64,
    pub email: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    pub role: Role,
    /// Plant the user is assigned to, if any.
    pub plant_id: Option<i64>,
    pub is_active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl User {
    /// Avatar initial: first character of the display name, or `'U'`.
    #[must_use]
    pub fn initial(&self) -> char {
        self.full_name.chars().next().unwrap_or('U')
    }
}

/// Username and password pair for `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration body for `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .finish()
    }
}

/// Token bundle returned by a successful login or refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenBundle {
    /// Opaque bearer credential.
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

// =============================================================================
// PLANT RESOURCES
// =============================================================================

/// Treatment plant record from `GET /plants`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    /// Short plant code (e.g. `"PTAS-01"`).
    pub code: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Design capacity in cubic meters per day.
    #[serde(default)]
    pub capacity_m3d: Option<f64>,
    #[serde(default)]
    pub population_equiv: Option<f64>,
    #[serde(default)]
    pub treatment_type: Option<String>,
    pub status: String,
    pub ds90_enabled: bool,
    pub ds609_enabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A field reading captured by an operator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub plant_id: i64,
    pub user_id: i64,
    /// ISO 8601 time the sample was taken.
    pub timestamp: String,
    /// Treatment phase the sample belongs to (e.g. `"reactor"`).
    pub phase: String,
    #[serde(default)]
    pub caudal_affluent_m3h: Option<f64>,
    #[serde(default)]
    pub caudal_effluent_m3h: Option<f64>,
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub conductivity: Option<f64>,
    #[serde(default)]
    pub turbidity: Option<f64>,
    /// Dissolved oxygen.
    #[serde(default)]
    pub od: Option<f64>,
    #[serde(default)]
    pub chlorine_free: Option<f64>,
    /// Total suspended solids.
    #[serde(default)]
    pub sst: Option<f64>,
    #[serde(default)]
    pub dbo5: Option<f64>,
    #[serde(default)]
    pub dqo: Option<f64>,
    #[serde(default)]
    pub level_sludge_m: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Validation status as sent by the backend.
    pub validated: String,
    #[serde(default)]
    pub validated_by: Option<i64>,
    #[serde(default)]
    pub validated_at: Option<String>,
    pub created_at: String,
}

/// A piece of plant equipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub plant_id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    pub equipment_type: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub power_kw: Option<f64>,
    /// Operating status (`"active"`, `"inactive"`, `"maintenance"`, `"broken"`).
    pub status: String,
    #[serde(default)]
    pub install_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A backend-generated alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub plant_id: i64,
    #[serde(default)]
    pub measurement_id: Option<i64>,
    #[serde(default)]
    pub equipment_id: Option<i64>,
    pub alert_type: String,
    /// Severity level (`"critical"`, `"high"`, `"warning"`, `"info"`).
    pub severity: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub ds90_violation: bool,
    #[serde(default)]
    pub ds609_violation: bool,
    #[serde(default)]
    pub norm_reference: Option<String>,
    /// `"true"` or `"false"`; the backend stores this flag as text.
    pub is_resolved: String,
    #[serde(default)]
    pub resolved_by: Option<i64>,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub resolution_notes: Option<String>,
    pub created_at: String,
}

impl Alert {
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.is_resolved == "true"
    }

    /// Apply the local update shown after a successful resolve call.
    pub fn mark_resolved(&mut self, notes: Option<&str>) {
        self.is_resolved = "true".to_owned();
        if let Some(notes) = notes {
            self.resolution_notes = Some(notes.to_owned());
        }
    }
}

/// Body for `PUT /alerts/{id}/resolve`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveAlert {
    pub resolution_notes: Option<String>,
}

/// Aggregate alert counters from `GET /alerts/stats`; absent counters are zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertStats {
    pub total: u32,
    pub active: u32,
    pub resolved: u32,
    pub critical: u32,
    pub warning: u32,
    pub ds90_violations: u32,
    pub ds609_violations: u32,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Landing summary from `GET /dashboard/summary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub plant: PlantRef,
    pub last_measurement: Option<LastMeasurement>,
    pub compliance: Compliance,
    pub alerts: AlertCounts,
    pub equipment: EquipmentCounts,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRef {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// Headline readings of the most recent measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LastMeasurement {
    pub timestamp: String,
    pub phase: String,
    #[serde(default)]
    pub caudal_effluent_m3h: Option<f64>,
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub chlorine_free: Option<f64>,
    #[serde(default)]
    pub sst: Option<f64>,
    #[serde(default)]
    pub dbo5: Option<f64>,
}

/// Regulatory compliance flags, computed server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliance {
    pub ds90_compliant: bool,
    pub ds609_compliant: bool,
    pub last_violation: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub active: u32,
    pub critical: u32,
    pub warning: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCounts {
    pub total: u32,
    pub active: u32,
    pub maintenance: u32,
    pub broken: u32,
}
