//! Error taxonomy for storage, transport and backend API calls.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures keep the server's `detail` message so callers can show
//! it verbatim. Classification depends on which kind of call failed: a 401
//! on login means bad credentials, a 401 anywhere else means the stored
//! bearer credential was rejected.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Errors produced by a [`KeyValueStore`](crate::storage::KeyValueStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (e.g. outside a browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A write or delete was rejected by the backend.
    #[error("storage write failed: {0}")]
    Write(String),

    /// A stored value could not be decoded.
    #[error("malformed value under `{key}`: {reason}")]
    Malformed { key: String, reason: String },
}

/// Failure below HTTP: DNS, connect, TLS, aborted fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Errors surfaced by [`ApiClient`](crate::api::ApiClient) calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the supplied credentials.
    #[error("authentication failed{}", detail_suffix(.detail.as_deref()))]
    Authentication { detail: Option<String> },

    /// The backend rejected the request body (duplicate user, bad field).
    #[error("validation failed{}", detail_suffix(.detail.as_deref()))]
    Validation { detail: Option<String> },

    /// The bearer credential was missing, expired or invalid.
    #[error("unauthorized{}", detail_suffix(.detail.as_deref()))]
    Unauthorized { detail: Option<String> },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// Any other non-success status.
    #[error("HTTP {status}{}", detail_suffix(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The call succeeded but the session could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Backend-provided detail message, if the response carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Authentication { detail }
            | Self::Validation { detail }
            | Self::Unauthorized { detail }
            | Self::Status { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::Storage(_) => None,
        }
    }

    /// HTTP status behind the error, when there was a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.0)
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Which kind of call produced a non-success response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// `POST /auth/login` and `POST /auth/refresh`.
    Login,
    /// `POST /auth/register`.
    Register,
    /// Any call that relies on the stored bearer credential.
    Protected,
}

/// Map a non-success status and raw body into an [`ApiError`].
#[must_use]
pub fn classify(kind: CallKind, status: u16, body: &str) -> ApiError {
    let detail = parse_detail(body);
    match (kind, status) {
        (CallKind::Login, 401 | 403) | (CallKind::Register, 401 | 403) => ApiError::Authentication { detail },
        (CallKind::Register, 400 | 409 | 422) => ApiError::Validation { detail },
        (CallKind::Protected, 401 | 403) => ApiError::Unauthorized { detail },
        _ => ApiError::Status { status, detail },
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extract the FastAPI-style `detail` from an error body.
///
/// `detail` is either a plain string or a list of validation items carrying
/// a `msg` field; list messages are joined with `"; "`.
#[must_use]
pub fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}
