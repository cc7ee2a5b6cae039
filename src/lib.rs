//! # ptas
//!
//! Platform-neutral core of the PTAS plant monitoring dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser `client` crate and the `cli` crate both build on this one.
//! They supply a [`storage::KeyValueStore`] and a [`transport::HttpTransport`];
//! everything else (session state machine, route guard, API calls, error
//! classification) lives here.
//!
//! LAYERS
//! ======
//! `storage` -> `store` (session entries) -> `api` (bearer-attaching client)
//! -> `auth` / `resources` -> `session` -> `guard`.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod resources;
pub mod session;
pub mod storage;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::ApiClient;
pub use error::{ApiError, StorageError, TransportError};
pub use guard::{GuardOutcome, guard};
pub use session::{Session, SessionCell, SessionState};
