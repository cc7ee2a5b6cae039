//! Authentication calls against `/auth/*`.
//!
//! Stateless: results are returned to the caller and nothing is persisted
//! here. [`Session`](crate::session::Session) decides what to store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::api::ApiClient;
use crate::error::{ApiError, CallKind};
use crate::storage::KeyValueStore;
use crate::transport::HttpTransport;
use crate::types::{Credentials, NewUser, RefreshRequest, TokenBundle, User};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const ME_PATH: &str = "/auth/me";

#[derive(Clone, Debug)]
pub struct AuthClient<T, S> {
    api: ApiClient<T, S>,
}

impl<T, S> AuthClient<T, S>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    /// Exchange credentials for a token bundle via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authentication`] with the backend detail when the
    /// credentials are rejected, or another [`ApiError`] on transport failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenBundle, ApiError> {
        self.api.post_json(CallKind::Login, LOGIN_PATH, credentials).await
    }

    /// Create an account via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for rejected fields (e.g. duplicate
    /// username or email) and [`ApiError::Authentication`] when the caller
    /// may not register users.
    pub async fn register(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.api.post_json(CallKind::Register, REGISTER_PATH, new_user).await
    }

    /// Fetch the profile behind the stored bearer credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if the credential is rejected.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.api.get_json(CallKind::Protected, ME_PATH, &[]).await
    }

    /// Trade a refresh token for a new bundle via `POST /auth/refresh`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authentication`] if the refresh token is invalid.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenBundle, ApiError> {
        self.api
            .post_json(CallKind::Login, REFRESH_PATH, &RefreshRequest { refresh_token })
            .await
    }
}
