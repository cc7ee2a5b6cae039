//! Shared REST client for the PTAS backend.
//!
//! ARCHITECTURE
//! ============
//! Every request reads the current access token from the [`SessionStore`] and
//! attaches it as the bearer credential. Auth and resource helpers build on
//! `get_json`/`post_json`/`put_json` and only choose the [`CallKind`] used to
//! classify failures.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, CallKind, classify};
use crate::storage::KeyValueStore;
use crate::store::SessionStore;
use crate::transport::{HttpRequest, HttpTransport, Method};

#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    base_url: String,
    store: SessionStore<S>,
}

impl<T, S> ApiClient<T, S>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    pub fn new(transport: T, base_url: impl Into<String>, store: SessionStore<S>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { transport, base_url, store }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` with percent-encoded `query` pairs.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            return format!("{}{path}", self.base_url);
        }
        let qs = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query)
            .finish();
        format!("{}{path}?{qs}", self.base_url)
    }

    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on transport failure, non-success
    /// status or an undecodable body.
    pub async fn get_json<R>(&self, kind: CallKind, path: &str, query: &[(&str, String)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path, query);
        self.send(kind, Method::Get, url, None).await
    }

    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on transport failure, non-success
    /// status or an undecodable body.
    pub async fn post_json<B, R>(&self, kind: CallKind, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode_body(body)?;
        let url = self.url(path, &[]);
        self.send(kind, Method::Post, url, Some(body)).await
    }

    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on transport failure, non-success
    /// status or an undecodable body.
    pub async fn put_json<B, R>(&self, kind: CallKind, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode_body(body)?;
        let url = self.url(path, &[]);
        self.send(kind, Method::Put, url, Some(body)).await
    }

    async fn send<R>(
        &self,
        kind: CallKind,
        method: Method,
        url: String,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        tracing::debug!(method = method.as_str(), %url, "api request");
        let request = HttpRequest { method, url, bearer: self.store.token(), body };

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            let err = classify(kind, response.status, &response.body);
            tracing::debug!(status = response.status, error = %err, "api request rejected");
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
