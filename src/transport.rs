//! HTTP transport port.
//!
//! The core never talks to a concrete HTTP stack. The browser plugs in a
//! `gloo-net` transport and the CLI a `reqwest` one. The trait carries no
//! `Send` bound so single-threaded browser futures satisfy it.

#![allow(async_fn_in_trait)]

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A fully-resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    /// Bearer credential to send in `Authorization`, if any.
    pub bearer: Option<String>,
    /// JSON body for `POST`/`PUT`.
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes [`HttpRequest`]s against the network.
pub trait HttpTransport {
    /// Send `request` and collect the full response body.
    ///
    /// Non-success statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
