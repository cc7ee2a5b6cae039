//! `gloo-net` implementation of the core HTTP transport.
//!
//! Client-side (csr): real `fetch` calls.
//! Native builds: every request fails with a transport error, since there is
//! no browser to send it from.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use ptas::error::TransportError;
use ptas::transport::{HttpRequest, HttpResponse, HttpTransport};
#[cfg(feature = "csr")]
use ptas::transport::Method;

#[cfg(not(feature = "csr"))]
const NO_BROWSER: &str = "browser fetch is not available in this build";

/// Stateless handle; each request builds its own `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "csr")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
    }
}

impl HttpTransport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::RequestBuilder;

            let mut builder = RequestBuilder::new(&request.url).method(gloo_method(request.method));
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError(NO_BROWSER.to_owned()))
        }
    }
}
