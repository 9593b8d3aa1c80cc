//! Production transport backed by reqwest's blocking client.

use std::time::Duration;

use log::debug;
use once_cell::sync::Lazy;
use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::{Body, Response, Transport, TransportError};
use crate::request::{Headers, Params, Verb};

/// Process-wide connection, built once on first use and never torn down or
/// recreated, not even after a transport failure.
static SHARED: Lazy<HttpConnection> =
    Lazy::new(|| HttpConnection::new().expect("failed to build shared HTTP connection"));

/// Transport over a pooled `reqwest` blocking client with TLS certificate
/// verification enabled and JSON request/response handling.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpConnection {
    client: Client,
}

impl HttpConnection {
    /// Builds a connection with TLS verification on.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// The process-wide shared connection, created on first use and reused
    /// by every subsequent call for the life of the process. Safe under
    /// concurrent first use: at most one construction ever happens.
    pub fn shared() -> &'static HttpConnection {
        &SHARED
    }
}

impl Transport for HttpConnection {
    #[tracing::instrument(skip(self, params, headers))]
    fn send(
        &self,
        verb: Verb,
        url: &str,
        params: &Params,
        headers: &Headers,
        timeout: Option<Duration>,
    ) -> Result<Response, TransportError> {
        debug!("{} {}...", verb, url);

        let mut request = self.client.request(method_for(verb), url);

        for (name, value) in headers {
            request = request.header(name, value);
        }

        if !params.is_empty() {
            request = if verb.sends_body() {
                request.json(params)
            } else {
                request.query(&query_pairs(params))
            };
        }

        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send()?.error_for_status()?;

        let status = response.status().as_u16();
        let response_headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let json_content = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let text = response.text()?;
        let body = if text.is_empty() {
            Body::Empty
        } else if json_content {
            Body::Json(serde_json::from_str(&text)?)
        } else {
            Body::Text(text)
        };

        debug!("{} {} -> {}", verb, url, status);

        Ok(Response {
            status,
            headers: response_headers,
            body,
        })
    }
}

fn method_for(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Head => Method::HEAD,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Patch => Method::PATCH,
        Verb::Delete => Method::DELETE,
        Verb::Options => Method::OPTIONS,
    }
}

/// Flattens params into query pairs. Non-string scalars use their JSON
/// rendering.
fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

/// Matches `application/json` and structured suffixes like
/// `application/problem+json`, with optional parameters after `;`.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    essence
        .rsplit(['/', '+'])
        .next()
        .is_some_and(|subtype| subtype.eq_ignore_ascii_case("json"))
}
