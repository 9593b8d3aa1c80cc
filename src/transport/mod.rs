//! Transport seam: the capability to execute one HTTP exchange.

mod connection;
mod response;

pub use connection::HttpConnection;
pub use response::{Body, Response};

use std::time::Duration;

use crate::request::{Headers, Params, Verb};

/// Failure reported by a transport, kept as a boxed cause so the executor
/// can wrap it without knowing which transport produced it.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A single HTTP exchange: send a fully-specified request, get a response.
///
/// Implementations report distinguishable failures for request timeouts,
/// connection failures, resource-not-found, and other client errors;
/// [`RequestExecutor`](crate::RequestExecutor) flattens them all into
/// [`HttpError`](crate::HttpError).
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    fn send(
        &self,
        verb: Verb,
        url: &str,
        params: &Params,
        headers: &Headers,
        timeout: Option<Duration>,
    ) -> Result<Response, TransportError>;
}
