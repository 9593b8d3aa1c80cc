//! The request facade: one call, one uniform failure kind.

use std::sync::Arc;

use log::debug;

use crate::error::HttpError;
use crate::request::{CallOptions, Headers, Params, Verb};
use crate::transport::{HttpConnection, Response, Transport};

/// Issues a single HTTP call through a shared transport and normalizes
/// every transport-layer failure into [`HttpError`].
///
/// One invocation means one network attempt. Retries, backoff, and
/// connection invalidation after failure all live with the caller.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    /// Creates an executor over an explicit transport. Tests inject a fake
    /// transport here.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Creates an executor over the process-wide shared connection. The
    /// connection is built on first use; every executor obtained this way
    /// shares it for the life of the process.
    pub fn shared() -> Self {
        Self::new(Arc::new(HttpConnection::shared().clone()))
    }

    /// Sends one request and returns the transport's response unchanged.
    ///
    /// Params ride as a query string or JSON body per verb semantics; a
    /// timeout in `options` applies to this call only, otherwise the
    /// transport default governs. Any failure the transport reports -
    /// request timeout, connection failure, resource-not-found, any other
    /// client-level error - comes back as [`HttpError`] with the original
    /// failure as its cause. No other error type escapes.
    #[tracing::instrument(skip(self, params, headers))]
    pub fn call(
        &self,
        verb: Verb,
        url: &str,
        params: &Params,
        headers: &Headers,
        options: CallOptions,
    ) -> Result<Response, HttpError> {
        debug!("calling {} {}...", verb, url);

        self.transport
            .send(verb, url, params, headers, options.timeout)
            .map_err(HttpError::new)
    }
}
