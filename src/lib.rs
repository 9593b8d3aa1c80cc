//! restcall - a minimal HTTP request facade.
//!
//! One operation, [`RequestExecutor::call`]: send a verb-based request to a
//! URL with optional parameters, headers, and a per-call timeout. Every
//! transport-layer failure - request timeout, connection failure,
//! resource-not-found, any other client-level error - comes back as the
//! single [`HttpError`] kind with the original failure attached as its
//! cause, so callers never have to enumerate the underlying client's error
//! taxonomy.
//!
//! This layer performs exactly one network attempt per invocation. Retries,
//! backoff, and circuit breaking belong to the caller.
//!
//! ```no_run
//! use restcall::{CallOptions, Headers, Params, RequestExecutor, Verb};
//!
//! let executor = RequestExecutor::shared();
//! let response = executor.call(
//!     Verb::Get,
//!     "https://api.example.com/items",
//!     &Params::new(),
//!     &Headers::new(),
//!     CallOptions::default(),
//! )?;
//! println!("status {}", response.status);
//! # Ok::<(), restcall::HttpError>(())
//! ```

pub mod error;
pub mod executor;
pub mod request;
pub mod transport;

pub use error::HttpError;
pub use executor::RequestExecutor;
pub use request::{CallOptions, Headers, Params, UnknownVerb, Verb};
pub use transport::{Body, HttpConnection, Response, Transport, TransportError};
