//! The single error kind raised by the request facade.

use std::error::Error;
use std::fmt;

/// Normalized transport-layer failure.
///
/// Every failure the transport reports is funneled through this one type:
/// request timeouts, connect timeouts, connection failures,
/// resource-not-found, and any other client-level error. The original
/// failure is preserved as the cause so callers that do need to
/// distinguish them can downcast it (e.g. to `reqwest::Error` and check
/// `is_timeout()` or `is_connect()`).
#[derive(Debug)]
pub struct HttpError {
    cause: Box<dyn Error + Send + Sync>,
}

impl HttpError {
    pub fn new(cause: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// The original transport failure.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP transport error: {}", self.cause)
    }
}

impl Error for HttpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = self.cause.as_ref();
        Some(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_includes_cause() {
        let err = HttpError::new(io::Error::new(io::ErrorKind::TimedOut, "deadline elapsed"));
        assert!(err.to_string().contains("HTTP transport error"));
        assert!(err.to_string().contains("deadline elapsed"));
    }

    #[test]
    fn test_source_is_original_cause() {
        let err = HttpError::new(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        let source = err.source().expect("cause must be preserved");
        assert!(source.to_string().contains("refused"));
    }

    #[test]
    fn test_cause_downcasts_to_original_type() {
        let err = HttpError::new(io::Error::new(io::ErrorKind::TimedOut, "deadline elapsed"));
        let cause = err
            .cause()
            .downcast_ref::<io::Error>()
            .expect("cause should downcast to the original error type");
        assert_eq!(cause.kind(), io::ErrorKind::TimedOut);
    }
}
