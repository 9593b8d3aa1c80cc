//! Request vocabulary: verbs, parameter and header maps, per-call options.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde_json::Value;

/// Parameters sent with a request. Bodyless verbs send them as a query
/// string; body verbs send them as a JSON object.
pub type Params = BTreeMap<String, Value>;

/// Headers sent with a request.
pub type Headers = BTreeMap<String, String>;

/// The fixed set of supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Verb {
    pub const ALL: [Verb; 7] = [
        Verb::Get,
        Verb::Head,
        Verb::Post,
        Verb::Put,
        Verb::Patch,
        Verb::Delete,
        Verb::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Head => "head",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Patch => "patch",
            Verb::Delete => "delete",
            Verb::Options => "options",
        }
    }

    /// Whether params ride in the request body (as JSON) rather than the
    /// query string.
    pub fn sends_body(&self) -> bool {
        matches!(self, Verb::Post | Verb::Put | Verb::Patch)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "head" => Ok(Verb::Head),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "patch" => Ok(Verb::Patch),
            "delete" => Ok(Verb::Delete),
            "options" => Ok(Verb::Options),
            other => Err(UnknownVerb(other.to_string())),
        }
    }
}

/// A method name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl fmt::Display for UnknownVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported HTTP method: {}", self.0)
    }
}

impl std::error::Error for UnknownVerb {}

/// Per-call options. The only recognized option is `timeout`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Abort the call if no response arrives within this duration. Applies
    /// to the single request only; when absent, the transport default
    /// governs.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_round_trips_through_str() {
        for verb in Verb::ALL {
            assert_eq!(verb.as_str().parse::<Verb>().unwrap(), verb);
        }
    }

    #[test]
    fn test_verb_parse_is_case_insensitive() {
        assert_eq!("GET".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("Delete".parse::<Verb>().unwrap(), Verb::Delete);
    }

    #[test]
    fn test_unknown_verb_is_rejected() {
        let err = "trace".parse::<Verb>().unwrap_err();
        assert_eq!(err, UnknownVerb("trace".to_string()));
        assert!(err.to_string().contains("unsupported HTTP method"));
    }

    #[test]
    fn test_body_verbs() {
        assert!(Verb::Post.sends_body());
        assert!(Verb::Put.sends_body());
        assert!(Verb::Patch.sends_body());
        assert!(!Verb::Get.sends_body());
        assert!(!Verb::Head.sends_body());
        assert!(!Verb::Delete.sends_body());
        assert!(!Verb::Options.sends_body());
    }

    #[test]
    fn test_default_options_have_no_timeout() {
        assert_eq!(CallOptions::default().timeout, None);
    }

    #[test]
    fn test_with_timeout() {
        let options = CallOptions::with_timeout(Duration::from_secs(1));
        assert_eq!(options.timeout, Some(Duration::from_secs(1)));
    }
}
