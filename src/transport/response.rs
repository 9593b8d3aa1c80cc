use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The content-type matched a JSON pattern and the body parsed as JSON.
    Json(Value),
    /// Any other non-empty body, passed through verbatim.
    Text(String),
    /// No body.
    Empty,
}

/// Response passed through from the transport: status, headers, decoded
/// body. This module adds nothing beyond the JSON decoding the transport
/// already performed.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl Response {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of the named header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Deserializes the decoded body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match &self.body {
            Body::Json(value) => serde_json::from_value(value.clone()),
            Body::Text(text) => serde_json::from_str(text),
            Body::Empty => serde_json::from_str(""),
        }
    }
}
