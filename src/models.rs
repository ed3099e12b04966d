use clap::ValueEnum;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HttpMethod {
    #[default]
    #[value(name = "GET")]
    GET,
    #[value(name = "POST")]
    POST,
    #[value(name = "PUT")]
    PUT,
    #[value(name = "DELETE")]
    DELETE,
    #[value(name = "PATCH")]
    PATCH,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
        }
    }
}

/// HTTP Header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Outgoing request headers.
///
/// Keys are case-preserving and compared literally, so `Accept` and `accept`
/// are two entries. Re-inserting a literal key replaces its value but keeps
/// the position of the first insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<Header>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|h| h.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Header::new(key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|h| h.key == key)
            .map(|h| h.value.as_str())
    }

    /// Whether any entry's key matches `key` ignoring ASCII case
    pub fn contains_ignore_case(&self, key: &str) -> bool {
        self.entries.iter().any(|h| h.key.eq_ignore_ascii_case(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for HeaderSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for header in &self.entries {
            map.serialize_entry(&header.key, &header.value)?;
        }
        map.end()
    }
}

/// Request payload, at most one kind per invocation
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    None,
    Raw(String),
    Json(serde_json::Value),
}

impl RequestBody {
    pub fn kind(&self) -> &'static str {
        match self {
            RequestBody::None => "none",
            RequestBody::Raw(_) => "raw",
            RequestBody::Json(_) => "json",
        }
    }
}

/// A fully resolved request, ready for dispatch
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderSet,
    pub body: RequestBody,
}

/// Response as received from the transport, before formatting
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseRecord {
    pub status_code: u16,
    pub reason: String,
    /// Headers in transport order
    pub headers: Vec<Header>,
    pub body: String,
}

impl ResponseRecord {
    /// First `Content-Type` value, looked up case-insensitively
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.key.eq_ignore_ascii_case("content-type"))
            .map(|h| h.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut headers = HeaderSet::new();
        headers.insert("Accept", "text/plain");
        headers.insert("X-Trace", "1");
        headers.insert("Accept", "application/json");

        let keys: Vec<_> = headers.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["Accept", "X-Trace"]);
        assert_eq!(headers.get("Accept"), Some("application/json"));
    }

    #[test]
    fn test_keys_are_case_preserving() {
        let mut headers = HeaderSet::new();
        headers.insert("Accept", "a");
        headers.insert("accept", "b");

        assert_eq!(headers.len(), 2);
        assert!(headers.contains_ignore_case("ACCEPT"));
    }

    #[test]
    fn test_header_set_serializes_in_order() {
        let mut headers = HeaderSet::new();
        headers.insert("Zeta", "1");
        headers.insert("Alpha", "2");

        let json = serde_json::to_string(&headers).unwrap();
        assert_eq!(json, r#"{"Zeta":"1","Alpha":"2"}"#);
    }

    #[test]
    fn test_response_content_type_lookup() {
        let response = ResponseRecord {
            status_code: 200,
            reason: "OK".into(),
            headers: vec![Header::new("content-type", "text/html")],
            body: String::new(),
        };
        assert_eq!(response.content_type(), Some("text/html"));
    }
}
