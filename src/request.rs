//! Turns raw command-line inputs into a dispatchable [`Request`]

use crate::cli::Cli;
use crate::constants::{CONTENT_TYPE, JSON_CONTENT_TYPE};
use crate::error::CliError;
use crate::models::{HeaderSet, HttpMethod, Request, RequestBody};

/// Result of parsing `-H` arguments
#[derive(Debug, Default)]
pub struct ParsedHeaders {
    pub headers: HeaderSet,
    /// Entries without a colon, in input order
    pub skipped: Vec<String>,
}

/// Parse `"Key: Value"` strings into a [`HeaderSet`].
///
/// Splits on the first colon and trims both sides. Entries without a colon
/// are reported in `skipped` and never fail the parse.
pub fn parse_headers<S: AsRef<str>>(entries: &[S]) -> ParsedHeaders {
    let mut parsed = ParsedHeaders::default();

    for entry in entries {
        let entry = entry.as_ref();
        match entry.split_once(':') {
            Some((key, value)) => parsed.headers.insert(key.trim(), value.trim()),
            None => {
                tracing::warn!(header = %entry, "Skipping header without colon");
                parsed.skipped.push(entry.to_string());
            }
        }
    }

    parsed
}

/// Attempt to read `input` as JSON
fn sniff_json(input: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(input)
}

/// Choose the body from `--json` and `--data` and apply the JSON
/// `Content-Type` default to `headers`.
///
/// `--json` wins when both are present. Empty strings count as absent.
pub fn resolve_body(
    json: Option<&str>,
    data: Option<&str>,
    mut headers: HeaderSet,
) -> Result<(HeaderSet, RequestBody), CliError> {
    let json = json.filter(|s| !s.is_empty());
    let data = data.filter(|s| !s.is_empty());

    let body = if let Some(input) = json {
        match sniff_json(input) {
            Ok(value) => RequestBody::Json(value),
            Err(source) => {
                return Err(CliError::InvalidJson {
                    input: input.to_string(),
                    source,
                })
            }
        }
    } else if let Some(input) = data {
        match sniff_json(input) {
            Ok(value) => RequestBody::Json(value),
            Err(_) => RequestBody::Raw(input.to_string()),
        }
    } else {
        RequestBody::None
    };

    if matches!(body, RequestBody::Json(_)) && !headers.contains_ignore_case(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, JSON_CONTENT_TYPE);
    }

    tracing::debug!(body = body.kind(), "Resolved request body");
    Ok((headers, body))
}

/// Build the immutable [`Request`] for one invocation
pub fn build(
    method: HttpMethod,
    url: &str,
    headers: HeaderSet,
    json: Option<&str>,
    data: Option<&str>,
) -> Result<Request, CliError> {
    let (headers, body) = resolve_body(json, data, headers)?;
    Ok(Request {
        method,
        url: url.to_string(),
        headers,
        body,
    })
}

impl Request {
    /// Resolve a request from parsed arguments, returning the skipped headers
    /// alongside so the caller can warn about them.
    pub fn from_cli(cli: &Cli) -> Result<(Request, Vec<String>), CliError> {
        let ParsedHeaders { headers, skipped } = parse_headers(&cli.headers);
        let request = build(
            cli.method,
            &cli.url,
            headers,
            cli.json.as_deref(),
            cli.data.as_deref(),
        )?;
        Ok((request, skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_headers_trims_and_splits_on_first_colon() {
        let parsed = parse_headers(&["  Authorization :  Bearer abc  ", "Link: http://x:80/"]);

        assert_eq!(parsed.headers.get("Authorization"), Some("Bearer abc"));
        assert_eq!(parsed.headers.get("Link"), Some("http://x:80/"));
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_parse_headers_skips_entries_without_colon() {
        let parsed = parse_headers(&["NoColonHere", "Accept: */*"]);

        assert_eq!(parsed.headers.len(), 1);
        assert_eq!(parsed.skipped, vec!["NoColonHere"]);
    }

    #[test]
    fn test_parse_headers_last_write_wins() {
        let parsed = parse_headers(&["X-A: 1", "X-A: 2"]);
        assert_eq!(parsed.headers.get("X-A"), Some("2"));
    }

    #[test]
    fn test_parse_headers_allows_empty_value() {
        let parsed = parse_headers(&["X-Empty:"]);
        assert_eq!(parsed.headers.get("X-Empty"), Some(""));
    }

    #[test]
    fn test_json_flag_sets_content_type() {
        let (headers, body) = resolve_body(Some(r#"{"a":1}"#), None, HeaderSet::new()).unwrap();

        assert_eq!(body, RequestBody::Json(json!({"a": 1})));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_json_flag_keeps_existing_content_type() {
        let mut headers = HeaderSet::new();
        headers.insert("content-type", "application/vnd.api+json");

        let (headers, _) = resolve_body(Some("[1,2]"), None, headers).unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("content-type"), Some("application/vnd.api+json"));
    }

    #[test]
    fn test_invalid_json_flag_is_fatal() {
        let err = resolve_body(Some("not json"), None, HeaderSet::new()).unwrap_err();
        match err {
            CliError::InvalidJson { input, .. } => assert_eq!(input, "not json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_data_is_sniffed_as_json() {
        let from_json = resolve_body(Some(r#"{"a":1}"#), None, HeaderSet::new()).unwrap();
        let from_data = resolve_body(None, Some(r#"{"a":1}"#), HeaderSet::new()).unwrap();
        assert_eq!(from_json, from_data);
    }

    #[test]
    fn test_sniffed_data_keeps_key_order() {
        let (_, body) = resolve_body(None, Some(r#"{"b":1,"a":2}"#), HeaderSet::new()).unwrap();
        let RequestBody::Json(value) = body else {
            panic!("expected a JSON body");
        };
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_plain_data_is_raw_without_content_type() {
        let (headers, body) = resolve_body(None, Some("plain text"), HeaderSet::new()).unwrap();

        assert_eq!(body, RequestBody::Raw("plain text".into()));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_json_takes_precedence_over_data() {
        let (_, body) = resolve_body(Some("true"), Some("ignored"), HeaderSet::new()).unwrap();
        assert_eq!(body, RequestBody::Json(json!(true)));
    }

    #[test]
    fn test_empty_inputs_are_absent() {
        let (headers, body) = resolve_body(Some(""), Some(""), HeaderSet::new()).unwrap();
        assert_eq!(body, RequestBody::None);
        assert!(headers.is_empty());

        let (_, body) = resolve_body(Some(""), Some("raw"), HeaderSet::new()).unwrap();
        assert_eq!(body, RequestBody::Raw("raw".into()));
    }

    #[test]
    fn test_from_cli_collects_skipped_headers() {
        use clap::Parser;

        let cli = Cli::try_parse_from([
            "restdump",
            "-m",
            "PUT",
            "-H",
            "broken",
            "-j",
            r#"{"k":"v"}"#,
            "http://localhost/items/1",
        ])
        .unwrap();

        let (request, skipped) = Request::from_cli(&cli).unwrap();
        assert_eq!(request.method, HttpMethod::PUT);
        assert_eq!(request.url, "http://localhost/items/1");
        assert_eq!(request.body, RequestBody::Json(json!({"k": "v"})));
        assert_eq!(skipped, vec!["broken"]);
    }
}
