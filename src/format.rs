//! Renders a [`ResponseRecord`] as a single text block

use crate::constants::{JSON_CONTENT_TYPE, PROTOCOL_MARKER};
use crate::models::ResponseRecord;

/// Status line, one `Name: Value` line per header, a blank line, then the body.
///
/// JSON bodies (by `Content-Type`) are re-indented with two spaces; anything
/// else, including JSON that fails to parse, is passed through untouched.
pub fn format_response(response: &ResponseRecord) -> String {
    let mut lines = Vec::with_capacity(response.headers.len() + 3);

    lines.push(format!(
        "{} {} {}",
        PROTOCOL_MARKER, response.status_code, response.reason
    ));

    for header in &response.headers {
        lines.push(format!("{}: {}", header.key, header.value));
    }

    lines.push(String::new());
    lines.push(format_body(response));

    lines.join("\n")
}

fn format_body(response: &ResponseRecord) -> String {
    let is_json = response
        .content_type()
        .is_some_and(|ct| ct.starts_with(JSON_CONTENT_TYPE));

    if is_json {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&response.body) {
            if let Ok(pretty) = serde_json::to_string_pretty(&json) {
                return pretty;
            }
        }
    }
    response.body.clone()
}
