//! Fatal errors. Every variant ends the process with exit code 1.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// `--json` was given but does not parse; nothing is sent
    #[error("Error: Invalid JSON provided for --json: {input}")]
    InvalidJson {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error making request: {}", describe_request_error(.0))]
    Request(#[from] reqwest::Error),

    #[error("An unexpected error occurred: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

fn describe_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else if e.is_builder() {
        format!("invalid request: {}", e)
    } else {
        e.to_string()
    }
}
