//! Application constants
//!
//! Centralized location for magic strings and formatting defaults.

/// Protocol marker printed at the start of every status line
pub const PROTOCOL_MARKER: &str = "HTTP/1.1";

/// Media type injected for JSON request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header name used for the JSON default
pub const CONTENT_TYPE: &str = "Content-Type";

/// Width of the separator printed after the verbose request dump
pub const SEPARATOR_WIDTH: usize = 40;

/// Application name
pub const APP_NAME: &str = "restdump";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
