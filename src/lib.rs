//! # restdump
//!
//! A small terminal REST client: one request per invocation, printed as a
//! readable HTTP transcript and optionally saved to a file.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, PATCH, DELETE
//! - Custom headers (`-H 'Key: Value'`)
//! - JSON bodies (`-j`) and raw bodies that are sent as JSON when they parse (`-d`)
//! - Pretty-printed JSON responses
//! - Response transcript saved with `-o`
//!
//! ## Architecture
//! A linear pipeline:
//! - Request layer - header parsing and body resolution
//! - Network layer (reqwest) - dispatch behind the [`Dispatch`] trait
//! - Output layer - formatting, terminal output and file persistence

pub mod app;
pub mod cli;
pub mod constants;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod network;
pub mod output;
pub mod request;

// Re-export commonly used types
pub use cli::Cli;
pub use error::CliError;
pub use format::format_response;
pub use models::{Header, HeaderSet, HttpMethod, Request, RequestBody, ResponseRecord};
pub use network::{Dispatch, ReqwestDispatcher};
pub use request::{parse_headers, resolve_body};
