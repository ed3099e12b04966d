//! Command-line surface

use std::path::PathBuf;

use clap::Parser;

use crate::models::HttpMethod;

/// A terminal-based REST API client to send requests and save responses.
#[derive(Debug, Parser)]
#[command(name = "restdump", version)]
pub struct Cli {
    /// The URL for the API request.
    pub url: String,

    /// The HTTP method to use.
    #[arg(short, long, value_enum, default_value_t = HttpMethod::GET)]
    pub method: HttpMethod,

    /// Add a custom header to the request (e.g., 'Authorization: Bearer token').
    /// Can be specified multiple times.
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Raw data to send in the request body. Sent as JSON if it parses as JSON.
    #[arg(short, long)]
    pub data: Option<String>,

    /// JSON data to send in the request body. Sets Content-Type to
    /// application/json unless a Content-Type header is given.
    #[arg(short, long)]
    pub json: Option<String>,

    /// Path to a file where the full response (status, headers, body) will be saved.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print request details before sending.
    #[arg(short, long)]
    pub verbose: bool,

    /// Append diagnostic trace events to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
