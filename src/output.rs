//! Terminal and file output

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::constants::SEPARATOR_WIDTH;
use crate::models::{Request, RequestBody};

/// Print the resolved request ahead of dispatch
pub fn write_request_summary(out: &mut impl Write, request: &Request) -> Result<()> {
    writeln!(out, "Request Method: {}", request.method.as_str())?;
    writeln!(out, "Request URL: {}", request.url)?;
    writeln!(
        out,
        "Request Headers: {}",
        serde_json::to_string_pretty(&request.headers)?
    )?;
    match &request.body {
        RequestBody::Json(value) => {
            writeln!(out, "Request JSON Body: {}", serde_json::to_string_pretty(value)?)?
        }
        RequestBody::Raw(text) => writeln!(out, "Request Raw Data Body: {}", text)?,
        RequestBody::None => {}
    }
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

/// Print the formatted response and, when `path` is set, save the same text there
pub fn emit(out: &mut impl Write, formatted: &str, path: Option<&Path>) -> Result<()> {
    writeln!(out, "{}", formatted)?;

    if let Some(path) = path {
        save(path, formatted)?;
        writeln!(out, "\nResponse successfully saved to: {}", path.display())?;
    }

    out.flush()?;
    Ok(())
}

/// Write `formatted` to `path`, replacing any existing content
fn save(path: &Path, formatted: &str) -> Result<()> {
    fs::write(path, formatted.as_bytes())
        .with_context(|| format!("failed to write response to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = formatted.len(), "Saved response");
    Ok(())
}
