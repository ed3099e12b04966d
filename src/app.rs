//! App layer - the single request pipeline
//!
//! parse headers -> resolve body -> (verbose dump) -> dispatch -> format -> emit

use std::io::Write;

use crate::cli::Cli;
use crate::error::CliError;
use crate::format::format_response;
use crate::models::Request;
use crate::network::Dispatch;
use crate::output::{emit, write_request_summary};

/// Run one invocation.
///
/// Normal output goes to `out`, warnings to `err`. Nothing reaches the
/// dispatcher unless the request resolves cleanly.
pub async fn run<D: Dispatch>(
    cli: &Cli,
    dispatcher: &D,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let (request, skipped) = Request::from_cli(cli)?;

    for header in &skipped {
        writeln!(
            err,
            "Warning: Invalid header format '{}'. Expected 'Key: Value'. Skipping.",
            header
        )
        .map_err(anyhow::Error::from)?;
    }

    if cli.verbose {
        write_request_summary(out, &request)?;
    }

    let response = dispatcher.dispatch(&request).await?;
    let formatted = format_response(&response);

    emit(out, &formatted, cli.output.as_deref())?;
    Ok(())
}
