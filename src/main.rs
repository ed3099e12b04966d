//! restdump - send one HTTP request and print the formatted response
//!
//! Pipeline:
//! - CLI (clap) - flags into a resolved request
//! - Network (reqwest on a current-thread Tokio runtime) - one blocking-style call
//! - Output - formatted response to stdout, optionally to a file

use std::io;
use std::process::ExitCode;

use clap::Parser;

use restdump::{app, logging, Cli, CliError, ReqwestDispatcher};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = match logging::init(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", CliError::from(e));
            return ExitCode::FAILURE;
        }
    };

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Invocation failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<(), CliError> {
    let dispatcher = ReqwestDispatcher::new()?;
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    app::run(cli, &dispatcher, &mut stdout, &mut stderr).await
}
