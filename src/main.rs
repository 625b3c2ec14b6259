use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use symptom_bridge::cli::Cli;
use symptom_bridge::domain::error::BridgeError;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the result payload only, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("symptom_bridge=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(())   => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// The single place where a failure becomes stderr text and an exit status.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<BridgeError>() {
        Some(bridge) => {
            tracing::debug!(
                kind = bridge.kind(),
                category = %bridge.category(),
                "invocation aborted"
            );
            eprintln!("{bridge}");
            ExitCode::from(bridge.exit_code())
        }
        None => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
