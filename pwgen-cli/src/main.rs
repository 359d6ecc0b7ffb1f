use std::process::ExitCode;

use clap::Parser;
use pwgen_cli::{Args, run};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match run(&args, std::io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_configuration() => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!(error = %e, "password generation failed");
            eprintln!("Unexpected error: {e}");
            ExitCode::FAILURE
        }
    }
}
