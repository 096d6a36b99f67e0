//! Main entry point for the zipshell CLI app

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zipshell::engine::Engine;
use zipshell::{cli, repl};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::run();
    let mut engine = Engine::open(&args.archive)?;
    repl::run(&mut engine)
}
