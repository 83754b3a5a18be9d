//! tsforge CLI — interactive scaffolder for TypeScript/Node.js projects.
//!
//! A single entry point with no flags or subcommands: run `tsforge` inside a
//! freshly initialized npm project and answer one question. The run is
//! linear — version check, prompt, file emission, `package.json` merge — and
//! any fatal error aborts with a non-zero exit. See
//! [`commands::init`] for the step-by-step contract.

mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tsforge",
    about = "Scaffold a TypeScript/Node.js project — Express, Docker, and CI included",
    version
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    // Log level via RUST_LOG; quiet by default, the console output carries
    // the user-facing progress.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    if let Err(e) = commands::init::run().await {
        output::print_error(&format!("Error setting up project: {e:#}"));
        std::process::exit(1);
    }
}
