use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use feature_gate::cli;
use feature_gate::cli::Command;
use feature_gate::telemetry;
use feature_gate::BaseConfig;
use feature_gate::TracingLogger;

#[derive(Debug, Parser)]
#[command(name = "feature-gate", about = "Query feature flags from a backend")]
struct Cli {
    #[command(flatten)]
    config: BaseConfig,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    telemetry::init(&args.config.log_filter);

    let backend = args.config.build_backend()?;
    info!("Using {:?} backend", args.config.backend);

    let outcome = cli::run(&args.command, Arc::new(backend), Arc::new(TracingLogger))?;
    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
    Ok(ExitCode::from(outcome.code))
}
