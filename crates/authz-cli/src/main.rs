//! # authz
//!
//! Authorization grant decision tool.

use authz_cli::{
    cli::{Cli, Command},
    commands::{run_authorize, run_classify, run_timestamp},
    config::CliConfig,
    output::error,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration
    let config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.engine.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Classify { response_type } => run_classify(response_type, cli.output),
        Command::Authorize(args) => run_authorize(args, &config, cli.output).await,
        Command::Timestamp { millis } => run_timestamp(*millis, cli.output),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
