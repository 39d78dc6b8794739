// src/main.rs
use clap::Parser;
use tracing::debug;

mod cli;
mod config;
mod health;

use crate::{
    cli::Cli,
    health::{CheckResult, HealthCheckRunner},
};

const CHECK_NAME: &str = "CheckJenkinsHealth";

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries the single plugin status line.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    debug!("Resolved config: {:?}", config);

    let result = match run_check(&config).await {
        Ok(result) => result,
        Err(error) => CheckResult::unknown(format!("Check could not be executed: {:#}", error)),
    };

    println!("{}", result.output_line(CHECK_NAME));
    std::process::exit(result.status.exit_code());
}

async fn run_check(config: &config::CheckConfig) -> anyhow::Result<CheckResult> {
    config.validate()?;
    let runner = HealthCheckRunner::new()?;
    Ok(runner.run(config).await)
}
