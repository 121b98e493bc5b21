//! # Ping Command
//!
//! Connectivity probe against the configured SonarQube server.

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use sonarcsv_api::SonarClient;
use tokio::runtime::Runtime;

use crate::consts::{DEFAULT_SONARQUBE_HOST, DEFAULT_SONARQUBE_PORT};

/// Command for checking SonarQube connectivity
#[derive(Args)]
pub struct PingArgs {
  /// SonarQube host
  #[arg(long, default_value = DEFAULT_SONARQUBE_HOST)]
  pub host: String,

  /// SonarQube port
  #[arg(long, default_value = DEFAULT_SONARQUBE_PORT)]
  pub port: String,
}

/// Handle the ping command
pub fn handle_ping_command(args: &PingArgs) -> Result<()> {
  let rt = Runtime::new().context("Failed to create tokio runtime")?;
  let client = SonarClient::new(&args.host, &args.port);

  let reachable = rt
    .block_on(client.test_connection())
    .with_context(|| format!("Failed to reach SonarQube at {}:{}", args.host, args.port))?;

  if reachable {
    println!(
      "{} SonarQube at {}:{} is reachable",
      "✓".green().bold(),
      args.host,
      args.port
    );
    Ok(())
  } else {
    anyhow::bail!(
      "SonarQube at {}:{} answered with an error status",
      args.host,
      args.port
    )
  }
}
