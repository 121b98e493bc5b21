//! # Export Command
//!
//! Derive-based implementation of the export command: assembles the run
//! configuration from arguments, validates it, and writes the report to
//! disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use sonarcsv_api::{Severity, SonarClient};
use tokio::runtime::Runtime;

use crate::config::{Column, ExportConfig};
use crate::consts::{DEFAULT_SONARQUBE_HOST, DEFAULT_SONARQUBE_PORT};
use crate::export::run_export;

/// Command for exporting issues to a CSV file
#[derive(Args)]
pub struct ExportArgs {
  /// SonarQube host
  #[arg(long, default_value = DEFAULT_SONARQUBE_HOST)]
  pub host: String,

  /// SonarQube port
  #[arg(long, default_value = DEFAULT_SONARQUBE_PORT)]
  pub port: String,

  /// Project key to export issues for
  #[arg(long, short = 'k')]
  pub project_key: String,

  /// Severities to include (comma-separated)
  #[arg(
    long,
    value_delimiter = ',',
    value_parser = parse_severity,
    default_value = "INFO,MINOR,MAJOR,CRITICAL,BLOCKER"
  )]
  pub severities: Vec<Severity>,

  /// Columns to include, written in the order given (comma-separated)
  #[arg(
    long,
    value_delimiter = ',',
    value_parser = parse_column,
    default_value = "component,severity,message"
  )]
  pub columns: Vec<Column>,

  /// Output file (defaults to {project_key}.csv)
  #[arg(long, short = 'o')]
  pub output: Option<PathBuf>,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
  s.parse()
}

fn parse_column(s: &str) -> Result<Column, String> {
  s.parse()
}

/// Handle the export command
pub fn handle_export_command(args: &ExportArgs) -> Result<()> {
  let config = ExportConfig::new(
    &args.host,
    &args.port,
    &args.project_key,
    args.severities.clone(),
    args.columns.clone(),
  );

  let errors = config.validate();
  if !errors.is_empty() {
    for message in &errors {
      eprintln!("{} {}", "✗".red().bold(), message);
    }
    anyhow::bail!("invalid export configuration");
  }

  let path = args
    .output
    .clone()
    .unwrap_or_else(|| PathBuf::from(config.default_filename()));
  let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

  let rt = Runtime::new().context("Failed to create tokio runtime")?;
  let client = SonarClient::new(&config.host, &config.port);
  let rows = rt.block_on(run_export(&client, &config, BufWriter::new(file)))?;

  println!(
    "{} Wrote {} issues to {}",
    "✓".green().bold(),
    rows,
    path.display()
  );
  Ok(())
}
