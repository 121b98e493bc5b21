//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the sonarcsv tool,
//! including the export run, a connectivity probe, and the embedded form
//! server.

mod export;
mod ping;
mod serve;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI command for the sonarcsv tool
#[derive(Parser)]
#[command(name = "sonarcsv")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Export SonarQube issues to CSV")]
#[command(
  long_about = "sonarcsv pulls static-analysis issues out of a SonarQube server's REST API\n\
        and writes them to CSV, page by page. It can run as a one-shot export to a\n\
        local file or serve a small HTML form that answers with the CSV as a download."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the sonarcsv tool
#[derive(Subcommand)]
pub enum Commands {
  /// Export issues for a project to a CSV file
  #[command(long_about = "Export issues for a project to a CSV file.\n\n\
            Fetches every page of matching issues from the configured SonarQube\n\
            server and writes one CSV row per issue. The selected columns are\n\
            written in the order given; a combined summary column is always\n\
            appended at the end.")]
  #[command(alias = "ex")]
  Export(export::ExportArgs),

  /// Check that a SonarQube server is reachable
  #[command(long_about = "Check that a SonarQube server is reachable.\n\n\
            Asks the server for its version and reports whether it answered\n\
            with a success status.")]
  Ping(ping::PingArgs),

  /// Serve the HTML form front-end
  #[command(long_about = "Serve the HTML form front-end.\n\n\
            Presents the export parameters as a web form. Submitting the form\n\
            runs the same export flow and answers with the CSV as an attachment\n\
            named after the project key.")]
  Serve(serve::ServeArgs),
}

/// Handle the CLI command and dispatch to the appropriate handler
pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Export(export) => export::handle_export_command(&export),
    Commands::Ping(ping) => ping::handle_ping_command(&ping),
    Commands::Serve(serve) => serve::handle_serve_command(&serve),
  }
}
