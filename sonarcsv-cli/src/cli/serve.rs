//! # Serve Command
//!
//! Runs the HTML form front-end until interrupted.

use anyhow::{Context, Result};
use clap::Args;
use tokio::runtime::Runtime;
use tracing::info;

use crate::consts::DEFAULT_BIND_ADDR;
use crate::server;

/// Command for running the form front-end
#[derive(Args)]
pub struct ServeArgs {
  /// Address to bind the form server to
  #[arg(long, default_value = DEFAULT_BIND_ADDR)]
  pub bind: String,
}

/// Handle the serve command
pub fn handle_serve_command(args: &ServeArgs) -> Result<()> {
  let rt = Runtime::new().context("Failed to create tokio runtime")?;

  rt.block_on(async {
    let listener = tokio::net::TcpListener::bind(&args.bind)
      .await
      .with_context(|| format!("Failed to bind {}", args.bind))?;

    info!("form server listening on {}", args.bind);
    println!("Listening on http://{}", args.bind);

    axum::serve(listener, server::router())
      .await
      .context("form server failed")
  })
}
