//! # Export Driver
//!
//! Drives the paginated fetch-then-write loop: one search request per
//! page, rows appended in page order, header written once after the first
//! page has arrived. Nothing is written before the first fetch succeeds.

use std::io::Write;

use anyhow::Result;
use sonarcsv_api::SonarClient;
use sonarcsv_api::consts::PAGE_SIZE;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::report::ReportWriter;

/// Fetch every page for the configured query and write the report.
///
/// Returns the number of issue rows written.
///
/// # Errors
///
/// Any fetch, parse, or write failure aborts the run. Rows already
/// written for completed pages stay in the output.
pub async fn run_export<W: Write>(client: &SonarClient, config: &ExportConfig, out: W) -> Result<u64> {
  let columns = config.report_columns();

  let first = client
    .search_issues(&config.project_key, &config.severities, 1)
    .await?;
  let pages = first.total.div_ceil(PAGE_SIZE);
  info!("{} issues across {} pages", first.total, pages.max(1));

  let mut writer = ReportWriter::new(out);
  writer.write_header(&columns)?;
  writer.write_issues(&first.issues, &columns, &config.project_key)?;
  let mut rows = first.issues.len() as u64;

  for page in 2..=pages {
    let batch = client
      .search_issues(&config.project_key, &config.severities, page)
      .await?;
    debug!("page {}/{}: {} issues", page, pages, batch.issues.len());
    writer.write_issues(&batch.issues, &columns, &config.project_key)?;
    rows += batch.issues.len() as u64;
  }

  writer.flush()?;
  Ok(rows)
}
