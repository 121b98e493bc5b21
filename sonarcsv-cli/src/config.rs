//! # Export Configuration
//!
//! The immutable per-run configuration assembled from CLI arguments or a
//! form submission, plus the report column model. One value is built per
//! run; nothing is shared or mutated across runs.

use std::fmt;
use std::str::FromStr;

use sonarcsv_api::Severity;

use crate::consts::{DEFAULT_SONARQUBE_HOST, DEFAULT_SONARQUBE_PORT};

/// Columns that can appear in the generated report.
///
/// `Summary` is the synthesized pseudo-column; it is not offered for
/// selection but is always appended to the report (see
/// [`ExportConfig::report_columns`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
  Project,
  Component,
  Severity,
  Line,
  Message,
  Summary,
}

impl Column {
  /// Columns offered for selection in the form and on the CLI.
  pub const SELECTABLE: [Column; 5] = [
    Column::Project,
    Column::Component,
    Column::Severity,
    Column::Line,
    Column::Message,
  ];

  /// The raw key used in the CSV header.
  pub const fn as_str(self) -> &'static str {
    match self {
      Column::Project => "project",
      Column::Component => "component",
      Column::Severity => "severity",
      Column::Line => "line",
      Column::Message => "message",
      Column::Summary => "summary",
    }
  }
}

impl fmt::Display for Column {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Column {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "project" => Ok(Column::Project),
      "component" => Ok(Column::Component),
      "severity" => Ok(Column::Severity),
      "line" => Ok(Column::Line),
      "message" => Ok(Column::Message),
      "summary" => Ok(Column::Summary),
      _ => Err(format!("unknown column: {s}")),
    }
  }
}

/// Immutable configuration for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
  pub host: String,
  pub port: String,
  pub project_key: String,
  pub severities: Vec<Severity>,
  pub columns: Vec<Column>,
}

impl Default for ExportConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_SONARQUBE_HOST.to_string(),
      port: DEFAULT_SONARQUBE_PORT.to_string(),
      project_key: String::new(),
      severities: Severity::ALL.to_vec(),
      columns: vec![Column::Component, Column::Severity, Column::Message],
    }
  }
}

impl ExportConfig {
  /// Assemble a configuration, filling blank host and port with the
  /// defaults and keeping everything else as given.
  pub fn new(
    host: &str,
    port: &str,
    project_key: &str,
    severities: Vec<Severity>,
    columns: Vec<Column>,
  ) -> Self {
    Self {
      host: if host.is_empty() {
        DEFAULT_SONARQUBE_HOST.to_string()
      } else {
        host.to_string()
      },
      port: if port.is_empty() {
        DEFAULT_SONARQUBE_PORT.to_string()
      } else {
        port.to_string()
      },
      project_key: project_key.to_string(),
      severities,
      columns,
    }
  }

  /// Check the configuration is runnable. Every check is evaluated;
  /// each failure contributes one human-readable message.
  pub fn validate(&self) -> Vec<String> {
    let mut errors = Vec::new();
    if self.project_key.is_empty() {
      errors.push("Project key is required".to_string());
    }
    if self.severities.is_empty() {
      errors.push("Select at least one severity".to_string());
    }
    if self.columns.is_empty() {
      errors.push("Select at least one column".to_string());
    }
    errors
  }

  /// The columns actually written to the report: the selected columns in
  /// selection order, with `summary` appended when not already selected.
  pub fn report_columns(&self) -> Vec<Column> {
    let mut columns = self.columns.clone();
    if !columns.contains(&Column::Summary) {
      columns.push(Column::Summary);
    }
    columns
  }

  /// Default filename for the report artifact.
  pub fn default_filename(&self) -> String {
    format!("{}.csv", self.project_key)
  }
}
