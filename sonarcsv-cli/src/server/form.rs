//! Decoding of the export form body.
//!
//! The severity and column checkbox groups arrive as repeated keys,
//! which serde-based urlencoded extraction cannot collect, so the body
//! is walked with `form_urlencoded` directly.

use sonarcsv_api::Severity;
use url::form_urlencoded;

use crate::config::{Column, ExportConfig};

/// One submission of the export form, as entered by the user.
///
/// Kept separate from [`ExportConfig`] so a rejected submission can be
/// echoed back exactly as it came in.
#[derive(Debug, Clone)]
pub struct FormSubmission {
  pub host: String,
  pub port: String,
  pub project_key: String,
  pub severities: Vec<Severity>,
  pub columns: Vec<Column>,
}

impl Default for FormSubmission {
  /// The state the form is first rendered with: blank connection fields,
  /// every severity checked, the component/severity/message columns.
  fn default() -> Self {
    Self {
      host: String::new(),
      port: String::new(),
      project_key: String::new(),
      severities: Severity::ALL.to_vec(),
      columns: vec![Column::Component, Column::Severity, Column::Message],
    }
  }
}

impl FormSubmission {
  /// Decode an urlencoded form body.
  ///
  /// Unknown severity and column values are dropped rather than
  /// rejected, and repeated column boxes collapse to one selection.
  pub fn parse(body: &str) -> Self {
    let mut submission = Self {
      host: String::new(),
      port: String::new(),
      project_key: String::new(),
      severities: Vec::new(),
      columns: Vec::new(),
    };

    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
      match key.as_ref() {
        "sonarqube_host" => submission.host = value.into_owned(),
        "sonarqube_port" => submission.port = value.into_owned(),
        "project_key" => submission.project_key = value.into_owned(),
        "severities" => {
          if let Ok(severity) = value.parse::<Severity>() {
            submission.severities.push(severity);
          }
        }
        "columns" => {
          if let Ok(column) = value.parse::<Column>() {
            if Column::SELECTABLE.contains(&column) && !submission.columns.contains(&column) {
              submission.columns.push(column);
            }
          }
        }
        _ => {}
      }
    }

    submission
  }

  /// Turn the submission into a run configuration, filling blank host
  /// and port with the defaults.
  pub fn to_config(&self) -> ExportConfig {
    ExportConfig::new(
      &self.host,
      &self.port,
      &self.project_key,
      self.severities.clone(),
      self.columns.clone(),
    )
  }
}
