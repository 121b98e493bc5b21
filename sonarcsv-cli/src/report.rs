//! # CSV Report
//!
//! Projects issues onto the configured column set and encodes them as CSV
//! rows. The synthesized `summary` value carries embedded newlines; the
//! `csv` writer quotes them so the output stays parseable.

use std::io::Write;

use anyhow::{Context, Result};
use sonarcsv_api::Issue;

use crate::config::Column;

/// Component path with the `{project_key}:` prefix removed when present.
fn component_name<'a>(issue: &'a Issue, project_key: &str) -> &'a str {
  issue
    .component
    .strip_prefix(project_key)
    .and_then(|rest| rest.strip_prefix(':'))
    .unwrap_or(&issue.component)
}

/// Build the combined summary field for one issue.
fn summary(issue: &Issue) -> String {
  let line = issue.line.map(|l| format!("Line: {l}")).unwrap_or_default();
  format!("Severity: {}\n{}\n{}", issue.severity, issue.message, line)
}

/// The value an issue contributes to one report column.
fn field_value(issue: &Issue, column: Column, project_key: &str) -> String {
  match column {
    Column::Project => issue.project.clone().unwrap_or_default(),
    Column::Component => component_name(issue, project_key).to_string(),
    Column::Severity => issue.severity.clone(),
    Column::Line => issue.line.map(|l| l.to_string()).unwrap_or_default(),
    Column::Message => issue.message.clone(),
    Column::Summary => summary(issue),
  }
}

/// Writes report rows to any `Write` destination.
///
/// The writer appends whatever it is given; callers decide when the
/// header goes out and in which order pages arrive.
pub struct ReportWriter<W: Write> {
  writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
  pub fn new(out: W) -> Self {
    Self {
      writer: csv::Writer::from_writer(out),
    }
  }

  /// Write the header row naming the configured columns.
  pub fn write_header(&mut self, columns: &[Column]) -> Result<()> {
    self
      .writer
      .write_record(columns.iter().map(|c| c.as_str()))
      .context("Failed to write CSV header")
  }

  /// Append one page of issues, one row per issue, in response order.
  pub fn write_issues(&mut self, issues: &[Issue], columns: &[Column], project_key: &str) -> Result<()> {
    for issue in issues {
      let record = columns.iter().map(|&column| field_value(issue, column, project_key));
      self
        .writer
        .write_record(record)
        .context("Failed to write CSV row")?;
    }
    Ok(())
  }

  /// Flush buffered rows through to the destination.
  pub fn flush(&mut self) -> Result<()> {
    self.writer.flush().context("Failed to flush CSV output")
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn make_issue(component: &str, severity: &str, message: &str, line: Option<u64>) -> Issue {
    serde_json::from_value(json!({
        "project": "demo",
        "component": component,
        "severity": severity,
        "message": message,
        "line": line
    }))
    .unwrap()
  }

  fn write_to_string(issues: &[Issue], columns: &[Column], project_key: &str) -> String {
    let mut buffer = Vec::new();
    let mut writer = ReportWriter::new(&mut buffer);
    writer.write_header(columns).unwrap();
    writer.write_issues(issues, columns, project_key).unwrap();
    writer.flush().unwrap();
    drop(writer);
    String::from_utf8(buffer).unwrap()
  }

  #[test]
  fn test_summary_with_line() {
    let issue = make_issue("demo:src/main.rs", "MAJOR", "Remove this", Some(42));

    assert_eq!(summary(&issue), "Severity: MAJOR\nRemove this\nLine: 42");
  }

  #[test]
  fn test_summary_without_line() {
    let issue = make_issue("demo:src/main.rs", "INFO", "Complete the task", None);

    assert_eq!(summary(&issue), "Severity: INFO\nComplete the task\n");
  }

  #[test]
  fn test_component_prefix_is_stripped() {
    let issue = make_issue("demo:src/main.rs", "MAJOR", "Remove this", None);

    assert_eq!(component_name(&issue, "demo"), "src/main.rs");
  }

  #[test]
  fn test_component_without_prefix_is_unchanged() {
    let issue = make_issue("other:src/main.rs", "MAJOR", "Remove this", None);

    assert_eq!(component_name(&issue, "demo"), "other:src/main.rs");
  }

  #[test]
  fn test_rows_follow_configured_column_order() {
    let issue = make_issue("demo:src/main.rs", "MAJOR", "Remove this", Some(3));
    let columns = [Column::Message, Column::Component, Column::Line];

    let output = write_to_string(&[issue], &columns, "demo");
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("message,component,line"));
    assert_eq!(lines.next(), Some("Remove this,src/main.rs,3"));
    assert_eq!(lines.next(), None);
  }

  #[test]
  fn test_project_and_missing_line_render_as_plain_fields() {
    let issue = make_issue("demo:README.md", "INFO", "Look here", None);
    let columns = [Column::Project, Column::Line, Column::Severity];

    let output = write_to_string(&[issue], &columns, "demo");

    assert_eq!(output, "project,line,severity\ndemo,,INFO\n");
  }

  #[test]
  fn test_summary_field_is_quoted() {
    let issue = make_issue("demo:src/main.rs", "BLOCKER", "Fix this", Some(9));
    let columns = [Column::Component, Column::Summary];

    let output = write_to_string(&[issue], &columns, "demo");

    assert_eq!(
      output,
      "component,summary\nsrc/main.rs,\"Severity: BLOCKER\nFix this\nLine: 9\"\n"
    );
  }

  #[test]
  fn test_message_with_comma_is_quoted() {
    let issue = make_issue("demo:a.rs", "MINOR", "Rename x, then y", None);
    let columns = [Column::Message];

    let output = write_to_string(&[issue], &columns, "demo");

    assert_eq!(output, "message\n\"Rename x, then y\"\n");
  }
}
