//! HTML rendering for the export form.
//!
//! The page is assembled with plain string building; the form is small
//! enough that a template engine would outweigh it.

use sonarcsv_api::Severity;

use crate::config::Column;
use crate::server::form::FormSubmission;

/// Escape a value for attribute and text positions.
fn escape(value: &str) -> String {
  value
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

fn checkbox(name: &str, value: &str, label: &str, checked: bool) -> String {
  let checked = if checked { " checked" } else { "" };
  format!("      <label><input type=\"checkbox\" name=\"{name}\" value=\"{value}\"{checked}> {label}</label>\n")
}

/// Render the export form, echoing prior inputs and any error messages.
pub fn render_form(state: &FormSubmission, errors: &[String]) -> String {
  let mut page = String::from(
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Generate Issues Report</title>
  <style>
    body { width: 60%; margin: 20px auto; font-family: sans-serif; }
    fieldset { margin-bottom: 1em; }
    .errors { color: #a00; }
  </style>
</head>
<body>
  <h1>Generate Issues Report</h1>
"#,
  );

  if !errors.is_empty() {
    page.push_str("  <ul class=\"errors\">\n");
    for error in errors {
      page.push_str(&format!("    <li>{}</li>\n", escape(error)));
    }
    page.push_str("  </ul>\n");
  }

  page.push_str(&format!(
    r#"  <form method="post">
    <fieldset>
      <legend>Server</legend>
      <label>SonarQube Host
        <input type="text" name="sonarqube_host" value="{host}" placeholder="localhost">
      </label>
      <label>SonarQube Port
        <input type="text" name="sonarqube_port" value="{port}" placeholder="9000">
      </label>
    </fieldset>
    <fieldset>
      <legend>Project</legend>
      <label>Project Key
        <input type="text" name="project_key" value="{project_key}" placeholder="Project Key">
      </label>
    </fieldset>
"#,
    host = escape(&state.host),
    port = escape(&state.port),
    project_key = escape(&state.project_key),
  ));

  page.push_str("    <fieldset>\n      <legend>Severities</legend>\n");
  for severity in Severity::ALL {
    page.push_str(&checkbox(
      "severities",
      severity.as_str(),
      severity.as_str(),
      state.severities.contains(&severity),
    ));
  }
  page.push_str("    </fieldset>\n");

  page.push_str("    <fieldset>\n      <legend>Columns</legend>\n");
  for column in Column::SELECTABLE {
    page.push_str(&checkbox(
      "columns",
      column.as_str(),
      &column.as_str().to_uppercase(),
      state.columns.contains(&column),
    ));
  }
  page.push_str("    </fieldset>\n");

  page.push_str(
    r#"    <button type="submit">Download</button>
  </form>
</body>
</html>
"#,
  );

  page
}
