use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Issue severities understood by SonarQube, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Info,
  Minor,
  Major,
  Critical,
  Blocker,
}

impl Severity {
  /// Every severity the search API accepts, in ascending order.
  pub const ALL: [Severity; 5] = [
    Severity::Info,
    Severity::Minor,
    Severity::Major,
    Severity::Critical,
    Severity::Blocker,
  ];

  /// The wire form used in the `severities` query parameter.
  pub const fn as_str(self) -> &'static str {
    match self {
      Severity::Info => "INFO",
      Severity::Minor => "MINOR",
      Severity::Major => "MAJOR",
      Severity::Critical => "CRITICAL",
      Severity::Blocker => "BLOCKER",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Severity {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_uppercase().as_str() {
      "INFO" => Ok(Severity::Info),
      "MINOR" => Ok(Severity::Minor),
      "MAJOR" => Ok(Severity::Major),
      "CRITICAL" => Ok(Severity::Critical),
      "BLOCKER" => Ok(Severity::Blocker),
      _ => Err(format!("unknown severity: {s}")),
    }
  }
}

/// Represents a single issue returned by the search endpoint.
///
/// The API returns many more fields per issue; everything outside this
/// set is dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
  /// Key of the project the issue belongs to
  #[serde(default)]
  pub project: Option<String>,
  /// File the issue was raised on, prefixed with the project key
  pub component: String,
  /// Severity as reported by the server, passed through verbatim
  pub severity: String,
  /// Rule message describing the issue
  pub message: String,
  /// Line the issue was raised on, absent for file-level issues
  #[serde(default)]
  pub line: Option<u64>,
}

/// Represents one page of issue search results.
///
/// `total` counts every issue matching the query, not just this page;
/// it is meaningful on the first page fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
  pub total: u64,
  pub issues: Vec<Issue>,
}
