//! Error types raised while talking to the SonarQube API.

use thiserror::Error;

/// Failures a search request can run into. Transport and parse problems
/// are kept apart so callers can log them distinctly, even though the
/// user-facing surfaces collapse them into one message.
#[derive(Debug, Error)]
pub enum SonarError {
  /// The request could not be sent or the response body not read.
  #[error("request to SonarQube failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The server answered with a non-success status.
  #[error("SonarQube returned HTTP {status}: {body}")]
  Status {
    status: reqwest::StatusCode,
    body: String,
  },

  /// The response body was not the JSON shape the client expects.
  #[error("failed to parse SonarQube response: {0}")]
  Parse(#[from] serde_json::Error),
}
