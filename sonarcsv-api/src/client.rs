//! # SonarQube HTTP Client
//!
//! HTTP client implementation for SonarQube API interactions, handling
//! request building and response parsing for the REST endpoints sonarcsv
//! consumes.

use reqwest::Client;
use reqwest::header;

use crate::consts::USER_AGENT;
use crate::error::SonarError;

/// Represents a SonarQube API client
pub struct SonarClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl SonarClient {
  /// Create a new SonarQube client for a host and port pair.
  ///
  /// The underlying HTTP client carries no request timeout: an export is
  /// expected to block until the server has answered every page.
  pub fn new(host: &str, port: &str) -> Self {
    Self::from_base_url(&format!("http://{host}:{port}"))
  }

  /// Create a client against a full base URL, scheme included.
  pub fn from_base_url(base_url: &str) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  /// Test the connection by fetching the server version.
  pub async fn test_connection(&self) -> Result<bool, SonarError> {
    let url = format!("{}/api/server/version", self.base_url);

    let response = self
      .client
      .get(&url)
      .header(header::USER_AGENT, USER_AGENT)
      .send()
      .await?;

    Ok(response.status().is_success())
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  /// Test that the client builds its base URL from host and port
  #[test]
  fn test_client_creation() {
    let client = SonarClient::new("sonar.example.com", "9000");

    assert_eq!(client.base_url, "http://sonar.example.com:9000");
  }

  /// Test that a trailing slash in a base URL is dropped
  #[test]
  fn test_client_from_base_url_trims_trailing_slash() {
    let client = SonarClient::from_base_url("http://localhost:9000/");

    assert_eq!(client.base_url, "http://localhost:9000");
  }

  #[tokio::test]
  async fn test_connection_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/server/version"))
      .respond_with(ResponseTemplate::new(200).set_body_string("10.4.1"))
      .mount(&mock_server)
      .await;

    let client = SonarClient::from_base_url(&mock_server.uri());

    assert!(client.test_connection().await.unwrap());
  }

  #[tokio::test]
  async fn test_connection_reports_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/server/version"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&mock_server)
      .await;

    let client = SonarClient::from_base_url(&mock_server.uri());

    assert!(!client.test_connection().await.unwrap());
  }
}
