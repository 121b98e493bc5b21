//! # Issue Search Endpoint
//!
//! SonarQube API endpoint implementation for paginated issue search,
//! the single data source behind a sonarcsv export.

use reqwest::header;
use tracing::{debug, info, instrument, warn};

use crate::client::SonarClient;
use crate::consts::{PAGE_SIZE, USER_AGENT};
use crate::error::SonarError;
use crate::models::{SearchResponse, Severity};

impl SonarClient {
  /// Fetch one page of issues matching the project and severity filters.
  ///
  /// Always asks for [`PAGE_SIZE`] issues per page. `projectKeys` and
  /// `severities` are only sent when non-empty, matching how the server
  /// treats an absent filter.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent, the server answers
  /// with a non-success status, or the body is not the expected JSON.
  #[instrument(skip(self, severities), level = "debug")]
  pub async fn search_issues(
    &self,
    project_key: &str,
    severities: &[Severity],
    page: u64,
  ) -> Result<SearchResponse, SonarError> {
    let url = format!("{}/api/issues/search", self.base_url);

    let mut query: Vec<(&str, String)> = vec![("ps", PAGE_SIZE.to_string()), ("p", page.to_string())];
    if !project_key.is_empty() {
      query.push(("projectKeys", project_key.to_string()));
    }
    if !severities.is_empty() {
      let joined = severities.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(",");
      query.push(("severities", joined));
    }

    debug!("GET {} page {}", url, page);

    let response = self
      .client
      .get(&url)
      .query(&query)
      .header(header::USER_AGENT, USER_AGENT)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      warn!("issue search failed: HTTP {} - {}", status, body);
      return Err(SonarError::Status { status, body });
    }

    let body = response.text().await?;
    let results = serde_json::from_str::<SearchResponse>(&body)?;

    info!(
      "page {} holds {} of {} issues",
      page,
      results.issues.len(),
      results.total
    );

    Ok(results)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param, query_param_is_missing};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::SonarClient;
  use crate::error::SonarError;
  use crate::models::Severity;

  #[tokio::test]
  async fn test_search_issues_success() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "total": 2,
        "issues": [
            {
                "project": "demo",
                "component": "demo:src/main.rs",
                "severity": "BLOCKER",
                "message": "Fix this",
                "line": 7
            },
            {
                "project": "demo",
                "component": "demo:src/lib.rs",
                "severity": "CRITICAL",
                "message": "And this"
            }
        ]
    });

    Mock::given(method("GET"))
      .and(path("/api/issues/search"))
      .and(query_param("ps", "500"))
      .and(query_param("p", "1"))
      .and(query_param("projectKeys", "demo"))
      .and(query_param("severities", "CRITICAL,BLOCKER"))
      .respond_with(ResponseTemplate::new(200).set_body_json(&body))
      .mount(&mock_server)
      .await;

    let client = SonarClient::from_base_url(&mock_server.uri());
    let results = client
      .search_issues("demo", &[Severity::Critical, Severity::Blocker], 1)
      .await
      .unwrap();

    assert_eq!(results.total, 2);
    assert_eq!(results.issues.len(), 2);
    assert_eq!(results.issues[0].line, Some(7));
    assert_eq!(results.issues[1].line, None);
  }

  #[tokio::test]
  async fn test_search_issues_omits_empty_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/issues/search"))
      .and(query_param("ps", "500"))
      .and(query_param("p", "3"))
      .and(query_param_is_missing("projectKeys"))
      .and(query_param_is_missing("severities"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "total": 0,
          "issues": []
      })))
      .mount(&mock_server)
      .await;

    let client = SonarClient::from_base_url(&mock_server.uri());
    let results = client.search_issues("", &[], 3).await.unwrap();

    assert_eq!(results.total, 0);
    assert!(results.issues.is_empty());
  }

  #[tokio::test]
  async fn test_search_issues_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/issues/search"))
      .respond_with(ResponseTemplate::new(400).set_body_string("project not found"))
      .mount(&mock_server)
      .await;

    let client = SonarClient::from_base_url(&mock_server.uri());
    let result = client.search_issues("missing", &[Severity::Info], 1).await;

    match result {
      Err(SonarError::Status { status, body }) => {
        assert_eq!(status.as_u16(), 400);
        assert_eq!(body, "project not found");
      }
      other => panic!("expected status error, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn test_search_issues_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/issues/search"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
      .mount(&mock_server)
      .await;

    let client = SonarClient::from_base_url(&mock_server.uri());
    let result = client.search_issues("demo", &[Severity::Info], 1).await;

    assert!(matches!(result, Err(SonarError::Parse(_))));
  }
}
