//! # Form Front-End
//!
//! A small HTTP server presenting the export parameters as an HTML form
//! and answering submissions with the generated CSV as a download. The
//! handlers hold no state: every submission builds its own configuration
//! and client, and a fresh `GET /` always renders the defaults.

pub mod form;
mod html;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use sonarcsv_api::SonarClient;
use tracing::{error, info};

use crate::export::run_export;
use form::FormSubmission;

/// Build the form server router.
pub fn router() -> Router {
  Router::new().route("/", get(form_page).post(submit))
}

async fn form_page() -> Html<String> {
  Html(html::render_form(&FormSubmission::default(), &[]))
}

async fn submit(body: String) -> Response {
  let submission = FormSubmission::parse(&body);
  let config = submission.to_config();

  let errors = config.validate();
  if !errors.is_empty() {
    return Html(html::render_form(&submission, &errors)).into_response();
  }

  let client = SonarClient::new(&config.host, &config.port);

  let mut buffer = Vec::new();
  match run_export(&client, &config, &mut buffer).await {
    Ok(rows) => {
      info!("report for {} generated ({} rows)", config.project_key, rows);
      let disposition = format!("attachment; filename=\"{}\"", config.default_filename());
      (
        StatusCode::OK,
        [
          (header::CONTENT_TYPE, "text/csv".to_string()),
          (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
      )
        .into_response()
    }
    Err(e) => {
      error!("export for {} failed: {:#}", config.project_key, e);
      let errors = vec![format!("Failed to generate the report: {e:#}")];
      Html(html::render_form(&submission, &errors)).into_response()
    }
  }
}
