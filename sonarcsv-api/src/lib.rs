//! # SonarQube API Client
//!
//! Provides SonarQube REST API integration for the issue search endpoint,
//! supporting paginated retrieval of static-analysis issues for sonarcsv
//! exports.

mod client;
mod endpoints;
pub mod consts;
pub mod error;
pub mod models;

// Re-export the client
pub use client::SonarClient;
// Re-export the error type
pub use error::SonarError;
// Re-export models
pub use models::{Issue, SearchResponse, Severity};
