//! # SonarQube API Endpoints
//!
//! Organized endpoint implementations for the SonarQube resources sonarcsv
//! consumes, currently the paginated issue search.

pub mod issues;
