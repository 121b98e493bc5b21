//! Constants for the sonarcsv CLI
//!
//! This module defines default values shared between the command-line
//! arguments and the form front-end.

/// Host used when the form or CLI leaves the SonarQube host blank
pub const DEFAULT_SONARQUBE_HOST: &str = "localhost";

/// Port used when the form or CLI leaves the SonarQube port blank
pub const DEFAULT_SONARQUBE_PORT: &str = "9000";

/// Address the form server binds to unless told otherwise
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
