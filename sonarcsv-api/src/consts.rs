//! Constants for the sonarcsv-api client.

/// User-Agent header value for the SonarQube API client
pub const USER_AGENT: &str = concat!("sonarcsv/", env!("CARGO_PKG_VERSION"));

/// Issues requested per search call. SonarQube caps `ps` at 500.
pub const PAGE_SIZE: u64 = 500;
