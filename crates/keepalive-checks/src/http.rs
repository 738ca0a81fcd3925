//! Shared HTTP client setup

use reqwest::blocking::Client;
use std::time::Duration;

/// Cap on every check request (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Tighter cap for notification delivery (10 seconds)
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifies this tool to the remote services
pub const USER_AGENT: &str = "keepalive";

/// Client capped at the given request timeout
///
/// # Errors
///
/// Returns error if the underlying TLS backend fails to initialize
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Client capped at [`DEFAULT_TIMEOUT`]
pub fn build_default_client() -> Result<Client, reqwest::Error> {
    build_client(DEFAULT_TIMEOUT)
}
