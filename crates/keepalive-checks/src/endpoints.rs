//! Endpoint URL construction for the services the checks talk to

use thiserror::Error;
use url::Url;

/// Production Back4App Parse API base
const PARSE_API_BASE: &str = "https://parseapi.back4app.com";

/// Production Koyeb API base
const KOYEB_API_BASE: &str = "https://app.koyeb.com";

/// Production Telegram Bot API base
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Override for the Parse base URL (used by tests to point at a mock server)
pub const PARSE_BASE_URL_VAR: &str = "PARSE_BASE_URL";

/// Override for the Koyeb base URL
pub const KOYEB_BASE_URL_VAR: &str = "KOYEB_BASE_URL";

/// Override for the Telegram base URL
pub const TELEGRAM_BASE_URL_VAR: &str = "TELEGRAM_BASE_URL";

/// Builds the Back4App login URL
///
/// # Errors
///
/// Returns error if the base URL (or its override) does not parse
pub fn parse_login_url() -> Result<Url, EndpointError> {
    let mut url = base_url(PARSE_BASE_URL_VAR, PARSE_API_BASE)?;
    set_path_segments(&mut url, &["login"])?;
    Ok(url)
}

/// Builds the Koyeb app-listing URL
pub fn koyeb_apps_url() -> Result<Url, EndpointError> {
    let mut url = base_url(KOYEB_BASE_URL_VAR, KOYEB_API_BASE)?;
    set_path_segments(&mut url, &["v1", "apps"])?;
    Ok(url)
}

/// Builds the Telegram sendMessage URL for `bot_token`
pub fn telegram_send_url(bot_token: &str) -> Result<Url, EndpointError> {
    let mut url = base_url(TELEGRAM_BASE_URL_VAR, TELEGRAM_API_BASE)?;
    set_path_segments(&mut url, &[&format!("bot{bot_token}"), "sendMessage"])?;
    Ok(url)
}

fn base_url(override_var: &str, production: &str) -> Result<Url, EndpointError> {
    match std::env::var(override_var) {
        Ok(value) if !value.is_empty() => Ok(Url::parse(&value)?),
        _ => Ok(Url::parse(production)?),
    }
}

/// Replaces the URL path with the given segments
///
/// Overrides may carry a stray path; the checks always address a fixed
/// endpoint, so whatever was there gets discarded.
fn set_path_segments(url: &mut Url, segments: &[&str]) -> Result<(), EndpointError> {
    // path_segments_mut takes the url mutably, so grab a copy for the error
    let unmodified = url.clone();
    url.path_segments_mut()
        .map_err(|_| EndpointError::NotABase { url: unmodified })?
        .clear()
        .extend(segments);
    Ok(())
}

/// URL construction errors
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The configured base (for example `mailto:`) cannot take a path
    #[error("{url} cannot serve as an endpoint base")]
    NotABase {
        /// The offending URL
        url: Url,
    },

    /// The base URL or its override does not parse
    #[error("invalid endpoint URL: {0}")]
    ParseError(#[from] url::ParseError),
}
