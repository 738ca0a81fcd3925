//! Koyeb platform status check
//!
//! Lists the account's apps with a bearer token. Same shape as the login
//! check, simpler request: no query parameters, no extra headers, no body.

use crate::config::ConfigSource;
use crate::endpoints;
use crate::http;
use crate::outcome::{self, CheckError, CheckReport};

/// Environment variable holding the Koyeb API token
pub const TOKEN_VAR: &str = "KOYEB_API";

/// Label used in outcome reports
pub const LABEL: &str = "Koyeb request";

/// Message reported when the token is absent
pub fn missing_token_message() -> String {
    format!("{TOKEN_VAR} environment variable must be set")
}

/// Runs the platform status check
///
/// # Errors
///
/// Returns error only when the request cannot be issued at all; server
/// rejections and transport failures are outcomes.
pub fn run(config: &dyn ConfigSource, verbose: bool) -> Result<CheckReport, CheckError> {
    let Some(token) = config.get(TOKEN_VAR) else {
        return Ok(CheckReport::Misconfigured(missing_token_message()));
    };

    let url = endpoints::koyeb_apps_url()?;
    if verbose {
        eprintln!("GET {}", url);
    }

    let client = http::build_default_client()?;
    let result = client.get(url).bearer_auth(&token).send();

    Ok(CheckReport::Completed(outcome::classify(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use crate::testing::MapConfig;
    use keepalive_testkit::with_env_vars;
    use mockito::Server;

    #[test]
    fn test_status_issues_single_get_with_bearer_token() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/v1/apps")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(r#"{"apps":[]}"#)
            .expect(1)
            .create();
        let url = server.url();

        let config = MapConfig::new([(TOKEN_VAR, "test-token")]);
        let report = with_env_vars(
            &[(endpoints::KOYEB_BASE_URL_VAR, Some(url.as_str()))],
            || run(&config, false).expect("request should be issued"),
        );

        mock.assert();
        match report {
            CheckReport::Completed(Outcome::Success { body }) => {
                assert!(body.contains(r#"{"apps":[]}"#));
            }
            other => panic!("expected success outcome, got: {:?}", other),
        }
    }

    #[test]
    fn test_missing_token_skips_network() {
        let mut server = Server::new();
        let mock = server.mock("GET", "/v1/apps").expect(0).create();
        let url = server.url();

        let report = with_env_vars(
            &[(endpoints::KOYEB_BASE_URL_VAR, Some(url.as_str()))],
            || run(&MapConfig::default(), false).unwrap(),
        );

        mock.assert();
        assert_eq!(report, CheckReport::Misconfigured(missing_token_message()));
    }

    #[test]
    fn test_server_rejection_is_reported_not_raised() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/v1/apps")
            .with_status(403)
            .with_body(r#"{"message":"forbidden"}"#)
            .create();
        let url = server.url();

        let config = MapConfig::new([(TOKEN_VAR, "expired-token")]);
        let report = with_env_vars(
            &[(endpoints::KOYEB_BASE_URL_VAR, Some(url.as_str()))],
            || run(&config, false).expect("request should be issued"),
        );

        mock.assert();
        let CheckReport::Completed(outcome) = report else {
            panic!("expected completed report");
        };
        let message = outcome.report(LABEL);
        assert!(message.contains("403"));
        assert!(message.contains("forbidden"));
    }
}
