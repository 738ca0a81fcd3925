//! Back4App session login check
//!
//! Issues one revocable-session login against the Parse REST API to keep the
//! account alive. The credentials travel as query parameters; the request has
//! no body. Exactly one attempt per invocation, no retries.

use crate::config::ConfigSource;
use crate::endpoints;
use crate::http;
use crate::outcome::{self, CheckError, CheckReport};

/// Environment variable holding the Back4App account email
pub const EMAIL_VAR: &str = "EMAIL";

/// Environment variable holding the Back4App account password
pub const PASSWORD_VAR: &str = "B4_PASSWORD";

/// Label used in outcome reports
pub const LABEL: &str = "Login";

/// Fixed Parse application identifier of the kept-alive app
const APP_ID: &str = "BCrUQVkk80pCdeImSXoKXL5ZCtyyEZwbN7mAb11f";

/// Fixed Parse REST API key of the kept-alive app
const REST_API_KEY: &str = "swrFFIXJlFudtF3HkZPtfybDFRTmS7sPwvGUzQ9w";

/// Message reported when either credential is absent
pub fn missing_credentials_message() -> String {
    format!("{EMAIL_VAR} and {PASSWORD_VAR} environment variables must be set")
}

/// Runs the login check
///
/// Looks up both credentials in `config`; if either is absent, returns
/// [`CheckReport::Misconfigured`] without touching the network. Otherwise
/// issues a single POST and classifies the result.
///
/// # Errors
///
/// Returns error only when the request cannot be issued at all (bad endpoint
/// override, client construction failure). Server rejections and transport
/// failures are outcomes, not errors.
pub fn run(config: &dyn ConfigSource, verbose: bool) -> Result<CheckReport, CheckError> {
    let (Some(username), Some(password)) = (config.get(EMAIL_VAR), config.get(PASSWORD_VAR))
    else {
        return Ok(CheckReport::Misconfigured(missing_credentials_message()));
    };

    let url = endpoints::parse_login_url()?;
    if verbose {
        eprintln!("POST {}", url);
    }

    let client = http::build_default_client()?;
    let result = client
        .post(url)
        .header("X-Parse-Application-Id", APP_ID)
        .header("X-Parse-REST-API-Key", REST_API_KEY)
        .header("X-Parse-Revocable-Session", "1")
        .query(&[
            ("username", username.as_str()),
            ("password", password.as_str()),
        ])
        .send();

    Ok(CheckReport::Completed(outcome::classify(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use crate::testing::MapConfig;
    use keepalive_testkit::with_env_vars;
    use mockito::{Matcher, Server};

    fn valid_config() -> MapConfig {
        MapConfig::new([
            (EMAIL_VAR, "alice@example.com"),
            (PASSWORD_VAR, "hunter2"),
        ])
    }

    #[test]
    fn test_login_issues_single_post_with_headers_and_query() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/login")
            .match_header("x-parse-application-id", APP_ID)
            .match_header("x-parse-rest-api-key", REST_API_KEY)
            .match_header("x-parse-revocable-session", "1")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("username".into(), "alice@example.com".into()),
                Matcher::UrlEncoded("password".into(), "hunter2".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"sessionToken":"abc"}"#)
            .expect(1)
            .create();
        let url = server.url();

        let report = with_env_vars(
            &[(endpoints::PARSE_BASE_URL_VAR, Some(url.as_str()))],
            || run(&valid_config(), false).expect("request should be issued"),
        );

        mock.assert();
        match report {
            CheckReport::Completed(Outcome::Success { body }) => {
                assert!(body.contains(r#"{"sessionToken":"abc"}"#));
            }
            other => panic!("expected success outcome, got: {:?}", other),
        }
    }

    #[test]
    fn test_login_rejection_is_reported_not_raised() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/login")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":"invalid login"}"#)
            .create();
        let url = server.url();

        let report = with_env_vars(
            &[(endpoints::PARSE_BASE_URL_VAR, Some(url.as_str()))],
            || run(&valid_config(), false).expect("request should be issued"),
        );

        mock.assert();
        let CheckReport::Completed(outcome) = report else {
            panic!("expected completed report");
        };
        let message = outcome.report(LABEL);
        assert!(message.contains("401"));
        assert!(message.contains("invalid login"));
    }

    #[test]
    fn test_missing_password_skips_network() {
        let mut server = Server::new();
        let mock = server.mock("POST", "/login").expect(0).create();
        let url = server.url();

        let config = MapConfig::new([(EMAIL_VAR, "alice@example.com")]);
        let report = with_env_vars(
            &[(endpoints::PARSE_BASE_URL_VAR, Some(url.as_str()))],
            || run(&config, false).unwrap(),
        );

        mock.assert();
        assert_eq!(
            report,
            CheckReport::Misconfigured(missing_credentials_message())
        );
    }

    #[test]
    fn test_empty_email_counts_as_absent() {
        let mut server = Server::new();
        let mock = server.mock("POST", "/login").expect(0).create();
        let url = server.url();

        let config = MapConfig::new([(EMAIL_VAR, ""), (PASSWORD_VAR, "hunter2")]);
        let report = with_env_vars(
            &[(endpoints::PARSE_BASE_URL_VAR, Some(url.as_str()))],
            || run(&config, false).unwrap(),
        );

        mock.assert();
        assert!(matches!(report, CheckReport::Misconfigured(_)));
    }

    #[test]
    fn test_connection_failure_is_transport_outcome() {
        let report = with_env_vars(
            &[(endpoints::PARSE_BASE_URL_VAR, Some("http://127.0.0.1:1"))],
            || run(&valid_config(), false).expect("request should be issued"),
        );

        assert!(matches!(
            report,
            CheckReport::Completed(Outcome::TransportFailed { .. })
        ));
    }
}
