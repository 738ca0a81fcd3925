//! Classification of HTTP call results into reportable outcomes

use crate::endpoints::EndpointError;
use reqwest::blocking::Response;
use thiserror::Error;

/// Terminal result of one issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Server answered with a success status
    Success {
        /// Serialized response payload
        body: String,
    },

    /// Server answered, but rejected the request
    Rejected {
        /// Numeric HTTP status code
        status: u16,
        /// Serialized error payload
        body: String,
    },

    /// No response received (connect failure, DNS, timeout, aborted body)
    TransportFailed {
        /// Description of the underlying transport error
        reason: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Formats the human-readable report sent to the notifier and the console
    ///
    /// The success variant embeds the response payload verbatim; the rejected
    /// variant embeds the status code and the error payload; the transport
    /// variant embeds the raw error description.
    pub fn report(&self, label: &str) -> String {
        match self {
            Outcome::Success { body } => format!("{label} succeeded!\nResponse: {body}"),
            Outcome::Rejected { status, body } => {
                format!("{label} failed!\nStatus: {status}\nError: {body}")
            }
            Outcome::TransportFailed { reason } => {
                format!("{label} failed!\nRequest error: {reason}")
            }
        }
    }
}

/// Result of one check invocation
///
/// Checks never terminate the process themselves; a missing secret surfaces
/// here and the caller decides whether it is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckReport {
    /// A required secret is absent; no request was attempted
    Misconfigured(String),

    /// The request was issued and resolved to an outcome
    Completed(Outcome),
}

/// Errors that prevent a check from issuing its request
#[derive(Debug, Error)]
pub enum CheckError {
    /// Endpoint URL construction error
    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Classifies the result of a sent request into an [`Outcome`]
///
/// Shared by both checks so the failure formatting cannot drift between them.
/// A body that fails to read mid-stream degrades to `TransportFailed`.
pub fn classify(result: Result<Response, reqwest::Error>) -> Outcome {
    match result {
        Ok(response) => {
            let status = response.status();
            match response.text() {
                Ok(body) if status.is_success() => Outcome::Success { body },
                Ok(body) => Outcome::Rejected {
                    status: status.as_u16(),
                    body,
                },
                Err(err) => Outcome::TransportFailed {
                    reason: err.to_string(),
                },
            }
        }
        Err(err) => Outcome::TransportFailed {
            reason: err.to_string(),
        },
    }
}
