pub mod login;
pub mod run;
pub mod status;

use crate::output;
use anyhow::{Result, bail};
use keepalive_checks::{CheckReport, Notifier, NotifyError};

/// Echoes a check report to the console and dispatches it to the notifier
///
/// The notifier dispatch is completed before this returns, so a caller that
/// runs several checks in sequence never starts the next one with a report
/// still in flight. A misconfigured check comes back as an error: the message
/// has already gone out, but the caller must stop with a non-zero status.
pub(crate) fn deliver(report: CheckReport, notifier: &dyn Notifier, label: &str) -> Result<()> {
    match report {
        CheckReport::Misconfigured(message) => {
            output::print_failure(&message)?;
            dispatch(notifier, &message)?;
            bail!("{label} check is not configured")
        }
        CheckReport::Completed(outcome) => {
            let message = outcome.report(label);
            if outcome.is_success() {
                output::print_success(&message)?;
            } else {
                output::print_failure(&message)?;
            }
            dispatch(notifier, &message)
        }
    }
}

/// Sends one message, treating absent Telegram configuration as a warning
///
/// Only the check secrets are required for a run; without TG_BOT_TOKEN and
/// TG_USER_ID the report still lands on the console and the run goes on.
/// Any other delivery failure propagates.
fn dispatch(notifier: &dyn Notifier, message: &str) -> Result<()> {
    match notifier.send(message) {
        Err(NotifyError::Misconfigured) => {
            output::print_failure(&NotifyError::Misconfigured.to_string())?;
            Ok(())
        }
        result => Ok(result?),
    }
}
