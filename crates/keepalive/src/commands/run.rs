//! Run command - both checks in order, login first

use anyhow::Result;
use colored::Colorize;
use keepalive_checks::{ProcessEnv, TelegramNotifier, login, status};

/// Runs the login check, waits for its report to be dispatched, then runs
/// the platform status check. A misconfigured check stops the sequence.
pub fn run(verbose: bool) -> Result<()> {
    let env = ProcessEnv;
    let notifier = TelegramNotifier::from_config(&env);

    println!("{}", "Running login check...".bold());
    let report = login::run(&env, verbose)?;
    super::deliver(report, &notifier, login::LABEL)?;

    println!();
    println!("{}", "Running platform status check...".bold());
    let report = status::run(&env, verbose)?;
    super::deliver(report, &notifier, status::LABEL)?;

    Ok(())
}
