//! Status command - Koyeb platform status check only

use anyhow::Result;
use colored::Colorize;
use keepalive_checks::{ProcessEnv, TelegramNotifier, status};

pub fn run(verbose: bool) -> Result<()> {
    let env = ProcessEnv;
    let notifier = TelegramNotifier::from_config(&env);

    println!("{}", "Running platform status check...".bold());
    let report = status::run(&env, verbose)?;
    super::deliver(report, &notifier, status::LABEL)
}
