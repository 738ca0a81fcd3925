//! Login command - Back4App login check only

use anyhow::Result;
use colored::Colorize;
use keepalive_checks::{ProcessEnv, TelegramNotifier, login};

pub fn run(verbose: bool) -> Result<()> {
    let env = ProcessEnv;
    let notifier = TelegramNotifier::from_config(&env);

    println!("{}", "Running login check...".bold());
    let report = login::run(&env, verbose)?;
    super::deliver(report, &notifier, login::LABEL)
}
