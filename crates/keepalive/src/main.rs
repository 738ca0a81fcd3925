mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => commands::run::run(cli.verbose),
        Commands::Login => commands::login::run(cli.verbose),
        Commands::Status => commands::status::run(cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
