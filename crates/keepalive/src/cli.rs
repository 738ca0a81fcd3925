//! CLI command structure using clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keepalive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the login check, then the platform status check
    Run,

    /// Run only the Back4App login check
    Login,

    /// Run only the Koyeb platform status check
    Status,
}
