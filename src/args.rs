//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "opsconsole", about = "Headless admin console client", version)]
pub struct Cli {
    /// Path to the config file (defaults to the per-user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and report where the console would land.
    Login {
        /// Email address to sign in with. The password is read from stdin.
        #[arg(long)]
        email: String,

        /// Remember this session.
        #[arg(long)]
        remember: bool,
    },
}
