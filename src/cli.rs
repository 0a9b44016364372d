//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Classroom Clone - Clone every student repository of an assignment
#[derive(Parser, Debug)]
#[command(name = "classroom-clone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone the repositories of every student in the configured range
    Clone(commands::clone::CloneArgs),

    /// Print the repository names a configuration produces
    List(commands::list::ListArgs),

    /// Write a configuration file with the built-in defaults
    Init(commands::init::InitArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // RUST_LOG, when set, takes precedence over --log-level
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .format_timestamp(None)
        .format_target(false)
        .try_init();

        let output = classroom_clone::output::OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Clone(args) => commands::clone::execute(args, &output),
            Commands::List(args) => commands::list::execute(args),
            Commands::Init(args) => commands::init::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
