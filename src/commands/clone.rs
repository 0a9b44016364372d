//! Clone command implementation
//!
//! Resolves the course configuration, then runs the driver with the system
//! `git` runner. Each clone blocks until git exits; failures are collected
//! and reported in a summary once every repository has been attempted.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use classroom_clone::driver::{Driver, EchoPolicy};
use classroom_clone::output::{format_summary, OutputConfig};
use classroom_clone::roster;
use classroom_clone::runner::{CommandRunner, SystemRunner};

use super::CourseArgs;

/// When to print a command before running it
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EchoMode {
    /// Only for student indices below 10
    SingleDigit,
    /// For every repository
    Always,
    /// Never
    Never,
}

impl From<EchoMode> for EchoPolicy {
    fn from(mode: EchoMode) -> Self {
        match mode {
            EchoMode::SingleDigit => EchoPolicy::SingleDigit,
            EchoMode::Always => EchoPolicy::Always,
            EchoMode::Never => EchoPolicy::Never,
        }
    }
}

/// Arguments for the clone command
#[derive(Args, Debug)]
pub struct CloneArgs {
    #[command(flatten)]
    pub course: CourseArgs,

    /// Clone the team repositories listed in a roster file instead of the
    /// numbered student repositories
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Directory to clone into (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Which commands to print before running them
    #[arg(long, value_enum, value_name = "WHEN", default_value = "single-digit")]
    pub echo: EchoMode,

    /// Show what would be cloned without running git
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress the end-of-run summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with an error if any clone failed
    #[arg(long)]
    pub fail_on_error: bool,
}

/// Execute the clone command
pub fn execute(args: CloneArgs, output: &OutputConfig) -> Result<()> {
    run(args, output, &SystemRunner)
}

fn run(args: CloneArgs, output: &OutputConfig, runner: &dyn CommandRunner) -> Result<()> {
    let config = args.course.resolve()?;

    if let Some(dest) = &args.dest {
        if !args.dry_run {
            std::fs::create_dir_all(dest)?;
        }
    }

    let driver = Driver::new(&config, runner)
        .echo(args.echo.into())
        .dry_run(args.dry_run)
        .workdir(args.dest.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match &args.roster {
        Some(path) => {
            let teams = roster::load(path)?;
            driver.run_roster(&teams, &mut out)?
        }
        None => driver.run(&mut out)?,
    };

    if !args.quiet {
        writeln!(out, "{}", format_summary(output, &summary))?;
    }

    if args.fail_on_error && summary.has_failures() {
        anyhow::bail!(
            "{} of {} clones failed",
            summary.failures(),
            summary.total()
        );
    }

    Ok(())
}
