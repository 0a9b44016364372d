//! # Init Command Implementation
//!
//! Writes a `.classroom-clone.yaml` filled with the built-in defaults, ready to
//! be edited for a new semester. An existing file is left alone unless
//! `--force` is given.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use classroom_clone::config::CourseConfig;
use classroom_clone::defaults;
use classroom_clone::output::{emoji, OutputConfig};

const HEADER: &str = "\
# classroom-clone configuration
# Update the organization, section, and assignment for each semester.
";

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(short, long, value_name = "PATH", default_value = defaults::CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, output: &OutputConfig) -> Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let yaml = CourseConfig::default().to_yaml()?;
    fs::write(&args.output, format!("{HEADER}{yaml}"))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "{} Created {}",
        emoji(output, "✅", "[OK]"),
        args.output.display()
    );
    Ok(())
}
