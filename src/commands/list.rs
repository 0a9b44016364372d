//! List command implementation
//!
//! Prints, one per line, the repositories a configuration produces without
//! cloning anything. Useful to check a configuration before a long run.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::CourseArgs;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub course: CourseArgs,

    /// Print the full clone command instead of the repository name
    #[arg(long)]
    pub urls: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(&args, &mut out)
}

fn write_list<W: Write>(args: &ListArgs, out: &mut W) -> Result<()> {
    let config = args.course.resolve()?;

    for index in config.indices()? {
        let name = config.repo_name(index);
        if args.urls {
            writeln!(out, "git clone {}", config.clone_url(&name))?;
        } else {
            writeln!(out, "{}", name)?;
        }
    }

    Ok(())
}
