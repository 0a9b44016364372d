//! # Run Driver
//!
//! The [`Driver`] walks a course configuration's student indices in ascending
//! order, derives each repository name and clone URL, and hands one
//! [`CloneCommand`] per index to a [`CommandRunner`].
//!
//! A failed clone never stops the run. Each result is classified and tallied
//! into a [`CloneSummary`], which is returned once every index has been
//! visited.
//!
//! ## Echoing
//!
//! Before a command runs, its text (`git clone <url>`) may be written to the
//! output stream. Which commands are echoed is controlled by [`EchoPolicy`].
//! The default, [`EchoPolicy::SingleDigit`], echoes only indices below 10,
//! matching the long-standing behavior of the classroom clone script.

use std::io::Write;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::CourseConfig;
use crate::error::Result;
use crate::outcome::{CloneOutcome, CloneSummary};
use crate::roster::TeamEntry;
use crate::runner::{CloneCommand, CommandRunner};

/// Which commands are printed before they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoPolicy {
    /// Print only commands for indices below 10.
    #[default]
    SingleDigit,
    /// Print every command.
    Always,
    /// Print nothing.
    Never,
}

impl EchoPolicy {
    /// Whether the command for `index` should be echoed.
    pub fn should_echo(&self, index: u32) -> bool {
        match self {
            EchoPolicy::SingleDigit => index < 10,
            EchoPolicy::Always => true,
            EchoPolicy::Never => false,
        }
    }
}

/// Coordinates range, naming, and invocation for one run.
pub struct Driver<'a> {
    config: &'a CourseConfig,
    runner: &'a dyn CommandRunner,
    echo: EchoPolicy,
    dry_run: bool,
    workdir: Option<PathBuf>,
}

impl<'a> Driver<'a> {
    pub fn new(config: &'a CourseConfig, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            echo: EchoPolicy::default(),
            dry_run: false,
            workdir: None,
        }
    }

    /// Sets which commands are echoed.
    pub fn echo(mut self, policy: EchoPolicy) -> Self {
        self.echo = policy;
        self
    }

    /// When set, commands are echoed but never run.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Directory the clones are created in. Defaults to the current directory.
    pub fn workdir(mut self, workdir: Option<PathBuf>) -> Self {
        self.workdir = workdir;
        self
    }

    /// Builds the command for one repository.
    pub fn command_for(&self, repo_name: String) -> CloneCommand {
        CloneCommand {
            url: self.config.clone_url(&repo_name),
            repo_name,
            workdir: self.workdir.clone(),
        }
    }

    /// Clones every student repository in the configured index range.
    ///
    /// Returns `Err` only for an invalid range; clone failures are reported
    /// in the summary. An echo line that cannot be written is logged and
    /// the run continues.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<CloneSummary> {
        let mut summary = CloneSummary::default();

        for index in self.config.indices()? {
            let repo_name = self.config.repo_name(index);
            self.process(index, repo_name, out, &mut summary);
        }

        self.finish(summary)
    }

    /// Clones the repositories of the teams in `teams`, in roster order.
    ///
    /// The echo policy sees each team's 1-based position in the roster as
    /// its index.
    pub fn run_roster<W: Write>(&self, teams: &[TeamEntry], out: &mut W) -> Result<CloneSummary> {
        let mut summary = CloneSummary::default();

        for (position, entry) in (1u32..).zip(teams) {
            debug!("team {}: {}", entry.team, entry.members.join(" "));
            self.process(position, entry.team.clone(), out, &mut summary);
        }

        self.finish(summary)
    }

    fn process<W: Write>(
        &self,
        index: u32,
        repo_name: String,
        out: &mut W,
        summary: &mut CloneSummary,
    ) {
        let command = self.command_for(repo_name);

        if self.echo.should_echo(index) {
            if let Err(e) = writeln!(out, "{}", command).and_then(|()| out.flush()) {
                warn!("could not echo {}: {}", command.repo_name, e);
            }
        }

        let outcome = if self.dry_run {
            CloneOutcome::Skipped
        } else {
            debug!("cloning {} ({})", command.repo_name, command.url);
            match self.runner.run(&command) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("{}", e);
                    CloneOutcome::Unknown
                }
            }
        };

        if outcome.is_failure() {
            warn!("{}: {}", command.repo_name, outcome);
        }
        summary.record(&command.repo_name, outcome);
    }

    fn finish(&self, summary: CloneSummary) -> Result<CloneSummary> {
        info!(
            "processed {} repositories: {} cloned, {} failed, {} skipped",
            summary.total(),
            summary.success,
            summary.failures(),
            summary.skipped
        );
        Ok(summary)
    }
}
