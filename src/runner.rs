//! # Clone Invocation
//!
//! This module separates *what* gets cloned from *how* the clone is carried
//! out. A [`CloneCommand`] describes one invocation; a [`CommandRunner`]
//! performs it and reports a [`CloneOutcome`].
//!
//! In the application, [`SystemRunner`] spawns the real `git` executable. In
//! tests, [`RecordingRunner`] stands in for it, recording every command it is
//! given and replaying scripted outcomes, so the driver can be exercised
//! without touching the network or the filesystem.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::outcome::CloneOutcome;

/// A single `git clone` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneCommand {
    /// The repository name, which is also the directory git creates.
    pub repo_name: String,
    /// The SSH clone URL.
    pub url: String,
    /// Directory to run the clone in; `None` means the current directory.
    pub workdir: Option<PathBuf>,
}

impl fmt::Display for CloneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git clone {}", self.url)
    }
}

/// Trait for running clone commands - allows mocking in tests
pub trait CommandRunner: Send + Sync {
    /// Runs one clone to completion and classifies how it went.
    ///
    /// Returns `Err` only when the command could not be started.
    fn run(&self, command: &CloneCommand) -> Result<CloneOutcome>;
}

/// The default implementation of `CommandRunner`, which uses the system's
/// `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CloneCommand) -> Result<CloneOutcome> {
        crate::git::clone(&command.url, command.workdir.as_deref())
    }
}

/// A `CommandRunner` that records invocations instead of spawning processes.
///
/// Every command is answered with [`CloneOutcome::Success`] unless an
/// outcome (or a spawn failure) has been scripted for its repository name.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<CloneCommand>>,
    scripted: HashMap<String, Option<CloneOutcome>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers clones of `repo_name` with `outcome`.
    pub fn with_outcome(mut self, repo_name: &str, outcome: CloneOutcome) -> Self {
        self.scripted.insert(repo_name.to_string(), Some(outcome));
        self
    }

    /// Makes clones of `repo_name` fail to spawn.
    pub fn with_spawn_failure(mut self, repo_name: &str) -> Self {
        self.scripted.insert(repo_name.to_string(), None);
        self
    }

    /// Returns the commands received so far, in order.
    pub fn calls(&self) -> Vec<CloneCommand> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CloneCommand) -> Result<CloneOutcome> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(command.clone()),
            Err(poisoned) => poisoned.into_inner().push(command.clone()),
        }

        match self.scripted.get(&command.repo_name) {
            None => Ok(CloneOutcome::Success),
            Some(Some(outcome)) => Ok(*outcome),
            Some(None) => Err(Error::GitSpawn {
                url: command.url.clone(),
                message: "simulated spawn failure".to_string(),
            }),
        }
    }
}
