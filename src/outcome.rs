//! # Clone Outcomes
//!
//! `git clone` reports failure only through its exit status and whatever it
//! writes to stderr. This module turns that pair into a [`CloneOutcome`] and
//! tallies outcomes across a run in a [`CloneSummary`].

use std::fmt;

/// The classified result of one clone invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloneOutcome {
    /// `git` exited successfully.
    Success,
    /// The destination directory already exists and is not empty.
    AlreadyExists,
    /// The remote could not be reached.
    NetworkFailure,
    /// The remote refused the credentials, or the repository is not visible
    /// to them.
    AuthFailure,
    /// Any other failure, including a `git` that could not be started.
    Unknown,
    /// The invocation was not performed (dry run).
    Skipped,
}

impl CloneOutcome {
    /// Classifies a finished `git clone` from its exit status and stderr.
    pub fn classify(success: bool, stderr: &str) -> Self {
        if success {
            return CloneOutcome::Success;
        }

        let stderr = stderr.to_lowercase();
        if stderr.contains("already exists and is not an empty directory") {
            CloneOutcome::AlreadyExists
        } else if stderr.contains("authentication failed")
            || stderr.contains("permission denied")
            || stderr.contains("could not read from remote repository")
            || stderr.contains("repository not found")
        {
            CloneOutcome::AuthFailure
        } else if stderr.contains("could not resolve hostname")
            || stderr.contains("could not resolve host")
            || stderr.contains("connection timed out")
            || stderr.contains("connection refused")
            || stderr.contains("network is unreachable")
            || stderr.contains("connection closed by remote host")
        {
            CloneOutcome::NetworkFailure
        } else {
            CloneOutcome::Unknown
        }
    }

    /// Returns `true` for outcomes that count as a failed clone.
    pub fn is_failure(&self) -> bool {
        !matches!(self, CloneOutcome::Success | CloneOutcome::Skipped)
    }
}

impl fmt::Display for CloneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CloneOutcome::Success => "cloned",
            CloneOutcome::AlreadyExists => "already exists",
            CloneOutcome::NetworkFailure => "network failure",
            CloneOutcome::AuthFailure => "authentication failure",
            CloneOutcome::Unknown => "failed",
            CloneOutcome::Skipped => "skipped",
        };
        f.write_str(label)
    }
}

/// Per-outcome counts for a whole run, plus the names that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneSummary {
    pub success: usize,
    pub already_exists: usize,
    pub network_failure: usize,
    pub auth_failure: usize,
    pub unknown: usize,
    pub skipped: usize,
    /// Repository names whose clone failed, in invocation order.
    pub failed: Vec<(String, CloneOutcome)>,
}

impl CloneSummary {
    /// Records the outcome for one repository.
    pub fn record(&mut self, repo_name: &str, outcome: CloneOutcome) {
        match outcome {
            CloneOutcome::Success => self.success += 1,
            CloneOutcome::AlreadyExists => self.already_exists += 1,
            CloneOutcome::NetworkFailure => self.network_failure += 1,
            CloneOutcome::AuthFailure => self.auth_failure += 1,
            CloneOutcome::Unknown => self.unknown += 1,
            CloneOutcome::Skipped => self.skipped += 1,
        }
        if outcome.is_failure() {
            self.failed.push((repo_name.to_string(), outcome));
        }
    }

    /// Total number of repositories processed.
    pub fn total(&self) -> usize {
        self.success
            + self.already_exists
            + self.network_failure
            + self.auth_failure
            + self.unknown
            + self.skipped
    }

    /// Number of failed clones.
    pub fn failures(&self) -> usize {
        self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
