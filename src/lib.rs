//! # Classroom Clone Library
//!
//! This library clones every student repository of a classroom assignment.
//! Student repositories follow a fixed naming scheme, so the whole set can be
//! derived from a handful of course settings and a range of student indices.
//! It is designed to be used by the `classroom-clone` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use classroom_clone::config::CourseConfig;
//! use classroom_clone::driver::{Driver, EchoPolicy};
//! use classroom_clone::runner::RecordingRunner;
//!
//! let config = CourseConfig {
//!     student_count: 3,
//!     ..CourseConfig::default()
//! };
//!
//! // A recording runner stands in for git
//! let runner = RecordingRunner::new();
//! let mut out = Vec::new();
//! let summary = Driver::new(&config, &runner)
//!     .echo(EchoPolicy::Always)
//!     .run(&mut out)
//!     .unwrap();
//!
//! assert_eq!(summary.success, 3);
//! assert_eq!(runner.calls()[0].repo_name, "csc316-002-P2-01");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The course settings a run is built from,
//!   loaded from `.classroom-clone.yaml` and overridable from the command line.
//! - **Ranges (`range`)**: The lazily produced student indices.
//! - **Naming (`naming`)**: How an index becomes a repository name and URL.
//! - **Invocation (`runner`, `git`)**: Running `git clone` behind a trait so it
//!   can be replaced in tests.
//! - **Outcomes (`outcome`)**: Classifying each clone and summarizing a run.
//! - **Driver (`driver`)**: The loop tying the above together.
//! - **Rosters (`roster`)**: Team lists for projects whose repositories are
//!   named after teams instead of indices.

pub mod config;
pub mod defaults;
pub mod driver;
pub mod error;
pub mod git;
pub mod naming;
pub mod outcome;
pub mod output;
pub mod range;
pub mod roster;
pub mod runner;

#[cfg(test)]
mod naming_proptest;
