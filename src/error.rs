//! # Error Handling
//!
//! This module defines the centralized error type for the `classroom-clone`
//! library. It uses `thiserror` to derive descriptive messages for every
//! failure the library can report.
//!
//! Note that a failed `git clone` is *not* an error at this level: the driver
//! records it as a [`CloneOutcome`](crate::outcome::CloneOutcome) and moves on
//! to the next repository. Errors are reserved for problems that prevent a run
//! from starting (bad configuration, unreadable roster) or that stop a single
//! invocation from being spawned at all.

use thiserror::Error;

/// Main error type for classroom-clone operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be parsed.
    ///
    /// Optionally carries a hint about how to fix the file.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A configuration field holds a value that cannot be used to build
    /// repository names or clone URLs.
    #[error("Invalid configuration value for `{field}`: {message}")]
    ConfigValidation { field: String, message: String },

    /// A range was requested with a step that would never advance.
    #[error("Invalid range step: {step} (step must be greater than zero)")]
    InvalidStep { step: u32 },

    /// A roster file line could not be understood.
    #[error("Roster error at line {line}: {message}")]
    Roster { line: usize, message: String },

    /// The `git` executable could not be started.
    #[error("Failed to spawn git for {url}: {message}")]
    GitSpawn { url: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
