//! # CLI Command Implementations
//!
//! Each subcommand of `classroom-clone` lives in its own file, with an `Args`
//! struct derived using `clap` and an `execute` function that calls into the
//! `classroom_clone` library.
//!
//! The commands that work on a course (`clone`, `list`) share [`CourseArgs`],
//! which locates the configuration file and applies command-line overrides on
//! top of it.

pub mod clone;
pub mod completions;
pub mod init;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use log::debug;

use classroom_clone::config::{self, CourseConfig};
use classroom_clone::defaults;

/// Configuration file selection and per-field overrides.
#[derive(Args, Debug, Default)]
pub struct CourseArgs {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "CLASSROOM_CLONE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Git host serving the organization
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Organization owning the student repositories
    #[arg(long, value_name = "ORG")]
    pub org: Option<String>,

    /// Course prefix, including its trailing separator (e.g. csc316-)
    #[arg(long, value_name = "PREFIX", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Section identifier (e.g. 002)
    #[arg(long, value_name = "SECTION")]
    pub section: Option<String>,

    /// Assignment identifier (e.g. P2)
    #[arg(long, value_name = "ASSIGNMENT")]
    pub assignment: Option<String>,

    /// Highest student index to clone
    #[arg(long, value_name = "N")]
    pub count: Option<u32>,

    /// First student index
    #[arg(long, value_name = "N")]
    pub start: Option<u32>,

    /// Distance between consecutive student indices
    #[arg(long, value_name = "N")]
    pub step: Option<u32>,
}

impl CourseArgs {
    /// Loads the configuration, applies overrides, and validates the result.
    pub fn resolve(&self) -> Result<CourseConfig> {
        let mut config = match self.config_path()? {
            Some(path) => {
                debug!("loading configuration from {}", path.display());
                config::from_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?
            }
            None => {
                debug!("no configuration file found, using built-in defaults");
                CourseConfig::default()
            }
        };

        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn config_path(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.config {
            if !path.exists() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            return Ok(Some(path.clone()));
        }

        let local = Path::new(defaults::CONFIG_FILE_NAME);
        if local.exists() {
            return Ok(Some(local.to_path_buf()));
        }

        Ok(defaults::user_config_path().filter(|path| path.exists()))
    }

    fn apply_overrides(&self, config: &mut CourseConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(org) = &self.org {
            config.organization = org.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.class_prefix = prefix.clone();
        }
        if let Some(section) = &self.section {
            config.section = section.clone();
        }
        if let Some(assignment) = &self.assignment {
            config.assignment = assignment.clone();
        }
        if let Some(count) = self.count {
            config.student_count = count;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let args = CourseArgs {
            config: Some(PathBuf::from("/nonexistent/config.yaml")),
            ..CourseArgs::default()
        };

        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("course.yaml");
        fs::write(&path, "assignment: P1\nstudent_count: 40\n").unwrap();

        let args = CourseArgs {
            config: Some(path),
            assignment: Some("P3".to_string()),
            section: Some("601".to_string()),
            ..CourseArgs::default()
        };

        let config = args.resolve().unwrap();
        assert_eq!(config.assignment, "P3");
        assert_eq!(config.section, "601");
        assert_eq!(config.student_count, 40);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("course.yaml");
        fs::write(&path, "").unwrap();

        let args = CourseArgs {
            config: Some(path),
            step: Some(0),
            ..CourseArgs::default()
        };

        assert!(args.resolve().is_err());
    }
}
