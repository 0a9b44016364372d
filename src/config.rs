//! # Course Configuration
//!
//! This module defines [`CourseConfig`], the immutable set of settings a run is
//! built from: where the repositories live, how they are named, and which
//! student indices to walk over.
//!
//! ## File Format
//!
//! A configuration is a flat YAML mapping. Every field is optional and falls
//! back to the built-in defaults from [`crate::defaults`]:
//!
//! ```yaml
//! host: github.ncsu.edu
//! organization: engr-csc316-fall2017
//! class_prefix: "csc316-"
//! section: "002"
//! assignment: P2
//! student_count: 80
//! start: 1
//! step: 1
//! ```
//!
//! Quoting numeric-looking values such as `"002"` keeps them readable as
//! strings for other YAML tooling.
//!
//! ## Validation
//!
//! Parsing only checks the shape of the file. [`CourseConfig::validate`] checks
//! that every naming component is safe to embed in a repository name and an SSH
//! URL, and that the range step is usable. Command-line overrides are applied
//! between the two, so validation always sees the final values.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};
use crate::naming;
use crate::range::StepRange;

/// Settings for one cloning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourseConfig {
    /// Git host serving the organization over SSH.
    pub host: String,
    /// Organization that owns the student repositories.
    pub organization: String,
    /// Course prefix, including any trailing separator (e.g. `csc316-`).
    pub class_prefix: String,
    /// Section identifier (e.g. `002`).
    pub section: String,
    /// Assignment identifier (e.g. `P2`).
    pub assignment: String,
    /// Inclusive upper bound of the student index range.
    pub student_count: u32,
    /// First student index.
    pub start: u32,
    /// Distance between consecutive student indices.
    pub step: u32,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            organization: defaults::ORGANIZATION.to_string(),
            class_prefix: defaults::CLASS_PREFIX.to_string(),
            section: defaults::SECTION.to_string(),
            assignment: defaults::ASSIGNMENT.to_string(),
            student_count: defaults::STUDENT_COUNT,
            start: 1,
            step: 1,
        }
    }
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._-]+$").expect("identifier pattern is a valid regex")
    })
}

fn host_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9.-]*[A-Za-z0-9])?$").expect("host pattern is a valid regex")
    })
}

impl CourseConfig {
    /// Checks that the configuration can produce well-formed names and URLs.
    pub fn validate(&self) -> Result<()> {
        if !host_pattern().is_match(&self.host) {
            return Err(invalid("host", &self.host, "must be a hostname"));
        }

        let required = [
            ("organization", &self.organization),
            ("section", &self.section),
            ("assignment", &self.assignment),
        ];
        for (field, value) in required {
            if !identifier_pattern().is_match(value) {
                return Err(invalid(
                    field,
                    value,
                    "must be non-empty and contain only letters, digits, '.', '_' or '-'",
                ));
            }
        }

        // The prefix may legitimately be empty.
        if !self.class_prefix.is_empty() && !identifier_pattern().is_match(&self.class_prefix) {
            return Err(invalid(
                "class_prefix",
                &self.class_prefix,
                "may contain only letters, digits, '.', '_' or '-'",
            ));
        }

        if self.step == 0 {
            return Err(Error::InvalidStep { step: self.step });
        }

        Ok(())
    }

    /// The student indices this configuration covers.
    pub fn indices(&self) -> Result<StepRange> {
        if self.start == 1 && self.step == 1 {
            return Ok(StepRange::up_to(self.student_count));
        }
        StepRange::new(self.start, self.student_count, self.step)
    }

    /// The repository name for student `index`.
    pub fn repo_name(&self, index: u32) -> String {
        naming::repo_name(&self.class_prefix, &self.section, &self.assignment, index)
    }

    /// The SSH clone URL for repository `repo_name` in this organization.
    pub fn clone_url(&self, repo_name: &str) -> String {
        naming::clone_url(&self.host, &self.organization, repo_name)
    }

    /// Serializes the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn invalid(field: &str, value: &str, reason: &str) -> Error {
    Error::ConfigValidation {
        field: field.to_string(),
        message: format!("{:?} {}", value, reason),
    }
}

/// Parses a YAML string into a `CourseConfig`.
///
/// An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<CourseConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(CourseConfig::default());
    }

    serde_yaml::from_str::<CourseConfig>(yaml_content).map_err(|e| {
        let message = e.to_string();
        let hint = if message.contains("expected struct CourseConfig") {
            Some("The file must be a mapping of course settings, e.g. assignment: P2".to_string())
        } else if message.contains("unknown field") {
            Some(
                "Valid fields are host, organization, class_prefix, section, \
                 assignment, student_count, start and step"
                    .to_string(),
            )
        } else {
            None
        };
        Error::ConfigParse { message, hint }
    })
}

/// Reads and parses a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CourseConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
