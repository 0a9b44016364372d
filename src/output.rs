//! # Output Configuration
//!
//! Controls how end-of-run reports look: whether they use color and emoji,
//! and how a [`CloneSummary`] is rendered for a human.
//!
//! The following environment variables and flags are respected:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::fmt::Write;

use console::style;

use crate::outcome::CloneSummary;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: "always", "never", or "auto".
    /// In auto mode colors are disabled by `NO_COLOR` (any value), `CLICOLOR=0`,
    /// `TERM=dumb`, or a non-TTY stdout unless `CLICOLOR_FORCE=1`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns `emoji_str` when colors are enabled, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Renders the end-of-run report.
///
/// The first line carries the totals; each failed repository follows on its
/// own indented line.
pub fn format_summary(config: &OutputConfig, summary: &CloneSummary) -> String {
    let mut report = String::new();

    let marker = if summary.has_failures() {
        emoji(config, "⚠️ ", "[WARN]")
    } else {
        emoji(config, "✅", "[OK]")
    };

    let failed = summary.failures().to_string();
    let failed = if config.use_color && summary.has_failures() {
        style(failed).red().bold().to_string()
    } else {
        failed
    };

    let _ = write!(
        report,
        "{} {} repositories: {} cloned, {} failed",
        marker,
        summary.total(),
        summary.success,
        failed
    );
    if summary.skipped > 0 {
        let _ = write!(report, ", {} skipped", summary.skipped);
    }

    if summary.has_failures() {
        let _ = write!(
            report,
            " ({} already exist, {} network, {} auth, {} other)",
            summary.already_exists, summary.network_failure, summary.auth_failure, summary.unknown
        );
        for (name, outcome) in &summary.failed {
            let _ = write!(report, "\n   {}: {}", name, outcome);
        }
    }

    report
}
