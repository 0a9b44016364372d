//! Default values for classroom-clone configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Git host the student repositories live on.
pub const HOST: &str = "github.ncsu.edu";
/// Organization owning the student repositories.
pub const ORGANIZATION: &str = "engr-csc316-fall2017";
/// Course prefix, including its trailing separator.
pub const CLASS_PREFIX: &str = "csc316-";
pub const SECTION: &str = "002";
pub const ASSIGNMENT: &str = "P2";
/// Highest student index to clone.
pub const STUDENT_COUNT: u32 = 80;

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".classroom-clone.yaml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "CLASSROOM_CLONE_CONFIG";

/// Returns the per-user configuration file path.
///
/// Uses the platform-appropriate config directory:
/// - Linux: `~/.config/classroom-clone/config.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/classroom-clone/config.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\classroom-clone\config.yaml`
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("classroom-clone").join("config.yaml"))
}
