//! Shared test utilities for CLI end-to-end tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;`.

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Three students, default naming.
    pub const THREE_STUDENTS: &str = r#"
host: github.ncsu.edu
organization: engr-csc316-fall2017
class_prefix: "csc316-"
section: "002"
assignment: P2
student_count: 3
"#;

    /// Eleven students, crossing the single-digit boundary.
    pub const ELEVEN_STUDENTS: &str = r#"
organization: engr-csc316-fall2017
student_count: 11
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "student_count: [unclosed";

    /// Parses, but fails validation.
    pub const ZERO_STEP: &str = "step: 0\n";
}

/// A temporary directory with an optional `.classroom-clone.yaml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.classroom-clone.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".classroom-clone.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".classroom-clone.yaml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A command for the binary running inside the fixture directory, with
    /// any ambient configuration cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("classroom-clone");
        cmd.current_dir(self.path())
            .env_remove(classroom_clone::defaults::CONFIG_ENV)
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
