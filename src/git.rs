use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::Error;
use crate::outcome::CloneOutcome;

/// Clone a repository into the current (or given) directory
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Any authentication configured in ~/.gitconfig
///
/// Blocks until git exits. A non-zero exit is not an error here: it is
/// classified from stderr and returned as a [`CloneOutcome`]. Only a git that
/// cannot be started at all produces `Err`. Git's own message for a failed
/// clone is logged at `warn`, since stderr is captured for classification.
pub fn clone(url: &str, workdir: Option<&Path>) -> Result<CloneOutcome, Error> {
    let mut command = Command::new("git");
    command
        .args(["clone", url])
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped());

    if let Some(dir) = workdir {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|e| Error::GitSpawn {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let outcome = CloneOutcome::classify(output.status.success(), &stderr);

    if outcome.is_failure() {
        log::warn!("git clone {}: {}", url, stderr.trim());
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clone_missing_workdir_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let result = clone("git@example.invalid:org/repo.git", Some(&missing));
        assert!(matches!(result, Err(Error::GitSpawn { .. })));
    }

    #[test]
    fn test_clone_local_path_failure_is_classified() {
        // Skip if git is not installed
        if Command::new("git").arg("--version").output().is_err() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let source = temp.path().join("no-such-source");

        let outcome = clone(source.to_str().unwrap(), Some(temp.path())).unwrap();
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_clone_failure_forwards_git_message() {
        if Command::new("git").arg("--version").output().is_err() {
            return;
        }
        testing_logger::setup();

        let temp = TempDir::new().unwrap();
        let source = temp.path().join("no-such-source");
        let url = source.to_str().unwrap();

        clone(url, Some(temp.path())).unwrap();

        let prefix = format!("git clone {}: ", url);
        testing_logger::validate(|captured| {
            let warning = captured
                .iter()
                .find(|log| log.level == log::Level::Warn)
                .expect("no warning logged");
            assert!(warning.body.starts_with(&prefix));
            assert!(warning.body.contains("fatal"));
        });
    }
}
