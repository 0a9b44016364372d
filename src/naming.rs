//! # Repository Naming
//!
//! Pure functions that turn course settings and a student index into the
//! repository name and SSH clone URL used for that student.
//!
//! Names follow `<class-prefix><section>-<assignment>-<NN>`. The index is
//! rendered with at least two digits, so indices below 10 gain a leading zero
//! and everything else is printed as plain decimal:
//!
//! ```
//! use classroom_clone::naming::repo_name;
//!
//! assert_eq!(repo_name("csc316-", "002", "P2", 5), "csc316-002-P2-05");
//! assert_eq!(repo_name("csc316-", "002", "P2", 42), "csc316-002-P2-42");
//! assert_eq!(repo_name("csc316-", "002", "P2", 100), "csc316-002-P2-100");
//! ```

/// Formats the repository name for a single student index.
pub fn repo_name(class_prefix: &str, section: &str, assignment: &str, index: u32) -> String {
    format!("{class_prefix}{section}-{assignment}-{index:02}")
}

/// Builds the SSH clone URL for a repository hosted in `organization`.
pub fn clone_url(host: &str, organization: &str, repo_name: &str) -> String {
    format!("git@{host}:{organization}/{repo_name}.git")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_is_zero_padded() {
        assert_eq!(repo_name("csc316-", "002", "P2", 5), "csc316-002-P2-05");
        assert_eq!(repo_name("csc316-", "002", "P2", 1), "csc316-002-P2-01");
        assert_eq!(repo_name("csc316-", "002", "P2", 9), "csc316-002-P2-09");
    }

    #[test]
    fn test_two_digits_are_unpadded() {
        assert_eq!(repo_name("csc316-", "002", "P2", 10), "csc316-002-P2-10");
        assert_eq!(repo_name("csc316-", "002", "P2", 42), "csc316-002-P2-42");
    }

    #[test]
    fn test_three_digits_are_unpadded() {
        assert_eq!(repo_name("csc316-", "002", "P2", 100), "csc316-002-P2-100");
    }

    #[test]
    fn test_zero_index() {
        assert_eq!(repo_name("csc216-", "001", "GP1", 0), "csc216-001-GP1-00");
    }

    #[test]
    fn test_clone_url() {
        assert_eq!(
            clone_url("github.ncsu.edu", "engr-csc316-fall2017", "csc316-002-P2-05"),
            "git@github.ncsu.edu:engr-csc316-fall2017/csc316-002-P2-05.git"
        );
    }
}
