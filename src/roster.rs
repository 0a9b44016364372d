//! # Team Rosters
//!
//! Team projects do not follow the numbered naming scheme: each team owns a
//! repository named after the team. A roster file lists the teams, one per
//! line, optionally followed by the ids of its members:
//!
//! ```text
//! # team        members
//! csc216-601-GP1-01   jdoe  asmith
//! csc216-601-GP1-02   bjones
//! ```
//!
//! Only the first whitespace-separated token of each line matters for
//! cloning. Blank lines and lines starting with `#` are skipped.

use std::path::Path;

use crate::error::{Error, Result};

/// One roster line: a team and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    /// The team id, which is also the repository name.
    pub team: String,
    pub members: Vec<String>,
}

/// Parses roster text into team entries, in file order.
pub fn parse(content: &str) -> Result<Vec<TeamEntry>> {
    let mut entries = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(team) = tokens.next() else {
            continue;
        };

        if team.contains('/') || team.contains(':') {
            return Err(Error::Roster {
                line: number + 1,
                message: format!("invalid team name {:?}", team),
            });
        }

        entries.push(TeamEntry {
            team: team.to_string(),
            members: tokens.map(str::to_string).collect(),
        });
    }

    Ok(entries)
}

/// Reads and parses a roster file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<TeamEntry>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}
