//! Branches and remotes of the repository
//!
//! The shorthand resolves against whatever `git` itself reports, so this module shells out to
//! the system `git` binary rather than reading `.git` directly:
//! - `git branch --no-color` for local branches and the checked-out one
//! - `git remote` for remote names

use anyhow::{Context, bail};
use derive_new::new;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Marker `git branch` puts in front of the checked-out branch
const CURRENT_BRANCH_MARKER: char = '*';

/// Width of the marker column in `git branch` output
const MARKER_WIDTH: usize = 2;

/// Local branches as listed by `git branch`, in listing order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchListing {
    branches: Vec<String>,
    current: Option<String>,
}

impl BranchListing {
    /// Parse `git branch` output.
    ///
    /// A detached HEAD shows up as `* (HEAD detached at <oid>)`; it is neither a branch nor a
    /// current branch.
    pub fn parse(output: &str) -> Self {
        let mut listing = BranchListing::default();

        for line in output.lines() {
            let Some(name) = line.get(MARKER_WIDTH..).filter(|name| !name.is_empty()) else {
                continue;
            };

            if name.contains(' ') {
                continue;
            }
            if line.starts_with(CURRENT_BRANCH_MARKER) {
                listing.current = Some(name.to_string());
            }
            listing.branches.push(name.to_string());
        }

        listing
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Parse `git remote` output, one remote per line
pub fn parse_remotes(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|remote| !remote.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads references through the `git` binary, run from the repository directory
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub async fn list_branches(&self) -> anyhow::Result<BranchListing> {
        let output = self.git_output(&["branch", "--no-color"]).await?;

        Ok(BranchListing::parse(&output))
    }

    pub async fn list_remotes(&self) -> anyhow::Result<Vec<String>> {
        let output = self.git_output(&["remote"]).await?;

        Ok(parse_remotes(&output))
    }

    async fn git_output(&self, args: &[&str]) -> anyhow::Result<String> {
        debug!(?args, path = %self.path.display(), "spawning git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("failed to spawn git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "git {} failed ({}): {}",
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
