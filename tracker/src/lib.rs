//! Issue tracker access for release notes and post-release cleanup.

pub mod error;
mod github;
mod types;

pub use error::{Result, ResultExt, TrackerError};
pub use github::{GitHubTracker, parse_fixed_issues, release_comment};
pub use types::{FIXED_LABEL, Issue};

use git::Repository;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::str::FromStr;

static GITHUB_REMOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:git@github\.com:|https://github\.com/)([^/]+/[^/]+?)(?:\.git)?$")
        .expect("Failed to compile GitHub remote regex")
});

/// Source of resolved-but-unreleased issues.
pub trait IssueTracker {
    /// Open issues labelled `fixed`, optionally only those assigned to `user`.
    fn fixed_issues(&self, user: Option<&str>) -> Result<Vec<Issue>>;

    /// Closes `issue` with a comment naming the release `version`.
    fn close_issue(&self, issue: &Issue, version: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerKind {
    Github,
}

impl FromStr for TrackerKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(TrackerKind::Github),
            _ => Err(TrackerError::UnsupportedTracker(s.to_string())),
        }
    }
}

/// `owner/name` from a GitHub SSH or HTTPS remote URL.
pub fn repo_from_remote(url: &str) -> Option<String> {
    GITHUB_REMOTE
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Builds the tracker for `kind`.
///
/// The repository is `repo` when given, else derived from `origin`.
pub fn issue_tracker(
    kind: TrackerKind,
    repo: Option<&str>,
    git_repo: &dyn Repository,
    root: &Path,
) -> Result<Box<dyn IssueTracker>> {
    match kind {
        TrackerKind::Github => {
            let repo = match repo.filter(|r| !r.trim().is_empty()) {
                Some(repo) => repo.to_string(),
                None => git_repo
                    .remote_url("origin")?
                    .as_deref()
                    .and_then(repo_from_remote)
                    .ok_or(TrackerError::RepoNotDetected)?,
            };
            Ok(Box::new(GitHubTracker::new(repo, root)))
        }
    }
}
