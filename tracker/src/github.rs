use crate::IssueTracker;
use crate::error::{Result, TrackerError};
use crate::types::{FIXED_LABEL, GhIssue, Issue};
use git::run_checked;
use std::path::{Path, PathBuf};
use tracing::debug;

const ISSUE_FIELDS: &str = "number,title,url,state,assignees,labels";

/// Issue tracker backed by the GitHub CLI (`gh issue ...`).
pub struct GitHubTracker {
    repo: String,
    root: PathBuf,
}

impl GitHubTracker {
    pub fn new(repo: impl Into<String>, root: &Path) -> Self {
        Self {
            repo: repo.into(),
            root: root.to_path_buf(),
        }
    }

    fn gh(&self, args: &[&str]) -> Result<String> {
        let mut full = args.to_vec();
        full.extend_from_slice(&["--repo", self.repo.as_str()]);
        Ok(run_checked("gh", &full, &self.root)?)
    }
}

impl IssueTracker for GitHubTracker {
    fn fixed_issues(&self, user: Option<&str>) -> Result<Vec<Issue>> {
        let mut args = vec![
            "issue", "list", "--state", "open", "--json", ISSUE_FIELDS, "--limit", "100",
        ];
        if let Some(user) = user {
            args.extend_from_slice(&["--assignee", user]);
        }

        let output = self.gh(&args)?;
        let issues = parse_fixed_issues(&output, user)?;
        debug!(count = issues.len(), repo = %self.repo, "fetched fixed issues");
        Ok(issues)
    }

    fn close_issue(&self, issue: &Issue, version: &str) -> Result<()> {
        let id = issue
            .number
            .map_or_else(|| issue.id.clone(), |number| number.to_string());
        let comment = release_comment(version);

        self.gh(&["issue", "close", id.as_str(), "--comment", comment.as_str()])
            .map(|_| ())
            .map_err(|e| TrackerError::CloseFailed {
                id: issue.id.clone(),
                message: e.user_message(),
            })
    }
}

pub fn release_comment(version: &str) -> String {
    format!("Shipped with Release '{version}'")
}

/// Keeps open issues labelled `fixed` (any case), assigned to `user` if given.
pub fn parse_fixed_issues(json: &str, user: Option<&str>) -> Result<Vec<Issue>> {
    let rows: Vec<GhIssue> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(Issue::from)
        .filter(|issue| issue.has_label(FIXED_LABEL) && issue.is_open())
        .filter(|issue| user.is_none_or(|user| issue.assignee.as_deref() == Some(user)))
        .collect())
}
