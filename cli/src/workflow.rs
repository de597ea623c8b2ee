//! Preconditions for each stage of the release workflow.
//!
//! Guards are pure: callers gather repository state and pass it in.

use crate::error::{ViolationCategory, WorkflowViolation};
use git::is_main_branch;
use version::commit_log_mentions_version_file;

pub type GuardResult = std::result::Result<(), WorkflowViolation>;

/// What the caller is about to do when it needs a clean tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Release,
    NewWork,
}

pub fn require_feature_branch(branch: &str) -> GuardResult {
    if !is_main_branch(branch) {
        return Ok(());
    }
    Err(WorkflowViolation::new(
        ViolationCategory::WorkflowViolation,
        "Cannot start release from main branch",
        [
            "Create a feature branch first",
            "Run: git checkout -b feature/description",
        ],
    ))
}

pub fn require_main_branch(branch: &str) -> GuardResult {
    if is_main_branch(branch) {
        return Ok(());
    }
    Err(WorkflowViolation::new(
        ViolationCategory::WorkflowViolation,
        format!("Must start new work from main branch! Current branch: {branch}"),
        ["Run: git checkout main"],
    ))
}

pub fn require_clean_tree(clean: bool, stage: Stage) -> GuardResult {
    if clean {
        return Ok(());
    }
    let violation = match stage {
        Stage::Release => WorkflowViolation::new(
            ViolationCategory::WorkflowViolation,
            "Working tree not clean",
            [
                "Commit all changes before starting release",
                "Run: git add . && git commit -m \"Your message\"",
            ],
        ),
        Stage::NewWork => WorkflowViolation::new(
            ViolationCategory::WorkflowViolation,
            "Working tree not clean",
            [
                "Commit or stash changes before starting new work",
                "Run: git stash",
            ],
        ),
    };
    Err(violation)
}

pub fn require_pull_request(has_pull_request: bool, branch: &str) -> GuardResult {
    if has_pull_request {
        return Ok(());
    }
    Err(WorkflowViolation::new(
        ViolationCategory::ReleaseBlocked,
        "Missing Pull Request",
        [
            format!("Push branch: git push origin {branch}"),
            "Create PR: gh pr create --title \"[Release] Description\"".to_string(),
            "Run this validation again".to_string(),
        ],
    ))
}

/// `log` is `git log main..HEAD --oneline --name-only` output.
pub fn require_version_bump(log: &str) -> GuardResult {
    if commit_log_mentions_version_file(log) {
        return Ok(());
    }
    Err(WorkflowViolation::new(
        ViolationCategory::ReleaseBlocked,
        "Version not bumped",
        [
            "Run: sdlc release-helper bump-version --message \"Your release message\"",
            "Commit the version changes",
            "Create PR with version bump included",
            "Merge the PR, then run: sdlc release-helper cleanup",
        ],
    ))
}
