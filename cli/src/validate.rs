use crate::context::Context;
use crate::error::Result;
use crate::ui;
use crate::workflow::{
    Stage, require_clean_tree, require_feature_branch, require_pull_request, require_version_bump,
};
use git::{MAIN_BRANCH, Repository};

pub fn execute(ctx: &Context) -> Result<()> {
    let repo = ctx.repository()?;
    check_release_ready(&repo, || Ok(git::pr_exists(ctx.root())?))?;
    ui::success_message("ALL CHECKS PASSED - Ready for release!");
    Ok(())
}

/// Runs the release checks in order, stopping at the first violation.
pub(crate) fn check_release_ready(
    repo: &dyn Repository,
    has_pull_request: impl FnOnce() -> Result<bool>,
) -> Result<()> {
    ui::section_header("Release Validation");

    let branch = repo.current_branch()?;
    require_feature_branch(&branch)?;
    ui::success_message(&format!("On feature branch: {branch}"));

    require_clean_tree(repo.is_working_tree_clean()?, Stage::Release)?;
    ui::success_message("Working tree clean");

    require_pull_request(has_pull_request()?, &branch)?;
    ui::success_message("Pull request exists");

    require_version_bump(&repo.commits_since(MAIN_BRANCH)?)?;
    ui::success_message("Version bump found");

    Ok(())
}
