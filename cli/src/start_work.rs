use crate::cli::BranchType;
use crate::context::Context;
use crate::error::{Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use crate::workflow::{Stage, require_clean_tree, require_main_branch};
use chrono::Utc;
use git::{MAIN_BRANCH, Repository};

pub fn execute(ctx: &Context, branch_type: BranchType, name: Option<&str>) -> Result<()> {
    let repo = ctx.repository()?;
    let branch = branch_name(branch_type, name, Utc::now().timestamp_millis());
    start(&repo, &branch)?;
    display_next_steps(&branch);
    Ok(())
}

/// `<type>/<name>`, defaulting the name to `work-` plus the last six digits
/// of `millis`.
pub(crate) fn branch_name(branch_type: BranchType, name: Option<&str>, millis: i64) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{branch_type}/{name}"),
        None => format!("{branch_type}/work-{:06}", millis.rem_euclid(1_000_000)),
    }
}

pub(crate) fn start(repo: &dyn Repository, branch: &str) -> Result<()> {
    let mut progress = ProgressTracker::new("Start Work").with_steps([
        "Checking workflow state",
        "Pulling latest main",
        "Creating work branch",
    ]);

    progress.start_step();
    require_main_branch(&repo.current_branch()?)?;
    require_clean_tree(repo.is_working_tree_clean()?, Stage::NewWork)?;
    progress.complete_step();

    progress.start_step();
    repo.pull("origin", MAIN_BRANCH)
        .context("Failed to pull latest changes from origin")?;
    progress.complete_step();

    progress.start_step();
    repo.create_branch(branch)
        .with_context(|| format!("Failed to create branch '{branch}'"))?;
    progress.complete_step();

    progress.complete();
    Ok(())
}

fn display_next_steps(branch: &str) {
    ui::info_message(&format!("Now on branch {branch}"));
    ui::section_header("Next Steps");
    ui::step_message(1, "Make your changes");
    ui::step_message(2, "Commit with issue references, e.g. \"fix: handle timeouts (#42)\"");
    ui::step_message(3, "Check release readiness: sdlc release-helper validate");
}
