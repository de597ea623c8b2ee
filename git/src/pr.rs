use crate::command::run;
use crate::error::Result;
use std::path::Path;

/// Whether the current branch has an open pull request (`gh pr view`).
pub fn pr_exists(root: &Path) -> Result<bool> {
    Ok(run("gh", &["pr", "view", "--json", "url"], root)?.success)
}
