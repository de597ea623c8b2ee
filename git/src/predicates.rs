pub const MAIN_BRANCH: &str = "main";

/// `main` and `master` are both treated as the trunk.
pub fn is_main_branch(branch: &str) -> bool {
    matches!(branch.trim(), "main" | "master")
}

/// True for empty `git status --porcelain` output.
pub fn is_clean_status(porcelain: &str) -> bool {
    porcelain.trim().is_empty()
}
