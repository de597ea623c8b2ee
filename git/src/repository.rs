use crate::command::run_checked;
use crate::error::{GitError, Result};
use git2::{BranchType, ErrorCode, Repository as GitRepository, StatusOptions, build::CheckoutBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Repository state and mutations needed by the release workflow.
pub trait Repository {
    /// Name of the checked-out branch; empty when HEAD is detached.
    fn current_branch(&self) -> Result<String>;
    /// True when there are no staged, unstaged or untracked changes.
    fn is_working_tree_clean(&self) -> Result<bool>;
    fn checkout_branch(&self, name: &str) -> Result<()>;
    /// Creates `name` at HEAD and checks it out.
    fn create_branch(&self, name: &str) -> Result<()>;
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;
    /// `git log <base>..HEAD --oneline --name-only`
    fn commits_since(&self, base: &str) -> Result<String>;
    /// `git diff --name-status <base>...HEAD`
    fn changes_since(&self, base: &str) -> Result<String>;
    fn add(&self, paths: &[&str]) -> Result<()>;
    fn commit(&self, message: &str, no_verify: bool) -> Result<()>;
    fn remote_url(&self, remote: &str) -> Result<Option<String>>;
}

pub struct RealGitRepository {
    repo: GitRepository,
    /// Directory the `git` CLI runs in; pathspecs are relative to it.
    root: PathBuf,
}

impl RealGitRepository {
    /// Discovers the repository containing `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let repo = GitRepository::discover(root).map_err(|e| {
            GitError::RepositoryError(format!(
                "Failed to discover git repository at {}: {}",
                root.display(),
                e.message()
            ))
        })?;
        if repo.workdir().is_none() {
            return Err(GitError::RepositoryError(
                "Bare repositories are not supported".into(),
            ));
        }
        Ok(Self {
            repo,
            root: root.to_path_buf(),
        })
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        run_checked("git", args, &self.root)
    }
}

impl Repository for RealGitRepository {
    fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or_default().to_string()),
            Ok(_) => Ok(String::new()),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                // No commits yet; HEAD still names the branch.
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .unwrap_or_default()
                    .to_string())
            }
            Err(e) => Err(GitError::RepositoryError(format!(
                "Failed to read HEAD: {}",
                e.message()
            ))),
        }
    }

    fn is_working_tree_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options)).map_err(|e| {
            GitError::RepositoryError(format!("Failed to get repository status: {}", e.message()))
        })?;

        Ok(statuses.is_empty())
    }

    fn checkout_branch(&self, name: &str) -> Result<()> {
        let branch_ref = format!("refs/heads/{name}");

        let obj = self
            .repo
            .revparse_single(&branch_ref)
            .map_err(|_| GitError::BranchNotFound(name.to_string()))?;

        self.repo
            .checkout_tree(&obj, Some(CheckoutBuilder::new().safe()))
            .map_err(|e| {
                GitError::BranchError(format!("Failed to checkout branch '{name}': {}", e.message()))
            })?;

        self.repo.set_head(&branch_ref).map_err(|e| {
            GitError::BranchError(format!("Failed to set HEAD to '{name}': {}", e.message()))
        })?;

        debug!(branch = name, "checked out branch");
        Ok(())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        if self.repo.find_branch(name, BranchType::Local).is_ok() {
            return Err(GitError::BranchError(format!("Branch '{name}' already exists")));
        }

        let head_commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| {
                GitError::RepositoryError(format!("Failed to resolve HEAD commit: {}", e.message()))
            })?;

        self.repo.branch(name, &head_commit, false).map_err(|e| {
            GitError::BranchError(format!("Failed to create branch '{name}': {}", e.message()))
        })?;

        self.checkout_branch(name)
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.git(&["pull", remote, branch])
            .map(|_| ())
            .map_err(|e| e.with_context(format!("Failed to pull {remote}/{branch}")))
    }

    fn commits_since(&self, base: &str) -> Result<String> {
        let range = format!("{base}..HEAD");
        self.git(&["log", &range, "--oneline", "--name-only"])
    }

    fn changes_since(&self, base: &str) -> Result<String> {
        let range = format!("{base}...HEAD");
        self.git(&["diff", "--name-status", &range])
    }

    fn add(&self, paths: &[&str]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend_from_slice(paths);
        self.git(&args).map(|_| ())
    }

    fn commit(&self, message: &str, no_verify: bool) -> Result<()> {
        let mut args = vec!["commit", "-m", message];
        if no_verify {
            args.push("--no-verify");
        }
        self.git(&args).map(|_| ())
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        match self.repo.find_remote(remote) {
            Ok(found) => Ok(found.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
