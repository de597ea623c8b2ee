use crate::context::Context;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use changelog::ReleaseNote;
use git::{MAIN_BRANCH, Repository};
use std::path::{Path, PathBuf};
use tracker::{Issue, IssueTracker};
use version::{VersionSource, commit_log_mentions_version_file};

pub fn execute(ctx: &Context) -> Result<()> {
    let repo = ctx.repository()?;
    let source = ctx.version_source(None)?;
    let (version, path) = refresh(ctx.root(), &repo, source.as_ref(), || {
        ctx.issue_tracker(None, &repo)
    })?;
    ui::success_message(&format!(
        "{} updated for version {version}",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(changelog::CHANGELOG_FILENAME)
    ));
    Ok(())
}

/// Rewrites the current version's changelog block from the fixed issues.
pub(crate) fn refresh(
    root: &Path,
    repo: &dyn Repository,
    source: &dyn VersionSource,
    tracker: impl FnOnce() -> Result<Box<dyn IssueTracker>>,
) -> Result<(String, PathBuf)> {
    let log = repo.commits_since(MAIN_BRANCH)?;
    if !commit_log_mentions_version_file(&log) {
        return Err(CliError::Validation {
            message: "No version bump found on this branch.".to_string(),
            suggestion: Some("Bump the version first".to_string()),
            command: Some(
                "sdlc release-helper bump-version --message \"Your release message\"".to_string(),
            ),
        });
    }

    let version = source.current_version()?;
    ui::status_message(&format!("Collecting fixed issues for {version}"));
    let notes: Vec<ReleaseNote> = tracker()?
        .fixed_issues(None)?
        .iter()
        .map(Issue::release_note)
        .collect();

    let path =
        changelog::update_changelog_for_version(root, &version, &changelog::today(), None, &notes)
            .with_context(|| format!("Failed to update changelog for {version}"))?;
    Ok((version, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRepository, FakeTracker, issue};
    use std::fs;
    use tempfile::TempDir;
    use version::Language;

    fn tracker_with(issues: Vec<tracker::Issue>) -> impl FnOnce() -> Result<Box<dyn IssueTracker>> {
        move || Ok(Box::new(FakeTracker::with_issues(issues)) as Box<dyn IssueTracker>)
    }

    #[test]
    fn requires_a_version_bump_on_the_branch() {
        let dir = TempDir::new().unwrap();
        let repo = FakeRepository::on("feature/x").with_log("abc feat: x\nsrc/x.go\n");
        let source = version::version_source(Language::Go, dir.path());

        let err = refresh(dir.path(), &repo, source.as_ref(), tracker_with(vec![])).unwrap_err();
        assert_eq!(err.user_message(), "No version bump found on this branch.");
        assert_eq!(
            err.hints().last().map(String::as_str),
            Some("Run: sdlc release-helper bump-version --message \"Your release message\"")
        );
    }

    #[test]
    fn replaces_only_the_current_block() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("VERSION"), "0.3.0\n").unwrap();
        fs::write(
            dir.path().join("CHANGELOG.md"),
            "# Changelog\n\n## [0.3.0] - January 5, 2026\n\n### Changes\n\n* [1](#) - Old\n\n## [0.2.0] - December 1, 2025\n\n### Changes\n\n* [0](#) - Older\n",
        )
        .unwrap();
        let repo = FakeRepository::on("feature/x").with_log("abc chore: bump\nVERSION\n");
        let source = version::version_source(Language::Go, dir.path());

        let (version, path) = refresh(
            dir.path(),
            &repo,
            source.as_ref(),
            tracker_with(vec![issue(4, "Retry uploads", None)]),
        )
        .unwrap();

        assert_eq!(version, "0.3.0");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("* [4](https://github.com/acme/widgets/issues/4) - Retry uploads"));
        assert!(!content.contains("* [1](#) - Old\n"));
        assert!(content.contains("## [0.2.0] - December 1, 2025\n\n### Changes\n\n* [0](#) - Older\n"));
        assert_eq!(content.matches("## [0.3.0]").count(), 1);
    }
}
