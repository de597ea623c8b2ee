use crate::context::Context;
use crate::error::{CliError, Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use crate::workflow::{Stage, require_clean_tree, require_feature_branch};
use changelog::ReleaseNote;
use git::Repository;
use std::path::Path;
use tracker::{Issue, IssueTracker};
use version::{BumpOverrides, Language, ReleaseInfo, VersionSource};

/// What the user asked `bump-version` to do.
#[derive(Debug, Clone, Default)]
pub struct BumpRequest {
    pub message: String,
    pub overrides: BumpOverrides,
    pub explicit_version: Option<String>,
    pub no_commit: bool,
}

pub fn execute(
    ctx: &Context,
    language: Option<Language>,
    tracker: Option<&str>,
    request: BumpRequest,
) -> Result<()> {
    let repo = ctx.repository()?;
    let source = ctx.version_source(language)?;
    bump(
        ctx.root(),
        &repo,
        source.as_ref(),
        || ctx.issue_tracker(tracker, &repo),
        &request,
    )?;
    Ok(())
}

/// Bumps the version and returns it.
pub(crate) fn bump(
    root: &Path,
    repo: &dyn Repository,
    source: &dyn VersionSource,
    tracker: impl FnOnce() -> Result<Box<dyn IssueTracker>>,
    request: &BumpRequest,
) -> Result<String> {
    let mut progress = ProgressTracker::new("Version Bump").with_steps([
        "Checking workflow state",
        "Computing next version",
        "Collecting fixed issues",
        "Updating version files",
        "Committing version files",
    ]);

    progress.start_step();
    require_feature_branch(&repo.current_branch()?)?;
    require_clean_tree(repo.is_working_tree_clean()?, Stage::Release)?;
    if request.explicit_version.is_some() && !request.overrides.is_empty() {
        return Err(CliError::Validation {
            message: "Cannot combine --version with --major, --minor or --patch".to_string(),
            suggestion: Some("Pass either an exact version or component overrides".to_string()),
            command: None,
        });
    }
    progress.complete_step();

    progress.start_step();
    let previous = source
        .current_version()
        .context("Failed to read the current version")?;
    if let Some(explicit) = request.explicit_version.as_deref() {
        version::validate_semantic_version(explicit)?;
    }
    let next = version::compute_next(
        &previous,
        request.overrides,
        request.explicit_version.as_deref(),
    )?;
    progress.complete_step();

    progress.start_step();
    let notes: Vec<ReleaseNote> = tracker()?
        .fixed_issues(None)?
        .iter()
        .map(Issue::release_note)
        .collect();
    progress.complete_step();

    progress.start_step();
    let release = ReleaseInfo::new(next.as_str(), changelog::today())
        .with_message(request.message.as_str())
        .with_notes(notes);
    source
        .update_version(&release)
        .with_context(|| format!("Failed to update version to {next}"))?;
    progress.complete_step();

    display_summary(&previous, &release);

    progress.start_step();
    if request.no_commit {
        progress.skip_step("--no-commit");
        ui::warning_message("Version files were not committed. Commit them before opening the PR.");
    } else {
        match commit_version_files(root, repo, source.version_files(), &next) {
            Ok(()) => progress.complete_step(),
            Err(err) => {
                progress.skip_step("commit failed");
                ui::warning_message(&format!("Failed to commit version changes: {}", err.user_message()));
                ui::warning_message("Please commit the changes manually.");
            }
        }
    }

    progress.complete();
    display_next_steps(request.no_commit);
    Ok(next)
}

fn display_summary(previous: &str, release: &ReleaseInfo) {
    ui::section_header("Release Summary");
    ui::field("Previous Version", previous);
    ui::field("Next Version", &release.version);
    ui::field("Release Date", &release.release_date);
    if let Some(message) = release.message.as_deref() {
        ui::field("Message", message);
    }
    ui::field("Release Notes", "");
    if release.notes.is_empty() {
        println!("  (no fixed issues)");
    }
    for note in &release.notes {
        println!("  {note}");
    }
}

pub(crate) fn commit_message(version: &str) -> String {
    format!(
        "chore: Bump version to {version}\n\n\
         - Updated version files\n\
         - Added release notes\n\n\
         Resolves version bump to {version}"
    )
}

/// Stages the version files that exist and commits them without hooks.
fn commit_version_files(
    root: &Path,
    repo: &dyn Repository,
    files: &[&str],
    version: &str,
) -> Result<()> {
    let existing: Vec<&str> = files
        .iter()
        .copied()
        .filter(|file| root.join(file).exists())
        .collect();
    repo.add(&existing).context("Failed to stage version files")?;
    repo.commit(&commit_message(version), true)
        .context("Failed to commit version files")?;
    ui::success_message(&format!("Committed version bump to {version}"));
    Ok(())
}

fn display_next_steps(no_commit: bool) {
    ui::section_header("Next Steps");
    let mut steps = Vec::new();
    if no_commit {
        steps.push("Commit the version changes".to_string());
    }
    steps.push("Push the branch: git push".to_string());
    steps.push("Create PR with version bump included".to_string());
    steps.push("Check readiness: sdlc release-helper validate".to_string());
    for (i, step) in steps.iter().enumerate() {
        ui::step_message(i + 1, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRepository, FakeTracker, issue};
    use std::fs;
    use tempfile::TempDir;

    fn node_project(version: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            format!("{{\n  \"name\": \"widgets\",\n  \"version\": \"{version}\"\n}}\n"),
        )
        .unwrap();
        dir
    }

    fn tracker_with(issues: Vec<tracker::Issue>) -> impl FnOnce() -> Result<Box<dyn IssueTracker>> {
        move || Ok(Box::new(FakeTracker::with_issues(issues)) as Box<dyn IssueTracker>)
    }

    fn request(message: &str) -> BumpRequest {
        BumpRequest {
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn patch_bump_updates_files_and_commits() {
        let dir = node_project("1.4.2");
        let repo = FakeRepository::on("feature/search");
        let source = version::version_source(Language::Nodejs, dir.path());

        let next = bump(
            dir.path(),
            &repo,
            source.as_ref(),
            tracker_with(vec![issue(7, "Search ignores case", None)]),
            &request("Better search"),
        )
        .unwrap();

        assert_eq!(next, "1.4.3");
        assert_eq!(source.current_version().unwrap(), "1.4.3");

        let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
        assert!(changelog.contains("## [1.4.3] - "));
        assert!(changelog.contains("Better search"));
        assert!(changelog.contains(
            "* [7](https://github.com/acme/widgets/issues/7) - Search ignores case"
        ));

        let calls = repo.calls();
        assert_eq!(calls[0], "add package.json CHANGELOG.md");
        assert!(calls[1].starts_with("commit no_verify=true chore: Bump version to 1.4.3\n"));
    }

    #[test]
    fn no_commit_leaves_git_alone() {
        let dir = node_project("0.9.0");
        let repo = FakeRepository::on("feature/x");
        let source = version::version_source(Language::Nodejs, dir.path());
        let request = BumpRequest {
            no_commit: true,
            overrides: BumpOverrides {
                minor: Some(10),
                patch: Some(0),
                ..Default::default()
            },
            ..request("Minor release")
        };

        let next = bump(dir.path(), &repo, source.as_ref(), tracker_with(vec![]), &request).unwrap();
        assert_eq!(next, "0.10.0");
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn commit_failure_is_only_a_warning() {
        let dir = node_project("2.0.0");
        let repo = FakeRepository {
            fail_commit: true,
            ..FakeRepository::on("feature/x")
        };
        let source = version::version_source(Language::Nodejs, dir.path());
        let next = bump(dir.path(), &repo, source.as_ref(), tracker_with(vec![]), &request("m"))
            .unwrap();
        assert_eq!(next, "2.0.1");
    }

    #[test]
    fn explicit_version_with_override_is_rejected() {
        let dir = node_project("1.0.0");
        let repo = FakeRepository::on("feature/x");
        let source = version::version_source(Language::Nodejs, dir.path());
        let request = BumpRequest {
            explicit_version: Some("3.0.0".to_string()),
            overrides: BumpOverrides {
                major: Some(3),
                ..Default::default()
            },
            ..request("m")
        };

        let err = bump(dir.path(), &repo, source.as_ref(), tracker_with(vec![]), &request)
            .unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
        assert_eq!(source.current_version().unwrap(), "1.0.0");
    }

    #[test]
    fn explicit_version_must_be_semantic() {
        let dir = node_project("1.0.0");
        let repo = FakeRepository::on("feature/x");
        let source = version::version_source(Language::Nodejs, dir.path());
        let request = BumpRequest {
            explicit_version: Some("v3".to_string()),
            ..request("m")
        };
        assert!(bump(dir.path(), &repo, source.as_ref(), tracker_with(vec![]), &request).is_err());
    }

    #[test]
    fn refuses_to_bump_on_main() {
        let dir = node_project("1.0.0");
        let repo = FakeRepository::on("main");
        let source = version::version_source(Language::Nodejs, dir.path());
        let err = bump(dir.path(), &repo, source.as_ref(), tracker_with(vec![]), &request("m"))
            .unwrap_err();
        assert!(err.as_violation().is_some());
        assert!(!dir.path().join("CHANGELOG.md").exists());
    }

    #[test]
    fn commit_message_format() {
        assert_eq!(
            commit_message("1.2.3"),
            "chore: Bump version to 1.2.3\n\n- Updated version files\n- Added release notes\n\nResolves version bump to 1.2.3"
        );
    }
}
