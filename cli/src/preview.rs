use crate::context::Context;
use crate::error::Result;
use crate::ui;
use changelog::ReleaseNote;
use colored::Colorize;
use git::{CategoryChanges, ChangeCategory, MAIN_BRANCH, Repository};
use std::collections::BTreeMap;
use tracker::{Issue, IssueTracker};
use version::{BumpOverrides, Language, VersionSource};

/// What the next patch release would contain.
#[derive(Debug)]
pub(crate) struct Preview {
    pub current: String,
    pub next: String,
    pub notes: Vec<ReleaseNote>,
    pub changes: Option<BTreeMap<ChangeCategory, CategoryChanges>>,
}

pub fn execute(
    ctx: &Context,
    user: Option<&str>,
    show_changes: bool,
    language: Option<Language>,
    tracker: Option<&str>,
) -> Result<()> {
    let repo = ctx.repository()?;
    let source = ctx.version_source(language)?;
    let tracker = ctx.issue_tracker(tracker, &repo)?;
    let preview = build_preview(&repo, source.as_ref(), tracker.as_ref(), user, show_changes)?;
    display(&preview);
    Ok(())
}

pub(crate) fn build_preview(
    repo: &dyn Repository,
    source: &dyn VersionSource,
    tracker: &dyn IssueTracker,
    user: Option<&str>,
    show_changes: bool,
) -> Result<Preview> {
    let current = source.current_version()?;
    let next = version::compute_next(&current, BumpOverrides::default(), None)?;
    let notes = tracker
        .fixed_issues(user)?
        .iter()
        .map(Issue::release_note)
        .collect();

    let changes = if show_changes {
        let output = repo.changes_since(MAIN_BRANCH)?;
        Some(git::categorize_changes(&git::parse_name_status(&output)))
    } else {
        None
    };

    Ok(Preview {
        current,
        next,
        notes,
        changes,
    })
}

fn display(preview: &Preview) {
    ui::info_message(&format!("Previewing issues for release after {}", preview.current));

    if preview.notes.is_empty() {
        ui::warning_message("No fixed issues found");
    } else {
        println!("\n{}", "Release Notes Preview:".bold());
        ui::rule();
        for note in &preview.notes {
            println!("{note}");
        }
        ui::rule();
        ui::field("Next version would be", &preview.next);
    }

    if let Some(changes) = &preview.changes {
        display_changes(changes);
    }
}

fn display_changes(changes: &BTreeMap<ChangeCategory, CategoryChanges>) {
    ui::section_header(&format!("Changes since {MAIN_BRANCH}"));
    if changes.is_empty() {
        println!("  (no changed files)");
        return;
    }
    for (category, files) in changes {
        println!("\n{}", category.to_string().bold());
        for path in &files.added {
            println!("  {} {path}", "+".green());
        }
        for path in &files.modified {
            println!("  {} {path}", "~".yellow());
        }
        for path in &files.deleted {
            println!("  {} {path}", "-".red());
        }
    }
}
