use crate::context::Context;
use crate::error::{CliError, Result};
use crate::ui;
use dialoguer::Confirm;
use tracing::warn;
use tracker::{Issue, IssueTracker};
use version::Language;

/// Outcome of closing a batch of issues.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CleanupReport {
    pub closed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl CleanupReport {
    pub fn total(&self) -> usize {
        self.closed.len() + self.failed.len()
    }
}

pub fn execute(
    ctx: &Context,
    user: Option<&str>,
    force: bool,
    language: Option<Language>,
    tracker: Option<&str>,
) -> Result<()> {
    let repo = ctx.repository()?;
    let version = ctx.version_source(language)?.current_version()?;
    let tracker = ctx.issue_tracker(tracker, &repo)?;

    ui::section_header(&format!("Cleanup for release {version}"));
    let issues = tracker.fixed_issues(user)?;
    if issues.is_empty() {
        ui::info_message("No fixed issues to close");
        return Ok(());
    }

    println!("Issues to close:");
    for issue in &issues {
        println!(
            "  - [{}] {} ({})",
            issue.id,
            issue.title,
            issue.url.as_deref().unwrap_or("no url")
        );
    }

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Do you want to close these issues?")
            .default(false)
            .interact()?;
        if !confirmed {
            ui::warning_message("Cleanup cancelled");
            return Ok(());
        }
    }

    let report = close_all(tracker.as_ref(), &issues, &version);
    finish(&report)
}

/// Closes every issue, collecting failures instead of stopping.
pub(crate) fn close_all(tracker: &dyn IssueTracker, issues: &[Issue], version: &str) -> CleanupReport {
    let mut report = CleanupReport::default();
    for issue in issues {
        match tracker.close_issue(issue, version) {
            Ok(()) => {
                ui::success_message(&format!("Closed: {} - {}", issue.id, issue.title));
                report.closed.push(issue.id.clone());
            }
            Err(err) => {
                let message = err.user_message();
                warn!(issue = %issue.id, error = %message, "failed to close issue");
                ui::warning_message(&format!("Failed to close {}: {message}", issue.id));
                report.failed.push((issue.id.clone(), message));
            }
        }
    }
    report
}

pub(crate) fn finish(report: &CleanupReport) -> Result<()> {
    ui::section_header("Cleanup Summary");
    ui::field("Closed", &report.closed.len().to_string());
    ui::field("Failed", &report.failed.len().to_string());

    if report.failed.is_empty() {
        ui::success_message("All issues closed");
        return Ok(());
    }
    for (id, message) in &report.failed {
        ui::error_message(&format!("{id}: {message}"));
    }
    Err(CliError::BatchFailed {
        failed: report.failed.len(),
        total: report.total(),
    })
}
