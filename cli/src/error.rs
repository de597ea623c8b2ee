use std::fmt;
use thiserror::Error;

/// A workflow precondition that is not met.
///
/// These are expected user states, rendered as a block with numbered next
/// steps rather than as a plain error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowViolation {
    pub category: ViolationCategory,
    pub explanation: String,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationCategory {
    WorkflowViolation,
    ReleaseBlocked,
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WorkflowViolation => "WORKFLOW VIOLATION",
            Self::ReleaseBlocked => "RELEASE BLOCKED",
        })
    }
}

impl WorkflowViolation {
    pub fn new<S: Into<String>>(
        category: ViolationCategory,
        explanation: impl Into<String>,
        next_steps: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            category,
            explanation: explanation.into(),
            next_steps: next_steps.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for WorkflowViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "❌ {}: {}", self.category, self.explanation)?;
        if !self.next_steps.is_empty() {
            write!(f, "\n   Next steps:")?;
            for (i, step) in self.next_steps.iter().enumerate() {
                write!(f, "\n   {}. {step}", i + 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for WorkflowViolation {}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Version error: {0}")]
    Version(#[from] version::VersionError),

    #[error("Git error: {0}")]
    Git(#[from] git::GitError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Tracker error: {0}")]
    Tracker(#[from] tracker::TrackerError),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("{message}")]
    Validation {
        message: String,
        suggestion: Option<String>,
        command: Option<String>,
    },

    #[error(transparent)]
    Workflow(#[from] WorkflowViolation),

    #[error("{failed} of {total} items failed")]
    BatchFailed { failed: usize, total: usize },

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::Version(err) => err.user_message(),
            Self::Git(err) => err.user_message(),
            Self::Config(err) => err.user_message(),
            Self::Tracker(err) => err.user_message(),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::Validation { message, .. } => message.clone(),
            Self::Workflow(violation) => violation.to_string(),
            Self::BatchFailed { failed, total } => {
                format!("{failed} of {total} items failed")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }

    /// Remediation lines shown under the error message.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::Validation {
                suggestion,
                command,
                ..
            } => suggestion
                .iter()
                .cloned()
                .chain(command.iter().map(|c| format!("Run: {c}")))
                .collect(),
            Self::Version(err) => err.suggestion().map(str::to_string).into_iter().collect(),
            Self::WithContext(_, err) => err.hints(),
            _ => Vec::new(),
        }
    }

    /// The structured violation, if this error is one.
    pub fn as_violation(&self) -> Option<&WorkflowViolation> {
        match self {
            Self::Workflow(violation) => Some(violation),
            Self::WithContext(_, err) => err.as_violation(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;

    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context)
        })
    }

    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_renders_numbered_steps() {
        let violation = WorkflowViolation::new(
            ViolationCategory::ReleaseBlocked,
            "Missing Pull Request",
            ["Push branch: git push origin feature/x", "Run this validation again"],
        );
        assert_eq!(
            violation.to_string(),
            "❌ RELEASE BLOCKED: Missing Pull Request\n   Next steps:\n   1. Push branch: git push origin feature/x\n   2. Run this validation again"
        );
    }

    #[test]
    fn validation_hints_include_command() {
        let err = CliError::Validation {
            message: "Cannot combine flags".into(),
            suggestion: Some("Pick one".into()),
            command: Some("sdlc release-helper bump-version --message m".into()),
        };
        assert_eq!(
            err.hints(),
            vec![
                "Pick one".to_string(),
                "Run: sdlc release-helper bump-version --message m".to_string()
            ]
        );
    }

    #[test]
    fn version_suggestion_surfaces_through_context() {
        let err = CliError::from(version::VersionError::ConflictingOverrides)
            .with_context("Computing next version");
        assert_eq!(err.hints().len(), 1);
    }

    #[test]
    fn violation_found_through_context() {
        let violation =
            WorkflowViolation::new(ViolationCategory::WorkflowViolation, "Dirty", Vec::<String>::new());
        let err = CliError::from(violation.clone()).with_context("validate");
        assert_eq!(err.as_violation(), Some(&violation));
    }
}
