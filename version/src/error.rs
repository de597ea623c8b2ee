use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse version: {0}")]
    ParseError(#[from] semver::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse file: {0}")]
    ParseFileError(String),

    #[error("Unable to find {field} in {file}")]
    VersionNotFound {
        field: String,
        file: String,
        suggestion: Option<String>,
    },

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("An explicit version cannot be combined with major/minor/patch overrides")]
    ConflictingOverrides,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Changelog update failed: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("{0}: {1}")]
    WithContext(String, Box<VersionError>),
}

impl VersionError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        VersionError::WithContext(context.into(), Box::new(self))
    }

    pub(crate) fn not_found(field: &str, file: &str, suggestion: Option<&str>) -> Self {
        VersionError::VersionNotFound {
            field: field.to_string(),
            file: file.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    /// Remediation hint carried by the error, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            VersionError::VersionNotFound { suggestion, .. } => suggestion.as_deref(),
            VersionError::ConflictingOverrides => {
                Some("Use either --version or --major/--minor/--patch, not both")
            }
            VersionError::UnsupportedLanguage(_) => {
                Some("Supported languages: nodejs, typescript, python, go")
            }
            VersionError::WithContext(_, err) => err.suggestion(),
            _ => None,
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            VersionError::ParseError(e) => format!("Invalid version format: {e}"),
            VersionError::Changelog(e) => e.user_message(),
            VersionError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            _ => format!("{self}"),
        }
    }
}

pub type Result<T> = result::Result<T, VersionError>;

// Helper trait for adding context to results
pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for result::Result<T, E>
where
    E: Into<VersionError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let version_err: VersionError = err.into();
            version_err.with_context(context())
        })
    }
}
