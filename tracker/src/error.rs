use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Git(#[from] git::GitError),

    #[error("Failed to parse issue tracker output: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unsupported issue tracker: {0}")]
    UnsupportedTracker(String),

    #[error("Could not determine the GitHub repository (owner/name)")]
    RepoNotDetected,

    #[error("Failed to close issue {id}: {message}")]
    CloseFailed { id: String, message: String },

    #[error("{0}: {1}")]
    WithContext(String, Box<TrackerError>),
}

impl TrackerError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        TrackerError::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Git(e) => e.user_message(),
            TrackerError::RepoNotDetected => {
                "Could not determine the GitHub repository. Set it with `sdlc config set repo owner/name`"
                    .to_string()
            }
            TrackerError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Helper trait for adding context to results
pub trait ResultExt<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<TrackerError>,
{
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let tracker_err: TrackerError = err.into();
            tracker_err.with_context(context)
        })
    }
}
