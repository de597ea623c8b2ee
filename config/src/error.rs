use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON in {file}: {message}")]
    InvalidJson { file: String, message: String },

    #[error("Config must be a JSON object")]
    NotAnObject,

    #[error("Config field \"{field}\" {reason}")]
    InvalidField { field: String, reason: String },

    #[error("{0}: {1}")]
    WithContext(String, Box<ConfigError>),
}

impl ConfigError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        ConfigError::WithContext(context.into(), Box::new(self))
    }

    pub(crate) fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ConfigError::IoError(e) => format!("Could not access config file: {e}"),
            ConfigError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Helper trait for adding context to results
pub trait ResultExt<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ConfigError>,
{
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let config_err: ConfigError = err.into();
            config_err.with_context(context)
        })
    }
}
