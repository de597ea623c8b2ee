use changelog::ReleaseNote;

/// Everything a version source needs to record a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub version: String,
    pub release_date: String,
    pub message: Option<String>,
    pub notes: Vec<ReleaseNote>,
}

impl ReleaseInfo {
    pub fn new(version: impl Into<String>, release_date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            release_date: release_date.into(),
            message: None,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_notes(mut self, notes: Vec<ReleaseNote>) -> Self {
        self.notes = notes;
        self
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}
