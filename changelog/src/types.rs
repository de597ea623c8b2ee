use std::fmt;

/// A single resolved issue rendered into a version block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
}

impl ReleaseNote {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url,
        }
    }
}

impl fmt::Display for ReleaseNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = self.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("#");
        write!(f, "* [{}]({}) - {}", self.id, url, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_link_bullet() {
        let note = ReleaseNote::new("#42", "Fix login", Some("https://x/42".into()));
        assert_eq!(note.to_string(), "* [#42](https://x/42) - Fix login");
    }

    #[test]
    fn missing_url_falls_back_to_anchor() {
        assert_eq!(
            ReleaseNote::new("7", "Tidy", None).to_string(),
            "* [7](#) - Tidy"
        );
        assert_eq!(
            ReleaseNote::new("7", "Tidy", Some(String::new())).to_string(),
            "* [7](#) - Tidy"
        );
    }
}
