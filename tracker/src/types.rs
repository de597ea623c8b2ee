use changelog::ReleaseNote;
use serde::Deserialize;

pub const FIXED_LABEL: &str = "fixed";

/// An issue as far as the release workflow cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: String,
    pub number: Option<u64>,
    pub title: String,
    pub url: Option<String>,
    pub state: String,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
}

impl Issue {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.eq_ignore_ascii_case(label))
    }

    pub fn is_open(&self) -> bool {
        self.state.eq_ignore_ascii_case("open")
    }

    pub fn release_note(&self) -> ReleaseNote {
        ReleaseNote::new(self.id.clone(), self.title.clone(), self.url.clone())
    }
}

/// Row of `gh issue list --json number,title,url,state,assignees,labels`.
#[derive(Debug, Deserialize)]
pub(crate) struct GhIssue {
    number: u64,
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    state: String,
    #[serde(default)]
    assignees: Vec<GhUser>,
    #[serde(default)]
    labels: Vec<GhLabel>,
}

#[derive(Debug, Deserialize)]
struct GhUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GhLabel {
    name: String,
}

impl From<GhIssue> for Issue {
    fn from(gh: GhIssue) -> Self {
        Issue {
            id: gh.number.to_string(),
            number: Some(gh.number),
            title: gh.title,
            url: gh.url.filter(|u| !u.is_empty()),
            state: gh.state,
            assignee: gh.assignees.into_iter().next().map(|user| user.login),
            labels: gh.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}
