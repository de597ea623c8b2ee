//! In-memory collaborators for command tests.

use git::{GitError, Repository};
use std::cell::RefCell;
use tracker::{Issue, IssueTracker, TrackerError};

#[derive(Default)]
pub struct FakeRepository {
    pub branch: RefCell<String>,
    pub clean: bool,
    pub log: String,
    pub name_status: String,
    pub fail_commit: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRepository {
    pub fn on(branch: &str) -> Self {
        Self {
            branch: RefCell::new(branch.to_string()),
            clean: true,
            ..Default::default()
        }
    }

    pub fn dirty(mut self) -> Self {
        self.clean = false;
        self
    }

    pub fn with_log(mut self, log: &str) -> Self {
        self.log = log.to_string();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Repository for FakeRepository {
    fn current_branch(&self) -> git::Result<String> {
        Ok(self.branch.borrow().clone())
    }

    fn is_working_tree_clean(&self) -> git::Result<bool> {
        Ok(self.clean)
    }

    fn checkout_branch(&self, name: &str) -> git::Result<()> {
        self.record(format!("checkout {name}"));
        *self.branch.borrow_mut() = name.to_string();
        Ok(())
    }

    fn create_branch(&self, name: &str) -> git::Result<()> {
        self.record(format!("create {name}"));
        *self.branch.borrow_mut() = name.to_string();
        Ok(())
    }

    fn pull(&self, remote: &str, branch: &str) -> git::Result<()> {
        self.record(format!("pull {remote} {branch}"));
        Ok(())
    }

    fn commits_since(&self, _base: &str) -> git::Result<String> {
        Ok(self.log.clone())
    }

    fn changes_since(&self, _base: &str) -> git::Result<String> {
        Ok(self.name_status.clone())
    }

    fn add(&self, paths: &[&str]) -> git::Result<()> {
        self.record(format!("add {}", paths.join(" ")));
        Ok(())
    }

    fn commit(&self, message: &str, no_verify: bool) -> git::Result<()> {
        self.record(format!("commit no_verify={no_verify} {message}"));
        if self.fail_commit {
            return Err(GitError::CommandFailed {
                command: "git commit".to_string(),
                stderr: "hook rejected".to_string(),
            });
        }
        Ok(())
    }

    fn remote_url(&self, _remote: &str) -> git::Result<Option<String>> {
        Ok(Some("git@github.com:acme/widgets.git".to_string()))
    }
}

#[derive(Default)]
pub struct FakeTracker {
    pub issues: Vec<Issue>,
    /// Ids whose close call fails.
    pub failing: Vec<String>,
    pub closed: RefCell<Vec<(String, String)>>,
}

impl FakeTracker {
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            ..Default::default()
        }
    }
}

impl IssueTracker for FakeTracker {
    fn fixed_issues(&self, user: Option<&str>) -> tracker::Result<Vec<Issue>> {
        Ok(self
            .issues
            .iter()
            .filter(|issue| user.is_none_or(|user| issue.assignee.as_deref() == Some(user)))
            .cloned()
            .collect())
    }

    fn close_issue(&self, issue: &Issue, version: &str) -> tracker::Result<()> {
        if self.failing.contains(&issue.id) {
            return Err(TrackerError::CloseFailed {
                id: issue.id.clone(),
                message: "HTTP 403".to_string(),
            });
        }
        self.closed
            .borrow_mut()
            .push((issue.id.clone(), version.to_string()));
        Ok(())
    }
}

pub fn issue(id: u64, title: &str, assignee: Option<&str>) -> Issue {
    Issue {
        id: id.to_string(),
        number: Some(id),
        title: title.to_string(),
        url: Some(format!("https://github.com/acme/widgets/issues/{id}")),
        state: "OPEN".to_string(),
        assignee: assignee.map(str::to_string),
        labels: vec!["fixed".to_string()],
    }
}
