use crate::error::{Result, ResultExt};
use config::Config;
use git::{RealGitRepository, Repository};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracker::{IssueTracker, TrackerKind};
use version::{Language, VersionSource};

/// Project root plus its resolved `.sdlc.json`.
pub struct Context {
    root: PathBuf,
    config: Config,
}

impl Context {
    pub fn load(root: PathBuf) -> Result<Self> {
        let config = config::resolve(&root)
            .with_context(|| format!("Loading configuration from {}", root.display()))?;
        debug!(root = %root.display(), language = %config.language.value, "resolved project context");
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Flag, then config file, then the default.
    pub fn language(&self, flag: Option<Language>) -> Result<Language> {
        match flag {
            Some(language) => Ok(language),
            None => Ok(self.config.language.value.parse::<Language>()?),
        }
    }

    pub fn tracker_kind(&self, flag: Option<&str>) -> Result<TrackerKind> {
        let tag = flag.unwrap_or(&self.config.tracker.value);
        Ok(tag.parse::<TrackerKind>()?)
    }

    pub fn repository(&self) -> Result<RealGitRepository> {
        Ok(RealGitRepository::open(&self.root)?)
    }

    pub fn version_source(&self, flag: Option<Language>) -> Result<Box<dyn VersionSource>> {
        Ok(version::version_source(self.language(flag)?, &self.root))
    }

    pub fn issue_tracker(
        &self,
        flag: Option<&str>,
        repo: &dyn Repository,
    ) -> Result<Box<dyn IssueTracker>> {
        let kind = self.tracker_kind(flag)?;
        Ok(tracker::issue_tracker(
            kind,
            self.config.repo.as_deref(),
            repo,
            &self.root,
        )?)
    }
}
