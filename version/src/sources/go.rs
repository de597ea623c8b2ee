use super::{VersionSource, read_optional, write_file};
use crate::error::{Result, VersionError};
use crate::types::ReleaseInfo;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::path::PathBuf;
use tracing::info;

static GO_MOD_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)//\s*version\s+(\S+)").expect("Failed to compile go.mod version regex")
});

static GO_MOD_VERSION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)//\s*version\s+[^\n]+").expect("Failed to compile go.mod version line regex")
});

const VERSION_FILE: &str = "VERSION";
const GO_MOD: &str = "go.mod";
const FILES: &[&str] = &["VERSION", "go.mod", "CHANGELOG.md"];

/// Bare `VERSION` file with a `// version x.y.z` comment in go.mod as fallback.
pub struct GoSource {
    root: PathBuf,
}

impl GoSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn update_go_mod(&self, version: &str) -> Result<()> {
        let path = self.root.join(GO_MOD);
        let Some(content) = read_optional(&path)? else {
            return Ok(());
        };

        let comment = format!("// version {version}");
        let updated = if GO_MOD_VERSION_LINE.is_match(&content) {
            GO_MOD_VERSION_LINE
                .replace(&content, NoExpand(&comment))
                .into_owned()
        } else {
            format!("{}\n{comment}\n", content.trim_end())
        };
        write_file(path, &updated)
    }
}

impl VersionSource for GoSource {
    fn current_version(&self) -> Result<String> {
        if let Some(content) = read_optional(&self.root.join(VERSION_FILE))? {
            let version = content.trim();
            if !version.is_empty() {
                return Ok(version.to_string());
            }
        }

        read_optional(&self.root.join(GO_MOD))?
            .and_then(|content| {
                GO_MOD_VERSION
                    .captures(&content)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
            })
            .ok_or_else(|| {
                VersionError::not_found(
                    "version",
                    "VERSION file or go.mod",
                    Some(
                        "Create a VERSION file or add a version comment to go.mod (e.g., // version 1.2.3)",
                    ),
                )
            })
    }

    fn update_version(&self, release: &ReleaseInfo) -> Result<()> {
        write_file(
            self.root.join(VERSION_FILE),
            &format!("{}\n", release.version),
        )?;
        self.update_go_mod(&release.version)?;

        changelog::update_changelog_for_version(
            &self.root,
            &release.version,
            &release.release_date,
            release.message(),
            &release.notes,
        )?;

        info!(version = %release.version, "updated VERSION, go.mod and CHANGELOG.md");
        Ok(())
    }

    fn version_files(&self) -> &'static [&'static str] {
        FILES
    }
}
