use super::{VersionSource, read_optional, write_file};
use crate::error::{Result, ResultExt, VersionError};
use crate::types::ReleaseInfo;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::PathBuf;
use tracing::info;

static PYPROJECT_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"version\s*=\s*["']([^"']*)["']"#).expect("Failed to compile pyproject regex")
});

static SETUP_PY_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"version=['"][^'"]*['"]"#).expect("Failed to compile setup.py regex")
});

const PYPROJECT: &str = "pyproject.toml";
const SETUP_PY: &str = "setup.py";
const VERSION_NOTES: &str = "version_notes.md";
const METADATA: &str = "METADATA";
const FILES: &[&str] = &["pyproject.toml", "setup.py", "version_notes.md", "METADATA"];

/// `pyproject.toml` plus the optional `setup.py`, release notes and metadata marker.
pub struct PythonSource {
    root: PathBuf,
}

impl PythonSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_pyproject(&self) -> Result<String> {
        let path = self.root.join(PYPROJECT);
        fs::read_to_string(&path).with_context(|| format!("Reading {}", path.display()))
    }

    fn update_pyproject(&self, version: &str) -> Result<()> {
        let content = self.read_pyproject()?;
        let replacement = format!("version = \"{version}\"");
        let updated = PYPROJECT_VERSION.replace(&content, NoExpand(&replacement));
        write_file(self.root.join(PYPROJECT), &updated)
    }

    fn update_setup_py(&self, version: &str) -> Result<()> {
        let path = self.root.join(SETUP_PY);
        let Some(content) = read_optional(&path)? else {
            return Ok(());
        };
        let replacement = format!("version='{version}'");
        let updated = SETUP_PY_VERSION.replace(&content, NoExpand(&replacement));
        write_file(path, &updated)
    }

    fn update_version_notes(&self, release: &ReleaseInfo) -> Result<()> {
        let path = self.root.join(VERSION_NOTES);
        let existing = read_optional(&path)?.unwrap_or_default();
        let section = notes_section(release);
        write_file(path, &format!("{section}{existing}"))
    }

    fn update_metadata(&self, release_date: &str) -> Result<()> {
        write_file(
            self.root.join(METADATA),
            &format!("release_date={release_date}\n"),
        )
    }
}

/// `## <version>` section placed at the top of version_notes.md.
fn notes_section(release: &ReleaseInfo) -> String {
    let mut section = format!(
        "## {}\nReleased on: {}\n\n",
        release.version, release.release_date
    );
    if let Some(message) = release.message() {
        section.push_str(message.trim());
        section.push_str("\n\n");
    }
    for note in &release.notes {
        section.push_str(&note.to_string());
        section.push('\n');
    }
    section.push('\n');
    section
}

impl VersionSource for PythonSource {
    fn current_version(&self) -> Result<String> {
        let content = self.read_pyproject()?;
        PYPROJECT_VERSION
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                VersionError::not_found(
                    "version",
                    PYPROJECT,
                    Some("Add a line like version = \"0.1.0\" to pyproject.toml"),
                )
            })
    }

    fn update_version(&self, release: &ReleaseInfo) -> Result<()> {
        self.update_pyproject(&release.version)?;
        self.update_setup_py(&release.version)?;
        self.update_version_notes(release)?;
        self.update_metadata(&release.release_date)?;

        info!(version = %release.version, "updated Python version files");
        Ok(())
    }

    fn version_files(&self) -> &'static [&'static str] {
        FILES
    }
}
