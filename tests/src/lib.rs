//! Fixture builders shared by the cross-crate integration tests.

use changelog::ReleaseNote;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> &Self {
        fs::write(self.root().join(name), content).expect("write fixture file");
        self
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root().join(name)).expect("read fixture file")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.root().join(name).exists()
    }

    pub fn node(version: &str) -> Self {
        let project = Self::new();
        project.write(
            "package.json",
            &format!(
                "{{\n  \"name\": \"widgets\",\n  \"version\": \"{version}\",\n  \"private\": true\n}}\n"
            ),
        );
        project
    }

    pub fn python(version: &str) -> Self {
        let project = Self::new();
        project.write(
            "pyproject.toml",
            &format!("[project]\nname = \"widgets\"\nversion = \"{version}\"\n"),
        );
        project
    }

    pub fn go(version_file: &str, go_mod: Option<&str>) -> Self {
        let project = Self::new();
        project.write("VERSION", version_file);
        if let Some(go_mod) = go_mod {
            project.write("go.mod", go_mod);
        }
        project
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

pub fn note(id: &str, title: &str, url: &str) -> ReleaseNote {
    ReleaseNote::new(id, title, Some(url.to_string()))
}

/// A changelog with one block per version, newest first, each holding one
/// note titled after its version.
pub fn changelog_with(versions: &[&str]) -> String {
    let mut doc = String::from("# Changelog\n\nRelease history.\n\n");
    for version in versions {
        doc.push_str(&changelog::build_entry(
            version,
            "January 1, 2026",
            &[note(version, &format!("change in {version}"), "#")],
        ));
    }
    doc
}

/// Byte offset of the `## [<version>]` header.
pub fn header_position(doc: &str, version: &str) -> Option<usize> {
    doc.find(&format!("## [{version}]"))
}
