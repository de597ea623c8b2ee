use super::{VersionSource, write_file};
use crate::error::{Result, ResultExt, VersionError};
use crate::types::ReleaseInfo;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const PACKAGE_JSON: &str = "package.json";
const FILES: &[&str] = &["package.json", "CHANGELOG.md"];

/// `package.json` manifest plus CHANGELOG.md.
pub struct NodeSource {
    root: PathBuf,
}

impl NodeSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_manifest(&self) -> Result<Value> {
        let path = self.root.join(PACKAGE_JSON);
        let content =
            fs::read_to_string(&path).with_context(|| format!("Reading {}", path.display()))?;
        serde_json::from_str(&content)
            .map_err(|e| VersionError::ParseFileError(format!("Failed to parse {PACKAGE_JSON}: {e}")))
    }
}

impl VersionSource for NodeSource {
    fn current_version(&self) -> Result<String> {
        let manifest = self.read_manifest()?;
        manifest
            .get("version")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                VersionError::not_found(
                    "version",
                    PACKAGE_JSON,
                    Some("Add a \"version\" field to package.json, e.g. \"version\": \"0.1.0\""),
                )
            })
    }

    fn update_version(&self, release: &ReleaseInfo) -> Result<()> {
        let mut manifest = self.read_manifest()?;
        let Some(fields) = manifest.as_object_mut() else {
            return Err(VersionError::ParseFileError(format!(
                "{PACKAGE_JSON} is not a JSON object"
            )));
        };
        fields.insert("version".to_string(), Value::String(release.version.clone()));

        let rendered = serde_json::to_string_pretty(&manifest)
            .map_err(|e| VersionError::ParseFileError(e.to_string()))?;
        write_file(self.root.join(PACKAGE_JSON), &format!("{rendered}\n"))?;

        changelog::update_changelog_for_version(
            &self.root,
            &release.version,
            &release.release_date,
            release.message(),
            &release.notes,
        )?;

        info!(version = %release.version, "updated package.json and CHANGELOG.md");
        Ok(())
    }

    fn version_files(&self) -> &'static [&'static str] {
        FILES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog::ReleaseNote;
    use tempfile::TempDir;

    fn project(manifest: &str) -> (TempDir, NodeSource) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PACKAGE_JSON), manifest).unwrap();
        let source = NodeSource::new(dir.path());
        (dir, source)
    }

    #[test]
    fn reads_version_field() {
        let (_dir, source) = project(r#"{"name": "demo", "version": "1.4.2"}"#);
        assert_eq!(source.current_version().unwrap(), "1.4.2");
    }

    #[test]
    fn missing_field_names_field_and_file() {
        let (_dir, source) = project(r#"{"name": "demo"}"#);
        let err = source.current_version().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("version"));
        assert!(message.contains("package.json"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn empty_version_is_not_found() {
        let (_dir, source) = project(r#"{"version": ""}"#);
        assert!(matches!(
            source.current_version(),
            Err(VersionError::VersionNotFound { .. })
        ));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(NodeSource::new(dir.path()).current_version().is_err());
    }

    #[test]
    fn write_then_read_round_trips_suffixed_versions() {
        let (_dir, source) = project(r#"{"name": "demo", "version": "0.1.0"}"#);
        for version in ["0.2.0", "1.0.0-beta.2", "1.0.0+build.9", "2.0.0-rc.1+sha.5114f85"] {
            source
                .update_version(&ReleaseInfo::new(version, "May 1, 2025"))
                .unwrap();
            assert_eq!(source.current_version().unwrap(), version);
        }
    }

    #[test]
    fn update_keeps_key_order_and_indentation() {
        let (dir, source) = project(
            "{\n  \"name\": \"demo\",\n  \"version\": \"0.1.0\",\n  \"scripts\": {\n    \"test\": \"jest\"\n  }\n}\n",
        );
        source
            .update_version(&ReleaseInfo::new("0.1.1", "May 1, 2025"))
            .unwrap();

        let written = fs::read_to_string(dir.path().join(PACKAGE_JSON)).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"demo\",\n  \"version\": \"0.1.1\",\n  \"scripts\": {\n    \"test\": \"jest\"\n  }\n}\n"
        );
    }

    #[test]
    fn update_writes_changelog_entry() {
        let (dir, source) = project(r#"{"version": "0.1.0"}"#);
        let release = ReleaseInfo::new("0.1.1", "May 1, 2025")
            .with_message("Bug fixes")
            .with_notes(vec![ReleaseNote::new("#4", "Fix crash", None)]);
        source.update_version(&release).unwrap();

        let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
        assert!(changelog.starts_with("# Changelog"));
        assert!(changelog.contains("## [0.1.1] - May 1, 2025\n\nBug fixes\n\n### Changes\n\n* [#4](#) - Fix crash\n"));
    }
}
