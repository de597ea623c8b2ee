use crate::error::{ChangelogError, Result};
use crate::formatter::build_entry_with_message;
use crate::position::locate_block;
use crate::types::ReleaseNote;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CHANGELOG_FILENAME: &str = "CHANGELOG.md";

/// Title and description written at the top of a freshly created changelog.
pub const CHANGELOG_PREAMBLE: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n\
The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),\n\
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n";

/// Replaces the block for `version` with `new_entry`.
///
/// Text outside the replaced block is copied byte for byte. When the version
/// has no block yet, `new_entry` is placed at the top of the document followed
/// by one blank line; an empty document is seeded with [`CHANGELOG_PREAMBLE`].
pub fn upsert_version(document: &str, version: &str, new_entry: &str) -> Result<String> {
    if let Some(span) = locate_block(document, version)? {
        let after = &document[span.end..];
        let mut updated = String::with_capacity(document.len() + new_entry.len());
        updated.push_str(&document[..span.start]);
        updated.push_str(new_entry);
        if !after.is_empty() && !new_entry.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(after);
        return Ok(updated);
    }

    if document.trim().is_empty() {
        return Ok(format!("{CHANGELOG_PREAMBLE}{new_entry}"));
    }

    Ok(format!(
        "{}\n\n{document}",
        new_entry.trim_end_matches(['\n', '\r'])
    ))
}

/// A CHANGELOG.md file held in memory.
#[derive(Debug, Clone)]
pub struct Changelog {
    path: PathBuf,
    content: String,
}

impl Changelog {
    /// Reads `CHANGELOG.md` under `root`. A missing file reads as empty.
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(CHANGELOG_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(ChangelogError::ReadError(e)
                    .with_context(format!("Reading {}", path.display())));
            }
        };
        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn upsert(&mut self, version: &str, new_entry: &str) -> Result<()> {
        self.content = upsert_version(&self.content, version, new_entry)?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), "writing changelog");
        fs::write(&self.path, &self.content).map_err(|source| ChangelogError::WriteError {
            path: self.path.clone(),
            source,
        })
    }
}

/// Builds the entry for `version` and upserts it into `<root>/CHANGELOG.md`.
pub fn update_changelog_for_version(
    root: &Path,
    version: &str,
    release_date: &str,
    message: Option<&str>,
    notes: &[ReleaseNote],
) -> Result<PathBuf> {
    let mut changelog = Changelog::open(root)?;
    let entry = build_entry_with_message(version, release_date, message, notes);
    changelog.upsert(version, &entry)?;
    changelog.save()?;
    Ok(changelog.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::build_entry;
    use crate::parser::{count_change_lines, extract_block};
    use tempfile::TempDir;

    fn three_blocks() -> String {
        "# Changelog\n\nPreamble.\n\n\
## [0.1.3] - C\n\n### Changes\n\n* [#3](u3) - three\n\n\
## [0.1.2] - B\n\n### Changes\n\n* [#2](u2) - two\n* [#22](u22) - two more\n* [#222](u222) - old\n\n\
## [0.1.1] - A\n\nfirst release\n"
            .to_string()
    }

    #[test]
    fn reinserting_extracted_block_is_identity() {
        let doc = three_blocks();
        for version in ["0.1.3", "0.1.2", "0.1.1"] {
            let block = extract_block(&doc, version).unwrap().unwrap();
            assert_eq!(upsert_version(&doc, version, block).unwrap(), doc);
        }
    }

    #[test]
    fn replacing_middle_block_keeps_order_and_siblings() {
        let doc = three_blocks();
        let notes = vec![
            ReleaseNote::new("#5", "five", Some("u5".into())),
            ReleaseNote::new("#6", "six", None),
        ];
        let entry = build_entry("0.1.2", "Z", &notes);
        let updated = upsert_version(&doc, "0.1.2", &entry).unwrap();

        let v3 = updated.find("## [0.1.3]").unwrap();
        let v2 = updated.find("## [0.1.2] - Z").unwrap();
        let v1 = updated.find("## [0.1.1]").unwrap();
        assert!(v3 < v2 && v2 < v1);

        assert!(updated.contains(extract_block(&doc, "0.1.3").unwrap().unwrap()));
        assert!(updated.contains(extract_block(&doc, "0.1.1").unwrap().unwrap()));

        let block = extract_block(&updated, "0.1.2").unwrap().unwrap();
        assert_eq!(count_change_lines(block), 2);
        assert!(!block.contains("old"));
    }

    #[test]
    fn empty_document_is_seeded() {
        let notes = vec![ReleaseNote::new("1", "Fix X", Some("https://x/1".into()))];
        let entry = build_entry("0.1.0", "D", &notes);
        let seeded = upsert_version("", "0.1.0", &entry).unwrap();
        assert!(seeded.starts_with("# Changelog\n\n"));
        assert!(seeded.contains("## [0.1.0]"));
        assert!(seeded.contains("### Changes"));
        assert!(seeded.contains("* [1](https://x/1) - Fix X"));

        assert_eq!(upsert_version(" \n\n", "0.1.0", &entry).unwrap(), seeded);
    }

    #[test]
    fn new_version_goes_on_top_with_one_blank_line() {
        let doc = "## [1.0.0] - A\n\nold\n";
        let updated = upsert_version(doc, "1.1.0", "## [1.1.0] - B\n\n").unwrap();
        assert_eq!(updated, "## [1.1.0] - B\n\n## [1.0.0] - A\n\nold\n");
    }

    #[test]
    fn entry_without_trailing_newline_is_separated() {
        let doc = "## [2.0.0] - B\nx\n## [1.0.0] - A\n";
        let updated = upsert_version(doc, "2.0.0", "## [2.0.0] - C").unwrap();
        assert_eq!(updated, "## [2.0.0] - C\n## [1.0.0] - A\n");
    }

    #[test]
    fn update_creates_missing_changelog() {
        let dir = TempDir::new().unwrap();
        let path = update_changelog_for_version(dir.path(), "0.2.0", "June 1, 2025", None, &[])
            .unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with(CHANGELOG_PREAMBLE));
        assert!(written.ends_with("## [0.2.0] - June 1, 2025\n\n"));
    }

    #[test]
    fn update_replaces_existing_block_on_disk() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CHANGELOG_FILENAME), three_blocks()).unwrap();

        update_changelog_for_version(dir.path(), "0.1.1", "Later", Some("Patched"), &[]).unwrap();

        let changelog = Changelog::open(dir.path()).unwrap();
        let block = extract_block(changelog.content(), "0.1.1").unwrap().unwrap();
        assert_eq!(block, "## [0.1.1] - Later\n\nPatched\n\n");
        assert!(changelog.content().contains("Preamble."));
    }

    #[test]
    fn unreadable_changelog_propagates() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(CHANGELOG_FILENAME)).unwrap();
        assert!(Changelog::open(dir.path()).is_err());
    }
}
