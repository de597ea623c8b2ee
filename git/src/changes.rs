use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub status: ChangeStatus,
    pub path: String,
}

/// Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeCategory {
    CliCommands,
    LibraryCode,
    Documentation,
    Tests,
    Configuration,
    VersionManagement,
    OtherFiles,
}

impl ChangeCategory {
    pub fn for_path(path: &str) -> Self {
        if path.starts_with("src/commands/") || path.contains("/commands/") {
            Self::CliCommands
        } else if path.starts_with("src/lib/") || path.contains("/lib/") {
            Self::LibraryCode
        } else if path.starts_with("docs/") {
            Self::Documentation
        } else if path.contains("test") || path.contains("spec") {
            Self::Tests
        } else if is_config_file(path) {
            Self::Configuration
        } else if path.contains("version") || path.contains("CHANGELOG") {
            Self::VersionManagement
        } else {
            Self::OtherFiles
        }
    }
}

fn is_config_file(path: &str) -> bool {
    path.contains("package.json")
        || path.contains("tsconfig.json")
        || path.ends_with(".config.js")
        || path.ends_with(".config.ts")
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CliCommands => "CLI Commands",
            Self::LibraryCode => "Library Code",
            Self::Documentation => "Documentation",
            Self::Tests => "Tests",
            Self::Configuration => "Configuration",
            Self::VersionManagement => "Version Management",
            Self::OtherFiles => "Other Files",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryChanges {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
}

/// Parses `git diff --name-status` output.
///
/// Renames and copies count as a modification of the new path; other status
/// letters are skipped.
pub fn parse_name_status(output: &str) -> Vec<FileChange> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut parts = line.split('\t');
            let code = parts.next()?.chars().next()?;
            let path = parts.last()?.trim().to_string();
            let status = match code {
                'A' => ChangeStatus::Added,
                'M' | 'R' | 'C' => ChangeStatus::Modified,
                'D' => ChangeStatus::Deleted,
                _ => return None,
            };
            Some(FileChange { status, path })
        })
        .collect()
}

/// Groups changed files by category, in display order.
pub fn categorize_changes(changes: &[FileChange]) -> BTreeMap<ChangeCategory, CategoryChanges> {
    let mut categorized: BTreeMap<ChangeCategory, CategoryChanges> = BTreeMap::new();
    for change in changes {
        let bucket = categorized
            .entry(ChangeCategory::for_path(&change.path))
            .or_default();
        let list = match change.status {
            ChangeStatus::Added => &mut bucket.added,
            ChangeStatus::Modified => &mut bucket.modified,
            ChangeStatus::Deleted => &mut bucket.deleted,
        };
        list.push(change.path.clone());
    }
    categorized
}
