use crate::error::VersionError;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Project ecosystem whose files carry the version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Nodejs,
    Typescript,
    Python,
    Go,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Nodejs,
        Language::Typescript,
        Language::Python,
        Language::Go,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Nodejs => "nodejs",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Go => "go",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VersionError::UnsupportedLanguage(s.to_string()))
    }
}

/// Files touched by a version bump, per language.
pub const VERSION_FILES: [(Language, &[&str]); 4] = [
    (Language::Nodejs, &["package.json", "CHANGELOG.md"]),
    (Language::Typescript, &["package.json", "CHANGELOG.md"]),
    (
        Language::Python,
        &["pyproject.toml", "setup.py", "version_notes.md", "METADATA"],
    ),
    (Language::Go, &["VERSION", "go.mod", "CHANGELOG.md"]),
];

/// Every file name that counts as evidence of a version bump in commit history.
pub const ALL_VERSION_FILES: [&str; 10] = [
    "package.json",
    "CHANGELOG.md",
    "changelog.md",
    "pyproject.toml",
    "setup.py",
    "version_notes.md",
    "METADATA",
    "metadata",
    "VERSION",
    "go.mod",
];

pub fn version_files_for(language: Language) -> &'static [&'static str] {
    VERSION_FILES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, files)| *files)
        .unwrap_or(&[])
}

/// Case-insensitive match of a bare file name against [`ALL_VERSION_FILES`].
pub fn is_version_file(filename: &str) -> bool {
    ALL_VERSION_FILES
        .iter()
        .any(|file| file.eq_ignore_ascii_case(filename))
}

/// Scans `git log --oneline --name-only` output for a touched version file.
///
/// Paths are compared by their final component, so `pkg/go.mod` counts.
pub fn commit_log_mentions_version_file(log: &str) -> bool {
    log.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Path::new(line).file_name().and_then(|name| name.to_str()))
        .any(is_version_file)
}
