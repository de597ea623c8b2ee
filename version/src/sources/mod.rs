use crate::error::Result;
use crate::language::Language;
use crate::types::ReleaseInfo;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

mod go;
mod node;
mod python;

pub use go::GoSource;
pub use node::NodeSource;
pub use python::PythonSource;

/// Reads and writes a project's version across its ecosystem-specific files.
pub trait VersionSource {
    /// Current version from the primary source file
    ///
    /// # Errors
    /// `VersionNotFound` when the primary source has no usable version
    fn current_version(&self) -> Result<String>;

    /// Writes `release.version` to every file this ecosystem tracks
    ///
    /// # Errors
    /// Returns error if a required file cannot be read or written
    fn update_version(&self, release: &ReleaseInfo) -> Result<()>;

    /// File names a version bump touches, relative to the project root.
    fn version_files(&self) -> &'static [&'static str];
}

/// Picks the version source for `language`, rooted at `root`.
pub fn version_source(language: Language, root: &Path) -> Box<dyn VersionSource> {
    let root = root.to_path_buf();
    match language {
        Language::Nodejs | Language::Typescript => Box::new(NodeSource::new(root)),
        Language::Python => Box::new(PythonSource::new(root)),
        Language::Go => Box::new(GoSource::new(root)),
    }
}

/// Reads a file that is allowed to be missing.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn write_file(path: PathBuf, content: &str) -> Result<()> {
    debug!(path = %path.display(), "writing version file");
    fs::write(&path, content)?;
    Ok(())
}
