//! Per-ecosystem version sources and version arithmetic.

mod arithmetic;
pub mod error;
mod language;
mod sources;
mod types;

pub use arithmetic::{BumpOverrides, VersionTuple, compute_next, validate_semantic_version};
pub use error::{Result, ResultExt, VersionError};
pub use language::{
    ALL_VERSION_FILES, Language, VERSION_FILES, commit_log_mentions_version_file,
    is_version_file, version_files_for,
};
pub use sources::{GoSource, NodeSource, PythonSource, VersionSource, version_source};
pub use types::ReleaseInfo;
