//! Keep-a-Changelog version blocks: locate, extract, count and replace a
//! `## [<version>] - <date>` section while leaving the rest of the document
//! untouched.

mod core;
pub mod error;
mod formatter;
mod parser;
mod position;
mod regex_utils;
mod types;
mod utils;

pub use crate::core::{
    CHANGELOG_FILENAME, CHANGELOG_PREAMBLE, Changelog, update_changelog_for_version,
    upsert_version,
};
pub use error::{ChangelogError, Result, ResultExt};
pub use formatter::{build_entry, build_entry_with_message, format_release_date, today};
pub use parser::{
    content_after, content_before, count_change_lines, extract_block, first_version,
    release_date_for,
};
pub use position::{BlockSpan, locate_block};
pub use types::ReleaseNote;
