use chrono::{Local, NaiveDate};

use crate::types::ReleaseNote;

/// Renders a release date as e.g. `February 20, 2026`.
pub fn format_release_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Today's date in the local timezone, formatted for a version header.
pub fn today() -> String {
    format_release_date(Local::now().date_naive())
}

/// Builds a version block:
///
/// ```text
/// ## [1.2.0] - March 3, 2025
///
/// ### Changes
///
/// * [#12](https://example.com/12) - Fix crash
///
/// ```
///
/// The `### Changes` section is omitted when there are no notes.
pub fn build_entry(version: &str, release_date: &str, notes: &[ReleaseNote]) -> String {
    build_entry_with_message(version, release_date, None, notes)
}

/// Like [`build_entry`] with an optional free-form paragraph under the header.
pub fn build_entry_with_message(
    version: &str,
    release_date: &str,
    message: Option<&str>,
    notes: &[ReleaseNote],
) -> String {
    let mut entry = format!("## [{version}] - {release_date}\n\n");

    if let Some(message) = message.map(str::trim).filter(|m| !m.is_empty()) {
        entry.push_str(message);
        entry.push_str("\n\n");
    }

    if !notes.is_empty() {
        entry.push_str("### Changes\n\n");
        for note in notes {
            entry.push_str(&note.to_string());
            entry.push('\n');
        }
        entry.push('\n');
    }

    entry
}
