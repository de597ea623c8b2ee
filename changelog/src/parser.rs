//! Read-only queries over a changelog document.

use crate::error::Result;
use crate::position::locate_block;
use crate::regex_utils::build_release_date_pattern;
use crate::utils::{CHANGES_MARKER, FIRST_VERSION_PATTERN, NEXT_SECTION_PATTERN};

/// Returns the full text of the block for `version`, header included.
pub fn extract_block<'a>(content: &'a str, version: &str) -> Result<Option<&'a str>> {
    Ok(locate_block(content, version)?.map(|span| &content[span.start..span.end]))
}

/// Everything before the block for `version`.
///
/// Trailing blank lines are collapsed so the result ends with exactly one
/// blank line; a whitespace-only prefix becomes the empty string. `None` when
/// the version has no block.
pub fn content_before(content: &str, version: &str) -> Result<Option<String>> {
    let Some(span) = locate_block(content, version)? else {
        return Ok(None);
    };

    let before = &content[..span.start];
    if before.trim().is_empty() {
        return Ok(Some(String::new()));
    }
    Ok(Some(format!("{}\n\n", before.trim_end())))
}

/// Everything after the block for `version`.
///
/// Leading blank lines are collapsed to exactly one; a whitespace-only suffix
/// becomes the empty string. `None` when the version has no block.
pub fn content_after(content: &str, version: &str) -> Result<Option<String>> {
    let Some(span) = locate_block(content, version)? else {
        return Ok(None);
    };

    let after = &content[span.end..];
    if after.trim().is_empty() {
        return Ok(Some(String::new()));
    }
    Ok(Some(format!(
        "\n{}",
        after.trim_start_matches(['\n', '\r'])
    )))
}

/// Counts `* [..](..)` bullets under the `### Changes` marker of a block.
pub fn count_change_lines(block: &str) -> usize {
    let mut lines = block.lines().skip_while(|line| line.trim_end() != CHANGES_MARKER);
    if lines.next().is_none() {
        return 0;
    }

    lines
        .take_while(|line| !line.starts_with("## ") && !NEXT_SECTION_PATTERN.is_match(line))
        .map(str::trim)
        .filter(|line| line.starts_with("* [") && line.contains("]("))
        .count()
}

/// Version string of the topmost `## [<version>] -` header.
pub fn first_version(content: &str) -> Option<String> {
    FIRST_VERSION_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Date text recorded in the header for `version`.
pub fn release_date_for(content: &str, version: &str) -> Result<Option<String>> {
    let pattern = build_release_date_pattern(version)?;
    Ok(pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|date| !date.is_empty()))
}
