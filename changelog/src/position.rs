use crate::error::Result;
use crate::regex_utils::build_version_header_pattern;
use crate::utils::NEXT_SECTION_PATTERN;

/// Byte range of a version block inside a changelog document.
///
/// `start` is the first byte of the `## [<version>]` header. `end` is the
/// first byte of the next version header or `# Changelog` title, or the end
/// of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub start: usize,
    pub end: usize,
}

/// Locates the first block whose header names `version` exactly.
pub fn locate_block(content: &str, version: &str) -> Result<Option<BlockSpan>> {
    let header = build_version_header_pattern(version)?;
    let Some(found) = header.find(content) else {
        return Ok(None);
    };

    let end = NEXT_SECTION_PATTERN
        .find_at(content, found.end())
        .map_or(content.len(), |next| next.start());

    Ok(Some(BlockSpan {
        start: found.start(),
        end,
    }))
}
