use once_cell::sync::Lazy;
use regex::Regex;

/// Start of the section that follows a version block: another version header
/// or the document title.
pub static NEXT_SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:## \[|# Changelog)").expect("Failed to compile next section regex")
});

pub static FIRST_VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^## \[([^\]]+)\]\s*-").expect("Failed to compile version header regex")
});

pub const CHANGES_MARKER: &str = "### Changes";
