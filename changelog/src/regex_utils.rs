use crate::error::Result;
use regex::Regex;

/// `## [<version>]` anchored at a line start, with the version matched literally.
pub fn build_version_header_pattern(version: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?m)^## \[{}\]", regex::escape(version)))?)
}

/// `## [<version>] - <date>` capturing the date up to the end of the line.
pub fn build_release_date_pattern(version: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"(?m)^## \[{}\] - (.*)$",
        regex::escape(version)
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_metacharacters_match_literally() {
        let pattern = build_version_header_pattern("1.0.0+build.1").unwrap();
        assert!(pattern.is_match("## [1.0.0+build.1] - today"));
        assert!(!pattern.is_match("## [1x0x0+build.1] - today"));
        assert!(!pattern.is_match("## [1.0.00build.1] - today"));
    }

    #[test]
    fn header_must_start_a_line() {
        let pattern = build_version_header_pattern("1.0.0").unwrap();
        assert!(!pattern.is_match("text ## [1.0.0]"));
        assert!(pattern.is_match("intro\n## [1.0.0]"));
    }
}
