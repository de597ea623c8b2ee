use crate::error::Result;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const BUNDLED_CHANGELOG: &str = include_str!("../../CHANGELOG.md");

pub fn execute() -> Result<()> {
    println!("{}", version_line(BUNDLED_CHANGELOG, PKG_VERSION)?);
    Ok(())
}

/// `sdlc/<version>`, with the release date when the changelog records one.
pub(crate) fn version_line(changelog_text: &str, version: &str) -> Result<String> {
    Ok(match changelog::release_date_for(changelog_text, version)? {
        Some(date) => format!("sdlc/{version} ({date})"),
        None => format!("sdlc/{version}"),
    })
}
