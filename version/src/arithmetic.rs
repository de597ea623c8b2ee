use crate::error::{Result, VersionError};
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version as SemverVersion;
use std::fmt;
use std::str::FromStr;

static SEMANTIC_VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-[a-zA-Z0-9.-]+)?(\+[a-zA-Z0-9.-]+)?$")
        .expect("Failed to compile semantic version regex")
});

/// `major.minor.patch` with no pre-release or build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTuple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl FromStr for VersionTuple {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = SemverVersion::parse(s.trim())
            .map_err(|e| VersionError::ParseError(e).with_context(format!("Version '{s}'")))?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(VersionError::InvalidVersion {
                version: s.to_string(),
                reason: "expected major.minor.patch without pre-release or build metadata"
                    .to_string(),
            });
        }

        Ok(Self {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
        })
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Explicit component values requested for the next version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpOverrides {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

impl BumpOverrides {
    pub fn is_empty(&self) -> bool {
        self.major.is_none() && self.minor.is_none() && self.patch.is_none()
    }
}

/// Computes the next version string.
///
/// An explicit version is returned verbatim. Otherwise each component comes
/// from `overrides` when given; the patch defaults to `current.patch + 1`.
/// Overriding major or minor leaves the lower components as they are.
pub fn compute_next(
    current: &str,
    overrides: BumpOverrides,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(explicit) = explicit {
        if !overrides.is_empty() {
            return Err(VersionError::ConflictingOverrides);
        }
        return Ok(explicit.to_string());
    }

    let parsed: VersionTuple = current.parse()?;
    let patch = match overrides.patch {
        Some(patch) => patch,
        None => parsed
            .patch
            .checked_add(1)
            .ok_or_else(|| VersionError::InvalidVersion {
                version: current.to_string(),
                reason: "patch component overflows".to_string(),
            })?,
    };
    let next = VersionTuple {
        major: overrides.major.unwrap_or(parsed.major),
        minor: overrides.minor.unwrap_or(parsed.minor),
        patch,
    };
    Ok(next.to_string())
}

/// Accepts `M.m.p` with optional `-prerelease` and `+build` suffixes.
pub fn validate_semantic_version(version: &str) -> Result<()> {
    if SEMANTIC_VERSION_PATTERN.is_match(version) {
        Ok(())
    } else {
        Err(VersionError::InvalidVersion {
            version: version.to_string(),
            reason: "expected semantic version like 1.2.3, 1.2.3-beta.1 or 1.2.3+build.5"
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_patch_bump() {
        assert_eq!(compute_next("1.0.0", BumpOverrides::default(), None).unwrap(), "1.0.1");
    }

    #[test]
    fn patch_at_u64_max_is_an_error() {
        let current = format!("1.2.{}", u64::MAX);
        let err = compute_next(&current, BumpOverrides::default(), None).unwrap_err();
        assert!(matches!(
            err,
            VersionError::InvalidVersion { ref version, ref reason }
                if *version == current && reason == "patch component overflows"
        ));

        let overrides = BumpOverrides {
            patch: Some(0),
            ..Default::default()
        };
        assert_eq!(compute_next(&current, overrides, None).unwrap(), "1.2.0");
    }

    #[test]
    fn major_override_does_not_reset_minor_or_patch() {
        let overrides = BumpOverrides {
            major: Some(2),
            ..Default::default()
        };
        assert_eq!(compute_next("1.2.3", overrides, None).unwrap(), "2.2.3");
    }

    #[test]
    fn minor_override_keeps_patch() {
        let overrides = BumpOverrides {
            minor: Some(5),
            ..Default::default()
        };
        assert_eq!(compute_next("1.2.3", overrides, None).unwrap(), "1.5.3");
    }

    #[test]
    fn all_overrides_replace_everything() {
        let overrides = BumpOverrides {
            major: Some(3),
            minor: Some(0),
            patch: Some(0),
        };
        assert_eq!(compute_next("1.2.3", overrides, None).unwrap(), "3.0.0");
    }

    #[test]
    fn explicit_version_is_verbatim() {
        assert_eq!(
            compute_next("1.2.3", BumpOverrides::default(), Some("4.0.0-rc.1")).unwrap(),
            "4.0.0-rc.1"
        );
    }

    #[test]
    fn explicit_with_override_is_rejected() {
        let overrides = BumpOverrides {
            patch: Some(9),
            ..Default::default()
        };
        assert!(matches!(
            compute_next("1.2.3", overrides, Some("2.0.0")),
            Err(VersionError::ConflictingOverrides)
        ));
    }

    #[test]
    fn current_must_be_plain_triple() {
        assert!(compute_next("1.2", BumpOverrides::default(), None).is_err());
        assert!(compute_next("1.2.3-beta", BumpOverrides::default(), None).is_err());
        assert!(compute_next("v1.2.3", BumpOverrides::default(), None).is_err());
    }

    #[test]
    fn semantic_version_validation() {
        for ok in ["1.2.3", "0.0.1-alpha", "1.0.0-rc.1+build.7", "10.20.30+meta"] {
            assert!(validate_semantic_version(ok).is_ok(), "{ok}");
        }
        for bad in ["1.2", "v1.2.3", "1.2.3-", "1.2.3 ", "a.b.c"] {
            assert!(validate_semantic_version(bad).is_err(), "{bad}");
        }
    }
}
