use std::fmt;
use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;

static TAG_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v?[0-9]+\.[0-9]+(\.[0-9]+)?(-rc[0-9])?$")
        .expect("tag format pattern should compile")
});

/// A release tag split into its numeric components and optional
/// pre-release label (`"v2.5.1-rc2"` has label `"rc2"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub label: Option<String>,
}

/// Outcome of comparing a running version against a published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub is_newer: bool,
}

/// Whether `tag` has a shape relcheck knows how to compare: an optional
/// `v`, `major.minor`, an optional `.patch` and an optional `-rcN`.
#[must_use]
pub fn validate_tag_format(tag: &str) -> bool {
    TAG_FORMAT.is_match(tag)
}

impl VersionTag {
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            label: None,
        }
    }

    /// Split a tag into components without checking its format first.
    ///
    /// Components that are missing or not numeric become `0`. Call
    /// [`validate_tag_format`] beforehand, or use [`VersionTag::parse_checked`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let (numbers, label) = match tag.split_once('-') {
            Some((numbers, label)) if !label.is_empty() => (numbers, Some(label.to_string())),
            Some((numbers, _)) => (numbers, None),
            None => (tag, None),
        };
        let numbers = numbers.strip_prefix(['v', 'V']).unwrap_or(numbers);

        let mut parts = numbers.split('.').map(parse_component);
        let major = parts.next().unwrap_or(0);
        let minor = parts.next().unwrap_or(0);
        let patch = parts.next().unwrap_or(0);

        Self {
            major,
            minor,
            patch,
            label,
        }
    }

    #[must_use]
    pub fn parse_checked(tag: &str) -> Option<Self> {
        validate_tag_format(tag).then(|| Self::parse(tag))
    }

    /// Only `major.minor` decides whether a release counts as newer; patch
    /// and label changes never trigger an update notice.
    #[must_use]
    pub fn is_newer_than(&self, current: &Self) -> bool {
        (self.major, self.minor) > (current.major, current.minor)
    }
}

/// Components too large for `u64` saturate so they still order above
/// every smaller release.
fn parse_component(part: &str) -> u64 {
    match part.parse::<u64>() {
        Ok(value) => value,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

#[must_use]
pub fn compare(current: &VersionTag, latest: &VersionTag) -> Comparison {
    Comparison {
        is_newer: latest.is_newer_than(current),
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(label) = &self.label {
            write!(f, "-{label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_tag_shapes() {
        for tag in ["1.2", "1.2.3", "v1.2.3", "V1.2.3-rc4", "v10.0-RC1", "0.0.0"] {
            assert!(validate_tag_format(tag), "{tag} should be accepted");
        }
    }

    #[test]
    fn rejects_unsupported_tag_shapes() {
        for tag in [
            "1",
            "1.2.3.4",
            "abc",
            "",
            "v",
            "1.2-rc",
            "1.2-rc10",
            "1.2-beta1",
            "1.x",
            " 1.2",
            "vv1.2",
            "1.2.",
        ] {
            assert!(!validate_tag_format(tag), "{tag:?} should be rejected");
        }
    }

    #[test]
    fn parses_full_tag_with_label() {
        assert_eq!(
            VersionTag::parse("v2.5.1-rc2"),
            VersionTag {
                major: 2,
                minor: 5,
                patch: 1,
                label: Some("rc2".to_string()),
            }
        );
    }

    #[test]
    fn missing_patch_defaults_to_zero() {
        assert_eq!(VersionTag::parse("3.0"), VersionTag::new(3, 0, 0));
        assert_eq!(VersionTag::parse("V7.4"), VersionTag::new(7, 4, 0));
    }

    #[test]
    fn parse_checked_refuses_invalid_tags() {
        assert_eq!(VersionTag::parse_checked("1"), None);
        assert_eq!(
            VersionTag::parse_checked("v1.2"),
            Some(VersionTag::new(1, 2, 0))
        );
    }

    #[test]
    fn minor_components_compare_numerically() {
        let current = VersionTag::parse("1.9.9");
        let latest = VersionTag::parse("1.10.0");

        assert!(compare(&current, &latest).is_newer);
        assert!(!compare(&latest, &current).is_newer);
    }

    #[test]
    fn major_bump_is_newer_even_with_lower_minor() {
        let current = VersionTag::parse("1.9.0");
        let latest = VersionTag::parse("2.0.0");

        assert!(compare(&current, &latest).is_newer);
    }

    #[test]
    fn patch_and_label_are_ignored() {
        let current = VersionTag::parse("2.0.0");

        assert!(!compare(&current, &VersionTag::parse("2.0.5")).is_newer);
        assert!(!compare(&current, &VersionTag::parse("2.0.0-rc1")).is_newer);
        assert!(!compare(&VersionTag::parse("2.0.0-rc1"), &current).is_newer);
        assert!(!compare(&current, &current).is_newer);
    }

    #[test]
    fn older_release_is_not_newer() {
        let current = VersionTag::parse("v3.2.0");

        assert!(!compare(&current, &VersionTag::parse("v3.1.9")).is_newer);
        assert!(!compare(&current, &VersionTag::parse("v2.9.0")).is_newer);
    }

    #[test]
    fn oversized_components_saturate_instead_of_resetting() {
        let tag = "v99999999999999999999.0";
        assert!(validate_tag_format(tag));

        let latest = VersionTag::parse(tag);
        assert_eq!(latest.major, u64::MAX);
        assert!(compare(&VersionTag::parse("v1.4.0"), &latest).is_newer);
    }

    #[test]
    fn non_numeric_components_fall_back_to_zero() {
        assert_eq!(VersionTag::parse("vx.7"), VersionTag::new(0, 7, 0));
        assert_eq!(VersionTag::parse("2..1"), VersionTag::new(2, 0, 1));
    }

    #[test]
    fn display_includes_label_when_present() {
        assert_eq!(VersionTag::parse("v1.4-rc3").to_string(), "1.4.0-rc3");
        assert_eq!(VersionTag::new(1, 2, 3).to_string(), "1.2.3");
    }
}
