use std::fmt;

use log::debug;
use relcheck_platform::Platform;
use serde::Serialize;
use thiserror::Error;

use crate::notes::format_release_notes;
use crate::release::{FetchError, ReleaseInfo, ReleaseSource};
use crate::tag::{VersionTag, compare, validate_tag_format};

/// A newer release than the one running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Tag exactly as published, e.g. `"v1.5.0"`.
    pub latest_version: String,
    pub release_notes: Option<String>,
    /// Whether the release already ships an asset for the requested
    /// platform. `None` when no platform was given.
    pub asset_available: Option<bool>,
    pub release_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole {
    Current,
    Latest,
}

impl fmt::Display for TagRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "version tag"),
            Self::Latest => write!(f, "latest release tag"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("cannot get the release information: {0}")]
    Fetch(#[from] FetchError),
    #[error("cannot verify the format of {role}: {tag}")]
    Format { role: TagRole, tag: String },
}

impl CheckError {
    fn format(role: TagRole, tag: &str) -> Self {
        Self::Format {
            role,
            tag: tag.to_string(),
        }
    }
}

/// Ask `source` for the release at `release_url` and report it when it is
/// newer than `current_tag`.
///
/// Returns `Ok(None)` when the running version is up to date.
///
/// # Errors
/// Returns [`CheckError::Fetch`] when the release cannot be retrieved and
/// [`CheckError::Format`] when either tag is not a recognized version tag.
pub async fn check_latest_release(
    source: &dyn ReleaseSource,
    release_url: &str,
    current_tag: &str,
    platform: Option<Platform>,
) -> Result<Option<CheckResult>, CheckError> {
    let release = source.fetch_release(release_url).await?;
    evaluate_release(release, current_tag, platform)
}

/// The part of [`check_latest_release`] that runs once a release has been
/// fetched.
///
/// # Errors
/// Returns [`CheckError::Format`] when either tag is not a recognized
/// version tag.
pub fn evaluate_release(
    release: ReleaseInfo,
    current_tag: &str,
    platform: Option<Platform>,
) -> Result<Option<CheckResult>, CheckError> {
    if !validate_tag_format(current_tag) {
        return Err(CheckError::format(TagRole::Current, current_tag));
    }
    if !validate_tag_format(&release.tag_name) {
        return Err(CheckError::format(TagRole::Latest, &release.tag_name));
    }

    let current = VersionTag::parse(current_tag);
    let latest = VersionTag::parse(&release.tag_name);

    if !compare(&current, &latest).is_newer {
        debug!(
            "Already up to date: running {current_tag}, latest {}",
            release.tag_name
        );
        return Ok(None);
    }

    let asset_available = platform.map(|platform| {
        let found = release.has_asset_matching(platform.asset_search_term());
        debug!("Release asset for {platform} available: {found}");
        found
    });

    debug!("A new version is available: {}", release.tag_name);

    Ok(Some(CheckResult {
        release_notes: format_release_notes(release.body.as_deref()),
        latest_version: release.tag_name,
        asset_available,
        release_url: release.html_url,
    }))
}
