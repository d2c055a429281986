//! Release checking for relcheck.
//!
//! - Version tag validation, parsing and comparison.
//! - Release-notes formatting for display.
//! - Fetching release metadata through a pluggable [`ReleaseSource`] and
//!   deciding whether an update is available.

mod check;
mod notes;
mod release;
mod tag;

/// Update check entry points and their result/error types.
pub use check::{CheckError, CheckResult, TagRole, check_latest_release, evaluate_release};
/// Release notes formatter.
pub use notes::format_release_notes;
/// Release metadata model and the HTTP collaborator.
pub use release::{FetchError, HttpReleaseSource, ReleaseAsset, ReleaseInfo, ReleaseSource};
/// Platform hint used for the asset availability scan.
pub use relcheck_platform::Platform;
/// Version tag model and comparison helpers.
pub use tag::{Comparison, VersionTag, compare, validate_tag_format};
