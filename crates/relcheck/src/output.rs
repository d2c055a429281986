use std::fmt::Write as _;

use relcheck_core::CheckResult;
use relcheck_platform::Platform;

use crate::error::CliError;

/// Render the outcome of a check for the terminal, or as JSON (`null` when
/// up to date).
///
/// # Errors
/// Returns an error if JSON encoding fails.
pub fn render(
    outcome: Option<&CheckResult>,
    current_tag: &str,
    platform: Option<Platform>,
    json: bool,
) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(&outcome)?);
    }

    let Some(update) = outcome else {
        return Ok(format!("relcheck is up to date ({current_tag})"));
    };

    let mut out = format!(
        "A new version is available: {} (running {current_tag})",
        update.latest_version
    );
    if let Some(url) = &update.release_url {
        let _ = write!(out, "\n{url}");
    }
    if let (Some(platform), Some(available)) = (platform, update.asset_available) {
        let state = if available {
            "available"
        } else {
            "not published yet"
        };
        let _ = write!(out, "\nDownload for {platform}: {state}");
    }
    if let Some(notes) = &update.release_notes {
        let _ = write!(out, "\n\n{notes}");
    }
    Ok(out)
}

/// The single line printed to stderr when a check fails.
#[must_use]
pub fn failure_message(err: &CliError) -> String {
    format!("error: {err}")
}
