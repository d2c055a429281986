use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use relcheck_platform::{Platform, PlatformParseError};

use crate::error::CliError;
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "relcheck")]
#[command(version, about = "Check whether a newer release is available")]
pub struct Cli {
    /// Release endpoint returning the latest release as JSON
    #[arg(long)]
    pub url: Option<String>,

    /// Version tag of the running build
    #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
    pub current: String,

    /// Platform to look for in the release assets (macos, windows, linux or none)
    #[arg(long)]
    pub platform: Option<PlatformArg>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Read settings from this file instead of the user config directory
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// `--platform` value; `none` turns the asset scan off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformArg(pub Option<Platform>);

impl FromStr for PlatformArg {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            Ok(Self(None))
        } else {
            s.parse().map(|platform| Self(Some(platform)))
        }
    }
}

/// Everything one update check needs, with CLI flags taking precedence
/// over settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub release_url: String,
    pub current_tag: String,
    pub platform: Option<Platform>,
    pub http_timeout_secs: u64,
}

impl CheckRequest {
    /// # Errors
    /// Returns [`CliError::MissingReleaseUrl`] when neither the CLI nor the
    /// settings name a non-empty release URL.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self, CliError> {
        let release_url = cli
            .url
            .as_deref()
            .or(settings.release_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(CliError::MissingReleaseUrl)?;

        Ok(Self {
            release_url: release_url.to_string(),
            current_tag: cli.current.clone(),
            platform: cli.platform.map_or(settings.platform, |arg| arg.0),
            http_timeout_secs: settings.http_timeout_secs,
        })
    }
}
