use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Desktop platform a release asset can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform `{0}`, expected one of: macos, windows, linux")]
pub struct PlatformParseError(pub String);

impl Platform {
    /// The platform relcheck was compiled for, if it is one we publish
    /// assets for.
    #[must_use]
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }

    /// Substring that identifies this platform's asset in a release.
    #[must_use]
    pub fn asset_search_term(self) -> &'static str {
        match self {
            Self::MacOs => "osx",
            Self::Windows => "win",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macos" | "osx" | "darwin" => Ok(Self::MacOs),
            "windows" | "win" | "win32" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            _ => Err(PlatformParseError(s.to_string())),
        }
    }
}
