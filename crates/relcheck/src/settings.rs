use std::path::Path;

use relcheck_platform::{AppPaths, Platform};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub release_url: Option<String>,

    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    #[serde(default = "Platform::current")]
    pub platform: Option<Platform>,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_true")]
    pub log_to_file: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

fn default_http_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            release_url: None,
            http_timeout_secs: default_http_timeout(),
            platform: Platform::current(),
            debug_logging: false,
            log_to_file: default_true(),
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

impl Settings {
    /// Load `settings.json` from the user config directory, falling back to
    /// defaults when it is absent or unreadable.
    #[must_use]
    pub fn load() -> Self {
        match AppPaths::new() {
            Ok(paths) => Self::load_from(&paths.settings_file()),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
