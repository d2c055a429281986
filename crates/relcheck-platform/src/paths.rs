use std::path::PathBuf;
use thiserror::Error;

const APP_DIR_NAME: &str = "relcheck";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppPathsError {
    #[error("Could not determine home directory")]
    HomeDirUnavailable,
    #[error("Could not determine config directory")]
    ConfigDirUnavailable,
    #[error("Could not determine data directory")]
    DataDirUnavailable,
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the per-user directories relcheck reads settings from and
    /// writes its debug log to.
    ///
    /// # Errors
    /// Returns an error when the platform base directory cannot be determined.
    pub fn new() -> Result<Self, AppPathsError> {
        #[cfg(target_os = "macos")]
        {
            let support = dirs::home_dir()
                .ok_or(AppPathsError::HomeDirUnavailable)?
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
            Ok(Self {
                config_dir: support.clone(),
                data_dir: support,
            })
        }

        #[cfg(not(target_os = "macos"))]
        {
            Ok(Self {
                config_dir: dirs::config_dir()
                    .ok_or(AppPathsError::ConfigDirUnavailable)?
                    .join(APP_DIR_NAME),
                data_dir: dirs::data_dir()
                    .ok_or(AppPathsError::DataDirUnavailable)?
                    .join(APP_DIR_NAME),
            })
        }
    }

    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("debug.log")
    }

    /// Create the config and data directories if they are missing.
    ///
    /// # Errors
    /// Returns an error if either directory cannot be created.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AppPaths;

    fn paths_under(root: &std::path::Path) -> AppPaths {
        AppPaths {
            config_dir: root.join("cfg"),
            data_dir: root.join("state").join("relcheck"),
        }
    }

    #[test]
    fn files_are_named_inside_their_directories() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        let paths = paths_under(root.path());

        assert_eq!(paths.settings_file(), root.path().join("cfg").join("settings.json"));
        assert_eq!(
            paths.log_file(),
            root.path().join("state").join("relcheck").join("debug.log")
        );
    }

    #[test]
    fn ensure_dirs_creates_nested_directories() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        let paths = paths_under(root.path());

        paths.ensure_dirs().expect("directories should be created");
        paths.ensure_dirs().expect("existing directories should be accepted");

        assert!(paths.config_dir.is_dir());
        assert!(paths.data_dir.is_dir());
    }
}
