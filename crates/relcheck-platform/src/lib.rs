mod paths;
mod platform;

pub use paths::{AppPaths, AppPathsError};
pub use platform::{Platform, PlatformParseError};
