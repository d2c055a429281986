use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no release URL configured; pass --url or set `release_url` in settings.json")]
    MissingReleaseUrl,
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error(transparent)]
    Check(#[from] relcheck_core::CheckError),
    #[error("failed to encode result as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
