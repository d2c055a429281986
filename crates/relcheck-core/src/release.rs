use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

const USER_AGENT: &str = "relcheck";
const BODY_SNIPPET_CHARS: usize = 160;

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
}

/// Release metadata as published by the release endpoint (GitHub's
/// "latest release" shape; unknown fields are ignored).
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl ReleaseInfo {
    /// Whether any asset name contains `search_term`.
    #[must_use]
    pub fn has_asset_matching(&self, search_term: &str) -> bool {
        self.assets.iter().any(|asset| asset.name.contains(search_term))
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("release endpoint returned HTTP {status}{body_snippet}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body_snippet: String,
    },
    #[error("failed to parse release response: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Where release metadata comes from.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn fetch_release(&self, url: &str) -> Result<ReleaseInfo, FetchError>;
}

/// [`ReleaseSource`] backed by a plain HTTP GET.
///
/// Timeouts, proxies and TLS settings belong to the `reqwest::Client` that
/// is passed in; requests are never retried.
#[derive(Debug, Clone)]
pub struct HttpReleaseSource {
    client: reqwest::Client,
}

impl HttpReleaseSource {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReleaseSource for HttpReleaseSource {
    async fn fetch_release(&self, url: &str) -> Result<ReleaseInfo, FetchError> {
        debug!("Retrieving latest release information from {url}");

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_snippet = response
                .text()
                .await
                .ok()
                .map(|body| response_snippet(&body, BODY_SNIPPET_CHARS))
                .unwrap_or_default();
            return Err(FetchError::HttpStatus {
                status,
                body_snippet,
            });
        }

        let release: ReleaseInfo = response.json().await.map_err(FetchError::Parse)?;
        debug!(
            "Latest release: {}",
            release.name.as_deref().unwrap_or(&release.tag_name)
        );
        Ok(release)
    }
}

fn response_snippet(body: &str, max_chars: usize) -> String {
    let snippet: String = body.chars().take(max_chars).collect();
    if snippet.is_empty() {
        String::new()
    } else {
        format!(": {snippet}")
    }
}
