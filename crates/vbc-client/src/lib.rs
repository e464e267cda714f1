//! VerificaBC API client
//!
//! Thin wrapper over `reqwest` for the one call the checker makes:
//! `POST {base_url}/api/v1/checks`. No retries, no caching. Works natively
//! and in the browser, where reqwest goes through `fetch`.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;
use vbc_core::{CheckApi, CheckRequest, CheckResult};

/// Backend used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "VBC_API_BASE_URL";

const CHECKS_PATH: &str = "/api/v1/checks";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix of the backend
    pub base_url: String,
    /// User agent sent by native builds
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("vbc/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Client for the checks endpoint
#[derive(Debug, Clone)]
pub struct CheckClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CheckClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let endpoint = checks_endpoint(&config.base_url)?;

        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Ok(Self { http, endpoint })
    }

    /// Full URL of the checks endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a check. Any non-2xx status is an error.
    pub async fn check(&self, request: &CheckRequest) -> ClientResult<CheckResult> {
        tracing::debug!("POST {} ({})", self.endpoint, request.raw_input);

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Check endpoint returned {}", status);
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl CheckApi for CheckClient {
    type Error = ClientError;

    async fn check(&self, request: &CheckRequest) -> ClientResult<CheckResult> {
        CheckClient::check(self, request).await
    }
}

fn checks_endpoint(base_url: &str) -> ClientResult<String> {
    let base = base_url.trim().trim_end_matches('/');

    let parsed = Url::parse(base).map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{}: unsupported scheme {}",
            base,
            parsed.scheme()
        )));
    }

    Ok(format!("{}{}", base, CHECKS_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        assert_eq!(
            checks_endpoint("http://localhost:8080").unwrap(),
            "http://localhost:8080/api/v1/checks"
        );
        assert_eq!(
            checks_endpoint("https://api.example.com/antifraude//").unwrap(),
            "https://api.example.com/antifraude/api/v1/checks"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            checks_endpoint("localhost:8080"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            checks_endpoint("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("vbc/"));

        let client = CheckClient::new(&ClientConfig::new("http://127.0.0.1:9000/")).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9000/api/v1/checks");
    }
}
