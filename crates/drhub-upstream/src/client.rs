//! HTTP client for the upstream aggregation service.
//!
//! Every call is a single request with Basic credentials. Non-2xx responses
//! surface as [`UpstreamError::Status`] with the body untouched so the server
//! can relay them.

use std::time::Duration;

use drhub_core::UpstreamConfig;
use reqwest::{Client, Method, Url};

use crate::error::UpstreamError;

const JOBS_PATH: &str = "api/jobs";
const UPDATE_PATH: &str = "api/resources/update";

/// Client for the upstream jobs / resource-update API.
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
    username: String,
    password: Option<String>,
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl UpstreamClient {
    /// Builds a client from the configured upstream settings.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`UpstreamError::InvalidBaseUrl`] if the base URL does
    /// not parse.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        Self::with_base_url(
            &config.base_url,
            &config.username,
            config.password.as_deref(),
            config.timeout_secs,
        )
    }

    /// Creates a client with explicit settings (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`UpstreamClient::new`].
    pub fn with_base_url(
        base_url: &str,
        username: &str,
        password: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("drhub/0.1 (devrel-hub)")
            .build()?;

        // One trailing slash so `join` appends rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| UpstreamError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            username: username.to_owned(),
            password: password.map(ToOwned::to_owned),
        })
    }

    /// `GET {base}/api/jobs`.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Status`] on a non-2xx response.
    /// - [`UpstreamError::Http`] on network failure.
    /// - [`UpstreamError::Deserialize`] if the body is not JSON.
    pub async fn fetch_jobs(&self) -> Result<serde_json::Value, UpstreamError> {
        self.request_json(Method::GET, JOBS_PATH).await
    }

    /// `POST {base}/api/resources/update`, asking the upstream to re-run its
    /// aggregation.
    ///
    /// # Errors
    ///
    /// Same as [`UpstreamClient::fetch_jobs`].
    pub async fn trigger_update(&self) -> Result<serde_json::Value, UpstreamError> {
        self.request_json(Method::POST, UPDATE_PATH).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, UpstreamError> {
        self.base_url
            .join(path)
            .map_err(|e| UpstreamError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, url = %url, "calling upstream");

        let response = self
            .client
            .request(method, url.clone())
            .basic_auth(&self.username, self.password.as_deref())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "upstream returned error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> UpstreamClient {
        UpstreamClient::with_base_url(base_url, "user", Some("secret"), 30)
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_appends_to_base_path() {
        let client = test_client("https://aggregator.example.com/v1");
        assert_eq!(
            client.endpoint(JOBS_PATH).unwrap().as_str(),
            "https://aggregator.example.com/v1/api/jobs"
        );
    }

    #[test]
    fn endpoint_ignores_trailing_slashes() {
        let client = test_client("https://aggregator.example.com//");
        assert_eq!(
            client.endpoint(UPDATE_PATH).unwrap().as_str(),
            "https://aggregator.example.com/api/resources/update"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = UpstreamClient::with_base_url("not a url", "user", None, 30).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn debug_omits_password() {
        let rendered = format!("{:?}", test_client("https://aggregator.example.com"));
        assert!(!rendered.contains("secret"));
    }
}
