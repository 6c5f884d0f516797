//! Backend client management with lazy global initialization.

use std::sync::{LazyLock, PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use url::Url;

/// Global backend client, replaced on every `init_backend`.
static CLIENT: LazyLock<RwLock<Option<BackendClient>>> = LazyLock::new(|| RwLock::new(None));

/// Backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to.
    pub endpoint: String,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl BackendConfig {
    /// Read `BACKEND_URL` and `BACKEND_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("BACKEND_URL")
            && !endpoint.trim().is_empty()
        {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(secs) = std::env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }

    /// Set the base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Backend errors.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend client not initialized - call init_backend first")]
    NotInitialized,
    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Backend URL cannot carry a path: {0}")]
    InvalidBase(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend responded with {status}: {body}")]
    Status { status: u16, body: String },
}

impl BackendError {
    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            BackendError::Http(error) => error.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base: Url,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base = Url::parse(&config.endpoint)?;
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidBase(config.endpoint.clone()));
        }

        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, BackendError> {
        let url = self.url(segments)?;
        tracing::debug!(method = %method, url = %url, "Sending backend request");
        Ok(self.http.request(method, url))
    }

    /// Send `request`, turning any non-2xx answer into `BackendError::Status`.
    async fn send(request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// GET `segments` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, BackendError> {
        let response = Self::send(self.request(Method::GET, segments)?).await?;
        Ok(response.json::<T>().await?)
    }

    /// PUT a JSON body; the answer body is ignored.
    pub async fn put_json<B>(&self, segments: &[&str], body: &B) -> Result<(), BackendError>
    where
        B: Serialize + ?Sized,
    {
        Self::send(self.request(Method::PUT, segments)?.json(body)).await?;
        Ok(())
    }

    /// POST a JSON body and decode the JSON answer.
    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = Self::send(self.request(Method::POST, segments)?.json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST without a body; the answer body is ignored.
    pub async fn post_empty(&self, segments: &[&str]) -> Result<(), BackendError> {
        Self::send(self.request(Method::POST, segments)?).await?;
        Ok(())
    }

    /// DELETE `segments`; the answer body is ignored.
    pub async fn delete(&self, segments: &[&str]) -> Result<(), BackendError> {
        Self::send(self.request(Method::DELETE, segments)?).await?;
        Ok(())
    }
}

/// Initialize the global backend client.
///
/// Calling it again replaces the client, e.g. after the configuration changed.
pub fn init_backend(config: BackendConfig) -> Result<(), BackendError> {
    let client = BackendClient::new(&config)?;
    tracing::info!("Backend client configured for {}", client.base_url());
    *CLIENT.write().unwrap_or_else(PoisonError::into_inner) = Some(client);
    Ok(())
}

/// Get the backend client.
///
/// Returns `BackendError::NotInitialized` before `init_backend` has run.
pub fn get_client() -> Result<BackendClient, BackendError> {
    try_get_client().ok_or(BackendError::NotInitialized)
}

/// Try to get the backend client.
pub fn try_get_client() -> Option<BackendClient> {
    CLIENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    fn client(endpoint: &str) -> Result<BackendClient, BackendError> {
        BackendClient::new(&BackendConfig::default().with_endpoint(endpoint))
    }

    #[test]
    fn url_appends_segments_to_base_path() -> Result<(), BackendError> {
        let root = client("http://localhost:8080")?;
        assert_eq!(root.url(&["events"])?.as_str(), "http://localhost:8080/events");

        let nested = client("https://staff.example.com/api/")?;
        assert_eq!(
            nested.url(&["notifications", "admin"])?.as_str(),
            "https://staff.example.com/api/notifications/admin"
        );
        Ok(())
    }

    #[test]
    fn url_encodes_each_segment() -> Result<(), BackendError> {
        let client = client("http://localhost:8080")?;
        assert_eq!(
            client.url(&["corrections", "a/b c@example.com"])?.as_str(),
            "http://localhost:8080/corrections/a%2Fb%20c@example.com"
        );
        Ok(())
    }

    #[test]
    fn rejects_urls_without_a_path() {
        assert!(matches!(
            client("mailto:admin@example.com"),
            Err(BackendError::InvalidBase(_))
        ));
        assert!(matches!(client("not a url"), Err(BackendError::Url(_))));
    }

    #[test]
    fn config_builders_override_defaults() {
        let config = BackendConfig::default()
            .with_endpoint("http://backend:5000")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.endpoint, "http://backend:5000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
