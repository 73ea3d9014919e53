//! Backend Client Handle
//!
//! Reqwest-backed handle to the hosted backend, configured once at startup.

use crate::error::{BackendError, Result};
use bridge_traits::ConfigSource;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Configuration key naming the backend service URL.
pub const CONFIG_KEY_URL: &str = "SUPABASE_URL";

/// Configuration key naming the anonymous API key.
pub const CONFIG_KEY_ANON_KEY: &str = "SUPABASE_ANON_KEY";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated backend connection parameters.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL of the backend project
    pub url: Url,
    /// Anonymous (publishable) API key
    pub anon_key: String,
}

impl BackendConfig {
    /// Resolve and validate the connection parameters from a configuration
    /// source.
    ///
    /// # Errors
    ///
    /// Fails when either value is absent, the URL does not parse, or the key
    /// is empty. All of these abort application startup.
    pub async fn resolve(source: &dyn ConfigSource) -> Result<Self> {
        let raw_url = Self::require(source, CONFIG_KEY_URL).await?;
        let anon_key = Self::require(source, CONFIG_KEY_ANON_KEY).await?;

        let url = Url::parse(raw_url.trim()).map_err(|e| BackendError::InvalidUrl {
            key: CONFIG_KEY_URL,
            reason: e.to_string(),
        })?;

        let anon_key = anon_key.trim().to_string();
        if anon_key.is_empty() {
            return Err(BackendError::EmptyValue {
                key: CONFIG_KEY_ANON_KEY,
            });
        }

        Ok(Self { url, anon_key })
    }

    async fn require(source: &dyn ConfigSource, key: &'static str) -> Result<String> {
        source
            .get(key)
            .await
            .map_err(|source| BackendError::ConfigSource { key, source })?
            .ok_or(BackendError::MissingConfig { key })
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

/// Shared handle to the hosted backend.
///
/// Immutable after construction: connection parameters cannot change for the
/// process lifetime. All requests issued through [`http`](Self::http) carry
/// the anonymous key headers the backend expects.
pub struct BackendClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BackendClient {
    /// Build the handle from validated configuration.
    ///
    /// # Errors
    ///
    /// Fails when the key cannot be encoded as a header value or the HTTP
    /// client cannot be constructed. Both abort application startup.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.anon_key).map_err(|e| {
            BackendError::ClientBuild(format!("anon key is not a valid header value: {e}"))
        })?;
        api_key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|e| {
                BackendError::ClientBuild(format!("anon key is not a valid header value: {e}"))
            })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .connect_timeout(Duration::from_secs(10))
            .default_headers(headers)
            .user_agent(concat!("device-services-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::ClientBuild(e.to_string()))?;

        info!(url = %config.url, "backend client constructed");

        Ok(Self {
            base_url: config.url,
            http,
        })
    }

    /// Base URL of the backend project.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint root for the REST interface.
    pub fn rest_url(&self) -> Url {
        // Url::join only fails on cannot-be-a-base URLs, which `resolve`
        // already rejected.
        self.base_url
            .join("rest/v1/")
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Endpoint root for the auth interface.
    pub fn auth_url(&self) -> Url {
        self.base_url
            .join("auth/v1/")
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// HTTP client pre-configured with the backend's key headers.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
