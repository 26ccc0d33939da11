// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Google Maps Platform web services.

use super::models::status;
use crate::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Production endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`GoogleMapsClient`].
#[derive(Clone)]
pub struct GoogleMapsSettings {
    pub api_key: String,
    /// Endpoint root without trailing slash; overridden in tests.
    pub base_url: String,
    pub request_timeout: Duration,
}

impl GoogleMapsSettings {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl fmt::Debug for GoogleMapsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleMapsSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Transport-level failure, reduced to the status text carried by the
/// calling gateway's error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransportError(pub String);

impl TransportError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        let status = if err.is_timeout() {
            "TIMEOUT".to_string()
        } else if let Some(code) = err.status() {
            format!("HTTP {}", code.as_u16())
        } else if err.is_decode() {
            status::INVALID_RESPONSE.to_string()
        } else {
            "NETWORK_ERROR".to_string()
        };
        Self(status)
    }
}

/// Adapter implementing every provider port against Google Maps Platform.
pub struct GoogleMapsClient {
    http: Client,
    settings: GoogleMapsSettings,
}

impl GoogleMapsClient {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::error::Error::Http) if the TLS backend
    /// cannot be initialized.
    pub fn new(settings: GoogleMapsSettings) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &GoogleMapsSettings {
        &self.settings
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// Sends a keyed GET and checks the HTTP status.
    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<reqwest::Response, TransportError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "provider request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.settings.api_key.as_str())])
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(&err))?;

        response
            .error_for_status()
            .map_err(|err| TransportError::from_reqwest(&err))
    }

    /// Sends a keyed GET and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<T, TransportError> {
        let response = self.get(path, query).await?;
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::from_reqwest(&err))?;
        serde_json::from_slice(&body).map_err(|err| {
            tracing::warn!(path, error = %err, "malformed provider response");
            TransportError(status::INVALID_RESPONSE.to_string())
        })
    }
}

impl fmt::Debug for GoogleMapsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleMapsClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_debug_redacts_key() {
        let settings = GoogleMapsSettings::new("secret-key");
        let debug = format!("{settings:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = GoogleMapsClient::new(
            GoogleMapsSettings::new("k").with_base_url("http://localhost:1234/"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("geocode/json"),
            "http://localhost:1234/geocode/json"
        );
    }

    #[test]
    fn defaults_target_production() {
        let settings = GoogleMapsSettings::new("k");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
    }
}
