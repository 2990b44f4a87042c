// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the SwitchBot cloud API.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{ApiResponse, Credentials, STATUS_SUCCESS, camelize, decamelize};

// ============================================================================
// ClientConfig
// ============================================================================

/// Connection and retry settings for an [`ApiClient`].
///
/// # Examples
///
/// ```
/// use switchbot_remote::protocol::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_max_attempts(3)
///     .with_retry_delay(Duration::from_millis(250));
///
/// assert_eq!(config.max_attempts(), 3);
/// assert_eq!(config.base_url(), ClientConfig::DEFAULT_BASE_URL);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    max_attempts: u32,
    retry_delay: Duration,
}

impl ClientConfig {
    /// Base URL of the public API.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.switch-bot.com/v1.1";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default number of attempts for a request answered with HTTP 500.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    /// Default pause between two attempts.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }

    /// Overrides the base URL, e.g. to target a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the number of attempts; values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the pause between two attempts.
    #[must_use]
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the number of attempts.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the pause between two attempts.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Creates an [`ApiClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an http(s) URL or the HTTP client
    /// cannot be created.
    pub fn into_client(self, credentials: Credentials) -> Result<ApiClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(ApiClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
            max_attempts: self.max_attempts,
            retry_delay: self.retry_delay,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ApiClient
// ============================================================================

/// Signed HTTP client for the SwitchBot cloud API.
///
/// Each request gets a fresh timestamp and signature. Requests answered
/// with HTTP 500 are retried up to the configured number of attempts; every
/// other failure is returned immediately.
///
/// # Examples
///
/// ```no_run
/// use switchbot_remote::protocol::{ApiClient, Credentials};
///
/// # async fn example() -> switchbot_remote::Result<()> {
/// let client = ApiClient::new(Credentials::new("token", "secret"))?;
/// let response = client.get("devices").await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    credentials: Credentials,
    max_attempts: u32,
    retry_delay: Duration,
}

impl ApiClient {
    /// Creates a client for the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials) -> Result<Self, ProtocolError> {
        ClientConfig::default().into_client(credentials)
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the number of attempts made for a request answered with HTTP 500.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Builds the URL for an API path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a signed request and returns the normalized response.
    ///
    /// `body` is given with snake_case keys and is camelized before sending.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::RepeatedServerErrors`] if every attempt got HTTP 500
    /// - [`ProtocolError::UnexpectedStatus`] for any other non-200 status
    /// - [`ProtocolError::Api`] if the body's status code is not 100
    /// - [`ProtocolError::Http`] if the request could not be sent
    /// - [`ParseError`] if the body is not valid JSON
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> crate::Result<ApiResponse> {
        let url = self.build_url(path);
        let body = body.map(camelize);

        for attempt in 1..=self.max_attempts {
            match self.send_once(method.clone(), &url, body.as_ref()).await {
                Err(Error::Protocol(e)) if e.is_transient() => {
                    tracing::warn!(
                        url = %url,
                        attempt,
                        max_attempts = self.max_attempts,
                        "SwitchBot API returned status 500"
                    );
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
                result => return result,
            }
        }

        Err(ProtocolError::RepeatedServerErrors {
            attempts: self.max_attempts,
        }
        .into())
    }

    /// Performs a single attempt and classifies its outcome.
    async fn send_once(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> crate::Result<ApiResponse> {
        let headers = self
            .credentials
            .sign_now()
            .to_header_map()
            .map_err(|e| ProtocolError::InvalidCredentials(e.to_string()))?;

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            tracing::debug!(payload = %body, "Request payload");
            request = request.json(body);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::INTERNAL_SERVER_ERROR => return Err(ProtocolError::ServerError.into()),
            status => {
                return Err(ProtocolError::UnexpectedStatus {
                    status: status.as_u16(),
                }
                .into());
            }
        }

        let text = response.text().await.map_err(ProtocolError::Http)?;
        tracing::debug!(body = %text, "Received API response");

        let value: Value = serde_json::from_str(&text).map_err(ParseError::Json)?;
        let response = ApiResponse::new(decamelize(value));

        match response.status_code() {
            Some(STATUS_SUCCESS) => Ok(response),
            Some(status_code) => Err(ProtocolError::Api {
                status_code,
                message: response.message().to_string(),
            }
            .into()),
            None => Err(ParseError::MissingField("statusCode".to_string()).into()),
        }
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> crate::Result<ApiResponse> {
        self.request(Method::GET, path, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post(&self, path: &str, body: Value) -> crate::Result<ApiResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put(&self, path: &str, body: Value) -> crate::Result<ApiResponse> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> crate::Result<ApiResponse> {
        self.request(Method::DELETE, path, None).await
    }
}
