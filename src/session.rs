// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account-level entry point.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, ParseError};
use crate::options::AccountConfig;
use crate::protocol::{ApiClient, ClientConfig, Credentials};
use crate::remote::{Remote, RemoteFactory};
use crate::types::RemoteEntry;

/// Body of `GET devices`.
#[derive(Debug, Deserialize)]
struct DeviceListBody {
    infrared_remote_list: Option<Vec<RemoteEntry>>,
}

/// A SwitchBot account.
///
/// Lists the account's infrared remotes. Nothing is cached: every call asks
/// the API again.
///
/// # Examples
///
/// ```no_run
/// use switchbot_remote::SwitchBot;
///
/// # async fn example() -> switchbot_remote::Result<()> {
/// let switchbot = SwitchBot::new("token", "secret")?;
///
/// for remote in switchbot.remotes().await? {
///     println!("{remote}: {} ({:?})", remote.name(), remote.device_class());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SwitchBot {
    client: Arc<ApiClient>,
    factory: Arc<RemoteFactory>,
}

impl SwitchBot {
    /// Connects to the public API with default settings and a fresh nonce.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> crate::Result<Self> {
        Self::with_config(Credentials::new(token, secret), ClientConfig::default())
    }

    /// Connects using the credentials of an account configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn from_account(account: &AccountConfig) -> crate::Result<Self> {
        Self::with_config(account.credentials(), ClientConfig::default())
    }

    /// Connects with explicit credentials and client settings.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// created.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> crate::Result<Self> {
        let client = config.into_client(credentials)?;
        Ok(Self {
            client: Arc::new(client),
            factory: Arc::new(RemoteFactory::new()),
        })
    }

    /// Replaces the factory used to build remotes.
    #[must_use]
    pub fn with_factory(mut self, factory: RemoteFactory) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    /// Returns the shared API client.
    #[must_use]
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Lists every infrared remote of the account.
    ///
    /// # Errors
    ///
    /// Returns the API client's error, or `ParseError` if the remote list
    /// cannot be decoded.
    pub async fn remotes(&self) -> crate::Result<Vec<Remote>> {
        let response = self.client.get("devices").await?;
        let body: DeviceListBody = response.parse_body()?;
        let entries = body
            .infrared_remote_list
            .ok_or_else(|| ParseError::MissingField("infraredRemoteList".to_string()))?;

        tracing::debug!(count = entries.len(), "Listed infrared remotes");

        Ok(entries
            .into_iter()
            .map(|entry| {
                self.factory
                    .create(Arc::clone(&self.client), entry.device_id, entry.fields)
            })
            .collect())
    }

    /// Returns the remote with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Error::RemoteNotFound` if the account has no such remote,
    /// otherwise the errors of [`SwitchBot::remotes`].
    pub async fn remote(&self, id: &str) -> crate::Result<Remote> {
        self.remotes()
            .await?
            .into_iter()
            .find(|remote| remote.id() == id)
            .ok_or_else(|| Error::RemoteNotFound(id.to_string()))
    }

    /// Checks the credentials by listing the remotes once.
    ///
    /// Returns the number of remotes on the account.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`SwitchBot::remotes`]; a rejected token or
    /// signature surfaces as `ProtocolError::UnexpectedStatus` (401) or
    /// `ProtocolError::Api`.
    pub async fn validate(&self) -> crate::Result<usize> {
        let count = self.remotes().await?.len();
        tracing::info!(count, "SwitchBot account validated");
        Ok(count)
    }
}
