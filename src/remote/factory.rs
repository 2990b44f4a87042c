// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dispatch from device type to remote behavior.

use std::collections::HashMap;
use std::sync::Arc;

use crate::device_class::remote_type::OTHERS;
use crate::protocol::ApiClient;
use crate::remote::{GenericRemote, OtherRemote, Remote};
use crate::types::{RemoteFields, RemoteInfo};

/// Builds a remote of one behavior.
pub type RemoteConstructor = fn(RemoteInfo, Arc<ApiClient>) -> Remote;

fn generic(info: RemoteInfo, client: Arc<ApiClient>) -> Remote {
    GenericRemote::new(info, client).into()
}

fn other(info: RemoteInfo, client: Arc<ApiClient>) -> Remote {
    OtherRemote::new(info, client).into()
}

/// Chooses and builds the remote behavior for a device type.
///
/// The table is filled once, before the first remote is built:
///
/// 1. `"Others"` always yields an [`OtherRemote`].
/// 2. A type registered with [`RemoteFactory::register`] uses its constructor.
/// 3. Anything else yields a [`GenericRemote`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use switchbot_remote::protocol::{ApiClient, Credentials};
/// use switchbot_remote::types::RemoteFields;
/// use switchbot_remote::RemoteFactory;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Arc::new(ApiClient::new(Credentials::new("token", "secret"))?);
/// let factory = RemoteFactory::new();
///
/// let fields = RemoteFields {
///     remote_type: "Others".to_string(),
///     ..RemoteFields::default()
/// };
/// let remote = factory.create(client, "O1", fields);
/// assert!(remote.is_other());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RemoteFactory {
    constructors: HashMap<String, RemoteConstructor>,
    fallback: RemoteConstructor,
}

impl Default for RemoteFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteFactory {
    /// Creates a factory with no specialized types.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            fallback: generic,
        }
    }

    /// Registers a constructor for an exact device type.
    ///
    /// A later registration for the same type replaces the earlier one.
    /// Registering `"Others"` has no effect on dispatch.
    #[must_use]
    pub fn register(
        mut self,
        remote_type: impl Into<String>,
        constructor: RemoteConstructor,
    ) -> Self {
        self.constructors.insert(remote_type.into(), constructor);
        self
    }

    /// Returns `true` if a constructor is registered for the type.
    #[must_use]
    pub fn is_registered(&self, remote_type: &str) -> bool {
        self.constructors.contains_key(remote_type)
    }

    /// Builds the remote for one entry of the account's remote list.
    #[must_use]
    pub fn create(
        &self,
        client: Arc<ApiClient>,
        id: impl Into<String>,
        fields: RemoteFields,
    ) -> Remote {
        let info = RemoteInfo::from_fields(id, fields);

        let constructor: RemoteConstructor = if info.remote_type == OTHERS {
            other
        } else {
            self.constructors
                .get(&info.remote_type)
                .copied()
                .unwrap_or(self.fallback)
        };

        let remote = constructor(info, client);
        tracing::debug!(remote = %remote, other = remote.is_other(), "Created remote");
        remote
    }
}
