// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity of an infrared remote.

use serde::Deserialize;

/// Raw per-remote fields from the `infrared_remote_list` of `GET devices`.
///
/// All fields are optional on the wire; missing ones become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteFields {
    /// Display name chosen in the SwitchBot app.
    pub device_name: String,
    /// Device type string, e.g. `"Air Conditioner"` or `"DIY Fan"`.
    pub remote_type: String,
    /// Id of the hub that emits the IR signal.
    pub hub_device_id: String,
}

/// One entry of the `infrared_remote_list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RemoteEntry {
    pub device_id: String,
    #[serde(flatten)]
    pub fields: RemoteFields,
}

/// Immutable identity of a remote: id, name, type and hub.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteInfo {
    /// Device id, unique per account.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Device type string as reported by the API.
    pub remote_type: String,
    /// Id of the hub that emits the IR signal.
    pub hub_id: String,
}

impl RemoteInfo {
    /// Builds the identity from an id and the raw API fields.
    #[must_use]
    pub fn from_fields(id: impl Into<String>, fields: RemoteFields) -> Self {
        Self {
            id: id.into(),
            name: fields.device_name,
            remote_type: fields.remote_type,
            hub_id: fields.hub_device_id,
        }
    }
}
