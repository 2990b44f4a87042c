// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infrared remotes.
//!
//! A [`Remote`] is one physical appliance controlled through an IR hub. It
//! is created by a [`RemoteFactory`] from the account's remote list and is
//! immutable afterwards. Two behaviors exist:
//!
//! - [`GenericRemote`]: any known or unknown device type; sends arbitrary
//!   commands and can be switched on and off with the built-in verbs
//! - [`OtherRemote`]: the fully custom `"Others"` type; sends arbitrary
//!   commands only
//!
//! # Examples
//!
//! ```no_run
//! use switchbot_remote::SwitchBot;
//!
//! # async fn example() -> switchbot_remote::Result<()> {
//! let switchbot = SwitchBot::new("token", "secret")?;
//! let remote = switchbot.remote("02-202301011234-12345678").await?;
//!
//! remote.turn("on").await?;
//! remote.command("NIGHT", None, true).await?;
//! # Ok(())
//! # }
//! ```

mod factory;

pub use factory::{RemoteConstructor, RemoteFactory};

use std::fmt;
use std::sync::Arc;

use crate::command::{Command, IrCommand};
use crate::device_class::{DeviceClass, classify};
use crate::error::Error;
use crate::protocol::ApiClient;
use crate::types::{PowerState, RemoteInfo};

/// Identity plus the shared client; the part every remote behavior has.
#[derive(Debug, Clone)]
struct RemoteCore {
    info: RemoteInfo,
    client: Arc<ApiClient>,
}

impl RemoteCore {
    async fn send<C: Command + Sync + ?Sized>(&self, command: &C) -> crate::Result<()> {
        let payload = command.to_payload();
        tracing::debug!(
            remote = %self.info.id,
            action = %command.action(),
            "Sending command"
        );

        let path = format!("devices/{}/commands", urlencoding::encode(&self.info.id));
        self.client.post(&path, payload).await?;
        Ok(())
    }
}

/// A remote with built-in power control.
#[derive(Debug, Clone)]
pub struct GenericRemote {
    core: RemoteCore,
}

impl GenericRemote {
    /// Creates a generic remote.
    #[must_use]
    pub fn new(info: RemoteInfo, client: Arc<ApiClient>) -> Self {
        Self {
            core: RemoteCore { info, client },
        }
    }

    /// Returns the remote's identity.
    #[must_use]
    pub fn info(&self) -> &RemoteInfo {
        &self.core.info
    }

    /// Sends a typed command.
    ///
    /// # Errors
    ///
    /// Returns the API client's error unchanged.
    pub async fn send<C: Command + Sync + ?Sized>(&self, command: &C) -> crate::Result<()> {
        self.core.send(command).await
    }

    /// Switches the appliance on or off with `turnOn` / `turnOff`.
    ///
    /// `state` must be `on` or `off`, in any case.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidPowerState` without sending anything if
    /// `state` is neither, otherwise the API client's error unchanged.
    pub async fn turn(&self, state: &str) -> crate::Result<()> {
        let state: PowerState = state.parse()?;
        self.turn_to(state).await
    }

    /// Switches the appliance to a typed power state.
    ///
    /// # Errors
    ///
    /// Returns the API client's error unchanged.
    pub async fn turn_to(&self, state: PowerState) -> crate::Result<()> {
        self.send(&IrCommand::builtin(state.command())).await
    }
}

/// A fully custom remote (device type `"Others"`).
#[derive(Debug, Clone)]
pub struct OtherRemote {
    core: RemoteCore,
}

impl OtherRemote {
    /// Creates a custom remote.
    #[must_use]
    pub fn new(info: RemoteInfo, client: Arc<ApiClient>) -> Self {
        Self {
            core: RemoteCore { info, client },
        }
    }

    /// Returns the remote's identity.
    #[must_use]
    pub fn info(&self) -> &RemoteInfo {
        &self.core.info
    }

    /// Sends a typed command.
    ///
    /// # Errors
    ///
    /// Returns the API client's error unchanged.
    pub async fn send<C: Command + Sync + ?Sized>(&self, command: &C) -> crate::Result<()> {
        self.core.send(command).await
    }
}

/// An infrared remote of any behavior.
#[derive(Debug, Clone)]
pub enum Remote {
    /// Remote with built-in power control.
    Generic(GenericRemote),
    /// Fully custom remote.
    Other(OtherRemote),
}

impl Remote {
    fn core(&self) -> &RemoteCore {
        match self {
            Self::Generic(r) => &r.core,
            Self::Other(r) => &r.core,
        }
    }

    /// Returns the remote's identity.
    #[must_use]
    pub fn info(&self) -> &RemoteInfo {
        &self.core().info
    }

    /// Returns the device id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.info().id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// Returns the device type string.
    #[must_use]
    pub fn remote_type(&self) -> &str {
        &self.info().remote_type
    }

    /// Returns the id of the hub that emits the signal.
    #[must_use]
    pub fn hub_id(&self) -> &str {
        &self.info().hub_id
    }

    /// Returns the device class, or `None` for an unclassified type.
    #[must_use]
    pub fn device_class(&self) -> Option<DeviceClass> {
        classify(self.remote_type())
    }

    /// Returns the generic behavior, if this remote has it.
    #[must_use]
    pub fn as_generic(&self) -> Option<&GenericRemote> {
        match self {
            Self::Generic(r) => Some(r),
            Self::Other(_) => None,
        }
    }

    /// Returns `true` for the fully custom `"Others"` behavior.
    #[must_use]
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }

    /// Sends an action.
    ///
    /// A missing `parameter` is sent as `"default"`. `is_custom` selects a
    /// learned button label instead of a built-in verb.
    ///
    /// # Errors
    ///
    /// Returns the API client's error unchanged.
    pub async fn command(
        &self,
        action: &str,
        parameter: Option<&str>,
        is_custom: bool,
    ) -> crate::Result<()> {
        let command = IrCommand::new(action, parameter.map(str::to_string), is_custom);
        self.send(&command).await
    }

    /// Sends a typed command.
    ///
    /// # Errors
    ///
    /// Returns the API client's error unchanged.
    pub async fn send<C: Command + Sync + ?Sized>(&self, command: &C) -> crate::Result<()> {
        self.core().send(command).await
    }

    /// Switches the appliance on or off.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` for custom remotes,
    /// `ValueError::InvalidPowerState` for anything but `on` / `off`, and
    /// otherwise the API client's error. Nothing is sent in the first two
    /// cases.
    pub async fn turn(&self, state: &str) -> crate::Result<()> {
        match self {
            Self::Generic(r) => r.turn(state).await,
            Self::Other(_) => Err(Error::CapabilityNotSupported {
                remote_type: self.remote_type().to_string(),
                capability: "turn".to_string(),
            }),
        }
    }
}

impl From<GenericRemote> for Remote {
    fn from(remote: GenericRemote) -> Self {
        Self::Generic(remote)
    }
}

impl From<OtherRemote> for Remote {
    fn from(remote: OtherRemote) -> Self {
        Self::Other(remote)
    }
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.remote_type().is_empty() {
            "Remote".to_string()
        } else {
            self.remote_type().replace(' ', "")
        };
        write!(f, "{kind}(id={})", self.id())
    }
}
