// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power commands with per-remote overrides.

use crate::command::IrCommand;
use crate::options::RemoteOptions;
use crate::types::PowerState;

/// The commands that switch one remote on and off.
///
/// Many learned remotes have no usable `turnOn` / `turnOff`; their options
/// can name learned buttons to use instead.
///
/// # Examples
///
/// ```
/// use switchbot_remote::command::{Command, PowerCommands};
/// use switchbot_remote::types::PowerState;
/// use switchbot_remote::RemoteOptions;
///
/// let options = RemoteOptions {
///     on_command: Some("POWER".to_string()),
///     ..RemoteOptions::default()
/// };
/// let power = PowerCommands::resolve(&options);
/// assert_eq!(power.command(PowerState::On).action(), "POWER");
/// assert_eq!(power.command(PowerState::Off).action(), "turnOff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerCommands {
    on: IrCommand,
    off: IrCommand,
    override_off: bool,
}

impl Default for PowerCommands {
    fn default() -> Self {
        Self {
            on: IrCommand::builtin(PowerState::On.command()),
            off: IrCommand::builtin(PowerState::Off.command()),
            override_off: false,
        }
    }
}

impl PowerCommands {
    /// Resolves the power commands from a remote's options.
    ///
    /// Blank labels count as unset.
    #[must_use]
    pub fn resolve(options: &RemoteOptions) -> Self {
        let label = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(IrCommand::custom)
        };
        let defaults = Self::default();
        Self {
            on: label(&options.on_command).unwrap_or(defaults.on),
            off: label(&options.off_command).unwrap_or(defaults.off),
            override_off: options.override_off_command.unwrap_or(false),
        }
    }

    /// Returns the command that switches to `state`.
    #[must_use]
    pub fn command(&self, state: PowerState) -> &IrCommand {
        match state {
            PowerState::On => &self.on,
            PowerState::Off => &self.off,
        }
    }

    /// Returns `true` if an air conditioner should be switched off with the
    /// power-off command instead of a `setAll` carrying the off state.
    #[must_use]
    pub fn overrides_climate_off(&self) -> bool {
        self.override_off
    }
}
