// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state accepted by remotes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Requested power state of an appliance.
///
/// Parsing is case-insensitive and accepts exactly `on` and `off`.
///
/// # Examples
///
/// ```
/// use switchbot_remote::types::PowerState;
///
/// assert_eq!("ON".parse::<PowerState>().unwrap(), PowerState::On);
/// assert_eq!(PowerState::Off.command(), "turnOff");
/// assert!("standby".parse::<PowerState>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Power is off.
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the lowercase name (`"on"` / `"off"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns the built-in API verb that switches to this state.
    #[must_use]
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Off => "turnOff",
            Self::On => "turnOn",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
