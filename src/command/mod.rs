// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infrared command definitions.
//!
//! Every command sent to a remote is an action name, a parameter and a
//! command type. Built-in verbs such as `turnOn` or `setAll` use the
//! `command` type; buttons the user taught the hub by hand are addressed by
//! their label with the `customize` type.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example |
//! |-------------|---------|---------|
//! | [`IrCommand`] | Any action | `turnOn`, learned `NIGHT` |
//! | [`ClimateCommand`] | Air conditioner state | `setAll 26,2,1,on` |
//! | [`FanCommand`] | Fan speed, swing, buttons | `lowSpeed`, `swing` |
//! | [`LightCommand`] | Light buttons | `BRIGHTER`, `WARM` |
//! | [`MediaCommand`] | Volume, channels, tracks | `volumeAdd`, `SetChannel 7` |
//! | [`VacuumCommand`] | Start, stop, dock | `turnOn`, `CHARGE` |
//! | [`CameraCommand`] | Camera buttons | `SHUTTER` |
//! | [`WaterHeaterMode`] | Operation mode | off, heat pump |
//!
//! # Examples
//!
//! ```
//! use switchbot_remote::command::{Command, CommandType, IrCommand};
//!
//! let cmd = IrCommand::custom("NIGHT");
//! assert_eq!(cmd.action(), "NIGHT");
//! assert_eq!(cmd.parameter(), "default");
//! assert_eq!(cmd.command_type(), CommandType::Customize);
//! ```

mod button;
mod climate;
mod device;
mod media;
mod power;

pub use button::{Button, buttons};
pub use climate::{ClimateCommand, FanMode, HvacMode, TemperatureRange};
pub use device::{CameraCommand, FanCommand, FanSpeed, LightCommand, VacuumCommand, WaterHeaterMode};
pub use media::{MediaCommand, channel_commands};
pub use power::PowerCommands;

use serde_json::{Value, json};

/// Parameter sent when a command has none.
pub const DEFAULT_PARAMETER: &str = "default";

/// Wire-level category of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandType {
    /// A built-in verb of the API.
    #[default]
    Command,
    /// A learned button addressed by its label.
    Customize,
}

impl CommandType {
    /// Returns the value of the `commandType` field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Customize => "customize",
        }
    }

    /// Returns the type for a learned (`true`) or built-in (`false`) action.
    #[must_use]
    pub const fn from_custom(is_custom: bool) -> Self {
        if is_custom {
            Self::Customize
        } else {
            Self::Command
        }
    }
}

/// A command that can be sent to a remote.
pub trait Command {
    /// Returns the action name, e.g. `"turnOn"` or a learned label.
    fn action(&self) -> String;

    /// Returns the parameter; [`DEFAULT_PARAMETER`] when there is none.
    fn parameter(&self) -> String {
        DEFAULT_PARAMETER.to_string()
    }

    /// Returns the command type.
    fn command_type(&self) -> CommandType {
        CommandType::Command
    }

    /// Returns the request body with snake_case keys.
    fn to_payload(&self) -> Value {
        json!({
            "command_type": self.command_type().as_str(),
            "command": self.action(),
            "parameter": self.parameter(),
        })
    }
}

/// A free-form command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IrCommand {
    action: String,
    parameter: Option<String>,
    command_type: CommandType,
}

impl IrCommand {
    /// Creates a command from its parts.
    #[must_use]
    pub fn new(action: impl Into<String>, parameter: Option<String>, is_custom: bool) -> Self {
        Self {
            action: action.into(),
            parameter,
            command_type: CommandType::from_custom(is_custom),
        }
    }

    /// Creates a built-in command without parameter.
    #[must_use]
    pub fn builtin(action: impl Into<String>) -> Self {
        Self::new(action, None, false)
    }

    /// Creates a learned-button command without parameter.
    #[must_use]
    pub fn custom(label: impl Into<String>) -> Self {
        Self::new(label, None, true)
    }

    /// Sets the parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Returns `true` for learned-button commands.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.command_type == CommandType::Customize
    }
}

impl Command for IrCommand {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn parameter(&self) -> String {
        self.parameter
            .clone()
            .unwrap_or_else(|| DEFAULT_PARAMETER.to_string())
    }

    fn command_type(&self) -> CommandType {
        self.command_type
    }
}

/// Converts any command into a free-form [`IrCommand`].
pub fn to_ir_command<C: Command + ?Sized>(command: &C) -> IrCommand {
    IrCommand {
        action: command.action(),
        parameter: Some(command.parameter()),
        command_type: command.command_type(),
    }
}
