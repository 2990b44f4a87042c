// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands for fans, lights, vacuums, cameras and water heaters.

use crate::command::{Command, CommandType};
use crate::types::PowerState;

// ============================================================================
// Fan
// ============================================================================

/// Discrete fan speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FanSpeed {
    /// Lowest speed.
    Low,
    /// Middle speed.
    Middle,
    /// Highest speed.
    High,
}

impl FanSpeed {
    /// All speeds, slowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Middle, Self::High];

    /// Returns the built-in verb selecting this speed.
    #[must_use]
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Low => "lowSpeed",
            Self::Middle => "middleSpeed",
            Self::High => "highSpeed",
        }
    }

    /// Maps a percentage to the closest speed at or above it.
    ///
    /// Returns `None` for 0, which means "off".
    ///
    /// # Examples
    ///
    /// ```
    /// use switchbot_remote::command::FanSpeed;
    ///
    /// assert_eq!(FanSpeed::from_percentage(0), None);
    /// assert_eq!(FanSpeed::from_percentage(20), Some(FanSpeed::Low));
    /// assert_eq!(FanSpeed::from_percentage(50), Some(FanSpeed::Middle));
    /// assert_eq!(FanSpeed::from_percentage(100), Some(FanSpeed::High));
    /// ```
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Option<Self> {
        if percentage == 0 {
            return None;
        }
        let count = Self::ALL.len();
        let percentage = usize::from(percentage.min(100));
        // ceil(percentage * count / 100), 1-based
        let index = (percentage * count).div_ceil(100);
        Some(Self::ALL[index.clamp(1, count) - 1])
    }

    /// Returns the percentage represented by this speed.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        match self {
            Self::Low => 33,
            Self::Middle => 66,
            Self::High => 100,
        }
    }
}

/// Fan commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanCommand {
    /// Select a speed.
    Speed(FanSpeed),
    /// Toggle oscillation.
    Swing,
    /// Learned ionizer button.
    Ion,
    /// Learned timer button.
    Timer,
}

impl Command for FanCommand {
    fn action(&self) -> String {
        match self {
            Self::Speed(speed) => speed.command(),
            Self::Swing => "swing",
            Self::Ion => "ION",
            Self::Timer => "TIMER",
        }
        .to_string()
    }

    fn command_type(&self) -> CommandType {
        match self {
            Self::Speed(_) | Self::Swing => CommandType::Command,
            Self::Ion | Self::Timer => CommandType::Customize,
        }
    }
}

// ============================================================================
// Light
// ============================================================================

/// Learned light buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Decrease brightness.
    Darker,
    /// Increase brightness.
    Brighter,
    /// Warmer white.
    Warm,
    /// Cooler white.
    White,
}

impl Command for LightCommand {
    fn action(&self) -> String {
        match self {
            Self::Darker => "DARKER",
            Self::Brighter => "BRIGHTER",
            Self::Warm => "WARM",
            Self::White => "WHITE",
        }
        .to_string()
    }

    fn command_type(&self) -> CommandType {
        CommandType::Customize
    }
}

// ============================================================================
// Vacuum
// ============================================================================

/// Vacuum cleaner commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacuumCommand {
    /// Start cleaning.
    Start,
    /// Stop cleaning.
    Stop,
    /// Return to the dock (learned `CHARGE` button).
    ReturnToBase,
}

impl Command for VacuumCommand {
    fn action(&self) -> String {
        match self {
            Self::Start => PowerState::On.command(),
            Self::Stop => PowerState::Off.command(),
            Self::ReturnToBase => "CHARGE",
        }
        .to_string()
    }

    fn command_type(&self) -> CommandType {
        match self {
            Self::Start | Self::Stop => CommandType::Command,
            Self::ReturnToBase => CommandType::Customize,
        }
    }
}

// ============================================================================
// Camera
// ============================================================================

/// Learned camera buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Release the shutter.
    Shutter,
    /// Open the menu.
    Menu,
    /// Self-timer.
    Timer,
}

impl Command for CameraCommand {
    fn action(&self) -> String {
        match self {
            Self::Shutter => "SHUTTER",
            Self::Menu => "MENU",
            Self::Timer => "TIMER",
        }
        .to_string()
    }

    fn command_type(&self) -> CommandType {
        CommandType::Customize
    }
}

// ============================================================================
// Water heater
// ============================================================================

/// Water heater operation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterHeaterMode {
    /// Off.
    Off,
    /// Heating.
    HeatPump,
}

impl WaterHeaterMode {
    /// Returns the host's name for the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::HeatPump => "heat_pump",
        }
    }

    /// Parses a host mode name; unknown names yield `None`.
    #[must_use]
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "off" => Some(Self::Off),
            "heat_pump" => Some(Self::HeatPump),
            _ => None,
        }
    }

    /// Returns the power state that realizes the mode.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        match self {
            Self::Off => PowerState::Off,
            Self::HeatPump => PowerState::On,
        }
    }
}

impl Command for WaterHeaterMode {
    fn action(&self) -> String {
        self.power().command().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_speed_percentages() {
        assert_eq!(FanSpeed::from_percentage(1), Some(FanSpeed::Low));
        assert_eq!(FanSpeed::from_percentage(33), Some(FanSpeed::Low));
        assert_eq!(FanSpeed::from_percentage(34), Some(FanSpeed::Middle));
        assert_eq!(FanSpeed::from_percentage(66), Some(FanSpeed::Middle));
        assert_eq!(FanSpeed::from_percentage(67), Some(FanSpeed::High));
        assert_eq!(FanSpeed::from_percentage(255), Some(FanSpeed::High));
        for speed in FanSpeed::ALL {
            assert_eq!(FanSpeed::from_percentage(speed.percentage()), Some(speed));
        }
    }

    #[test]
    fn fan_commands() {
        assert_eq!(FanCommand::Speed(FanSpeed::Middle).action(), "middleSpeed");
        assert_eq!(FanCommand::Swing.command_type(), CommandType::Command);
        assert_eq!(FanCommand::Ion.action(), "ION");
        assert_eq!(FanCommand::Timer.command_type(), CommandType::Customize);
    }

    #[test]
    fn vacuum_commands() {
        assert_eq!(VacuumCommand::Start.action(), "turnOn");
        assert_eq!(VacuumCommand::Stop.action(), "turnOff");
        assert_eq!(VacuumCommand::ReturnToBase.action(), "CHARGE");
        assert_eq!(
            VacuumCommand::ReturnToBase.command_type(),
            CommandType::Customize
        );
    }

    #[test]
    fn light_and_camera_buttons_are_custom() {
        assert_eq!(LightCommand::Brighter.command_type(), CommandType::Customize);
        assert_eq!(LightCommand::Warm.action(), "WARM");
        assert_eq!(CameraCommand::Shutter.action(), "SHUTTER");
        assert_eq!(CameraCommand::Menu.command_type(), CommandType::Customize);
    }

    #[test]
    fn water_heater_modes() {
        assert_eq!(WaterHeaterMode::parse("heat_pump"), Some(WaterHeaterMode::HeatPump));
        assert_eq!(WaterHeaterMode::parse("eco"), None);
        assert_eq!(WaterHeaterMode::HeatPump.action(), "turnOn");
        assert_eq!(WaterHeaterMode::Off.action(), "turnOff");
    }
}
