// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner commands.
//!
//! Infrared air conditioners receive their whole state in one frame, so the
//! API offers a single `setAll` verb whose parameter is
//! `<temperature>,<mode>,<fan>,<power>`.

use std::fmt;
use std::str::FromStr;

use crate::capabilities::{
    DEFAULT_CLIMATE_TEMP_MAX, DEFAULT_CLIMATE_TEMP_MIN, DEFAULT_CLIMATE_TEMP_STEP,
    DEFAULT_WATER_HEATER_TEMP_MAX, DEFAULT_WATER_HEATER_TEMP_MIN,
};
use crate::command::Command;
use crate::error::ValueError;
use crate::options::RemoteOptions;
use crate::types::PowerState;

/// HVAC operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HvacMode {
    /// Powered off.
    Off,
    /// Automatic.
    Auto,
    /// Cooling.
    Cool,
    /// Dehumidifying.
    Dry,
    /// Ventilation only.
    FanOnly,
    /// Heating.
    Heat,
}

impl HvacMode {
    /// Returns the mode code used in the `setAll` parameter.
    ///
    /// Off shares code 1 with auto; the power field carries the off state.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Off | Self::Auto => 1,
            Self::Cool => 2,
            Self::Dry => 3,
            Self::FanOnly => 4,
            Self::Heat => 5,
        }
    }

    /// Returns the host's name for the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Auto => "auto",
            Self::Cool => "cool",
            Self::Dry => "dry",
            Self::FanOnly => "fan_only",
            Self::Heat => "heat",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            "cool" => Ok(Self::Cool),
            "dry" => Ok(Self::Dry),
            "fan_only" => Ok(Self::FanOnly),
            "heat" => Ok(Self::Heat),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}

/// Air conditioner fan mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FanMode {
    /// Automatic speed.
    #[default]
    Auto,
    /// Low speed.
    Low,
    /// Medium speed.
    Medium,
    /// High speed.
    High,
}

impl FanMode {
    /// Returns the fan code used in the `setAll` parameter.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
        }
    }

    /// Returns the host's name for the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for FanMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}

/// Target temperature bounds of one remote.
///
/// Stored options override the class defaults.
///
/// # Examples
///
/// ```
/// use switchbot_remote::RemoteOptions;
/// use switchbot_remote::command::TemperatureRange;
///
/// let options = RemoteOptions {
///     temp_max: Some(32.0),
///     ..RemoteOptions::default()
/// };
/// let range = TemperatureRange::climate(&options);
/// assert!(range.contains(32.0));
/// assert!(!range.contains(15.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    /// Lowest accepted target.
    pub min: f64,
    /// Highest accepted target.
    pub max: f64,
    /// Increment offered to the user.
    pub step: f64,
}

impl TemperatureRange {
    /// Air conditioner bounds.
    #[must_use]
    pub fn climate(options: &RemoteOptions) -> Self {
        Self {
            min: options.temp_min.unwrap_or(DEFAULT_CLIMATE_TEMP_MIN),
            max: options.temp_max.unwrap_or(DEFAULT_CLIMATE_TEMP_MAX),
            step: options.temp_step.unwrap_or(DEFAULT_CLIMATE_TEMP_STEP),
        }
    }

    /// Water heater bounds.
    #[must_use]
    pub fn water_heater(options: &RemoteOptions) -> Self {
        Self {
            min: options.temp_min.unwrap_or(DEFAULT_WATER_HEATER_TEMP_MIN),
            max: options.temp_max.unwrap_or(DEFAULT_WATER_HEATER_TEMP_MAX),
            step: options.temp_step.unwrap_or(DEFAULT_CLIMATE_TEMP_STEP),
        }
    }

    /// Returns `true` if `temperature` is a finite value within the bounds.
    #[must_use]
    pub fn contains(&self, temperature: f64) -> bool {
        temperature.is_finite() && (self.min..=self.max).contains(&temperature)
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self::climate(&RemoteOptions::default())
    }
}

/// The full state sent with `setAll`.
///
/// Whole temperatures are sent without decimals (`26`), others as is
/// (`26.5`).
///
/// # Examples
///
/// ```
/// use switchbot_remote::command::{ClimateCommand, Command, FanMode, HvacMode, TemperatureRange};
///
/// let range = TemperatureRange::default();
/// let cmd = ClimateCommand::new(26.0, HvacMode::Cool, FanMode::Auto, &range).unwrap();
/// assert_eq!(cmd.action(), "setAll");
/// assert_eq!(cmd.parameter(), "26,2,1,on");
///
/// let off = ClimateCommand::new(26.5, HvacMode::Off, FanMode::Auto, &range).unwrap();
/// assert_eq!(off.parameter(), "26.5,1,1,off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateCommand {
    temperature: f64,
    mode: HvacMode,
    fan: FanMode,
}

impl ClimateCommand {
    /// Creates a `setAll` command. The power field follows the mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the temperature is not a finite
    /// value within `range`.
    pub fn new(
        temperature: f64,
        mode: HvacMode,
        fan: FanMode,
        range: &TemperatureRange,
    ) -> Result<Self, ValueError> {
        if !range.contains(temperature) {
            return Err(ValueError::OutOfRange {
                min: range.min,
                max: range.max,
                actual: temperature,
            });
        }
        Ok(Self {
            temperature,
            mode,
            fan,
        })
    }

    /// Returns the target temperature.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns the power state encoded in the parameter.
    #[must_use]
    pub fn power(&self) -> PowerState {
        PowerState::from(self.mode != HvacMode::Off)
    }
}

impl Command for ClimateCommand {
    fn action(&self) -> String {
        "setAll".to_string()
    }

    fn parameter(&self) -> String {
        // Display prints 26.0 as "26".
        format!(
            "{},{},{},{}",
            self.temperature,
            self.mode.code(),
            self.fan.code(),
            self.power()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hvac_codes() {
        assert_eq!(HvacMode::Off.code(), 1);
        assert_eq!(HvacMode::Auto.code(), 1);
        assert_eq!(HvacMode::Cool.code(), 2);
        assert_eq!(HvacMode::Dry.code(), 3);
        assert_eq!(HvacMode::FanOnly.code(), 4);
        assert_eq!(HvacMode::Heat.code(), 5);
    }

    #[test]
    fn fan_codes() {
        assert_eq!(FanMode::Auto.code(), 1);
        assert_eq!(FanMode::Low.code(), 2);
        assert_eq!(FanMode::Medium.code(), 3);
        assert_eq!(FanMode::High.code(), 4);
    }

    #[test]
    fn parse_modes() {
        assert_eq!("fan_only".parse::<HvacMode>().unwrap(), HvacMode::FanOnly);
        assert_eq!("HEAT".parse::<HvacMode>().unwrap(), HvacMode::Heat);
        assert_eq!("medium".parse::<FanMode>().unwrap(), FanMode::Medium);
        assert!(matches!(
            "turbo".parse::<FanMode>(),
            Err(ValueError::InvalidMode(_))
        ));
    }

    #[test]
    fn set_all_parameter() {
        let range = TemperatureRange::default();
        let cmd = ClimateCommand::new(22.0, HvacMode::Heat, FanMode::High, &range).unwrap();
        assert_eq!(cmd.parameter(), "22,5,4,on");
        assert_eq!(cmd.power(), PowerState::On);
    }

    #[test]
    fn fractional_temperature_is_sent_as_is() {
        let options = RemoteOptions {
            temp_step: Some(0.5),
            ..RemoteOptions::default()
        };
        let range = TemperatureRange::climate(&options);
        let cmd = ClimateCommand::new(26.5, HvacMode::Cool, FanMode::Low, &range).unwrap();
        assert_eq!(cmd.parameter(), "26.5,2,2,on");
    }

    #[test]
    fn configured_bounds_widen_the_range() {
        let options = RemoteOptions {
            temp_max: Some(32.0),
            temp_step: Some(0.5),
            ..RemoteOptions::default()
        };
        let range = TemperatureRange::climate(&options);
        let cmd = ClimateCommand::new(32.0, HvacMode::Cool, FanMode::Auto, &range).unwrap();
        assert_eq!(cmd.parameter(), "32,2,1,on");

        let default_range = TemperatureRange::default();
        assert!(ClimateCommand::new(32.0, HvacMode::Cool, FanMode::Auto, &default_range).is_err());
    }

    #[test]
    fn temperature_bounds() {
        let range = TemperatureRange::default();
        assert!(ClimateCommand::new(16.0, HvacMode::Cool, FanMode::Low, &range).is_ok());
        assert!(ClimateCommand::new(30.0, HvacMode::Cool, FanMode::Low, &range).is_ok());
        assert_eq!(
            ClimateCommand::new(31.0, HvacMode::Cool, FanMode::Low, &range),
            Err(ValueError::OutOfRange {
                min: 16.0,
                max: 30.0,
                actual: 31.0
            })
        );
        assert!(ClimateCommand::new(15.5, HvacMode::Cool, FanMode::Low, &range).is_err());
        assert!(ClimateCommand::new(f64::NAN, HvacMode::Cool, FanMode::Low, &range).is_err());
    }

    #[test]
    fn water_heater_defaults() {
        let range = TemperatureRange::water_heater(&RemoteOptions::default());
        assert!(range.contains(40.0));
        assert!(range.contains(65.0));
        assert!(!range.contains(30.0));
    }
}
