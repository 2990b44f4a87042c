// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-class capabilities and configuration schemas.
//!
//! Both are plain data derived from a [`DeviceClass`]. The entity layer uses
//! [`Capabilities`] to decide which controls to expose for a remote, and the
//! configuration UI uses [`config_schema`] to decide which optional fields
//! to offer, pre-filled from the options already stored for that remote.

use serde_json::{Value, json};

use crate::device_class::{DeviceClass, classify, is_track_type};
use crate::options::{RemoteOptions, keys};

/// Default lower bound of an air conditioner's target temperature (°C).
pub const DEFAULT_CLIMATE_TEMP_MIN: f64 = 16.0;
/// Default upper bound of an air conditioner's target temperature (°C).
pub const DEFAULT_CLIMATE_TEMP_MAX: f64 = 30.0;
/// Default target temperature increment (°C).
pub const DEFAULT_CLIMATE_TEMP_STEP: f64 = 1.0;
/// Default lower bound of a water heater's target temperature (°C).
pub const DEFAULT_WATER_HEATER_TEMP_MIN: f64 = 40.0;
/// Default upper bound of a water heater's target temperature (°C).
pub const DEFAULT_WATER_HEATER_TEMP_MAX: f64 = 65.0;
/// HVAC modes offered when none are configured.
pub const DEFAULT_HVAC_MODES: [&str; 5] = ["off", "cool", "dry", "fan_only", "heat"];

/// Controls a remote of a given class can offer.
///
/// # Examples
///
/// ```
/// use switchbot_remote::{Capabilities, DeviceClass};
///
/// let fan = Capabilities::for_class(DeviceClass::Fan);
/// assert!(fan.power);
/// assert!(fan.fan_speed);
/// assert!(!fan.climate);
///
/// let others = Capabilities::for_class(DeviceClass::Others);
/// assert!(!others.power);
/// assert!(others.custom_commands);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
// Each flag is an independent control; several are set together per class.
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Built-in `turnOn` / `turnOff`.
    pub power: bool,
    /// Combined `setAll` (temperature, HVAC mode, fan mode, power).
    pub climate: bool,
    /// Ordered speed commands.
    pub fan_speed: bool,
    /// `swing` toggle.
    pub oscillation: bool,
    /// Volume up/down and mute.
    pub volume: bool,
    /// Channel up/down and direct channel selection.
    pub channel: bool,
    /// Next/previous track and play.
    pub track: bool,
    /// Learned `CHARGE` button.
    pub return_to_base: bool,
    /// Learned `SHUTTER` / `MENU` / `TIMER` buttons.
    pub camera_buttons: bool,
    /// Off / heat-pump operation modes.
    pub operation_mode: bool,
    /// Arbitrary learned buttons.
    pub custom_commands: bool,
}

impl Capabilities {
    /// Returns the capabilities shared by every remote of a class.
    ///
    /// Media remotes get channel controls here; use
    /// [`Capabilities::for_remote_type`] to distinguish track-based players.
    #[must_use]
    pub const fn for_class(class: DeviceClass) -> Self {
        let base = Self {
            power: true,
            climate: false,
            fan_speed: false,
            oscillation: false,
            volume: false,
            channel: false,
            track: false,
            return_to_base: false,
            camera_buttons: false,
            operation_mode: false,
            custom_commands: true,
        };
        match class {
            DeviceClass::AirConditioner => Self {
                climate: true,
                ..base
            },
            DeviceClass::Fan => Self {
                fan_speed: true,
                oscillation: true,
                ..base
            },
            DeviceClass::Light => base,
            DeviceClass::Media => Self {
                volume: true,
                channel: true,
                ..base
            },
            DeviceClass::Camera => Self {
                power: false,
                camera_buttons: true,
                ..base
            },
            DeviceClass::Vacuum => Self {
                return_to_base: true,
                ..base
            },
            DeviceClass::WaterHeater => Self {
                operation_mode: true,
                ..base
            },
            DeviceClass::Others => Self {
                power: false,
                ..base
            },
        }
    }

    /// Returns the capabilities of a device type, or `None` if unclassified.
    #[must_use]
    pub fn for_remote_type(remote_type: &str) -> Option<Self> {
        let mut caps = Self::for_class(classify(remote_type)?);
        if is_track_type(remote_type) {
            caps.channel = false;
            caps.track = true;
        }
        Some(caps)
    }
}

/// An optional per-remote setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    /// Power state sensor.
    PowerSensor,
    /// Temperature sensor.
    TemperatureSensor,
    /// Humidity sensor.
    HumiditySensor,
    /// Lowest target temperature.
    TempMin,
    /// Highest target temperature.
    TempMax,
    /// Target temperature increment.
    TempStep,
    /// Offered HVAC modes.
    HvacModes,
    /// Learned button labels.
    CustomizeCommands,
    /// Fan speed selection.
    WithSpeed,
    /// Ionizer button.
    WithIon,
    /// Timer button.
    WithTimer,
    /// Brightness buttons.
    WithBrightness,
    /// Color temperature buttons.
    WithTemperature,
    /// Learned power-on button.
    OnCommand,
    /// Learned power-off button.
    OffCommand,
    /// Use the power-off button instead of `setAll ...,off`.
    OverrideOffCommand,
}

impl OptionField {
    /// Returns the storage key of the field.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::PowerSensor => keys::POWER_SENSOR,
            Self::TemperatureSensor => keys::TEMPERATURE_SENSOR,
            Self::HumiditySensor => keys::HUMIDITY_SENSOR,
            Self::TempMin => keys::TEMP_MIN,
            Self::TempMax => keys::TEMP_MAX,
            Self::TempStep => keys::TEMP_STEP,
            Self::HvacModes => keys::HVAC_MODES,
            Self::CustomizeCommands => keys::CUSTOMIZE_COMMANDS,
            Self::WithSpeed => keys::WITH_SPEED,
            Self::WithIon => keys::WITH_ION,
            Self::WithTimer => keys::WITH_TIMER,
            Self::WithBrightness => keys::WITH_BRIGHTNESS,
            Self::WithTemperature => keys::WITH_TEMPERATURE,
            Self::OnCommand => keys::ON_COMMAND,
            Self::OffCommand => keys::OFF_COMMAND,
            Self::OverrideOffCommand => keys::OVERRIDE_OFF_COMMAND,
        }
    }
}

/// The input widget a field needs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// An entity id from the given host domains.
    Entity {
        /// Accepted entity domains.
        domains: &'static [&'static str],
    },
    /// A number within bounds.
    Number {
        /// Lowest accepted value.
        min: f64,
        /// Highest accepted value.
        max: f64,
        /// Increment.
        step: f64,
    },
    /// A boolean toggle.
    Toggle,
    /// Free text.
    Text,
    /// A list of free-text entries.
    TextList,
    /// Several values out of a fixed set.
    MultiSelect {
        /// The selectable values.
        choices: &'static [&'static str],
    },
}

/// One field of a configuration form.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    /// Which option the field edits.
    pub field: OptionField,
    /// The widget kind.
    pub kind: FieldKind,
    /// The value to pre-fill: the stored option if any, else the class default.
    pub default: Option<Value>,
}

/// The optional fields that apply to one remote.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigSchema {
    /// Fields in display order.
    pub fields: Vec<SchemaField>,
}

impl ConfigSchema {
    /// Returns `true` if the schema contains the field.
    #[must_use]
    pub fn contains(&self, field: OptionField) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    /// Returns the schema entry for a field.
    #[must_use]
    pub fn get(&self, field: OptionField) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Returns the storage keys of all fields.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.field.key())
    }

    fn push(&mut self, field: OptionField, kind: FieldKind, default: Option<Value>) {
        self.fields.push(SchemaField {
            field,
            kind,
            default,
        });
    }
}

const POWER_DOMAINS: &[&str] = &["binary_sensor", "input_boolean", "light", "sensor", "switch"];
const TEMPERATURE_DOMAINS: &[&str] = &["sensor", "input_number"];
const HVAC_CHOICES: &[&str] = &["off", "auto", "cool", "dry", "fan_only", "heat", "heat_cool"];

/// Returns the configuration form for a remote of the given class.
///
/// Stored options pre-fill the form; unset numbers and mode lists fall back
/// to the class defaults, unset sensors and texts are left empty.
///
/// # Examples
///
/// ```
/// use switchbot_remote::{DeviceClass, OptionField, RemoteOptions, config_schema};
///
/// let schema = config_schema(DeviceClass::Light, &RemoteOptions::default());
/// assert!(schema.contains(OptionField::WithBrightness));
/// assert!(!schema.contains(OptionField::HvacModes));
/// ```
#[must_use]
pub fn config_schema(class: DeviceClass, existing: &RemoteOptions) -> ConfigSchema {
    let mut schema = ConfigSchema::default();

    let text = |v: &Option<String>| v.as_ref().map(|s| json!(s));
    let toggle = |v: Option<bool>| Some(json!(v.unwrap_or(false)));
    let power_sensor = |schema: &mut ConfigSchema| {
        schema.push(
            OptionField::PowerSensor,
            FieldKind::Entity {
                domains: POWER_DOMAINS,
            },
            text(&existing.power_sensor),
        );
    };
    let power_commands = |schema: &mut ConfigSchema| {
        schema.push(OptionField::OnCommand, FieldKind::Text, text(&existing.on_command));
        schema.push(OptionField::OffCommand, FieldKind::Text, text(&existing.off_command));
    };
    let temperature_bounds = |schema: &mut ConfigSchema, min: f64, max: f64| {
        let bounds = FieldKind::Number {
            min: 0.0,
            max: 100.0,
            step: 0.5,
        };
        schema.push(
            OptionField::TempMin,
            bounds.clone(),
            Some(json!(existing.temp_min.unwrap_or(min))),
        );
        schema.push(
            OptionField::TempMax,
            bounds,
            Some(json!(existing.temp_max.unwrap_or(max))),
        );
    };

    match class {
        DeviceClass::AirConditioner => {
            power_sensor(&mut schema);
            schema.push(
                OptionField::TemperatureSensor,
                FieldKind::Entity {
                    domains: TEMPERATURE_DOMAINS,
                },
                text(&existing.temperature_sensor),
            );
            schema.push(
                OptionField::HumiditySensor,
                FieldKind::Entity {
                    domains: TEMPERATURE_DOMAINS,
                },
                text(&existing.humidity_sensor),
            );
            temperature_bounds(
                &mut schema,
                DEFAULT_CLIMATE_TEMP_MIN,
                DEFAULT_CLIMATE_TEMP_MAX,
            );
            schema.push(
                OptionField::TempStep,
                FieldKind::Number {
                    min: 0.1,
                    max: 10.0,
                    step: 0.1,
                },
                Some(json!(
                    existing.temp_step.unwrap_or(DEFAULT_CLIMATE_TEMP_STEP)
                )),
            );
            let modes = existing
                .hvac_modes
                .clone()
                .unwrap_or_else(|| DEFAULT_HVAC_MODES.iter().map(ToString::to_string).collect());
            schema.push(
                OptionField::HvacModes,
                FieldKind::MultiSelect {
                    choices: HVAC_CHOICES,
                },
                Some(json!(modes)),
            );
            power_commands(&mut schema);
            schema.push(
                OptionField::OverrideOffCommand,
                FieldKind::Toggle,
                toggle(existing.override_off_command),
            );
        }
        DeviceClass::Fan => {
            power_sensor(&mut schema);
            schema.push(OptionField::WithSpeed, FieldKind::Toggle, toggle(existing.with_speed));
            schema.push(OptionField::WithIon, FieldKind::Toggle, toggle(existing.with_ion));
            schema.push(OptionField::WithTimer, FieldKind::Toggle, toggle(existing.with_timer));
            power_commands(&mut schema);
        }
        DeviceClass::Light => {
            power_sensor(&mut schema);
            schema.push(
                OptionField::WithBrightness,
                FieldKind::Toggle,
                toggle(existing.with_brightness),
            );
            schema.push(
                OptionField::WithTemperature,
                FieldKind::Toggle,
                toggle(existing.with_temperature),
            );
            power_commands(&mut schema);
        }
        DeviceClass::Media | DeviceClass::Vacuum | DeviceClass::Others => {
            power_sensor(&mut schema);
            power_commands(&mut schema);
        }
        DeviceClass::Camera => {}
        DeviceClass::WaterHeater => {
            power_sensor(&mut schema);
            schema.push(
                OptionField::TemperatureSensor,
                FieldKind::Entity {
                    domains: TEMPERATURE_DOMAINS,
                },
                text(&existing.temperature_sensor),
            );
            temperature_bounds(
                &mut schema,
                DEFAULT_WATER_HEATER_TEMP_MIN,
                DEFAULT_WATER_HEATER_TEMP_MAX,
            );
            power_commands(&mut schema);
        }
    }

    schema.push(
        OptionField::CustomizeCommands,
        FieldKind::TextList,
        Some(json!(existing.customize_commands)),
    );

    schema
}
