// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account and per-remote configuration.
//!
//! [`AccountConfig`] holds what the user enters once per SwitchBot account.
//! [`RemoteOptions`] holds the optional per-remote settings the host stores
//! next to each remote; which of them apply depends on the remote's class
//! (see [`crate::config_schema`]).

use serde::{Deserialize, Serialize};

use crate::protocol::Credentials;

/// Option keys as stored by the host.
pub mod keys {
    /// Entity id of a sensor reporting whether the appliance is powered.
    pub const POWER_SENSOR: &str = "power_sensor";
    /// Entity id of a temperature sensor.
    pub const TEMPERATURE_SENSOR: &str = "temperature_sensor";
    /// Entity id of a humidity sensor.
    pub const HUMIDITY_SENSOR: &str = "humidity_sensor";
    /// Lowest selectable target temperature.
    pub const TEMP_MIN: &str = "temp_min";
    /// Highest selectable target temperature.
    pub const TEMP_MAX: &str = "temp_max";
    /// Target temperature increment.
    pub const TEMP_STEP: &str = "temp_step";
    /// HVAC modes offered for an air conditioner.
    pub const HVAC_MODES: &str = "hvac_modes";
    /// Labels of learned buttons to expose.
    pub const CUSTOMIZE_COMMANDS: &str = "customize_commands";
    /// Fan supports speed selection.
    pub const WITH_SPEED: &str = "with_speed";
    /// Fan has an ionizer button.
    pub const WITH_ION: &str = "with_ion";
    /// Fan has a timer button.
    pub const WITH_TIMER: &str = "with_timer";
    /// Light has brightness buttons.
    pub const WITH_BRIGHTNESS: &str = "with_brightness";
    /// Light has color temperature buttons.
    pub const WITH_TEMPERATURE: &str = "with_temperature";
    /// Learned button used to switch on.
    pub const ON_COMMAND: &str = "on_command";
    /// Learned button used to switch off.
    pub const OFF_COMMAND: &str = "off_command";
    /// Whether the learned off button replaces the built-in one.
    pub const OVERRIDE_OFF_COMMAND: &str = "override_off_command";
}

/// Credentials entered when adding a SwitchBot account.
///
/// # Examples
///
/// ```
/// use switchbot_remote::AccountConfig;
///
/// let account: AccountConfig = serde_json::from_str(
///     r#"{"name": "Home", "token": "abc", "secret": "def"}"#,
/// ).unwrap();
/// assert_eq!(account.unique_id(), "switchbot_remote_Home");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Name given to the account.
    pub name: String,
    /// Open API token.
    pub token: String,
    /// Open API secret.
    pub secret: String,
}

impl AccountConfig {
    /// Creates an account configuration.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// Returns the identifier that keeps one entry per account name.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("switchbot_remote_{}", self.name)
    }

    /// Returns signing credentials with a fresh nonce.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.token, &self.secret)
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Optional settings for a single remote.
///
/// Every field is optional; unset fields fall back to the defaults of the
/// remote's class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteOptions {
    /// Entity id of a sensor reporting whether the appliance is powered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_sensor: Option<String>,
    /// Entity id of a temperature sensor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_sensor: Option<String>,
    /// Entity id of a humidity sensor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_sensor: Option<String>,
    /// Lowest selectable target temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_min: Option<f64>,
    /// Highest selectable target temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_max: Option<f64>,
    /// Target temperature increment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_step: Option<f64>,
    /// HVAC modes offered for an air conditioner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvac_modes: Option<Vec<String>>,
    /// Labels of learned buttons to expose.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customize_commands: Vec<String>,
    /// Fan supports speed selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_speed: Option<bool>,
    /// Fan has an ionizer button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_ion: Option<bool>,
    /// Fan has a timer button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_timer: Option<bool>,
    /// Light has brightness buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_brightness: Option<bool>,
    /// Light has color temperature buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_temperature: Option<bool>,
    /// Learned button used to switch on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_command: Option<String>,
    /// Learned button used to switch off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_command: Option<String>,
    /// Whether the learned off button replaces the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_off_command: Option<bool>,
}

impl RemoteOptions {
    /// Returns the learned button labels, skipping blank entries.
    pub fn custom_commands(&self) -> impl Iterator<Item = &str> {
        self.customize_commands
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_from_partial_map() {
        let options: RemoteOptions = serde_json::from_value(json!({
            "power_sensor": "binary_sensor.tv_power",
            "with_ion": true,
            "customize_commands": ["NIGHT", "  ", ""]
        }))
        .unwrap();

        assert_eq!(options.power_sensor.as_deref(), Some("binary_sensor.tv_power"));
        assert_eq!(options.with_ion, Some(true));
        assert!(options.with_timer.is_none());
        assert_eq!(options.custom_commands().collect::<Vec<_>>(), vec!["NIGHT"]);
    }

    #[test]
    fn empty_options_serialize_to_empty_object() {
        let value = serde_json::to_value(RemoteOptions::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options: RemoteOptions =
            serde_json::from_value(json!({"legacy_key": 3, "temp_min": 18})).unwrap();
        assert_eq!(options.temp_min, Some(18.0));
    }

    #[test]
    fn account_debug_redacts_secrets() {
        let account = AccountConfig::new("Home", "tok", "sec");
        let debug = format!("{account:?}");
        assert!(debug.contains("Home"));
        assert!(!debug.contains("tok\""));
        assert!(!debug.contains("sec\""));
    }
}
