// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Push buttons exposed for learned commands.

use crate::command::{CameraCommand, Command, FanCommand, IrCommand, LightCommand, to_ir_command};
use crate::device_class::{DeviceClass, classify};
use crate::options::RemoteOptions;

/// A push button bound to one learned command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Label of the learned command, also used as the button name.
    pub label: String,
    /// Icon hint for the host UI.
    pub icon: &'static str,
    /// The command sent when pressed.
    pub command: IrCommand,
}

impl Button {
    fn new<C: Command>(command: &C, icon: &'static str) -> Self {
        let command = to_ir_command(command);
        Self {
            label: command.action(),
            icon,
            command,
        }
    }
}

/// Returns the buttons a remote should expose.
///
/// Cameras always get their three buttons; fans and lights get theirs when
/// enabled in the options. Every non-blank entry of `customize_commands` adds
/// one more button, for any device type including unclassified ones.
///
/// # Examples
///
/// ```
/// use switchbot_remote::RemoteOptions;
/// use switchbot_remote::command::buttons;
///
/// let options = RemoteOptions {
///     with_brightness: Some(true),
///     ..RemoteOptions::default()
/// };
/// let labels: Vec<_> = buttons("Light", &options).into_iter().map(|b| b.label).collect();
/// assert_eq!(labels, ["DARKER", "BRIGHTER"]);
/// ```
#[must_use]
pub fn buttons(remote_type: &str, options: &RemoteOptions) -> Vec<Button> {
    let mut out = Vec::new();
    let enabled = |flag: Option<bool>| flag.unwrap_or(false);

    match classify(remote_type) {
        Some(DeviceClass::Camera) => {
            out.push(Button::new(&CameraCommand::Shutter, "mdi:camera-iris"));
            out.push(Button::new(&CameraCommand::Menu, "mdi:menu"));
            out.push(Button::new(&CameraCommand::Timer, "mdi:timer"));
        }
        Some(DeviceClass::Fan) => {
            if enabled(options.with_ion) {
                out.push(Button::new(&FanCommand::Ion, "mdi:air-filter"));
            }
            if enabled(options.with_timer) {
                out.push(Button::new(&FanCommand::Timer, "mdi:timer"));
            }
        }
        Some(DeviceClass::Light) => {
            if enabled(options.with_brightness) {
                out.push(Button::new(&LightCommand::Darker, "mdi:brightness-4"));
                out.push(Button::new(&LightCommand::Brighter, "mdi:brightness-6"));
            }
            if enabled(options.with_temperature) {
                out.push(Button::new(&LightCommand::Warm, "mdi:octagram-minus"));
                out.push(Button::new(&LightCommand::White, "mdi:octagram-plus"));
            }
        }
        _ => {}
    }

    out.extend(
        options
            .custom_commands()
            .map(|label| Button::new(&IrCommand::custom(label), "mdi:remote")),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(remote_type: &str, options: &RemoteOptions) -> Vec<String> {
        buttons(remote_type, options)
            .into_iter()
            .map(|b| b.label)
            .collect()
    }

    #[test]
    fn camera_buttons_always_present() {
        assert_eq!(
            labels("DIY Camera", &RemoteOptions::default()),
            ["SHUTTER", "MENU", "TIMER"]
        );
    }

    #[test]
    fn fan_buttons_follow_options() {
        assert!(labels("Fan", &RemoteOptions::default()).is_empty());

        let options = RemoteOptions {
            with_ion: Some(true),
            with_timer: Some(true),
            ..RemoteOptions::default()
        };
        assert_eq!(labels("Air Purifier", &options), ["ION", "TIMER"]);
    }

    #[test]
    fn light_temperature_buttons() {
        let options = RemoteOptions {
            with_temperature: Some(true),
            ..RemoteOptions::default()
        };
        assert_eq!(labels("DIY Light", &options), ["WARM", "WHITE"]);
    }

    #[test]
    fn custom_commands_for_any_type() {
        let options = RemoteOptions {
            customize_commands: vec!["OPEN".to_string(), " ".to_string(), "CLOSE".to_string()],
            ..RemoteOptions::default()
        };
        let buttons = buttons("Smart Curtain 3.0", &options);
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label, "OPEN");
        assert_eq!(buttons[0].icon, "mdi:remote");
        assert!(buttons[1].command.is_custom());
    }

    #[test]
    fn builtin_buttons_are_learned_commands() {
        for button in buttons("Camera", &RemoteOptions::default()) {
            assert!(button.command.is_custom());
        }
    }
}
