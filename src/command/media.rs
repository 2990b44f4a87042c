// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Media player commands (TV, IPTV, set top box, DVD, speaker, projector).

use crate::command::{Command, IrCommand};
use crate::device_class::is_track_type;
use crate::error::ValueError;

/// Media commands.
///
/// Players that navigate by track (DVD, speaker, projector) use `Next`,
/// `Previous` and `Play`; the others step channels instead. Use
/// [`MediaCommand::next_for`] and [`MediaCommand::previous_for`] to pick the
/// right one for a device type.
///
/// # Examples
///
/// ```
/// use switchbot_remote::command::{Command, MediaCommand};
///
/// assert_eq!(MediaCommand::next_for("TV").action(), "channelAdd");
/// assert_eq!(MediaCommand::next_for("DVD").action(), "Next");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    /// Volume up.
    VolumeUp,
    /// Volume down.
    VolumeDown,
    /// Toggle mute.
    Mute,
    /// Next channel.
    ChannelUp,
    /// Previous channel.
    ChannelDown,
    /// Next track.
    NextTrack,
    /// Previous track.
    PreviousTrack,
    /// Start playback.
    Play,
}

impl MediaCommand {
    /// Returns the "next" command for a device type.
    #[must_use]
    pub fn next_for(remote_type: &str) -> Self {
        if is_track_type(remote_type) {
            Self::NextTrack
        } else {
            Self::ChannelUp
        }
    }

    /// Returns the "previous" command for a device type.
    #[must_use]
    pub fn previous_for(remote_type: &str) -> Self {
        if is_track_type(remote_type) {
            Self::PreviousTrack
        } else {
            Self::ChannelDown
        }
    }
}

impl Command for MediaCommand {
    fn action(&self) -> String {
        match self {
            Self::VolumeUp => "volumeAdd",
            Self::VolumeDown => "volumeSub",
            Self::Mute => "setMute",
            Self::ChannelUp => "channelAdd",
            Self::ChannelDown => "channelSub",
            Self::NextTrack => "Next",
            Self::PreviousTrack => "Previous",
            Self::Play => "Play",
        }
        .to_string()
    }
}

/// Returns the commands that select a channel number, one per digit.
///
/// Each digit is sent as the learned `SetChannel` button with the digit as
/// parameter.
///
/// # Errors
///
/// Returns `ValueError::InvalidChannel` if `channel` is empty or contains
/// anything but ASCII digits.
///
/// # Examples
///
/// ```
/// use switchbot_remote::command::{Command, channel_commands};
///
/// let cmds = channel_commands("42").unwrap();
/// assert_eq!(cmds.len(), 2);
/// assert_eq!(cmds[0].parameter(), "4");
/// assert!(channel_commands("4a").is_err());
/// ```
pub fn channel_commands(channel: &str) -> Result<Vec<IrCommand>, ValueError> {
    if channel.is_empty() || !channel.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValueError::InvalidChannel(channel.to_string()));
    }
    Ok(channel
        .chars()
        .map(|digit| IrCommand::custom("SetChannel").with_parameter(digit.to_string()))
        .collect())
}
