// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of device-type strings into behavioral families.
//!
//! The API reports an open vocabulary of device types, including "DIY"
//! variants for remotes whose buttons were learned by hand. Each known type
//! belongs to exactly one [`DeviceClass`]; anything else is unclassified and
//! [`classify`] returns `None` for it.

use std::fmt;

/// Device-type strings reported by the API.
pub mod remote_type {
    /// Learned air conditioner remote.
    pub const DIY_AIR_CONDITIONER: &str = "DIY Air Conditioner";
    /// Air conditioner remote.
    pub const AIR_CONDITIONER: &str = "Air Conditioner";

    /// Learned fan remote.
    pub const DIY_FAN: &str = "DIY Fan";
    /// Fan remote.
    pub const FAN: &str = "Fan";
    /// Learned air purifier remote.
    pub const DIY_AIR_PURIFIER: &str = "DIY Air Purifier";
    /// Air purifier remote.
    pub const AIR_PURIFIER: &str = "Air Purifier";

    /// Learned light remote.
    pub const DIY_LIGHT: &str = "DIY Light";
    /// Light remote.
    pub const LIGHT: &str = "Light";

    /// Learned TV remote.
    pub const DIY_TV: &str = "DIY TV";
    /// TV remote.
    pub const TV: &str = "TV";
    /// Learned IPTV remote.
    pub const DIY_IPTV: &str = "DIY IPTV";
    /// IPTV remote.
    pub const IPTV: &str = "IPTV";
    /// Learned DVD remote.
    pub const DIY_DVD: &str = "DIY DVD";
    /// DVD remote.
    pub const DVD: &str = "DVD";
    /// Learned speaker remote.
    pub const DIY_SPEAKER: &str = "DIY Speaker";
    /// Speaker remote.
    pub const SPEAKER: &str = "Speaker";
    /// Learned set top box remote.
    pub const DIY_SET_TOP_BOX: &str = "DIY Set Top Box";
    /// Set top box remote.
    pub const SET_TOP_BOX: &str = "Set Top Box";
    /// Learned projector remote.
    pub const DIY_PROJECTOR: &str = "DIY Projector";
    /// Projector remote.
    pub const PROJECTOR: &str = "Projector";

    /// Learned camera remote.
    pub const DIY_CAMERA: &str = "DIY Camera";
    /// Camera remote.
    pub const CAMERA: &str = "Camera";

    /// Learned vacuum cleaner remote.
    pub const DIY_VACUUM_CLEANER: &str = "DIY Vacuum Cleaner";
    /// Vacuum cleaner remote.
    pub const VACUUM_CLEANER: &str = "Vacuum Cleaner";

    /// Learned water heater remote.
    pub const DIY_WATER_HEATER: &str = "DIY Water Heater";
    /// Water heater remote.
    pub const WATER_HEATER: &str = "Water Heater";

    /// Fully custom remote with only learned buttons.
    pub const OTHERS: &str = "Others";
}

/// Behavioral family of a remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Air conditioners.
    AirConditioner,
    /// Fans and air purifiers.
    Fan,
    /// Lights.
    Light,
    /// TVs, set top boxes, speakers, disc players and projectors.
    Media,
    /// Cameras.
    Camera,
    /// Vacuum cleaners.
    Vacuum,
    /// Water heaters.
    WaterHeater,
    /// Custom remotes.
    Others,
}

use remote_type as rt;

/// Every known device type and its class.
const CLASS_BY_TYPE: &[(&str, DeviceClass)] = &[
    (rt::DIY_AIR_CONDITIONER, DeviceClass::AirConditioner),
    (rt::AIR_CONDITIONER, DeviceClass::AirConditioner),
    (rt::DIY_FAN, DeviceClass::Fan),
    (rt::FAN, DeviceClass::Fan),
    (rt::DIY_AIR_PURIFIER, DeviceClass::Fan),
    (rt::AIR_PURIFIER, DeviceClass::Fan),
    (rt::DIY_LIGHT, DeviceClass::Light),
    (rt::LIGHT, DeviceClass::Light),
    (rt::DIY_TV, DeviceClass::Media),
    (rt::TV, DeviceClass::Media),
    (rt::DIY_IPTV, DeviceClass::Media),
    (rt::IPTV, DeviceClass::Media),
    (rt::DIY_DVD, DeviceClass::Media),
    (rt::DVD, DeviceClass::Media),
    (rt::DIY_SPEAKER, DeviceClass::Media),
    (rt::SPEAKER, DeviceClass::Media),
    (rt::DIY_SET_TOP_BOX, DeviceClass::Media),
    (rt::SET_TOP_BOX, DeviceClass::Media),
    (rt::DIY_PROJECTOR, DeviceClass::Media),
    (rt::PROJECTOR, DeviceClass::Media),
    (rt::DIY_CAMERA, DeviceClass::Camera),
    (rt::CAMERA, DeviceClass::Camera),
    (rt::DIY_VACUUM_CLEANER, DeviceClass::Vacuum),
    (rt::VACUUM_CLEANER, DeviceClass::Vacuum),
    (rt::DIY_WATER_HEATER, DeviceClass::WaterHeater),
    (rt::WATER_HEATER, DeviceClass::WaterHeater),
    (rt::OTHERS, DeviceClass::Others),
];

/// Media types with track controls instead of channel controls.
const TRACK_TYPES: &[&str] = &[
    rt::DIY_DVD,
    rt::DVD,
    rt::DIY_SPEAKER,
    rt::SPEAKER,
    rt::DIY_PROJECTOR,
    rt::PROJECTOR,
];

/// Returns the class of a device type, or `None` if the type is unknown.
///
/// # Examples
///
/// ```
/// use switchbot_remote::{DeviceClass, classify};
///
/// assert_eq!(classify("DIY Fan"), Some(DeviceClass::Fan));
/// assert_eq!(classify("Smart Curtain 3.0"), None);
/// ```
#[must_use]
pub fn classify(remote_type: &str) -> Option<DeviceClass> {
    CLASS_BY_TYPE
        .iter()
        .find(|(name, _)| *name == remote_type)
        .map(|(_, class)| *class)
}

/// Returns `true` if a media type navigates by track rather than channel.
#[must_use]
pub fn is_track_type(remote_type: &str) -> bool {
    TRACK_TYPES.contains(&remote_type)
}

/// Returns every device type known to [`classify`].
pub fn known_remote_types() -> impl Iterator<Item = &'static str> {
    CLASS_BY_TYPE.iter().map(|(name, _)| *name)
}

impl DeviceClass {
    /// All classes.
    pub const ALL: [Self; 8] = [
        Self::AirConditioner,
        Self::Fan,
        Self::Light,
        Self::Media,
        Self::Camera,
        Self::Vacuum,
        Self::WaterHeater,
        Self::Others,
    ];

    /// Returns the display name of the class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AirConditioner => "Air Conditioner",
            Self::Fan => "Fan",
            Self::Light => "Light",
            Self::Media => "Media",
            Self::Camera => "Camera",
            Self::Vacuum => "Vacuum",
            Self::WaterHeater => "Water Heater",
            Self::Others => "Others",
        }
    }

    /// Returns the device types that belong to this class.
    #[must_use]
    pub fn remote_types(&self) -> Vec<&'static str> {
        CLASS_BY_TYPE
            .iter()
            .filter(|(_, class)| class == self)
            .map(|(name, _)| *name)
            .collect()
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
