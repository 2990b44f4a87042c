// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `switchbot_remote` - A Rust library to control infrared appliances through
//! the SwitchBot cloud API.
//!
//! A SwitchBot hub learns the IR signals of ordinary remotes. This library
//! lists those remotes, sends commands to them through the cloud API, and
//! tells a home-automation host which controls make sense for each one.
//!
//! # Supported Features
//!
//! - **Signed API client**: HMAC-SHA256 request signing, bounded retry on
//!   HTTP 500, camelCase/snake_case translation at the wire boundary
//! - **Remote dispatch**: device type string to [`GenericRemote`] or
//!   [`OtherRemote`], extensible through [`RemoteFactory`]
//! - **Classification**: device type to [`DeviceClass`], [`Capabilities`]
//!   and the configuration schema of a remote
//! - **Command vocabulary**: power, climate, fan, light, media, vacuum,
//!   camera and water heater commands
//! - **External sensors**: power and temperature feedback for IR appliances
//!
//! # Quick Start
//!
//! ```no_run
//! use switchbot_remote::SwitchBot;
//!
//! #[tokio::main]
//! async fn main() -> switchbot_remote::Result<()> {
//!     let switchbot = SwitchBot::new("token", "secret")?;
//!
//!     for remote in switchbot.remotes().await? {
//!         println!("{remote}: {}", remote.name());
//!     }
//!
//!     let ac = switchbot.remote("02-202301011234-12345678").await?;
//!     ac.turn("on").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Deciding what to expose
//!
//! ```
//! use switchbot_remote::{Capabilities, DeviceClass, OptionField, RemoteOptions, classify, config_schema};
//!
//! let class = classify("DIY Air Conditioner").unwrap();
//! assert_eq!(class, DeviceClass::AirConditioner);
//! assert!(Capabilities::for_class(class).climate);
//!
//! let schema = config_schema(class, &RemoteOptions::default());
//! assert!(schema.contains(OptionField::TemperatureSensor));
//! assert!(classify("Robot Arm").is_none());
//! ```
//!
//! ## Custom client settings
//!
//! ```no_run
//! use std::time::Duration;
//! use switchbot_remote::protocol::{ClientConfig, Credentials};
//! use switchbot_remote::{AccountConfig, SwitchBot};
//!
//! # fn example() -> switchbot_remote::Result<()> {
//! let account = AccountConfig::new("home", "token", "secret");
//! let config = ClientConfig::new()
//!     .with_max_attempts(3)
//!     .with_retry_delay(Duration::from_secs(1));
//! let switchbot = SwitchBot::with_config(account.credentials(), config)?;
//! # let _ = (switchbot, Credentials::new("t", "s"));
//! # Ok(())
//! # }
//! ```

mod capabilities;
pub mod command;
mod device_class;
pub mod error;
mod options;
pub mod protocol;
pub mod remote;
pub mod sensor;
mod session;
pub mod types;

pub use capabilities::{
    Capabilities, ConfigSchema, DEFAULT_CLIMATE_TEMP_MAX, DEFAULT_CLIMATE_TEMP_MIN,
    DEFAULT_CLIMATE_TEMP_STEP, DEFAULT_HVAC_MODES, DEFAULT_WATER_HEATER_TEMP_MAX,
    DEFAULT_WATER_HEATER_TEMP_MIN, FieldKind, OptionField, SchemaField, config_schema,
};
pub use command::{Command, CommandType, IrCommand, PowerCommands};
pub use device_class::{DeviceClass, classify, is_track_type, known_remote_types, remote_type};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use options::{AccountConfig, RemoteOptions, keys};
pub use protocol::{ApiClient, ClientConfig, Credentials};
pub use remote::{GenericRemote, OtherRemote, Remote, RemoteFactory};
pub use session::SwitchBot;
pub use types::{PowerState, RemoteFields, RemoteInfo};
