// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the remote and command layers.
//!
//! - [`PowerState`] - On/Off states accepted by `turn`
//! - [`RemoteInfo`] - Identity of one infrared remote as listed by the API

mod power;
mod remote_info;

pub use power::PowerState;
pub(crate) use remote_info::RemoteEntry;
pub use remote_info::{RemoteFields, RemoteInfo};
