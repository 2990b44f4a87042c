// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key-case translation between the wire format and the in-memory model.
//!
//! The API speaks camelCase (`statusCode`, `infraredRemoteList`); everything
//! inside the crate uses snake_case. Only object keys are rewritten, values
//! are left untouched, and nested objects and arrays are handled recursively.

use serde_json::{Map, Value};

/// Converts a camelCase key to snake_case.
///
/// # Examples
///
/// ```
/// use switchbot_remote::protocol::to_snake_case;
///
/// assert_eq!(to_snake_case("hubDeviceId"), "hub_device_id");
/// assert_eq!(to_snake_case("status_code"), "status_code");
/// ```
#[must_use]
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a snake_case key to camelCase.
///
/// # Examples
///
/// ```
/// use switchbot_remote::protocol::to_camel_case;
///
/// assert_eq!(to_camel_case("command_type"), "commandType");
/// assert_eq!(to_camel_case("turn_on"), "turnOn");
/// ```
#[must_use]
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' && !out.is_empty() {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Rewrites every object key in `value` to snake_case.
#[must_use]
pub fn decamelize(value: Value) -> Value {
    rewrite_keys(value, &to_snake_case)
}

/// Rewrites every object key in `value` to camelCase.
#[must_use]
pub fn camelize(value: Value) -> Value {
    rewrite_keys(value, &to_camel_case)
}

fn rewrite_keys(value: Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (convert(&k), rewrite_keys(v, convert)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| rewrite_keys(v, convert))
                .collect(),
        ),
        other => other,
    }
}
