// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Communication with the SwitchBot cloud API.
//!
//! - [`Credentials`] / [`SignedHeaders`]: per-request HMAC signing
//! - [`ApiClient`]: signed HTTP requests with bounded retry on HTTP 500
//! - [`ClientConfig`]: base URL, timeout and retry settings
//! - [`camelize`] / [`decamelize`]: key-case translation at the wire boundary

mod case;
mod http;
mod signer;

pub use case::{camelize, decamelize, to_camel_case, to_snake_case};
pub use http::{ApiClient, ClientConfig};
pub use signer::{Credentials, SignedHeaders};

use serde_json::Value;

use crate::error::ParseError;

/// Application-level status code reported by successful calls.
pub const STATUS_SUCCESS: i64 = 100;

/// A successful API response, with keys already in snake_case.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    value: Value,
}

impl ApiResponse {
    /// Wraps an already normalized response document.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Returns the application-level status code.
    #[must_use]
    pub fn status_code(&self) -> Option<i64> {
        self.value.get("status_code").and_then(Value::as_i64)
    }

    /// Returns the message field.
    #[must_use]
    pub fn message(&self) -> &str {
        self.value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns the `body` field, or `Null` if it is absent.
    #[must_use]
    pub fn body(&self) -> &Value {
        self.value.get("body").unwrap_or(&Value::Null)
    }

    /// Returns the whole normalized document.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Deserializes the `body` field into a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be deserialized into the target type.
    pub fn parse_body<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        T::deserialize(self.body()).map_err(Into::into)
    }
}
