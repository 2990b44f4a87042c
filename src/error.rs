// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `switchbot_remote` library.
//!
//! Failures are grouped by where they originate: argument validation before
//! any request is made, communication with the cloud API, decoding of the
//! API's responses, and lookups against the remote list.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during communication with the cloud API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// No remote with the given id exists on the account.
    #[error("unknown remote {0}")]
    RemoteNotFound(String),

    /// The remote's behavior does not offer the requested operation.
    #[error("{remote_type} remote does not support {capability}")]
    CapabilityNotSupported {
        /// Device type of the remote.
        remote_type: String,
        /// The operation that was requested.
        capability: String,
    },
}

/// Errors related to value validation and constraints.
///
/// These are raised before anything is sent to the API.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// A power state other than `on` or `off` was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A channel number containing something other than digits.
    #[error("invalid channel: {0}")]
    InvalidChannel(String),

    /// An HVAC or fan mode name that the climate vocabulary does not know.
    #[error("invalid mode: {0}")]
    InvalidMode(String),
}

/// Errors related to communication with the cloud API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered a single attempt with HTTP 500.
    #[error("SwitchBot API server returned status 500")]
    ServerError,

    /// Every attempt of the retry budget ended with HTTP 500.
    #[error("SwitchBot API server failed {attempts} consecutive attempts with status 500")]
    RepeatedServerErrors {
        /// Number of attempts made.
        attempts: u32,
    },

    /// The server answered with a non-200 status other than 500.
    #[error("SwitchBot API server returns status {status}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The server answered HTTP 200 but the body reports a failure.
    #[error("an error occurred: {message} (status code {status_code})")]
    Api {
        /// The application-level status code from the body.
        status_code: i64,
        /// The human-readable message from the body.
        message: String,
    },

    /// Invalid base URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Token or nonce cannot be sent as an HTTP header value.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}

impl ProtocolError {
    /// Returns `true` if the failure is worth another attempt.
    ///
    /// Only a plain HTTP 500 qualifies. Timeouts, rate limits and connection
    /// failures are reported on first occurrence.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ServerError)
    }

    /// Returns the HTTP status code of a failed HTTP exchange, if any.
    ///
    /// `Api` failures arrive with HTTP 200 and yield `None`; their
    /// `status_code` and `message` describe the failure.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::ServerError | Self::RepeatedServerErrors { .. } => Some(500),
            Self::UnexpectedStatus { status } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Api { .. } | Self::InvalidAddress(_) | Self::InvalidCredentials(_) => None,
        }
    }
}

/// Errors related to parsing API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidPowerState("standby".to_string());
        assert_eq!(err.to_string(), "invalid power state: standby");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidChannel("1a".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidChannel(_))));
    }

    #[test]
    fn only_server_error_is_transient() {
        assert!(ProtocolError::ServerError.is_transient());
        assert!(!ProtocolError::RepeatedServerErrors { attempts: 5 }.is_transient());
        assert!(!ProtocolError::UnexpectedStatus { status: 429 }.is_transient());
        assert!(
            !ProtocolError::Api {
                status_code: 190,
                message: "device internal error".to_string(),
            }
            .is_transient()
        );
    }

    #[test]
    fn protocol_error_carries_context() {
        let err = ProtocolError::UnexpectedStatus { status: 404 };
        assert_eq!(err.http_status(), Some(404));
        assert_eq!(err.to_string(), "SwitchBot API server returns status 404");

        let err = ProtocolError::Api {
            status_code: 152,
            message: "device not found".to_string(),
        };
        assert!(err.to_string().contains("device not found"));
        assert_eq!(err.http_status(), None);
        assert_eq!(ProtocolError::ServerError.http_status(), Some(500));
    }

    #[test]
    fn out_of_range_display() {
        let err = ValueError::OutOfRange {
            min: 16.0,
            max: 30.0,
            actual: 30.5,
        };
        assert_eq!(err.to_string(), "value 30.5 is out of range [16, 30]");
    }

    #[test]
    fn not_found_display() {
        let err = Error::RemoteNotFound("Z9".to_string());
        assert_eq!(err.to_string(), "unknown remote Z9");
    }
}
