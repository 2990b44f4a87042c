// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request signing for the SwitchBot cloud API.
//!
//! Every request carries four headers: the account token, a millisecond
//! timestamp, a nonce and an HMAC-SHA256 signature over
//! `token + timestamp + nonce` keyed with the account secret.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Account credentials used to sign requests.
///
/// The nonce is generated once and reused for the lifetime of the
/// credentials; only the timestamp changes between requests.
///
/// # Examples
///
/// ```
/// use switchbot_remote::protocol::Credentials;
///
/// let creds = Credentials::new("token", "secret");
/// assert_eq!(creds.token(), "token");
/// assert!(!creds.nonce().is_empty());
/// ```
#[derive(Clone)]
pub struct Credentials {
    token: String,
    secret: String,
    nonce: String,
}

impl Credentials {
    /// Creates credentials with a freshly generated random nonce.
    #[must_use]
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::with_nonce(token, secret, uuid::Uuid::new_v4().to_string())
    }

    /// Creates credentials with an explicit nonce.
    #[must_use]
    pub fn with_nonce(
        token: impl Into<String>,
        secret: impl Into<String>,
        nonce: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
            nonce: nonce.into(),
        }
    }

    /// Returns the account token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the nonce sent with every request.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Computes the headers for a request issued now.
    #[must_use]
    pub fn sign_now(&self) -> SignedHeaders {
        self.sign_at(chrono::Utc::now().timestamp_millis())
    }

    /// Computes the headers for a request issued at `timestamp_ms`.
    ///
    /// The result depends only on the credentials and the timestamp.
    #[must_use]
    pub fn sign_at(&self, timestamp_ms: i64) -> SignedHeaders {
        let timestamp = timestamp_ms.to_string();
        let message = format!("{}{}{}", self.token, timestamp, self.nonce);

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts keys of any size"));
        mac.update(message.as_bytes());
        let sign = STANDARD.encode(mac.finalize().into_bytes());

        SignedHeaders {
            authorization: self.token.clone(),
            t: timestamp,
            sign,
            nonce: self.nonce.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("secret", &"<redacted>")
            .field("nonce", &self.nonce)
            .finish()
    }
}

/// The authentication headers for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value of the `Authorization` header (the account token).
    pub authorization: String,
    /// Value of the `t` header (millisecond epoch timestamp).
    pub t: String,
    /// Value of the `sign` header (base64 HMAC-SHA256).
    pub sign: String,
    /// Value of the `nonce` header.
    pub nonce: String,
}

impl SignedHeaders {
    /// Converts the headers into a `reqwest` header map.
    ///
    /// # Errors
    ///
    /// Returns error if the token or nonce contains characters that are not
    /// allowed in an HTTP header value.
    pub fn to_header_map(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&self.authorization)?);
        headers.insert(HeaderName::from_static("t"), HeaderValue::from_str(&self.t)?);
        headers.insert(
            HeaderName::from_static("sign"),
            HeaderValue::from_str(&self.sign)?,
        );
        headers.insert(
            HeaderName::from_static("nonce"),
            HeaderValue::from_str(&self.nonce)?,
        );
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::with_nonce("my-token", "my-secret", "fixed-nonce")
    }

    #[test]
    fn signature_is_deterministic_for_fixed_inputs() {
        let a = creds().sign_at(1_700_000_000_000);
        let b = creds().sign_at(1_700_000_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn signature_matches_hmac_of_concatenation() {
        let headers = creds().sign_at(1_700_000_000_000);

        let mut mac = HmacSha256::new_from_slice(b"my-secret").unwrap();
        mac.update(b"my-token1700000000000fixed-nonce");
        let expected = STANDARD.encode(mac.finalize().into_bytes());

        assert_eq!(headers.sign, expected);
        assert_eq!(headers.authorization, "my-token");
        assert_eq!(headers.t, "1700000000000");
        assert_eq!(headers.nonce, "fixed-nonce");
    }

    #[test]
    fn signature_changes_with_timestamp() {
        let a = creds().sign_at(1);
        let b = creds().sign_at(2);
        assert_ne!(a.sign, b.sign);
        assert_eq!(a.nonce, b.nonce);
    }

    #[test]
    fn generated_nonce_is_stable_per_instance() {
        let creds = Credentials::new("t", "s");
        let a = creds.sign_at(10);
        let b = creds.sign_at(20);
        assert_eq!(a.nonce, b.nonce);
        assert_eq!(a.nonce, creds.nonce());
        assert_ne!(Credentials::new("t", "s").nonce(), creds.nonce());
    }

    #[test]
    fn header_map_contains_all_fields() {
        let map = creds().sign_at(42).to_header_map().unwrap();
        assert_eq!(map.get("authorization").unwrap(), "my-token");
        assert_eq!(map.get("t").unwrap(), "42");
        assert_eq!(map.get("nonce").unwrap(), "fixed-nonce");
        assert!(map.get("sign").is_some());
    }

    #[test]
    fn debug_redacts_secrets() {
        let debug = format!("{:?}", creds());
        assert!(!debug.contains("my-secret"));
        assert!(!debug.contains("my-token"));
    }
}
