//! Authentication for the AfterShip API.
//!
//! AfterShip accepts two ways of authenticating a request:
//!
//! - [`AuthenticationType::ApiKey`]: the API key is sent in the
//!   `as-api-key` header.
//! - [`AuthenticationType::Aes`]: in addition to the API key, every request
//!   carries a `date` header and an HMAC-SHA256 signature over the request
//!   in `as-signature-hmac-sha256`. See [`signature`] for the exact scheme.
//!
//! The HTTP client applies authentication automatically; these types are
//! public so the signing can be reproduced or tested independently.
//!
//! # Example
//!
//! ```rust
//! use aftership::auth::signature::{compute_signature, SignatureInput};
//! use std::collections::BTreeMap;
//!
//! let headers = BTreeMap::from([("as-api-key".to_string(), "key".to_string())]);
//! let input = SignatureInput {
//!     method: "GET",
//!     body: b"",
//!     date: "Wed, 21 Oct 2015 07:28:00 GMT",
//!     headers: &headers,
//!     path: "/v4/trackings",
//!     query: Some("keyword=a%20b"),
//! };
//!
//! let signature = compute_signature(&input.sign_string(), "secret");
//! assert_eq!(signature.len(), 44);
//! ```

pub mod signature;

use std::fmt;

/// Header carrying the AfterShip API key.
pub const API_KEY_HEADER: &str = "as-api-key";

/// How requests are authenticated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthenticationType {
    /// Send the API key only.
    #[default]
    ApiKey,
    /// Send the API key and an HMAC-SHA256 request signature.
    Aes,
}

impl fmt::Display for AuthenticationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey => f.write_str("api_key"),
            Self::Aes => f.write_str("aes"),
        }
    }
}
