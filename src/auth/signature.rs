//! HMAC-SHA256 request signing for AES authentication.
//!
//! The string to sign is six lines joined by `\n`:
//!
//! ```text
//! METHOD
//! BODY_MD5
//! CONTENT_TYPE
//! DATE
//! CANONICALIZED_AS_HEADERS
//! CANONICALIZED_RESOURCE
//! ```
//!
//! - `BODY_MD5` is the uppercase hex MD5 digest of the body, empty when the
//!   request has no body.
//! - `CONTENT_TYPE` is `application/json` when a body is sent, else empty.
//! - `CANONICALIZED_AS_HEADERS` lists every `as-*` header except the
//!   signature itself as `key:value`, keys lowercased and sorted.
//! - `CANONICALIZED_RESOURCE` is the request path followed by `?` and the
//!   query string exactly as sent, if any. [`encode_query`] builds that
//!   string so the signed and the sent bytes match.
//!
//! The signature is the base64-encoded HMAC-SHA256 of that string keyed
//! with the API secret.

use std::collections::BTreeMap;
use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "as-signature-hmac-sha256";

/// Header carrying the request date.
pub const DATE_HEADER: &str = "date";

/// Content type of signed request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// The parts of a request that go into its signature.
#[derive(Clone, Copy, Debug)]
pub struct SignatureInput<'a> {
    /// Upper- or lowercase HTTP method; uppercased when signing.
    pub method: &'a str,
    /// Serialized request body, empty when there is none.
    pub body: &'a [u8],
    /// The value sent in the `date` header.
    pub date: &'a str,
    /// Request headers; only `as-*` headers are signed.
    pub headers: &'a BTreeMap<String, String>,
    /// Absolute request path including the API version prefix.
    pub path: &'a str,
    /// Encoded query string as sent, without the leading `?`.
    pub query: Option<&'a str>,
}

impl SignatureInput<'_> {
    /// Builds the string to sign.
    #[must_use]
    pub fn sign_string(&self) -> String {
        let content_type = if self.body.is_empty() {
            ""
        } else {
            JSON_CONTENT_TYPE
        };

        [
            self.method.to_uppercase(),
            body_md5(self.body),
            content_type.to_string(),
            self.date.to_string(),
            canonical_headers(self.headers),
            canonical_resource(self.path, self.query),
        ]
        .join("\n")
    }
}

/// Returns the uppercase hex MD5 of `body`, or an empty string for an
/// empty body.
#[must_use]
pub fn body_md5(body: &[u8]) -> String {
    if body.is_empty() {
        return String::new();
    }

    Md5::digest(body)
        .iter()
        .fold(String::with_capacity(32), |mut out, byte| {
            let _ = write!(out, "{byte:02X}");
            out
        })
}

/// Canonicalizes the `as-*` headers of a request.
#[must_use]
pub fn canonical_headers(headers: &BTreeMap<String, String>) -> String {
    let signed: BTreeMap<String, &str> = headers
        .iter()
        .map(|(key, value)| (key.trim().to_lowercase(), value.trim()))
        .filter(|(key, _)| key.starts_with("as-") && key != SIGNATURE_HEADER)
        .collect();

    signed
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encodes query parameters sorted by key, percent-escaping everything
/// outside `A-Z a-z 0-9 - _ . ~`.
///
/// The result is both appended to the request URL and signed.
#[must_use]
pub fn encode_query(query: &BTreeMap<String, String>) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Canonicalizes the request path and encoded query string.
#[must_use]
pub fn canonical_resource(path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        None => path.to_string(),
        Some(query) => format!("{path}?{query}"),
    }
}

/// Computes the base64-encoded HMAC-SHA256 signature of `sign_string`.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(sign_string: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(sign_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Formats `time` as an RFC 1123 date in GMT, as sent in the `date` header.
#[must_use]
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("as-api-key".to_string(), "my-key".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            ("AS-Store-Id".to_string(), " store-1 ".to_string()),
            (SIGNATURE_HEADER.to_string(), "stale".to_string()),
        ])
    }

    #[test]
    fn test_body_md5_is_uppercase_hex() {
        assert_eq!(body_md5(b"hello"), "5D41402ABC4B2A76B9719D911017C592");
        assert_eq!(body_md5(b""), "");
    }

    #[test]
    fn test_canonical_headers_only_signs_as_headers() {
        let canonical = canonical_headers(&headers());
        assert_eq!(canonical, "as-api-key:my-key\nas-store-id:store-1");
    }

    #[test]
    fn test_encode_query_sorts_and_escapes() {
        let query = BTreeMap::from([
            ("page".to_string(), "2".to_string()),
            ("keyword".to_string(), "a b*~+&".to_string()),
        ]);
        assert_eq!(encode_query(&query), "keyword=a%20b%2A~%2B%26&page=2");
        assert_eq!(encode_query(&BTreeMap::new()), "");
    }

    #[test]
    fn test_canonical_resource_appends_query() {
        assert_eq!(
            canonical_resource("/v4/trackings", Some("keyword=a%20b&page=2")),
            "/v4/trackings?keyword=a%20b&page=2"
        );
        assert_eq!(canonical_resource("/v4/trackings", None), "/v4/trackings");
        assert_eq!(canonical_resource("/v4/trackings", Some("")), "/v4/trackings");
    }

    #[test]
    fn test_sign_string_with_query() {
        let headers = BTreeMap::new();
        let input = SignatureInput {
            method: "GET",
            body: b"",
            date: "date",
            headers: &headers,
            path: "/v4/trackings",
            query: Some("page=2"),
        };

        assert_eq!(input.sign_string(), "GET\n\n\ndate\n\n/v4/trackings?page=2");
    }

    #[test]
    fn test_sign_string_without_body() {
        let headers = headers();
        let input = SignatureInput {
            method: "get",
            body: b"",
            date: "Wed, 21 Oct 2015 07:28:00 GMT",
            headers: &headers,
            path: "/v4/couriers",
            query: None,
        };

        assert_eq!(
            input.sign_string(),
            "GET\n\n\nWed, 21 Oct 2015 07:28:00 GMT\nas-api-key:my-key\nas-store-id:store-1\n/v4/couriers"
        );
    }

    #[test]
    fn test_sign_string_with_body() {
        let headers = BTreeMap::new();
        let input = SignatureInput {
            method: "POST",
            body: b"hello",
            date: "date",
            headers: &headers,
            path: "/v4/trackings",
            query: None,
        };

        assert_eq!(
            input.sign_string(),
            "POST\n5D41402ABC4B2A76B9719D911017C592\napplication/json\ndate\n\n/v4/trackings"
        );
    }

    #[test]
    fn test_compute_signature_is_deterministic_base64() {
        let first = compute_signature("message", "secret");
        let second = compute_signature("message", "secret");
        let other = compute_signature("message", "other-secret");

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(first.len(), 44);
        assert!(STANDARD.decode(&first).is_ok());
    }

    #[test]
    fn test_http_date_format() {
        let time = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
        assert_eq!(http_date(time), "Wed, 21 Oct 2015 07:28:00 GMT");
    }
}
