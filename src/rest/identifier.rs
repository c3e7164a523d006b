//! Ways of addressing a single tracking.
//!
//! AfterShip identifies a tracking either by the id it generated or by the
//! courier slug and tracking number pair. Both render to a path suffix that
//! endpoints append to their own prefix, e.g. `/trackings/ups/1Z...`.

use crate::rest::ResourceError;

/// Sub-delimiters a path segment may carry unescaped.
const SEGMENT_SAFE: &[char] = &['$', '&', '+', ':', '=', '@'];

/// Percent-escapes one path segment.
///
/// Unreserved characters and [`SEGMENT_SAFE`] pass through; `/`, `;`, `,`,
/// `?` and everything else is escaped as UTF-8 bytes.
fn escape_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut buf = [0_u8; 4];
    for c in segment.chars() {
        if SEGMENT_SAFE.contains(&c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

/// An identifier that can address a single tracking.
pub trait TrackingIdentifier {
    /// Returns the escaped path suffix, starting with `/`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] when a required part is empty.
    fn uri_path(&self) -> Result<String, ResourceError>;
}

/// The id AfterShip generated for a tracking.
///
/// ```rust
/// use aftership::rest::{TrackingId, TrackingIdentifier};
///
/// assert_eq!(TrackingId::new("5b7658cec7c33c0e007de3c5").uri_path().unwrap(), "/5b7658cec7c33c0e007de3c5");
/// assert!(TrackingId::new("").uri_path().is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrackingId(String);

impl TrackingId {
    /// Wraps a tracking id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TrackingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl TrackingIdentifier for TrackingId {
    fn uri_path(&self) -> Result<String, ResourceError> {
        if self.0.is_empty() {
            return Err(ResourceError::MissingTrackingId);
        }
        Ok(format!("/{}", escape_segment(&self.0)))
    }
}

/// A tracking addressed by courier slug and tracking number.
///
/// ```rust
/// use aftership::rest::{SlugTrackingNumber, TrackingIdentifier};
///
/// let id = SlugTrackingNumber::new("ups", "1Z 999");
/// assert_eq!(id.uri_path().unwrap(), "/ups/1Z%20999");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SlugTrackingNumber {
    /// Courier slug (e.g., "ups").
    pub slug: String,
    /// Tracking number as issued by the courier.
    pub tracking_number: String,
}

impl SlugTrackingNumber {
    /// Creates an identifier from a slug and tracking number.
    #[must_use]
    pub fn new(slug: impl Into<String>, tracking_number: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            tracking_number: tracking_number.into(),
        }
    }
}

impl TrackingIdentifier for SlugTrackingNumber {
    fn uri_path(&self) -> Result<String, ResourceError> {
        if self.slug.is_empty() || self.tracking_number.is_empty() {
            return Err(ResourceError::MissingSlugOrTrackingNumber);
        }
        Ok(format!(
            "/{}/{}",
            escape_segment(&self.slug),
            escape_segment(&self.tracking_number)
        ))
    }
}
