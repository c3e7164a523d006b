//! Types shared by several AfterShip resources.
//!
//! Every field the API may omit is an `Option` (or an empty collection) so
//! partial responses such as those filtered with `fields=` still decode.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The main delivery status of a tracking or checkpoint.
///
/// Unrecognised values decode to [`Tag::Unknown`] rather than failing.
///
/// ```rust
/// use aftership::rest::resources::Tag;
///
/// let tag: Tag = serde_json::from_str("\"OutForDelivery\"").unwrap();
/// assert_eq!(tag, Tag::OutForDelivery);
/// assert_eq!(tag.to_string(), "OutForDelivery");
///
/// let new_tag: Tag = serde_json::from_str("\"Teleported\"").unwrap();
/// assert_eq!(new_tag, Tag::Unknown);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Tag {
    /// New tracking with no information yet.
    Pending,
    /// The carrier has received the shipment request.
    InfoReceived,
    /// The shipment is on its way.
    InTransit,
    /// The carrier is about to deliver the shipment.
    OutForDelivery,
    /// The carrier attempted to deliver but failed.
    AttemptFail,
    /// The shipment was delivered.
    Delivered,
    /// The shipment is waiting at a pickup point.
    AvailableForPickup,
    /// Custom hold, undelivered, returned, or another exception.
    Exception,
    /// No tracking information for 30 days (or 120 for some couriers).
    Expired,
    /// A status this version of the library does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::InfoReceived => "InfoReceived",
            Self::InTransit => "InTransit",
            Self::OutForDelivery => "OutForDelivery",
            Self::AttemptFail => "AttemptFail",
            Self::Delivered => "Delivered",
            Self::AvailableForPickup => "AvailableForPickup",
            Self::Exception => "Exception",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Decodes an explicit `null` as `T::default()`.
///
/// The API sends `null` for empty lists, maps, and flags. Paired with
/// `#[serde(default)]` so a missing field decodes the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single tracking event reported by the courier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Courier slug that reported the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// When AfterShip recorded the checkpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Local time of the event as reported by the courier. Not normalised,
    /// so it is kept as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Latitude and longitude, when the courier provides them.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    /// Checkpoint message from the courier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtag_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// The courier's own status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_tag: Option<String>,
}

/// Extra fields some couriers need to locate a shipment.
///
/// Which ones are needed is listed in [`Courier::required_fields`](super::Courier::required_fields).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_origin_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_destination_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_postal_code: Option<String>,
    /// Ship date in `YYYYMMDD` format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_ship_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country_iso3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_country_iso3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_state: Option<String>,
}

/// An estimated delivery date or date range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedDelivery {
    /// Either `specific` or `range`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    /// Where the estimate came from (carrier, AfterShip AI, custom rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// Lower end of a range estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_min: Option<String>,
    /// Upper end of a range estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_max: Option<String>,
}

/// A postal address used for delivery date prediction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// ISO 3166-1 alpha-3 country code.
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Free-form address, used when the structured parts are unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_location: Option<String>,
}

/// Total weight of a shipment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// `kg`, `lb`, `g`, or `oz`.
    pub unit: String,
    pub value: f64,
}

/// How long the merchant takes to hand the order to the carrier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProcessingTime {
    /// Only `day` is accepted by the API.
    pub unit: String,
    pub value: i64,
}

/// Pickup estimate used when the exact pickup time is not known.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedPickup {
    /// Local order time, `YYYY-MM-DD HH:mm:ss`.
    pub order_time: String,
    /// Local cutoff time after which orders ship the next business day,
    /// `HH:mm:ss`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_cutoff_time: Option<String>,
    /// Operating days of the week, 1 (Monday) to 7 (Sunday).
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub business_days: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_processing_time: Option<OrderProcessingTime>,
    /// Pickup time computed by the API. Ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
}

/// A follow-up courier that takes over the shipment, e.g. for last mile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextCourier {
    pub slug: String,
    pub tracking_number: String,
    /// How the courier was added (e.g., `user`, `system`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A proof of delivery document (photo, signature, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOfDelivery {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub proof_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
