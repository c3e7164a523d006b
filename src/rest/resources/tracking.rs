//! Tracking resource implementation.
//!
//! A [`Tracking`] is a shipment AfterShip follows on your behalf. Trackings
//! are addressed either by id ([`TrackingId`](crate::rest::TrackingId)) or
//! by courier slug and tracking number
//! ([`SlugTrackingNumber`](crate::rest::SlugTrackingNumber)).
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::rest::resources::{CreateTrackingParams, Tracking, TrackingCompletedStatus};
//! use aftership::rest::SlugTrackingNumber;
//!
//! // Create a tracking
//! let params = CreateTrackingParams {
//!     tracking_number: "1234567890".to_string(),
//!     slug: Some("dhl".to_string()),
//!     ..Default::default()
//! };
//! let tracking = Tracking::create(&client, &params).await?;
//!
//! // Fetch it again by slug and number
//! let id = SlugTrackingNumber::new("dhl", "1234567890");
//! let tracking = Tracking::get(&client, &id, None).await?;
//! println!("Status: {:?}", tracking.tag);
//!
//! // Stop following it
//! Tracking::mark_as_completed(&client, &id, TrackingCompletedStatus::Delivered).await?;
//! ```

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::resources::common::{
    null_as_default, Checkpoint, EstimatedDelivery, NextCourier, ProofOfDelivery, Tag,
};
use crate::rest::resources::{AdditionalField, EstimatedDeliveryDate};
use crate::rest::{serialize_to_query, ResourceError, ResourceResponse, TrackingIdentifier};

const RESOURCE: &str = "Tracking";
const KEY: &str = "tracking";

/// A shipment tracked by AfterShip.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `created_at`, `updated_at`, `last_updated_at`
/// - `tag`, `subtag`, `subtag_message`, `checkpoints`
/// - delivery estimates and courier links
///
/// ## Writable Fields
/// Everything accepted by [`CreateTrackingParams`] and
/// [`UpdateTrackingParams`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracking {
    /// Unique id generated by AfterShip.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the tracking information last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_number: String,
    /// Courier slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Whether AfterShip is still polling the courier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Days the shipment has been in transit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country_iso3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_country_iso3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_raw_location: Option<String>,
    /// Destination country as reported by the courier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_destination_country_iso3: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub smses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub order_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_promised_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_package_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_pickup_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_weight_unit: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub shipment_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,
    /// How the tracking was created (`api`, `web`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtag_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Number of times AfterShip polled the courier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracked_count: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_mile_tracking_supported: bool,
    /// ISO 639-1 language of the store, customer, or order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Deprecated by AfterShip, still returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_token: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub checkpoints: Vec<Checkpoint>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub subscribed_smses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub subscribed_emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub return_to_sender: bool,
    /// `pickup_at_store`, `pickup_at_courier`, or `door_to_door`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_tracking_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_redirect_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_attempted_at: Option<String>,
    /// `on-time`, `late`, or `no-info`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_time_status: Option<String>,
    /// Days between the promised and actual delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_time_difference: Option<i64>,
    #[serde(
        default,
        rename = "aftership_estimated_delivery_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_delivery_date: Option<EstimatedDeliveryDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_estimated_delivery_date: Option<EstimatedDelivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_estimated_delivery: Option<EstimatedDelivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_estimated_delivery: Option<EstimatedDelivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_connection_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub next_couriers: Vec<NextCourier>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub proof_of_delivery: Vec<ProofOfDelivery>,
}

/// Parameters for creating a tracking.
///
/// Only `tracking_number` is required. Without a `slug`, AfterShip detects
/// the courier from the tracking number format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTrackingParams {
    pub tracking_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Promised delivery date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_promised_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_raw_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_note: Option<String>,
    /// Apple iOS device ids to receive push notifications.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub ios: Vec<String>,
    /// Android device ids to receive push notifications.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub android: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub smses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_raw_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Restricts courier detection to a group of couriers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub shipment_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_connection_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub next_couriers: Vec<NextCourier>,
    #[serde(flatten)]
    pub additional_fields: AdditionalField,
}

/// Parameters for fetching a single tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTrackingParams {
    /// Comma-separated fields to include (e.g., `title,order_id`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Translation language for supported couriers (e.g., `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(flatten)]
    pub additional_fields: AdditionalField,
}

/// Parameters for updating a tracking. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTrackingParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_promised_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_note: Option<String>,
    /// Moves the tracking to another courier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_raw_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_raw_location: Option<String>,
}

/// Filters and paging for listing trackings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTrackingsParams {
    /// Page to show (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Trackings per page (default 100, max 200).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Searches tracking number, title, order id, customer name, and more.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tracking_numbers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub slug: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_time: Option<u32>,
    /// Origin country ISO3 codes.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub origin: Vec<String>,
    /// Destination country ISO3 codes.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub destination: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<Tag>,
    /// ISO 8601 lower bound on creation time (default 30 days ago).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<String>,
    /// Comma-separated fields to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to_sender: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub courier_destination_country_iso3: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub shipment_tags: Vec<String>,
}

/// A page of trackings, echoing back the filters that produced it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PagedTrackings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u32,
    /// Total number of matches, capped at 10,000 by the API.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub origin: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub destination: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub return_to_sender: Vec<bool>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub courier_destination_country_iso3: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trackings: Vec<Tracking>,
}

/// Why a tracking is being marked as completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingCompletedStatus {
    Delivered,
    Lost,
    ReturnedToSender,
}

impl fmt::Display for TrackingCompletedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered => f.write_str("DELIVERED"),
            Self::Lost => f.write_str("LOST"),
            Self::ReturnedToSender => f.write_str("RETURNED_TO_SENDER"),
        }
    }
}

impl Tracking {
    /// Creates a tracking.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingTrackingNumber`] if
    /// `params.tracking_number` is empty, without contacting the API.
    /// Returns [`ResourceError::Rest`] if the request fails (e.g., 4003 when
    /// the tracking already exists).
    pub async fn create(
        client: &RestClient,
        params: &CreateTrackingParams,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        if params.tracking_number.is_empty() {
            return Err(ResourceError::MissingTrackingNumber);
        }

        let body = json!({ KEY: params });
        let response = client.post("trackings", Some(body), None).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }

    /// Fetches a single tracking.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn get(
        client: &RestClient,
        id: &impl TrackingIdentifier,
        params: Option<&GetTrackingParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("trackings{}", id.uri_path()?);
        let query = params.map(serialize_to_query).transpose()?;

        let response = client.get(&path, query).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }

    /// Lists trackings matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    pub async fn all(
        client: &RestClient,
        params: Option<&GetTrackingsParams>,
    ) -> Result<ResourceResponse<PagedTrackings>, ResourceError> {
        let query = params.map(serialize_to_query).transpose()?;

        let response = client.get("trackings", query).await?;
        ResourceResponse::from_http_response(&response, None, "PagedTrackings")
    }

    /// Updates a tracking.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn update(
        client: &RestClient,
        id: &impl TrackingIdentifier,
        params: &UpdateTrackingParams,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("trackings{}", id.uri_path()?);

        let body = json!({ KEY: params });
        let response = client.put(&path, body, None).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }

    /// Deletes a tracking, returning its last state.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn delete(
        client: &RestClient,
        id: &impl TrackingIdentifier,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("trackings{}", id.uri_path()?);

        let response = client.delete(&path, None).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }

    /// Restarts tracking of an expired tracking. AfterShip allows this
    /// three times per tracking.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn retrack(
        client: &RestClient,
        id: &impl TrackingIdentifier,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("trackings{}/retrack", id.uri_path()?);

        let response = client.post(&path, None, None).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }

    /// Marks a tracking as completed. It stops updating until retracked.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn mark_as_completed(
        client: &RestClient,
        id: &impl TrackingIdentifier,
        status: TrackingCompletedStatus,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("trackings{}/mark-as-completed", id.uri_path()?);

        let body = json!({ "reason": status });
        let response = client.post(&path, Some(body), None).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }
}
