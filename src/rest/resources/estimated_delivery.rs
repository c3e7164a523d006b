//! Estimated delivery date prediction.
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::rest::resources::{Address, EstimatedDeliveryDate, EstimatedPickup};
//!
//! let request = EstimatedDeliveryDate {
//!     slug: Some("fedex".to_string()),
//!     origin_address: Some(Address { country: "USA".to_string(), ..Default::default() }),
//!     destination_address: Some(Address { country: "USA".to_string(), ..Default::default() }),
//!     pickup_time: Some("2024-03-01 15:00:00".to_string()),
//!     ..Default::default()
//! };
//!
//! let predictions = EstimatedDeliveryDate::predict_batch(&client, &[request]).await?;
//! for prediction in predictions.iter() {
//!     println!("{:?}", prediction.estimated_delivery_date);
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::resources::common::{Address, EstimatedPickup, Weight};
use crate::rest::{ResourceError, ResourceResponse};

const KEY: &str = "estimated_delivery_dates";

/// A delivery date estimate, used both as a prediction request and as the
/// prediction AfterShip returns.
///
/// Either `pickup_time` or `estimated_pickup` is required in a request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDeliveryDate {
    /// Courier slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Carrier service level (e.g., `FEDEX HOME DELIVERY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_count: Option<i64>,
    /// Local pickup time, `YYYY-MM-DD HH:mm:ss`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_pickup: Option<EstimatedPickup>,
    /// Predicted arrival date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date: Option<String>,
    /// Reliability of the prediction, 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date_max: Option<String>,
}

impl EstimatedDeliveryDate {
    /// Predicts delivery dates for a batch of shipments.
    ///
    /// Predictions are returned in request order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyBatch`] if `requests` is empty, without
    /// contacting the API. Returns [`ResourceError::Rest`] if the request
    /// fails.
    pub async fn predict_batch(
        client: &RestClient,
        requests: &[Self],
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        if requests.is_empty() {
            return Err(ResourceError::EmptyBatch);
        }

        let body = json!({ KEY: requests });
        let response = client
            .post("estimated-delivery-date/predict-batch", Some(body), None)
            .await?;
        ResourceResponse::from_http_response(&response, Some(KEY), "EstimatedDeliveryDate")
    }
}
