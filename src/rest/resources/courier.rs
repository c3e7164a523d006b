//! Courier resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::rest::resources::{Courier, DetectCourierParams};
//!
//! // Couriers enabled on the account
//! let enabled = Courier::list(&client).await?;
//! println!("{} couriers enabled", enabled.total);
//!
//! // Guess the courier from a tracking number
//! let params = DetectCourierParams::new("1Z9999999999999999");
//! let detected = Courier::detect(&client, &params).await?;
//! for courier in detected.couriers.iter() {
//!     println!("{} ({})", courier.name, courier.slug);
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::resources::common::null_as_default;
use crate::rest::resources::AdditionalField;
use crate::rest::{ResourceError, ResourceResponse};

/// A courier supported by AfterShip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courier {
    /// Unique code of the courier (e.g., `ups`).
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Name in the courier's local language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    /// Additional fields needed to track with this courier
    /// (e.g., `tracking_postal_code`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_fields: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub optional_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub support_languages: Vec<String>,
    /// Countries the courier ships from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_from_country_iso3: Vec<String>,
}

/// A list of couriers with its size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub couriers: Vec<Courier>,
}

/// Parameters for detecting the courier of a tracking number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectCourierParams {
    pub tracking_number: String,
    /// Restricts detection to these courier slugs.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub slug: Vec<String>,
    #[serde(flatten)]
    pub additional_fields: AdditionalField,
}

impl DetectCourierParams {
    /// Creates detect parameters for a tracking number.
    #[must_use]
    pub fn new(tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            ..Default::default()
        }
    }
}

impl Courier {
    /// Lists the couriers enabled on the account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    pub async fn list(client: &RestClient) -> Result<ResourceResponse<CourierList>, ResourceError> {
        let response = client.get("couriers", None).await?;
        ResourceResponse::from_http_response(&response, None, "CourierList")
    }

    /// Lists every courier AfterShip supports.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    pub async fn all(client: &RestClient) -> Result<ResourceResponse<CourierList>, ResourceError> {
        let response = client.get("couriers/all", None).await?;
        ResourceResponse::from_http_response(&response, None, "CourierList")
    }

    /// Detects which enabled couriers match a tracking number.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingTrackingNumber`] if the tracking
    /// number is empty, without contacting the API. Returns
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn detect(
        client: &RestClient,
        params: &DetectCourierParams,
    ) -> Result<ResourceResponse<CourierList>, ResourceError> {
        if params.tracking_number.is_empty() {
            return Err(ResourceError::MissingTrackingNumber);
        }

        let body = json!({ "tracking": params });
        let response = client.post("couriers/detect", Some(body), None).await?;
        ResourceResponse::from_http_response(&response, None, "CourierList")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AftershipConfig, ApiKey};

    #[test]
    fn test_courier_list_deserialization() {
        let list: CourierList = serde_json::from_value(json!({
            "total": 1,
            "couriers": [{
                "slug": "dhl",
                "name": "DHL",
                "phone": "+1 800 225 5345",
                "other_name": "DHL Express",
                "web_url": "http://www.dhl.com/",
                "required_fields": [],
                "optional_fields": [],
                "default_language": "en",
                "support_languages": ["en"],
                "service_from_country_iso3": ["USA", "DEU"]
            }]
        }))
        .unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.couriers[0].slug, "dhl");
        assert_eq!(list.couriers[0].service_from_country_iso3, vec!["USA", "DEU"]);
    }

    #[test]
    fn test_courier_tolerates_missing_optional_lists() {
        let courier: Courier =
            serde_json::from_value(json!({"slug": "ups", "name": "UPS"})).unwrap();
        assert!(courier.required_fields.is_empty());
        assert!(courier.phone.is_none());
    }

    #[test]
    fn test_courier_null_lists_decode_as_empty() {
        let courier: Courier = serde_json::from_value(json!({
            "slug": "ups",
            "name": "UPS",
            "required_fields": null,
            "optional_fields": null,
            "support_languages": null,
            "service_from_country_iso3": null
        }))
        .unwrap();
        assert!(courier.required_fields.is_empty());
        assert!(courier.support_languages.is_empty());
    }

    #[test]
    fn test_detect_params_serialization() {
        let mut params = DetectCourierParams::new("1234567890");
        params.slug = vec!["dhl".to_string(), "ups".to_string()];
        params.additional_fields.tracking_postal_code = Some("10001".to_string());

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "tracking_number": "1234567890",
                "slug": ["dhl", "ups"],
                "tracking_postal_code": "10001"
            })
        );
    }

    #[tokio::test]
    async fn test_detect_requires_tracking_number() {
        let config = AftershipConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config);

        let result = Courier::detect(&client, &DetectCourierParams::default()).await;
        assert!(matches!(result, Err(ResourceError::MissingTrackingNumber)));
    }
}
