//! Last checkpoint of a tracking.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resources::common::{null_as_default, Checkpoint, Tag};
use crate::rest::{serialize_to_query, ResourceError, ResourceResponse, TrackingIdentifier};

/// The most recent checkpoint of a tracking, with the tracking's status.
///
/// # Example
///
/// ```rust,ignore
/// use aftership::rest::resources::LastCheckpoint;
/// use aftership::rest::SlugTrackingNumber;
///
/// let id = SlugTrackingNumber::new("ups", "1Z9999999999999999");
/// let last = LastCheckpoint::get(&client, &id, None).await?;
/// if let Some(checkpoint) = &last.checkpoint {
///     println!("{:?}: {:?}", last.tag, checkpoint.message);
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LastCheckpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtag_message: Option<String>,
    /// Absent when the courier has not reported anything yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<Checkpoint>,
}

/// Parameters for fetching the last checkpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLastCheckpointParams {
    /// Comma-separated checkpoint fields to include (e.g., `city,tag`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Translation language for supported couriers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl LastCheckpoint {
    /// Fetches the last checkpoint of a tracking.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn get(
        client: &RestClient,
        id: &impl TrackingIdentifier,
        params: Option<&GetLastCheckpointParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("last_checkpoint{}", id.uri_path()?);
        let query = params.map(serialize_to_query).transpose()?;

        let response = client.get(&path, query).await?;
        ResourceResponse::from_http_response(&response, None, "LastCheckpoint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last_checkpoint_deserialization() {
        let last: LastCheckpoint = serde_json::from_value(json!({
            "id": "5b7658cec7c33c0e007de3c5",
            "tracking_number": "1234567890",
            "slug": "dhl",
            "tag": "InTransit",
            "subtag": "InTransit_001",
            "subtag_message": "In Transit",
            "checkpoint": {
                "slug": "dhl",
                "created_at": "2018-08-17T04:34:08+00:00",
                "checkpoint_time": "2018-08-16T17:30:00",
                "city": "LEIPZIG",
                "tag": "InTransit",
                "message": "Processed at LEIPZIG - GERMANY"
            }
        }))
        .unwrap();

        assert_eq!(last.tag, Some(Tag::InTransit));
        assert_eq!(last.checkpoint.unwrap().city.as_deref(), Some("LEIPZIG"));
    }

    #[test]
    fn test_last_checkpoint_without_checkpoint() {
        let last: LastCheckpoint = serde_json::from_value(json!({
            "slug": "dhl",
            "tracking_number": "1234567890",
            "tag": "Pending"
        }))
        .unwrap();

        assert!(last.checkpoint.is_none());
        assert!(last.id.is_none());
    }
}
