//! Notification recipients of a tracking.
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::rest::resources::Notification;
//! use aftership::rest::TrackingId;
//!
//! let id = TrackingId::new("5b7658cec7c33c0e007de3c5");
//! let added = Notification::add(
//!     &client,
//!     &id,
//!     &Notification { emails: vec!["user@example.com".to_string()], smses: vec![] },
//! )
//! .await?;
//! println!("Now notifying {:?}", added.emails);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::resources::common::null_as_default;
use crate::rest::{ResourceError, ResourceResponse, TrackingIdentifier};

const RESOURCE: &str = "Notification";
const KEY: &str = "notification";

/// Email addresses and phone numbers notified about a tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub emails: Vec<String>,
    /// Phone numbers in E.164 format.
    #[serde(default, deserialize_with = "null_as_default")]
    pub smses: Vec<String>,
}

impl Notification {
    /// Fetches the recipients of a tracking.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn get(
        client: &RestClient,
        id: &impl TrackingIdentifier,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("notifications{}", id.uri_path()?);

        let response = client.get(&path, None).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }

    /// Adds recipients, returning the full updated set.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn add(
        client: &RestClient,
        id: &impl TrackingIdentifier,
        notification: &Self,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::modify(client, id, "add", notification).await
    }

    /// Removes recipients, returning the remaining set.
    ///
    /// # Errors
    ///
    /// Returns an identifier error if `id` is incomplete, or
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn remove(
        client: &RestClient,
        id: &impl TrackingIdentifier,
        notification: &Self,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::modify(client, id, "remove", notification).await
    }

    async fn modify(
        client: &RestClient,
        id: &impl TrackingIdentifier,
        action: &str,
        notification: &Self,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("notifications{}/{action}", id.uri_path()?);

        let body = json!({ KEY: notification });
        let response = client.post(&path, Some(body), None).await?;
        ResourceResponse::from_http_response(&response, Some(KEY), RESOURCE)
    }
}
