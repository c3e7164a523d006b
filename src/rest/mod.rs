//! Typed access to AfterShip API resources.
//!
//! This module builds on [`RestClient`](crate::RestClient) with:
//!
//! - **[`resources`]**: Resource types and their operations
//! - **[`TrackingIdentifier`]**: Addressing a tracking by id or by slug and
//!   tracking number
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper that keeps the rate
//!   limit and request id of the response
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! Every response is wrapped in the AfterShip envelope
//! `{"meta": {...}, "data": {...}}`. Operations unwrap `data` (or a key
//! inside it such as `data.tracking`) and decode it into the resource type.
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::{AftershipConfig, ApiKey, RestClient};
//! use aftership::rest::resources::{GetTrackingsParams, Tag, Tracking};
//!
//! let config = AftershipConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! let client = RestClient::new(&config);
//!
//! let params = GetTrackingsParams {
//!     tag: vec![Tag::Exception],
//!     ..Default::default()
//! };
//! let page = Tracking::all(&client, Some(&params)).await?;
//! for tracking in &page.trackings {
//!     println!("{} {:?}", tracking.tracking_number, tracking.subtag_message);
//! }
//! ```

mod errors;
mod identifier;
mod query;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use identifier::{SlugTrackingNumber, TrackingId, TrackingIdentifier};
pub use query::serialize_to_query;
pub use response::ResourceResponse;
