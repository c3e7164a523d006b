//! AfterShip API resources.
//!
//! Each resource exposes its operations as associated async functions that
//! take a [`RestClient`](crate::RestClient):
//!
//! | Resource | Operations |
//! |----------|------------|
//! | [`Tracking`] | `create`, `get`, `all`, `update`, `delete`, `retrack`, `mark_as_completed` |
//! | [`LastCheckpoint`] | `get` |
//! | [`Courier`] | `list`, `all`, `detect` |
//! | [`Notification`] | `get`, `add`, `remove` |
//! | [`EstimatedDeliveryDate`] | `predict_batch` |

mod common;
mod courier;
mod estimated_delivery;
mod last_checkpoint;
mod notification;
mod tracking;

pub use common::{
    AdditionalField, Address, Checkpoint, EstimatedDelivery, EstimatedPickup, NextCourier,
    OrderProcessingTime, ProofOfDelivery, Tag, Weight,
};
pub use courier::{Courier, CourierList, DetectCourierParams};
pub use estimated_delivery::EstimatedDeliveryDate;
pub use last_checkpoint::{GetLastCheckpointParams, LastCheckpoint};
pub use notification::Notification;
pub use tracking::{
    CreateTrackingParams, GetTrackingParams, GetTrackingsParams, PagedTrackings, Tracking,
    TrackingCompletedStatus, UpdateTrackingParams,
};

pub use crate::rest::{SlugTrackingNumber, TrackingId, TrackingIdentifier};
