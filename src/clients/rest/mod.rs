//! REST API client for the AfterShip API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! Leading slashes are stripped (`/trackings` -> `trackings`) and the result
//! is appended to the version prefix (`/v4` or `/tracking/YYYY-MM`). Empty
//! paths are rejected with [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
