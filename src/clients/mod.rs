//! HTTP client types for AfterShip API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the AfterShip API. It handles request signing,
//! envelope decoding, rate limit tracking, and retry logic.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimit`]: The rate limit window reported by the API
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use aftership::{AftershipConfig, ApiKey};
//! use aftership::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = AftershipConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//! let request = HttpRequest::builder(HttpMethod::Get, "couriers")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Waits until the rate limit window resets, or
//!   for the `Retry-After` value, or 1 second
//! - **5xx (Server Error)**: Waits for `Retry-After`, or 1 second
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure it on
//! the config, or per request with `.tries(n)`.
//!
//! Independently of retries, once a response reports zero remaining
//! requests the client refuses further requests until the window resets,
//! returning [`HttpError::RateLimited`] without touching the network.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limit;
pub mod rest;

pub use errors::{
    ApiError, HttpError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    RateLimitExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, Meta};
pub use rate_limit::RateLimit;

pub use rest::{RestClient, RestError};
