//! HTTP client module for the theatre box office API.
//!
//! This module provides the `ApiClient` for dispatching authenticated
//! requests against the configured API origin. A bearer token from the
//! session store is attached when present; transport failures are logged
//! and re-raised unchanged.

pub mod client;
pub mod error;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
