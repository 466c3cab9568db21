//! HTTP client implementation for the WooCommerce REST API.
//!
//! This module provides the outbound half of the seeder: an authenticated
//! client for the store's resource endpoints, error mapping, and the
//! payload/response models the seeding workflow exchanges with the store.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::WooHttpClient;
pub use error::*;
pub use models::*;
pub use query::*;
