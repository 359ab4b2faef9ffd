//! Mock transport data provider
//!
//! Stands in for the transport backend while client screens are built. Every
//! operation waits a configurable simulated latency and then answers from a
//! versioned fixture table: a route plan, nearby stops and points of
//! interest, a solved itinerary, GeoJSON point features and a sample MTR
//! station list.
//!
//! # Architecture
//!
//! [`MockTransitClient`] owns the operations, [`MockTransitConfig`] their
//! latencies, and the [`fixtures`] module every sample value. Nothing in the
//! crate can fail: operations return payloads, not `Result`s.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{MockTransitClient, MockTransitConfig};
//!
//! let client = MockTransitClient::new(&MockTransitConfig::default());
//! let nearby = client.get_nearby(22.2855, 114.1582).await;
//! assert_eq!(nearby.stops.len(), 2);
//! ```

mod client;
mod config;
pub mod fixtures;

pub use client::MockTransitClient;
pub use config::MockTransitConfig;
pub use fixtures::FIXTURE_VERSION;
