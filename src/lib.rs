//! bakery-routing core
//!
//! Order-to-location routing and delivery batching over a caller-supplied
//! snapshot of locations, drivers and orders.

pub mod traits;
pub mod error;
pub mod config;
pub mod coverage;
pub mod distance;
pub mod haversine;
pub mod scoring;
pub mod batching;
pub mod engine;
pub mod fleet;
pub mod logging;

pub use engine::RoutingEngine;
pub use error::{Result, RoutingError};
