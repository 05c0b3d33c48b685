//! Core domain traits for the routing engine.
//!
//! The engine reads entity state through these traits and never owns the
//! records. Host applications implement them for their own data models.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Unique identifier for engine entities.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// A bakery location that can prepare orders.
pub trait Location {
    /// Location identifier, as referenced by the coverage table.
    fn id(&self) -> &str;

    /// Display street address.
    fn address(&self) -> &str;

    /// Operating status, `None` when unknown.
    fn status(&self) -> Option<LocationStatus>;

    /// Current kitchen load, `None` when stats are unavailable.
    fn kitchen_load(&self) -> Option<KitchenLoad>;
}

/// A delivery driver.
pub trait Driver {
    type Id: Id;
    type OrderId: Id;

    fn id(&self) -> &Self::Id;

    fn status(&self) -> DriverStatus;

    /// Last known position (lat, lng).
    fn position(&self) -> Option<(f64, f64)>;

    /// Orders currently assigned to this driver.
    fn assigned_orders(&self) -> &[Self::OrderId];
}

/// A customer order.
pub trait Order {
    type Id: Id;
    type DriverId: Id;

    fn id(&self) -> &Self::Id;

    fn fulfillment(&self) -> Fulfillment;

    fn status(&self) -> OrderStatus;

    /// Delivery address. Expected to be present for delivery orders.
    fn delivery_address(&self) -> Option<&str>;

    /// Location the order was placed at (or pinned to).
    fn location_id(&self) -> &str;

    fn assigned_driver(&self) -> Option<&Self::DriverId>;

    /// Trimmed delivery address, `None` when missing or blank.
    fn routable_address(&self) -> Option<&str> {
        self.delivery_address().map(str::trim).filter(|a| !a.is_empty())
    }
}

/// Estimates the separation between two street addresses.
///
/// The result is expressed in city blocks and fed through the distance
/// breakpoints in [`crate::scoring`]. Swap the implementation for a real
/// geocoding service without touching the scoring weights.
pub trait AddressDistance {
    fn distance(&self, from: &str, to: &str) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationStatus {
    Open,
    Busy,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KitchenLoad {
    Low,
    Medium,
    High,
}

impl KitchenLoad {
    /// Ordering rank, lightest load first.
    pub fn rank(self) -> u8 {
        match self {
            KitchenLoad::Low => 0,
            KitchenLoad::Medium => 1,
            KitchenLoad::High => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverStatus {
    Available,
    Busy,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fulfillment {
    Pickup,
    Delivery,
    DineIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}
