//! Test fixtures for bakery-routing.
//!
//! Provides builder-style locations, drivers and orders implementing the
//! engine traits, plus real New York coordinates and addresses.

#![allow(dead_code)]

pub mod nyc_locations;

pub use nyc_locations::*;

use bakery_routing::traits::{
    Driver, DriverStatus, Fulfillment, KitchenLoad, Location, LocationStatus, Order, OrderStatus,
};

// ============================================================================
// Locations
// ============================================================================

#[derive(Clone, Debug)]
pub struct TestLocation {
    id: String,
    address: String,
    status: Option<LocationStatus>,
    load: Option<KitchenLoad>,
}

impl TestLocation {
    /// Open location with a low kitchen load.
    pub fn new(id: &str, address: &str) -> Self {
        Self {
            id: id.to_string(),
            address: address.to_string(),
            status: Some(LocationStatus::Open),
            load: Some(KitchenLoad::Low),
        }
    }

    pub fn with_status(mut self, status: LocationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_load(mut self, load: KitchenLoad) -> Self {
        self.load = Some(load);
        self
    }

    pub fn unknown_stats(mut self) -> Self {
        self.status = None;
        self.load = None;
        self
    }
}

impl Location for TestLocation {
    fn id(&self) -> &str {
        &self.id
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn status(&self) -> Option<LocationStatus> {
        self.status
    }

    fn kitchen_load(&self) -> Option<KitchenLoad> {
        self.load
    }
}

/// The three stores with the production addresses, all open and quiet.
pub fn bakeries() -> Vec<TestLocation> {
    vec![
        TestLocation::new("brooklyn", BROOKLYN_ADDRESS),
        TestLocation::new("ues", UES_ADDRESS),
        TestLocation::new("times-square", TIMES_SQUARE_ADDRESS),
    ]
}

// ============================================================================
// Drivers
// ============================================================================

#[derive(Clone, Debug)]
pub struct TestDriver {
    id: String,
    status: DriverStatus,
    position: Option<(f64, f64)>,
    assigned: Vec<String>,
}

impl TestDriver {
    pub fn available(id: &str) -> Self {
        Self {
            id: id.to_string(),
            status: DriverStatus::Available,
            position: None,
            assigned: Vec::new(),
        }
    }

    pub fn at(mut self, place: &Place) -> Self {
        self.position = Some(place.coords());
        self
    }

    pub fn busy_with(mut self, order_id: &str) -> Self {
        self.status = DriverStatus::Busy;
        self.assigned.push(order_id.to_string());
        self
    }

    pub fn offline(mut self) -> Self {
        self.status = DriverStatus::Offline;
        self
    }
}

impl Driver for TestDriver {
    type Id = String;
    type OrderId = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn status(&self) -> DriverStatus {
        self.status
    }

    fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    fn assigned_orders(&self) -> &[Self::OrderId] {
        &self.assigned
    }
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Clone, Debug)]
pub struct TestOrder {
    id: String,
    fulfillment: Fulfillment,
    status: OrderStatus,
    address: Option<String>,
    location_id: String,
    driver: Option<String>,
}

impl TestOrder {
    /// Ready delivery order with no driver.
    pub fn delivery(id: &str, location_id: &str, address: &str) -> Self {
        Self {
            id: id.to_string(),
            fulfillment: Fulfillment::Delivery,
            status: OrderStatus::Ready,
            address: Some(address.to_string()),
            location_id: location_id.to_string(),
            driver: None,
        }
    }

    pub fn pickup(id: &str, location_id: &str) -> Self {
        Self {
            id: id.to_string(),
            fulfillment: Fulfillment::Pickup,
            status: OrderStatus::Pending,
            address: None,
            location_id: location_id.to_string(),
            driver: None,
        }
    }

    pub fn dine_in(id: &str, location_id: &str) -> Self {
        Self {
            fulfillment: Fulfillment::DineIn,
            ..Self::pickup(id, location_id)
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn without_address(mut self) -> Self {
        self.address = None;
        self
    }

    pub fn pinned_to(mut self, location_id: &str) -> Self {
        self.location_id = location_id.to_string();
        self
    }

    pub fn assigned_to(mut self, driver_id: &str) -> Self {
        self.driver = Some(driver_id.to_string());
        self
    }
}

impl Order for TestOrder {
    type Id = String;
    type DriverId = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn fulfillment(&self) -> Fulfillment {
        self.fulfillment
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn delivery_address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn location_id(&self) -> &str {
        &self.location_id
    }

    fn assigned_driver(&self) -> Option<&Self::DriverId> {
        self.driver.as_ref()
    }
}

/// Order ids of a slice, for terse assertions.
pub fn ids(orders: &[String]) -> Vec<&str> {
    orders.iter().map(String::as_str).collect()
}
