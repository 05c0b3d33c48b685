//! Location scoring model.
//!
//! Each candidate location gets four sub-scores in 0..=100 which are blended
//! into a weighted composite. All functions here are pure.

use serde::Serialize;

use crate::config::RoutingWeights;
use crate::coverage::{Coverage, CoverageMap};
use crate::haversine::within_radius;
use crate::traits::{
    AddressDistance, Driver, DriverStatus, Fulfillment, KitchenLoad, Location, LocationStatus,
    Order,
};

/// Score used whenever an input is missing or unknown.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// The four sub-factor scores for one candidate location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreFactors {
    pub distance: f64,
    pub capacity: f64,
    pub availability: f64,
    pub driver_availability: f64,
}

impl ScoreFactors {
    pub fn composite(&self, weights: &RoutingWeights) -> f64 {
        self.distance * weights.distance
            + self.capacity * weights.capacity
            + self.availability * weights.availability
            + self.driver_availability * weights.driver_availability
    }
}

/// Score for one (order, location) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingScore {
    pub location_id: String,
    pub score: f64,
    pub factors: ScoreFactors,
}

/// Inputs shared by every candidate when scoring one order.
pub struct ScoringContext<'a, E: AddressDistance> {
    pub weights: &'a RoutingWeights,
    pub coverage: &'a CoverageMap,
    pub estimator: &'a E,
    pub driver_radius_miles: f64,
}

impl<E: AddressDistance> ScoringContext<'_, E> {
    pub fn score<O, L, D>(
        &self,
        order: &O,
        location: &L,
        site: Option<(f64, f64)>,
        drivers: &[D],
    ) -> RoutingScore
    where
        O: Order,
        L: Location,
        D: Driver,
    {
        let factors = ScoreFactors {
            distance: self.distance_score(order, location),
            capacity: capacity_score(location.kitchen_load()),
            availability: availability_score(location.status()),
            driver_availability: driver_availability_score(nearby_available_drivers(
                drivers,
                site,
                self.driver_radius_miles,
            )),
        };

        RoutingScore {
            location_id: location.id().to_string(),
            score: factors.composite(self.weights),
            factors,
        }
    }

    fn distance_score<O: Order, L: Location>(&self, order: &O, location: &L) -> f64 {
        if order.fulfillment() != Fulfillment::Delivery {
            // Pickup and dine-in stay where the customer asked.
            return if order.location_id() == location.id() { 100.0 } else { 50.0 };
        }

        let Some(address) = order.routable_address() else {
            return NEUTRAL_SCORE;
        };

        let neighborhood = self.coverage.resolve(address);
        match self.coverage.coverage(neighborhood, location.id()) {
            Coverage::Primary => 100.0,
            Coverage::Extended => 70.0,
            Coverage::None => blocks_to_score(self.estimator.distance(address, location.address())),
        }
    }
}

/// Map an approximate distance in blocks through the scoring breakpoints.
pub fn blocks_to_score(blocks: f64) -> f64 {
    if blocks < 2.0 {
        90.0
    } else if blocks < 4.0 {
        70.0
    } else if blocks < 6.0 {
        50.0
    } else if blocks < 8.0 {
        30.0
    } else {
        10.0
    }
}

pub fn capacity_score(load: Option<KitchenLoad>) -> f64 {
    match load {
        Some(KitchenLoad::Low) => 100.0,
        Some(KitchenLoad::Medium) => 60.0,
        Some(KitchenLoad::High) => 20.0,
        None => NEUTRAL_SCORE,
    }
}

pub fn availability_score(status: Option<LocationStatus>) -> f64 {
    match status {
        Some(LocationStatus::Open) => 100.0,
        Some(LocationStatus::Busy) => 40.0,
        Some(LocationStatus::Closed) => 0.0,
        None => NEUTRAL_SCORE,
    }
}

pub fn driver_availability_score(nearby: usize) -> f64 {
    match nearby {
        0 => 10.0,
        1 => 40.0,
        2 => 70.0,
        _ => 100.0,
    }
}

/// Available drivers with a known position within the radius of `site`.
pub fn nearby_available_drivers<D: Driver>(
    drivers: &[D],
    site: Option<(f64, f64)>,
    radius_miles: f64,
) -> usize {
    let Some(site) = site else {
        return 0;
    };
    drivers
        .iter()
        .filter(|d| d.status() == DriverStatus::Available)
        .filter_map(|d| d.position())
        .filter(|pos| within_radius(*pos, site, radius_miles))
        .count()
}
