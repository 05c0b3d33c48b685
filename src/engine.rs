//! Routing engine.
//!
//! Stateless apart from its configuration: every call is a pure function of
//! the snapshot passed in, so one engine can be shared across threads.

use rayon::prelude::*;
use serde::Serialize;

use crate::batching::{self, BatchingResult};
use crate::config::EngineConfig;
use crate::coverage::UNKNOWN_NEIGHBORHOOD;
use crate::distance::StreetNumberDistance;
use crate::error::{Result, RoutingError};
use crate::scoring::{RoutingScore, ScoringContext};
use crate::traits::{AddressDistance, Driver, Location, Order};

/// Outcome of routing one order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    pub location_id: String,
    pub score: RoutingScore,
    /// Every candidate's score, in input order.
    pub candidates: Vec<RoutingScore>,
}

#[derive(Debug, Clone)]
pub struct RoutingEngine<E: AddressDistance = StreetNumberDistance> {
    config: EngineConfig,
    estimator: E,
}

impl RoutingEngine<StreetNumberDistance> {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let estimator = StreetNumberDistance::new(config.street_block_size);
        Self::with_estimator(config, estimator)
    }
}

impl Default for RoutingEngine<StreetNumberDistance> {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            estimator: StreetNumberDistance::default(),
        }
    }
}

impl<E: AddressDistance> RoutingEngine<E> {
    /// Build an engine with a custom address-distance estimator.
    pub fn with_estimator(config: EngineConfig, estimator: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, estimator })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn scoring(&self) -> ScoringContext<'_, E> {
        ScoringContext {
            weights: &self.config.weights,
            coverage: &self.config.coverage,
            estimator: &self.estimator,
            driver_radius_miles: self.config.driver_radius_miles,
        }
    }

    /// Score every candidate location for `order`, in input order.
    pub fn score_locations<O, L, D>(
        &self,
        order: &O,
        locations: &[L],
        drivers: &[D],
    ) -> Vec<RoutingScore>
    where
        O: Order,
        L: Location,
        D: Driver,
    {
        let scoring = self.scoring();
        locations
            .iter()
            .map(|location| {
                let site = self.config.site(location.id());
                let score = scoring.score(order, location, site, drivers);
                tracing::debug!(
                    order_id = ?order.id(),
                    location_id = %score.location_id,
                    score = score.score,
                    "candidate scored"
                );
                score
            })
            .collect()
    }

    /// Pick the best-fit location for an order.
    ///
    /// Highest composite wins; on a tie the earlier candidate is kept.
    pub fn select_location<O, L, D>(
        &self,
        order: &O,
        locations: &[L],
        drivers: &[D],
    ) -> Result<RoutingDecision>
    where
        O: Order,
        L: Location,
        D: Driver,
    {
        let candidates = self.score_locations(order, locations, drivers);

        let mut best: Option<&RoutingScore> = None;
        for candidate in &candidates {
            match best {
                Some(current) if candidate.score <= current.score => {}
                _ => best = Some(candidate),
            }
        }
        let best = best.cloned().ok_or(RoutingError::NoLocationsAvailable)?;

        tracing::info!(
            order_id = ?order.id(),
            selected_location = %best.location_id,
            score = best.score,
            distance = best.factors.distance,
            capacity = best.factors.capacity,
            availability = best.factors.availability,
            driver_availability = best.factors.driver_availability,
            "order routed"
        );

        Ok(RoutingDecision {
            location_id: best.location_id.clone(),
            score: best,
            candidates,
        })
    }

    /// Route many orders against one snapshot in parallel.
    ///
    /// Results are returned in the same order as `orders`.
    pub fn route_orders<O, L, D>(
        &self,
        orders: &[O],
        locations: &[L],
        drivers: &[D],
    ) -> Vec<Result<RoutingDecision>>
    where
        O: Order + Sync,
        L: Location + Sync,
        D: Driver + Sync,
        E: Sync,
    {
        orders
            .par_iter()
            .map(|order| self.select_location(order, locations, drivers))
            .collect()
    }

    /// Group ready delivery orders at `location_id` into driver trips.
    pub fn batch_deliveries<O, D>(
        &self,
        location_id: &str,
        orders: &[O],
        drivers: &[D],
    ) -> BatchingResult<D::Id, O::Id>
    where
        O: Order,
        D: Driver,
    {
        batching::batch_deliveries(
            location_id,
            orders,
            drivers,
            &self.config.coverage,
            &self.config.batching,
        )
    }

    /// Neighborhood an address falls in, or `"Unknown"`.
    pub fn resolve_neighborhood<'a>(&'a self, address: &str) -> &'a str {
        self.config.coverage.resolve(address)
    }

    /// Suggest a location for a delivery address.
    ///
    /// Among the locations covering the address's neighborhood (primary
    /// coverers first, extended otherwise) the one with the lightest kitchen
    /// load wins, ties going to table order. Coverers missing from
    /// `locations` are skipped. Falls back to the configured location.
    pub fn recommend_location<L: Location>(&self, address: &str, locations: &[L]) -> String {
        let neighborhood = self.resolve_neighborhood(address);
        let coverers = self.config.coverage.coverers(neighborhood);

        let best = coverers
            .iter()
            .filter_map(|id| locations.iter().find(|l| l.id() == id.as_str()))
            .min_by_key(|l| l.kitchen_load().map_or(u8::MAX, |load| load.rank()));

        match best {
            Some(location) => location.id().to_string(),
            None => {
                if neighborhood == UNKNOWN_NEIGHBORHOOD {
                    tracing::debug!(address, "no neighborhood match, using fallback location");
                }
                self.config.fallback_location.clone()
            }
        }
    }
}
