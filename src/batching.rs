//! Delivery batching.
//!
//! Groups ready, unassigned delivery orders at a location into trips of at
//! most `max_batch_size` orders that share a neighborhood, then pairs each
//! group with an available driver in list order. Stops keep their original
//! order; there is no route optimization.

use serde::Serialize;

use crate::config::BatchingOptions;
use crate::coverage::CoverageMap;
use crate::traits::{Driver, DriverStatus, Fulfillment, Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStop<OrderId> {
    pub order_id: OrderId,
    /// Delivery address, empty when the order has none.
    pub address: String,
    /// 1-based position in the trip.
    pub sequence: u32,
}

/// A proposed driver trip. Nothing is assigned until the caller applies it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryBatch<DriverId, OrderId> {
    pub id: String,
    pub location_id: String,
    pub driver_id: DriverId,
    pub order_ids: Vec<OrderId>,
    pub estimated_minutes: u32,
    pub total_distance_miles: f64,
    pub route: Vec<RouteStop<OrderId>>,
}

/// Served vs. pending counts when drivers ran out before groups did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartialBatching {
    pub served_orders: usize,
    pub pending_orders: usize,
    pub dropped_groups: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchingResult<DriverId, OrderId> {
    pub batches: Vec<DeliveryBatch<DriverId, OrderId>>,
    /// Groups that found no driver, in grouping order. Their orders are
    /// left untouched for a later pass.
    pub unserved: Vec<Vec<OrderId>>,
    pub eligible_orders: usize,
}

impl<DriverId, OrderId> BatchingResult<DriverId, OrderId> {
    fn empty() -> Self {
        Self {
            batches: Vec::new(),
            unserved: Vec::new(),
            eligible_orders: 0,
        }
    }

    pub fn served_orders(&self) -> usize {
        self.batches.iter().map(|b| b.order_ids.len()).sum()
    }

    pub fn pending_orders(&self) -> usize {
        self.unserved.iter().map(Vec::len).sum()
    }

    pub fn is_partial(&self) -> bool {
        !self.unserved.is_empty()
    }

    /// `Some` when at least one group was dropped for lack of drivers.
    pub fn shortfall(&self) -> Option<PartialBatching> {
        self.is_partial().then(|| PartialBatching {
            served_orders: self.served_orders(),
            pending_orders: self.pending_orders(),
            dropped_groups: self.unserved.len(),
        })
    }
}

/// Ready delivery orders at `location_id` that have no driver yet.
pub fn is_eligible<O: Order>(order: &O, location_id: &str) -> bool {
    order.location_id() == location_id
        && order.fulfillment() == Fulfillment::Delivery
        && order.status() == OrderStatus::Ready
        && order.assigned_driver().is_none()
}

/// Greedy neighborhood grouping.
///
/// Seeds a group with the first unprocessed order and pulls in later orders
/// that resolve to the same neighborhood until the group is full. Orders
/// with a missing or blank address always travel alone.
pub fn group_by_neighborhood<'a, O: Order>(
    orders: &[&'a O],
    coverage: &CoverageMap,
    max_batch_size: usize,
) -> Vec<Vec<&'a O>> {
    let neighborhoods: Vec<Option<&str>> = orders
        .iter()
        .map(|o| o.routable_address().map(|a| coverage.resolve(a)))
        .collect();

    let mut processed = vec![false; orders.len()];
    let mut groups = Vec::new();

    for seed in 0..orders.len() {
        if processed[seed] {
            continue;
        }
        processed[seed] = true;
        let mut group = vec![orders[seed]];

        for other in seed + 1..orders.len() {
            if group.len() >= max_batch_size {
                break;
            }
            if processed[other] {
                continue;
            }
            let nearby = matches!(
                (neighborhoods[seed], neighborhoods[other]),
                (Some(a), Some(b)) if a == b
            );
            if nearby {
                group.push(orders[other]);
                processed[other] = true;
            }
        }

        groups.push(group);
    }

    groups
}

/// Saturates at `u32::MAX` rather than overflowing on extreme settings.
pub fn estimate_minutes(stops: usize, options: &BatchingOptions) -> u32 {
    let stops = u32::try_from(stops).unwrap_or(u32::MAX);
    let per_stop = options
        .minutes_per_stop
        .saturating_add(options.travel_minutes_per_stop);
    options
        .base_minutes
        .saturating_add(stops.saturating_mul(per_stop))
}

pub fn estimate_miles(stops: usize, options: &BatchingOptions) -> f64 {
    stops as f64 * options.miles_per_order
}

/// Build driver trips for `location_id` from an order and driver snapshot.
pub fn batch_deliveries<O, D>(
    location_id: &str,
    orders: &[O],
    drivers: &[D],
    coverage: &CoverageMap,
    options: &BatchingOptions,
) -> BatchingResult<D::Id, O::Id>
where
    O: Order,
    D: Driver,
{
    let eligible: Vec<&O> = orders.iter().filter(|o| is_eligible(*o, location_id)).collect();
    if eligible.is_empty() {
        return BatchingResult::empty();
    }

    let groups = group_by_neighborhood(&eligible, coverage, options.max_batch_size);
    let mut available = drivers.iter().filter(|d| d.status() == DriverStatus::Available);

    let mut result = BatchingResult::empty();
    result.eligible_orders = eligible.len();

    for (index, group) in groups.into_iter().enumerate() {
        let order_ids: Vec<O::Id> = group.iter().map(|o| o.id().clone()).collect();
        let Some(driver) = available.next() else {
            result.unserved.push(order_ids);
            continue;
        };

        let route = group
            .iter()
            .enumerate()
            .map(|(position, order)| RouteStop {
                order_id: order.id().clone(),
                address: order.delivery_address().unwrap_or_default().to_string(),
                sequence: position as u32 + 1,
            })
            .collect();

        result.batches.push(DeliveryBatch {
            id: format!("batch-{}-{}", location_id, index + 1),
            location_id: location_id.to_string(),
            driver_id: driver.id().clone(),
            estimated_minutes: estimate_minutes(group.len(), options),
            total_distance_miles: estimate_miles(group.len(), options),
            order_ids,
            route,
        });
    }

    if let Some(shortfall) = result.shortfall() {
        tracing::warn!(
            location_id,
            dropped_groups = shortfall.dropped_groups,
            pending_orders = shortfall.pending_orders,
            "not enough available drivers for all delivery groups"
        );
    }

    tracing::info!(
        location_id,
        batch_count = result.batches.len(),
        total_orders = result.eligible_orders,
        "delivery batches created"
    );

    result
}
