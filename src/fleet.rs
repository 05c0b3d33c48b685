//! Driver dispatch ledger.
//!
//! Batching only proposes trips. Before a caller persists a batch it must
//! claim the driver here: the claim is a compare-and-swap from available to
//! busy, so two concurrent dispatch passes can never book the same driver.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::batching::DeliveryBatch;
use crate::error::{Result, RoutingError};
use crate::traits::{Driver, DriverStatus, Id};

const AVAILABLE: u8 = 0;
const BUSY: u8 = 1;
const OFFLINE: u8 = 2;

fn encode(status: DriverStatus) -> u8 {
    match status {
        DriverStatus::Available => AVAILABLE,
        DriverStatus::Busy => BUSY,
        DriverStatus::Offline => OFFLINE,
    }
}

fn decode(raw: u8) -> DriverStatus {
    match raw {
        AVAILABLE => DriverStatus::Available,
        BUSY => DriverStatus::Busy,
        _ => DriverStatus::Offline,
    }
}

/// Shared, lock-free driver status table.
#[derive(Debug)]
pub struct DriverLedger<DriverId: Id> {
    cells: HashMap<DriverId, AtomicU8>,
}

impl<DriverId: Id> DriverLedger<DriverId> {
    /// Seed the ledger from a driver snapshot.
    pub fn from_drivers<D: Driver<Id = DriverId>>(drivers: &[D]) -> Self {
        let cells = drivers
            .iter()
            .map(|d| (d.id().clone(), AtomicU8::new(encode(d.status()))))
            .collect();
        Self { cells }
    }

    fn cell(&self, driver: &DriverId) -> Result<&AtomicU8> {
        self.cells
            .get(driver)
            .ok_or_else(|| RoutingError::unknown_driver(driver))
    }

    pub fn status(&self, driver: &DriverId) -> Option<DriverStatus> {
        self.cells.get(driver).map(|cell| decode(cell.load(Ordering::Acquire)))
    }

    pub fn available_count(&self) -> usize {
        self.cells
            .values()
            .filter(|cell| cell.load(Ordering::Acquire) == AVAILABLE)
            .count()
    }

    /// Claim a driver if it is still available.
    pub fn claim(&self, driver: &DriverId) -> Result<()> {
        self.cell(driver)?
            .compare_exchange(AVAILABLE, BUSY, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| RoutingError::driver_unavailable(driver))?;

        tracing::debug!(driver = ?driver, "driver claimed");
        Ok(())
    }

    /// Return a busy driver to the available pool.
    ///
    /// Offline drivers stay offline.
    pub fn release(&self, driver: &DriverId) -> Result<()> {
        // An offline driver is not an error, the swap simply does nothing.
        let _ = self
            .cell(driver)?
            .compare_exchange(BUSY, AVAILABLE, Ordering::AcqRel, Ordering::Acquire);
        Ok(())
    }

    /// Claim the driver a batch was proposed for.
    pub fn claim_batch<OrderId>(&self, batch: &DeliveryBatch<DriverId, OrderId>) -> Result<()> {
        self.claim(&batch.driver_id).inspect_err(|err| {
            tracing::warn!(batch_id = %batch.id, error = %err, "batch driver could not be claimed");
        })
    }
}
