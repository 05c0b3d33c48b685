//! Street-number distance approximation.
//!
//! Stand-in for real geocoding: compares the leading street numbers of two
//! addresses on a Manhattan-style grid. Less accurate than a distance-matrix
//! service but needs no network and is fully deterministic.

use crate::traits::AddressDistance;

/// Street-number difference that counts as one block.
const DEFAULT_BLOCK_SIZE: f64 = 100.0;

/// Approximates distance from the difference between street numbers.
#[derive(Debug, Clone)]
pub struct StreetNumberDistance {
    /// Street-number difference per distance unit.
    pub block_size: f64,
}

impl Default for StreetNumberDistance {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl StreetNumberDistance {
    pub fn new(block_size: f64) -> Self {
        Self { block_size }
    }
}

impl AddressDistance for StreetNumberDistance {
    fn distance(&self, from: &str, to: &str) -> f64 {
        let a = street_number(from).unwrap_or(0);
        let b = street_number(to).unwrap_or(0);
        a.abs_diff(b) as f64 / self.block_size
    }
}

/// First run of ASCII digits in the address, if any.
pub fn street_number(address: &str) -> Option<u64> {
    let start = address.find(|c: char| c.is_ascii_digit())?;
    let digits: String = address[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    // Absurdly long digit runs saturate instead of failing.
    Some(digits.parse().unwrap_or(u64::MAX))
}
