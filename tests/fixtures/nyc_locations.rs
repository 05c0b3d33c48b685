//! Real New York locations for realistic test fixtures.
//!
//! Coordinates are approximate street-level points taken from OpenStreetMap.

/// A named point with coordinates.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Bakery storefronts (match the engine's default site table)
// ============================================================================

pub const BROOKLYN_ADDRESS: &str = "123 Montague Street, Brooklyn Heights, NY 11201";
pub const UES_ADDRESS: &str = "789 Madison Avenue, New York, NY 10075";
pub const TIMES_SQUARE_ADDRESS: &str = "456 Broadway, New York, NY 10018";

// ============================================================================
// Driver positions within 3 miles of the Brooklyn store
// ============================================================================

pub const NEAR_BROOKLYN: &[Place] = &[
    Place::new("Brooklyn Heights Promenade", 40.6955, -73.9977),
    Place::new("Cobble Hill Park", 40.6860, -73.9969),
    Place::new("Dumbo Archway", 40.7033, -73.9881),
    Place::new("Fort Greene Park", 40.6912, -73.9754),
];

// ============================================================================
// Driver positions within 3 miles of both Manhattan stores
// ============================================================================

pub const MIDTOWN: &[Place] = &[
    Place::new("Bryant Park", 40.7536, -73.9832),
    Place::new("Grand Central", 40.7527, -73.9772),
];

// ============================================================================
// Far from every store
// ============================================================================

pub const FAR_AWAY: &[Place] = &[
    Place::new("JFK Terminal 4", 40.6441, -73.7822),
    Place::new("Riverdale", 40.9005, -73.9064),
];

// ============================================================================
// Delivery addresses by neighborhood
// ============================================================================

pub const COBBLE_HILL_ADDRESSES: &[&str] = &[
    "180 Court St, Cobble Hill, Brooklyn",
    "25 Tompkins Pl, Cobble Hill",
    "301 Henry St, cobble hill, NY",
];

pub const YORKVILLE_ADDRESSES: &[&str] = &[
    "1620 York Ave, Yorkville",
    "420 E 86th St, Yorkville, New York",
];

pub const PARK_SLOPE_ADDRESSES: &[&str] = &[
    "120 Main St, Park Slope",
    "410 7th Ave, Park Slope",
    "88 Prospect Park West, Park Slope",
    "215 5th Ave, Park Slope",
    "51 Berkeley Pl, Park Slope",
    "9 Garfield Pl, Park Slope",
];
