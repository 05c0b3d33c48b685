//! Neighborhood coverage table.
//!
//! Maps named neighborhoods to the locations that serve them. Lookup is by
//! case-insensitive substring containment of the neighborhood name in a
//! delivery address, first match wins, so record order is significant.

use serde::{Deserialize, Serialize};

/// Sentinel returned when an address matches no neighborhood or borough rule.
pub const UNKNOWN_NEIGHBORHOOD: &str = "Unknown";

/// One row of the coverage table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub name: String,
    /// Locations that serve this neighborhood directly.
    #[serde(default)]
    pub primary: Vec<String>,
    /// Locations that will serve it at a reduced preference.
    #[serde(default)]
    pub extended: Vec<String>,
}

impl Neighborhood {
    pub fn new(name: &str, primary: &[&str], extended: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.iter().map(|id| id.to_string()).collect(),
            extended: extended.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Borough-level fallback: any keyword present (case-sensitive) maps the
/// address to `neighborhood`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoroughRule {
    pub keywords: Vec<String>,
    pub neighborhood: String,
}

impl BoroughRule {
    pub fn new(keywords: &[&str], neighborhood: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            neighborhood: neighborhood.to_string(),
        }
    }
}

/// How a location covers a neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Primary,
    Extended,
    None,
}

/// Ordered neighborhood table plus borough fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMap {
    pub neighborhoods: Vec<Neighborhood>,
    #[serde(default)]
    pub boroughs: Vec<BoroughRule>,
}

impl Default for CoverageMap {
    fn default() -> Self {
        let neighborhoods = vec![
            // Brooklyn
            Neighborhood::new("Cobble Hill", &["brooklyn"], &[]),
            Neighborhood::new("Carroll Gardens", &["brooklyn"], &[]),
            Neighborhood::new("Boerum Hill", &["brooklyn"], &[]),
            Neighborhood::new("Park Slope", &["brooklyn"], &[]),
            Neighborhood::new("Dumbo", &["brooklyn"], &[]),
            Neighborhood::new("Brooklyn Heights", &["brooklyn"], &[]),
            Neighborhood::new("Fort Greene", &["brooklyn"], &[]),
            Neighborhood::new("Prospect Heights", &["brooklyn"], &[]),
            // Upper East Side
            Neighborhood::new("Upper East Side", &["ues"], &[]),
            Neighborhood::new("Yorkville", &["ues"], &[]),
            Neighborhood::new("Lenox Hill", &["ues"], &[]),
            Neighborhood::new("East Harlem", &["ues"], &[]),
            Neighborhood::new("Roosevelt Island", &["ues"], &[]),
            Neighborhood::new("Midtown East", &["ues", "times-square"], &[]),
            // Times Square
            Neighborhood::new("Hell's Kitchen", &["times-square"], &[]),
            Neighborhood::new("Midtown West", &["times-square"], &[]),
            Neighborhood::new("Theater District", &["times-square"], &[]),
            Neighborhood::new("Chelsea", &["times-square"], &[]),
            Neighborhood::new("Hudson Yards", &["times-square"], &[]),
            Neighborhood::new("Columbus Circle", &["times-square", "ues"], &[]),
            // Extended-only coverage
            Neighborhood::new("Downtown Brooklyn", &[], &["brooklyn"]),
            Neighborhood::new("Williamsburg", &[], &["brooklyn"]),
            Neighborhood::new("Greenpoint", &[], &["brooklyn"]),
            Neighborhood::new("Upper West Side", &[], &["ues"]),
            Neighborhood::new("Central Park", &[], &["ues"]),
            Neighborhood::new("Greenwich Village", &[], &["times-square"]),
            Neighborhood::new("SoHo", &[], &["times-square"]),
            Neighborhood::new("Tribeca", &[], &["times-square"]),
        ];

        let boroughs = vec![
            BoroughRule::new(&["Brooklyn"], "Brooklyn Heights"),
            BoroughRule::new(&["Upper East", "UES"], "Upper East Side"),
            BoroughRule::new(&["Midtown", "Times Square"], "Midtown West"),
        ];

        Self {
            neighborhoods,
            boroughs,
        }
    }
}

impl CoverageMap {
    pub fn new(neighborhoods: Vec<Neighborhood>, boroughs: Vec<BoroughRule>) -> Self {
        Self {
            neighborhoods,
            boroughs,
        }
    }

    /// Resolve an address to a neighborhood name.
    ///
    /// Returns [`UNKNOWN_NEIGHBORHOOD`] when neither the table nor the borough
    /// rules match.
    pub fn resolve(&self, address: &str) -> &str {
        let lowered = address.to_lowercase();
        if let Some(neighborhood) = self
            .neighborhoods
            .iter()
            .find(|n| lowered.contains(&n.name.to_lowercase()))
        {
            return &neighborhood.name;
        }

        for rule in &self.boroughs {
            if rule.keywords.iter().any(|k| address.contains(k.as_str())) {
                tracing::debug!(address, neighborhood = %rule.neighborhood, "borough fallback");
                return &rule.neighborhood;
            }
        }

        UNKNOWN_NEIGHBORHOOD
    }

    /// Look up a table record by exact name.
    pub fn neighborhood(&self, name: &str) -> Option<&Neighborhood> {
        self.neighborhoods.iter().find(|n| n.name == name)
    }

    /// How `location_id` covers the named neighborhood.
    pub fn coverage(&self, neighborhood: &str, location_id: &str) -> Coverage {
        match self.neighborhood(neighborhood) {
            Some(n) if n.primary.iter().any(|id| id == location_id) => Coverage::Primary,
            Some(n) if n.extended.iter().any(|id| id == location_id) => Coverage::Extended,
            _ => Coverage::None,
        }
    }

    /// Locations that should be considered for a neighborhood: primary
    /// coverers when there are any, otherwise extended coverers.
    pub fn coverers(&self, neighborhood: &str) -> &[String] {
        match self.neighborhood(neighborhood) {
            Some(n) if !n.primary.is_empty() => n.primary.as_slice(),
            Some(n) => n.extended.as_slice(),
            None => &[],
        }
    }
}
