//! Warehouses and their role-specific attributes.
//!
//! A [`Warehouse`] serves an ordered list of market areas; the first entry
//! is the primary market and the rest are candidates for land-shipping
//! legs. Role-specific inputs live in [`WarehouseRole`] so a MAIN cannot
//! carry FRONT fields or vice versa, and the rent price lives inside
//! [`RentPricing`] so its meaning can never drift from the pricing method.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Warehouse role within the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseKind {
    /// Restocked directly from the primary supply source by sea freight;
    /// may feed FRONT warehouses.
    Main,
    /// Restocked from a serving MAIN warehouse by land freight.
    Front,
}

impl FromStr for WarehouseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MAIN" => Ok(Self::Main),
            "FRONT" => Ok(Self::Front),
            _ => Err(format!("unknown warehouse kind: {s}")),
        }
    }
}

impl fmt::Display for WarehouseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "MAIN"),
            Self::Front => write!(f, "FRONT"),
        }
    }
}

/// Rent pricing policy, carrying its price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RentPricing {
    /// Flat annual rent, independent of demand.
    Fixed {
        /// Annual rent amount.
        price: f64,
    },
    /// Rent derived from required floor area.
    PerArea {
        /// Price per square foot of floor area.
        price_per_sq_ft: f64,
    },
}

impl RentPricing {
    /// The configured price, whichever policy is active.
    #[must_use]
    pub const fn price(&self) -> f64 {
        match self {
            Self::Fixed { price } => *price,
            Self::PerArea { price_per_sq_ft } => *price_per_sq_ft,
        }
    }
}

/// One land-shipping leg from a MAIN warehouse to a non-primary market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandLeg {
    /// Distance to the market in miles.
    pub distance_miles: f64,
    /// Shipping cost for one average order over one mile.
    pub cost_per_avg_order_mile: f64,
}

impl LandLeg {
    /// Create a leg.
    #[must_use]
    pub const fn new(distance_miles: f64, cost_per_avg_order_mile: f64) -> Self {
        Self {
            distance_miles,
            cost_per_avg_order_mile,
        }
    }
}

/// Role-specific warehouse attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarehouseRole {
    /// MAIN warehouse inputs.
    Main {
        /// Replenishment lead time in days.
        lead_time_days: u32,
        /// Sea freight cost per 40ft high-cube container.
        sea_cost_per_40hc: f64,
        /// Land legs keyed by served market code; used only under the
        /// Main Regionals layout for non-primary markets.
        #[serde(default)]
        land_legs: BTreeMap<String, LandLeg>,
    },
    /// FRONT warehouse inputs.
    Front {
        /// Land freight cost per 40ft container from the serving MAIN.
        land_cost_40ft: f64,
        /// Land freight cost per 53ft container from the serving MAIN.
        land_cost_53ft: f64,
        /// Location code of the serving MAIN warehouse, if assigned.
        #[serde(default)]
        serving_main: Option<String>,
    },
}

/// A warehouse in the network.
///
/// Built through [`crate::NetworkBuilder`], which resolves serving-MAIN
/// references and fills the employee-count default. Immutable afterwards;
/// calculators return derived figures in report structs instead of writing
/// them back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Location code; normally one of the served markets.
    pub location: String,
    /// Served market codes, primary first. Order matters.
    pub served_markets: Vec<String>,
    /// Rent pricing policy and price.
    pub rent: RentPricing,
    /// Average annual salary per employee.
    pub avg_salary: f64,
    /// Number of employees.
    pub employees: u32,
    /// MAIN or FRONT attributes.
    pub role: WarehouseRole,
}

impl Warehouse {
    /// The warehouse's role tag.
    #[must_use]
    pub const fn kind(&self) -> WarehouseKind {
        match self.role {
            WarehouseRole::Main { .. } => WarehouseKind::Main,
            WarehouseRole::Front { .. } => WarehouseKind::Front,
        }
    }

    /// Whether this is a MAIN warehouse.
    #[must_use]
    pub const fn is_main(&self) -> bool {
        matches!(self.role, WarehouseRole::Main { .. })
    }

    /// Whether this is a FRONT warehouse.
    #[must_use]
    pub const fn is_front(&self) -> bool {
        matches!(self.role, WarehouseRole::Front { .. })
    }

    /// Replenishment lead time in days; zero for FRONT warehouses.
    #[must_use]
    pub fn lead_time_days(&self) -> u32 {
        match &self.role {
            WarehouseRole::Main { lead_time_days, .. } => *lead_time_days,
            WarehouseRole::Front { .. } => 0,
        }
    }

    /// The primary (first) served market, if any.
    #[must_use]
    pub fn primary_market(&self) -> Option<&str> {
        self.served_markets.first().map(String::as_str)
    }

    /// Served markets beyond the primary.
    #[must_use]
    pub fn secondary_markets(&self) -> &[String] {
        self.served_markets.get(1..).unwrap_or(&[])
    }

    /// Whether the warehouse serves the given market code.
    #[must_use]
    pub fn serves(&self, code: &str) -> bool {
        self.served_markets.iter().any(|m| m == code)
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.location, self.kind())
    }
}
