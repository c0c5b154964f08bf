//! Network-wide configuration and formula-variant selection.
//!
//! [`NetworkConfig`] holds the knobs shared by every calculator. The
//! financing and land-shipping formulas each exist in two slightly
//! different revisions in the field; rather than silently picking one, both
//! families are selectable through [`FinancingModel`] and
//! [`LandShippingModel`].

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

/// Network layout under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Hub-and-spoke: MAIN warehouses feed FRONT warehouses.
    #[default]
    CentralFronts,
    /// Fully distributed: every warehouse is a MAIN serving its region.
    MainRegionals,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CentralFronts => write!(f, "Central and Fronts"),
            Self::MainRegionals => write!(f, "Main Regionals"),
        }
    }
}

/// Inventory financing formula family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum FinancingModel {
    /// Average inventory is `annual/12 + safety stock`, marked up by a
    /// fixed in-transit buffer factor.
    Buffered {
        /// In-transit/safety markup applied to average inventory.
        buffer_factor: f64,
    },
    /// Average inventory is `(annual/2 + safety stock) / 12`, no markup.
    SimpleMonthly,
}

impl Default for FinancingModel {
    fn default() -> Self {
        Self::Buffered {
            buffer_factor: 1.08,
        }
    }
}

/// Rate source for Main Regionals land-shipping legs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum LandShippingModel {
    /// Each leg uses the per-market rate configured on its warehouse.
    PerMarketRate,
    /// Every leg uses one network-wide cost per unit per mile; the
    /// per-market leg still supplies the distance.
    FlatRate {
        /// Cost to move one unit one mile.
        cost_per_unit_mile: f64,
    },
}

impl Default for LandShippingModel {
    fn default() -> Self {
        Self::PerMarketRate
    }
}

/// Global knobs shared by every calculator.
///
/// Field defaults match the standard data-entry values, so a scenario file
/// only needs to name the knobs it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Annual interest rate in percent.
    pub interest_rate_pct: f64,
    /// Target service level as a probability in `[0, 1]`.
    pub service_level: f64,
    /// Network layout.
    pub layout: Layout,
    /// Cost of one unit of product.
    pub unit_cost: f64,
    /// Warehouse floor area per stored unit, in square feet.
    pub sq_ft_per_unit: f64,
    /// Sizing overhead factor for MAIN warehouses.
    pub overhead_main: f64,
    /// Sizing overhead factor for FRONT warehouses.
    pub overhead_front: f64,
    /// Units per 40ft high-cube sea container.
    pub container_capacity_40: u32,
    /// Financing formula family.
    pub financing_model: FinancingModel,
    /// Land-shipping rate source.
    pub land_shipping_model: LandShippingModel,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interest_rate_pct: 5.0,
            service_level: 0.95,
            layout: Layout::default(),
            unit_cost: 10.0,
            sq_ft_per_unit: 0.8,
            overhead_main: 1.2,
            overhead_front: 1.5,
            container_capacity_40: 600,
            financing_model: FinancingModel::default(),
            land_shipping_model: LandShippingModel::default(),
        }
    }
}

impl NetworkConfig {
    /// Set the layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the target service level.
    #[must_use]
    pub const fn with_service_level(mut self, service_level: f64) -> Self {
        self.service_level = service_level;
        self
    }

    /// Set the annual interest rate in percent.
    #[must_use]
    pub const fn with_interest_rate(mut self, pct: f64) -> Self {
        self.interest_rate_pct = pct;
        self
    }

    /// Set the unit cost.
    #[must_use]
    pub const fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    /// Set the sea-container capacity.
    #[must_use]
    pub const fn with_container_capacity(mut self, units: u32) -> Self {
        self.container_capacity_40 = units;
        self
    }

    /// Set the financing formula family.
    #[must_use]
    pub const fn with_financing_model(mut self, model: FinancingModel) -> Self {
        self.financing_model = model;
        self
    }

    /// Set the land-shipping rate source.
    #[must_use]
    pub const fn with_land_shipping_model(mut self, model: LandShippingModel) -> Self {
        self.land_shipping_model = model;
        self
    }

    /// Z-score for the configured service level, via the inverse standard
    /// normal CDF.
    ///
    /// Derived on demand rather than stored, so it can never go stale
    /// against an edited service level. Service levels of exactly 0 or 1
    /// produce `-inf`/`+inf`; the validator flags those configurations.
    ///
    /// # Examples
    ///
    /// ```
    /// use netcost_core::NetworkConfig;
    ///
    /// let config = NetworkConfig::default(); // service level 0.95
    /// assert!((config.z_score() - 1.645).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn z_score(&self) -> f64 {
        standard_normal().inverse_cdf(self.service_level)
    }
}

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}
