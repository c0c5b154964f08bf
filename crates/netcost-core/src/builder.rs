//! Two-phase network construction.
//!
//! Data entry produces [`MarketArea`]s and [`WarehouseSpec`]s in order;
//! [`NetworkBuilder::finish`] resolves serving-MAIN references by location
//! code (never by list position), applies employee-count defaults, and
//! hands out an immutable [`Network`]. Problems that make the configuration
//! structurally unrepresentable are [`BuildError`]s; softer mistakes are
//! left to the validator, which reports them without blocking.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::{
    LandLeg, Layout, MarketArea, MarketTable, Network, NetworkConfig, RentPricing, Warehouse,
    WarehouseRole,
};

/// Errors that abort network construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two market areas share a code.
    #[error("duplicate market area code {code}")]
    DuplicateMarket {
        /// The repeated code.
        code: String,
    },

    /// Two warehouses share a location code.
    #[error("duplicate warehouse location {location}")]
    DuplicateWarehouse {
        /// The repeated location.
        location: String,
    },

    /// A FRONT warehouse appeared under the Main Regionals layout.
    #[error("warehouse {location} is FRONT but the layout is Main Regionals")]
    FrontInMainRegionals {
        /// The offending warehouse.
        location: String,
    },

    /// A serving-MAIN reference does not resolve to a MAIN warehouse.
    #[error("warehouse {front} references serving MAIN {main}, which is not a MAIN warehouse in the network")]
    UnknownServingMain {
        /// The FRONT warehouse holding the reference.
        front: String,
        /// The location code that failed to resolve.
        main: String,
    },
}

fn default_salary() -> f64 {
    50_000.0
}

/// Warehouse input as entered, before defaults and reference resolution.
///
/// Mirrors [`Warehouse`] with the employee count optional: when left unset,
/// [`NetworkBuilder::finish`] applies the standard staffing default of 3
/// for a single-market MAIN, 4 for a multi-market MAIN, and 2 for a FRONT.
/// An explicit count, including zero, is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseSpec {
    /// Location code.
    pub location: String,
    /// Served market codes, primary first.
    pub served_markets: Vec<String>,
    /// Rent pricing policy and price.
    pub rent: RentPricing,
    /// Average annual salary per employee.
    #[serde(default = "default_salary")]
    pub avg_salary: f64,
    /// Employee count; defaulted by role and served-market count when unset.
    #[serde(default)]
    pub employees: Option<u32>,
    /// MAIN or FRONT attributes.
    #[serde(flatten)]
    pub role: WarehouseRole,
}

impl WarehouseSpec {
    /// A MAIN warehouse with entry defaults: lead time 5 days, sea freight
    /// 2000 per 40ft-HC container, salary 50000, fixed rent of 0 until
    /// configured.
    #[must_use]
    pub fn main(
        location: impl Into<String>,
        served: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            location: location.into(),
            served_markets: served.into_iter().map(Into::into).collect(),
            rent: RentPricing::Fixed { price: 0.0 },
            avg_salary: default_salary(),
            employees: None,
            role: WarehouseRole::Main {
                lead_time_days: 5,
                sea_cost_per_40hc: 2000.0,
                land_legs: BTreeMap::new(),
            },
        }
    }

    /// A FRONT warehouse with entry defaults: land freight 500 per 40ft and
    /// 600 per 53ft container, salary 50000, no serving MAIN assigned,
    /// fixed rent of 0 until configured.
    #[must_use]
    pub fn front(
        location: impl Into<String>,
        served: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            location: location.into(),
            served_markets: served.into_iter().map(Into::into).collect(),
            rent: RentPricing::Fixed { price: 0.0 },
            avg_salary: default_salary(),
            employees: None,
            role: WarehouseRole::Front {
                land_cost_40ft: 500.0,
                land_cost_53ft: 600.0,
                serving_main: None,
            },
        }
    }

    /// Set the rent pricing.
    #[must_use]
    pub const fn with_rent(mut self, rent: RentPricing) -> Self {
        self.rent = rent;
        self
    }

    /// Set the average salary.
    #[must_use]
    pub const fn with_salary(mut self, avg_salary: f64) -> Self {
        self.avg_salary = avg_salary;
        self
    }

    /// Set an explicit employee count.
    #[must_use]
    pub const fn with_employees(mut self, employees: u32) -> Self {
        self.employees = Some(employees);
        self
    }

    /// Set the replenishment lead time. MAIN only; ignored for a FRONT.
    #[must_use]
    pub fn with_lead_time(mut self, days: u32) -> Self {
        if let WarehouseRole::Main { lead_time_days, .. } = &mut self.role {
            *lead_time_days = days;
        }
        self
    }

    /// Set the sea freight cost per 40ft-HC container. MAIN only.
    #[must_use]
    pub fn with_sea_cost(mut self, cost: f64) -> Self {
        if let WarehouseRole::Main {
            sea_cost_per_40hc, ..
        } = &mut self.role
        {
            *sea_cost_per_40hc = cost;
        }
        self
    }

    /// Add a land leg toward a served market. MAIN only.
    #[must_use]
    pub fn with_land_leg(mut self, market: impl Into<String>, leg: LandLeg) -> Self {
        if let WarehouseRole::Main { land_legs, .. } = &mut self.role {
            land_legs.insert(market.into(), leg);
        }
        self
    }

    /// Set the land freight costs per 40ft and 53ft container. FRONT only.
    #[must_use]
    pub fn with_land_costs(mut self, cost_40ft: f64, cost_53ft: f64) -> Self {
        if let WarehouseRole::Front {
            land_cost_40ft,
            land_cost_53ft,
            ..
        } = &mut self.role
        {
            *land_cost_40ft = cost_40ft;
            *land_cost_53ft = cost_53ft;
        }
        self
    }

    /// Assign the serving MAIN warehouse by location code. FRONT only.
    #[must_use]
    pub fn with_serving_main(mut self, main: impl Into<String>) -> Self {
        if let WarehouseRole::Front { serving_main, .. } = &mut self.role {
            *serving_main = Some(main.into());
        }
        self
    }
}

/// Accumulates entry data and produces an immutable [`Network`].
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    config: NetworkConfig,
    markets: Vec<MarketArea>,
    warehouses: Vec<WarehouseSpec>,
}

impl NetworkBuilder {
    /// Start a builder with the given configuration.
    #[must_use]
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            markets: Vec::new(),
            warehouses: Vec::new(),
        }
    }

    /// Add a market area.
    #[must_use]
    pub fn market(mut self, area: MarketArea) -> Self {
        self.markets.push(area);
        self
    }

    /// Add several market areas.
    #[must_use]
    pub fn markets(mut self, areas: impl IntoIterator<Item = MarketArea>) -> Self {
        self.markets.extend(areas);
        self
    }

    /// Add a warehouse. Entry order is preserved and meaningful: under
    /// Central and Fronts the first MAIN entered anchors the financing and
    /// sea-freight calculations.
    #[must_use]
    pub fn warehouse(mut self, spec: WarehouseSpec) -> Self {
        self.warehouses.push(spec);
        self
    }

    /// Add several warehouses.
    #[must_use]
    pub fn warehouses(mut self, specs: impl IntoIterator<Item = WarehouseSpec>) -> Self {
        self.warehouses.extend(specs);
        self
    }

    /// Resolve references, apply defaults, and build the network.
    pub fn finish(self) -> Result<Network, BuildError> {
        let mut table = MarketTable::new();
        for area in self.markets {
            let code = area.code.clone();
            if table.insert(area).is_some() {
                return Err(BuildError::DuplicateMarket { code });
            }
        }

        let mut locations = BTreeSet::new();
        for spec in &self.warehouses {
            if !locations.insert(spec.location.clone()) {
                return Err(BuildError::DuplicateWarehouse {
                    location: spec.location.clone(),
                });
            }
        }

        let mains: BTreeSet<String> = self
            .warehouses
            .iter()
            .filter(|spec| matches!(spec.role, WarehouseRole::Main { .. }))
            .map(|spec| spec.location.clone())
            .collect();

        let mut warehouses = Vec::with_capacity(self.warehouses.len());
        for spec in self.warehouses {
            if self.config.layout == Layout::MainRegionals
                && matches!(spec.role, WarehouseRole::Front { .. })
            {
                return Err(BuildError::FrontInMainRegionals {
                    location: spec.location,
                });
            }
            if let WarehouseRole::Front {
                serving_main: Some(main),
                ..
            } = &spec.role
            {
                if !mains.contains(main) {
                    return Err(BuildError::UnknownServingMain {
                        front: spec.location.clone(),
                        main: main.clone(),
                    });
                }
            }

            let employees = spec
                .employees
                .unwrap_or_else(|| default_employees(&spec.role, spec.served_markets.len()));
            warehouses.push(Warehouse {
                location: spec.location,
                served_markets: spec.served_markets,
                rent: spec.rent,
                avg_salary: spec.avg_salary,
                employees,
                role: spec.role,
            });
        }

        Ok(Network::new(self.config, table, warehouses))
    }
}

/// Standard staffing by role and served-market count.
const fn default_employees(role: &WarehouseRole, served_markets: usize) -> u32 {
    match role {
        WarehouseRole::Main { .. } => {
            if served_markets > 1 {
                4
            } else {
                3
            }
        }
        WarehouseRole::Front { .. } => 2,
    }
}
