//! The immutable network bundle consumed by every calculator.

use serde::Serialize;

use crate::{MarketTable, NetworkConfig, Warehouse};

/// A finalized network: configuration, market table, and warehouses.
///
/// Produced by [`crate::NetworkBuilder::finish`]. Calculators take
/// `&Network` and never mutate it, so concurrent calculations over the same
/// network need no coordination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    config: NetworkConfig,
    markets: MarketTable,
    warehouses: Vec<Warehouse>,
}

impl Network {
    /// Assemble a network from finished parts.
    ///
    /// Prefer [`crate::NetworkBuilder`], which resolves references and
    /// applies staffing defaults first.
    #[must_use]
    pub fn new(config: NetworkConfig, markets: MarketTable, warehouses: Vec<Warehouse>) -> Self {
        Self {
            config,
            markets,
            warehouses,
        }
    }

    /// Global configuration.
    #[must_use]
    pub const fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Market demand table.
    #[must_use]
    pub const fn markets(&self) -> &MarketTable {
        &self.markets
    }

    /// All warehouses, in entry order.
    #[must_use]
    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    /// MAIN warehouses, in entry order.
    pub fn mains(&self) -> impl Iterator<Item = &Warehouse> + '_ {
        self.warehouses.iter().filter(|w| w.is_main())
    }

    /// FRONT warehouses, in entry order.
    pub fn fronts(&self) -> impl Iterator<Item = &Warehouse> + '_ {
        self.warehouses.iter().filter(|w| w.is_front())
    }

    /// First MAIN warehouse in entry order; the anchor for Central and
    /// Fronts financing and sea freight.
    #[must_use]
    pub fn first_main(&self) -> Option<&Warehouse> {
        self.mains().next()
    }

    /// Warehouse by location code.
    #[must_use]
    pub fn warehouse(&self, location: &str) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.location == location)
    }
}
