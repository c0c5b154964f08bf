//! Annual inventory financing cost.

use netcost_core::{FinancingModel, Layout, Network, Warehouse};
use serde::Serialize;

use crate::demand::annual_demand;
use crate::error::EngineError;
use crate::safety_stock::safety_stock;

/// Inventory position and financing cost for one MAIN warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryBreakdown {
    /// Warehouse location code.
    pub location: String,
    /// Annual forecast demand across served markets, in units.
    pub annual_demand: u64,
    /// Safety stock held at this warehouse, in units.
    pub safety_stock: f64,
    /// Average inventory position, in units.
    pub average_inventory: f64,
    /// Annual financing cost.
    pub cost: f64,
}

/// Inventory financing cost across the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancingReport {
    /// Per-MAIN figures, in entry order.
    pub warehouses: Vec<InventoryBreakdown>,
    /// Aggregate safety stock, in units.
    pub safety_stock: f64,
    /// Aggregate average inventory, in units.
    pub average_inventory: f64,
    /// Sum of financing costs.
    pub total_cost: f64,
}

/// Annual cost of financing inventory held at MAIN warehouses.
///
/// Under `CentralFronts` the first MAIN in entry order carries the network's
/// financed inventory; it is an error for that layout to have no MAIN. Under
/// `MainRegionals` every MAIN finances its own inventory and the report
/// aggregates across them.
///
/// The average inventory position depends on the configured
/// [`FinancingModel`]:
///
/// - `Buffered`: `annual_demand / 12 + safety_stock`, with the buffer factor
///   applied to the financing product only;
/// - `SimpleMonthly`: `(annual_demand / 2 + safety_stock) / 12`.
pub fn financing_cost(network: &Network) -> Result<FinancingReport, EngineError> {
    tracing::debug!(
        "Calculating inventory financing under {}",
        network.config().layout
    );
    let mains: Vec<&Warehouse> = match network.config().layout {
        Layout::CentralFronts => {
            let central = network.first_main().ok_or(EngineError::NoMainWarehouse)?;
            vec![central]
        }
        Layout::MainRegionals => network.mains().collect(),
    };

    let warehouses: Vec<InventoryBreakdown> = mains
        .into_iter()
        .map(|main| main_breakdown(network, main))
        .collect();

    Ok(FinancingReport {
        safety_stock: warehouses.iter().map(|b| b.safety_stock).sum(),
        average_inventory: warehouses.iter().map(|b| b.average_inventory).sum(),
        total_cost: warehouses.iter().map(|b| b.cost).sum(),
        warehouses,
    })
}

fn main_breakdown(network: &Network, warehouse: &Warehouse) -> InventoryBreakdown {
    let config = network.config();
    let annual = annual_demand(network.markets(), warehouse);
    let stock = safety_stock(network, warehouse);

    let (average_inventory, buffer) = match config.financing_model {
        FinancingModel::Buffered { buffer_factor } => {
            (annual as f64 / 12.0 + stock, buffer_factor)
        }
        FinancingModel::SimpleMonthly => ((annual as f64 / 2.0 + stock) / 12.0, 1.0),
    };
    let cost = average_inventory * buffer * (config.interest_rate_pct / 100.0) * config.unit_cost;

    InventoryBreakdown {
        location: warehouse.location.clone(),
        annual_demand: annual,
        safety_stock: stock,
        average_inventory,
        cost,
    }
}
