//! Annual labor cost.

use netcost_core::Network;
use serde::Serialize;

/// Labor figures for one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaborBreakdown {
    /// Warehouse location code.
    pub location: String,
    /// Number of employees.
    pub employees: u32,
    /// Annual labor cost.
    pub cost: f64,
}

/// Labor cost across the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaborReport {
    /// Per-warehouse figures, in entry order.
    pub warehouses: Vec<LaborBreakdown>,
    /// Sum of labor costs.
    pub total_cost: f64,
}

/// Annual labor cost: average salary times employee count, per warehouse
/// and in total. Infallible.
pub fn labor_costs(network: &Network) -> LaborReport {
    tracing::debug!(
        "Calculating labor for {} warehouse(s)",
        network.warehouses().len()
    );
    let warehouses: Vec<LaborBreakdown> = network
        .warehouses()
        .iter()
        .map(|warehouse| LaborBreakdown {
            location: warehouse.location.clone(),
            employees: warehouse.employees,
            cost: warehouse.avg_salary * f64::from(warehouse.employees),
        })
        .collect();

    LaborReport {
        total_cost: warehouses.iter().map(|b| b.cost).sum(),
        warehouses,
    }
}
