//! Annual rental cost.

use netcost_core::{Network, RentPricing, Warehouse, WarehouseKind, WarehouseRole};
use serde::Serialize;

use crate::demand::{daily_demand_sum, max_monthly_forecast};
use crate::error::EngineError;
use crate::safety_stock::safety_stock;

/// Rental figures for one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalBreakdown {
    /// Warehouse location code.
    pub location: String,
    /// Warehouse role.
    pub kind: WarehouseKind,
    /// Annual rental cost.
    pub cost: f64,
    /// Derived floor area in square feet; zero under fixed pricing.
    pub area_sq_ft: f64,
}

/// Rental cost across the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalReport {
    /// Per-warehouse figures, in entry order.
    pub warehouses: Vec<RentalBreakdown>,
    /// Sum of rental costs.
    pub total_cost: f64,
}

/// Annual rental cost per warehouse and in total.
///
/// Fixed pricing charges the configured price regardless of demand.
/// Per-area pricing sizes the warehouse from demand and safety stock, then
/// prices the resulting floor area:
///
/// - MAIN: units = max monthly forecast + safety stock
/// - FRONT: units = max monthly forecast / 4 + daily demand sum × 12
///
/// with the role's overhead factor applied. A per-area price of zero would
/// make the derived area undefined and is reported as an error.
pub fn rental_costs(network: &Network) -> Result<RentalReport, EngineError> {
    tracing::debug!(
        "Calculating rental for {} warehouse(s)",
        network.warehouses().len()
    );
    let mut warehouses = Vec::with_capacity(network.warehouses().len());
    let mut total_cost = 0.0;

    for warehouse in network.warehouses() {
        let (cost, area_sq_ft) = warehouse_rental(network, warehouse)?;
        total_cost += cost;
        warehouses.push(RentalBreakdown {
            location: warehouse.location.clone(),
            kind: warehouse.kind(),
            cost,
            area_sq_ft,
        });
    }

    Ok(RentalReport {
        warehouses,
        total_cost,
    })
}

fn warehouse_rental(network: &Network, warehouse: &Warehouse) -> Result<(f64, f64), EngineError> {
    let config = network.config();
    match warehouse.rent {
        RentPricing::Fixed { price } => Ok((price, 0.0)),
        RentPricing::PerArea { price_per_sq_ft } => {
            if price_per_sq_ft == 0.0 {
                return Err(EngineError::ZeroRentPrice {
                    location: warehouse.location.clone(),
                });
            }
            let markets = network.markets();
            let (total_units, overhead) = match warehouse.role {
                WarehouseRole::Main { .. } => (
                    max_monthly_forecast(markets, warehouse) as f64
                        + safety_stock(network, warehouse),
                    config.overhead_main,
                ),
                WarehouseRole::Front { .. } => (
                    max_monthly_forecast(markets, warehouse) as f64 / 4.0
                        + daily_demand_sum(markets, warehouse) as f64 * 12.0,
                    config.overhead_front,
                ),
            };
            let cost = price_per_sq_ft * config.sq_ft_per_unit * overhead * total_units;
            Ok((cost, cost / price_per_sq_ft))
        }
    }
}
