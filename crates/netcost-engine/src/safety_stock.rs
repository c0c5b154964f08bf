//! Statistical safety stock.

use netcost_core::{Layout, Network, Warehouse, WarehouseRole};

use crate::demand::daily_demand_sum;

/// Safety stock held at a warehouse, in units.
///
/// A MAIN warehouse holds `Σ std_daily_demand · √lead_time_days · z` over
/// its served markets. Under the Central and Fronts layout every MAIN
/// additionally holds one year of monthly resupply buffer covering every
/// FRONT warehouse in the network; the buffer is a network-wide figure by
/// design, not apportioned per serving assignment. A FRONT warehouse holds
/// no statistical safety stock and reports zero.
#[must_use]
pub fn safety_stock(network: &Network, warehouse: &Warehouse) -> f64 {
    let lead_time_days = match &warehouse.role {
        WarehouseRole::Main { lead_time_days, .. } => *lead_time_days,
        WarehouseRole::Front { .. } => return 0.0,
    };

    let std_sum: f64 = warehouse
        .served_markets
        .iter()
        .filter_map(|code| network.markets().get(code))
        .map(|area| area.std_daily_demand)
        .sum();
    let statistical = std_sum * f64::from(lead_time_days).sqrt() * network.config().z_score();

    match network.config().layout {
        Layout::CentralFronts => statistical + front_resupply_buffer(network),
        Layout::MainRegionals => statistical,
    }
}

/// One year of monthly resupply demand across every FRONT warehouse.
fn front_resupply_buffer(network: &Network) -> f64 {
    let fronts_daily: u64 = network
        .fronts()
        .map(|front| daily_demand_sum(network.markets(), front))
        .sum();
    12.0 * fronts_daily as f64
}
