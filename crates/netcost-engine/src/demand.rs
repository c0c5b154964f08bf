//! Demand aggregation over a warehouse's served markets.
//!
//! Every aggregator shares the same lenient lookup policy: a served-market
//! code with no entry in the table contributes nothing. This is deliberate
//! and tested, not a side effect. Aggregation stays in integers (`u64`);
//! callers convert to `f64` at the formula boundary.

use netcost_core::{MarketArea, MarketTable, Warehouse, MONTHS_PER_YEAR};

/// Sum of one month's forecast across the warehouse's served markets.
///
/// `month` is 0-based; callers pass `0..12`.
#[must_use]
pub fn monthly_forecast_sum(markets: &MarketTable, warehouse: &Warehouse, month: usize) -> u64 {
    debug_assert!(month < MONTHS_PER_YEAR);
    warehouse
        .served_markets
        .iter()
        .filter_map(|code| markets.get(code))
        .map(|area| u64::from(area.forecast[month]))
        .sum()
}

/// Maximum monthly forecast sum across the twelve months.
///
/// Used identically for MAIN and FRONT warehouses; there is deliberately no
/// per-role variant.
#[must_use]
pub fn max_monthly_forecast(markets: &MarketTable, warehouse: &Warehouse) -> u64 {
    (0..MONTHS_PER_YEAR)
        .map(|month| monthly_forecast_sum(markets, warehouse, month))
        .max()
        .unwrap_or(0)
}

/// Sum of average daily demand across the warehouse's served markets.
#[must_use]
pub fn daily_demand_sum(markets: &MarketTable, warehouse: &Warehouse) -> u64 {
    warehouse
        .served_markets
        .iter()
        .filter_map(|code| markets.get(code))
        .map(|area| u64::from(area.avg_daily_demand))
        .sum()
}

/// Total annual forecast demand across the warehouse's served markets.
#[must_use]
pub fn annual_demand(markets: &MarketTable, warehouse: &Warehouse) -> u64 {
    warehouse
        .served_markets
        .iter()
        .filter_map(|code| markets.get(code))
        .map(MarketArea::annual_forecast)
        .sum()
}
