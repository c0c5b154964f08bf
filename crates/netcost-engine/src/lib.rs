//! Annual cost calculators for a warehouse network.
//!
//! This crate provides the cost engine: pure functions over an immutable
//! [`netcost_core::Network`] that each produce an independent report:
//!
//! - [`rental_costs`] - Annual rent, fixed or derived from required floor area
//! - [`financing_cost`] - Inventory financing from safety stock and demand
//! - [`shipping_costs`] - Sea freight (container loads) plus land freight
//! - [`labor_costs`] - Salaries times headcount
//! - [`safety_stock`] - Statistical buffer stock per warehouse
//! - The demand aggregators underneath them ([`max_monthly_forecast`],
//!   [`daily_demand_sum`], [`annual_demand`], [`monthly_forecast_sum`])
//!
//! Calculators never mutate the network and have no ordering dependencies
//! among themselves; the caller sums their totals for the network-wide
//! figure. A calculator that cannot produce a correct number returns an
//! [`EngineError`] and withholds the result instead of reporting zero.
//!
//! # Example
//!
//! ```
//! use netcost_core::{MarketArea, NetworkBuilder, NetworkConfig, RentPricing, WarehouseSpec};
//! use netcost_engine::rental_costs;
//!
//! let network = NetworkBuilder::new(NetworkConfig::default())
//!     .market(MarketArea::new("TX"))
//!     .warehouse(
//!         WarehouseSpec::main("TX", ["TX"])
//!             .with_rent(RentPricing::Fixed { price: 90_000.0 }),
//!     )
//!     .finish()
//!     .unwrap();
//!
//! let report = rental_costs(&network).unwrap();
//! assert_eq!(report.total_cost, 90_000.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod demand;
mod error;
pub mod financing;
pub mod labor;
pub mod rental;
pub mod safety_stock;
pub mod shipping;

pub use demand::{annual_demand, daily_demand_sum, max_monthly_forecast, monthly_forecast_sum};
pub use error::EngineError;
pub use financing::{financing_cost, FinancingReport, InventoryBreakdown};
pub use labor::{labor_costs, LaborBreakdown, LaborReport};
pub use rental::{rental_costs, RentalBreakdown, RentalReport};
pub use safety_stock::safety_stock;
pub use shipping::{shipping_costs, LandLegCost, SeaLeg, ShippingReport};
