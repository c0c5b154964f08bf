//! Core types for netcost
//!
//! This crate provides the data model shared by every cost calculator:
//!
//! - [`MarketArea`] - Demand inputs for one market, keyed by code
//! - [`MarketTable`] - All market areas, iterated in deterministic order
//! - [`Warehouse`] - A warehouse with its [`WarehouseRole`] (MAIN or FRONT)
//! - [`NetworkConfig`] - Global rates, sizing factors, and layout selection
//! - [`NetworkBuilder`] - Two-phase construction: accumulate entry data,
//!   then resolve references and defaults into an immutable [`Network`]
//!
//! # Example
//!
//! ```
//! use netcost_core::{Layout, MarketArea, NetworkBuilder, NetworkConfig, WarehouseSpec};
//!
//! let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
//!
//! let network = NetworkBuilder::new(config)
//!     .market(MarketArea::new("TX").with_daily_demand(50, 10.0))
//!     .market(MarketArea::new("FL").with_daily_demand(30, 5.0))
//!     .warehouse(WarehouseSpec::main("TX", ["TX", "FL"]))
//!     .finish()
//!     .unwrap();
//!
//! // A multi-market MAIN is staffed with 4 employees by default.
//! assert_eq!(network.warehouses()[0].employees, 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod market;
pub mod network;
pub mod warehouse;

pub use builder::{BuildError, NetworkBuilder, WarehouseSpec};
pub use config::{FinancingModel, LandShippingModel, Layout, NetworkConfig};
pub use market::{MarketArea, MarketTable, MONTHS_PER_YEAR};
pub use network::Network;
pub use warehouse::{LandLeg, RentPricing, Warehouse, WarehouseKind, WarehouseRole};
