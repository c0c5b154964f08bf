//! Calculator failure conditions.

use thiserror::Error;

/// Errors that make a calculator withhold its result.
///
/// These mirror the conditions the validator flags as error-severity
/// diagnostics; when one slips through to calculation time, the dependent
/// calculator returns the error rather than a zero or partial figure that
/// could be mistaken for a valid answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Central and Fronts financing or sea freight with no MAIN warehouse.
    #[error("no MAIN warehouse in a Central and Fronts network")]
    NoMainWarehouse,

    /// Per-area rent with a zero price; the derived area is undefined.
    #[error("warehouse {location} uses per-area rent with a zero price")]
    ZeroRentPrice {
        /// The offending warehouse.
        location: String,
    },

    /// Main Regionals leg with no land-shipping data for a served market.
    #[error("warehouse {location} has no land-shipping leg for market {market}")]
    MissingLandLeg {
        /// Warehouse owning the leg.
        location: String,
        /// Target market.
        market: String,
    },

    /// Main Regionals per-market leg whose shipping rate is zero.
    #[error("warehouse {location} has a zero land-shipping rate for market {market}")]
    ZeroShippingRate {
        /// Warehouse owning the leg.
        location: String,
        /// Target market.
        market: String,
    },

    /// Per-market leg toward a market with a zero average order size; the
    /// per-order rate cannot be reduced to a per-unit rate.
    #[error("market {market} has a zero average order size")]
    ZeroOrderSize {
        /// The degenerate market.
        market: String,
    },

    /// Container capacity of zero; container counts are undefined.
    #[error("container capacity is zero")]
    ZeroContainerCapacity,
}
