//! Network configuration validation rules.
//!
//! This crate checks a built [`Network`] for configuration mistakes and
//! reports them as diagnostics with stable codes and severities:
//!
//! - Warehouse self-consistency (location among its own served markets)
//! - FRONT-to-MAIN serving assignments
//! - Market coverage (every market served by some warehouse)
//! - Forecast sanity (zero-demand months)
//! - Land-shipping leg completeness for Main Regionals networks
//! - Degenerate service levels
//!
//! Diagnostics are advisory: they never block network construction, but an
//! error-severity diagnostic generally predicts that a dependent calculator
//! will refuse to produce a figure.
//!
//! # Diagnostic Codes
//!
//! | Code | Severity | Description |
//! |------|----------|-------------|
//! | C1001 | Error | Warehouse does not serve its own location |
//! | C1002 | Error | FRONT warehouse has no serving MAIN |
//! | C1003 | Error | Serving MAIN shares no market with its FRONT |
//! | C2001 | Error | Market area served by no warehouse |
//! | C2002 | Warning | Market area forecasts zero demand in some month |
//! | C3001 | Error | Multi-market MAIN missing a usable land leg |
//! | C4001 | Warning | Service level of 0 or 1 (non-finite z-score) |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use netcost_core::{
    LandShippingModel, Layout, MarketArea, Network, Warehouse, WarehouseRole,
};
use std::fmt;
use thiserror::Error;

/// Validation diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Warehouse location code missing from its own served-markets list.
    LocationNotServed,
    /// FRONT warehouse with no serving MAIN warehouse assigned.
    FrontWithoutMain,
    /// Serving MAIN shares no served market with its FRONT.
    DisjointServingMain,
    /// Market area not served by any warehouse.
    MarketNotServed,
    /// Market area forecasting zero demand in one or more months.
    ZeroForecastMonth,
    /// Multi-market MAIN without a usable land leg for a served market.
    MissingLandLeg,
    /// Service level of exactly 0 or 1; the z-score is not finite.
    DegenerateServiceLevel,
}

impl DiagnosticCode {
    /// Stable code string for reports and machine output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LocationNotServed => "C1001",
            Self::FrontWithoutMain => "C1002",
            Self::DisjointServingMain => "C1003",
            Self::MarketNotServed => "C2001",
            Self::ZeroForecastMonth => "C2002",
            Self::MissingLandLeg => "C3001",
            Self::DegenerateServiceLevel => "C4001",
        }
    }

    /// Check if this code is advisory rather than a configuration error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::ZeroForecastMonth | Self::DegenerateServiceLevel)
    }

    /// Get the severity level.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The configuration is wrong; a dependent calculator will fail.
    Error,
    /// Suspicious but computable.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A validation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct Diagnostic {
    /// Diagnostic code.
    pub code: DiagnosticCode,
    /// Diagnostic message.
    pub message: String,
    /// Additional context.
    pub context: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    #[must_use]
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Add context to this diagnostic.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Severity of this diagnostic.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.code.severity()
    }
}

/// Check whether any diagnostic is error severity.
#[must_use]
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| !d.code.is_warning())
}

/// Validate a network configuration.
///
/// Returns all diagnostics found, warehouses first (in entry order), then
/// markets (in code order), then global checks.
#[must_use]
pub fn validate(network: &Network) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for warehouse in network.warehouses() {
        check_location_served(warehouse, &mut diagnostics);
        check_serving_main(network, warehouse, &mut diagnostics);
        check_land_legs(network, warehouse, &mut diagnostics);
    }

    for area in network.markets().iter() {
        check_market_served(network, area, &mut diagnostics);
        check_zero_forecast(area, &mut diagnostics);
    }

    check_service_level(network, &mut diagnostics);

    diagnostics
}

/// C1001: a warehouse must serve the market it sits in.
fn check_location_served(warehouse: &Warehouse, diagnostics: &mut Vec<Diagnostic>) {
    if !warehouse.serves(&warehouse.location) {
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::LocationNotServed,
            format!(
                "Warehouse {} does not serve its own location",
                warehouse.location
            ),
        ));
    }
}

/// C1002/C1003: FRONT warehouses need a serving MAIN that shares a market.
fn check_serving_main(network: &Network, warehouse: &Warehouse, diagnostics: &mut Vec<Diagnostic>) {
    let serving = match &warehouse.role {
        WarehouseRole::Front { serving_main, .. } => serving_main,
        WarehouseRole::Main { .. } => return,
    };

    let Some(main_location) = serving else {
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::FrontWithoutMain,
            format!(
                "FRONT warehouse {} has no serving MAIN warehouse",
                warehouse.location
            ),
        ));
        return;
    };

    // The builder guarantees resolution, but hand-assembled networks may
    // carry dangling references.
    let Some(main) = network.warehouse(main_location).filter(|w| w.is_main()) else {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCode::FrontWithoutMain,
                format!(
                    "FRONT warehouse {} has no serving MAIN warehouse",
                    warehouse.location
                ),
            )
            .with_context(format!("reference {main_location} does not resolve to a MAIN")),
        );
        return;
    };

    let shares_market = warehouse.served_markets.iter().any(|m| main.serves(m));
    if !shares_market {
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::DisjointServingMain,
            format!(
                "Serving MAIN {} shares no served market with FRONT {}",
                main.location, warehouse.location
            ),
        ));
    }
}

/// C3001: Main Regionals multi-market warehouses need a land leg per
/// non-primary served market present in the table.
fn check_land_legs(network: &Network, warehouse: &Warehouse, diagnostics: &mut Vec<Diagnostic>) {
    if network.config().layout != Layout::MainRegionals {
        return;
    }
    let land_legs = match &warehouse.role {
        WarehouseRole::Main { land_legs, .. } => land_legs,
        WarehouseRole::Front { .. } => return,
    };
    if warehouse.served_markets.len() <= 1 {
        return;
    }

    let per_market_rate = matches!(
        network.config().land_shipping_model,
        LandShippingModel::PerMarketRate
    );

    for market in warehouse.secondary_markets() {
        if !network.markets().contains(market) {
            continue;
        }
        match land_legs.get(market) {
            None => diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::MissingLandLeg,
                    format!(
                        "Warehouse {} has no usable land leg for market {market}",
                        warehouse.location
                    ),
                )
                .with_context("leg missing"),
            ),
            Some(leg) if per_market_rate && leg.cost_per_avg_order_mile == 0.0 => diagnostics
                .push(
                    Diagnostic::new(
                        DiagnosticCode::MissingLandLeg,
                        format!(
                            "Warehouse {} has no usable land leg for market {market}",
                            warehouse.location
                        ),
                    )
                    .with_context("rate is zero"),
                ),
            Some(_) => {}
        }
    }
}

/// C2001: every market area should be served by some warehouse.
fn check_market_served(network: &Network, area: &MarketArea, diagnostics: &mut Vec<Diagnostic>) {
    let served = network.warehouses().iter().any(|w| w.serves(&area.code));
    if !served {
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::MarketNotServed,
            format!("Market area {} is served by no warehouse", area.code),
        ));
    }
}

/// C2002: flag months with zero forecast demand.
fn check_zero_forecast(area: &MarketArea, diagnostics: &mut Vec<Diagnostic>) {
    let zero_months = area.zero_forecast_months();
    if zero_months.is_empty() {
        return;
    }
    let months: Vec<String> = zero_months.iter().map(|m| (m + 1).to_string()).collect();
    diagnostics.push(
        Diagnostic::new(
            DiagnosticCode::ZeroForecastMonth,
            format!(
                "Market area {} forecasts zero demand in {} month(s)",
                area.code,
                zero_months.len()
            ),
        )
        .with_context(format!("months {}", months.join(", "))),
    );
}

/// C4001: service levels of exactly 0 or 1 give a non-finite z-score.
fn check_service_level(network: &Network, diagnostics: &mut Vec<Diagnostic>) {
    if !network.config().z_score().is_finite() {
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::DegenerateServiceLevel,
            format!(
                "Service level {} gives a non-finite z-score",
                network.config().service_level
            ),
        ));
    }
}
