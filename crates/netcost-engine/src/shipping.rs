//! Annual sea and land shipping cost.

use netcost_core::{
    LandShippingModel, Layout, Network, WarehouseRole, MONTHS_PER_YEAR,
};
use serde::Serialize;

use crate::demand::monthly_forecast_sum;
use crate::error::EngineError;

/// Volume of a 53ft container relative to a 40ft high-cube.
const VOLUME_RATIO_53FT: f64 = 1.37;

/// Fraction of container volume usable after packing loss.
const LOAD_FACTOR: f64 = 0.85;

const WEEKS_PER_MONTH: f64 = 4.0;

/// Sea freight for one MAIN warehouse and one served market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeaLeg {
    /// MAIN warehouse location code.
    pub location: String,
    /// Served market code.
    pub market: String,
    /// 40ft high-cube containers per year, fractional.
    pub containers: f64,
    /// Annual sea freight cost.
    pub cost: f64,
}

/// Land freight for one resupply or market delivery leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandLegCost {
    /// Warehouse location code the leg originates from or resupplies.
    pub location: String,
    /// Destination market code; `None` for MAIN-to-FRONT resupply legs,
    /// which cover all of the FRONT's markets at once.
    pub market: Option<String>,
    /// Annual land freight cost.
    pub cost: f64,
}

/// Shipping cost across the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingReport {
    /// Sea freight legs, one per MAIN and served market.
    pub sea_legs: Vec<SeaLeg>,
    /// Land freight legs; shape depends on the layout.
    pub land_legs: Vec<LandLegCost>,
    /// Sum of sea freight costs.
    pub sea_total: f64,
    /// Sum of land freight costs.
    pub land_total: f64,
    /// Sea plus land.
    pub total_cost: f64,
}

/// Annual shipping cost, split into sea and land freight.
///
/// Sea freight is the same under both layouts: every MAIN warehouse imports
/// each served market's annual forecast by 40ft high-cube container. Land
/// freight depends on the layout:
///
/// - `CentralFronts`: MAIN-to-FRONT resupply, costed per FRONT from a
///   blended 40ft/53ft container rate and weekly resupply volumes;
/// - `MainRegionals`: direct delivery from each multi-market MAIN to its
///   non-primary markets, costed per mile from the warehouse's land legs.
///
/// A `CentralFronts` network with no MAIN warehouse cannot import anything
/// and is reported as an error, as is a missing land leg for a non-primary
/// market and, under the per-market-rate model, a zero rate or a zero
/// average order size there. A zero container capacity is rejected before
/// any leg is costed; none of these degeneracies is allowed to fold an
/// infinite or NaN figure into the totals.
pub fn shipping_costs(network: &Network) -> Result<ShippingReport, EngineError> {
    tracing::debug!("Calculating shipping under {}", network.config().layout);
    if network.config().container_capacity_40 == 0 {
        return Err(EngineError::ZeroContainerCapacity);
    }
    let sea_legs = sea_freight(network)?;
    let land_legs = match network.config().layout {
        Layout::CentralFronts => front_resupply_legs(network),
        Layout::MainRegionals => regional_market_legs(network)?,
    };

    let sea_total: f64 = sea_legs.iter().map(|leg| leg.cost).sum();
    let land_total: f64 = land_legs.iter().map(|leg| leg.cost).sum();
    Ok(ShippingReport {
        sea_legs,
        land_legs,
        sea_total,
        land_total,
        total_cost: sea_total + land_total,
    })
}

fn sea_freight(network: &Network) -> Result<Vec<SeaLeg>, EngineError> {
    if network.config().layout == Layout::CentralFronts && network.first_main().is_none() {
        return Err(EngineError::NoMainWarehouse);
    }

    let capacity = f64::from(network.config().container_capacity_40);
    let mut legs = Vec::new();
    for warehouse in network.warehouses() {
        let WarehouseRole::Main {
            sea_cost_per_40hc, ..
        } = &warehouse.role
        else {
            continue;
        };
        for code in &warehouse.served_markets {
            let Some(area) = network.markets().get(code) else {
                continue;
            };
            let containers = area.annual_forecast() as f64 / capacity;
            legs.push(SeaLeg {
                location: warehouse.location.clone(),
                market: code.clone(),
                containers,
                cost: containers * sea_cost_per_40hc,
            });
        }
    }
    Ok(legs)
}

fn front_resupply_legs(network: &Network) -> Vec<LandLegCost> {
    let mut legs = Vec::new();
    for warehouse in network.warehouses() {
        let WarehouseRole::Front {
            land_cost_40ft,
            land_cost_53ft,
            ..
        } = &warehouse.role
        else {
            continue;
        };
        let per_unit = blended_unit_cost(
            *land_cost_40ft,
            *land_cost_53ft,
            network.config().container_capacity_40,
        );
        let annual: f64 = (0..MONTHS_PER_YEAR)
            .map(|month| {
                let weekly = monthly_forecast_sum(network.markets(), warehouse, month) as f64
                    / WEEKS_PER_MONTH;
                per_unit * weekly * WEEKS_PER_MONTH
            })
            .sum();
        legs.push(LandLegCost {
            location: warehouse.location.clone(),
            market: None,
            cost: annual,
        });
    }
    legs
}

/// Per-unit land rate blending the 40ft and 53ft container costs, corrected
/// for the usable load factor.
fn blended_unit_cost(cost_40ft: f64, cost_53ft: f64, capacity_40: u32) -> f64 {
    let capacity = f64::from(capacity_40);
    let per_unit_40 = cost_40ft / capacity;
    let per_unit_53 = cost_53ft / (capacity * VOLUME_RATIO_53FT);
    (per_unit_40 + per_unit_53) / 2.0 / LOAD_FACTOR
}

fn regional_market_legs(network: &Network) -> Result<Vec<LandLegCost>, EngineError> {
    let mut legs = Vec::new();
    for warehouse in network.warehouses() {
        let WarehouseRole::Main { land_legs, .. } = &warehouse.role else {
            continue;
        };
        if warehouse.served_markets.len() < 2 {
            continue;
        }
        for code in warehouse.secondary_markets() {
            let Some(area) = network.markets().get(code) else {
                continue;
            };
            let leg = land_legs
                .get(code)
                .ok_or_else(|| EngineError::MissingLandLeg {
                    location: warehouse.location.clone(),
                    market: code.clone(),
                })?;
            let per_unit_mile = match network.config().land_shipping_model {
                LandShippingModel::PerMarketRate => {
                    if leg.cost_per_avg_order_mile == 0.0 {
                        return Err(EngineError::ZeroShippingRate {
                            location: warehouse.location.clone(),
                            market: code.clone(),
                        });
                    }
                    // The rate is per average order; an order size of zero
                    // leaves no per-unit rate to derive.
                    if area.avg_order_size == 0 {
                        return Err(EngineError::ZeroOrderSize {
                            market: code.clone(),
                        });
                    }
                    leg.cost_per_avg_order_mile / f64::from(area.avg_order_size)
                }
                LandShippingModel::FlatRate { cost_per_unit_mile } => cost_per_unit_mile,
            };
            legs.push(LandLegCost {
                location: warehouse.location.clone(),
                market: Some(code.clone()),
                cost: leg.distance_miles * per_unit_mile * area.annual_forecast() as f64,
            });
        }
    }
    Ok(legs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcost_core::{LandLeg, MarketArea, NetworkBuilder, NetworkConfig, WarehouseSpec};

    #[test]
    fn test_sea_freight_containers() {
        // annual 6000 at capacity 600 is 10 containers; 10 * 2000 = 20000.
        let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX").with_forecast([500; 12]))
            .warehouse(WarehouseSpec::main("TX", ["TX"]))
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert_eq!(report.sea_legs.len(), 1);
        assert!((report.sea_legs[0].containers - 10.0).abs() < 1e-9);
        assert!((report.sea_total - 20_000.0).abs() < 1e-9);
        assert!(report.land_legs.is_empty());
    }

    #[test]
    fn test_central_fronts_resupply_leg() {
        let network = NetworkBuilder::new(NetworkConfig::default())
            .market(MarketArea::new("CAN").with_forecast([500; 12]))
            .market(MarketArea::new("NE").with_forecast([400; 12]))
            .warehouse(WarehouseSpec::main("CAN", ["CAN"]))
            .warehouse(
                WarehouseSpec::front("NE", ["NE"])
                    .with_serving_main("CAN")
                    .with_land_costs(500.0, 600.0),
            )
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert_eq!(report.land_legs.len(), 1);
        assert_eq!(report.land_legs[0].market, None);

        // blended rate = (500/600 + 600/(600*1.37)) / 2 / 0.85 over 4800
        // units per year.
        let per_unit = (500.0 / 600.0 + 600.0 / (600.0 * 1.37)) / 2.0 / 0.85;
        let expected = per_unit * 4800.0;
        assert!(
            (report.land_total - expected).abs() < 1e-6,
            "got {}, want {expected}",
            report.land_total
        );
    }

    #[test]
    fn test_central_fronts_without_main_is_an_error() {
        let network = NetworkBuilder::new(NetworkConfig::default())
            .market(MarketArea::new("NE"))
            .warehouse(WarehouseSpec::front("NE", ["NE"]))
            .finish()
            .unwrap();

        assert_eq!(
            shipping_costs(&network).unwrap_err(),
            EngineError::NoMainWarehouse
        );
    }

    #[test]
    fn test_regional_leg_per_market_rate() {
        // 300 miles at 45 per order-mile, orders of 100 units, annual 1200:
        // 300 * 45/100 * 1200 = 162000.
        let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .market(MarketArea::new("FL"))
            .warehouse(
                WarehouseSpec::main("TX", ["TX", "FL"]).with_land_leg("FL", LandLeg::new(300.0, 45.0)),
            )
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert_eq!(report.land_legs.len(), 1);
        assert_eq!(report.land_legs[0].market.as_deref(), Some("FL"));
        assert!((report.land_total - 162_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_regional_leg_flat_rate_ignores_market_rate() {
        // Flat 0.5 per unit-mile; the leg's own zero rate is acceptable.
        let config = NetworkConfig::default()
            .with_layout(Layout::MainRegionals)
            .with_land_shipping_model(LandShippingModel::FlatRate {
                cost_per_unit_mile: 0.5,
            });
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .market(MarketArea::new("FL"))
            .warehouse(
                WarehouseSpec::main("TX", ["TX", "FL"]).with_land_leg("FL", LandLeg::new(300.0, 0.0)),
            )
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert!((report.land_total - 180_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_leg_is_an_error() {
        let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .market(MarketArea::new("FL"))
            .warehouse(WarehouseSpec::main("TX", ["TX", "FL"]))
            .finish()
            .unwrap();

        assert_eq!(
            shipping_costs(&network).unwrap_err(),
            EngineError::MissingLandLeg {
                location: "TX".to_string(),
                market: "FL".to_string()
            }
        );
    }

    #[test]
    fn test_zero_rate_is_an_error_under_per_market_model() {
        let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .market(MarketArea::new("FL"))
            .warehouse(
                WarehouseSpec::main("TX", ["TX", "FL"]).with_land_leg("FL", LandLeg::new(300.0, 0.0)),
            )
            .finish()
            .unwrap();

        assert_eq!(
            shipping_costs(&network).unwrap_err(),
            EngineError::ZeroShippingRate {
                location: "TX".to_string(),
                market: "FL".to_string()
            }
        );
    }

    #[test]
    fn test_zero_order_size_is_an_error_under_per_market_model() {
        // Without the guard the per-unit rate divides by zero and the land
        // total comes out infinite (NaN once the forecast is zero too).
        let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .market(MarketArea::new("FL").with_order_size(0))
            .warehouse(
                WarehouseSpec::main("TX", ["TX", "FL"]).with_land_leg("FL", LandLeg::new(300.0, 45.0)),
            )
            .finish()
            .unwrap();

        assert_eq!(
            shipping_costs(&network).unwrap_err(),
            EngineError::ZeroOrderSize {
                market: "FL".to_string()
            }
        );
    }

    #[test]
    fn test_zero_order_size_accepted_under_flat_rate() {
        // The flat model never consults the order size.
        let config = NetworkConfig::default()
            .with_layout(Layout::MainRegionals)
            .with_land_shipping_model(LandShippingModel::FlatRate {
                cost_per_unit_mile: 0.5,
            });
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .market(MarketArea::new("FL").with_order_size(0))
            .warehouse(
                WarehouseSpec::main("TX", ["TX", "FL"]).with_land_leg("FL", LandLeg::new(300.0, 45.0)),
            )
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert!(report.land_total.is_finite());
        assert!((report.land_total - 180_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_container_capacity_is_an_error() {
        let config = NetworkConfig::default().with_container_capacity(0);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("CAN"))
            .market(MarketArea::new("NE"))
            .warehouse(WarehouseSpec::main("CAN", ["CAN"]))
            .warehouse(WarehouseSpec::front("NE", ["NE"]).with_serving_main("CAN"))
            .finish()
            .unwrap();

        assert_eq!(
            shipping_costs(&network).unwrap_err(),
            EngineError::ZeroContainerCapacity
        );
    }

    #[test]
    fn test_unknown_secondary_market_is_skipped() {
        // "SE" has no market entry, so it needs no leg and ships nothing.
        let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .warehouse(WarehouseSpec::main("TX", ["TX", "SE"]))
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert!(report.land_legs.is_empty());
        assert_eq!(report.sea_legs.len(), 1);
    }

    #[test]
    fn test_single_market_main_has_no_land_legs() {
        let config = NetworkConfig::default().with_layout(Layout::MainRegionals);
        let network = NetworkBuilder::new(config)
            .market(MarketArea::new("TX"))
            .warehouse(
                WarehouseSpec::main("TX", ["TX"]).with_land_leg("TX", LandLeg::new(10.0, 1.0)),
            )
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert!(report.land_legs.is_empty());
    }

    #[test]
    fn test_totals_split_sea_and_land() {
        let network = NetworkBuilder::new(NetworkConfig::default())
            .market(MarketArea::new("CAN").with_forecast([600; 12]))
            .market(MarketArea::new("NE").with_forecast([300; 12]))
            .warehouse(WarehouseSpec::main("CAN", ["CAN"]))
            .warehouse(WarehouseSpec::front("NE", ["NE"]).with_serving_main("CAN"))
            .finish()
            .unwrap();

        let report = shipping_costs(&network).unwrap();
        assert!(report.sea_total > 0.0);
        assert!(report.land_total > 0.0);
        assert!((report.total_cost - (report.sea_total + report.land_total)).abs() < 1e-9);
    }
}
