//! Scenario files: the JSON entry surface for a network.
//!
//! A scenario carries everything one comparison run needs: the global
//! configuration plus market areas and warehouses in entry order. Optional
//! fields fall back to the standard data-entry defaults, so a minimal file
//! only names what it changes.
//!
//! ```json
//! {
//!   "config": { "layout": "central_fronts", "service_level": 0.95 },
//!   "markets": [ { "code": "TX", "avg_daily_demand": 60 } ],
//!   "warehouses": [
//!     {
//!       "location": "TX",
//!       "served_markets": ["TX"],
//!       "rent": { "method": "fixed", "price": 90000.0 },
//!       "kind": "main",
//!       "lead_time_days": 5,
//!       "sea_cost_per_40hc": 2000.0
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use netcost_core::{BuildError, MarketArea, Network, NetworkBuilder, NetworkConfig, WarehouseSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A deserialized scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Global configuration; omitted knobs take the entry defaults.
    #[serde(default)]
    pub config: NetworkConfig,
    /// Market areas, keyed by code.
    pub markets: Vec<MarketArea>,
    /// Warehouses, in entry order.
    pub warehouses: Vec<WarehouseSpec>,
}

impl Scenario {
    /// Resolve references and defaults into an immutable network.
    pub fn into_network(self) -> Result<Network, BuildError> {
        NetworkBuilder::new(self.config)
            .markets(self.markets)
            .warehouses(self.warehouses)
            .finish()
    }
}

/// Load a scenario from a JSON file.
pub fn load(path: &Path) -> Result<Scenario> {
    tracing::debug!("Loading scenario from {}", path.display());

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;

    tracing::debug!(
        "Loaded {} market area(s) and {} warehouse(s)",
        scenario.markets.len(),
        scenario.warehouses.len()
    );
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcost_core::Layout;

    const MINIMAL: &str = r#"{
        "markets": [ { "code": "TX" } ],
        "warehouses": [
            {
                "location": "TX",
                "served_markets": ["TX"],
                "rent": { "method": "fixed", "price": 90000.0 },
                "kind": "main",
                "lead_time_days": 5,
                "sea_cost_per_40hc": 2000.0
            }
        ]
    }"#;

    #[test]
    fn test_minimal_scenario_gets_config_defaults() {
        let scenario: Scenario = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(scenario.config, NetworkConfig::default());
        assert_eq!(scenario.config.layout, Layout::CentralFronts);

        let network = scenario.into_network().unwrap();
        assert_eq!(network.warehouses().len(), 1);
        assert_eq!(network.warehouses()[0].employees, 3);
    }

    #[test]
    fn test_build_error_surfaces_from_scenario() {
        let json = r#"{
            "markets": [ { "code": "TX" }, { "code": "TX" } ],
            "warehouses": []
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        let err = scenario.into_network().unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateMarket {
                code: "TX".to_string()
            }
        );
    }

    #[test]
    fn test_load_missing_file_names_the_path() {
        let err = load(Path::new("/no/such/scenario.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/scenario.json"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_file = std::env::temp_dir().join("netcost-malformed-test.json");
        std::fs::write(&temp_file, "{ not json").unwrap();

        let err = load(&temp_file).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));

        let _ = std::fs::remove_file(&temp_file);
    }

    #[test]
    fn test_load_round_trips_through_disk() {
        let temp_file = std::env::temp_dir().join("netcost-roundtrip-test.json");
        std::fs::write(&temp_file, MINIMAL).unwrap();

        let scenario = load(&temp_file).unwrap();
        assert_eq!(scenario.markets.len(), 1);
        assert_eq!(scenario.warehouses.len(), 1);

        let _ = std::fs::remove_file(&temp_file);
    }
}
