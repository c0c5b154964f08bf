//! Market areas and the demand table.
//!
//! A [`MarketArea`] carries the demand inputs for one geographic market:
//! average order size, average and standard deviation of daily demand, and a
//! twelve-month forecast. The [`MarketTable`] keys areas by code and is
//! backed by a sorted map so every iteration (and therefore every report and
//! diagnostic listing) comes out in a deterministic order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of forecast months carried per market area.
pub const MONTHS_PER_YEAR: usize = 12;

fn default_order_size() -> u32 {
    100
}

fn default_daily_demand() -> u32 {
    50
}

fn default_std_daily_demand() -> f64 {
    10.0
}

fn default_forecast() -> [u32; MONTHS_PER_YEAR] {
    [100; MONTHS_PER_YEAR]
}

/// Demand inputs for a single market area.
///
/// The forecast is a fixed twelve-element array, one entry per calendar
/// month starting with January. A scenario carrying the wrong number of
/// months is rejected at deserialization instead of surfacing later inside
/// a calculator.
///
/// # Examples
///
/// ```
/// use netcost_core::MarketArea;
///
/// let tx = MarketArea::new("TX")
///     .with_daily_demand(50, 10.0)
///     .with_forecast([600; 12]);
/// assert_eq!(tx.annual_forecast(), 7200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketArea {
    /// Unique market code, e.g. `"TX"` or `"NE"`.
    pub code: String,
    /// Average order size in units.
    #[serde(default = "default_order_size")]
    pub avg_order_size: u32,
    /// Average daily demand in units.
    #[serde(default = "default_daily_demand")]
    pub avg_daily_demand: u32,
    /// Standard deviation of daily demand in units.
    #[serde(default = "default_std_daily_demand")]
    pub std_daily_demand: f64,
    /// Forecast demand per calendar month, January first.
    #[serde(default = "default_forecast")]
    pub forecast: [u32; MONTHS_PER_YEAR],
}

impl MarketArea {
    /// Create a market area with the standard data-entry defaults:
    /// order size 100, daily demand 50 ± 10, flat forecast of 100 per month.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            avg_order_size: default_order_size(),
            avg_daily_demand: default_daily_demand(),
            std_daily_demand: default_std_daily_demand(),
            forecast: default_forecast(),
        }
    }

    /// Set the average order size.
    #[must_use]
    pub const fn with_order_size(mut self, units: u32) -> Self {
        self.avg_order_size = units;
        self
    }

    /// Set the average and standard deviation of daily demand.
    #[must_use]
    pub const fn with_daily_demand(mut self, avg: u32, std_dev: f64) -> Self {
        self.avg_daily_demand = avg;
        self.std_daily_demand = std_dev;
        self
    }

    /// Set the twelve-month forecast.
    #[must_use]
    pub const fn with_forecast(mut self, forecast: [u32; MONTHS_PER_YEAR]) -> Self {
        self.forecast = forecast;
        self
    }

    /// Total forecast demand across the year.
    #[must_use]
    pub fn annual_forecast(&self) -> u64 {
        self.forecast.iter().map(|&month| u64::from(month)).sum()
    }

    /// Months (0-based) whose forecast is zero.
    #[must_use]
    pub fn zero_forecast_months(&self) -> Vec<usize> {
        self.forecast
            .iter()
            .enumerate()
            .filter(|(_, &demand)| demand == 0)
            .map(|(month, _)| month)
            .collect()
    }
}

impl fmt::Display for MarketArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (daily {} ± {})",
            self.code, self.avg_daily_demand, self.std_daily_demand
        )
    }
}

/// Market areas keyed by code, iterated in code order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketTable {
    areas: BTreeMap<String, MarketArea>,
}

impl MarketTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an area, returning any previous entry with the same code.
    pub fn insert(&mut self, area: MarketArea) -> Option<MarketArea> {
        self.areas.insert(area.code.clone(), area)
    }

    /// Look up an area by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&MarketArea> {
        self.areas.get(code)
    }

    /// Whether the table holds an area with this code.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.areas.contains_key(code)
    }

    /// Number of areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Iterate areas in code order.
    pub fn iter(&self) -> impl Iterator<Item = &MarketArea> + '_ {
        self.areas.values()
    }
}

impl FromIterator<MarketArea> for MarketTable {
    fn from_iter<I: IntoIterator<Item = MarketArea>>(iter: I) -> Self {
        let mut table = Self::new();
        for area in iter {
            table.insert(area);
        }
        table
    }
}
