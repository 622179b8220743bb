//! Historical indicator data store
//!
//! Feeds the starting snapshots. Lookups return `Option`; only the snapshot
//! builder collapses missing data to 0.0, at which point a missing indicator
//! becomes indistinguishable from a true zero. That precision loss is
//! accepted for game start-up.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Year;
use crate::region::country::SOUTH_ASIAN_COUNTRIES;
use crate::region::indicators::IndicatorSnapshot;

/// indicator -> country -> year -> value
type Table = HashMap<String, HashMap<String, BTreeMap<Year, f64>>>;

#[derive(Clone, Debug, Default)]
pub struct IndicatorStore {
    table: Table,
}

impl IndicatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a full table from its JSON form:
    /// `{"GDP": {"India": {"2023": 7.2, ...}, ...}, ...}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: Table = serde_json::from_str(json)?;
        Ok(Self { table })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn insert(&mut self, indicator: &str, country: &str, year: Year, value: f64) {
        self.table
            .entry(indicator.to_string())
            .or_default()
            .entry(country.to_string())
            .or_default()
            .insert(year, value);
    }

    /// Exact-year lookup with closest-year fallback. When two recorded
    /// years are equally close, the earlier one wins.
    pub fn get(&self, indicator: &str, country: &str, year: Year) -> Option<f64> {
        let series = self.table.get(indicator)?.get(country)?;
        if let Some(value) = series.get(&year) {
            return Some(*value);
        }
        series
            .iter()
            .min_by_key(|(y, _)| ((**y - year).abs(), **y))
            .map(|(_, value)| *value)
    }

    /// Mean over every country that has a value for the (closest) year
    pub fn regional_average(&self, indicator: &str, year: Year) -> Option<f64> {
        let values: Vec<f64> = SOUTH_ASIAN_COUNTRIES
            .iter()
            .filter_map(|c| self.get(indicator, c.name, year))
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// Build a country's starting snapshot. Missing indicators become 0.0.
    pub fn initial_snapshot(&self, country: &str, year: Year) -> IndicatorSnapshot {
        let v = |indicator: &str| self.get(indicator, country, year).unwrap_or(0.0);
        IndicatorSnapshot {
            country: country.to_string(),
            year,
            gdp_growth: v("GDP"),
            unemployment: v("Unemployment"),
            literacy_rate: v("Literacy"),
            life_expectancy: v("LifeExpectancy"),
            poverty_rate: v("Poverty"),
            co2_emissions: v("CO2_Emissions"),
            population: v("Population"),
            infant_mortality: v("MortalityRate"),
            health_expenditure: v("HealthExpenditure"),
            education_spending: v("Education"),
            infrastructure_investment: v("Infrastructure"),
        }
    }

    /// Built-in 2023 dataset for the nine countries, so the engine runs
    /// without external files
    pub fn south_asia() -> Self {
        let mut store = Self::new();
        for (indicator, rows) in SEED_2023 {
            for (country, value) in *rows {
                store.insert(indicator, country, 2023, *value);
            }
        }
        store
    }
}

#[rustfmt::skip]
const SEED_2023: &[(&str, &[(&str, f64)])] = &[
    ("GDP", &[
        ("India", 7.2), ("Pakistan", -0.2), ("Bangladesh", 5.8),
        ("Sri Lanka", -2.3), ("Nepal", 1.9), ("Bhutan", 4.6),
        ("Maldives", 4.1), ("Afghanistan", -6.2), ("Myanmar", 0.8),
    ]),
    ("Unemployment", &[
        ("India", 7.3), ("Pakistan", 6.3), ("Bangladesh", 4.7),
        ("Sri Lanka", 6.6), ("Nepal", 10.9), ("Bhutan", 3.3),
        ("Maldives", 4.9), ("Afghanistan", 14.1), ("Myanmar", 2.2),
    ]),
    ("Literacy", &[
        ("India", 74.4), ("Pakistan", 58.0), ("Bangladesh", 74.9),
        ("Sri Lanka", 92.4), ("Nepal", 71.2), ("Bhutan", 70.6),
        ("Maldives", 97.9), ("Afghanistan", 37.3), ("Myanmar", 89.1),
    ]),
    ("LifeExpectancy", &[
        ("India", 70.9), ("Pakistan", 66.1), ("Bangladesh", 73.7),
        ("Sri Lanka", 76.6), ("Nepal", 70.5), ("Bhutan", 72.1),
        ("Maldives", 79.9), ("Afghanistan", 62.9), ("Myanmar", 67.4),
    ]),
    ("Poverty", &[
        ("India", 21.9), ("Pakistan", 39.8), ("Bangladesh", 31.5),
        ("Sri Lanka", 14.3), ("Nepal", 25.2), ("Bhutan", 8.5),
        ("Maldives", 5.4), ("Afghanistan", 54.5), ("Myanmar", 40.1),
    ]),
    ("CO2_Emissions", &[
        ("India", 1.9), ("Pakistan", 1.0), ("Bangladesh", 0.6),
        ("Sri Lanka", 1.1), ("Nepal", 0.5), ("Bhutan", 1.3),
        ("Maldives", 3.3), ("Afghanistan", 0.3), ("Myanmar", 0.6),
    ]),
    ("Population", &[
        ("India", 1_428_600_000.0), ("Pakistan", 240_500_000.0),
        ("Bangladesh", 172_900_000.0), ("Sri Lanka", 21_900_000.0),
        ("Nepal", 30_900_000.0), ("Bhutan", 787_000.0),
        ("Maldives", 521_000.0), ("Afghanistan", 42_200_000.0),
        ("Myanmar", 54_600_000.0),
    ]),
    ("MortalityRate", &[
        ("India", 25.5), ("Pakistan", 52.8), ("Bangladesh", 24.3),
        ("Sri Lanka", 6.0), ("Nepal", 23.5), ("Bhutan", 22.9),
        ("Maldives", 6.4), ("Afghanistan", 43.4), ("Myanmar", 35.8),
    ]),
    ("HealthExpenditure", &[
        ("India", 3.0), ("Pakistan", 2.9), ("Bangladesh", 2.4),
        ("Sri Lanka", 4.1), ("Nepal", 5.2), ("Bhutan", 3.6),
        ("Maldives", 8.7), ("Afghanistan", 4.3), ("Myanmar", 3.9),
    ]),
    ("Education", &[
        ("India", 4.6), ("Pakistan", 2.4), ("Bangladesh", 2.1),
        ("Sri Lanka", 1.9), ("Nepal", 4.2), ("Bhutan", 6.6),
        ("Maldives", 4.7), ("Afghanistan", 2.9), ("Myanmar", 2.1),
    ]),
    ("Infrastructure", &[
        ("India", 5.0), ("Pakistan", 2.1), ("Bangladesh", 3.2),
        ("Sri Lanka", 4.5), ("Nepal", 4.8), ("Bhutan", 7.2),
        ("Maldives", 6.1), ("Afghanistan", 1.5), ("Myanmar", 2.8),
    ]),
];
