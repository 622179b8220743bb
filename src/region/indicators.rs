//! Indicator snapshots - a country's measured socioeconomic state for one year

use serde::{Deserialize, Serialize};

use crate::core::types::Year;

/// Valid ranges enforced after every effect pass. Downstream code (scoring,
/// AI thresholds) relies on these bounds holding.
pub const GDP_GROWTH_BOUNDS: (f64, f64) = (-10.0, 15.0);
pub const UNEMPLOYMENT_BOUNDS: (f64, f64) = (0.5, 50.0);
pub const LITERACY_BOUNDS: (f64, f64) = (0.0, 100.0);
pub const LIFE_EXPECTANCY_BOUNDS: (f64, f64) = (45.0, 90.0);
pub const POVERTY_BOUNDS: (f64, f64) = (0.0, 90.0);
pub const INFANT_MORTALITY_BOUNDS: (f64, f64) = (1.0, 150.0);
pub const MIN_POPULATION: f64 = 100_000.0;

/// A country's measured state for one year
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub country: String,
    pub year: Year,
    /// Annual GDP growth, percent
    pub gdp_growth: f64,
    /// Share of the labor force, percent
    pub unemployment: f64,
    /// Adult literacy, percent
    pub literacy_rate: f64,
    /// Years at birth
    pub life_expectancy: f64,
    /// Share of population below the national poverty line, percent
    pub poverty_rate: f64,
    /// Tonnes per capita
    pub co2_emissions: f64,
    pub population: f64,
    /// Deaths per 1000 live births
    pub infant_mortality: f64,
    /// Government health spending, % of GDP
    pub health_expenditure: f64,
    /// Government education spending, % of GDP
    pub education_spending: f64,
    /// Public infrastructure investment, % of GDP
    pub infrastructure_investment: f64,
}

impl IndicatorSnapshot {
    /// Clamp every bounded field to its valid range. Unconditional; the
    /// effect calculator calls this as its final step.
    pub fn clamp_bounds(&mut self) {
        self.gdp_growth = self.gdp_growth.clamp(GDP_GROWTH_BOUNDS.0, GDP_GROWTH_BOUNDS.1);
        self.unemployment = self
            .unemployment
            .clamp(UNEMPLOYMENT_BOUNDS.0, UNEMPLOYMENT_BOUNDS.1);
        self.literacy_rate = self.literacy_rate.clamp(LITERACY_BOUNDS.0, LITERACY_BOUNDS.1);
        self.life_expectancy = self
            .life_expectancy
            .clamp(LIFE_EXPECTANCY_BOUNDS.0, LIFE_EXPECTANCY_BOUNDS.1);
        self.poverty_rate = self.poverty_rate.clamp(POVERTY_BOUNDS.0, POVERTY_BOUNDS.1);
        self.co2_emissions = self.co2_emissions.max(0.0);
        self.infant_mortality = self
            .infant_mortality
            .clamp(INFANT_MORTALITY_BOUNDS.0, INFANT_MORTALITY_BOUNDS.1);
        self.population = self.population.max(MIN_POPULATION);
    }
}

/// A single snapshot field, for effects that address indicators by name
/// (regional event payloads)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    GdpGrowth,
    Unemployment,
    LiteracyRate,
    LifeExpectancy,
    PovertyRate,
    Co2Emissions,
    Population,
    InfantMortality,
    HealthExpenditure,
    EducationSpending,
    InfrastructureInvestment,
}

impl Indicator {
    /// Add a delta onto the named field
    pub fn add(self, snapshot: &mut IndicatorSnapshot, delta: f64) {
        match self {
            Indicator::GdpGrowth => snapshot.gdp_growth += delta,
            Indicator::Unemployment => snapshot.unemployment += delta,
            Indicator::LiteracyRate => snapshot.literacy_rate += delta,
            Indicator::LifeExpectancy => snapshot.life_expectancy += delta,
            Indicator::PovertyRate => snapshot.poverty_rate += delta,
            Indicator::Co2Emissions => snapshot.co2_emissions += delta,
            Indicator::Population => snapshot.population += delta,
            Indicator::InfantMortality => snapshot.infant_mortality += delta,
            Indicator::HealthExpenditure => snapshot.health_expenditure += delta,
            Indicator::EducationSpending => snapshot.education_spending += delta,
            Indicator::InfrastructureInvestment => snapshot.infrastructure_investment += delta,
        }
    }
}
