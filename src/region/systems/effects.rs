//! Policy effect calculator - maps one year's decisions onto next-year
//! indicators
//!
//! Stock levers (education, health, infrastructure) measure their delta
//! against last year's stored spending; every other lever measures against a
//! fixed reference equal to its published default. An untouched decision set
//! therefore leaves a snapshot unchanged apart from the gdp jitter.

use crate::core::rng::SimRng;
use crate::region::decisions::{DecisionSet, Lever};
use crate::region::indicators::IndicatorSnapshot;
use crate::region::spillover::{PolicySpillover, SpilloverKind};

/// Year-to-year noise on gdp growth, the engine's only stochastic term
pub const GDP_JITTER: f64 = 0.25;

// Per-unit lever sensitivities. The percent-scale levers (trade, tariff,
// cooperation) divide their delta by 100 before these apply.
const EDUCATION_LITERACY: f64 = 1.2;
const EDUCATION_GDP: f64 = 0.18;
const EDUCATION_UNEMPLOYMENT: f64 = 0.25;

const HEALTH_LIFE_EXPECTANCY: f64 = 0.45;
const HEALTH_INFANT_MORTALITY: f64 = 2.25;
const HEALTH_GDP: f64 = 0.12;

const INFRA_GDP: f64 = 0.35;
const INFRA_UNEMPLOYMENT: f64 = 0.20;
const INFRA_POVERTY: f64 = 0.45;

const AGRICULTURE_GDP: f64 = 0.10;
const AGRICULTURE_POVERTY: f64 = 0.40;

const MANUFACTURING_GDP: f64 = 0.30;
const MANUFACTURING_UNEMPLOYMENT: f64 = 0.35;
const MANUFACTURING_CO2: f64 = 0.06;

const SERVICES_GDP: f64 = 0.25;
const SERVICES_UNEMPLOYMENT: f64 = 0.30;

const ENERGY_GDP: f64 = 0.15;
const ENERGY_CO2: f64 = 0.08;

const TECHNOLOGY_GDP: f64 = 0.30;
const TECHNOLOGY_LITERACY: f64 = 0.40;

// Green spending cuts emissions multiplicatively but costs growth short-term
const ENVIRONMENT_CO2_FACTOR: f64 = 0.04;
const ENVIRONMENT_GDP_COST: f64 = 0.08;

const TRADE_GDP: f64 = 0.12;
const TRADE_UNEMPLOYMENT: f64 = 0.10;

// Tariffs above the regional baseline trade efficiency for protection
const TARIFF_GDP: f64 = 0.08;
const TARIFF_UNEMPLOYMENT: f64 = 0.05;
const TARIFF_POVERTY: f64 = 0.10;

const COOPERATION_GDP: f64 = 0.06;
const COOPERATION_INFRA: f64 = 0.30;

// Pass-through weights for incoming spillovers
const SPILL_INFRA_GDP: f64 = 0.1;
const SPILL_MANUFACTURING_GDP: f64 = 0.6;
const SPILL_MANUFACTURING_UNEMPLOYMENT: f64 = 0.2;
const SPILL_TECHNOLOGY_GDP: f64 = 0.5;
const SPILL_TECHNOLOGY_LITERACY: f64 = 0.3;
const SPILL_ENERGY_GDP: f64 = 0.4;
const SPILL_ENERGY_CO2: f64 = 0.1;

/// Apply one year of policy to a snapshot.
///
/// Pure in everything but the single gdp jitter drawn from `rng`. The
/// returned snapshot keeps the input's `country` and `year`; the caller
/// stamps the new year. Clamping to the documented bounds is the
/// unconditional final step.
pub fn apply_policy_effects(
    current: &IndicatorSnapshot,
    decisions: &DecisionSet,
    spillovers: &[PolicySpillover],
    rng: &mut impl SimRng,
) -> IndicatorSnapshot {
    let mut next = current.clone();

    let education = decisions.value_or_default(Lever::Education);
    let health = decisions.value_or_default(Lever::Health);
    let infrastructure = decisions.value_or_default(Lever::Infrastructure);
    let environment = decisions.value_or_default(Lever::Environment);
    let trade = decisions.value_or_default(Lever::Trade);
    let tariff = decisions.value_or_default(Lever::Tariff);
    let cooperation = decisions.value_or_default(Lever::Cooperation);
    let agriculture = decisions.value_or_default(Lever::Agriculture);
    let manufacturing = decisions.value_or_default(Lever::Manufacturing);
    let services = decisions.value_or_default(Lever::Services);
    let energy = decisions.value_or_default(Lever::Energy);
    let technology = decisions.value_or_default(Lever::Technology);

    // Education: stock lever against last year's stored spending
    let education_delta = education - current.education_spending;
    next.literacy_rate += education_delta * EDUCATION_LITERACY;
    next.gdp_growth += education_delta * EDUCATION_GDP;
    next.unemployment -= education_delta * EDUCATION_UNEMPLOYMENT;
    next.education_spending = education;

    // Health
    let health_delta = health - current.health_expenditure;
    next.life_expectancy += health_delta * HEALTH_LIFE_EXPECTANCY;
    next.infant_mortality -= health_delta * HEALTH_INFANT_MORTALITY;
    next.gdp_growth += health_delta * HEALTH_GDP;
    next.health_expenditure = health;

    // Infrastructure
    let infra_delta = infrastructure - current.infrastructure_investment;
    next.gdp_growth += infra_delta * INFRA_GDP;
    next.unemployment -= infra_delta * INFRA_UNEMPLOYMENT;
    next.poverty_rate -= infra_delta * INFRA_POVERTY;
    next.infrastructure_investment = infrastructure;

    // Sector programs, measured against their published defaults
    let agriculture_delta = agriculture - Lever::Agriculture.default_value();
    next.gdp_growth += agriculture_delta * AGRICULTURE_GDP;
    next.poverty_rate -= agriculture_delta * AGRICULTURE_POVERTY;

    let manufacturing_delta = manufacturing - Lever::Manufacturing.default_value();
    next.gdp_growth += manufacturing_delta * MANUFACTURING_GDP;
    next.unemployment -= manufacturing_delta * MANUFACTURING_UNEMPLOYMENT;
    next.co2_emissions += manufacturing_delta * MANUFACTURING_CO2;

    let services_delta = services - Lever::Services.default_value();
    next.gdp_growth += services_delta * SERVICES_GDP;
    next.unemployment -= services_delta * SERVICES_UNEMPLOYMENT;

    let energy_delta = energy - Lever::Energy.default_value();
    next.gdp_growth += energy_delta * ENERGY_GDP;
    next.co2_emissions += energy_delta * ENERGY_CO2;

    let technology_delta = technology - Lever::Technology.default_value();
    next.gdp_growth += technology_delta * TECHNOLOGY_GDP;
    next.literacy_rate += technology_delta * TECHNOLOGY_LITERACY;

    let environment_delta = environment - Lever::Environment.default_value();
    next.co2_emissions *= 1.0 - environment_delta * ENVIRONMENT_CO2_FACTOR;
    next.gdp_growth -= environment_delta * ENVIRONMENT_GDP_COST;

    // Openness levers run on 0-100 scales; work in fractional points
    let trade_shift = (trade - Lever::Trade.default_value()) / 100.0;
    next.gdp_growth += trade_shift * TRADE_GDP;
    next.unemployment -= trade_shift * TRADE_UNEMPLOYMENT;

    let tariff_shift = (tariff - Lever::Tariff.default_value()) / 100.0;
    next.gdp_growth -= tariff_shift * TARIFF_GDP;
    next.unemployment += tariff_shift * TARIFF_UNEMPLOYMENT;
    next.poverty_rate += tariff_shift * TARIFF_POVERTY;

    let cooperation_shift = (cooperation - Lever::Cooperation.default_value()) / 100.0;
    next.gdp_growth += cooperation_shift * COOPERATION_GDP;
    next.infrastructure_investment += cooperation_shift * COOPERATION_INFRA;

    // Incoming spillovers: additive, order-independent
    for spillover in spillovers {
        let effect = spillover.effect;
        match spillover.kind {
            SpilloverKind::TradeGdp => next.gdp_growth += effect,
            SpilloverKind::Infrastructure => {
                next.infrastructure_investment += effect;
                next.gdp_growth += effect * SPILL_INFRA_GDP;
            }
            SpilloverKind::Environment => next.co2_emissions += effect,
            SpilloverKind::Manufacturing => {
                next.gdp_growth += effect * SPILL_MANUFACTURING_GDP;
                next.unemployment -= effect * SPILL_MANUFACTURING_UNEMPLOYMENT;
            }
            SpilloverKind::Technology => {
                next.gdp_growth += effect * SPILL_TECHNOLOGY_GDP;
                next.literacy_rate += effect * SPILL_TECHNOLOGY_LITERACY;
            }
            SpilloverKind::Energy => {
                next.gdp_growth += effect * SPILL_ENERGY_GDP;
                next.co2_emissions += effect * SPILL_ENERGY_CO2;
            }
        }
    }

    // Year-to-year noise
    next.gdp_growth += rng.jitter(GDP_JITTER);

    next.clamp_bounds();
    next
}
