//! Spillover calculator - propagates one country's policy changes to its
//! trading partners through the trade matrix

use std::collections::BTreeMap;

use crate::core::types::{Magnitude, Timeframe};
use crate::data::products::ProductCatalog;
use crate::region::decisions::{DecisionSet, Lever};
use crate::region::spillover::{DetailedSpillover, EffectChannel, PolicySpillover, SpilloverKind};
use crate::region::trade::TradeRelationship;

// Per-category propagation constants
const TRADE_GDP_FACTOR: f64 = 0.25;
const INFRA_FACTOR: f64 = 0.12;
const ENVIRONMENT_FACTOR: f64 = 0.08;
const MANUFACTURING_FACTOR: f64 = 0.1;
const TECHNOLOGY_FACTOR: f64 = 0.15;
const ENERGY_FACTOR: f64 = 0.2;

// How decision values translate into propagated deltas
const TRADE_TO_GDP_DELTA: f64 = 0.02;
const ENVIRONMENT_TO_CO2_DELTA: f64 = 0.1;

/// Scale for the generic per-lever entries in the detailed analysis
const GENERIC_FACTOR: f64 = 0.15;

/// Effects below this absolute value are dropped from the detailed analysis
const SIGNIFICANCE_FLOOR: f64 = 0.01;
/// Lever shifts below this absolute value get no generic detailed entry
const GENERIC_DELTA_FLOOR: f64 = 0.1;
const PRODUCT_CONFIDENCE: f64 = 0.8;
const GENERIC_CONFIDENCE: f64 = 0.5;

/// Country pairs with significant cross-border energy trade. Energy
/// spillovers only flow along these links (hydro exports, grid connectivity).
const ENERGY_TRADE_PAIRS: [(&str, &str); 4] = [
    ("India", "Bhutan"),
    ("India", "Nepal"),
    ("Pakistan", "Afghanistan"),
    ("India", "Bangladesh"),
];

pub fn has_energy_trade(a: &str, b: &str) -> bool {
    ENERGY_TRADE_PAIRS
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

/// The policy deltas a country radiates outward. Only these six drive
/// cross-border propagation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolicyDeltas {
    pub gdp_growth: Option<f64>,
    pub infrastructure_investment: Option<f64>,
    pub co2_emissions: Option<f64>,
    pub manufacturing_investment: Option<f64>,
    pub technology_investment: Option<f64>,
    pub energy_investment: Option<f64>,
}

impl PolicyDeltas {
    /// Extract the spillover-relevant deltas from a decision set, measured
    /// against each lever's published default
    pub fn from_decisions(decisions: &DecisionSet) -> Self {
        let delta = |lever: Lever| decisions.value_or_default(lever) - lever.default_value();
        Self {
            gdp_growth: Some(delta(Lever::Trade) * TRADE_TO_GDP_DELTA),
            infrastructure_investment: Some(delta(Lever::Infrastructure)),
            co2_emissions: Some(delta(Lever::Environment) * ENVIRONMENT_TO_CO2_DELTA),
            manufacturing_investment: Some(delta(Lever::Manufacturing)),
            technology_investment: Some(delta(Lever::Technology)),
            energy_investment: Some(delta(Lever::Energy)),
        }
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Compute every spillover the source country sends out this year.
///
/// Fully deterministic. The output is grouped by trading partner in matrix
/// iteration order; no further ordering is guaranteed.
pub fn trade_spillovers(
    source: &str,
    deltas: &PolicyDeltas,
    matrix: &[TradeRelationship],
) -> Vec<PolicySpillover> {
    let mut spillovers = Vec::new();

    for trade in matrix.iter().filter(|t| t.touches(source)) {
        let target = match trade.partner_of(source) {
            Some(t) => t,
            None => continue,
        };
        let trade_intensity = trade.trade_volume / 100.0;
        let cooperation_factor = trade.cooperation / 100.0;

        if let Some(delta) = nonzero(deltas.gdp_growth) {
            let effect = delta * trade_intensity * cooperation_factor * TRADE_GDP_FACTOR;
            spillovers.push(PolicySpillover {
                source: source.to_string(),
                target: target.to_string(),
                kind: SpilloverKind::TradeGdp,
                effect,
                description: format!("Trade spillover from {source}'s economic growth"),
                magnitude: Magnitude::bucket(effect, 0.1, 0.05),
                timeframe: Timeframe::ShortTerm,
            });
        }

        // Cross-border connectivity
        if let Some(delta) = nonzero(deltas.infrastructure_investment) {
            let effect = delta * trade_intensity * INFRA_FACTOR;
            spillovers.push(PolicySpillover {
                source: source.to_string(),
                target: target.to_string(),
                kind: SpilloverKind::Infrastructure,
                effect,
                description: format!("Cross-border infrastructure benefits from {source}"),
                magnitude: Magnitude::bucket(effect, 0.08, 0.04),
                timeframe: Timeframe::MediumTerm,
            });
        }

        // Pollution does not stop at the border
        if let Some(delta) = nonzero(deltas.co2_emissions) {
            let effect = delta * ENVIRONMENT_FACTOR;
            spillovers.push(PolicySpillover {
                source: source.to_string(),
                target: target.to_string(),
                kind: SpilloverKind::Environment,
                effect,
                description: format!("Environmental impact from {source}'s emissions"),
                magnitude: Magnitude::bucket(effect, 0.05, 0.02),
                timeframe: Timeframe::LongTerm,
            });
        }

        if let Some(delta) = nonzero(deltas.manufacturing_investment) {
            let effect = delta * trade_intensity * MANUFACTURING_FACTOR;
            spillovers.push(PolicySpillover {
                source: source.to_string(),
                target: target.to_string(),
                kind: SpilloverKind::Manufacturing,
                effect,
                description: format!("Manufacturing competitiveness impact from {source}"),
                magnitude: Magnitude::bucket(effect, 0.06, 0.03),
                timeframe: Timeframe::MediumTerm,
            });
        }

        if let Some(delta) = nonzero(deltas.technology_investment) {
            let effect = delta * cooperation_factor * TECHNOLOGY_FACTOR;
            spillovers.push(PolicySpillover {
                source: source.to_string(),
                target: target.to_string(),
                kind: SpilloverKind::Technology,
                effect,
                description: format!("Technology transfer and innovation spillover from {source}"),
                magnitude: Magnitude::bucket(effect, 0.08, 0.04),
                timeframe: Timeframe::LongTerm,
            });
        }

        if let Some(delta) = nonzero(deltas.energy_investment) {
            if has_energy_trade(source, target) {
                let effect = delta * ENERGY_FACTOR;
                spillovers.push(PolicySpillover {
                    source: source.to_string(),
                    target: target.to_string(),
                    kind: SpilloverKind::Energy,
                    effect,
                    description: format!("Energy security and pricing impact from {source}"),
                    magnitude: Magnitude::bucket(effect, 0.1, 0.05),
                    timeframe: Timeframe::Immediate,
                });
            }
        }
    }

    spillovers
}

/// Lever shifts measured against published defaults, for the analysis view
pub fn lever_deltas(decisions: &DecisionSet) -> BTreeMap<Lever, f64> {
    decisions
        .iter()
        .map(|d| (d.lever, d.value - d.lever.default_value()))
        .collect()
}

/// Product-level spillover analysis for one source country.
///
/// Emits one entry per traded product whose policy area moved, scaled by the
/// bilateral trade volume, plus one generic entry per materially shifted
/// lever. Effects under the significance floor are dropped.
pub fn detailed_spillovers(
    source: &str,
    deltas: &BTreeMap<Lever, f64>,
    matrix: &[TradeRelationship],
    products: &ProductCatalog,
) -> Vec<DetailedSpillover> {
    let mut out = Vec::new();

    for trade in matrix.iter().filter(|t| t.touches(source)) {
        let target = match trade.partner_of(source) {
            Some(t) => t,
            None => continue,
        };
        let trade_intensity = trade.trade_volume / 100.0;
        let cooperation_factor = trade.cooperation / 100.0;

        for product in products.main_products(source, target) {
            if !is_policy_relevant(deltas, &product) {
                continue;
            }
            let magnitude = product_spillover(deltas, &product, trade.trade_volume);
            if magnitude.abs() < SIGNIFICANCE_FLOOR {
                continue;
            }
            out.push(DetailedSpillover {
                id: format!("{source}-{target}-{product}"),
                source: source.to_string(),
                target: target.to_string(),
                category: product_category(&product),
                channel: EffectChannel::Trade,
                magnitude,
                description: format!("{product} trade impact from {source} to {target}"),
                products: vec![product.clone()],
                timeframe: product_timeframe(&product),
                confidence: PRODUCT_CONFIDENCE,
            });
        }

        // One generic entry per materially shifted lever, product data or not
        for (&lever, &delta) in deltas {
            if delta.abs() <= GENERIC_DELTA_FLOOR {
                continue;
            }
            let magnitude = delta * trade_intensity * cooperation_factor * GENERIC_FACTOR;
            if magnitude.abs() < SIGNIFICANCE_FLOOR {
                continue;
            }
            out.push(DetailedSpillover {
                id: format!("{source}-{target}-{}", lever.id()),
                source: source.to_string(),
                target: target.to_string(),
                category: lever,
                channel: EffectChannel::Investment,
                magnitude,
                description: format!(
                    "{} shift in {source} affects {target}",
                    lever.def().name
                ),
                products: Vec::new(),
                timeframe: Timeframe::MediumTerm,
                confidence: GENERIC_CONFIDENCE,
            });
        }
    }

    out
}

/// Which levers move trade in a given product
fn relevant_levers(product: &str) -> &'static [Lever] {
    match product {
        "textiles" => &[Lever::Manufacturing, Lever::Trade, Lever::LaborMarket],
        "pharmaceuticals" => &[Lever::Health, Lever::Manufacturing, Lever::Technology],
        "machinery" => &[Lever::Manufacturing, Lever::Technology, Lever::Infrastructure],
        "food" => &[Lever::Agriculture, Lever::Trade],
        "petroleum" => &[Lever::Energy, Lever::Trade],
        "electricity" => &[Lever::Energy, Lever::Infrastructure],
        _ => &[],
    }
}

fn is_policy_relevant(deltas: &BTreeMap<Lever, f64>, product: &str) -> bool {
    relevant_levers(product).iter().any(|l| deltas.contains_key(l))
}

fn product_category(product: &str) -> Lever {
    match product {
        "textiles" | "machinery" => Lever::Manufacturing,
        "pharmaceuticals" => Lever::Health,
        "food" => Lever::Agriculture,
        "petroleum" | "electricity" => Lever::Energy,
        _ => Lever::Trade,
    }
}

fn product_spillover(deltas: &BTreeMap<Lever, f64>, product: &str, trade_volume: f64) -> f64 {
    let base = trade_volume / 100.0;
    let d = |lever: Lever| deltas.get(&lever).copied().unwrap_or(0.0);
    match product {
        "textiles" => d(Lever::Manufacturing) * base * 0.3,
        "pharmaceuticals" => d(Lever::Health) * base * 0.4,
        "machinery" => d(Lever::Infrastructure) * base * 0.35,
        "food" => d(Lever::Agriculture) * base * 0.25,
        "petroleum" | "electricity" => d(Lever::Energy) * base * 0.5,
        _ => d(Lever::Trade) * base * 0.2,
    }
}

fn product_timeframe(product: &str) -> Timeframe {
    match product {
        "petroleum" | "electricity" | "food" => Timeframe::Immediate,
        "textiles" | "machinery" => Timeframe::ShortTerm,
        "pharmaceuticals" | "chemicals" => Timeframe::MediumTerm,
        _ => Timeframe::LongTerm,
    }
}
