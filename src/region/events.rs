//! Regional events - discrete news items that perturb cooperation and trade

use serde::{Deserialize, Serialize};

use crate::core::types::Year;
use crate::region::indicators::Indicator;

/// The kinds of regional events the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SaarcSummit,
    TradeDispute,
    InfrastructureInitiative,
}

/// Effect keys a regional event can carry. Only keys that name a snapshot
/// field land on country indicators; the rest describe matrix-level shifts
/// and stay informational in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventEffect {
    CooperationBoost,
    CooperationPenalty,
    TradeVolumeIncrease,
    TariffIncrease,
    GdpGrowth,
    InfrastructureBoost,
}

impl EventEffect {
    /// The snapshot field this key lands on, if any
    pub fn indicator(self) -> Option<Indicator> {
        match self {
            EventEffect::GdpGrowth => Some(Indicator::GdpGrowth),
            _ => None,
        }
    }
}

/// A discrete regional news event. Appended to an unbounded per-session log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalEvent {
    pub kind: EventKind,
    pub name: String,
    pub description: String,
    pub year: Year,
    pub effects: Vec<(EventEffect, f64)>,
}

impl RegionalEvent {
    pub fn effect(&self, key: EventEffect) -> Option<f64> {
        self.effects.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}
