//! Cross-border spillover effects
//!
//! Spillovers are ephemeral: rebuilt every simulated year, consumed by the
//! effect calculator and the presentation layer, then replaced.

use serde::{Deserialize, Serialize};

use crate::core::types::{Magnitude, Timeframe};
use crate::region::decisions::Lever;

/// What kind of policy change a spillover carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpilloverKind {
    TradeGdp,
    Infrastructure,
    Environment,
    Manufacturing,
    Technology,
    Energy,
}

/// A cross-border effect of one country's policy on a trading partner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicySpillover {
    pub source: String,
    pub target: String,
    pub kind: SpilloverKind,
    pub effect: f64,
    pub description: String,
    pub magnitude: Magnitude,
    pub timeframe: Timeframe,
}

/// How a detailed spillover reaches the target economy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectChannel {
    Trade,
    Investment,
    Technology,
    Environment,
}

/// Product-level spillover for the analysis view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailedSpillover {
    pub id: String,
    pub source: String,
    pub target: String,
    pub category: Lever,
    pub channel: EffectChannel,
    pub magnitude: f64,
    pub description: String,
    pub products: Vec<String>,
    pub timeframe: Timeframe,
    /// 0-1 confidence in the estimate
    pub confidence: f64,
}
