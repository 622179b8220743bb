//! WorldState - the complete state of one game session

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Year;
use crate::region::indicators::IndicatorSnapshot;
use crate::region::spillover::{DetailedSpillover, PolicySpillover};
use crate::region::trade::RegionalMatrix;

/// Everything the presentation layer needs after a turn.
///
/// Owned and mutated exclusively by the `Game` orchestrator; systems receive
/// borrows and return new values rather than mutating in place, so earlier
/// snapshots stay valid for trend views.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldState {
    /// Latest snapshot per country. BTreeMap keeps iteration order stable
    /// so a seeded session replays identically.
    pub countries: BTreeMap<String, IndicatorSnapshot>,
    pub player_country: String,
    pub matrix: RegionalMatrix,
    /// This year's cross-border effects, grouped by trading partner
    pub spillovers: Vec<PolicySpillover>,
    /// This year's product-level analysis for the player country
    pub detailed_spillovers: Vec<DetailedSpillover>,
    pub year: Year,
    pub active: bool,
}
