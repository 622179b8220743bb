//! Regional event generator
//!
//! A single uniform draw gates all three candidate events, so their joint
//! frequencies are linked: a trade dispute (r < 0.15) always lands in a year
//! where the other gates also passed their thresholds. Splitting this into
//! independent draws would change those joint probabilities, so the shared
//! draw stays.

use crate::core::rng::SimRng;
use crate::core::types::Year;
use crate::region::events::{EventEffect, EventKind, RegionalEvent};

const SUMMIT_INTERVAL: Year = 3;
const SUMMIT_PROBABILITY: f64 = 0.7;
const SUMMIT_STRONG_COOPERATION: f64 = 60.0;
const DISPUTE_PROBABILITY: f64 = 0.15;
const INITIATIVE_PROBABILITY: f64 = 0.2;
const INITIATIVE_MIN_COOPERATION: f64 = 65.0;

/// Generate this year's regional events
pub fn generate_regional_events(
    year: Year,
    cooperation_index: f64,
    rng: &mut impl SimRng,
) -> Vec<RegionalEvent> {
    let mut events = Vec::new();
    let roll = rng.roll();

    // SAARC summit convenes every third year
    if year % SUMMIT_INTERVAL == 0 && roll < SUMMIT_PROBABILITY {
        let boost = if cooperation_index > SUMMIT_STRONG_COOPERATION {
            5.0
        } else {
            2.0
        };
        events.push(RegionalEvent {
            kind: EventKind::SaarcSummit,
            name: "SAARC Summit".to_string(),
            description: "Regional leaders meet to discuss cooperation and trade agreements"
                .to_string(),
            year,
            effects: vec![
                (EventEffect::CooperationBoost, boost),
                (EventEffect::TradeVolumeIncrease, 0.1),
            ],
        });
    }

    if roll < DISPUTE_PROBABILITY {
        events.push(RegionalEvent {
            kind: EventKind::TradeDispute,
            name: "Regional Trade Dispute".to_string(),
            description: "Tensions arise over trade policies, affecting regional cooperation"
                .to_string(),
            year,
            effects: vec![
                (EventEffect::CooperationPenalty, -3.0),
                (EventEffect::TariffIncrease, 2.0),
                (EventEffect::GdpGrowth, -0.2),
            ],
        });
    }

    if roll < INITIATIVE_PROBABILITY && cooperation_index > INITIATIVE_MIN_COOPERATION {
        events.push(RegionalEvent {
            kind: EventKind::InfrastructureInitiative,
            name: "Regional Infrastructure Initiative".to_string(),
            description: "Joint infrastructure project connects multiple countries".to_string(),
            year,
            effects: vec![
                (EventEffect::InfrastructureBoost, 1.0),
                (EventEffect::TradeVolumeIncrease, 0.15),
                (EventEffect::GdpGrowth, 0.3),
            ],
        });
    }

    events
}
