//! AI policy adjustment for computer-run countries

use crate::core::rng::SimRng;
use crate::region::decisions::{DecisionSet, Lever};
use crate::region::indicators::IndicatorSnapshot;

const LOW_GROWTH: f64 = 2.0;
const HIGH_UNEMPLOYMENT: f64 = 8.0;
const HIGH_POVERTY: f64 = 25.0;
/// Full width of the per-lever noise band: (roll - 0.5) * AI_JITTER
const AI_JITTER: f64 = 0.2;

/// Starting policy offsets that give each government its own character
pub fn starting_decisions(country: &str) -> DecisionSet {
    let mut set = DecisionSet::defaults();
    let variations: &[(Lever, f64)] = match country {
        "India" => &[
            (Lever::Education, 1.0),
            (Lever::Infrastructure, 2.0),
            (Lever::Trade, 10.0),
            (Lever::Cooperation, 5.0),
        ],
        "Pakistan" => &[
            (Lever::Health, 0.5),
            (Lever::Infrastructure, -1.0),
            (Lever::Tariff, 5.0),
            (Lever::Cooperation, -10.0),
        ],
        "Bangladesh" => &[
            (Lever::Education, -0.5),
            (Lever::Infrastructure, 3.0),
            (Lever::Trade, 15.0),
            (Lever::Environment, -0.5),
        ],
        "Sri Lanka" => &[
            (Lever::Health, 1.0),
            (Lever::Education, 0.5),
            (Lever::Tariff, -3.0),
            (Lever::Cooperation, 10.0),
        ],
        "Nepal" => &[
            (Lever::Infrastructure, -2.0),
            (Lever::Environment, 1.0),
            (Lever::Cooperation, 15.0),
        ],
        "Bhutan" => &[
            (Lever::Environment, 3.0),
            (Lever::Health, 2.0),
            (Lever::Cooperation, 20.0),
        ],
        "Maldives" => &[
            (Lever::Environment, 2.0),
            (Lever::Trade, 20.0),
            (Lever::Infrastructure, -1.0),
        ],
        "Afghanistan" => &[
            (Lever::Health, -1.0),
            (Lever::Education, -2.0),
            (Lever::Cooperation, -20.0),
            (Lever::Tariff, 10.0),
        ],
        _ => &[],
    };
    for (lever, offset) in variations {
        set.set(*lever, set.value_or_default(*lever) + offset);
    }
    set
}

/// One year of reactive adjustment: push spending toward whichever problem
/// currently dominates. For a lever named by several rules, the last
/// matching rule wins outright (assignment, not accumulation).
pub fn adjust_ai_decisions(
    current: &DecisionSet,
    stats: &IndicatorSnapshot,
    rng: &mut impl SimRng,
) -> DecisionSet {
    let mut next = current.clone();

    for decision in current.iter() {
        let mut adjustment = 0.0;

        if stats.gdp_growth < LOW_GROWTH {
            match decision.lever {
                Lever::Infrastructure => adjustment = 0.5,
                Lever::Trade => adjustment = 5.0,
                _ => {}
            }
        }
        if stats.unemployment > HIGH_UNEMPLOYMENT {
            match decision.lever {
                Lever::Education => adjustment = 0.3,
                Lever::Infrastructure => adjustment = 0.8,
                _ => {}
            }
        }
        if stats.poverty_rate > HIGH_POVERTY {
            match decision.lever {
                Lever::Health => adjustment = 0.4,
                Lever::Education => adjustment = 0.6,
                _ => {}
            }
        }

        adjustment += (rng.roll() - 0.5) * AI_JITTER;
        next.set(decision.lever, decision.value + adjustment);
    }

    next
}
