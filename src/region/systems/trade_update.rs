//! Trade matrix updater - recomputes the trade graph from this year's
//! policy stances

use std::collections::BTreeMap;

use crate::region::decisions::{DecisionSet, Lever};
use crate::region::trade::TradeRelationship;

const OPENNESS_VOLUME_GAIN: f64 = 0.1;
const OPENNESS_TARIFF_CUT: f64 = 0.2;
const INFRA_BASELINE: f64 = 5.0;
const INFRA_VOLUME_GAIN: f64 = 0.02;

/// One country's trade-relevant policy stance for the year
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeStance {
    /// Trade lever value, 0-100 openness scale
    pub openness: Option<f64>,
    /// Infrastructure lever value, % of GDP
    pub infrastructure: Option<f64>,
    /// Cooperation lever shift from the neutral 50
    pub cooperation_shift: Option<f64>,
}

impl TradeStance {
    pub fn from_decisions(decisions: &DecisionSet) -> Self {
        Self {
            openness: decisions.value(Lever::Trade),
            infrastructure: decisions.value(Lever::Infrastructure),
            cooperation_shift: decisions
                .value(Lever::Cooperation)
                .map(|v| v - Lever::Cooperation.default_value()),
        }
    }
}

/// Recompute every edge from the endpoints' stances.
///
/// Returns a new list, one entry per input edge in the same order. The input
/// is never mutated; countries without a stance leave their edges untouched.
pub fn update_trade_matrix(
    edges: &[TradeRelationship],
    stances: &BTreeMap<String, TradeStance>,
) -> Vec<TradeRelationship> {
    edges
        .iter()
        .map(|edge| {
            let source = stances.get(&edge.from);
            let target = stances.get(&edge.to);

            let mut volume = edge.trade_volume;
            let mut tariff = edge.tariff_rate;
            let mut cooperation = edge.cooperation;

            // Openness grows volume and erodes the edge tariff
            if let Some(openness) = source.and_then(|s| s.openness) {
                let o = openness / 100.0;
                volume *= 1.0 + o * OPENNESS_VOLUME_GAIN;
                tariff *= 1.0 - o * OPENNESS_TARIFF_CUT;
            }

            // Both endpoints' infrastructure matters for the corridor
            let src_infra = source.and_then(|s| s.infrastructure);
            let tgt_infra = target.and_then(|s| s.infrastructure);
            if src_infra.is_some() || tgt_infra.is_some() {
                let avg = (src_infra.unwrap_or(0.0) + tgt_infra.unwrap_or(0.0)) / 2.0;
                volume *= 1.0 + (avg - INFRA_BASELINE) * INFRA_VOLUME_GAIN;
            }

            if let Some(shift) = source.and_then(|s| s.cooperation_shift) {
                cooperation = (cooperation + shift).clamp(0.0, 100.0);
            }

            TradeRelationship {
                from: edge.from.clone(),
                to: edge.to.clone(),
                trade_volume: volume.max(0.0),
                tariff_rate: tariff.clamp(0.0, 50.0),
                cooperation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str) -> TradeRelationship {
        TradeRelationship {
            from: from.to_string(),
            to: to.to_string(),
            trade_volume: 10.0,
            tariff_rate: 20.0,
            cooperation: 60.0,
        }
    }

    fn stance_of(openness: f64, infrastructure: f64, shift: f64) -> TradeStance {
        TradeStance {
            openness: Some(openness),
            infrastructure: Some(infrastructure),
            cooperation_shift: Some(shift),
        }
    }

    #[test]
    fn test_input_edges_are_untouched() {
        let edges = vec![edge("India", "Nepal"), edge("Nepal", "India")];
        let saved = edges.clone();
        let mut stances = BTreeMap::new();
        stances.insert("India".to_string(), stance_of(80.0, 10.0, 20.0));
        stances.insert("Nepal".to_string(), stance_of(30.0, 3.0, -10.0));

        let updated = update_trade_matrix(&edges, &stances);
        assert_eq!(edges, saved);
        assert_eq!(updated.len(), edges.len());
        assert_ne!(updated, edges);
    }

    #[test]
    fn test_openness_grows_volume_and_cuts_tariff() {
        let edges = vec![edge("India", "Nepal")];
        let mut stances = BTreeMap::new();
        stances.insert(
            "India".to_string(),
            TradeStance {
                openness: Some(50.0),
                ..Default::default()
            },
        );
        let updated = update_trade_matrix(&edges, &stances);
        assert!((updated[0].trade_volume - 10.0 * 1.05).abs() < 1e-12);
        assert!((updated[0].tariff_rate - 20.0 * 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_infrastructure_average_drives_volume() {
        let edges = vec![edge("India", "Nepal")];
        let mut stances = BTreeMap::new();
        stances.insert(
            "India".to_string(),
            TradeStance {
                infrastructure: Some(8.0),
                ..Default::default()
            },
        );
        stances.insert(
            "Nepal".to_string(),
            TradeStance {
                infrastructure: Some(4.0),
                ..Default::default()
            },
        );
        let updated = update_trade_matrix(&edges, &stances);
        // avg 6.0, one point over baseline -> +2%
        assert!((updated[0].trade_volume - 10.2).abs() < 1e-12);
    }

    #[test]
    fn test_cooperation_shift_is_clamped() {
        let edges = vec![edge("India", "Nepal")];
        let mut stances = BTreeMap::new();
        stances.insert(
            "India".to_string(),
            TradeStance {
                cooperation_shift: Some(50.0),
                ..Default::default()
            },
        );
        let updated = update_trade_matrix(&edges, &stances);
        assert_eq!(updated[0].cooperation, 100.0);

        stances.insert(
            "India".to_string(),
            TradeStance {
                cooperation_shift: Some(-90.0),
                ..Default::default()
            },
        );
        let updated = update_trade_matrix(&edges, &stances);
        assert_eq!(updated[0].cooperation, 0.0);
    }

    #[test]
    fn test_unknown_countries_leave_edge_unchanged() {
        let edges = vec![edge("Bhutan", "Maldives")];
        let mut stances = BTreeMap::new();
        stances.insert("India".to_string(), stance_of(90.0, 12.0, 30.0));
        let updated = update_trade_matrix(&edges, &stances);
        assert_eq!(updated, edges);
    }

    #[test]
    fn test_tariff_never_leaves_its_range() {
        let mut e = edge("India", "Nepal");
        e.tariff_rate = 1.0;
        let mut stances = BTreeMap::new();
        stances.insert(
            "India".to_string(),
            TradeStance {
                openness: Some(100.0),
                ..Default::default()
            },
        );
        let updated = update_trade_matrix(&[e], &stances);
        assert!(updated[0].tariff_rate >= 0.0);
        assert!(updated[0].tariff_rate <= 50.0);
    }

    #[test]
    fn test_stance_from_decisions() {
        let mut set = DecisionSet::defaults();
        set.set(Lever::Trade, 70.0);
        set.set(Lever::Cooperation, 35.0);
        let stance = TradeStance::from_decisions(&set);
        assert_eq!(stance.openness, Some(70.0));
        assert_eq!(stance.infrastructure, Some(5.0));
        assert_eq!(stance.cooperation_shift, Some(-15.0));
    }
}
