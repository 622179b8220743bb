//! Bilateral trade relationships and the regional matrix

use serde::{Deserialize, Serialize};

use crate::region::events::RegionalEvent;

/// A directed trade edge between two countries. Edges are asymmetric:
/// A->B and B->A may differ, and not every pair is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeRelationship {
    pub from: String,
    pub to: String,
    /// Bilateral trade as % of the source country's GDP
    pub trade_volume: f64,
    /// Average applied tariff rate, percent
    pub tariff_rate: f64,
    /// 0-100 cooperation index for this pair
    pub cooperation: f64,
}

impl TradeRelationship {
    pub fn touches(&self, country: &str) -> bool {
        self.from == country || self.to == country
    }

    /// The opposite endpoint, if this edge involves `country` at all
    pub fn partner_of(&self, country: &str) -> Option<&str> {
        if self.from == country {
            Some(&self.to)
        } else if self.to == country {
            Some(&self.from)
        } else {
            None
        }
    }
}

/// The regional state built around the trade graph
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegionalMatrix {
    pub trade: Vec<TradeRelationship>,
    /// Overall regional cooperation, 0-100
    pub cooperation_index: f64,
    /// Append-only event log for the session
    pub events: Vec<RegionalEvent>,
}

impl RegionalMatrix {
    pub fn initial() -> Self {
        Self {
            trade: initial_trade_matrix(),
            cooperation_index: 65.0,
            events: Vec::new(),
        }
    }

    pub fn edges_touching<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a TradeRelationship> {
        self.trade.iter().filter(move |e| e.touches(country))
    }
}

fn edge(from: &str, to: &str, trade_volume: f64, tariff_rate: f64, cooperation: f64) -> TradeRelationship {
    TradeRelationship {
        from: from.to_string(),
        to: to.to_string(),
        trade_volume,
        tariff_rate,
        cooperation,
    }
}

/// Starting edges, based on real South Asian trade patterns
pub fn initial_trade_matrix() -> Vec<TradeRelationship> {
    vec![
        // India (largest economy, major trading partner)
        edge("India", "Bangladesh", 8.5, 8.5, 75.0),
        edge("India", "Pakistan", 2.1, 25.0, 35.0),
        edge("India", "Sri Lanka", 4.7, 12.0, 80.0),
        edge("India", "Nepal", 6.8, 5.0, 85.0),
        edge("India", "Bhutan", 12.5, 0.0, 95.0),
        edge("India", "Maldives", 4.2, 10.0, 70.0),
        edge("India", "Afghanistan", 1.5, 15.0, 45.0),
        // Bangladesh
        edge("Bangladesh", "India", 1.2, 12.0, 75.0),
        edge("Bangladesh", "Pakistan", 0.2, 20.0, 60.0),
        edge("Bangladesh", "Sri Lanka", 0.05, 15.0, 65.0),
        edge("Bangladesh", "Nepal", 0.03, 18.0, 70.0),
        // Pakistan
        edge("Pakistan", "India", 0.4, 30.0, 35.0),
        edge("Pakistan", "Bangladesh", 0.1, 18.0, 60.0),
        edge("Pakistan", "Sri Lanka", 0.3, 12.0, 70.0),
        edge("Pakistan", "Afghanistan", 1.8, 8.0, 80.0),
        // Other bilateral relationships
        edge("Sri Lanka", "India", 1.1, 10.0, 80.0),
        edge("Sri Lanka", "Pakistan", 0.2, 14.0, 70.0),
        edge("Nepal", "India", 0.7, 3.0, 85.0),
        edge("Bhutan", "India", 0.4, 0.0, 95.0),
        edge("Maldives", "India", 0.02, 8.0, 70.0),
        edge("Afghanistan", "Pakistan", 0.3, 10.0, 80.0),
        edge("Afghanistan", "India", 0.1, 18.0, 45.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::country;

    #[test]
    fn test_initial_edges_reference_known_countries() {
        for e in initial_trade_matrix() {
            assert!(country::is_known(&e.from), "unknown source {}", e.from);
            assert!(country::is_known(&e.to), "unknown target {}", e.to);
            assert!(e.trade_volume >= 0.0);
            assert!((0.0..=50.0).contains(&e.tariff_rate));
            assert!((0.0..=100.0).contains(&e.cooperation));
        }
    }

    #[test]
    fn test_partner_of() {
        let e = edge("India", "Nepal", 6.8, 5.0, 85.0);
        assert_eq!(e.partner_of("India"), Some("Nepal"));
        assert_eq!(e.partner_of("Nepal"), Some("India"));
        assert_eq!(e.partner_of("Bhutan"), None);
    }

    #[test]
    fn test_edges_touching_covers_both_directions() {
        let matrix = RegionalMatrix::initial();
        let nepal: Vec<_> = matrix.edges_touching("Nepal").collect();
        // India->Nepal, Bangladesh->Nepal, Nepal->India
        assert_eq!(nepal.len(), 3);
    }

    #[test]
    fn test_myanmar_has_no_edges() {
        let matrix = RegionalMatrix::initial();
        assert_eq!(matrix.edges_touching("Myanmar").count(), 0);
    }
}
