//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Calendar year of the simulation
pub type Year = i32;

/// Horizon over which a spillover effect plays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

/// Coarse strength bucket for a spillover effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Low,
    Medium,
    High,
}

impl Magnitude {
    /// Bucket an effect by absolute value against (high, medium) thresholds
    pub fn bucket(effect: f64, high: f64, medium: f64) -> Self {
        let e = effect.abs();
        if e > high {
            Magnitude::High
        } else if e > medium {
            Magnitude::Medium
        } else {
            Magnitude::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_bucketing() {
        assert_eq!(Magnitude::bucket(0.2, 0.1, 0.05), Magnitude::High);
        assert_eq!(Magnitude::bucket(-0.2, 0.1, 0.05), Magnitude::High);
        assert_eq!(Magnitude::bucket(0.07, 0.1, 0.05), Magnitude::Medium);
        assert_eq!(Magnitude::bucket(0.01, 0.1, 0.05), Magnitude::Low);
        // Thresholds are exclusive
        assert_eq!(Magnitude::bucket(0.1, 0.1, 0.05), Magnitude::Medium);
    }
}
