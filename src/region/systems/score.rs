//! Final score for a 20-year run

use crate::region::indicators::{self, IndicatorSnapshot};

const BASE_SCORE: f64 = 500.0;
const MAX_SCORE: f64 = 1000.0;
/// Awarded when every improvement term is non-negative
const BALANCE_BONUS: f64 = 50.0;
/// Charged per final indicator pinned at a degraded clamp bound
const EXTREME_PENALTY: f64 = 30.0;

// Improvement weights
const W_GDP: f64 = 10.0;
const W_LITERACY: f64 = 2.0;
const W_LIFE_EXPECTANCY: f64 = 5.0;
const W_UNEMPLOYMENT: f64 = 3.0;
const W_POVERTY: f64 = 2.0;
const W_EMISSIONS: f64 = 10.0;
const W_INFANT_MORTALITY: f64 = 1.0;

/// Score the player's run from initial to final snapshot. Always in
/// [0, 1000], no matter how extreme the deltas.
pub fn calculate_score(final_stats: &IndicatorSnapshot, initial: &IndicatorSnapshot) -> f64 {
    let improvements = [
        (final_stats.gdp_growth - initial.gdp_growth) * W_GDP,
        (final_stats.literacy_rate - initial.literacy_rate) * W_LITERACY,
        (final_stats.life_expectancy - initial.life_expectancy) * W_LIFE_EXPECTANCY,
        (initial.unemployment - final_stats.unemployment) * W_UNEMPLOYMENT,
        (initial.poverty_rate - final_stats.poverty_rate) * W_POVERTY,
        (initial.co2_emissions - final_stats.co2_emissions) * W_EMISSIONS,
        (initial.infant_mortality - final_stats.infant_mortality) * W_INFANT_MORTALITY,
    ];

    let mut score = BASE_SCORE + improvements.iter().sum::<f64>();

    // Reward broad progress over a single maxed-out indicator
    if improvements.iter().all(|term| *term >= 0.0) {
        score += BALANCE_BONUS;
    }
    score -= EXTREME_PENALTY * degraded_extremes(final_stats) as f64;

    score.clamp(0.0, MAX_SCORE)
}

/// Count final indicators sitting on their degraded clamp bound
fn degraded_extremes(stats: &IndicatorSnapshot) -> usize {
    [
        stats.gdp_growth <= indicators::GDP_GROWTH_BOUNDS.0,
        stats.unemployment >= indicators::UNEMPLOYMENT_BOUNDS.1,
        stats.poverty_rate >= indicators::POVERTY_BOUNDS.1,
        stats.literacy_rate <= indicators::LITERACY_BOUNDS.0,
        stats.life_expectancy <= indicators::LIFE_EXPECTANCY_BOUNDS.0,
        stats.infant_mortality >= indicators::INFANT_MORTALITY_BOUNDS.1,
    ]
    .iter()
    .filter(|hit| **hit)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            country: "India".to_string(),
            year: 2023,
            gdp_growth: 5.0,
            unemployment: 8.0,
            literacy_rate: 60.0,
            life_expectancy: 65.0,
            poverty_rate: 25.0,
            co2_emissions: 1.2,
            population: 50_000_000.0,
            infant_mortality: 30.0,
            health_expenditure: 3.0,
            education_spending: 4.0,
            infrastructure_investment: 5.0,
        }
    }

    #[test]
    fn test_no_change_scores_base_plus_balance() {
        let s = snapshot();
        // All terms are exactly zero, which still counts as balanced
        assert_eq!(calculate_score(&s, &s), 550.0);
    }

    #[test]
    fn test_improvement_raises_score() {
        let initial = snapshot();
        let mut final_stats = snapshot();
        final_stats.literacy_rate = 70.0;
        final_stats.unemployment = 6.0;
        // 10*2 + 2*3 + balance bonus
        assert_eq!(calculate_score(&final_stats, &initial), 576.0);
    }

    #[test]
    fn test_regression_forfeits_balance_bonus() {
        let initial = snapshot();
        let mut final_stats = snapshot();
        final_stats.literacy_rate = 70.0;
        final_stats.co2_emissions = 1.3; // worse
        let score = calculate_score(&final_stats, &initial);
        assert_eq!(score, 500.0 + 20.0 - 1.0);
    }

    #[test]
    fn test_extreme_collapse_is_penalized_and_floored() {
        let initial = snapshot();
        let mut final_stats = snapshot();
        final_stats.gdp_growth = -10.0;
        final_stats.unemployment = 50.0;
        final_stats.poverty_rate = 90.0;
        final_stats.life_expectancy = 45.0;
        final_stats.infant_mortality = 150.0;
        let score = calculate_score(&final_stats, &initial);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_is_clamped_high() {
        // A recovery from rock bottom to every upper bound overshoots the cap
        let mut initial = snapshot();
        initial.gdp_growth = -10.0;
        initial.literacy_rate = 0.0;
        initial.life_expectancy = 45.0;
        initial.unemployment = 50.0;
        initial.poverty_rate = 90.0;
        initial.co2_emissions = 12.0;
        initial.infant_mortality = 150.0;
        let mut final_stats = snapshot();
        final_stats.gdp_growth = 15.0;
        final_stats.literacy_rate = 100.0;
        final_stats.life_expectancy = 90.0;
        final_stats.unemployment = 0.5;
        final_stats.poverty_rate = 0.0;
        final_stats.co2_emissions = 0.0;
        final_stats.infant_mortality = 1.0;
        assert_eq!(calculate_score(&final_stats, &initial), 1000.0);
    }

    #[test]
    fn test_score_is_clamped_low() {
        let initial = snapshot();
        let mut final_stats = snapshot();
        final_stats.gdp_growth = -10.0;
        final_stats.literacy_rate = 0.0;
        final_stats.life_expectancy = 45.0;
        final_stats.unemployment = 50.0;
        final_stats.poverty_rate = 90.0;
        final_stats.co2_emissions = 12.0;
        final_stats.infant_mortality = 150.0;
        assert_eq!(calculate_score(&final_stats, &initial), 0.0);
    }
}
