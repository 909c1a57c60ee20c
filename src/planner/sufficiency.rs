use crate::models::{NutrientCoverage, NutritionNeed, ProductionSummary, SelfSufficiencyMetrics};
use crate::planner::constants::DAYS_PER_YEAR;

/// Calorie self-sufficiency of the household.
///
/// The percentage is not capped at 100; values above it mean surplus.
/// A zero need yields 0% rather than a division error.
pub fn evaluate(need: &NutritionNeed, production: &ProductionSummary) -> SelfSufficiencyMetrics {
    let needed = need.daily_calories;
    let produced = production.daily_calories;

    let percent = if needed == 0 {
        0
    } else {
        (produced as f64 / needed as f64 * 100.0).round().max(0.0) as u32
    };

    SelfSufficiencyMetrics {
        percent,
        deficit_calories: needed.saturating_sub(produced),
        surplus_calories: produced.saturating_sub(needed),
    }
}

/// Macro coverage, tracked separately from the calorie-only headline percentage.
pub fn nutrient_coverage(need: &NutritionNeed, production: &ProductionSummary) -> NutrientCoverage {
    let (protein, carbs, fat, fiber) = production.crops.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(p, c, f, fi), crop| (p + crop.protein_g, c + crop.carbs_g, f + crop.fat_g, fi + crop.fiber_g),
    );

    NutrientCoverage {
        protein_percent: coverage_percent(protein, need.protein_g),
        carbs_percent: coverage_percent(carbs, need.carbs_g),
        fat_percent: coverage_percent(fat, need.fat_g),
        fiber_percent: coverage_percent(fiber, need.fiber_g),
    }
}

fn coverage_percent(annual_produced: f64, daily_need: f64) -> f64 {
    let annual_need = daily_need * DAYS_PER_YEAR;
    if annual_need <= 0.0 {
        return 0.0;
    }
    annual_produced / annual_need * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn need(daily: u32) -> NutritionNeed {
        NutritionNeed {
            daily_calories: daily,
            annual_calories: daily as f64 * 365.0,
            protein_g: 100.0,
            ..Default::default()
        }
    }

    fn production(daily: u32) -> ProductionSummary {
        ProductionSummary {
            daily_calories: daily,
            total_calories: daily as f64 * 365.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_deficit() {
        let metrics = evaluate(&need(2000), &production(500));
        assert_eq!(metrics.percent, 25);
        assert_eq!(metrics.deficit_calories, 1500);
        assert_eq!(metrics.surplus_calories, 0);
        assert!(metrics.has_deficit());
    }

    #[test]
    fn test_surplus_not_capped() {
        let metrics = evaluate(&need(1000), &production(1500));
        assert_eq!(metrics.percent, 150);
        assert_eq!(metrics.deficit_calories, 0);
        assert_eq!(metrics.surplus_calories, 500);
    }

    #[test]
    fn test_exact_match_has_neither() {
        let metrics = evaluate(&need(1800), &production(1800));
        assert_eq!(metrics.percent, 100);
        assert_eq!(metrics.deficit_calories, 0);
        assert_eq!(metrics.surplus_calories, 0);
    }

    #[test]
    fn test_zero_need_is_zero_percent() {
        let metrics = evaluate(&need(0), &production(700));
        assert_eq!(metrics.percent, 0);
        assert_eq!(metrics.deficit_calories, 0);
        assert_eq!(metrics.surplus_calories, 700);
    }

    #[test]
    fn test_coverage_zero_need() {
        let coverage = nutrient_coverage(&NutritionNeed::default(), &production(100));
        assert_eq!(coverage.protein_percent, 0.0);
        assert_eq!(coverage.fiber_percent, 0.0);
    }
}
