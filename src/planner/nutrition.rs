use std::collections::BTreeMap;

use crate::models::{HouseholdProfile, NutritionNeed};
use crate::planner::constants::*;

/// Daily calorie need of the whole household.
///
/// Formula: round((adults * adult + children * child + elderly * elderly) * activity)
///
/// An empty household needs 0 kcal.
pub fn compute_daily_calorie_need(profile: &HouseholdProfile) -> u32 {
    let baseline = profile.adults as f64 * ADULT_BASE_CALORIES
        + profile.children as f64 * CHILD_BASE_CALORIES
        + profile.elderly as f64 * ELDERLY_BASE_CALORIES;

    (baseline * activity_multiplier(profile.activity_level)).round() as u32
}

/// Daily vitamin and mineral need: per-person reference intake × household size.
///
/// Returns (vitamins, minerals) in mg/day.
pub fn compute_micronutrient_needs(
    profile: &HouseholdProfile,
) -> (BTreeMap<String, f64>, BTreeMap<String, f64>) {
    let size = profile.size() as f64;
    (
        scale_table(&VITAMIN_RDA_MG, size),
        scale_table(&MINERAL_RDA_MG, size),
    )
}

fn scale_table(table: &[(&str, f64)], size: f64) -> BTreeMap<String, f64> {
    table
        .iter()
        .map(|(name, rda)| (name.to_string(), rda * size))
        .collect()
}

/// Full daily need for the household: calories, macros and micronutrients.
pub fn compute_nutrition_need(profile: &HouseholdProfile) -> NutritionNeed {
    let size = profile.size() as f64;
    let daily_calories = compute_daily_calorie_need(profile);
    let (vitamins, minerals) = compute_micronutrient_needs(profile);

    NutritionNeed {
        daily_calories,
        annual_calories: daily_calories as f64 * DAYS_PER_YEAR,
        protein_g: PROTEIN_G_PER_PERSON * size,
        carbs_g: CARBS_G_PER_PERSON * size,
        fat_g: FAT_G_PER_PERSON * size,
        fiber_g: FIBER_G_PER_PERSON * size,
        vitamins,
        minerals,
    }
}
