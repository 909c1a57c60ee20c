use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, CultivationIntensity};

// ─────────────────────────────────────────────────────────────────────────────
// Household energy baselines (kcal/day per person)
// ─────────────────────────────────────────────────────────────────────────────

pub const ADULT_MALE_BASE_CALORIES: f64 = 1800.0;
pub const ADULT_FEMALE_BASE_CALORIES: f64 = 1600.0;

/// Adults use the mean of the male and female baselines.
pub const ADULT_BASE_CALORIES: f64 = (ADULT_MALE_BASE_CALORIES + ADULT_FEMALE_BASE_CALORIES) / 2.0;

pub const CHILD_BASE_CALORIES: f64 = 1400.0;
pub const ELDERLY_BASE_CALORIES: f64 = 1500.0;

/// Map from activity level to the multiplier applied to the summed baseline.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2);
    m.insert(ActivityLevel::Light, 1.375);
    m.insert(ActivityLevel::Moderate, 1.55);
    m.insert(ActivityLevel::Active, 1.725);
    m.insert(ActivityLevel::VeryActive, 1.9);
    m
});

/// Get the calorie multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    *ACTIVITY_MULTIPLIERS.get(&level).unwrap_or(&1.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-person daily reference intakes
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_G_PER_PERSON: f64 = 50.0;
pub const CARBS_G_PER_PERSON: f64 = 260.0;
pub const FAT_G_PER_PERSON: f64 = 70.0;
pub const FIBER_G_PER_PERSON: f64 = 30.0;

/// Vitamin reference intakes in mg/day.
pub const VITAMIN_RDA_MG: [(&str, f64); 5] = [
    ("vitaminA", 0.8),
    ("vitaminC", 75.0),
    ("vitaminK", 0.075),
    ("vitaminB6", 1.4),
    ("folate", 0.4),
];

/// Mineral reference intakes in mg/day.
pub const MINERAL_RDA_MG: [(&str, f64); 5] = [
    ("iron", 12.0),
    ("calcium", 900.0),
    ("potassium", 3500.0),
    ("magnesium", 350.0),
    ("zinc", 9.0),
];

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;

// ─────────────────────────────────────────────────────────────────────────────
// Planting baselines
// ─────────────────────────────────────────────────────────────────────────────

/// Plants per person used when a crop has no entry in the baseline table.
pub const DEFAULT_PLANTS_PER_PERSON: u32 = 10;

/// Suggested plants per household member, keyed by crop id.
pub static PLANTS_PER_PERSON: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("potatoes", 25);
    m.insert("carrots", 60);
    m.insert("onions", 40);
    m.insert("cabbage", 6);
    m.insert("kale", 4);
    m.insert("beets", 30);
    m.insert("bush_beans", 20);
    m.insert("peas", 30);
    m.insert("tomatoes", 3);
    m.insert("zucchini", 1);
    m.insert("pumpkin", 2);
    m.insert("garlic", 20);
    m.insert("parsnip", 20);
    m.insert("spinach", 15);
    m
});

/// Get the suggested plants per person for a crop id.
pub fn plants_per_person(crop_id: &str) -> u32 {
    *PLANTS_PER_PERSON
        .get(crop_id.to_lowercase().as_str())
        .unwrap_or(&DEFAULT_PLANTS_PER_PERSON)
}

/// Yield factor applied to area-based yield potential.
pub fn intensity_yield_factor(intensity: CultivationIntensity) -> f64 {
    match intensity {
        CultivationIntensity::Low => 0.75,
        CultivationIntensity::Medium => 1.0,
        CultivationIntensity::High => 1.25,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Grocery gap and plan classification
// ─────────────────────────────────────────────────────────────────────────────

/// Assumed purchase of each grocery item per week, in kg.
pub const GROCERY_WEEKLY_KG_PER_ITEM: f64 = 1.0;

/// Self-sufficiency percent at or above which a plan is high priority.
pub const HIGH_PRIORITY_PERCENT: u32 = 70;

/// Self-sufficiency percent at or above which a plan is medium priority.
pub const MEDIUM_PRIORITY_PERCENT: u32 = 40;

/// Decimal places used when displaying areas.
pub const AREA_DISPLAY_DECIMALS: i32 = 1;

/// Round to a fixed number of decimals. Display and suggested-default paths only.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
