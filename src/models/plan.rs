use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::PlantedCrop;

/// Household nutrition need, linearly scaled by household size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionNeed {
    pub daily_calories: u32,
    pub annual_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub vitamins: BTreeMap<String, f64>,
    pub minerals: BTreeMap<String, f64>,
}

/// Annual production of a single planted crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProduction {
    pub crop_id: String,
    pub name: String,
    pub annual_harvest_weight_kg: f64,
    pub annual_calories: f64,
    #[serde(rename = "costSEK")]
    pub cost_sek: f64,
    #[serde(rename = "areaM2")]
    pub area_m2: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

/// Non-fatal problem found while computing production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ProductionWarning {
    /// A planted crop references an id absent from the catalog; it was skipped.
    UnknownCrop { crop_id: String },
}

impl std::fmt::Display for ProductionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductionWarning::UnknownCrop { crop_id } => {
                write!(f, "unknown crop '{}' skipped", crop_id)
            }
        }
    }
}

/// Projected annual harvest for the whole garden.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSummary {
    pub total_calories: f64,
    pub total_weight_kg: f64,
    pub daily_calories: u32,
    #[serde(rename = "totalCostSEK")]
    pub total_cost_sek: f64,
    #[serde(rename = "totalAreaM2")]
    pub total_area_m2: f64,
    #[serde(default)]
    pub crops: Vec<CropProduction>,
    #[serde(default)]
    pub warnings: Vec<ProductionWarning>,
}

/// How the planted area relates to the available garden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenUsage {
    #[serde(rename = "usedM2")]
    pub used_m2: f64,
    #[serde(rename = "availableM2")]
    pub available_m2: f64,
    #[serde(rename = "remainingM2")]
    pub remaining_m2: f64,
    pub over_capacity: bool,
    /// yieldKgPerM2 × area × intensity factor, summed over known crops.
    pub yield_potential_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfSufficiencyMetrics {
    pub percent: u32,
    pub deficit_calories: u32,
    pub surplus_calories: u32,
}

impl SelfSufficiencyMetrics {
    pub fn has_deficit(&self) -> bool {
        self.deficit_calories > 0
    }
}

/// Share of the annual macro need covered by production, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientCoverage {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
    pub fiber_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroceryCategory {
    Protein,
    Carbs,
    Fats,
    Vitamins,
    Minerals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroceryPriority {
    Essential,
    Important,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrocerySource {
    Store,
    Garden,
    Both,
}

/// A supplemental purchase covering part of the caloric deficit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryGapItem {
    pub name: String,
    pub category: GroceryCategory,
    /// Calories per 100 g (solids) or per kg as labelled by the source.
    pub calories_per_100g_or_kg: f64,
    pub cost_per_kg: f64,
    pub priority: GroceryPriority,
    pub source: GrocerySource,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroceryCost {
    #[serde(rename = "weeklySEK")]
    pub weekly_sek: f64,
    #[serde(rename = "annualSEK")]
    pub annual_sek: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanPriority {
    High,
    Medium,
    Low,
}

impl PlanPriority {
    pub fn label(&self) -> &'static str {
        match self {
            PlanPriority::High => "high",
            PlanPriority::Medium => "medium",
            PlanPriority::Low => "low",
        }
    }
}

/// All derived figures for one snapshot, always recomputed wholesale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub need: NutritionNeed,
    pub production: ProductionSummary,
    pub metrics: SelfSufficiencyMetrics,
    pub coverage: NutrientCoverage,
    pub grocery_gap: Vec<GroceryGapItem>,
    pub grocery_cost: GroceryCost,
}

/// The assembled plan shown to the user and handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultivationPlan {
    pub id: String,
    pub title: String,
    pub description: String,
    pub crops: Vec<PlantedCrop>,
    pub total_calories: f64,
    pub self_sufficiency_percent: u32,
    pub grocery_gap: Vec<GroceryGapItem>,
    /// Annual crop cost plus annual grocery cost, SEK.
    pub estimated_cost: f64,
    pub timeline: String,
    pub priority: PlanPriority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    /// True when no narrative field came from the advisory collaborator.
    #[serde(default)]
    pub basic: bool,
}
