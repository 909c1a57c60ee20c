use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Qualitative low/medium/high grading used for calorie density and crisis priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    YearRound,
}

/// Immutable reference data for one crop.
///
/// Units are literal: nutrition per 100 g of harvest, harvest weight per
/// 100 plants, yield per m², cost per plant in SEK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDefinition {
    pub id: String,
    pub name: String,

    #[serde(rename = "caloriesPer100g")]
    pub calories_per_100g: f64,
    #[serde(rename = "proteinPer100g")]
    pub protein_per_100g: f64,
    #[serde(rename = "carbsPer100g")]
    pub carbs_per_100g: f64,
    #[serde(rename = "fatPer100g")]
    pub fat_per_100g: f64,
    #[serde(rename = "fiberPer100g")]
    pub fiber_per_100g: f64,

    /// Vitamin content per 100 g, keyed by vitamin name (mg).
    #[serde(default)]
    pub vitamins: BTreeMap<String, f64>,

    /// Mineral content per 100 g, keyed by mineral name (mg).
    #[serde(default)]
    pub minerals: BTreeMap<String, f64>,

    pub harvest_weight_kg_per_100_plants: f64,
    pub storage_weeks: u32,
    pub calorie_density: Rating,
    pub crisis_priority: Rating,
    pub growing_time_weeks: u32,
    pub difficulty: Difficulty,
    pub season: Season,

    #[serde(rename = "costPerPlantSEK")]
    pub cost_per_plant_sek: f64,

    #[serde(rename = "yieldKgPerM2")]
    pub yield_kg_per_m2: f64,

    #[serde(rename = "baseSpaceRequiredM2")]
    pub base_space_required_m2: f64,
}

impl CropDefinition {
    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }

    /// Basic validation: non-negative nutrition, yield and cost figures.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && self.calories_per_100g >= 0.0
            && self.protein_per_100g >= 0.0
            && self.carbs_per_100g >= 0.0
            && self.fat_per_100g >= 0.0
            && self.fiber_per_100g >= 0.0
            && self.harvest_weight_kg_per_100_plants >= 0.0
            && self.cost_per_plant_sek >= 0.0
            && self.yield_kg_per_m2 >= 0.0
            && self.base_space_required_m2 >= 0.0
    }
}

/// A crop the household has selected, with its quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantedCrop {
    pub crop_id: String,
    pub plant_count: u32,
    #[serde(default = "default_harvests_per_year")]
    pub harvests_per_year: u32,
    #[serde(rename = "areaM2", default)]
    pub area_m2: f64,
}

fn default_harvests_per_year() -> u32 {
    1
}

impl PlantedCrop {
    pub fn new(
        crop_id: impl Into<String>,
        plant_count: u32,
        harvests_per_year: u32,
        area_m2: f64,
    ) -> Self {
        Self {
            crop_id: crop_id.into(),
            plant_count,
            harvests_per_year,
            area_m2,
        }
    }

    /// Validation against the data model: plantCount > 0, harvestsPerYear >= 1, areaM2 >= 0.
    pub fn is_valid(&self) -> bool {
        self.plant_count > 0 && self.harvests_per_year >= 1 && self.area_m2 >= 0.0
    }
}

/// Labor/input intensity assumed for the garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultivationIntensity {
    Low,
    #[default]
    Medium,
    High,
}

impl CultivationIntensity {
    pub fn label(&self) -> &'static str {
        match self {
            CultivationIntensity::Low => "low",
            CultivationIntensity::Medium => "medium",
            CultivationIntensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenConstraints {
    #[serde(rename = "gardenSizeM2")]
    pub garden_size_m2: f64,
    #[serde(default)]
    pub cultivation_intensity: CultivationIntensity,
}

impl GardenConstraints {
    pub fn new(garden_size_m2: f64, cultivation_intensity: CultivationIntensity) -> Self {
        Self {
            garden_size_m2,
            cultivation_intensity,
        }
    }
}

impl Default for GardenConstraints {
    fn default() -> Self {
        Self::new(50.0, CultivationIntensity::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planted_crop_defaults_from_json() {
        let json = r#"{"cropId": "potatoes", "plantCount": 40}"#;
        let crop: PlantedCrop = serde_json::from_str(json).unwrap();
        assert_eq!(crop.harvests_per_year, 1);
        assert_eq!(crop.area_m2, 0.0);
        assert!(crop.is_valid());
    }

    #[test]
    fn test_planted_crop_validation() {
        assert!(!PlantedCrop::new("kale", 0, 1, 1.0).is_valid());
        assert!(!PlantedCrop::new("kale", 4, 0, 1.0).is_valid());
        assert!(!PlantedCrop::new("kale", 4, 1, -1.0).is_valid());
    }

    #[test]
    fn test_constraints_field_names() {
        let json = r#"{"gardenSizeM2": 120, "cultivationIntensity": "high"}"#;
        let constraints: GardenConstraints = serde_json::from_str(json).unwrap();
        assert_eq!(constraints.garden_size_m2, 120.0);
        assert_eq!(constraints.cultivation_intensity, CultivationIntensity::High);
    }
}
