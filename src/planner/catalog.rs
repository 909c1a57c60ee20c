use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{CropDefinition, Difficulty, Rating, Season};
use Difficulty::{Easy, Medium as Moderate};
use Rating::{High, Low, Medium};

/// One row of the built-in reference table.
struct Row {
    id: &'static str,
    name: &'static str,
    /// kcal, protein, carbs, fat, fiber per 100 g.
    nutrition: [f64; 5],
    vitamins: &'static [(&'static str, f64)],
    minerals: &'static [(&'static str, f64)],
    harvest_kg_per_100_plants: f64,
    storage_weeks: u32,
    calorie_density: Rating,
    crisis_priority: Rating,
    growing_time_weeks: u32,
    difficulty: Difficulty,
    season: Season,
    cost_per_plant_sek: f64,
    yield_kg_per_m2: f64,
    base_space_m2: f64,
}

#[rustfmt::skip]
const BUILTIN_CROPS: [Row; 14] = [
    Row { id: "potatoes", name: "Potatoes", nutrition: [77.0, 2.0, 17.0, 0.1, 2.2],
          vitamins: &[("vitaminC", 19.7), ("vitaminB6", 0.3)], minerals: &[("potassium", 425.0), ("magnesium", 23.0), ("iron", 0.8)],
          harvest_kg_per_100_plants: 150.0, storage_weeks: 24, calorie_density: High, crisis_priority: High,
          growing_time_weeks: 14, difficulty: Easy, season: Season::Spring, cost_per_plant_sek: 3.0, yield_kg_per_m2: 3.0, base_space_m2: 6.25 },
    Row { id: "carrots", name: "Carrots", nutrition: [41.0, 0.9, 9.6, 0.2, 2.8],
          vitamins: &[("vitaminA", 0.835), ("vitaminC", 5.9), ("vitaminK", 0.013)], minerals: &[("potassium", 320.0), ("calcium", 33.0)],
          harvest_kg_per_100_plants: 10.0, storage_weeks: 16, calorie_density: Medium, crisis_priority: High,
          growing_time_weeks: 12, difficulty: Easy, season: Season::Spring, cost_per_plant_sek: 0.1, yield_kg_per_m2: 4.0, base_space_m2: 1.5 },
    Row { id: "onions", name: "Onions", nutrition: [40.0, 1.1, 9.3, 0.1, 1.7],
          vitamins: &[("vitaminC", 7.4)], minerals: &[("potassium", 146.0)],
          harvest_kg_per_100_plants: 15.0, storage_weeks: 24, calorie_density: Low, crisis_priority: Medium,
          growing_time_weeks: 16, difficulty: Easy, season: Season::Spring, cost_per_plant_sek: 0.5, yield_kg_per_m2: 3.0, base_space_m2: 1.6 },
    Row { id: "cabbage", name: "Cabbage", nutrition: [25.0, 1.3, 5.8, 0.1, 2.5],
          vitamins: &[("vitaminC", 36.6), ("vitaminK", 0.076)], minerals: &[("calcium", 40.0), ("potassium", 170.0)],
          harvest_kg_per_100_plants: 150.0, storage_weeks: 12, calorie_density: Low, crisis_priority: Medium,
          growing_time_weeks: 14, difficulty: Moderate, season: Season::Summer, cost_per_plant_sek: 5.0, yield_kg_per_m2: 4.0, base_space_m2: 2.2 },
    Row { id: "kale", name: "Kale", nutrition: [49.0, 4.3, 8.8, 0.9, 3.6],
          vitamins: &[("vitaminA", 0.5), ("vitaminC", 120.0), ("vitaminK", 0.7)], minerals: &[("calcium", 150.0), ("iron", 1.5)],
          harvest_kg_per_100_plants: 100.0, storage_weeks: 2, calorie_density: Low, crisis_priority: High,
          growing_time_weeks: 8, difficulty: Easy, season: Season::YearRound, cost_per_plant_sek: 4.0, yield_kg_per_m2: 2.0, base_space_m2: 1.0 },
    Row { id: "beets", name: "Beetroot", nutrition: [43.0, 1.6, 9.6, 0.2, 2.8],
          vitamins: &[("folate", 0.109)], minerals: &[("potassium", 325.0), ("magnesium", 23.0)],
          harvest_kg_per_100_plants: 20.0, storage_weeks: 16, calorie_density: Medium, crisis_priority: Medium,
          growing_time_weeks: 10, difficulty: Easy, season: Season::Spring, cost_per_plant_sek: 0.3, yield_kg_per_m2: 3.5, base_space_m2: 0.9 },
    Row { id: "bush_beans", name: "Bush beans (dry)", nutrition: [333.0, 23.0, 60.0, 0.8, 15.0],
          vitamins: &[("folate", 0.394)], minerals: &[("iron", 8.2), ("potassium", 1400.0), ("magnesium", 190.0)],
          harvest_kg_per_100_plants: 5.0, storage_weeks: 52, calorie_density: High, crisis_priority: High,
          growing_time_weeks: 12, difficulty: Easy, season: Season::Summer, cost_per_plant_sek: 0.5, yield_kg_per_m2: 0.3, base_space_m2: 2.0 },
    Row { id: "peas", name: "Peas (dry)", nutrition: [341.0, 24.6, 60.0, 1.2, 25.5],
          vitamins: &[("vitaminB6", 0.17)], minerals: &[("iron", 4.4), ("zinc", 3.0)],
          harvest_kg_per_100_plants: 4.0, storage_weeks: 52, calorie_density: High, crisis_priority: High,
          growing_time_weeks: 10, difficulty: Easy, season: Season::Spring, cost_per_plant_sek: 0.3, yield_kg_per_m2: 0.3, base_space_m2: 1.5 },
    Row { id: "tomatoes", name: "Tomatoes", nutrition: [18.0, 0.9, 3.9, 0.2, 1.2],
          vitamins: &[("vitaminC", 13.7), ("vitaminA", 0.042)], minerals: &[("potassium", 237.0)],
          harvest_kg_per_100_plants: 400.0, storage_weeks: 1, calorie_density: Low, crisis_priority: Low,
          growing_time_weeks: 16, difficulty: Moderate, season: Season::Summer, cost_per_plant_sek: 15.0, yield_kg_per_m2: 8.0, base_space_m2: 1.5 },
    Row { id: "zucchini", name: "Zucchini", nutrition: [17.0, 1.2, 3.1, 0.3, 1.0],
          vitamins: &[("vitaminC", 17.9)], minerals: &[("potassium", 261.0)],
          harvest_kg_per_100_plants: 500.0, storage_weeks: 1, calorie_density: Low, crisis_priority: Low,
          growing_time_weeks: 8, difficulty: Easy, season: Season::Summer, cost_per_plant_sek: 10.0, yield_kg_per_m2: 5.0, base_space_m2: 1.0 },
    Row { id: "pumpkin", name: "Pumpkin", nutrition: [26.0, 1.0, 6.5, 0.1, 0.5],
          vitamins: &[("vitaminA", 0.426)], minerals: &[("potassium", 340.0)],
          harvest_kg_per_100_plants: 800.0, storage_weeks: 20, calorie_density: Medium, crisis_priority: Medium,
          growing_time_weeks: 16, difficulty: Easy, season: Season::Summer, cost_per_plant_sek: 12.0, yield_kg_per_m2: 3.0, base_space_m2: 4.0 },
    Row { id: "garlic", name: "Garlic", nutrition: [149.0, 6.4, 33.0, 0.5, 2.1],
          vitamins: &[("vitaminC", 31.2), ("vitaminB6", 1.2)], minerals: &[("calcium", 181.0), ("zinc", 1.2)],
          harvest_kg_per_100_plants: 5.0, storage_weeks: 30, calorie_density: High, crisis_priority: Medium,
          growing_time_weeks: 36, difficulty: Easy, season: Season::Autumn, cost_per_plant_sek: 2.0, yield_kg_per_m2: 0.8, base_space_m2: 0.4 },
    Row { id: "parsnip", name: "Parsnip", nutrition: [75.0, 1.2, 18.0, 0.3, 4.9],
          vitamins: &[("vitaminC", 17.0), ("folate", 0.067)], minerals: &[("potassium", 375.0)],
          harvest_kg_per_100_plants: 25.0, storage_weeks: 20, calorie_density: Medium, crisis_priority: High,
          growing_time_weeks: 18, difficulty: Moderate, season: Season::Spring, cost_per_plant_sek: 0.2, yield_kg_per_m2: 3.0, base_space_m2: 1.0 },
    Row { id: "spinach", name: "Spinach", nutrition: [23.0, 2.9, 3.6, 0.4, 2.2],
          vitamins: &[("vitaminA", 0.469), ("vitaminC", 28.1), ("vitaminK", 0.483), ("folate", 0.194)], minerals: &[("iron", 2.7), ("magnesium", 79.0)],
          harvest_kg_per_100_plants: 20.0, storage_weeks: 1, calorie_density: Low, crisis_priority: Medium,
          growing_time_weeks: 6, difficulty: Easy, season: Season::Spring, cost_per_plant_sek: 0.2, yield_kg_per_m2: 1.5, base_space_m2: 0.6 },
];

impl Row {
    fn to_definition(&self) -> CropDefinition {
        let [calories, protein, carbs, fat, fiber] = self.nutrition;
        CropDefinition {
            id: self.id.to_string(),
            name: self.name.to_string(),
            calories_per_100g: calories,
            protein_per_100g: protein,
            carbs_per_100g: carbs,
            fat_per_100g: fat,
            fiber_per_100g: fiber,
            vitamins: self.vitamins.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            minerals: self.minerals.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            harvest_weight_kg_per_100_plants: self.harvest_kg_per_100_plants,
            storage_weeks: self.storage_weeks,
            calorie_density: self.calorie_density,
            crisis_priority: self.crisis_priority,
            growing_time_weeks: self.growing_time_weeks,
            difficulty: self.difficulty,
            season: self.season,
            cost_per_plant_sek: self.cost_per_plant_sek,
            yield_kg_per_m2: self.yield_kg_per_m2,
            base_space_required_m2: self.base_space_m2,
        }
    }
}

/// Read-only lookup from crop id to reference data.
///
/// Holds no interior mutability, so a shared reference can be read from
/// any number of callers at once.
#[derive(Debug, Clone)]
pub struct ReferenceCropCatalog {
    /// All crops keyed by lowercase id.
    crops: HashMap<String, CropDefinition>,
}

impl ReferenceCropCatalog {
    /// Create a catalog from a list of definitions. Later duplicates win.
    pub fn new(crops: Vec<CropDefinition>) -> Self {
        let mut map = HashMap::new();
        for crop in crops {
            map.insert(crop.key(), crop);
        }
        Self { crops: map }
    }

    /// The built-in reference set.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CROPS.iter().map(Row::to_definition).collect())
    }

    /// Get a crop by id (case-insensitive).
    pub fn get(&self, id: &str) -> Result<&CropDefinition> {
        self.lookup(id)
            .ok_or_else(|| PlanError::CropNotFound(id.to_string()))
    }

    /// Like `get`, but without constructing an error.
    pub fn lookup(&self, id: &str) -> Option<&CropDefinition> {
        self.crops.get(&id.to_lowercase())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// All crops, sorted by id.
    pub fn list(&self) -> Vec<&CropDefinition> {
        let mut crops: Vec<&CropDefinition> = self.crops.values().collect();
        crops.sort_by(|a, b| a.id.cmp(&b.id));
        crops
    }

    /// Resolve a user-typed name or id.
    ///
    /// Exact id/name matches (case-insensitive) win; otherwise candidates with a
    /// Jaro-Winkler score above 0.7 are returned, best first.
    pub fn find_by_name(&self, query: &str) -> Vec<&CropDefinition> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(exact) = self
            .list()
            .into_iter()
            .find(|c| c.id.to_lowercase() == query || c.name.to_lowercase() == query)
        {
            return vec![exact];
        }

        let mut candidates: Vec<(&CropDefinition, f64)> = self
            .list()
            .into_iter()
            .map(|c| {
                let score = jaro_winkler(&c.name.to_lowercase(), &query)
                    .max(jaro_winkler(&c.id.to_lowercase(), &query));
                (c, score)
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(c, _)| c).collect()
    }

    /// Convert to a list of definitions for JSON serialization.
    pub fn to_crops(&self) -> Vec<CropDefinition> {
        self.list().into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl Default for ReferenceCropCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
