mod crop;
mod household;
mod plan;
mod snapshot;

pub use crop::{
    CropDefinition, CultivationIntensity, Difficulty, GardenConstraints, PlantedCrop, Rating,
    Season,
};
pub use household::{ActivityLevel, HouseholdProfile};
pub use plan::{
    CropProduction, CultivationPlan, GardenUsage, GroceryCategory, GroceryCost, GroceryGapItem,
    GroceryPriority, GrocerySource, NutrientCoverage, NutritionNeed, PlanPriority, PlanStats,
    ProductionSummary, ProductionWarning, SelfSufficiencyMetrics,
};
pub use snapshot::PlanSnapshot;
