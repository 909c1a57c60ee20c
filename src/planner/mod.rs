pub mod advisory;
pub mod assembler;
pub mod catalog;
pub mod constants;
pub mod grocery;
pub mod nutrition;
pub mod production;
pub mod scaling;
pub mod sufficiency;

pub use advisory::{
    request_advice, AdvisoryError, AdvisoryRequest, AdvisoryService, JsonFileAdvisory,
    NarrativeAdvice,
};
pub use assembler::{
    assemble, classify_priority, compute_stats, generate_plan, plan_id, PlanContext,
};
pub use catalog::ReferenceCropCatalog;
pub use grocery::total_grocery_cost;
pub use nutrition::{
    compute_daily_calorie_need, compute_micronutrient_needs, compute_nutrition_need,
};
pub use production::{assess_garden, compute_annual_production, compute_crop_production};
pub use scaling::{
    get_space_and_cost, get_suggested_plant_count, get_suggested_space_and_cost, scaled_planting,
    suggested_planting, SpaceCost,
};
pub use sufficiency::{evaluate, nutrient_coverage};
