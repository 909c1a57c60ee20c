#[macro_use]
extern crate assert_float_eq;

use serde_json::{json, Value};

use crisis_garden_rs::models::{
    ActivityLevel, CultivationIntensity, GardenConstraints, HouseholdProfile, PlanSnapshot,
    PlantedCrop,
};
use crisis_garden_rs::planner::{
    compute_annual_production, compute_daily_calorie_need, compute_nutrition_need, compute_stats,
    evaluate, generate_plan, grocery, total_grocery_cost, AdvisoryError, AdvisoryRequest,
    AdvisoryService, ReferenceCropCatalog,
};

fn household() -> HouseholdProfile {
    HouseholdProfile::new(2, 1, 0, ActivityLevel::Moderate)
}

fn garden_crops() -> Vec<PlantedCrop> {
    vec![
        PlantedCrop::new("potatoes", 100, 1, 25.0),
        PlantedCrop::new("carrots", 180, 1, 4.5),
        PlantedCrop::new("bush_beans", 60, 1, 6.0),
        PlantedCrop::new("kale", 12, 2, 3.0),
        PlantedCrop::new("onions", 120, 1, 4.8),
    ]
}

fn snapshot() -> PlanSnapshot {
    PlanSnapshot::new(
        household(),
        GardenConstraints::new(60.0, CultivationIntensity::Medium),
        garden_crops(),
    )
}

struct Throwing;

impl AdvisoryService for Throwing {
    fn advise(&self, _: &AdvisoryRequest<'_>) -> Result<Value, AdvisoryError> {
        Err(AdvisoryError::Unavailable("connection refused".to_string()))
    }
}

struct Canned(Value);

impl AdvisoryService for Canned {
    fn advise(&self, _: &AdvisoryRequest<'_>) -> Result<Value, AdvisoryError> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_scenario_a_daily_need() {
    assert_eq!(compute_daily_calorie_need(&household()), 7440);
}

#[test]
fn test_scenario_b_potato_harvest() {
    let catalog = ReferenceCropCatalog::builtin();
    let crops = vec![PlantedCrop::new("potatoes", 100, 1, 25.0)];
    let summary = compute_annual_production(&crops, &catalog);

    assert_float_absolute_eq!(summary.total_weight_kg, 150.0, 1e-9);
    assert_float_absolute_eq!(summary.total_calories, 115_500.0, 1e-6);
}

#[test]
fn test_scenario_c_no_deficit_no_groceries() {
    let catalog = ReferenceCropCatalog::builtin();
    // One sedentary elderly person: 1800 kcal/day, far below 2000 potato plants
    let snap = PlanSnapshot::new(
        HouseholdProfile::new(0, 0, 1, ActivityLevel::Sedentary),
        GardenConstraints::new(600.0, CultivationIntensity::High),
        vec![PlantedCrop::new("potatoes", 2000, 1, 500.0)],
    );

    let stats = compute_stats(&snap, &catalog);
    assert_eq!(stats.metrics.deficit_calories, 0);
    assert!(stats.metrics.surplus_calories > 0);
    assert!(stats.grocery_gap.is_empty());
    assert_eq!(total_grocery_cost(&stats.grocery_gap).weekly_sek, 0.0);
    assert_eq!(stats.grocery_cost.annual_sek, 0.0);
}

#[test]
fn test_scenario_d_empty_crop_list() {
    let catalog = ReferenceCropCatalog::builtin();
    let snap = PlanSnapshot::new(household(), GardenConstraints::default(), Vec::new());

    let (stats, plan) = generate_plan(&snap, &catalog, None);
    assert_eq!(stats.production.total_area_m2, 0.0);
    assert_eq!(stats.production.total_calories, 0.0);
    assert_eq!(plan.self_sufficiency_percent, 0);
    assert_eq!(stats.metrics.deficit_calories, 7440);
}

#[test]
fn test_scenario_e_advisory_failure_falls_back() {
    let catalog = ReferenceCropCatalog::builtin();
    let snap = snapshot();
    let stats = compute_stats(&snap, &catalog);

    let (_, plan) = generate_plan(&snap, &catalog, Some(&Throwing));
    assert!(plan.basic);
    assert!(!plan.description.is_empty());
    assert_eq!(plan.total_calories, stats.production.total_calories);
    assert_eq!(plan.self_sufficiency_percent, stats.metrics.percent);
    assert_eq!(
        plan.estimated_cost,
        stats.production.total_cost_sek + stats.grocery_cost.annual_sek
    );
    assert_eq!(plan.grocery_gap, grocery::generate(&stats.metrics));
}

#[test]
fn test_advisory_numbers_never_override() {
    let catalog = ReferenceCropCatalog::builtin();
    let snap = snapshot();
    let (stats, basic) = generate_plan(&snap, &catalog, None);

    let advisor = Canned(json!({
        "title": "Family crisis garden",
        "description": "Grow storable staples first.",
        "estimatedCost": 1,
        "priority": "high",
        "nextSteps": ["Order seed potatoes"],
        "recommendations": 17
    }));
    let (_, enriched) = generate_plan(&snap, &catalog, Some(&advisor));

    assert!(!enriched.basic);
    assert_eq!(enriched.title, "Family crisis garden");
    assert_eq!(enriched.next_steps, vec!["Order seed potatoes".to_string()]);
    // Malformed recommendations fall back to the template
    assert_eq!(enriched.recommendations, basic.recommendations);
    assert_eq!(enriched.timeline, basic.timeline);
    assert_eq!(enriched.estimated_cost, basic.estimated_cost);
    assert_eq!(enriched.priority, basic.priority);
    assert_eq!(enriched.self_sufficiency_percent, stats.metrics.percent);
    assert_eq!(enriched.id, basic.id);
}

#[test]
fn test_advisory_grocery_list_replaces_on_deficit() {
    let catalog = ReferenceCropCatalog::builtin();
    let advisor = Canned(json!({
        "groceryItems": [
            {"name": "Buckwheat", "category": "carbs", "caloriesPer100gOrKg": 343,
             "costPerKg": 32, "priority": "essential", "source": "store"}
        ]
    }));

    let (stats, plan) = generate_plan(&snapshot(), &catalog, Some(&advisor));
    assert!(stats.metrics.has_deficit());
    assert_eq!(plan.grocery_gap.len(), 1);
    assert_eq!(plan.grocery_gap[0].name, "Buckwheat");
    assert!(!plan.basic);
    // Cost still comes from the deterministic list
    assert_eq!(
        plan.estimated_cost,
        stats.production.total_cost_sek + stats.grocery_cost.annual_sek
    );
}

#[test]
fn test_advisory_grocery_list_ignored_without_deficit() {
    let catalog = ReferenceCropCatalog::builtin();
    let snap = PlanSnapshot::new(
        HouseholdProfile::new(0, 0, 1, ActivityLevel::Sedentary),
        GardenConstraints::new(600.0, CultivationIntensity::High),
        vec![PlantedCrop::new("potatoes", 2000, 1, 500.0)],
    );
    let advisor = Canned(json!({
        "groceryItems": [
            {"name": "Buckwheat", "category": "carbs", "caloriesPer100gOrKg": 343,
             "costPerKg": 32, "priority": "essential", "source": "store"}
        ]
    }));

    let (_, plan) = generate_plan(&snap, &catalog, Some(&advisor));
    assert!(plan.grocery_gap.is_empty());
    assert!(plan.basic);
}

#[test]
fn test_determinism() {
    let catalog = ReferenceCropCatalog::builtin();
    let snap = snapshot();

    let first = generate_plan(&snap, &catalog, None);
    let second = generate_plan(&snap, &catalog, None);
    assert_eq!(first, second);
}

#[test]
fn test_additivity_over_partitions() {
    let catalog = ReferenceCropCatalog::builtin();
    let crops = garden_crops();
    let whole = compute_annual_production(&crops, &catalog);

    for split in 0..=crops.len() {
        let (left, right) = crops.split_at(split);
        let left = compute_annual_production(left, &catalog);
        let right = compute_annual_production(right, &catalog);
        assert_float_absolute_eq!(
            left.total_calories + right.total_calories,
            whole.total_calories,
            1e-6
        );
    }

    let per_crop: f64 = crops
        .iter()
        .map(|c| compute_annual_production(std::slice::from_ref(c), &catalog).total_calories)
        .sum();
    assert_float_absolute_eq!(per_crop, whole.total_calories, 1e-6);
}

#[test]
fn test_monotonic_in_plant_count() {
    let catalog = ReferenceCropCatalog::builtin();
    let need = compute_nutrition_need(&household());

    for index in 0..garden_crops().len() {
        let mut crops = garden_crops();
        let mut previous = compute_annual_production(&crops, &catalog);
        let mut previous_percent = evaluate(&need, &previous).percent;

        for _ in 0..5 {
            crops[index].plant_count += 37;
            let next = compute_annual_production(&crops, &catalog);
            let next_percent = evaluate(&need, &next).percent;

            assert!(next.total_calories >= previous.total_calories);
            assert!(next.daily_calories >= previous.daily_calories);
            assert!(next_percent >= previous_percent);

            previous = next;
            previous_percent = next_percent;
        }
    }
}

#[test]
fn test_deficit_surplus_exclusive() {
    let catalog = ReferenceCropCatalog::builtin();

    for adults in 0..4 {
        for plants in [0, 50, 400, 1500, 4000] {
            let crops = if plants == 0 {
                Vec::new()
            } else {
                vec![PlantedCrop::new("potatoes", plants, 1, plants as f64 * 0.25)]
            };
            let snap = PlanSnapshot::new(
                HouseholdProfile::new(adults, 0, 0, ActivityLevel::Active),
                GardenConstraints::default(),
                crops,
            );
            let metrics = compute_stats(&snap, &catalog).metrics;

            if metrics.deficit_calories > 0 {
                assert_eq!(metrics.surplus_calories, 0);
            }
            if metrics.surplus_calories > 0 {
                assert_eq!(metrics.deficit_calories, 0);
            }
        }
    }
}

#[test]
fn test_garden_overflow_is_observable_not_fatal() {
    let catalog = ReferenceCropCatalog::builtin();
    let snap = PlanSnapshot::new(
        household(),
        GardenConstraints::new(10.0, CultivationIntensity::Low),
        garden_crops(),
    );

    assert!(!snap.fits_garden());
    let (_, plan) = generate_plan(&snap, &catalog, None);
    assert!(plan
        .recommendations
        .iter()
        .any(|r| r.contains("exceeds the garden")));
}

#[test]
fn test_unknown_crop_surfaces_warning() {
    let catalog = ReferenceCropCatalog::builtin();
    let mut crops = garden_crops();
    crops.push(PlantedCrop::new("moonmelon", 5, 1, 2.0));
    let snap = PlanSnapshot::new(household(), GardenConstraints::default(), crops);

    let (stats, plan) = generate_plan(&snap, &catalog, None);
    assert_eq!(stats.production.warnings.len(), 1);
    assert_eq!(stats.production.crops.len(), garden_crops().len());
    assert!(plan
        .recommendations
        .iter()
        .any(|r| r.contains("moonmelon")));
}
