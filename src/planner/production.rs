use tracing::{debug, warn};

use crate::models::{
    CropDefinition, CropProduction, GardenConstraints, GardenUsage, PlantedCrop,
    ProductionSummary, ProductionWarning,
};
use crate::planner::catalog::ReferenceCropCatalog;
use crate::planner::constants::{intensity_yield_factor, DAYS_PER_YEAR};

/// Annual harvest weight in kg: (plants / 100) × kg per 100 plants × harvests.
#[inline]
pub fn annual_harvest_weight_kg(planted: &PlantedCrop, crop: &CropDefinition) -> f64 {
    (planted.plant_count as f64 / 100.0)
        * crop.harvest_weight_kg_per_100_plants
        * planted.harvests_per_year as f64
}

/// Grams of a nutrient given per-100 g content and a harvest weight in kg.
#[inline]
fn per_100g_total(weight_kg: f64, per_100g: f64) -> f64 {
    weight_kg * 1000.0 * (per_100g / 100.0)
}

/// Annual production of one planted crop.
pub fn compute_crop_production(planted: &PlantedCrop, crop: &CropDefinition) -> CropProduction {
    let weight_kg = annual_harvest_weight_kg(planted, crop);

    CropProduction {
        crop_id: crop.id.clone(),
        name: crop.name.clone(),
        annual_harvest_weight_kg: weight_kg,
        annual_calories: per_100g_total(weight_kg, crop.calories_per_100g),
        cost_sek: planted.plant_count as f64 * crop.cost_per_plant_sek,
        area_m2: planted.area_m2,
        protein_g: per_100g_total(weight_kg, crop.protein_per_100g),
        carbs_g: per_100g_total(weight_kg, crop.carbs_per_100g),
        fat_g: per_100g_total(weight_kg, crop.fat_per_100g),
        fiber_g: per_100g_total(weight_kg, crop.fiber_per_100g),
    }
}

/// Annual production for the whole planted set.
///
/// Crops missing from the catalog are skipped and reported in `warnings`.
/// Crops are processed in input order, so identical inputs give identical sums.
pub fn compute_annual_production(
    planted_crops: &[PlantedCrop],
    catalog: &ReferenceCropCatalog,
) -> ProductionSummary {
    let mut summary = ProductionSummary::default();

    for planted in planted_crops {
        let Some(crop) = catalog.lookup(&planted.crop_id) else {
            warn!(crop_id = %planted.crop_id, "unknown crop skipped in production");
            summary.warnings.push(ProductionWarning::UnknownCrop {
                crop_id: planted.crop_id.clone(),
            });
            continue;
        };

        let production = compute_crop_production(planted, crop);
        summary.total_calories += production.annual_calories;
        summary.total_weight_kg += production.annual_harvest_weight_kg;
        summary.total_cost_sek += production.cost_sek;
        summary.total_area_m2 += production.area_m2;
        summary.crops.push(production);
    }

    summary.daily_calories = (summary.total_calories / DAYS_PER_YEAR).round() as u32;

    debug!(
        crops = summary.crops.len(),
        total_calories = summary.total_calories,
        daily_calories = summary.daily_calories,
        "computed annual production"
    );

    summary
}

/// Compare planted area against the garden.
///
/// Exceeding the garden is reported, not rejected.
pub fn assess_garden(
    planted_crops: &[PlantedCrop],
    catalog: &ReferenceCropCatalog,
    constraints: &GardenConstraints,
) -> GardenUsage {
    let used_m2: f64 = planted_crops.iter().map(|p| p.area_m2).sum();
    let factor = intensity_yield_factor(constraints.cultivation_intensity);

    let yield_potential_kg: f64 = planted_crops
        .iter()
        .filter_map(|p| catalog.lookup(&p.crop_id).map(|c| c.yield_kg_per_m2 * p.area_m2))
        .sum::<f64>()
        * factor;

    let over_capacity = used_m2 > constraints.garden_size_m2;
    if over_capacity {
        warn!(
            used_m2,
            garden_size_m2 = constraints.garden_size_m2,
            "planted area exceeds garden size"
        );
    }

    GardenUsage {
        used_m2,
        available_m2: constraints.garden_size_m2,
        remaining_m2: constraints.garden_size_m2 - used_m2,
        over_capacity,
        yield_potential_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CultivationIntensity;

    #[test]
    fn test_single_crop_harvest() {
        let catalog = ReferenceCropCatalog::builtin();
        let potatoes = catalog.get("potatoes").unwrap();
        let planted = PlantedCrop::new("potatoes", 100, 1, 25.0);

        let production = compute_crop_production(&planted, potatoes);
        assert!((production.annual_harvest_weight_kg - 150.0).abs() < 1e-9);
        assert!((production.annual_calories - 115_500.0).abs() < 1e-6);
        assert!((production.cost_sek - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_harvests_per_year_multiplies() {
        let catalog = ReferenceCropCatalog::builtin();
        let spinach = catalog.get("spinach").unwrap();
        let once = compute_crop_production(&PlantedCrop::new("spinach", 50, 1, 1.0), spinach);
        let thrice = compute_crop_production(&PlantedCrop::new("spinach", 50, 3, 1.0), spinach);
        assert!((thrice.annual_calories - once.annual_calories * 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_crop_is_warning_not_error() {
        let catalog = ReferenceCropCatalog::builtin();
        let crops = vec![
            PlantedCrop::new("potatoes", 100, 1, 25.0),
            PlantedCrop::new("moonmelon", 10, 1, 5.0),
        ];

        let summary = compute_annual_production(&crops, &catalog);
        assert_eq!(summary.crops.len(), 1);
        assert_eq!(
            summary.warnings,
            vec![ProductionWarning::UnknownCrop {
                crop_id: "moonmelon".to_string()
            }]
        );
        // Skipped crop contributes no area either
        assert!((summary.total_area_m2 - 25.0).abs() < 1e-9);
        assert_eq!(summary.daily_calories, 316);
    }

    #[test]
    fn test_empty_crop_list() {
        let catalog = ReferenceCropCatalog::builtin();
        let summary = compute_annual_production(&[], &catalog);
        assert_eq!(summary.total_calories, 0.0);
        assert_eq!(summary.total_area_m2, 0.0);
        assert_eq!(summary.daily_calories, 0);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_assess_garden_over_capacity() {
        let catalog = ReferenceCropCatalog::builtin();
        let crops = vec![
            PlantedCrop::new("potatoes", 100, 1, 25.0),
            PlantedCrop::new("kale", 8, 1, 2.0),
        ];

        let small = GardenConstraints::new(20.0, CultivationIntensity::Medium);
        let usage = assess_garden(&crops, &catalog, &small);
        assert!(usage.over_capacity);
        assert!((usage.remaining_m2 + 7.0).abs() < 1e-9);

        let large = GardenConstraints::new(100.0, CultivationIntensity::Medium);
        assert!(!assess_garden(&crops, &catalog, &large).over_capacity);
    }

    #[test]
    fn test_intensity_scales_yield_potential() {
        let catalog = ReferenceCropCatalog::builtin();
        let crops = vec![PlantedCrop::new("potatoes", 40, 1, 10.0)];
        let low_garden = GardenConstraints::new(50.0, CultivationIntensity::Low);
        let high_garden = GardenConstraints::new(50.0, CultivationIntensity::High);
        let low = assess_garden(&crops, &catalog, &low_garden);
        let high = assess_garden(&crops, &catalog, &high_garden);

        // 3 kg/m2 * 10 m2
        assert!((low.yield_potential_kg - 22.5).abs() < 1e-9);
        assert!((high.yield_potential_kg - 37.5).abs() < 1e-9);
    }
}
