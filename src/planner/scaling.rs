use crate::models::{CropDefinition, PlantedCrop};
use crate::planner::constants::{plants_per_person, round_to, AREA_DISPLAY_DECIMALS};

/// Area and cost of planting a crop.
///
/// Fields hold unrounded values; use the `display_*` helpers for output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpaceCost {
    pub space_m2: f64,
    pub cost_sek: f64,
}

impl SpaceCost {
    pub fn display_space_m2(&self) -> f64 {
        round_to(self.space_m2, AREA_DISPLAY_DECIMALS)
    }

    pub fn display_cost_sek(&self) -> f64 {
        self.cost_sek.round()
    }
}

/// Suggested plant count: plants-per-person baseline × household size, at least 1.
///
/// Saturates at `u32::MAX` for absurdly large households.
pub fn get_suggested_plant_count(crop_id: &str, household_size: u32) -> u32 {
    plants_per_person(crop_id)
        .saturating_mul(household_size)
        .max(1)
}

/// Area one plant occupies. `base_space_required_m2` covers one person's suggested planting.
pub fn space_per_plant(crop: &CropDefinition) -> f64 {
    let baseline_count = get_suggested_plant_count(&crop.id, 1);
    crop.base_space_required_m2 / baseline_count as f64
}

/// Cost of one m² planted at the baseline density.
pub fn cost_per_m2(crop: &CropDefinition) -> f64 {
    if crop.base_space_required_m2 <= 0.0 {
        return 0.0;
    }
    let baseline_count = get_suggested_plant_count(&crop.id, 1);
    crop.cost_per_plant_sek * baseline_count as f64 / crop.base_space_required_m2
}

/// Space and cost for a user-entered plant count.
///
/// Nothing is rounded, so sums across crops do not compound rounding error.
pub fn get_space_and_cost(crop: &CropDefinition, actual_plant_count: u32) -> SpaceCost {
    let space_m2 = space_per_plant(crop) * actual_plant_count as f64;
    SpaceCost {
        space_m2,
        cost_sek: cost_per_m2(crop) * space_m2,
    }
}

/// Space and cost for the suggested default quantity.
///
/// The area is rounded to display precision first and the cost is derived
/// from the rounded area.
pub fn get_suggested_space_and_cost(crop: &CropDefinition, household_size: u32) -> SpaceCost {
    let count = get_suggested_plant_count(&crop.id, household_size);
    let space_m2 = round_to(space_per_plant(crop) * count as f64, AREA_DISPLAY_DECIMALS);
    SpaceCost {
        space_m2,
        cost_sek: cost_per_m2(crop) * space_m2,
    }
}

/// A planted crop at the suggested quantity, one harvest per year.
pub fn suggested_planting(crop: &CropDefinition, household_size: u32) -> PlantedCrop {
    let count = get_suggested_plant_count(&crop.id, household_size);
    let space = get_suggested_space_and_cost(crop, household_size);
    PlantedCrop::new(crop.id.clone(), count, 1, space.space_m2)
}

/// A planted crop with an explicit count, its area scaled from the crop baseline.
pub fn scaled_planting(
    crop: &CropDefinition,
    plant_count: u32,
    harvests_per_year: u32,
) -> PlantedCrop {
    let space = get_space_and_cost(crop, plant_count);
    PlantedCrop::new(
        crop.id.clone(),
        plant_count,
        harvests_per_year.max(1),
        space.space_m2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::catalog::ReferenceCropCatalog;
    use crate::planner::constants::DEFAULT_PLANTS_PER_PERSON;

    #[test]
    fn test_suggested_count_scales_with_household() {
        assert_eq!(get_suggested_plant_count("potatoes", 1), 25);
        assert_eq!(get_suggested_plant_count("potatoes", 4), 100);
    }

    #[test]
    fn test_suggested_count_fallback_and_floor() {
        assert_eq!(get_suggested_plant_count("unknown", 2), DEFAULT_PLANTS_PER_PERSON * 2);
        assert_eq!(get_suggested_plant_count("zucchini", 0), 1);
    }

    #[test]
    fn test_suggested_count_saturates() {
        assert_eq!(get_suggested_plant_count("carrots", u32::MAX), u32::MAX);

        let catalog = ReferenceCropCatalog::builtin();
        let carrots = catalog.get("carrots").unwrap();
        let sc = get_suggested_space_and_cost(carrots, u32::MAX);
        assert!(sc.space_m2.is_finite());
        assert!(sc.cost_sek.is_finite());
    }

    #[test]
    fn test_space_and_cost_linear() {
        let catalog = ReferenceCropCatalog::builtin();
        let potatoes = catalog.get("potatoes").unwrap();

        // 6.25 m2 / 25 plants = 0.25 m2 per plant
        let sc = get_space_and_cost(potatoes, 40);
        assert!((sc.space_m2 - 10.0).abs() < 1e-9);
        // 3 SEK/plant * 25 / 6.25 m2 = 12 SEK/m2
        assert!((sc.cost_sek - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrounded_sum_differs_from_rounded_sum() {
        let catalog = ReferenceCropCatalog::builtin();
        let onions = catalog.get("onions").unwrap();

        // 1.6 / 40 = 0.04 m2 per plant; 1 plant = 0.04, displays as 0.0
        let single = get_space_and_cost(onions, 1);
        let summed: f64 = (0..10).map(|_| single.space_m2).sum();
        let display_summed: f64 = (0..10).map(|_| single.display_space_m2()).sum();

        assert!((summed - get_space_and_cost(onions, 10).space_m2).abs() < 1e-9);
        assert_eq!(display_summed, 0.0);
    }

    #[test]
    fn test_suggested_path_rounds_area_before_cost() {
        let catalog = ReferenceCropCatalog::builtin();
        let cabbage = catalog.get("cabbage").unwrap();

        // 3 people: 18 plants * (2.2 / 6) m2 = 6.6 m2
        let suggested = get_suggested_space_and_cost(cabbage, 3);
        assert_eq!(suggested.space_m2, round_to(suggested.space_m2, 1));
        assert!((suggested.cost_sek - cost_per_m2(cabbage) * suggested.space_m2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_base_space_is_free() {
        let catalog = ReferenceCropCatalog::builtin();
        let mut crop = catalog.get("kale").unwrap().clone();
        crop.base_space_required_m2 = 0.0;
        let sc = get_space_and_cost(&crop, 10);
        assert_eq!(sc.space_m2, 0.0);
        assert_eq!(sc.cost_sek, 0.0);
    }

    #[test]
    fn test_suggested_planting() {
        let catalog = ReferenceCropCatalog::builtin();
        let kale = catalog.get("kale").unwrap();
        let planted = suggested_planting(kale, 2);
        assert_eq!(planted.plant_count, 8);
        assert_eq!(planted.harvests_per_year, 1);
        assert!((planted.area_m2 - 2.0).abs() < 1e-9);
        assert!(planted.is_valid());
    }
}
