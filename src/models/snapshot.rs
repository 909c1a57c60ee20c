use serde::{Deserialize, Serialize};

use crate::models::{GardenConstraints, HouseholdProfile, PlantedCrop};

/// Caller-owned inputs for one planning pass.
///
/// The engine only ever reads a snapshot; every change produces a fresh
/// computation from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    pub profile: HouseholdProfile,
    #[serde(default)]
    pub constraints: GardenConstraints,
    #[serde(default)]
    pub planted_crops: Vec<PlantedCrop>,
}

impl PlanSnapshot {
    pub fn new(
        profile: HouseholdProfile,
        constraints: GardenConstraints,
        planted_crops: Vec<PlantedCrop>,
    ) -> Self {
        Self {
            profile,
            constraints,
            planted_crops,
        }
    }

    /// Sum of the planted areas.
    pub fn planted_area_m2(&self) -> f64 {
        self.planted_crops.iter().map(|p| p.area_m2).sum()
    }

    /// Soft check: planted area fits in the garden.
    pub fn fits_garden(&self) -> bool {
        self.planted_area_m2() <= self.constraints.garden_size_m2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, CultivationIntensity};

    #[test]
    fn test_fits_garden() {
        let mut snapshot = PlanSnapshot::new(
            HouseholdProfile::new(1, 0, 0, ActivityLevel::Light),
            GardenConstraints::new(10.0, CultivationIntensity::Low),
            vec![PlantedCrop::new("kale", 4, 1, 6.0)],
        );
        assert!(snapshot.fits_garden());

        snapshot.planted_crops.push(PlantedCrop::new("carrots", 60, 1, 5.0));
        assert!(!snapshot.fits_garden());
    }

    #[test]
    fn test_snapshot_json_minimal() {
        let json = r#"{"profile": {"adults": 2}}"#;
        let snapshot: PlanSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.constraints, GardenConstraints::default());
        assert!(snapshot.planted_crops.is_empty());
    }
}
