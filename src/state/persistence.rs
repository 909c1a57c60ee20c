use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{
    CropDefinition, CultivationPlan, GardenConstraints, HouseholdProfile, PlanSnapshot, PlanStats,
    PlantedCrop,
};

/// Everything handed to the persistence collaborator for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub profile: HouseholdProfile,
    pub constraints: GardenConstraints,
    pub planted_crops: Vec<PlantedCrop>,
    pub stats: PlanStats,
    pub plan: CultivationPlan,
}

impl SavedPlan {
    pub fn new(snapshot: &PlanSnapshot, stats: &PlanStats, plan: &CultivationPlan) -> Self {
        Self {
            profile: snapshot.profile.clone(),
            constraints: snapshot.constraints.clone(),
            planted_crops: snapshot.planted_crops.clone(),
            stats: stats.clone(),
            plan: plan.clone(),
        }
    }

    pub fn snapshot(&self) -> PlanSnapshot {
        PlanSnapshot::new(
            self.profile.clone(),
            self.constraints.clone(),
            self.planted_crops.clone(),
        )
    }
}

/// External storage for assembled plans. Errors are returned to the caller unchanged.
pub trait PlanStore {
    /// Store a plan and return its identifier.
    fn save(&self, record: &SavedPlan) -> Result<String>;

    fn load(&self, id: &str) -> Result<SavedPlan>;

    /// Identifiers of all stored plans, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// Stores each plan as a pretty-printed JSON file named after its id.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file for `id`. Ids that could leave the store directory are rejected.
    fn path_for(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) {
            return Err(PlanError::InvalidInput(format!("invalid plan id '{}'", id)));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }
}

impl PlanStore for JsonDirStore {
    fn save(&self, record: &SavedPlan) -> Result<String> {
        let id = record.plan.id.clone();
        let path = self.path_for(&id)?;

        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(path, json)?;
        debug!(id = %id, dir = %self.dir.display(), "saved plan");
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<SavedPlan> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(PlanError::PlanNotFound(id.to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}

/// Load a household snapshot from a JSON file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<PlanSnapshot> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a household snapshot to a JSON file.
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &PlanSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load crop definitions from a JSON file.
///
/// Deduplicates by lowercase id (last occurrence wins) and rejects invalid entries.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CropDefinition>> {
    let content = fs::read_to_string(path)?;
    let crops: Vec<CropDefinition> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, CropDefinition> = HashMap::new();
    for crop in crops {
        if !crop.is_valid() {
            return Err(PlanError::InvalidInput(format!(
                "crop '{}' has negative or missing values",
                crop.id
            )));
        }
        seen.insert(crop.key(), crop);
    }

    let mut deduped: Vec<CropDefinition> = seen.into_values().collect();
    deduped.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(deduped)
}

/// Save crop definitions to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, crops: &[CropDefinition]) -> Result<()> {
    let json = serde_json::to_string_pretty(crops)?;
    fs::write(path, json)?;
    Ok(())
}
