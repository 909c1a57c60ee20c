use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{GroceryGapItem, HouseholdProfile, PlanStats, PlantedCrop};

/// Failure of the external advisory collaborator.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory service unavailable: {0}")]
    Unavailable(String),

    #[error("advisory response malformed: {0}")]
    Malformed(String),
}

/// What the advisory collaborator is told about the household.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest<'a> {
    pub household_profile: &'a HouseholdProfile,
    pub nutrition_stats: &'a PlanStats,
    pub planted_crops: &'a [PlantedCrop],
}

/// External collaborator producing narrative text for a plan.
///
/// The response is loosely shaped; any field may be missing or malformed.
pub trait AdvisoryService {
    fn advise(&self, request: &AdvisoryRequest<'_>) -> std::result::Result<Value, AdvisoryError>;
}

/// Advisory collaborator that replays a canned JSON response from disk.
#[derive(Debug, Clone)]
pub struct JsonFileAdvisory {
    path: PathBuf,
}

impl JsonFileAdvisory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AdvisoryService for JsonFileAdvisory {
    fn advise(&self, _request: &AdvisoryRequest<'_>) -> std::result::Result<Value, AdvisoryError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AdvisoryError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| AdvisoryError::Malformed(e.to_string()))
    }
}

/// Narrative fields that survived validation.
///
/// Each field is checked on its own; a bad field is dropped without
/// affecting the others.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NarrativeAdvice {
    pub title: Option<String>,
    pub description: Option<String>,
    pub timeline: Option<String>,
    pub next_steps: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
    pub grocery_items: Option<Vec<GroceryGapItem>>,
}

impl NarrativeAdvice {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            debug!("advisory response is not an object, ignoring it");
            return Self::default();
        };

        Self {
            title: obj.get("title").and_then(non_empty_string),
            description: obj.get("description").and_then(non_empty_string),
            timeline: obj.get("timeline").and_then(non_empty_string),
            next_steps: obj.get("nextSteps").and_then(string_list),
            recommendations: obj.get("recommendations").and_then(string_list),
            grocery_items: obj.get("groceryItems").and_then(grocery_list),
        }
    }

    /// True when no field validated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .as_array()?
        .iter()
        .filter_map(non_empty_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

fn grocery_list(value: &Value) -> Option<Vec<GroceryGapItem>> {
    let items: Vec<GroceryGapItem> = value
        .as_array()?
        .iter()
        .filter_map(|v| serde_json::from_value::<GroceryGapItem>(v.clone()).ok())
        .filter(|item| {
            !item.name.trim().is_empty()
                && item.cost_per_kg.is_finite()
                && item.cost_per_kg >= 0.0
                && item.calories_per_100g_or_kg.is_finite()
                && item.calories_per_100g_or_kg >= 0.0
        })
        .collect();
    (!items.is_empty()).then_some(items)
}

/// Ask the collaborator for advice, swallowing any failure.
///
/// Returns `None` when the call fails or nothing in the response validates.
pub fn request_advice(
    service: &dyn AdvisoryService,
    request: &AdvisoryRequest<'_>,
) -> Option<NarrativeAdvice> {
    match service.advise(request) {
        Ok(value) => {
            let advice = NarrativeAdvice::from_value(&value);
            if advice.is_empty() {
                info!("advisory response had no usable fields, using basic plan");
                None
            } else {
                Some(advice)
            }
        }
        Err(e) => {
            info!(error = %e, "advisory call failed, using basic plan");
            None
        }
    }
}
