use crate::error::{PlanError, Result};
use crate::models::{
    CultivationPlan, GardenConstraints, HouseholdProfile, PlanSnapshot, PlanStats, PlantedCrop,
};
use crate::planner::{compute_stats, generate_plan, AdvisoryService, ReferenceCropCatalog};

/// Where a planning session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Selecting crops; no plan generated yet.
    Draft,
    /// Waiting on the advisory collaborator.
    Generating,
    /// Numbers final, narrative attached.
    Ready,
    /// Inputs changed after a plan was generated; the plan is stale.
    Edited,
}

/// Caller-owned planning state.
///
/// Every edit replaces the snapshot and recomputes all stats from scratch.
pub struct PlanningSession<'a> {
    catalog: &'a ReferenceCropCatalog,
    snapshot: PlanSnapshot,
    state: SessionState,
    stats: PlanStats,
    plan: Option<CultivationPlan>,
}

impl<'a> PlanningSession<'a> {
    pub fn new(catalog: &'a ReferenceCropCatalog, snapshot: PlanSnapshot) -> Self {
        let stats = compute_stats(&snapshot, catalog);
        Self {
            catalog,
            snapshot,
            state: SessionState::Draft,
            stats,
            plan: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn snapshot(&self) -> &PlanSnapshot {
        &self.snapshot
    }

    pub fn stats(&self) -> &PlanStats {
        &self.stats
    }

    /// The last generated plan. Stale while the session is `Edited`.
    pub fn plan(&self) -> Option<&CultivationPlan> {
        self.plan.as_ref()
    }

    pub fn is_plan_stale(&self) -> bool {
        self.state == SessionState::Edited
    }

    pub fn set_profile(&mut self, profile: HouseholdProfile) {
        self.edit(|snapshot| snapshot.profile = profile);
    }

    pub fn set_constraints(&mut self, constraints: GardenConstraints) {
        self.edit(|snapshot| snapshot.constraints = constraints);
    }

    /// Select a crop. Selecting an already planted crop replaces its quantities.
    pub fn add_crop(&mut self, planted: PlantedCrop) -> Result<()> {
        if !self.catalog.contains(&planted.crop_id) {
            return Err(PlanError::CropNotFound(planted.crop_id));
        }
        if !planted.is_valid() {
            return Err(PlanError::InvalidInput(format!(
                "{} needs a positive plant count, at least one harvest and a non-negative area",
                planted.crop_id
            )));
        }

        self.edit(|snapshot| {
            match snapshot
                .planted_crops
                .iter_mut()
                .find(|p| p.crop_id.eq_ignore_ascii_case(&planted.crop_id))
            {
                Some(existing) => *existing = planted,
                None => snapshot.planted_crops.push(planted),
            }
        });
        Ok(())
    }

    /// Change the quantities of a planted crop.
    pub fn adjust_crop(
        &mut self,
        crop_id: &str,
        plant_count: u32,
        harvests_per_year: u32,
        area_m2: f64,
    ) -> Result<()> {
        if !self.is_planted(crop_id) {
            return Err(PlanError::CropNotFound(crop_id.to_string()));
        }
        self.add_crop(PlantedCrop::new(crop_id, plant_count, harvests_per_year, area_m2))
    }

    /// Deselect a crop.
    pub fn remove_crop(&mut self, crop_id: &str) -> Result<()> {
        if !self.is_planted(crop_id) {
            return Err(PlanError::CropNotFound(crop_id.to_string()));
        }
        self.edit(|snapshot| {
            snapshot
                .planted_crops
                .retain(|p| !p.crop_id.eq_ignore_ascii_case(crop_id))
        });
        Ok(())
    }

    /// Generate a plan for the current snapshot and move to `Ready`.
    pub fn generate(&mut self, advisory: Option<&dyn AdvisoryService>) -> &CultivationPlan {
        self.state = SessionState::Generating;
        let (stats, plan) = generate_plan(&self.snapshot, self.catalog, advisory);
        self.stats = stats;
        self.state = SessionState::Ready;
        self.plan.insert(plan)
    }

    fn is_planted(&self, crop_id: &str) -> bool {
        self.snapshot
            .planted_crops
            .iter()
            .any(|p| p.crop_id.eq_ignore_ascii_case(crop_id))
    }

    fn edit<F: FnOnce(&mut PlanSnapshot)>(&mut self, change: F) {
        let mut next = self.snapshot.clone();
        change(&mut next);
        self.snapshot = next;
        self.stats = compute_stats(&self.snapshot, self.catalog);

        if matches!(self.state, SessionState::Ready | SessionState::Edited) {
            self.state = SessionState::Edited;
        }
    }
}
