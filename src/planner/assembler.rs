use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::{
    CultivationPlan, GardenConstraints, GroceryCost, GroceryGapItem, HouseholdProfile,
    NutritionNeed, PlanPriority, PlanSnapshot, PlanStats, PlantedCrop, ProductionSummary,
    ProductionWarning, Rating, SelfSufficiencyMetrics,
};
use crate::planner::advisory::{
    request_advice, AdvisoryRequest, AdvisoryService, NarrativeAdvice,
};
use crate::planner::catalog::ReferenceCropCatalog;
use crate::planner::constants::{HIGH_PRIORITY_PERCENT, MEDIUM_PRIORITY_PERCENT};
use crate::planner::{grocery, nutrition, production, sufficiency};

/// Crops stored for at most this many weeks are flagged as perishable.
const PERISHABLE_STORAGE_WEEKS: u32 = 2;

/// Number of unplanted crops suggested when there is a deficit.
const SUGGESTED_CROP_COUNT: usize = 3;

/// Everything `assemble` reads. All numbers come from the deterministic calculators.
#[derive(Debug, Clone, Copy)]
pub struct PlanContext<'a> {
    pub profile: &'a HouseholdProfile,
    pub constraints: &'a GardenConstraints,
    pub planted_crops: &'a [PlantedCrop],
    pub catalog: &'a ReferenceCropCatalog,
    pub need: &'a NutritionNeed,
    pub production: &'a ProductionSummary,
    pub metrics: &'a SelfSufficiencyMetrics,
    pub grocery_gap: &'a [GroceryGapItem],
    pub grocery_cost: &'a GroceryCost,
}

/// Priority from the self-sufficiency percentage.
pub fn classify_priority(percent: u32) -> PlanPriority {
    if percent >= HIGH_PRIORITY_PERCENT {
        PlanPriority::High
    } else if percent >= MEDIUM_PRIORITY_PERCENT {
        PlanPriority::Medium
    } else {
        PlanPriority::Low
    }
}

/// Stable identifier derived from the snapshot contents.
///
/// Each input field is fed to SHA-256 in a fixed order; floats go in as their
/// bit patterns. The first 8 bytes of the digest become 16 hex chars.
pub fn plan_id(snapshot: &PlanSnapshot) -> String {
    let profile = &snapshot.profile;
    let constraints = &snapshot.constraints;

    let mut hasher = Sha256::new();
    hasher.update(format!(
        "household:{}:{}:{}:{}\n",
        profile.adults,
        profile.children,
        profile.elderly,
        profile.activity_level.label()
    ));
    hasher.update(format!(
        "garden:{:016x}:{}\n",
        constraints.garden_size_m2.to_bits(),
        constraints.cultivation_intensity.label()
    ));
    for planted in &snapshot.planted_crops {
        hasher.update(format!(
            "crop:{}:{}:{}:{:016x}\n",
            planted.crop_id,
            planted.plant_count,
            planted.harvests_per_year,
            planted.area_m2.to_bits()
        ));
    }

    let digest = hasher.finalize();
    format!("plan-{}", hex::encode(&digest[..8]))
}

/// Recompute every derived figure for a snapshot.
pub fn compute_stats(snapshot: &PlanSnapshot, catalog: &ReferenceCropCatalog) -> PlanStats {
    let need = nutrition::compute_nutrition_need(&snapshot.profile);
    let production = production::compute_annual_production(&snapshot.planted_crops, catalog);
    let metrics = sufficiency::evaluate(&need, &production);
    let coverage = sufficiency::nutrient_coverage(&need, &production);
    let grocery_gap = grocery::generate(&metrics);
    let grocery_cost = grocery::total_grocery_cost(&grocery_gap);

    PlanStats {
        need,
        production,
        metrics,
        coverage,
        grocery_gap,
        grocery_cost,
    }
}

/// Build a plan, preferring validated narrative fields and falling back to templates.
///
/// A grocery list from the advisor replaces the deterministic one only while
/// there is a deficit. Numeric fields never come from the advisor: the
/// estimated cost always prices the standard staple list.
pub fn assemble(ctx: &PlanContext<'_>, narrative: Option<&NarrativeAdvice>) -> CultivationPlan {
    let advice = narrative.cloned().unwrap_or_default();
    let advised_groceries = match advice.grocery_items {
        Some(ref items) if ctx.metrics.has_deficit() => Some(items.clone()),
        _ => None,
    };
    // Basic means nothing from the advisor reached the plan.
    let basic = advice.title.is_none()
        && advice.description.is_none()
        && advice.timeline.is_none()
        && advice.next_steps.is_none()
        && advice.recommendations.is_none()
        && advised_groceries.is_none();

    let grocery_gap = advised_groceries.unwrap_or_else(|| ctx.grocery_gap.to_vec());

    let snapshot = PlanSnapshot::new(
        ctx.profile.clone(),
        ctx.constraints.clone(),
        ctx.planted_crops.to_vec(),
    );

    CultivationPlan {
        id: plan_id(&snapshot),
        title: advice.title.unwrap_or_else(|| template_title(ctx)),
        description: advice
            .description
            .unwrap_or_else(|| template_description(ctx)),
        crops: ctx.planted_crops.to_vec(),
        total_calories: ctx.production.total_calories,
        self_sufficiency_percent: ctx.metrics.percent,
        grocery_gap,
        estimated_cost: ctx.production.total_cost_sek + ctx.grocery_cost.annual_sek,
        timeline: advice.timeline.unwrap_or_else(|| template_timeline(ctx)),
        priority: classify_priority(ctx.metrics.percent),
        next_steps: advice
            .next_steps
            .unwrap_or_else(|| template_next_steps(ctx)),
        recommendations: advice
            .recommendations
            .unwrap_or_else(|| template_recommendations(ctx)),
        basic,
    }
}

/// Full pipeline for one snapshot: stats, optional advice, assembled plan.
///
/// Advisory failure never fails the pipeline; it yields the basic plan.
pub fn generate_plan(
    snapshot: &PlanSnapshot,
    catalog: &ReferenceCropCatalog,
    advisory: Option<&dyn AdvisoryService>,
) -> (PlanStats, CultivationPlan) {
    let stats = compute_stats(snapshot, catalog);

    let advice = advisory.and_then(|service| {
        let request = AdvisoryRequest {
            household_profile: &snapshot.profile,
            nutrition_stats: &stats,
            planted_crops: &snapshot.planted_crops,
        };
        request_advice(service, &request)
    });

    let ctx = PlanContext {
        profile: &snapshot.profile,
        constraints: &snapshot.constraints,
        planted_crops: &snapshot.planted_crops,
        catalog,
        need: &stats.need,
        production: &stats.production,
        metrics: &stats.metrics,
        grocery_gap: &stats.grocery_gap,
        grocery_cost: &stats.grocery_cost,
    };
    let plan = assemble(&ctx, advice.as_ref());

    debug!(
        id = %plan.id,
        percent = plan.self_sufficiency_percent,
        basic = plan.basic,
        "assembled plan"
    );

    (stats, plan)
}

fn template_title(ctx: &PlanContext<'_>) -> String {
    match ctx.profile.size() {
        0 => "Crisis garden plan".to_string(),
        1 => "Crisis garden plan for 1 person".to_string(),
        n => format!("Crisis garden plan for {} people", n),
    }
}

fn template_description(ctx: &PlanContext<'_>) -> String {
    let mut text = format!(
        "{:.1} m² of a {:.1} m² garden planted with {} crop(s) covers {}% of the household's \
         daily need of {} kcal ({} kcal/day from the garden).",
        ctx.production.total_area_m2,
        ctx.constraints.garden_size_m2,
        ctx.production.crops.len(),
        ctx.metrics.percent,
        ctx.need.daily_calories,
        ctx.production.daily_calories,
    );

    if ctx.metrics.deficit_calories > 0 {
        text.push_str(&format!(
            " Groceries must cover the remaining {} kcal per day.",
            ctx.metrics.deficit_calories
        ));
    } else if ctx.metrics.surplus_calories > 0 {
        text.push_str(&format!(
            " The surplus of {} kcal per day can be stored or shared.",
            ctx.metrics.surplus_calories
        ));
    }

    text
}

fn template_timeline(ctx: &PlanContext<'_>) -> String {
    let weeks: Vec<u32> = ctx
        .planted_crops
        .iter()
        .filter_map(|p| ctx.catalog.lookup(&p.crop_id))
        .map(|c| c.growing_time_weeks)
        .collect();

    match (weeks.iter().min(), weeks.iter().max()) {
        (Some(first), Some(last)) if first == last => {
            format!("Sow in spring. Harvest after about {} weeks.", first)
        }
        (Some(first), Some(last)) => format!(
            "Sow in spring. First harvests after about {} weeks, \
             the last crops are ready after about {} weeks.",
            first, last
        ),
        _ => "No crops selected yet. Choose crops to build a growing timeline.".to_string(),
    }
}

fn template_next_steps(ctx: &PlanContext<'_>) -> Vec<String> {
    let mut steps = Vec::new();

    if ctx.planted_crops.is_empty() {
        steps.push("Select crops suited to your garden".to_string());
    } else {
        steps.push(format!(
            "Prepare {:.1} m² of growing beds",
            ctx.production.total_area_m2
        ));
        steps.push(format!(
            "Buy seed and plants for about {:.0} SEK",
            ctx.production.total_cost_sek
        ));
    }

    if !ctx.grocery_gap.is_empty() {
        steps.push(format!(
            "Build a staple store for about {:.0} SEK per week",
            ctx.grocery_cost.weekly_sek
        ));
    }

    steps.push("Review the plan after the first harvest".to_string());
    steps
}

fn template_recommendations(ctx: &PlanContext<'_>) -> Vec<String> {
    let mut recs = Vec::new();

    for warning in &ctx.production.warnings {
        match warning {
            ProductionWarning::UnknownCrop { crop_id } => {
                recs.push(format!("Remove unknown crop '{}' from the plan", crop_id));
            }
        }
    }

    let used: f64 = ctx.planted_crops.iter().map(|p| p.area_m2).sum();
    if used > ctx.constraints.garden_size_m2 {
        recs.push(format!(
            "Planted area exceeds the garden by {:.1} m²; reduce plant counts",
            used - ctx.constraints.garden_size_m2
        ));
    }

    if ctx.metrics.has_deficit() {
        let mut candidates: Vec<_> = ctx
            .catalog
            .list()
            .into_iter()
            .filter(|c| c.crisis_priority == Rating::High)
            .filter(|c| {
                !ctx.planted_crops
                    .iter()
                    .any(|p| p.crop_id.eq_ignore_ascii_case(&c.id))
            })
            .collect();
        candidates.sort_by(|a, b| {
            b.calories_per_100g
                .partial_cmp(&a.calories_per_100g)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        let names: Vec<&str> = candidates
            .iter()
            .take(SUGGESTED_CROP_COUNT)
            .map(|c| c.name.as_str())
            .collect();
        if !names.is_empty() {
            recs.push(format!(
                "Consider calorie-dense crisis crops such as {}",
                names.join(", ")
            ));
        }
    }

    let perishable = ctx
        .planted_crops
        .iter()
        .filter_map(|p| ctx.catalog.lookup(&p.crop_id))
        .filter(|c| c.storage_weeks <= PERISHABLE_STORAGE_WEEKS);
    for crop in perishable {
        recs.push(format!(
            "Preserve {} soon after harvest; it keeps for about {} week(s)",
            crop.name, crop.storage_weeks
        ));
    }

    recs
}
