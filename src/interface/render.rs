use crate::models::{CropDefinition, CultivationPlan, GardenUsage, PlanStats};
use crate::planner::{get_suggested_plant_count, get_suggested_space_and_cost};

/// Display a plan with its production breakdown and grocery gap.
pub fn display_plan(plan: &CultivationPlan, stats: &PlanStats, usage: &GardenUsage) {
    println!();
    println!("=== {} ===", plan.title);
    if plan.basic {
        println!("(basic plan)");
    }
    println!();
    println!("{}", plan.description);
    println!();

    let production = &stats.production;
    if production.crops.is_empty() {
        println!("No crops planted.");
    } else {
        let max_name_len = production
            .crops
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(10);

        for (i, crop) in production.crops.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} - {:>8.1} kg | {:>10.0} kcal | {:>6.1} m² | {:>7.0} SEK",
                i + 1,
                crop.name,
                crop.annual_harvest_weight_kg,
                crop.annual_calories,
                crop.area_m2,
                crop.cost_sek,
                width = max_name_len
            );
        }
    }

    for warning in &production.warnings {
        println!("  ! {}", warning);
    }

    println!();
    println!("--- Summary ---");
    println!("Daily need: {} kcal", stats.need.daily_calories);
    println!("Daily production: {} kcal", production.daily_calories);
    println!(
        "Self-sufficiency: {}% ({} priority)",
        plan.self_sufficiency_percent,
        plan.priority.label()
    );
    if stats.metrics.deficit_calories > 0 {
        println!("Deficit: {} kcal/day", stats.metrics.deficit_calories);
    } else if stats.metrics.surplus_calories > 0 {
        println!("Surplus: {} kcal/day", stats.metrics.surplus_calories);
    }
    println!(
        "Protein coverage: {:.0}% | Fiber coverage: {:.0}%",
        stats.coverage.protein_percent, stats.coverage.fiber_percent
    );
    println!(
        "Garden: {:.1} of {:.1} m² used{}",
        usage.used_m2,
        usage.available_m2,
        if usage.over_capacity { " (over capacity)" } else { "" }
    );
    println!(
        "Estimated annual cost: {:.0} SEK (crops + standard staples)",
        plan.estimated_cost
    );

    if !plan.grocery_gap.is_empty() {
        println!();
        println!("--- Grocery gap ---");
        for item in &plan.grocery_gap {
            println!(
                "  {} ({:?}, {:?}) - {:.0} SEK/kg",
                item.name, item.category, item.priority, item.cost_per_kg
            );
        }
        if plan.grocery_gap != stats.grocery_gap {
            let standard: Vec<&str> = stats.grocery_gap.iter().map(|i| i.name.as_str()).collect();
            println!("Standard staples: {}", standard.join(", "));
        }
        println!(
            "Standard staple cost: {:.0} SEK/week | {:.0} SEK/year",
            stats.grocery_cost.weekly_sek, stats.grocery_cost.annual_sek
        );
    }

    println!();
    println!("Timeline: {}", plan.timeline);

    if !plan.next_steps.is_empty() {
        println!();
        println!("Next steps:");
        for step in &plan.next_steps {
            println!("  - {}", step);
        }
    }

    if !plan.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for rec in &plan.recommendations {
            println!("  - {}", rec);
        }
    }

    println!();
    println!("Plan id: {}", plan.id);
    println!();
}

/// Display the crop catalog.
pub fn display_catalog(crops: &[&CropDefinition]) {
    if crops.is_empty() {
        println!("Crop catalog: (none)");
        return;
    }

    println!();
    println!("=== Crop catalog ({} crops) ===", crops.len());
    println!();

    for crop in crops {
        println!(
            "  {:<12} {:<18} {:>4.0} kcal/100g, {:>5.0} kg/100 plants, stores {:>2} wk, {:?} priority, {:.1} SEK/plant",
            crop.id,
            crop.name,
            crop.calories_per_100g,
            crop.harvest_weight_kg_per_100_plants,
            crop.storage_weeks,
            crop.crisis_priority,
            crop.cost_per_plant_sek
        );
    }

    println!();
}

/// Display suggested plant counts, areas and costs for a household.
pub fn display_suggestions(crops: &[&CropDefinition], household_size: u32) {
    println!();
    println!("=== Suggested plantings for {} people ===", household_size);
    println!();

    let mut total_space = 0.0;
    let mut total_cost = 0.0;
    for crop in crops {
        let count = get_suggested_plant_count(&crop.id, household_size);
        let sc = get_suggested_space_and_cost(crop, household_size);
        total_space += sc.space_m2;
        total_cost += sc.cost_sek;

        println!(
            "  {:<18} {:>5} plants | {:>6.1} m² | {:>6.0} SEK",
            crop.name,
            count,
            sc.display_space_m2(),
            sc.display_cost_sek()
        );
    }

    println!();
    println!("Total: {:.1} m², {:.0} SEK", total_space, total_cost);
    println!();
}
