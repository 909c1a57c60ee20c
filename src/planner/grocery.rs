use crate::models::{
    GroceryCategory, GroceryCost, GroceryGapItem, GroceryPriority, GrocerySource,
    SelfSufficiencyMetrics,
};
use crate::planner::constants::{GROCERY_WEEKLY_KG_PER_ITEM, WEEKS_PER_YEAR};

/// Staples bought to cover a caloric deficit, in display order.
#[rustfmt::skip]
const STAPLES: [(&str, GroceryCategory, f64, f64, GroceryPriority, GrocerySource); 6] = [
    ("Rice", GroceryCategory::Carbs, 360.0, 25.0, GroceryPriority::Essential, GrocerySource::Store),
    ("Pasta", GroceryCategory::Carbs, 350.0, 20.0, GroceryPriority::Essential, GrocerySource::Store),
    ("Red lentils", GroceryCategory::Protein, 340.0, 35.0, GroceryPriority::Essential, GrocerySource::Store),
    ("Rolled oats", GroceryCategory::Carbs, 370.0, 18.0, GroceryPriority::Important, GrocerySource::Store),
    ("Rapeseed oil", GroceryCategory::Fats, 880.0, 30.0, GroceryPriority::Important, GrocerySource::Store),
    ("Dried peas", GroceryCategory::Protein, 340.0, 28.0, GroceryPriority::Optional, GrocerySource::Both),
];

/// Deterministic grocery gap: the staple list when there is a deficit, else nothing.
pub fn generate(metrics: &SelfSufficiencyMetrics) -> Vec<GroceryGapItem> {
    if !metrics.has_deficit() {
        return Vec::new();
    }

    STAPLES
        .iter()
        .map(
            |&(name, category, calories, cost_per_kg, priority, source)| GroceryGapItem {
                name: name.to_string(),
                category,
                calories_per_100g_or_kg: calories,
                cost_per_kg,
                priority,
                source,
            },
        )
        .collect()
}

/// Weekly and annual cost of a grocery list at the assumed weekly quantity.
pub fn total_grocery_cost(items: &[GroceryGapItem]) -> GroceryCost {
    let weekly_sek: f64 = items
        .iter()
        .map(|item| item.cost_per_kg * GROCERY_WEEKLY_KG_PER_ITEM)
        .sum();

    GroceryCost {
        weekly_sek,
        annual_sek: weekly_sek * WEEKS_PER_YEAR,
    }
}
