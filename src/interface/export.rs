use std::path::Path;

use crate::error::Result;
use crate::models::{CropProduction, GroceryGapItem};

/// Write the per-crop production breakdown as CSV.
pub fn write_production_csv<P: AsRef<Path>>(path: P, crops: &[CropProduction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "crop_id",
        "name",
        "harvest_kg",
        "calories",
        "cost_sek",
        "area_m2",
        "protein_g",
    ])?;

    for crop in crops {
        wtr.write_record([
            crop.crop_id.clone(),
            crop.name.clone(),
            format!("{:.2}", crop.annual_harvest_weight_kg),
            format!("{:.0}", crop.annual_calories),
            format!("{:.2}", crop.cost_sek),
            format!("{:.2}", crop.area_m2),
            format!("{:.0}", crop.protein_g),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the grocery gap as CSV.
pub fn write_grocery_csv<P: AsRef<Path>>(path: P, items: &[GroceryGapItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "name",
        "category",
        "calories_per_100g_or_kg",
        "cost_per_kg",
        "priority",
        "source",
    ])?;

    for item in items {
        wtr.write_record([
            item.name.clone(),
            format!("{:?}", item.category).to_lowercase(),
            format!("{:.0}", item.calories_per_100g_or_kg),
            format!("{:.2}", item.cost_per_kg),
            format!("{:?}", item.priority).to_lowercase(),
            format!("{:?}", item.source).to_lowercase(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
