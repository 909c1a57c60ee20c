use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{
    ActivityLevel, CropDefinition, CultivationIntensity, GardenConstraints, HouseholdProfile,
    PlanSnapshot, PlantedCrop,
};
use crate::planner::{get_suggested_plant_count, scaled_planting, ReferenceCropCatalog};

/// Prompt for a non-negative whole number.
pub fn prompt_count(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a whole number", input)))
}

/// Prompt for the household's activity level.
pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();

    let selection = Select::new()
        .with_prompt("How physically active is the household?")
        .items(&options)
        .default(2) // moderate
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .copied()
        .unwrap_or_default())
}

/// Prompt for household composition.
pub fn prompt_household() -> Result<HouseholdProfile> {
    let adults = prompt_count("How many adults live in the household?", 2)?;
    let children = prompt_count("How many children?", 0)?;
    let elderly = prompt_count("How many elderly?", 0)?;
    let activity_level = prompt_activity_level()?;

    Ok(HouseholdProfile::new(adults, children, elderly, activity_level))
}

/// Prompt for garden size and cultivation intensity.
pub fn prompt_garden() -> Result<GardenConstraints> {
    let input: String = Input::new()
        .with_prompt("How large is the garden in m²?")
        .default("50".to_string())
        .interact_text()?;

    let garden_size_m2: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if garden_size_m2 <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Garden size must be greater than 0".to_string(),
        ));
    }

    let options = ["low", "medium", "high"];
    let selection = Select::new()
        .with_prompt("Cultivation intensity")
        .items(&options[..])
        .default(1)
        .interact()?;

    let intensity = match selection {
        0 => CultivationIntensity::Low,
        2 => CultivationIntensity::High,
        _ => CultivationIntensity::Medium,
    };

    Ok(GardenConstraints::new(garden_size_m2, intensity))
}

/// Resolve a typed crop name, asking the user when the match is fuzzy.
fn resolve_crop<'c>(
    catalog: &'c ReferenceCropCatalog,
    input: &str,
) -> Result<Option<&'c CropDefinition>> {
    let candidates = catalog.find_by_name(input);

    let exact = candidates.first().filter(|c| {
        c.id.eq_ignore_ascii_case(input.trim()) || c.name.eq_ignore_ascii_case(input.trim())
    });
    if let Some(crop) = exact {
        return Ok(Some(*crop));
    }

    match candidates.len() {
        0 => {
            println!("No matching crop found for '{}'", input);
            Ok(None)
        }
        1 => {
            let crop = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", crop.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(crop))
        }
        _ => {
            let shown: Vec<&CropDefinition> = candidates.into_iter().take(5).collect();
            let mut options: Vec<String> = shown.iter().map(|c| c.name.clone()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(shown.get(selection).copied())
        }
    }
}

/// Prompt for crops to plant, with quantities defaulting to the suggested count.
pub fn prompt_crop_selection(
    catalog: &ReferenceCropCatalog,
    household_size: u32,
) -> Result<Vec<PlantedCrop>> {
    let mut planted: Vec<PlantedCrop> = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a crop to plant (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            break;
        }

        let Some(crop) = resolve_crop(catalog, &input)? else {
            continue;
        };

        let suggested = get_suggested_plant_count(&crop.id, household_size);
        let count = prompt_count(&format!("How many {} plants?", crop.name), suggested)?;
        if count == 0 {
            println!("Skipped {}", crop.name);
            continue;
        }
        let harvests = prompt_count("Harvests per year?", 1)?.max(1);

        let entry = scaled_planting(crop, count, harvests);
        println!("Added: {} x {} ({:.1} m²)", count, crop.name, entry.area_m2);

        planted.retain(|p| p.crop_id != entry.crop_id);
        planted.push(entry);
    }

    Ok(planted)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full planning snapshot interactively.
pub fn collect_snapshot(catalog: &ReferenceCropCatalog) -> Result<PlanSnapshot> {
    let profile = prompt_household()?;
    let constraints = prompt_garden()?;
    let planted_crops = prompt_crop_selection(catalog, profile.size())?;

    Ok(PlanSnapshot::new(profile, constraints, planted_crops))
}
