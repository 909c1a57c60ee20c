pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_grocery_csv, write_production_csv};
pub use prompts::{
    collect_snapshot, prompt_activity_level, prompt_count, prompt_crop_selection, prompt_garden,
    prompt_household, prompt_yes_no,
};
pub use render::{display_catalog, display_plan, display_suggestions};
