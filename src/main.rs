use clap::Parser;
use std::path::Path;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crisis_garden_rs::cli::{Cli, Command};
use crisis_garden_rs::error::Result;
use crisis_garden_rs::interface::{
    collect_snapshot, display_catalog, display_plan, display_suggestions, prompt_yes_no,
    write_grocery_csv, write_production_csv,
};
use crisis_garden_rs::models::PlanSnapshot;
use crisis_garden_rs::planner::{
    assess_garden, compute_stats, AdvisoryService, JsonFileAdvisory, ReferenceCropCatalog,
};
use crisis_garden_rs::state::{
    load_catalog, load_snapshot, save_snapshot, JsonDirStore, PlanStore, PlanningSession,
    SavedPlan,
};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("crisis_garden_rs={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => ReferenceCropCatalog::new(load_catalog(path)?),
        None => ReferenceCropCatalog::builtin(),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { advice } => cmd_plan(&cli.file, &cli.store, &catalog, advice.as_deref()),
        Command::Crops => {
            display_catalog(&catalog.list());
            Ok(())
        }
        Command::Suggest => cmd_suggest(&cli.file, &catalog),
        Command::Export { out_dir } => cmd_export(&cli.file, &catalog, &out_dir),
        Command::Show { id } => cmd_show(&cli.store, &catalog, id.as_deref()),
    }
}

/// Load the household file, or collect one interactively when it is missing.
fn load_or_collect(file_path: &str, catalog: &ReferenceCropCatalog) -> Result<PlanSnapshot> {
    let path = Path::new(file_path);
    if path.exists() {
        return load_snapshot(path);
    }

    println!("Household file not found: {}", file_path);
    println!("Let's describe the household and garden.");
    println!();

    let snapshot = collect_snapshot(catalog)?;
    if prompt_yes_no(&format!("Save household to {}?", file_path), true)? {
        save_snapshot(path, &snapshot)?;
        println!("Household saved.");
    }
    Ok(snapshot)
}

/// Compute, display and optionally store a plan.
fn cmd_plan(
    file_path: &str,
    store_dir: &str,
    catalog: &ReferenceCropCatalog,
    advice: Option<&str>,
) -> Result<()> {
    let snapshot = load_or_collect(file_path, catalog)?;
    let advisory = advice.map(JsonFileAdvisory::new);

    let mut session = PlanningSession::new(catalog, snapshot);
    session.generate(advisory.as_ref().map(|a| a as &dyn AdvisoryService));

    let snapshot = session.snapshot();
    let stats = session.stats();
    let usage = assess_garden(&snapshot.planted_crops, catalog, &snapshot.constraints);

    let Some(plan) = session.plan() else {
        return Ok(());
    };
    display_plan(plan, stats, &usage);

    if prompt_yes_no("Save this plan?", true)? {
        let store = JsonDirStore::new(store_dir);
        let id = store.save(&SavedPlan::new(snapshot, stats, plan))?;
        println!("Plan saved as {}.", id);
    }

    Ok(())
}

/// Show suggested quantities for every catalog crop.
fn cmd_suggest(file_path: &str, catalog: &ReferenceCropCatalog) -> Result<()> {
    let snapshot = load_or_collect(file_path, catalog)?;
    display_suggestions(&catalog.list(), snapshot.profile.size());
    Ok(())
}

/// Write production.csv and grocery.csv for the household.
fn cmd_export(file_path: &str, catalog: &ReferenceCropCatalog, out_dir: &str) -> Result<()> {
    let snapshot = load_or_collect(file_path, catalog)?;
    let stats = compute_stats(&snapshot, catalog);

    let dir = Path::new(out_dir);
    std::fs::create_dir_all(dir)?;
    write_production_csv(dir.join("production.csv"), &stats.production.crops)?;
    write_grocery_csv(dir.join("grocery.csv"), &stats.grocery_gap)?;

    println!(
        "Wrote {} crop rows and {} grocery rows to {}",
        stats.production.crops.len(),
        stats.grocery_gap.len(),
        dir.display()
    );
    Ok(())
}

/// Show a saved plan, or list saved plan ids.
fn cmd_show(store_dir: &str, catalog: &ReferenceCropCatalog, id: Option<&str>) -> Result<()> {
    let store = JsonDirStore::new(store_dir);

    let Some(id) = id else {
        let ids = store.list()?;
        if ids.is_empty() {
            println!("No saved plans in {}", store_dir);
        }
        for id in ids {
            println!("{}", id);
        }
        return Ok(());
    };

    let saved = store.load(id)?;
    let snapshot = saved.snapshot();
    let usage = assess_garden(&snapshot.planted_crops, catalog, &snapshot.constraints);
    display_plan(&saved.plan, &saved.stats, &usage);
    Ok(())
}
