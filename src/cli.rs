use clap::{Parser, Subcommand};

/// Crisis Garden — plan a home garden for household food self-sufficiency.
#[derive(Parser, Debug)]
#[command(name = "crisis_garden")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the household JSON file (profile, garden, planted crops).
    #[arg(short, long, default_value = "household.json")]
    pub file: String,

    /// Optional crop catalog JSON replacing the built-in reference data.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Directory where saved plans are stored.
    #[arg(long, default_value = "plans")]
    pub store: String,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a cultivation plan for the household.
    Plan {
        /// JSON file holding an advisory response to enrich the plan narrative.
        #[arg(long)]
        advice: Option<String>,
    },

    /// List the crop catalog.
    Crops,

    /// Show suggested plant counts, space and cost for the household.
    Suggest,

    /// Export the production breakdown and grocery gap as CSV.
    Export {
        /// Output directory for production.csv and grocery.csv.
        #[arg(long, default_value = ".")]
        out_dir: String,
    },

    /// Show a previously saved plan.
    Show {
        /// Plan id; lists saved plans when omitted.
        id: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { advice: None }
    }
}
