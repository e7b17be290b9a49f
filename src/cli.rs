use clap::{Args, Parser, Subcommand};

use crate::solver::constants::{DEFAULT_DATABASE_PATH, DEFAULT_SEARCH_RESULTS};
use crate::solver::Algorithm;

/// MaxCalorie: pick the foods that carry the most calories within a weight limit.
#[derive(Parser, Debug)]
#[command(name = "max_calorie")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the `^`-delimited food database.
    #[arg(short, long, global = true, default_value = DEFAULT_DATABASE_PATH)]
    pub file: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Calorie-range and count constraints applied before solving.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Skip foods with fewer calories than this.
    #[arg(long, default_value_t = 0.0)]
    pub min_calories: f64,

    /// Skip foods with more calories than this.
    #[arg(long, default_value_t = f64::INFINITY)]
    pub max_calories: f64,

    /// Keep at most this many foods (defaults to the whole catalog).
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose the foods with the most calories that fit the capacity.
    Solve {
        /// Solving strategy (prompted for when omitted).
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Maximum total weight in ounces (prompted for when omitted).
        #[arg(short, long)]
        capacity: Option<f64>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print the solution as JSON.
        #[arg(long)]
        json: bool,

        /// Do not ask before long exhaustive searches.
        #[arg(short, long)]
        yes: bool,
    },

    /// Run both algorithms and check that they agree.
    Compare {
        /// Maximum total weight in ounces.
        #[arg(short, long)]
        capacity: f64,

        #[command(flatten)]
        filter: FilterArgs,

        /// Do not ask before long exhaustive searches.
        #[arg(short, long)]
        yes: bool,
    },

    /// List the foods that pass the filter.
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Look up foods by description.
    Search {
        /// Text to look for.
        query: String,

        /// Number of matches to show.
        #[arg(long, default_value_t = DEFAULT_SEARCH_RESULTS)]
        top: usize,
    },
}
