use clap::Parser;
use tracing::{info, warn};

use max_calorie_rs::catalog::{load_food_database, search_foods};
use max_calorie_rs::cli::{Cli, Command, FilterArgs};
use max_calorie_rs::error::{CalorieError, Result};
use max_calorie_rs::interface::{
    display_food_vector, display_search_results, display_solution, prompt_algorithm,
    prompt_capacity, prompt_yes_no,
};
use max_calorie_rs::logging::setup_logging;
use max_calorie_rs::models::FoodVector;
use max_calorie_rs::solver::{
    check_table_limit, exhaustive_needs_confirmation, filter_food_vector, Algorithm,
    CALORIE_TOLERANCE, MAX_EXHAUSTIVE_ITEMS,
};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Solve {
            algorithm,
            capacity,
            filter,
            json,
            yes,
        } => cmd_solve(&cli.file, algorithm, capacity, &filter, json, yes),
        Command::Compare {
            capacity,
            filter,
            yes,
        } => cmd_compare(&cli.file, capacity, &filter, yes),
        Command::List { filter } => cmd_list(&cli.file, &filter),
        Command::Search { query, top } => cmd_search(&cli.file, &query, top),
    }
}

/// Load the catalog and apply the calorie-range and count filter.
fn load_filtered(file_path: &str, filter: &FilterArgs) -> Result<FoodVector> {
    let foods = load_food_database(file_path)?;
    if foods.is_empty() {
        return Err(CalorieError::EmptyCatalog);
    }

    let limit = filter.limit.unwrap_or(foods.len());
    let filtered = filter_food_vector(&foods, filter.min_calories, filter.max_calories, limit)?;
    info!(
        loaded = foods.len(),
        filtered = filtered.len(),
        "catalog ready"
    );

    Ok(filtered)
}

/// Solve with one algorithm and report the result.
fn cmd_solve(
    file_path: &str,
    algorithm: Option<Algorithm>,
    capacity: Option<f64>,
    filter: &FilterArgs,
    json: bool,
    yes: bool,
) -> Result<()> {
    let foods = load_filtered(file_path, filter)?;

    let algorithm = match algorithm {
        Some(a) => a,
        None => prompt_algorithm()?,
    };
    let capacity = match capacity {
        Some(c) => c,
        None => prompt_capacity()?,
    };

    match algorithm {
        Algorithm::Exhaustive => {
            if !confirm_exhaustive(foods.len(), yes)? {
                return Ok(());
            }
        }
        Algorithm::Dynamic => check_table_limit(&foods, capacity)?,
    }

    let report = algorithm.run(&foods, capacity)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_solution(&report);
    }

    Ok(())
}

/// Refuse exhaustive searches that cannot run and ask before long ones.
///
/// Returns `false` when the user declines.
fn confirm_exhaustive(items: usize, yes: bool) -> Result<bool> {
    if items >= MAX_EXHAUSTIVE_ITEMS {
        return Err(CalorieError::TooManyItems {
            count: items,
            max: MAX_EXHAUSTIVE_ITEMS,
        });
    }
    if yes || !exhaustive_needs_confirmation(items) {
        return Ok(true);
    }

    let proceed = prompt_yes_no(
        &format!(
            "Exhaustive search over {} foods checks 2^{} subsets. Continue?",
            items, items
        ),
        false,
    )?;
    if !proceed {
        println!("Aborted. Use --limit to search fewer foods.");
    }
    Ok(proceed)
}

/// Run both algorithms on the same foods and compare calorie totals.
fn cmd_compare(file_path: &str, capacity: f64, filter: &FilterArgs, yes: bool) -> Result<()> {
    let foods = load_filtered(file_path, filter)?;
    check_table_limit(&foods, capacity)?;
    if !confirm_exhaustive(foods.len(), yes)? {
        return Ok(());
    }

    let exhaustive = Algorithm::Exhaustive.run(&foods, capacity)?;
    let dynamic = Algorithm::Dynamic.run(&foods, capacity)?;

    display_solution(&exhaustive);
    display_solution(&dynamic);

    let gap = (exhaustive.totals.calories - dynamic.totals.calories).abs();
    if gap <= CALORIE_TOLERANCE {
        println!(
            "Both algorithms found {:.2} calories.",
            exhaustive.totals.calories
        );
    } else {
        warn!(
            exhaustive = exhaustive.totals.calories,
            dynamic = dynamic.totals.calories,
            "algorithms disagree"
        );
        println!(
            "Algorithms disagree by {:.2} calories (dynamic programming rounds capacity down and weights up to whole ounces).",
            gap
        );
    }

    Ok(())
}

/// Print the foods that pass the filter.
fn cmd_list(file_path: &str, filter: &FilterArgs) -> Result<()> {
    let foods = load_filtered(file_path, filter)?;
    display_food_vector(&foods, "Foods");
    Ok(())
}

/// Fuzzy lookup by description.
fn cmd_search(file_path: &str, query: &str, top: usize) -> Result<()> {
    let foods = load_food_database(file_path)?;
    let matches = search_foods(&foods, query, top);
    display_search_results(query, &matches);
    Ok(())
}
