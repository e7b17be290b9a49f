use std::path::PathBuf;

use clap::Parser;

use max_calorie_rs::crosscheck::{
    print_failures, print_summary, run_crosscheck, write_csv, write_summary_json,
    CrosscheckConfig, InstanceRanges,
};
use max_calorie_rs::logging::setup_logging;

#[derive(Parser, Debug)]
#[command(name = "crosscheck")]
#[command(about = "Check that exhaustive search and dynamic programming agree on random instances")]
struct Args {
    /// Number of random instances
    #[arg(long, default_value = "200")]
    instances: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Fewest foods per instance
    #[arg(long, default_value = "1")]
    min_items: usize,

    /// Most foods per instance (below 64)
    #[arg(long, default_value = "16")]
    max_items: usize,

    /// Heaviest food in whole ounces
    #[arg(long, default_value = "40")]
    max_weight: u32,

    /// Output CSV file for all instances
    #[arg(long, default_value = "crosscheck_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "crosscheck_summary.json")]
    json: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose, false);

    let config = CrosscheckConfig {
        instances: args.instances,
        seed: args.seed,
        ranges: InstanceRanges {
            items: (args.min_items, args.max_items),
            weight: (1, args.max_weight),
            ..Default::default()
        },
        progress: true,
    };

    println!(
        "Checking {} instances of {}..={} foods (seed {})",
        config.instances, args.min_items, args.max_items, config.seed
    );

    let run = match run_crosscheck(&config) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_summary(&run.summary);
    print_failures(run.failures());

    if let Err(e) = write_csv(&run.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all results to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&run.summary, config.seed, &run.results, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }

    if !run.summary.all_passed() {
        std::process::exit(2);
    }
}
