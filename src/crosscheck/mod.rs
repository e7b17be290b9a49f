pub mod evaluation;
pub mod generate;
pub mod output;
pub mod runner;

pub use evaluation::{evaluate_instance, CrosscheckSummary, InstanceResult};
pub use generate::{Instance, InstanceRanges};
pub use output::{print_failures, print_summary, write_csv, write_summary_json};
pub use runner::{run_crosscheck, CrosscheckConfig, CrosscheckResults};
