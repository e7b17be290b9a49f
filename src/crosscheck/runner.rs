use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::crosscheck::evaluation::{evaluate_instance, CrosscheckSummary, InstanceResult};
use crate::crosscheck::generate::{Instance, InstanceRanges};
use crate::error::Result;

/// Configuration for a cross-check run.
#[derive(Debug, Clone)]
pub struct CrosscheckConfig {
    pub instances: usize,
    pub seed: u64,
    pub ranges: InstanceRanges,
    /// Print a progress line on stderr.
    pub progress: bool,
}

impl Default for CrosscheckConfig {
    fn default() -> Self {
        Self {
            instances: 200,
            seed: 123,
            ranges: InstanceRanges::default(),
            progress: true,
        }
    }
}

/// Results from a cross-check run.
pub struct CrosscheckResults {
    /// Per-instance results in generation order.
    pub results: Vec<InstanceResult>,
    pub summary: CrosscheckSummary,
}

impl CrosscheckResults {
    /// Instances where the solvers disagreed or a solution did not fit.
    pub fn failures(&self) -> impl Iterator<Item = &InstanceResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}

/// Generate seeded random instances and compare both solvers on each.
pub fn run_crosscheck(config: &CrosscheckConfig) -> Result<CrosscheckResults> {
    config.ranges.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(config.instances);

    for i in 0..config.instances {
        let instance = Instance::random(&mut rng, &config.ranges, i)?;
        let result = evaluate_instance(i, &instance)?;

        debug!(
            instance = i,
            items = result.items,
            capacity = result.capacity,
            exhaustive = result.exhaustive_calories,
            dynamic = result.dynamic_calories,
            "instance evaluated"
        );
        if !result.passed() {
            warn!(
                instance = i,
                exhaustive = result.exhaustive_calories,
                dynamic = result.dynamic_calories,
                "solvers disagree or exceed capacity"
            );
        }

        results.push(result);

        // Progress indicator every 10%
        if config.progress && (i + 1) % (config.instances / 10).max(1) == 0 {
            let pct = ((i + 1) as f64 / config.instances as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    if config.progress {
        eprintln!();
    }

    let summary = CrosscheckSummary::from_results(&results);
    Ok(CrosscheckResults { results, summary })
}
