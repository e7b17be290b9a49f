use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::crosscheck::evaluation::{CrosscheckSummary, InstanceResult};
use crate::error::Result;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write every instance result to a CSV file.
pub fn write_csv(results: &[InstanceResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "instance",
        "items",
        "capacity",
        "exhaustive_calories",
        "exhaustive_weight",
        "exhaustive_ms",
        "dynamic_calories",
        "dynamic_weight",
        "dynamic_ms",
        "agrees",
        "feasible",
    ])?;

    for r in results {
        wtr.write_record([
            r.index.to_string(),
            r.items.to_string(),
            format!("{:.0}", r.capacity),
            format!("{:.2}", r.exhaustive_calories),
            format!("{:.2}", r.exhaustive_weight),
            format!("{:.3}", r.exhaustive_ms),
            format!("{:.2}", r.dynamic_calories),
            format!("{:.2}", r.dynamic_weight),
            format!("{:.3}", r.dynamic_ms),
            r.agrees().to_string(),
            r.feasible().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the run summary and any failing instances to a JSON file.
pub fn write_summary_json(
    summary: &CrosscheckSummary,
    seed: u64,
    results: &[InstanceResult],
    path: &Path,
) -> Result<()> {
    let failures: Vec<&InstanceResult> = results.iter().filter(|r| !r.passed()).collect();

    let json = serde_json::json!({
        "seed": seed,
        "summary": {
            "instances": summary.instances,
            "disagreements": summary.disagreements,
            "infeasible": summary.infeasible,
            "max_items": summary.max_items,
            "total_exhaustive_ms": truncate(summary.total_exhaustive_ms, 3),
            "total_dynamic_ms": truncate(summary.total_dynamic_ms, 3),
            "speedup": truncate(summary.speedup(), 2),
        },
        "failures": failures,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the run summary to stdout.
pub fn print_summary(summary: &CrosscheckSummary) {
    println!("\n=== Cross-check Summary ===\n");
    println!("Instances:      {}", summary.instances);
    println!("Largest:        {} items", summary.max_items);
    println!("Disagreements:  {}", summary.disagreements);
    println!("Infeasible:     {}", summary.infeasible);
    println!(
        "Time:           exhaustive {:.2} ms, dynamic {:.2} ms ({:.1}x)",
        summary.total_exhaustive_ms,
        summary.total_dynamic_ms,
        summary.speedup()
    );
    println!();
}

/// Print each failing instance.
pub fn print_failures<'a>(failures: impl Iterator<Item = &'a InstanceResult>) {
    for r in failures {
        println!(
            "#{}: {} items, capacity {:.0}: exhaustive {:.2} cal / {:.2} oz, dynamic {:.2} cal / {:.2} oz",
            r.index,
            r.items,
            r.capacity,
            r.exhaustive_calories,
            r.exhaustive_weight,
            r.dynamic_calories,
            r.dynamic_weight
        );
    }
}
