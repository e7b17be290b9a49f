use std::sync::Arc;

use crate::catalog::SearchMatch;
use crate::models::{FoodItem, SolutionReport, Totals};
use crate::solver::sum_food_vector;

fn format_food_line(index: usize, food: &FoodItem, width: usize) -> String {
    format!(
        "{:>3}. {:<width$} - {:>7.2} oz | {:>8.2} cal | {:>7.2} cal/oz",
        index + 1,
        food.description(),
        food.weight(),
        food.calories(),
        food.density(),
        width = width
    )
}

fn print_food_line(index: usize, food: &FoodItem, width: usize) {
    println!("{}", format_food_line(index, food, width));
}

fn print_totals(totals: &Totals) {
    println!("> Grand total weight: {:.2} ounces", totals.weight);
    println!("> Grand total calories: {:.2}", totals.calories);
}

/// Display each food in a collection followed by its totals.
pub fn display_food_vector(foods: &[Arc<FoodItem>], title: &str) {
    println!();
    println!("=== {} ({} items) ===", title, foods.len());

    if foods.is_empty() {
        println!("[empty food list]");
        println!();
        return;
    }

    println!();
    let width = foods
        .iter()
        .map(|f| f.description().len())
        .max()
        .unwrap_or(10);

    for (i, food) in foods.iter().enumerate() {
        print_food_line(i, food, width);
    }

    println!();
    print_totals(&sum_food_vector(foods));
    println!();
}

/// Display a solver run.
pub fn display_solution(report: &SolutionReport) {
    println!();
    println!(
        "=== {} solution (capacity {} oz, {} candidates) ===",
        report.algorithm, report.capacity, report.candidates
    );
    println!();

    if report.is_empty() {
        println!("[empty food list]");
    } else {
        let width = report
            .items
            .iter()
            .map(|f| f.description().len())
            .max()
            .unwrap_or(10);
        for (i, food) in report.items.iter().enumerate() {
            print_food_line(i, food, width);
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Items chosen: {}", report.items.len());
    print_totals(&report.totals);
    println!("Solved in {:.3} ms", report.elapsed_ms);
    println!();
}

/// Display fuzzy search results.
pub fn display_search_results(query: &str, matches: &[SearchMatch]) {
    if matches.is_empty() {
        println!("No food matching '{}'", query);
        return;
    }

    println!();
    println!("=== Matches for '{}' ===", query);
    println!();
    for m in matches {
        println!(
            "  [{:.2}] {} - {} oz, {} cal",
            m.score,
            m.food.description(),
            m.food.weight(),
            m.food.calories()
        );
    }
    println!();
}
