use std::io::Write;

use max_calorie_rs::catalog::{load_food_database, search_foods};
use max_calorie_rs::solver::{filter_food_vector, sum_food_vector, Algorithm};
use max_calorie_rs::CalorieError;
use tempfile::NamedTempFile;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/food_sample.csv");

#[test]
fn test_load_fixture_skips_malformed_rows() {
    let foods = load_food_database(FIXTURE).unwrap();

    assert_eq!(foods.len(), 21);
    assert_eq!(foods[0].description(), "refried spicy beans");
    assert_eq!(foods[20].description(), "baked potato");
    assert!(foods.iter().all(|f| !f.description().is_empty()));
    assert!(foods.iter().all(|f| f.weight() > 0.0));
    assert!(!foods.iter().any(|f| f.description() == "broken weight"));
}

#[test]
fn test_missing_database_is_distinct_from_usage_errors() {
    let err = load_food_database("/nonexistent/food.csv").unwrap_err();
    assert!(matches!(err, CalorieError::Io(_)));
    assert!(!err.is_usage_error());
}

#[test]
fn test_pipeline_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "description^weight_ounces^calories").unwrap();
    writeln!(file, "test whole corn^10^20").unwrap();
    writeln!(file, "not enough fields").unwrap();
    writeln!(file, "test pasta^4^5").unwrap();
    writeln!(file, "ice cubes^3^0").unwrap();

    let foods = load_food_database(file.path()).unwrap();
    assert_eq!(foods.len(), 3);

    let filtered = filter_food_vector(&foods, 1.0, 2500.0, foods.len()).unwrap();
    assert_eq!(filtered.len(), 2);

    let report = Algorithm::Dynamic.run(&filtered, 14.0).unwrap();
    assert_eq!(report.items.len(), 2);
    assert_eq!(report.totals, sum_food_vector(&filtered));
}

#[test]
fn test_search_fixture() {
    let foods = load_food_database(FIXTURE).unwrap();

    let matches = search_foods(&foods, "chedar crackers", 3);
    assert_eq!(matches[0].food.description(), "cheddar crackers");

    let matches = search_foods(&foods, "bread", 3);
    assert_eq!(matches[0].food.description(), "Idaho bread");
}
