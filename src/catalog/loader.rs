use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{error, info, warn};

use crate::error::{CalorieError, Result};
use crate::models::{FoodItem, FoodVector};
use crate::solver::constants::{FIELD_COUNT, FIELD_DELIMITER};

/// Load all valid food items from a `^`-delimited database file.
///
/// The first line is a header. Rows with the wrong field count or invalid
/// values are skipped with a warning. Failing to open the file is an error.
pub fn load_food_database<P: AsRef<Path>>(path: P) -> Result<FoodVector> {
    let path = path.as_ref();
    let file = File::open(path).inspect_err(|e| {
        error!(path = %path.display(), error = %e, "cannot open food database");
    })?;

    load_food_database_from_reader(file)
}

/// Load food items from any reader in the database format.
pub fn load_food_database_from_reader<R: Read>(reader: R) -> Result<FoodVector> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut foods = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        match parse_record(&record) {
            Ok(food) => foods.push(Arc::new(food)),
            Err(e) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, error = %e, "skipping malformed row");
                skipped += 1;
            }
        }
    }

    info!(loaded = foods.len(), skipped, "loaded food database");
    Ok(foods)
}

/// Parse one `description^weight^calories` row.
fn parse_record(record: &StringRecord) -> Result<FoodItem> {
    if record.len() != FIELD_COUNT {
        return Err(CalorieError::InvalidItem(format!(
            "want {} fields but got {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let weight = parse_number(&record[1], "weight")?;
    let calories = parse_number(&record[2], "calories")?;

    FoodItem::new(&record[0], weight, calories)
}

fn parse_number(field: &str, name: &str) -> Result<f64> {
    field
        .parse()
        .map_err(|_| CalorieError::InvalidItem(format!("invalid {}: '{}'", name, field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "description^weight_ounces^calories\n";

    fn load_str(body: &str) -> FoodVector {
        let data = format!("{}{}", HEADER, body);
        load_food_database_from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_loads_rows_in_order() {
        let foods = load_str("refried spicy beans^6^200\nIdaho bread^3.5^100\n");
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].description(), "refried spicy beans");
        assert_eq!(foods[1].description(), "Idaho bread");
        assert!((foods[1].weight() - 3.5).abs() < 0.001);
        assert!((foods[1].calories() - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_header_only() {
        assert!(load_str("").is_empty());
    }

    #[test]
    fn test_skips_wrong_field_count() {
        let foods = load_str("corn^10\npasta^4^5\nrice^1^2^3\n");
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].description(), "pasta");
    }

    #[test]
    fn test_skips_invalid_values() {
        let foods = load_str("corn^ten^20\n^4^5\nrock^0^1\npasta^4^5\nsoup^8^lots\n");
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].description(), "pasta");
    }

    #[test]
    fn test_trims_whitespace_and_keeps_quotes() {
        let foods = load_str("  \"Grandma's\" pie ^ 5 ^ 420 \n");
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].description(), "\"Grandma's\" pie");
        assert!((foods[0].weight() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}test whole corn^10^20\ntest pasta^4^5\n", HEADER).unwrap();

        let foods = load_food_database(file.path()).unwrap();
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].description(), "test whole corn");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_food_database(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, CalorieError::Io(_)));
        assert!(!err.is_usage_error());
    }
}
