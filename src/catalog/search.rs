use std::cmp::Ordering;
use std::sync::Arc;

use strsim::jaro_winkler;

use crate::models::FoodItem;
use crate::solver::constants::FUZZY_MATCH_THRESHOLD;

/// Score given to a description that contains the query verbatim.
const SUBSTRING_MATCH_SCORE: f64 = 0.9;

/// A catalog item matching a search query.
#[derive(Debug, Clone)]
pub struct SearchMatch {
    pub food: Arc<FoodItem>,
    /// Similarity in `(FUZZY_MATCH_THRESHOLD, 1.0]`; 1.0 is an exact match.
    pub score: f64,
}

fn match_score(description: &str, query: &str) -> f64 {
    if description == query {
        return 1.0;
    }

    let fuzzy = jaro_winkler(description, query);
    if description.contains(query) {
        fuzzy.max(SUBSTRING_MATCH_SCORE)
    } else {
        fuzzy
    }
}

/// Find foods whose description matches `query` (case-insensitive).
///
/// Exact matches come first, then substring and Jaro-Winkler matches above
/// [`FUZZY_MATCH_THRESHOLD`]. Equal scores keep catalog order. At most
/// `limit` matches are returned.
pub fn search_foods(foods: &[Arc<FoodItem>], query: &str, limit: usize) -> Vec<SearchMatch> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<SearchMatch> = foods
        .iter()
        .filter_map(|food| {
            let score = match_score(&food.description().to_lowercase(), &query);
            (score > FUZZY_MATCH_THRESHOLD).then(|| SearchMatch {
                food: Arc::clone(food),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodVector;

    fn sample_foods() -> FoodVector {
        vec![
            FoodItem::shared("refried spicy beans", 6.0, 200.0).unwrap(),
            FoodItem::shared("Pasta", 4.0, 5.0).unwrap(),
            FoodItem::shared("corn", 10.0, 20.0).unwrap(),
            FoodItem::shared("Idaho bread", 3.0, 100.0).unwrap(),
        ]
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let matches = search_foods(&sample_foods(), "PASTA", 5);
        assert_eq!(matches[0].food.description(), "Pasta");
        assert_eq!(matches[0].score, 1.0);
    }

    #[test]
    fn test_fuzzy_match_typo() {
        let matches = search_foods(&sample_foods(), "pasat", 5);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].food.description(), "Pasta");
        assert!(matches[0].score < 1.0);
    }

    #[test]
    fn test_substring_match() {
        let matches = search_foods(&sample_foods(), "bread", 5);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].food.description(), "Idaho bread");
    }

    #[test]
    fn test_no_match() {
        assert!(search_foods(&sample_foods(), "xylophone", 5).is_empty());
        assert!(search_foods(&sample_foods(), "   ", 5).is_empty());
    }

    #[test]
    fn test_limit() {
        let foods = vec![
            FoodItem::shared("corn", 1.0, 1.0).unwrap(),
            FoodItem::shared("corn", 2.0, 2.0).unwrap(),
            FoodItem::shared("corn", 3.0, 3.0).unwrap(),
        ];
        let matches = search_foods(&foods, "corn", 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].food.weight(), 1.0);
        assert_eq!(matches[1].food.weight(), 2.0);
    }
}
