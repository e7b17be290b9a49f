use serde::Serialize;

use crate::crosscheck::generate::Instance;
use crate::error::Result;
use crate::solver::constants::CALORIE_TOLERANCE;
use crate::solver::Algorithm;

/// Both solvers' outcome on one instance.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceResult {
    pub index: usize,
    pub items: usize,
    pub capacity: f64,
    pub exhaustive_calories: f64,
    pub exhaustive_weight: f64,
    pub exhaustive_ms: f64,
    pub dynamic_calories: f64,
    pub dynamic_weight: f64,
    pub dynamic_ms: f64,
}

impl InstanceResult {
    /// Whether both solvers reached the same calorie total.
    pub fn agrees(&self) -> bool {
        (self.exhaustive_calories - self.dynamic_calories).abs() <= CALORIE_TOLERANCE
    }

    /// Whether both solutions fit the capacity.
    pub fn feasible(&self) -> bool {
        self.exhaustive_weight <= self.capacity && self.dynamic_weight <= self.capacity
    }

    pub fn passed(&self) -> bool {
        self.agrees() && self.feasible()
    }
}

/// Run both solvers on an instance.
pub fn evaluate_instance(index: usize, instance: &Instance) -> Result<InstanceResult> {
    let exhaustive = Algorithm::Exhaustive.run(&instance.foods, instance.capacity)?;
    let dynamic = Algorithm::Dynamic.run(&instance.foods, instance.capacity)?;

    Ok(InstanceResult {
        index,
        items: instance.foods.len(),
        capacity: instance.capacity,
        exhaustive_calories: exhaustive.totals.calories,
        exhaustive_weight: exhaustive.totals.weight,
        exhaustive_ms: exhaustive.elapsed_ms,
        dynamic_calories: dynamic.totals.calories,
        dynamic_weight: dynamic.totals.weight,
        dynamic_ms: dynamic.elapsed_ms,
    })
}

/// Aggregate figures across a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrosscheckSummary {
    pub instances: usize,
    pub disagreements: usize,
    pub infeasible: usize,
    pub max_items: usize,
    pub total_exhaustive_ms: f64,
    pub total_dynamic_ms: f64,
}

impl CrosscheckSummary {
    pub fn from_results(results: &[InstanceResult]) -> Self {
        results.iter().fold(Self::default(), |mut s, r| {
            s.instances += 1;
            s.disagreements += usize::from(!r.agrees());
            s.infeasible += usize::from(!r.feasible());
            s.max_items = s.max_items.max(r.items);
            s.total_exhaustive_ms += r.exhaustive_ms;
            s.total_dynamic_ms += r.dynamic_ms;
            s
        })
    }

    pub fn all_passed(&self) -> bool {
        self.disagreements == 0 && self.infeasible == 0
    }

    /// How many times slower exhaustive search was than dynamic programming.
    pub fn speedup(&self) -> f64 {
        if self.total_dynamic_ms > 0.0 {
            self.total_exhaustive_ms / self.total_dynamic_ms
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    fn trivial_instance(capacity: f64) -> Instance {
        Instance {
            foods: vec![
                FoodItem::shared("test whole corn", 10.0, 20.0).unwrap(),
                FoodItem::shared("test pasta", 4.0, 5.0).unwrap(),
            ],
            capacity,
        }
    }

    fn result(exhaustive_calories: f64, dynamic_calories: f64, dynamic_weight: f64) -> InstanceResult {
        InstanceResult {
            index: 0,
            items: 3,
            capacity: 10.0,
            exhaustive_calories,
            exhaustive_weight: 10.0,
            exhaustive_ms: 2.0,
            dynamic_calories,
            dynamic_weight,
            dynamic_ms: 1.0,
        }
    }

    #[test]
    fn test_evaluate_trivial_instance() {
        let r = evaluate_instance(3, &trivial_instance(14.0)).unwrap();
        assert_eq!(r.index, 3);
        assert_eq!(r.items, 2);
        assert!((r.exhaustive_calories - 25.0).abs() < 0.001);
        assert!((r.dynamic_calories - 25.0).abs() < 0.001);
        assert!(r.passed());
    }

    #[test]
    fn test_detects_disagreement_and_infeasibility() {
        assert!(result(20.0, 20.0, 10.0).passed());
        assert!(!result(20.0, 19.0, 10.0).agrees());
        assert!(!result(20.0, 20.0, 11.0).feasible());
    }

    #[test]
    fn test_summary() {
        let results = vec![
            result(20.0, 20.0, 10.0),
            result(20.0, 19.0, 10.0),
            result(20.0, 20.0, 11.0),
        ];
        let summary = CrosscheckSummary::from_results(&results);
        assert_eq!(summary.instances, 3);
        assert_eq!(summary.disagreements, 1);
        assert_eq!(summary.infeasible, 1);
        assert_eq!(summary.max_items, 3);
        assert!(!summary.all_passed());
        assert!((summary.speedup() - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_summary_passes() {
        let summary = CrosscheckSummary::from_results(&[]);
        assert!(summary.all_passed());
        assert_eq!(summary.speedup(), 0.0);
    }
}
