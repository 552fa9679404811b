//! Fitness evaluation with budget-overflow penalty.

use super::types::Chromosome;
use crate::catalog::Catalog;

/// Default floor-area budget in square meters.
pub const DEFAULT_AREA_BUDGET: f64 = 50.0;

/// Penalty applied per unit of area over budget.
///
/// Large enough that any feasible allocation outscores any infeasible one
/// at realistic profit/area magnitudes.
pub const PENALTY_COEFFICIENT: f64 = 1000.0;

/// Scores allocations: plain profit when the area budget holds, linearly
/// penalized profit when it is exceeded.
///
/// Evaluation is a pure function of the chromosome and catalog, with no
/// side effects, so it can be called in any order without affecting
/// reproducibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessEvaluator {
    area_budget: f64,
    penalty: f64,
}

impl Default for FitnessEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_AREA_BUDGET)
    }
}

impl FitnessEvaluator {
    /// Creates an evaluator with the given area budget and the standard
    /// penalty coefficient.
    pub fn new(area_budget: f64) -> Self {
        Self {
            area_budget,
            penalty: PENALTY_COEFFICIENT,
        }
    }

    /// The area budget this evaluator enforces.
    pub fn area_budget(&self) -> f64 {
        self.area_budget
    }

    /// Computes the fitness of `chromosome` against `catalog`.
    ///
    /// Within budget the fitness equals the profit exactly; over budget it
    /// is `profit - PENALTY_COEFFICIENT * (area - budget)`, which can go
    /// negative.
    pub fn evaluate(&self, chromosome: &Chromosome, catalog: &Catalog) -> f64 {
        let area = chromosome.total_area(catalog);
        let profit = chromosome.total_profit(catalog);

        if area <= self.area_budget {
            profit
        } else {
            profit - self.penalty * (area - self.area_budget)
        }
    }
}
