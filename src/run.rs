//! One-call run orchestration.
//!
//! [`execute`] is the seam a serving layer calls for `POST /run`: validate
//! the configuration, run the evolutionary loop, shape the outcome for the
//! wire. [`RunRequest`] is the request body itself, with the
//! fall-back-to-builtin catalog rule applied. `GET /catalog` is just the
//! built-in catalog serialized; neither endpoint needs anything beyond
//! this module and [`crate::catalog`].

use crate::catalog::Catalog;
use crate::ga::{ConfigError, GaConfig, GaRunner};
use crate::report::AllocationReport;
use serde::{Deserialize, Serialize};

/// Body of one `POST /run` request.
///
/// Everything is optional on the wire: a missing `catalog` falls back to
/// [`Catalog::builtin`], and missing parameters take the [`GaConfig`]
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunRequest {
    /// Catalog to run against; `None` selects the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,

    /// Run parameters, each individually optional on the wire.
    #[serde(flatten)]
    pub config: GaConfig,
}

impl RunRequest {
    /// Resolves the catalog and runs the full pipeline.
    pub fn execute(&self) -> Result<RunOutcome, ConfigError> {
        match &self.catalog {
            Some(catalog) => execute(catalog, &self.config),
            None => execute(&Catalog::builtin(), &self.config),
        }
    }
}

/// Complete outcome of one run, shaped as the `POST /run` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    /// Winning gene vector, index-aligned with the catalog.
    pub best_solution: Vec<u32>,

    /// Multi-view analytics over the winning allocation.
    pub distribution: AllocationReport,

    /// Per-generation best fitness, one entry per generation.
    pub fitness_history: Vec<f64>,

    /// Echo of the resolved configuration the run actually used.
    pub parameters: GaConfig,
}

/// Runs the full pipeline: validation, evolution, analytics.
///
/// A run either completes fully or fails before doing any work; there are
/// no partial results.
pub fn execute(catalog: &Catalog, config: &GaConfig) -> Result<RunOutcome, ConfigError> {
    let result = GaRunner::run(catalog, config)?;

    let distribution = AllocationReport::build(
        &result.best,
        catalog,
        result.total_area,
        result.total_profit,
        config.area_budget,
    );

    Ok(RunOutcome {
        best_solution: result.best.into_genes(),
        distribution,
        fitness_history: result.fitness_history,
        parameters: config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_builtin_catalog() {
        let catalog = Catalog::builtin();
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(25)
            .with_seed(42);

        let outcome = execute(&catalog, &config).unwrap();

        assert_eq!(outcome.best_solution.len(), catalog.len());
        assert_eq!(outcome.fitness_history.len(), 25);
        assert_eq!(outcome.parameters, config);
        assert!(outcome.distribution.summary.total_area <= 50.0);
    }

    #[test]
    fn test_execute_is_deterministic() {
        let catalog = Catalog::builtin();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(15)
            .with_seed(7);

        let a = execute(&catalog, &config).unwrap();
        let b = execute(&catalog, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_execute_rejects_bad_config() {
        let config = GaConfig::default().with_population_size(0);
        let err = execute(&Catalog::builtin(), &config).unwrap_err();
        assert_eq!(err, ConfigError::ZeroPopulation);
    }

    #[test]
    fn test_outcome_wire_shape() {
        let catalog = Catalog::builtin();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(10)
            .with_seed(3);

        let outcome = execute(&catalog, &config).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();

        assert!(json.get("bestSolution").is_some());
        assert!(json.get("distribution").is_some());
        assert!(json.get("fitnessHistory").is_some());
        assert!(json.get("parameters").is_some());
        assert_eq!(json["parameters"]["seed"], 3);
        assert_eq!(
            json["fitnessHistory"].as_array().unwrap().len(),
            10
        );
    }

    // ---- Request body ----

    #[test]
    fn test_empty_request_uses_builtin_catalog_and_defaults() {
        let request: RunRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.catalog, None);
        assert_eq!(request.config, GaConfig::default());

        let outcome = request.execute().unwrap();
        assert_eq!(outcome.best_solution.len(), Catalog::builtin().len());
        assert_eq!(outcome.fitness_history.len(), 50);
    }

    #[test]
    fn test_request_with_inline_catalog() {
        let request: RunRequest = serde_json::from_str(
            r#"{
                "catalog": [
                    {"id": 1, "name": "Pallet", "area": 5.0, "profit": 12.0, "stock": 4}
                ],
                "populationSize": 10,
                "generations": 5,
                "seed": 1
            }"#,
        )
        .unwrap();
        assert_eq!(request.config.population_size, 10);

        let outcome = request.execute().unwrap();
        assert_eq!(outcome.best_solution.len(), 1);
        assert_eq!(outcome.fitness_history.len(), 5);
    }

    #[test]
    fn test_request_matches_direct_execute() {
        // The request wrapper is pure plumbing: same catalog and config
        // must produce the same outcome as calling execute directly.
        let request = RunRequest {
            catalog: None,
            config: GaConfig::default()
                .with_population_size(20)
                .with_generations(12)
                .with_seed(99),
        };

        let via_request = request.execute().unwrap();
        let direct = execute(&Catalog::builtin(), &request.config).unwrap();
        assert_eq!(via_request, direct);
    }

    #[test]
    fn test_request_propagates_config_errors() {
        let request: RunRequest =
            serde_json::from_str(r#"{"populationSize": 0}"#).unwrap();
        assert_eq!(request.execute().unwrap_err(), ConfigError::ZeroPopulation);
    }

    #[test]
    fn test_outcome_round_trips() {
        let catalog = Catalog::builtin();
        let config = GaConfig::default()
            .with_population_size(15)
            .with_generations(8)
            .with_seed(1);

        let outcome = execute(&catalog, &config).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: RunOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.best_solution, outcome.best_solution);
        assert_eq!(back.parameters, outcome.parameters);
    }
}
