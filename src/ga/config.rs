//! Run configuration.
//!
//! [`GaConfig`] holds every parameter that controls the evolutionary loop.
//! On the wire each field is optional; missing ones take the documented
//! defaults, and the resolved struct is echoed back verbatim in the run
//! outcome.

use super::fitness::DEFAULT_AREA_BUDGET;
use super::selection::{Selection, SelectionKind};
use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Configuration validation errors.
///
/// Every variant is rejected by [`GaConfig::validate`] before the
/// evolutionary loop starts; nothing here can surface mid-run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("catalog must contain at least one item")]
    EmptyCatalog,

    #[error("population size must be at least 1")]
    ZeroPopulation,

    #[error("generation count must be at least 1")]
    ZeroGenerations,

    #[error("tournament size must be at least 1")]
    ZeroTournament,

    #[error("tournament size {k} exceeds population size {population_size}")]
    TournamentTooLarge { k: usize, population_size: usize },
}

/// Parameters for one evolutionary run.
///
/// # Defaults
///
/// ```
/// use stockfill::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.seed, 42);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use stockfill::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Roulette)
///     .with_elitism(4)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GaConfig {
    /// Number of chromosomes alive in each generation.
    pub population_size: usize,

    /// Number of generational steps. The loop always runs to this count;
    /// there is no convergence-based early exit.
    pub generations: usize,

    /// Probability that a selected parent pair is recombined at all.
    /// Pairs that skip crossover pass into mutation as plain copies.
    pub crossover_prob: f64,

    /// Per-gene mutation probability applied to every child.
    pub mutation_prob: f64,

    /// Parent selection policy.
    pub selection_type: SelectionKind,

    /// Tournament size; ignored under roulette selection.
    pub tournament_k: usize,

    /// Number of top chromosomes copied unchanged into the next
    /// generation. Values beyond the population size are clamped, never
    /// rejected.
    pub elitism: usize,

    /// RNG seed. Identical seed and configuration replay an identical run.
    pub seed: u64,

    /// Total floor-area budget shared by the whole allocation.
    pub area_budget: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 50,
            crossover_prob: 0.6,
            mutation_prob: 0.15,
            selection_type: SelectionKind::Tournament,
            tournament_k: 3,
            elitism: 2,
            seed: 42,
            area_budget: DEFAULT_AREA_BUDGET,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the whole-pair crossover probability, clamped to `[0, 1]`.
    pub fn with_crossover_prob(mut self, prob: f64) -> Self {
        self.crossover_prob = prob.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = prob.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        match selection {
            Selection::Tournament(k) => {
                self.selection_type = SelectionKind::Tournament;
                self.tournament_k = k;
            }
            Selection::Roulette => self.selection_type = SelectionKind::Roulette,
        }
        self
    }

    /// Sets the elite count.
    pub fn with_elitism(mut self, count: usize) -> Self {
        self.elitism = count;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the floor-area budget.
    pub fn with_area_budget(mut self, budget: f64) -> Self {
        self.area_budget = budget;
        self
    }

    /// The selection strategy this configuration resolves to.
    pub fn selection(&self) -> Selection {
        match self.selection_type {
            SelectionKind::Tournament => Selection::Tournament(self.tournament_k),
            SelectionKind::Roulette => Selection::Roulette,
        }
    }

    /// Validates the configuration against the catalog it will run on.
    ///
    /// All upstream input errors are caught here, before the RNG is seeded
    /// or any population is built.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.selection_type == SelectionKind::Tournament {
            if self.tournament_k == 0 {
                return Err(ConfigError::ZeroTournament);
            }
            if self.tournament_k > self.population_size {
                return Err(ConfigError::TournamentTooLarge {
                    k: self.tournament_k,
                    population_size: self.population_size,
                });
            }
        }
        Ok(())
    }
}
