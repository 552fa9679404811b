//! Evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete run: initialization → evaluation
//! → selection → crossover → mutation → replacement, repeated for a fixed
//! number of generations.

use super::config::{ConfigError, GaConfig};
use super::fitness::FitnessEvaluator;
use super::operators::{step_mutation, uniform_crossover, GENE_SWAP_PROB};
use super::types::{Chromosome, Scored};
use crate::catalog::Catalog;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Result of one evolutionary run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome ever observed, across all generations.
    pub best: Chromosome,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Floor area the best chromosome occupies.
    pub total_area: f64,

    /// Profit the best chromosome earns.
    pub total_profit: f64,

    /// Best fitness of each generation, in order. Length equals the
    /// configured generation count; entries record the per-generation
    /// best, not the running best.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use stockfill::catalog::Catalog;
/// use stockfill::ga::{GaConfig, GaRunner};
///
/// let catalog = Catalog::builtin();
/// let config = GaConfig::default().with_generations(10).with_seed(42);
/// let result = GaRunner::run(&catalog, &config).unwrap();
/// assert_eq!(result.fitness_history.len(), 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the evolutionary loop to completion.
    ///
    /// Invalid configurations are rejected before the RNG is seeded, so a
    /// failed run performs no work and leaves nothing half-evolved. All
    /// state, RNG included, is local to this call; concurrent runs never
    /// perturb each other's random streams.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult, ConfigError> {
        config.validate(catalog)?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let evaluator = FitnessEvaluator::new(config.area_budget);
        let selection = config.selection();
        let elite_count = config.elitism.min(config.population_size);

        // Initial population: uniform draws within each item's stock.
        let mut population: Vec<Scored> = (0..config.population_size)
            .map(|_| {
                let chromosome = Chromosome::random(catalog, &mut rng);
                let fitness = evaluator.evaluate(&chromosome, catalog);
                Scored { chromosome, fitness }
            })
            .collect();

        let mut best: Option<Scored> = None;
        let mut fitness_history = Vec::with_capacity(config.generations);

        for gen in 0..config.generations {
            // Best first. The sort is stable, so equal-fitness chromosomes
            // keep their relative order and elitism stays reproducible.
            population.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let gen_best = population[0].fitness;
            if best.as_ref().is_none_or(|b| gen_best > b.fitness) {
                best = Some(population[0].clone());
            }
            fitness_history.push(gen_best);
            debug!("generation {gen}: best fitness {gen_best:.3}");

            let mut next_gen: Vec<Scored> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let parent_a = selection.select(&population, &mut rng);
                let parent_b = selection.select(&population, &mut rng);

                // Whole-pair crossover gate; skipped pairs pass through as
                // plain copies.
                let (mut child_a, mut child_b) =
                    if rng.random_range(0.0..1.0) < config.crossover_prob {
                        uniform_crossover(&parent_a, &parent_b, GENE_SWAP_PROB, &mut rng)
                    } else {
                        (parent_a, parent_b)
                    };

                step_mutation(&mut child_a, catalog, config.mutation_prob, &mut rng);
                step_mutation(&mut child_b, catalog, config.mutation_prob, &mut rng);

                let fitness = evaluator.evaluate(&child_a, catalog);
                next_gen.push(Scored {
                    chromosome: child_a,
                    fitness,
                });
                if next_gen.len() < config.population_size {
                    let fitness = evaluator.evaluate(&child_b, catalog);
                    next_gen.push(Scored {
                        chromosome: child_b,
                        fitness,
                    });
                }
            }

            population = next_gen;
        }

        let Scored {
            chromosome: best,
            fitness: best_fitness,
        } = best.expect("a validated run records a best in generation 0");

        let total_area = best.total_area(catalog);
        let total_profit = best.total_profit(catalog);
        info!(
            "run complete after {} generations: fitness {best_fitness:.3}, \
             area {total_area:.3}, profit {total_profit:.3}",
            config.generations
        );

        Ok(GaResult {
            best,
            best_fitness,
            total_area,
            total_profit,
            fitness_history,
        })
    }
}
