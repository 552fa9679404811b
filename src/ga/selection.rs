//! Parent selection strategies.
//!
//! Selection determines which chromosomes become parents for crossover.
//! Both strategies assume **maximization** (higher fitness = better) and
//! return an owned copy of the winner, never a reference into the living
//! population, so the returned chromosome may be handed to both mating
//! slots and mutated freely.

use super::types::{Chromosome, Scored};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Wire-level selection discriminator (`selectionType` in run requests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    /// Pick the best of `tournamentK` randomly sampled chromosomes.
    #[default]
    Tournament,
    /// Pick with probability proportional to shifted fitness.
    Roulette,
}

/// Selection strategy resolved from a run configuration.
///
/// # Examples
///
/// ```
/// use stockfill::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Fitness-proportionate roulette wheel
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tournament selection: sample `k` distinct entrants, keep the fittest.
    ///
    /// Higher `k` = stronger selection pressure. `k` must be at least 1 and
    /// at most the population size (entrants are drawn without replacement).
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Fitness values are shifted so the minimum becomes 1 before the wheel
    /// spins, which keeps every weight positive even when the overflow
    /// penalty drives raw fitness negative.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects one parent from a scored population.
    ///
    /// # Panics
    /// Panics if `population` is empty or a tournament size exceeds it.
    /// `GaConfig::validate` rejects both before any loop starts.
    pub fn select<R: Rng>(&self, population: &[Scored], rng: &mut R) -> Chromosome {
        assert!(!population.is_empty(), "cannot select from empty population");

        match *self {
            Selection::Tournament(k) => tournament(population, k, rng),
            Selection::Roulette => roulette(population, rng),
        }
    }
}

/// Tournament selection: `k` distinct entrants, fittest wins.
fn tournament<R: Rng>(population: &[Scored], k: usize, rng: &mut R) -> Chromosome {
    let k = k.clamp(1, population.len());

    let entrants = rand::seq::index::sample(rng, population.len(), k);
    let winner = entrants
        .iter()
        .max_by(|&a, &b| {
            population[a]
                .fitness
                .partial_cmp(&population[b].fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("tournament has at least one entrant");

    population[winner].chromosome.clone()
}

/// Roulette wheel over min-shifted fitness.
///
/// Weights are `f - min(f) + 1`; the draw is uniform in `[0, Σ weights]`
/// and the first chromosome whose cumulative weight reaches the draw wins.
fn roulette<R: Rng>(population: &[Scored], rng: &mut R) -> Chromosome {
    let min = population
        .iter()
        .map(|s| s.fitness)
        .fold(f64::INFINITY, f64::min);

    let weights: Vec<f64> = population.iter().map(|s| s.fitness - min + 1.0).collect();
    let total: f64 = weights.iter().sum();

    if total <= 0.0 {
        let idx = rng.random_range(0..population.len());
        return population[idx].chromosome.clone();
    }

    let draw = rng.random_range(0.0..=total);
    let mut cumulative = 0.0;
    for (scored, &weight) in population.iter().zip(&weights) {
        cumulative += weight;
        if cumulative >= draw {
            return scored.chromosome.clone();
        }
    }

    // Floating-point accumulation fallback.
    population
        .last()
        .expect("population is non-empty")
        .chromosome
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Scored> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Scored {
                chromosome: Chromosome::new(vec![i as u32]),
                fitness: f,
            })
            .collect()
    }

    fn tally(selection: Selection, population: &[Scored], draws: u32, seed: u64) -> Vec<u32> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut counts = vec![0u32; population.len()];
        for _ in 0..draws {
            let picked = selection.select(population, &mut rng);
            counts[picked.genes()[0] as usize] += 1;
        }
        counts
    }

    // ---- Tournament ----

    #[test]
    fn test_full_tournament_always_returns_best() {
        // With k == population size the entrants cover everyone (drawn
        // without replacement), so the global best must win every time.
        let pop = make_population(&[10.0, 5.0, 80.0, 8.0]);
        let counts = tally(Selection::Tournament(4), &pop, 500, 42);
        assert_eq!(counts, vec![0, 0, 500, 0]);
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 80.0, 8.0]);
        let counts = tally(Selection::Tournament(3), &pop, 10_000, 42);
        let best = counts[2];
        assert!(
            best > 6000,
            "expected best selected >60% of the time, got {best}/10000"
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[10.0, 5.0, 80.0, 8.0]);
        let counts = tally(Selection::Tournament(1), &pop, 10_000, 42);
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    // ---- Roulette ----

    #[test]
    fn test_roulette_frequency_matches_weights() {
        // Fitness [3, 1] shifts to weights [3, 1]: expect a 75/25 split.
        let pop = make_population(&[3.0, 1.0]);
        let n = 20_000;
        let counts = tally(Selection::Roulette, &pop, n, 99);

        let share = f64::from(counts[0]) / f64::from(n);
        assert!(
            (share - 0.75).abs() < 0.03,
            "expected ~75% for weight-3 entry, got {share}"
        );
    }

    #[test]
    fn test_roulette_handles_negative_fitness() {
        // Penalized populations go negative; shifting keeps all weights
        // positive, so the worst chromosome is still reachable.
        let pop = make_population(&[-4400.0, -100.0, 250.0]);
        let counts = tally(Selection::Roulette, &pop, 10_000, 7);

        assert!(counts[2] > counts[0], "best should dominate: {counts:?}");
        assert!(counts[0] > 0, "worst must keep a nonzero share");
    }

    #[test]
    fn test_roulette_equal_fitness_is_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let counts = tally(Selection::Roulette, &pop, 10_000, 42);
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    // ---- Shared contract ----

    #[test]
    fn test_selected_parent_is_a_copy() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut parent = Selection::Tournament(2).select(&pop, &mut rng);
        let before: Vec<u32> = pop.iter().map(|s| s.chromosome.genes()[0]).collect();
        parent.genes_mut()[0] = 999;
        let after: Vec<u32> = pop.iter().map(|s| s.chromosome.genes()[0]).collect();

        assert_eq!(before, after, "mutating a parent must not touch the population");
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(Selection::Tournament(1).select(&pop, &mut rng).genes(), &[0]);
        assert_eq!(Selection::Roulette.select(&pop, &mut rng).genes(), &[0]);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Scored> = vec![];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }

    #[test]
    fn test_selection_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&SelectionKind::Tournament).unwrap(),
            "\"tournament\""
        );
        let parsed: SelectionKind = serde_json::from_str("\"roulette\"").unwrap();
        assert_eq!(parsed, SelectionKind::Roulette);
    }
}
