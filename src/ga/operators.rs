//! Genetic operators for allocation chromosomes.
//!
//! [`uniform_crossover`] recombines two parents by independent per-gene
//! swaps; [`step_mutation`] nudges genes by a single unit within their
//! stock bounds. Both take the run's RNG as an explicit parameter so a
//! repeated run with the same seed replays the same stream.

use super::types::Chromosome;
use crate::catalog::Catalog;
use rand::Rng;

/// Per-gene swap probability for uniform crossover.
///
/// The whole-pair crossover gate lives in the run configuration; this
/// constant only shapes how thoroughly two mating parents mix.
pub const GENE_SWAP_PROB: f64 = 0.5;

/// Uniform crossover.
///
/// Children start as full copies of the parents; each gene index then
/// swaps between the two children with probability `swap_prob`. Gene
/// bounds hold by construction, since a swap exchanges values that were
/// each within the same item's stock cap.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    swap_prob: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    assert_eq!(
        parent_a.len(),
        parent_b.len(),
        "parents must have equal length"
    );

    let mut child_a = parent_a.clone();
    let mut child_b = parent_b.clone();

    let genes_a = child_a.genes_mut();
    let genes_b = child_b.genes_mut();
    for i in 0..genes_a.len() {
        if rng.random_range(0.0..1.0) < swap_prob {
            std::mem::swap(&mut genes_a[i], &mut genes_b[i]);
        }
    }

    (child_a, child_b)
}

/// Step mutation.
///
/// Each gene independently moves one unit down (floored at 0) or up
/// (clamped at the item's stock) with probability `prob`, choosing the
/// direction 50/50. A local perturbation rather than a re-roll: most of
/// the parent's structure survives.
pub fn step_mutation<R: Rng>(
    chromosome: &mut Chromosome,
    catalog: &Catalog,
    prob: f64,
    rng: &mut R,
) {
    for (gene, item) in chromosome.genes_mut().iter_mut().zip(catalog.items()) {
        if rng.random_range(0.0..1.0) < prob {
            if rng.random_bool(0.5) {
                *gene = gene.saturating_sub(1);
            } else {
                *gene = (*gene + 1).min(item.stock);
            }
        }
    }
}
