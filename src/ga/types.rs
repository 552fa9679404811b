//! Chromosome representation for allocation search.

use crate::catalog::Catalog;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One candidate allocation: how many units of each catalog item to place.
///
/// Genes are positional (gene `i` counts units of catalog item `i`) and
/// stay within `[0, stock_i]` through every operator application, not just
/// at creation. Cloning a chromosome is a full deep copy, so two population
/// slots can never alias the same gene storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chromosome {
    genes: Vec<u32>,
}

impl Chromosome {
    /// Wraps an explicit gene vector.
    pub fn new(genes: Vec<u32>) -> Self {
        Self { genes }
    }

    /// Draws a random allocation, each gene uniform in `[0, stock_i]`.
    pub fn random<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        let genes = catalog
            .items()
            .iter()
            .map(|item| rng.random_range(0..=item.stock))
            .collect();
        Self { genes }
    }

    /// Gene values in catalog order.
    pub fn genes(&self) -> &[u32] {
        &self.genes
    }

    /// Number of genes (equals the catalog length).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Consumes the chromosome, yielding its raw gene vector.
    pub fn into_genes(self) -> Vec<u32> {
        self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [u32] {
        &mut self.genes
    }

    /// Total floor area this allocation occupies.
    pub fn total_area(&self, catalog: &Catalog) -> f64 {
        self.genes
            .iter()
            .zip(catalog.items())
            .map(|(&q, item)| f64::from(q) * item.area)
            .sum()
    }

    /// Total profit this allocation earns.
    pub fn total_profit(&self, catalog: &Catalog) -> f64 {
        self.genes
            .iter()
            .zip(catalog.items())
            .map(|(&q, item)| f64::from(q) * item.profit)
            .sum()
    }

    /// Whether every gene sits within its item's stock cap.
    pub fn respects_stock(&self, catalog: &Catalog) -> bool {
        self.genes.len() == catalog.len()
            && self
                .genes
                .iter()
                .zip(catalog.items())
                .all(|(&q, item)| q <= item.stock)
    }
}

/// A chromosome paired with its evaluated fitness.
///
/// The population is a vector of these; replacing the population wholesale
/// each generation keeps chromosome ownership unambiguous.
#[derive(Debug, Clone)]
pub struct Scored {
    pub chromosome: Chromosome,
    pub fitness: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_respects_stock() {
        let catalog = Catalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            let chromosome = Chromosome::random(&catalog, &mut rng);
            assert_eq!(chromosome.len(), catalog.len());
            assert!(chromosome.respects_stock(&catalog));
        }
    }

    #[test]
    fn test_random_covers_full_range() {
        // Item 1 has stock 20; over many draws the first gene should hit
        // both ends of [0, 20].
        let catalog = Catalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let mut saw_zero = false;
        let mut saw_max = false;
        for _ in 0..500 {
            let g = Chromosome::random(&catalog, &mut rng).genes()[0];
            saw_zero |= g == 0;
            saw_max |= g == 20;
        }
        assert!(saw_zero && saw_max, "uniform init should reach both bounds");
    }

    #[test]
    fn test_totals() {
        let catalog = Catalog::builtin();
        // 2 mini fridges + 1 large fridge, nothing else.
        let mut genes = vec![0; catalog.len()];
        genes[0] = 2;
        genes[6] = 1;
        let chromosome = Chromosome::new(genes);

        assert!((chromosome.total_area(&catalog) - (2.0 * 0.25 + 0.6)).abs() < 1e-12);
        assert!((chromosome.total_profit(&catalog) - (2.0 * 40.0 + 220.0)).abs() < 1e-12);
    }

    #[test]
    fn test_clone_is_deep() {
        let catalog = Catalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let original = Chromosome::random(&catalog, &mut rng);
        let snapshot = original.genes().to_vec();

        let mut copy = original.clone();
        for gene in copy.genes_mut() {
            *gene = 0;
        }

        // Writes through the copy never show up in the original.
        assert_eq!(original.genes(), snapshot.as_slice());
    }

    #[test]
    fn test_respects_stock_rejects_length_mismatch() {
        let catalog = Catalog::builtin();
        let short = Chromosome::new(vec![0; catalog.len() - 1]);
        assert!(!short.respects_stock(&catalog));
    }
}
