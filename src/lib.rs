//! Genetic-algorithm stock allocation.
//!
//! Chooses integer quantities of catalog items (each with a unit
//! footprint, unit profit, and stock cap) to maximize total profit within
//! a fixed floor-area budget. The search is a seeded, reproducible genetic
//! algorithm rather than an exact solver: good allocations in bounded
//! time, not provably optimal ones.
//!
//! # Architecture
//!
//! - [`catalog`]: the immutable item universe, including the built-in
//!   appliance catalog.
//! - [`ga`]: the evolutionary engine: chromosomes, fitness with overflow
//!   penalty, selection/crossover/mutation operators, and the
//!   generational loop.
//! - [`report`]: post-run analytics turning the winning chromosome into a
//!   multi-view report.
//! - [`run`]: the one-call entry point a serving layer wraps; produces the
//!   full wire-shaped outcome.
//!
//! Every run owns its state, RNG included, so concurrent runs in an
//! embedding server cannot interfere with one another.
//!
//! # Example
//!
//! ```
//! use stockfill::catalog::Catalog;
//! use stockfill::ga::GaConfig;
//!
//! let catalog = Catalog::builtin();
//! let config = GaConfig::default().with_generations(20).with_seed(42);
//! let outcome = stockfill::run::execute(&catalog, &config).unwrap();
//!
//! assert_eq!(outcome.fitness_history.len(), 20);
//! assert!(outcome.distribution.summary.total_area <= 50.0);
//! ```

pub mod catalog;
pub mod ga;
pub mod report;
pub mod run;
