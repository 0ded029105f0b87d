//! Parallel polynomial multiplication.
//!
//! The terms of the first operand are dealt round-robin into one partition
//! per worker. Each partition is multiplied by the second operand into a
//! private partial product on the worker pool, and the partial products are
//! summed on the calling thread once every worker has finished. Nothing is
//! shared mutably between workers, and the result does not depend on the
//! order in which they complete.

use std::sync::Arc;

use geoprove_core::ProverConfig;
use geoprove_rings::Coefficient;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::trace;

use crate::error::PolyError;
use crate::polynomial::Polynomial;
use crate::term::Term;
use crate::variable::Variable;

/// Polynomial multiplier with an optional worker pool.
///
/// Products whose term-pair count `len(a) * len(b)` is below the threshold,
/// and every product of a single-worker multiplier, run sequentially.
#[derive(Clone, Debug)]
pub struct Multiplier {
    pool: Option<Arc<ThreadPool>>,
    workers: usize,
    threshold: usize,
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::sequential()
    }
}

impl Multiplier {
    /// A multiplier that never spawns work.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            pool: None,
            workers: 1,
            threshold: usize::MAX,
        }
    }

    /// Creates a multiplier with `workers` threads (at least one).
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ThreadPool` if the pool cannot be built.
    pub fn new(workers: usize, threshold: usize) -> Result<Self, PolyError> {
        let workers = workers.max(1);
        if workers == 1 {
            return Ok(Self {
                pool: None,
                workers,
                threshold,
            });
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("geoprove-mul-{i}"))
            .build()
            .map_err(|e| PolyError::ThreadPool(e.to_string()))?;

        Ok(Self {
            pool: Some(Arc::new(pool)),
            workers,
            threshold,
        })
    }

    /// Creates a multiplier from the configured worker count and threshold.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ThreadPool` if the pool cannot be built.
    pub fn from_config(config: &ProverConfig) -> Result<Self, PolyError> {
        Self::new(config.workers, config.parallel_threshold)
    }

    /// Returns the number of workers.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the term-pair count from which products run in parallel.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Multiplies two polynomials.
    #[must_use]
    pub fn mul<V, C>(&self, a: &Polynomial<V, C>, b: &Polynomial<V, C>) -> Polynomial<V, C>
    where
        V: Variable,
        C: Coefficient,
    {
        let Some(pool) = &self.pool else {
            return a.clone().mul(b);
        };
        let pairs = a.len().saturating_mul(b.len());
        if pairs < self.threshold || a.len() < 2 {
            return a.clone().mul(b);
        }

        let mut partitions: Vec<Vec<Term<V, C>>> = (0..self.workers).map(|_| Vec::new()).collect();
        for (i, term) in a.terms().enumerate() {
            partitions[i % self.workers].push(term);
        }

        trace!(pairs, workers = self.workers, "parallel multiply");

        let partials: Vec<Polynomial<V, C>> = pool.install(|| {
            partitions
                .par_iter()
                .filter(|part| !part.is_empty())
                .map(|part| Polynomial::from_terms(part.iter().cloned()).mul(b))
                .collect()
        });

        partials
            .iter()
            .fold(Polynomial::zero(), |acc, partial| acc.add(partial))
    }
}
