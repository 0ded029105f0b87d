//! Run configuration.

use std::time::Duration;

/// Configuration for one proof run.
///
/// Built once by the driver and read by every phase through the prover
/// context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverConfig {
    /// Wall-clock limit per phase, in milliseconds.
    pub time_limit_ms: u64,
    /// Maximum number of terms any intermediate polynomial may reach.
    pub max_terms: usize,
    /// Worker threads for large polynomial multiplications.
    pub workers: usize,
    /// Minimum `len(a) * len(b)` before a multiplication is parallelised.
    pub parallel_threshold: usize,
    /// Upper bound on simplification passes per fixpoint loop.
    pub max_simplify_passes: usize,
    /// Whether the area method retries non-zero results in independent
    /// variables.
    pub independent_variable_retry: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 10_000,
            max_terms: 10_000,
            workers: std::thread::available_parallelism().map_or(1, usize::from),
            parallel_threshold: 4_096,
            max_simplify_passes: 64,
            independent_variable_retry: true,
        }
    }
}

impl ProverConfig {
    /// Sets the per-phase time limit.
    #[must_use]
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the term-count limit.
    #[must_use]
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Sets the number of multiplication workers (at least one).
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Sets the parallel multiplication threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the simplification pass cap.
    #[must_use]
    pub fn with_max_simplify_passes(mut self, passes: usize) -> Self {
        self.max_simplify_passes = passes.max(1);
        self
    }

    /// Enables or disables the independent-variable retry.
    #[must_use]
    pub fn with_independent_variable_retry(mut self, enabled: bool) -> Self {
        self.independent_variable_retry = enabled;
        self
    }

    /// Returns the time limit as a `Duration`.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}
