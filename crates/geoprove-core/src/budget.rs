//! Per-phase space and time budgets.
//!
//! A budget is armed when a phase starts. The driver polls it at every
//! major iteration; the algebra always finishes its current step before
//! the limit is honoured.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::ProverConfig;
use crate::error::ProverError;

/// A proof phase that owns its own budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Triangulation of the hypothesis system.
    Triangulation,
    /// Successive pseudo-remainders of the statement.
    FinalRemainder,
    /// Area-method elimination and verification.
    AreaMethod,
}

impl Phase {
    /// Returns a short name for the phase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Triangulation => "triangulation",
            Phase::FinalRemainder => "final remainder",
            Phase::AreaMethod => "area method",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Space/time budget of one phase.
#[derive(Clone, Debug)]
pub struct Budget {
    phase: Phase,
    started: Instant,
    /// `None` when the limit lies beyond what `Instant` can represent.
    deadline: Option<Instant>,
    time_limit: Duration,
    max_terms: usize,
    largest_seen: usize,
}

impl Budget {
    /// Arms a budget for `phase` using the configured limits.
    #[must_use]
    pub fn start(phase: Phase, config: &ProverConfig) -> Self {
        Self::with_limits(phase, config.time_limit(), config.max_terms)
    }

    /// Arms a budget with explicit limits.
    #[must_use]
    pub fn with_limits(phase: Phase, time_limit: Duration, max_terms: usize) -> Self {
        let started = Instant::now();
        Self {
            phase,
            started,
            deadline: started.checked_add(time_limit),
            time_limit,
            max_terms,
            largest_seen: 0,
        }
    }

    /// Returns the phase this budget belongs to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fails with `TimeLimit` once the deadline has passed.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::TimeLimit` when the phase is out of time.
    pub fn check_time(&self) -> Result<(), ProverError> {
        let now = Instant::now();
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            warn!(phase = %self.phase, limit_ms = %self.time_limit.as_millis(), "time limit reached");
            return Err(ProverError::TimeLimit {
                phase: self.phase,
                elapsed_ms: now.duration_since(self.started).as_millis(),
                limit_ms: self.time_limit.as_millis(),
            });
        }
        Ok(())
    }

    /// Records the size of a freshly produced polynomial.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::SpaceLimit` when `terms` exceeds the limit.
    pub fn observe(&mut self, terms: usize) -> Result<(), ProverError> {
        self.largest_seen = self.largest_seen.max(terms);
        if terms > self.max_terms {
            warn!(phase = %self.phase, terms, limit = self.max_terms, "space limit reached");
            return Err(ProverError::SpaceLimit {
                phase: self.phase,
                terms,
                limit: self.max_terms,
            });
        }
        Ok(())
    }

    /// Checks both limits in one call.
    ///
    /// # Errors
    ///
    /// Returns the space error first, then the time error.
    pub fn check(&mut self, terms: usize) -> Result<(), ProverError> {
        self.observe(terms)?;
        self.check_time()
    }

    /// Largest polynomial size observed so far.
    #[must_use]
    pub fn largest_seen(&self) -> usize {
        self.largest_seen
    }

    /// Time spent in the phase so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
