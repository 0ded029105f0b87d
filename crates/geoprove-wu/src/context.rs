//! Per-run prover context.

use geoprove_core::{Budget, Phase, ProverConfig, ProverError};
use geoprove_poly::Multiplier;

/// Configuration and shared machinery for one proof run.
///
/// Built once by the driver and passed by reference to every phase.
#[derive(Clone, Debug)]
pub struct ProverContext {
    config: ProverConfig,
    multiplier: Multiplier,
}

impl ProverContext {
    /// Creates a context with a worker pool sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::General` if the worker pool cannot be built.
    pub fn new(config: ProverConfig) -> Result<Self, ProverError> {
        let multiplier = Multiplier::from_config(&config)?;
        Ok(Self { config, multiplier })
    }

    /// Creates a context that multiplies on the calling thread only.
    #[must_use]
    pub fn sequential(config: ProverConfig) -> Self {
        Self {
            config,
            multiplier: Multiplier::sequential(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Returns the polynomial multiplier.
    #[must_use]
    pub fn multiplier(&self) -> &Multiplier {
        &self.multiplier
    }

    /// Arms a fresh budget for `phase`.
    #[must_use]
    pub fn budget(&self, phase: Phase) -> Budget {
        Budget::start(phase, &self.config)
    }
}

impl Default for ProverContext {
    fn default() -> Self {
        Self::sequential(ProverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_config() {
        let ctx = ProverContext::new(ProverConfig::default().with_workers(2)).unwrap();
        assert_eq!(ctx.multiplier().workers(), 2);
        assert_eq!(ctx.budget(Phase::Triangulation).phase(), Phase::Triangulation);
    }

    #[test]
    fn test_default_is_sequential() {
        let ctx = ProverContext::default();
        assert_eq!(ctx.multiplier().workers(), 1);
        assert_eq!(ctx.config().max_terms, 10_000);
    }
}
