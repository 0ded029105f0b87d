//! One-call proving of a construction protocol and statement.

use std::fmt;
use std::time::Duration;

use geoprove_area::AreaMethodProver;
use geoprove_core::ProverError;
use geoprove_geometry::{describe_ndgs, ConstructionProtocol, Statement};
use geoprove_rings::Q;
use geoprove_wu::{ProverContext, Verdict, WuProver};
use tracing::info;

/// Proving method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Wu's method over exact rational coefficients.
    Wu,
    /// The area method.
    Area,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Wu => write!(f, "Wu's method"),
            Method::Area => write!(f, "area method"),
        }
    }
}

/// What a driver reports after a completed run.
#[derive(Clone, Debug)]
pub struct Report {
    /// The method used.
    pub method: Method,
    /// The verdict.
    pub verdict: Verdict,
    /// Human-readable conditions the verdict depends on.
    pub conditions: Vec<String>,
    /// Largest intermediate size observed.
    pub max_terms: usize,
    /// Total time spent.
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, max terms {}, {} ms)",
            self.verdict,
            self.method,
            self.max_terms,
            self.elapsed.as_millis()
        )?;
        for condition in &self.conditions {
            write!(f, "\n  provided {condition}")?;
        }
        Ok(())
    }
}

/// Proves `statement` about the points of `protocol`.
///
/// # Errors
///
/// Propagates the method's errors: resource limits, unsupported
/// constructions, missing points and algebraic failures.
pub fn prove(
    protocol: &ConstructionProtocol,
    statement: &Statement,
    method: Method,
    ctx: &ProverContext,
) -> Result<Report, ProverError> {
    let name = statement.describe(protocol.labels());
    info!(theorem = %name, %method, steps = protocol.len(), "prove");

    match method {
        Method::Wu => {
            let theorem = protocol.to_theorem::<Q>(&name, statement, ctx)?;
            let mut outcome = WuProver::new().prove(&theorem, ctx)?;
            describe_ndgs(protocol, &mut outcome.ndg_conditions);
            Ok(Report {
                method,
                verdict: outcome.verdict,
                conditions: outcome.ndg_conditions.iter().map(ToString::to_string).collect(),
                max_terms: outcome.stats.max_terms,
                elapsed: outcome.stats.triangulation_time + outcome.stats.remainder_time,
            })
        }
        Method::Area => {
            let prover = AreaMethodProver::from_protocol(protocol, statement)?;
            let outcome = prover.prove(ctx)?;
            let labels = prover.constructions().labels();
            Ok(Report {
                method,
                verdict: outcome.verdict,
                conditions: outcome
                    .assumptions
                    .iter()
                    .map(|e| format!("{} != 0", e.render(labels)))
                    .collect(),
                max_terms: outcome.stats.max_terms,
                elapsed: outcome.stats.elapsed,
            })
        }
    }
}
