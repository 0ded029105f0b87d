//! The Wu prover: triangulate, reduce the statement, decide.

use std::fmt;
use std::time::Duration;

use geoprove_core::{Budget, Phase, ProverError};
use geoprove_poly::XPolynomial;
use geoprove_rings::Coefficient;
use tracing::{debug, info};

use crate::context::ProverContext;
use crate::ndg::NdgCondition;
use crate::system::XPolySystem;
use crate::theorem::GeoTheorem;

/// Outcome of a completed proof attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The statement follows from the hypotheses.
    True,
    /// The statement is refuted.
    False,
    /// The method cannot decide.
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::True => write!(f, "TRUE"),
            Verdict::False => write!(f, "FALSE"),
            Verdict::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Size and timing figures of a proof run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProofStats {
    /// Largest polynomial (in u-terms) seen in either phase.
    pub max_terms: usize,
    /// Size of the final remainder.
    pub remainder_terms: usize,
    /// Time spent triangulating.
    pub triangulation_time: Duration,
    /// Time spent on the final remainder.
    pub remainder_time: Duration,
}

/// Verdict plus everything needed to report it.
#[derive(Clone, Debug)]
pub struct ProofOutcome<C: Coefficient> {
    /// The verdict.
    pub verdict: Verdict,
    /// Conditions under which a `True` verdict holds.
    pub ndg_conditions: Vec<NdgCondition<C>>,
    /// The final remainder.
    pub remainder: XPolynomial<C>,
    /// Size and timing figures.
    pub stats: ProofStats,
}

/// Proves theorems by Wu's method.
#[derive(Clone, Copy, Debug, Default)]
pub struct WuProver;

impl WuProver {
    /// Creates a prover.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Proves `theorem`.
    ///
    /// A zero final remainder gives `True`. A non-zero remainder gives
    /// `False` when every triangular entry is linear in its variable, since
    /// the dependent coordinates are then determined uniquely; otherwise the
    /// remainder may vanish on another component and the verdict is
    /// `Unknown`.
    ///
    /// # Errors
    ///
    /// - `ProverError::Null` if the theorem has no statement
    /// - `ProverError::SpaceLimit` / `ProverError::TimeLimit` when a phase
    ///   exceeds its budget
    /// - `ProverError::DegenerateLeadingCoefficient` if pseudo-division fails
    pub fn prove<C: Coefficient>(
        &self,
        theorem: &GeoTheorem<C>,
        ctx: &ProverContext,
    ) -> Result<ProofOutcome<C>, ProverError> {
        let statement = theorem
            .statement()
            .ok_or_else(|| ProverError::Null(format!("theorem '{}' has no statement", theorem.name())))?;

        info!(
            target: "wu",
            theorem = theorem.name(),
            hypotheses = theorem.hypotheses().len(),
            "proof_start"
        );

        let mut system = theorem.system();
        let mut budget = ctx.budget(Phase::Triangulation);
        system.triangulate(ctx, &mut budget)?;
        let triangulation_time = budget.elapsed();
        let triangulation_max = budget.largest_seen();

        let mut budget = ctx.budget(Phase::FinalRemainder);
        let remainder = final_remainder(statement, &system, ctx, &mut budget)?;

        let verdict = if remainder.is_zero() {
            Verdict::True
        } else if system.is_linear() {
            Verdict::False
        } else {
            Verdict::Unknown
        };

        let stats = ProofStats {
            max_terms: triangulation_max.max(budget.largest_seen()),
            remainder_terms: remainder.term_count(),
            triangulation_time,
            remainder_time: budget.elapsed(),
        };

        info!(
            target: "wu",
            theorem = theorem.name(),
            %verdict,
            max_terms = stats.max_terms,
            remainder_terms = stats.remainder_terms,
            "proof_done"
        );

        Ok(ProofOutcome {
            verdict,
            ndg_conditions: system.take_ndg_conditions(),
            remainder,
            stats,
        })
    }
}

/// Reduces `statement` by every triangular entry, greatest variable first.
fn final_remainder<C: Coefficient>(
    statement: &XPolynomial<C>,
    system: &XPolySystem<C>,
    ctx: &ProverContext,
    budget: &mut Budget,
) -> Result<XPolynomial<C>, ProverError> {
    let mut remainder = statement.clone();
    budget.observe(remainder.term_count())?;

    for hypothesis in system.hypotheses().iter().rev() {
        let Some(var) = hypothesis.variable else {
            continue;
        };
        if remainder.is_zero() {
            break;
        }
        budget.check_time()?;

        remainder = remainder
            .pseudo_remainder_with(
                &hypothesis.polynomial,
                var,
                ctx.multiplier(),
                |step: &XPolynomial<C>| budget.check(step.term_count()),
            )?
            .reduce_u_terms();
        budget.observe(remainder.term_count())?;

        debug!(
            target: "wu",
            %var,
            terms = remainder.term_count(),
            "remainder_step"
        );
    }

    Ok(remainder)
}

#[cfg(test)]
mod tests {
    use geoprove_core::{ProverConfig, ResultCode};
    use geoprove_poly::{UFraction, UVar, XVar};
    use geoprove_rings::Q;

    use super::*;

    fn x(i: u32) -> XPolynomial<Q> {
        XPolynomial::var(XVar(i))
    }

    fn u(i: u32) -> XPolynomial<Q> {
        XPolynomial::from_uvar(UVar(i))
    }

    // A = (0, 0), B = (u1, 0), C = (u2, u3); M = midpoint of AC = (x1, x2),
    // N = midpoint of BC = (x3, x4).
    fn midline_theorem() -> GeoTheorem<Q> {
        GeoTheorem::new("midline")
            .with_hypothesis(x(1).mul_constant(&UFraction::from_i64(2)).sub(&u(2)))
            .with_hypothesis(x(2).mul_constant(&UFraction::from_i64(2)).sub(&u(3)))
            .with_hypothesis(x(3).mul_constant(&UFraction::from_i64(2)).sub(&u(1)).sub(&u(2)))
            .with_hypothesis(x(4).mul_constant(&UFraction::from_i64(2)).sub(&u(3)))
    }

    #[test]
    fn test_midline_parallel_to_base() {
        // MN parallel to AB: (x3 - x1) * 0 - (x4 - x2) * u1 = 0
        let theorem = midline_theorem().with_statement(x(4).sub(&x(2)).mul(&u(1)));
        let outcome = WuProver::new().prove(&theorem, &ProverContext::default()).unwrap();

        assert_eq!(outcome.verdict, Verdict::True);
        assert!(outcome.remainder.is_zero());
        assert!(outcome.ndg_conditions.is_empty());
    }

    #[test]
    fn test_midline_half_base() {
        // |MN| = |AB| / 2 along x: 2*(x3 - x1) - u1 = 0
        let statement = x(3).sub(&x(1)).mul_constant(&UFraction::from_i64(2)).sub(&u(1));
        let theorem = midline_theorem().with_statement(statement);
        let outcome = WuProver::new().prove(&theorem, &ProverContext::default()).unwrap();
        assert_eq!(outcome.verdict, Verdict::True);
    }

    #[test]
    fn test_linear_system_refutes() {
        // M is not on the x axis
        let theorem = midline_theorem().with_statement(x(2));
        let outcome = WuProver::new().prove(&theorem, &ProverContext::default()).unwrap();

        assert_eq!(outcome.verdict, Verdict::False);
        assert!(!outcome.remainder.is_zero());
        assert!(!outcome.remainder.contains(XVar(2)));
    }

    #[test]
    fn test_nonlinear_system_is_unknown() {
        // x1^2 = u1 does not determine the sign of x1
        let theorem = GeoTheorem::new("square root")
            .with_hypothesis(x(1).pow(2).sub(&u(1)))
            .with_statement(x(1).sub(&u(2)));
        let outcome = WuProver::new().prove(&theorem, &ProverContext::default()).unwrap();
        assert_eq!(outcome.verdict, Verdict::Unknown);
    }

    #[test]
    fn test_missing_statement() {
        let err = WuProver::new()
            .prove(&midline_theorem(), &ProverContext::default())
            .unwrap_err();
        assert_eq!(err.code(), ResultCode::Null);
    }

    #[test]
    fn test_time_limit() {
        let ctx = ProverContext::sequential(ProverConfig::default().with_time_limit_ms(0));
        let theorem = midline_theorem().with_statement(x(1));
        let result = WuProver::new().prove(&theorem, &ctx);
        assert_eq!(ResultCode::of(&result), ResultCode::Time);
    }

    #[test]
    fn test_parallel_context_agrees() {
        let ctx = ProverContext::new(
            ProverConfig::default().with_workers(4).with_parallel_threshold(0),
        )
        .unwrap();
        let theorem = midline_theorem().with_statement(x(4).sub(&x(2)).mul(&u(1)));
        let outcome = WuProver::new().prove(&theorem, &ctx).unwrap();
        assert_eq!(outcome.verdict, Verdict::True);
    }
}
