//! The area-method prover.
//!
//! Every claim of the statement is driven through the same pipeline:
//! uniformize and simplify, eliminate dependent points from the most
//! recent one backwards, bring the result to a single fraction, expand and
//! group the numerator. A zero numerator proves the claim. Otherwise the
//! numerator is rewritten in free-point coordinates, where being zero is
//! decidable.

use std::time::Duration;

use geoprove_core::{Budget, Phase, ProverError};
use geoprove_geometry::{ConstructionProtocol, Statement};
use geoprove_wu::{ProverContext, Verdict};
use tracing::{debug, info, trace};

use crate::construction::AreaConstructions;
use crate::eliminate::eliminate;
use crate::expr::Expr;
use crate::independent::to_coordinates;
use crate::normal_form::{
    group_sum_of_products, reduce_to_right_associative_form, reduce_to_single_fraction,
};
use crate::simplify::simplify;
use crate::statement::AreaMethodTheoremStatement;
use crate::uniformize::uniformize;

/// Size and timing figures of an area-method run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaStats {
    /// Largest expression or expansion size observed.
    pub max_terms: usize,
    /// Number of point eliminations performed.
    pub eliminated_points: usize,
    /// Claims decided in free-point coordinates.
    pub coordinate_retries: usize,
    /// Time spent proving.
    pub elapsed: Duration,
}

/// Verdict plus what it depends on.
#[derive(Clone, Debug)]
pub struct AreaOutcome {
    /// The verdict.
    pub verdict: Verdict,
    /// Denominators dropped when taking numerators; the verdict assumes
    /// none of them vanishes.
    pub assumptions: Vec<Expr>,
    /// Grouped numerator of each decided claim.
    pub remainders: Vec<Expr>,
    /// Size and timing figures.
    pub stats: AreaStats,
}

/// Proves statements over area-method constructions.
#[derive(Clone, Debug)]
pub struct AreaMethodProver {
    constructions: AreaConstructions,
    statement: AreaMethodTheoremStatement,
}

impl AreaMethodProver {
    /// Creates a prover for `statement` over `constructions`.
    #[must_use]
    pub fn new(constructions: AreaConstructions, statement: AreaMethodTheoremStatement) -> Self {
        Self { constructions, statement }
    }

    /// Builds a prover from a construction protocol.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Unsupported` for circle constructions and
    /// concyclicity statements.
    pub fn from_protocol(
        protocol: &ConstructionProtocol,
        statement: &Statement,
    ) -> Result<Self, ProverError> {
        let constructions = AreaConstructions::from_protocol(protocol)?;
        let description = statement.describe(protocol.labels());
        let statement = AreaMethodTheoremStatement::from_statement(statement, description)?;
        Ok(Self::new(constructions, statement))
    }

    /// The constructions.
    #[must_use]
    pub fn constructions(&self) -> &AreaConstructions {
        &self.constructions
    }

    /// The statement.
    #[must_use]
    pub fn statement(&self) -> &AreaMethodTheoremStatement {
        &self.statement
    }

    fn normalize(&self, expr: &Expr, passes: usize) -> Result<Expr, ProverError> {
        simplify(&uniformize(expr, self.constructions.facts()), passes)
    }

    /// Eliminates every dependent point from `expr`.
    ///
    /// Returns the eliminated expression and the number of eliminations
    /// performed. Running it again on its own output changes nothing.
    ///
    /// # Errors
    ///
    /// - `ProverError::TimeLimit` / `ProverError::SpaceLimit` when the
    ///   budget runs out
    /// - `ProverError::General` when a denominator vanishes
    pub fn eliminate_all(
        &self,
        expr: &Expr,
        ctx: &ProverContext,
        budget: &mut Budget,
    ) -> Result<(Expr, usize), ProverError> {
        let passes = ctx.config().max_simplify_passes;
        let mut current = self.normalize(expr, passes)?;
        let mut eliminated = 0;

        for point in self.constructions.elimination_order() {
            if current.is_zero() {
                break;
            }
            if !current.contains(point) {
                continue;
            }
            budget.check_time()?;
            let Some(step) = self.constructions.step_of(point) else {
                continue;
            };
            current = eliminate(&current, step, self.constructions.facts())?;
            current = self.normalize(&current, passes)?;
            budget.observe(current.size())?;
            eliminated += 1;
            trace!(
                target: "area",
                point = %self.constructions.labels().display(point),
                size = current.size(),
                "eliminated"
            );
        }
        Ok((current, eliminated))
    }

    /// Proves the statement.
    ///
    /// A claim whose grouped numerator is zero holds. A non-zero numerator
    /// is decided in free-point coordinates when the retry is enabled,
    /// giving `True` or `False`; without the retry it gives `Unknown`. One
    /// false claim makes the statement false.
    ///
    /// # Errors
    ///
    /// - `ProverError::Null` if the statement has no claims
    /// - `ProverError::TimeLimit` / `ProverError::SpaceLimit` when the
    ///   budget runs out
    /// - `ProverError::General` when a denominator vanishes
    pub fn prove(&self, ctx: &ProverContext) -> Result<AreaOutcome, ProverError> {
        if self.statement.expressions().is_empty() {
            return Err(ProverError::Null(format!(
                "statement '{}' has no expressions",
                self.statement.description()
            )));
        }
        info!(
            target: "area",
            statement = self.statement.description(),
            expressions = self.statement.expressions().len(),
            points = self.constructions.steps().len(),
            "proof_start"
        );

        let mut budget = ctx.budget(Phase::AreaMethod);
        let mut outcome = AreaOutcome {
            verdict: Verdict::True,
            assumptions: Vec::new(),
            remainders: Vec::new(),
            stats: AreaStats::default(),
        };

        for expr in self.statement.expressions() {
            let verdict = self.decide(expr, ctx, &mut budget, &mut outcome)?;
            debug!(
                target: "area",
                expression = %expr.render(self.constructions.labels()),
                %verdict,
                "expression decided"
            );
            match verdict {
                Verdict::False => {
                    outcome.verdict = Verdict::False;
                    break;
                }
                Verdict::Unknown => outcome.verdict = Verdict::Unknown,
                Verdict::True => {}
            }
        }

        outcome.stats.max_terms = budget.largest_seen();
        outcome.stats.elapsed = budget.elapsed();
        info!(
            target: "area",
            verdict = %outcome.verdict,
            eliminated = outcome.stats.eliminated_points,
            max_terms = outcome.stats.max_terms,
            elapsed_ms = %outcome.stats.elapsed.as_millis(),
            "proof_end"
        );
        Ok(outcome)
    }

    fn decide(
        &self,
        expr: &Expr,
        ctx: &ProverContext,
        budget: &mut Budget,
        outcome: &mut AreaOutcome,
    ) -> Result<Verdict, ProverError> {
        let passes = ctx.config().max_simplify_passes;
        let (eliminated, count) = self.eliminate_all(expr, ctx, budget)?;
        outcome.stats.eliminated_points += count;

        let numerator = match reduce_to_single_fraction(&eliminated) {
            Expr::Fraction(num, den) => {
                outcome.assumptions.push(*den);
                *num
            }
            other => other,
        };
        let expanded = reduce_to_right_associative_form(&numerator, budget)?;
        let grouped = simplify(&group_sum_of_products(&expanded), passes)?;

        let verdict = if grouped.is_zero() {
            Verdict::True
        } else if ctx.config().independent_variable_retry {
            outcome.stats.coordinate_retries += 1;
            let coordinates = to_coordinates(&grouped, &self.constructions, ctx, budget)?;
            if coordinates.is_zero() {
                Verdict::True
            } else {
                Verdict::False
            }
        } else {
            Verdict::Unknown
        };
        outcome.remainders.push(grouped);
        Ok(verdict)
    }
}
