//! Hypothesis systems and their triangulation.
//!
//! Triangulation works from the greatest dependent variable down. All
//! polynomials that still mention the variable compete: the one of lowest
//! degree in it (fewest u-terms on ties) becomes the pivot and every other
//! candidate is replaced by its pseudo-remainder by the pivot. Remainders
//! have lower degree, so the candidates shrink until exactly one is left.
//! That polynomial is the triangular entry for the variable; the rest drop
//! down to the smaller variables.

use std::collections::BTreeSet;

use geoprove_core::{Budget, ProverError};
use geoprove_poly::{XPolynomial, XVar};
use geoprove_rings::Coefficient;
use tracing::{debug, trace, warn};

use crate::context::ProverContext;
use crate::ndg::NdgCondition;

/// A hypothesis polynomial and the variable it determines.
///
/// Before triangulation, and for hypotheses left free of every dependent
/// variable, `variable` is `None`.
#[derive(Clone, Debug)]
pub struct Hypothesis<C: Coefficient> {
    /// The polynomial, meant to vanish.
    pub polynomial: XPolynomial<C>,
    /// The dependent variable the polynomial is solved for.
    pub variable: Option<XVar>,
}

/// An ordered system of hypothesis polynomials.
#[derive(Clone, Debug)]
pub struct XPolySystem<C: Coefficient> {
    hypotheses: Vec<Hypothesis<C>>,
    ndg_conditions: Vec<NdgCondition<C>>,
    triangular: bool,
}

impl<C: Coefficient> Default for XPolySystem<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coefficient> XPolySystem<C> {
    /// Creates an empty system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hypotheses: Vec::new(),
            ndg_conditions: Vec::new(),
            triangular: false,
        }
    }

    /// Creates a system from hypothesis polynomials.
    pub fn from_polynomials<I>(polynomials: I) -> Self
    where
        I: IntoIterator<Item = XPolynomial<C>>,
    {
        let mut system = Self::new();
        for p in polynomials {
            system.push(p);
        }
        system
    }

    /// Adds a hypothesis; the system is no longer triangular.
    pub fn push(&mut self, polynomial: XPolynomial<C>) {
        self.hypotheses.push(Hypothesis {
            polynomial,
            variable: None,
        });
        self.triangular = false;
    }

    /// Returns the hypotheses. After triangulation they are sorted by
    /// ascending variable.
    #[must_use]
    pub fn hypotheses(&self) -> &[Hypothesis<C>] {
        &self.hypotheses
    }

    /// Returns the number of hypotheses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Returns true if there are no hypotheses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// Returns true once `triangulate` has succeeded.
    #[must_use]
    pub fn is_triangular(&self) -> bool {
        self.triangular
    }

    /// Returns true if the system is triangular and every entry is linear
    /// in its variable.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.triangular
            && self.hypotheses.iter().all(|h| match h.variable {
                Some(v) => h.polynomial.degree_in(v) == 1,
                None => true,
            })
    }

    /// Returns the non-degeneracy conditions collected by triangulation.
    #[must_use]
    pub fn ndg_conditions(&self) -> &[NdgCondition<C>] {
        &self.ndg_conditions
    }

    /// Moves the non-degeneracy conditions out of the system.
    pub fn take_ndg_conditions(&mut self) -> Vec<NdgCondition<C>> {
        std::mem::take(&mut self.ndg_conditions)
    }

    /// Returns the triangular entry for `var`.
    #[must_use]
    pub fn hypothesis_for(&self, var: XVar) -> Option<&Hypothesis<C>> {
        self.hypotheses.iter().find(|h| h.variable == Some(var))
    }

    /// Brings the system into triangular form.
    ///
    /// Hypotheses that reduce to zero are dropped. Variables no hypothesis
    /// mentions stay free. Every intermediate polynomial is measured
    /// against `budget`. On error the system is left as it was.
    ///
    /// Non-degeneracy conditions are the initials of the final entries
    /// only. Each remainder `r` satisfies `lc(pivot)^k * f = q * pivot + r`,
    /// so every common zero of the original hypotheses is a zero of the
    /// triangular set whatever the intermediate pivots' initials are.
    ///
    /// # Errors
    ///
    /// - `ProverError::SpaceLimit` / `ProverError::TimeLimit` from `budget`
    /// - `ProverError::DegenerateLeadingCoefficient` if a pseudo-division
    ///   step fails
    pub fn triangulate(
        &mut self,
        ctx: &ProverContext,
        budget: &mut Budget,
    ) -> Result<(), ProverError> {
        if self.triangular {
            return Ok(());
        }

        let mut pool = Vec::with_capacity(self.hypotheses.len());
        for h in &self.hypotheses {
            budget.observe(h.polynomial.term_count())?;
            if h.polynomial.is_zero() {
                debug!(target: "wu", "dropping zero hypothesis");
            } else {
                pool.push(h.polynomial.clone());
            }
        }

        let variables: BTreeSet<XVar> = pool.iter().flat_map(|p| p.variables()).collect();
        debug!(
            target: "wu",
            hypotheses = pool.len(),
            variables = variables.len(),
            "triangulation_start"
        );

        let mut entries: Vec<Hypothesis<C>> = Vec::with_capacity(variables.len());
        let mut ndg_conditions = Vec::new();

        for &var in variables.iter().rev() {
            budget.check_time()?;

            let (mut candidates, rest): (Vec<_>, Vec<_>) =
                pool.into_iter().partition(|p| p.contains(var));
            pool = rest;

            if candidates.is_empty() {
                trace!(target: "wu", %var, "variable left free");
                continue;
            }

            while candidates.len() > 1 {
                let pivot_index = candidates
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, p)| (p.degree_in(var), p.term_count()))
                    .map_or(0, |(i, _)| i);
                let pivot = candidates.swap_remove(pivot_index);

                let mut next = Vec::with_capacity(candidates.len() + 1);
                for other in candidates {
                    let rem = other.pseudo_remainder_with(
                        &pivot,
                        var,
                        ctx.multiplier(),
                        |step: &XPolynomial<C>| budget.check(step.term_count()),
                    )?;
                    let rem = rem.reduce_u_terms();
                    budget.observe(rem.term_count())?;

                    if rem.is_zero() {
                        debug!(target: "wu", %var, "hypothesis reduced to zero, dropped");
                    } else if rem.contains(var) {
                        next.push(rem);
                    } else {
                        pool.push(rem);
                    }
                }
                next.push(pivot);
                candidates = next;
            }

            let Some(entry) = candidates.pop() else {
                continue;
            };

            let lc = entry.leading_coefficient_in(var);
            if !is_numeric(&lc) {
                trace!(target: "wu", %var, ndg = %lc, "non-degeneracy condition");
                ndg_conditions.push(NdgCondition::new(lc, Some(var)));
            }

            entries.push(Hypothesis {
                polynomial: entry,
                variable: Some(var),
            });
        }

        for leftover in pool {
            warn!(
                target: "wu",
                polynomial = %leftover,
                "hypothesis constrains only free parameters"
            );
            entries.push(Hypothesis {
                polynomial: leftover,
                variable: None,
            });
        }

        entries.sort_by_key(|h| h.variable);
        debug!(
            target: "wu",
            entries = entries.len(),
            ndg = ndg_conditions.len(),
            max_terms = budget.largest_seen(),
            "triangulation_done"
        );

        self.hypotheses = entries;
        self.ndg_conditions = ndg_conditions;
        self.triangular = true;
        Ok(())
    }
}

/// True for a non-zero numeric constant.
fn is_numeric<C: Coefficient>(p: &XPolynomial<C>) -> bool {
    p.as_constant()
        .is_some_and(|c| !c.numerator().is_zero() && c.is_polynomial() && c.numerator().is_constant())
}

#[cfg(test)]
mod tests {
    use geoprove_core::{Phase, ProverConfig, ResultCode};
    use geoprove_poly::{UFraction, UPolynomial, UVar};
    use geoprove_rings::Q;

    use super::*;

    fn x(i: u32) -> XPolynomial<Q> {
        XPolynomial::var(XVar(i))
    }

    fn u(i: u32) -> XPolynomial<Q> {
        XPolynomial::from_uvar(UVar(i))
    }

    fn k(n: i64) -> XPolynomial<Q> {
        XPolynomial::constant(UFraction::from_i64(n))
    }

    fn triangulate(system: &mut XPolySystem<Q>, config: ProverConfig) -> Result<(), ProverError> {
        let ctx = ProverContext::sequential(config);
        let mut budget = ctx.budget(Phase::Triangulation);
        system.triangulate(&ctx, &mut budget)
    }

    #[test]
    fn test_already_triangular() {
        // x1 - u1, x2 - x1*u2
        let mut system = XPolySystem::from_polynomials([
            x(1).sub(&u(1)),
            x(2).sub(&x(1).mul(&u(2))),
        ]);
        triangulate(&mut system, ProverConfig::default()).unwrap();

        assert!(system.is_triangular());
        assert!(system.is_linear());
        assert_eq!(system.len(), 2);
        assert_eq!(system.hypotheses()[0].variable, Some(XVar(1)));
        assert_eq!(system.hypotheses()[1].variable, Some(XVar(2)));
        assert!(system.ndg_conditions().is_empty());
    }

    #[test]
    fn test_elimination_moves_remainder_down() {
        // x2 + x1 - u1 and x2 - x1 - u2 share x2; the remainder determines x1
        let mut system = XPolySystem::from_polynomials([
            x(2).add(&x(1)).sub(&u(1)),
            x(2).sub(&x(1)).sub(&u(2)),
        ]);
        triangulate(&mut system, ProverConfig::default()).unwrap();

        assert_eq!(system.len(), 2);
        let h1 = system.hypothesis_for(XVar(1)).unwrap();
        assert!(!h1.polynomial.contains(XVar(2)));
        assert_eq!(h1.polynomial.degree_in(XVar(1)), 1);
        assert!(system.hypothesis_for(XVar(2)).is_some());
    }

    #[test]
    fn test_zero_and_duplicate_hypotheses_dropped() {
        let h = x(1).sub(&u(1));
        let mut system = XPolySystem::from_polynomials([h.clone(), XPolynomial::zero(), h]);
        triangulate(&mut system, ProverConfig::default()).unwrap();
        assert_eq!(system.len(), 1);
    }

    #[test]
    fn test_non_numeric_leading_coefficient_is_ndg() {
        // u1*x1 - u2
        let mut system = XPolySystem::from_polynomials([x(1).mul(&u(1)).sub(&u(2))]);
        triangulate(&mut system, ProverConfig::default()).unwrap();

        assert_eq!(system.ndg_conditions().len(), 1);
        let ndg = &system.ndg_conditions()[0];
        assert_eq!(ndg.variable(), Some(XVar(1)));
        assert_eq!(
            *ndg.polynomial(),
            XPolynomial::from_u(UPolynomial::var(UVar(1)))
        );
    }

    #[test]
    fn test_quadratic_is_not_linear() {
        let mut system = XPolySystem::from_polynomials([x(1).pow(2).sub(&u(1))]);
        triangulate(&mut system, ProverConfig::default()).unwrap();
        assert!(system.is_triangular());
        assert!(!system.is_linear());
    }

    #[test]
    fn test_space_limit() {
        // h1 = x2*(x1 + u1 + u2 + u3) + x1 + 1 has 6 u-terms, h2 = x2^2 + x1
        // has 2. Eliminating x2 passes through a 6-term remainder and ends
        // at x1^3 + (2s + 1)*x1^2 + (s^2 + 2)*x1 + 1 with s = u1 + u2 + u3,
        // which has 13.
        let s = u(1).add(&u(2)).add(&u(3));
        let h1 = x(2).mul(&x(1).add(&s)).add(&x(1)).add(&k(1));
        let h2 = x(2).pow(2).add(&x(1));
        assert_eq!(h1.term_count(), 6);
        assert_eq!(h2.term_count(), 2);

        let mut system = XPolySystem::from_polynomials([h1, h2]);
        let err = triangulate(&mut system, ProverConfig::default().with_max_terms(10)).unwrap_err();

        assert_eq!(
            err,
            ProverError::SpaceLimit {
                phase: Phase::Triangulation,
                terms: 13,
                limit: 10,
            }
        );
        assert_eq!(err.code(), ResultCode::Space);
        assert!(!system.is_triangular());
        assert_eq!(system.len(), 2);

        triangulate(&mut system, ProverConfig::default()).unwrap();
        assert!(system.is_triangular());
        assert!(system.hypothesis_for(XVar(1)).is_some());
    }

    #[test]
    fn test_ndg_only_from_final_initials() {
        // u1*x2 + x1 is the first pivot for x2; x2^2 - u2 reduces by it to
        // x1^2 - u1^2*u2, which no longer mentions x2. The final entry for x2
        // is the pivot itself, and x1's entry has a numeric initial.
        let mut system = XPolySystem::from_polynomials([
            x(2).mul(&u(1)).add(&x(1)),
            x(2).pow(2).sub(&u(2)),
        ]);
        triangulate(&mut system, ProverConfig::default()).unwrap();

        assert_eq!(system.len(), 2);
        assert_eq!(system.hypothesis_for(XVar(1)).unwrap().polynomial.degree_in(XVar(1)), 2);
        let ndgs: Vec<_> = system.ndg_conditions().iter().map(|n| n.variable()).collect();
        assert_eq!(ndgs, [Some(XVar(2))]);
    }

    #[test]
    fn test_time_limit() {
        let mut system = XPolySystem::from_polynomials([x(1).sub(&u(1))]);
        let err = triangulate(&mut system, ProverConfig::default().with_time_limit_ms(0)).unwrap_err();
        assert_eq!(err.code(), ResultCode::Time);
    }
}
