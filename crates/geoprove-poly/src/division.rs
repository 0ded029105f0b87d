//! Pseudo-division with respect to one variable.
//!
//! For `f` and `g` of degrees `m >= n` in `x`, each step replaces `f` by
//! `lc(g) * f - lc(f) * x^(m - n) * g`, where the leading coefficients are
//! taken with respect to `x`. The leading terms cancel, so the degree drops
//! by at least one, and no coefficient is ever divided. The loop stops once
//! the degree is below `n`; what is left is the pseudo-remainder.

use geoprove_rings::Coefficient;
use tracing::trace;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::parallel::Multiplier;
use crate::polynomial::Polynomial;
use crate::variable::Variable;

impl<V: Variable, C: Coefficient> Polynomial<V, C> {
    /// Computes the pseudo-remainder of `self` by `divisor` in `var`.
    ///
    /// # Errors
    ///
    /// See [`Polynomial::pseudo_remainder_with`].
    pub fn pseudo_remainder(&self, divisor: &Self, var: V) -> Result<Self, PolyError> {
        self.pseudo_remainder_with(divisor, var, &Multiplier::sequential(), |_| Ok(()))
    }

    /// Computes the pseudo-remainder of `self` by `divisor` in `var`,
    /// calling `on_step` with every intermediate polynomial.
    ///
    /// A divisor free of `var`, or a dividend of lower degree in `var`, leaves
    /// the dividend unchanged.
    ///
    /// # Errors
    ///
    /// - `PolyError::ZeroDivisor` if `divisor` is zero
    /// - `PolyError::DegenerateLeadingCoefficient` if a step fails to lower
    ///   the degree
    /// - any error returned by `on_step`
    pub fn pseudo_remainder_with<E, F>(
        &self,
        divisor: &Self,
        var: V,
        multiplier: &Multiplier,
        mut on_step: F,
    ) -> Result<Self, E>
    where
        E: From<PolyError>,
        F: FnMut(&Self) -> Result<(), E>,
    {
        if divisor.is_zero() {
            return Err(PolyError::ZeroDivisor.into());
        }

        let divisor_degree = divisor.degree_in(var);
        let mut degree = self.degree_in(var);
        if divisor_degree == 0 || degree < divisor_degree {
            return Ok(self.clone());
        }

        let lc_divisor = divisor.leading_coefficient_in(var);
        let mut rem = self.clone();

        while !rem.is_zero() && degree >= divisor_degree {
            let lc_rem = rem.leading_coefficient_in(var);
            let shift = Monomial::var_pow(var, degree - divisor_degree);

            let scaled = multiplier.mul(&rem, &lc_divisor);
            let cancel = multiplier.mul(&lc_rem.mul_monomial(&shift), divisor);
            let next = scaled.sub(&cancel);

            let next_degree = next.degree_in(var);
            if !next.is_zero() && next_degree >= degree {
                return Err(PolyError::DegenerateLeadingCoefficient {
                    variable: var.to_string(),
                }
                .into());
            }

            trace!(%var, degree, next_degree, terms = next.len(), "pseudo-division step");
            on_step(&next)?;
            rem = next;
            degree = next_degree;
        }

        Ok(rem)
    }
}
