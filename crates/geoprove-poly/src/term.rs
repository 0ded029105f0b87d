//! A coefficient times a monomial.

use std::fmt;

use geoprove_rings::Coefficient;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::variable::Variable;

/// A coefficient times a monomial.
///
/// Arithmetic consumes the term; clone a shared term before changing it.
#[derive(Clone, PartialEq, Debug)]
pub struct Term<V: Variable, C> {
    coeff: C,
    monomial: Monomial<V>,
}

impl<V: Variable, C: Coefficient> Term<V, C> {
    /// Creates `coeff * monomial`.
    #[must_use]
    pub fn new(coeff: C, monomial: Monomial<V>) -> Self {
        Self { coeff, monomial }
    }

    /// Creates a constant term.
    #[must_use]
    pub fn constant(coeff: C) -> Self {
        Self::new(coeff, Monomial::one())
    }

    /// Creates `coeff * var^exponent`.
    #[must_use]
    pub fn var_pow(coeff: C, var: V, exponent: u32) -> Self {
        Self::new(coeff, Monomial::var_pow(var, exponent))
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &C {
        &self.coeff
    }

    /// Returns the monomial.
    #[must_use]
    pub fn monomial(&self) -> &Monomial<V> {
        &self.monomial
    }

    /// Splits the term into its monomial and coefficient.
    #[must_use]
    pub fn into_parts(self) -> (Monomial<V>, C) {
        (self.monomial, self.coeff)
    }

    /// Returns true if the coefficient vanishes under the domain's zero test.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Adds a like term.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::MonomialMismatch` if the monomials differ.
    pub fn merge(self, other: Self) -> Result<Self, PolyError> {
        if self.monomial != other.monomial {
            return Err(PolyError::MonomialMismatch {
                left: self.monomial.to_string(),
                right: other.monomial.to_string(),
            });
        }
        Ok(Self {
            coeff: self.coeff + other.coeff,
            monomial: self.monomial,
        })
    }

    /// Multiplies by another term.
    #[must_use]
    pub fn mul(self, other: &Self) -> Self {
        Self {
            coeff: self.coeff * other.coeff.clone(),
            monomial: self.monomial.mul(&other.monomial),
        }
    }

    /// Divides by another term.
    ///
    /// Returns `None` unless both the monomial and the coefficient divide.
    #[must_use]
    pub fn div(self, other: &Self) -> Option<Self> {
        let monomial = self.monomial.div(&other.monomial)?;
        let coeff = self.coeff.div_exact(&other.coeff)?;
        Some(Self { coeff, monomial })
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn invert(self) -> Self {
        Self {
            coeff: -self.coeff,
            monomial: self.monomial,
        }
    }
}

impl<V: Variable, C: Coefficient> fmt::Display for Term<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_one() {
            write!(f, "{}", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "{}", self.monomial)
        } else {
            write!(f, "{}*{}", self.coeff, self.monomial)
        }
    }
}

#[cfg(test)]
mod tests {
    use geoprove_rings::{Real, Q};
    use num_traits::Zero;

    use super::*;
    use crate::variable::{UVar, XVar};

    #[test]
    fn test_merge_like_terms() {
        let a = Term::var_pow(Q::from_integer(2), XVar(1), 2);
        let b = Term::var_pow(Q::from_integer(-2), XVar(1), 2);
        assert!(a.merge(b).unwrap().is_zero());
    }

    #[test]
    fn test_merge_mismatch() {
        let a = Term::var_pow(Q::from_integer(1), XVar(1), 2);
        let b = Term::var_pow(Q::from_integer(1), XVar(1), 3);
        assert!(matches!(a.merge(b), Err(PolyError::MonomialMismatch { .. })));
    }

    #[test]
    fn test_mul_div() {
        let a = Term::var_pow(Real(3.0), UVar(1), 2);
        let b = Term::var_pow(Real(2.0), UVar(2), 1);
        let ab = a.clone().mul(&b);

        assert_eq!(*ab.coefficient(), Real(6.0));
        assert_eq!(ab.clone().div(&b), Some(a.clone()));
        assert_eq!(a.div(&b), None);
    }

    #[test]
    fn test_epsilon_zero() {
        let t = Term::<UVar, Real>::constant(Real(1e-8));
        assert!(t.is_zero());
        assert!(!Term::<UVar, Real>::constant(Real(1.0)).is_zero());
        assert!(Term::<UVar, Real>::constant(Real::zero()).is_zero());
    }

    #[test]
    fn test_invert() {
        let t = Term::var_pow(Q::from_integer(5), XVar(2), 1).invert();
        assert_eq!(*t.coefficient(), Q::from_integer(-5));
        assert_eq!(t.to_string(), "-5*x2");
    }
}
