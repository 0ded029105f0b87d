//! The three polynomial flavours used by the prover.

use geoprove_rings::Coefficient;

use crate::monomial::Monomial;
use crate::polynomial::Polynomial;
use crate::ufraction::UFraction;
use crate::variable::{SymbolicVar, UVar, XVar};

/// A polynomial in the free parameters.
pub type UPolynomial<C> = Polynomial<UVar, C>;

/// A polynomial in the dependent coordinates, with u-fraction coefficients.
pub type XPolynomial<C> = Polynomial<XVar, UFraction<C>>;

/// A polynomial over placeholder point coordinates.
pub type SymbolicPolynomial<C> = Polynomial<SymbolicVar, C>;

impl<C: Coefficient> Polynomial<XVar, UFraction<C>> {
    /// Embeds a u-polynomial as a constant x-polynomial.
    #[must_use]
    pub fn from_u(p: UPolynomial<C>) -> Self {
        Self::constant(UFraction::from_poly(p))
    }

    /// Embeds a single free parameter; the origin parameter is zero.
    #[must_use]
    pub fn from_uvar(u: UVar) -> Self {
        if u.is_origin() {
            Self::zero()
        } else {
            Self::from_u(UPolynomial::var(u))
        }
    }

    /// Total number of u-terms across all coefficients.
    ///
    /// This is the size that counts against the space limit: a single
    /// x-term whose coefficient expands into many u-terms is large.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.iter().map(|(_, c)| c.term_count()).sum()
    }

    /// Normalises the u-part of the coefficients without changing the zero
    /// set for generic parameter values.
    ///
    /// In order: denominators are cleared, the monomial common to every
    /// numerator is divided out, and the polynomial is divided by its
    /// leading coefficient if that divides every coefficient; failing
    /// that, it is scaled so the leading numeric coefficient is 1.
    #[must_use]
    pub fn reduce_u_terms(self) -> Self {
        if self.is_zero() {
            return self;
        }

        let cleared = self.clear_denominators();

        let common = cleared
            .iter()
            .map(|(_, c)| c.numerator().content_monomial())
            .reduce(|a, b| a.gcd(&b))
            .unwrap_or_else(Monomial::one);
        let cleared = if common.is_one() {
            cleared
        } else {
            cleared.map_u_numerators(|n| n.div_monomial(&common))
        };

        let Some(lead) = cleared.leading_coefficient().map(|c| c.numerator().clone()) else {
            return cleared;
        };
        if lead.is_constant() {
            return cleared.scale_by_inverse_of(lead.as_constant());
        }

        let all_divide = cleared
            .iter()
            .all(|(_, c)| c.numerator().div_exact(&lead).is_some());
        if all_divide {
            return cleared.map_u_numerators(|n| n.div_exact(&lead));
        }

        let numeric = lead.leading_coefficient().cloned();
        cleared.scale_by_inverse_of(numeric)
    }

    fn clear_denominators(self) -> Self {
        let mut factors: Vec<UPolynomial<C>> = Vec::new();
        for (_, c) in self.iter() {
            if c.is_polynomial() {
                continue;
            }
            let den = c.denominator();
            if !factors.iter().any(|f| f == den) {
                factors.push(den.clone());
            }
        }
        if factors.is_empty() {
            return self;
        }

        let multiplier = factors
            .into_iter()
            .fold(UPolynomial::one(), |acc, f| acc.mul(&f));
        self.mul_constant(&UFraction::from_poly(multiplier))
    }

    fn map_u_numerators<F>(self, mut f: F) -> Self
    where
        F: FnMut(&UPolynomial<C>) -> Option<UPolynomial<C>>,
    {
        let mut result = Self::zero();
        for term in self.into_terms() {
            let (m, c) = term.into_parts();
            let mapped = match f(c.numerator()) {
                Some(num) => UFraction::from_poly(num),
                None => c,
            };
            result.accumulate(m, mapped);
        }
        result
    }

    fn scale_by_inverse_of(self, k: Option<C>) -> Self {
        match k.and_then(|k| k.inv()) {
            Some(inv) if !inv.is_one() => self.mul_constant(&UFraction::constant(inv)),
            _ => self,
        }
    }
}

/// Builds `c * x` for tests and small constructions.
#[must_use]
pub fn x_linear<C: Coefficient>(coeff: UPolynomial<C>, var: XVar) -> XPolynomial<C> {
    if coeff.is_zero() {
        return XPolynomial::zero();
    }
    XPolynomial::var(var).mul_constant(&UFraction::from_poly(coeff))
}

#[cfg(test)]
mod tests {
    use geoprove_rings::{Real, Q};
    use num_traits::One;

    use super::*;

    fn u(i: u32) -> UPolynomial<Q> {
        UPolynomial::var(UVar(i))
    }

    fn q(n: i64) -> UPolynomial<Q> {
        UPolynomial::constant(Q::from_integer(n))
    }

    fn x(i: u32) -> XPolynomial<Q> {
        XPolynomial::var(XVar(i))
    }

    #[test]
    fn test_origin_is_zero() {
        assert!(XPolynomial::<Q>::from_uvar(UVar::ORIGIN).is_zero());
        assert!(!XPolynomial::<Q>::from_uvar(UVar(1)).is_zero());
    }

    #[test]
    fn test_term_count_expands_coefficients() {
        // (u1 + u2 + u3)*x1 + 1 has 2 x-terms and 4 u-terms
        let p = x_linear(u(1).add(&u(2)).add(&u(3)), XVar(1)).add(&XPolynomial::from_u(q(1)));
        assert_eq!(p.len(), 2);
        assert_eq!(p.term_count(), 4);
    }

    #[test]
    fn test_reduce_numeric_leading_coefficient() {
        // 2*x1 - u1  ->  x1 - 1/2*u1
        let p = x(1).mul_constant(&UFraction::from_i64(2)).sub(&XPolynomial::from_u(u(1)));
        let reduced = p.reduce_u_terms();
        let expected = x(1).sub(&XPolynomial::from_u(u(1).mul_constant(&Q::new(1, 2))));
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_reduce_divides_by_leading_coefficient() {
        // u1*x1 - u1*u2  ->  x1 - u2
        let p = x_linear(u(1), XVar(1)).sub(&XPolynomial::from_u(u(1).mul(&u(2))));
        let reduced = p.reduce_u_terms();
        assert_eq!(reduced, x(1).sub(&XPolynomial::from_u(u(2))));
    }

    #[test]
    fn test_reduce_clears_denominators() {
        // x1 - u2/u1  ->  u1*x1 - u2
        let frac = UFraction::new(u(2), u(1)).unwrap();
        let p = x(1).sub(&XPolynomial::constant(frac));
        let reduced = p.reduce_u_terms();
        assert_eq!(reduced, x_linear(u(1), XVar(1)).sub(&XPolynomial::from_u(u(2))));
        assert!(reduced.iter().all(|(_, c)| c.is_polynomial()));
    }

    #[test]
    fn test_reduce_scales_when_lead_does_not_divide() {
        // 2*(u1 + 1)*x1 + u2  ->  (u1 + 1)*x1 + 1/2*u2
        let p = x_linear(u(1).add(&q(1)).mul_constant(&Q::from_integer(2)), XVar(1))
            .add(&XPolynomial::from_u(u(2)));
        let reduced = p.reduce_u_terms();
        let expected = x_linear(u(1).add(&q(1)), XVar(1))
            .add(&XPolynomial::from_u(u(2).mul_constant(&Q::new(1, 2))));
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_reduce_real_coefficients() {
        let p = XPolynomial::<Real>::var(XVar(1))
            .mul_constant(&UFraction::from_i64(4))
            .sub(&XPolynomial::from_u(UPolynomial::var(UVar(1))));
        let reduced = p.reduce_u_terms();
        assert!(reduced.leading_coefficient().is_some_and(One::is_one));
        assert_eq!(reduced.len(), 2);
    }
}
