//! Quotients of u-polynomials, the coefficients of x-polynomials.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use geoprove_rings::Coefficient;
use num_traits::{One, Zero};

use crate::error::PolyError;
use crate::flavors::UPolynomial;

/// A quotient `num / den` of two u-polynomials.
///
/// Kept normalised: zero is `0/1`, a constant denominator is folded into
/// the numerator, a denominator that divides the numerator (or the other
/// way round) is cancelled, the common monomial factor is removed and the
/// denominator's leading coefficient is 1.
#[derive(Clone, Debug)]
pub struct UFraction<C: Coefficient> {
    num: UPolynomial<C>,
    den: UPolynomial<C>,
}

impl<C: Coefficient> UFraction<C> {
    /// Creates a normalised fraction.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ZeroDivisor` if `den` is zero.
    pub fn new(num: UPolynomial<C>, den: UPolynomial<C>) -> Result<Self, PolyError> {
        if den.is_zero() {
            return Err(PolyError::ZeroDivisor);
        }
        Ok(Self::normalized(num, den))
    }

    /// Embeds a polynomial.
    #[must_use]
    pub fn from_poly(num: UPolynomial<C>) -> Self {
        Self {
            num,
            den: UPolynomial::one(),
        }
    }

    /// Embeds a scalar.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::from_poly(UPolynomial::constant(c))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &UPolynomial<C> {
        &self.num
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &UPolynomial<C> {
        &self.den
    }

    /// Splits into numerator and denominator.
    #[must_use]
    pub fn into_parts(self) -> (UPolynomial<C>, UPolynomial<C>) {
        (self.num, self.den)
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.den.as_constant().is_some_and(|c| c.is_one())
    }

    /// Number of stored u-terms, denominator included unless it is 1.
    #[must_use]
    pub fn term_count(&self) -> usize {
        if self.is_polynomial() {
            self.num.len()
        } else {
            self.num.len() + self.den.len()
        }
    }

    fn normalized(num: UPolynomial<C>, den: UPolynomial<C>) -> Self {
        if num.is_zero() {
            return Self::zero();
        }

        if let Some(inv) = den.as_constant().and_then(|k| k.inv()) {
            return Self::from_poly(num.mul_constant(&inv));
        }

        if let Some(q) = num.div_exact(&den) {
            return Self::from_poly(q);
        }

        let (mut num, mut den) = match den.div_exact(&num) {
            Some(q) => (UPolynomial::one(), q),
            None => (num, den),
        };

        let common = num.content_monomial().gcd(&den.content_monomial());
        if !common.is_one() {
            if let (Some(n), Some(d)) = (num.div_monomial(&common), den.div_monomial(&common)) {
                num = n;
                den = d;
            }
        }

        match den.as_constant() {
            Some(k) => match k.inv() {
                Some(inv) => Self::from_poly(num.mul_constant(&inv)),
                None => Self { num, den },
            },
            None => match den.leading_coefficient().and_then(Coefficient::inv) {
                Some(inv) => Self {
                    num: num.mul_constant(&inv),
                    den: den.mul_constant(&inv),
                },
                None => Self { num, den },
            },
        }
    }
}

impl<C: Coefficient> PartialEq for UFraction<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.den == other.den {
            return self.num.approx_eq(&other.num);
        }
        self.num
            .clone()
            .mul(&other.den)
            .approx_eq(&other.num.clone().mul(&self.den))
    }
}

impl<C: Coefficient> Zero for UFraction<C> {
    fn zero() -> Self {
        Self::from_poly(UPolynomial::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl<C: Coefficient> One for UFraction<C> {
    fn one() -> Self {
        Self::from_poly(UPolynomial::one())
    }

    fn is_one(&self) -> bool {
        self.num == self.den
    }
}

impl<C: Coefficient> Add for UFraction<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.is_polynomial() && rhs.is_polynomial() {
            return Self::from_poly(self.num.add(&rhs.num));
        }
        if self.den == rhs.den {
            return Self::normalized(self.num.add(&rhs.num), self.den);
        }
        let num = self.num.mul(&rhs.den).add(&rhs.num.mul(&self.den));
        Self::normalized(num, self.den.mul(&rhs.den))
    }
}

impl<C: Coefficient> Sub for UFraction<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<C: Coefficient> Mul for UFraction<C> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        if self.is_polynomial() && rhs.is_polynomial() {
            return Self::from_poly(self.num.mul(&rhs.num));
        }
        Self::normalized(self.num.mul(&rhs.num), self.den.mul(&rhs.den))
    }
}

impl<C: Coefficient> Neg for UFraction<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: self.num.invert(),
            den: self.den,
        }
    }
}

impl<C: Coefficient> Coefficient for UFraction<C> {
    fn inv(&self) -> Option<Self> {
        if self.num.is_zero() {
            None
        } else {
            Some(Self::normalized(self.den.clone(), self.num.clone()))
        }
    }

    fn from_i64(n: i64) -> Self {
        Self::constant(C::from_i64(n))
    }

    fn from_ratio(num: i64, den: i64) -> Self {
        Self::constant(C::from_ratio(num, den))
    }

    fn is_negative(&self) -> bool {
        self.num.leading_coefficient().is_some_and(Coefficient::is_negative)
    }
}

impl<C: Coefficient> fmt::Display for UFraction<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_polynomial() {
            if self.num.len() > 1 {
                write!(f, "({})", self.num)
            } else {
                write!(f, "{}", self.num)
            }
        } else {
            write!(f, "({})/({})", self.num, self.den)
        }
    }
}
