//! Exact rational coefficients.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use dashu::base::{Inverse, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};

use crate::traits::Coefficient;

/// An arbitrary precision rational number.
///
/// Always stored in lowest terms with a positive denominator, so the
/// derived equality is exact.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, UBig::from(den.unsigned_abs())))
    }

    /// Creates an integer-valued rational.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Zero for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Q {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Coefficient for Q {
    fn inv(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }

    fn from_ratio(num: i64, den: i64) -> Self {
        Self::new(num, den)
    }

    fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        assert_eq!(a.clone() + b.clone(), Q::new(17, 12));
        // 2/3 * 3/4 = 1/2
        assert_eq!(a * b, Q::new(1, 2));
    }

    #[test]
    fn test_sign_normalisation() {
        assert_eq!(Q::new(1, -2), Q::new(-1, 2));
        assert!(Q::new(1, -2).is_negative());
        assert_eq!(Q::new(4, 6), Q::new(2, 3));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();
        assert!((a * inv).is_one());
        assert_eq!(Q::zero().inv(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Q::from_integer(3).to_string(), "3");
        assert_eq!(Q::new(-2, 3).to_string(), "-2/3");
    }
}
