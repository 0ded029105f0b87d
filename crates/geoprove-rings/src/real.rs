//! Double-precision coefficients with an epsilon-tolerant zero test.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::traits::Coefficient;

/// A double-precision coefficient.
///
/// Values closer than [`Real::EPSILON`] compare equal, and a value whose
/// magnitude is below it is zero. Equality is therefore not transitive
/// over long chains; it is meant for cancellation tests, not hashing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Real(pub f64);

impl Real {
    /// Tolerance for every zero and equality test.
    pub const EPSILON: f64 = 1e-6;

    /// Wraps a value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < Self::EPSILON
    }
}

impl Zero for Real {
    fn zero() -> Self {
        Self(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.abs() < Self::EPSILON
    }
}

impl One for Real {
    fn one() -> Self {
        Self(1.0)
    }

    fn is_one(&self) -> bool {
        (self.0 - 1.0).abs() < Self::EPSILON
    }
}

impl Coefficient for Real {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(1.0 / self.0))
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        Self(n as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_ratio(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self(num as f64 / den as f64)
    }

    fn is_negative(&self) -> bool {
        self.0 < 0.0 && !self.is_zero()
    }
}

impl Add for Real {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Real {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Real {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Real {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Real {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Real {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for Real {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round();
        if (self.0 - rounded).abs() < Self::EPSILON && rounded.abs() < 1e15 {
            write!(f, "{}", rounded as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
