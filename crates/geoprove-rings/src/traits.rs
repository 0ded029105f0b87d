//! The coefficient trait.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// A coefficient domain for polynomial terms.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - `is_zero` decides when a term vanishes; implementations with inexact
///   arithmetic must make it tolerant
pub trait Coefficient:
    Clone
    + Debug
    + Display
    + PartialEq
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Multiplicative inverse, `None` when the element is not invertible.
    fn inv(&self) -> Option<Self>;

    /// Embeds an integer.
    fn from_i64(n: i64) -> Self;

    /// Embeds the fraction `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    fn from_ratio(num: i64, den: i64) -> Self;

    /// Returns true if the element prints with a leading minus sign.
    fn is_negative(&self) -> bool;

    /// Equality under the domain's zero test.
    fn approx_eq(&self, other: &Self) -> bool {
        (self.clone() - other.clone()).is_zero()
    }

    /// Exact quotient, `None` when `other` does not divide `self`.
    fn div_exact(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }

    /// Computes self^n.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}
