//! A variable raised to a positive exponent.

use std::fmt;

use crate::error::PolyError;
use crate::variable::Variable;

/// A variable raised to a positive exponent.
///
/// Ordered by variable first and exponent second, which makes the derived
/// ordering of a descending power list the lexicographic monomial order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Power<V> {
    var: V,
    exponent: u32,
}

impl<V: Variable> Power<V> {
    /// Creates `var^exponent`.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is zero; a zero power is the constant 1 and is
    /// never stored.
    #[must_use]
    pub fn new(var: V, exponent: u32) -> Self {
        assert!(exponent > 0, "power of {var} must have a positive exponent");
        Self { var, exponent }
    }

    /// Returns the variable.
    #[must_use]
    pub fn var(&self) -> V {
        self.var
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Multiplies two powers of the same variable.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::PowerMismatch` if the variables differ.
    pub fn mul(self, other: &Self) -> Result<Self, PolyError> {
        if self.var != other.var {
            return Err(PolyError::PowerMismatch {
                left: self.var.to_string(),
                right: other.var.to_string(),
            });
        }
        Ok(Self {
            var: self.var,
            exponent: self.exponent + other.exponent,
        })
    }
}

impl<V: Variable> fmt::Display for Power<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.var)
        } else {
            write!(f, "{}^{}", self.var, self.exponent)
        }
    }
}
