//! Monomials as sorted power lists.
//!
//! A monomial is a product of powers of distinct variables, stored in
//! descending variable order. Most monomials in geometry proofs mention a
//! handful of coordinates, so the list lives inline up to four powers.
//!
//! The derived ordering compares the power lists element by element, which
//! is the lexicographic order induced by the variable order: the monomial
//! with the greater leading variable wins, ties go to the higher exponent,
//! then to the next power.

use std::fmt;

use smallvec::SmallVec;

use crate::power::Power;
use crate::variable::Variable;

/// A product of powers of distinct variables.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Monomial<V: Variable> {
    powers: SmallVec<[Power<V>; 4]>,
}

impl<V: Variable> Monomial<V> {
    /// The empty product, 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            powers: SmallVec::new(),
        }
    }

    /// The monomial `var`.
    #[must_use]
    pub fn var(var: V) -> Self {
        Self::var_pow(var, 1)
    }

    /// The monomial `var^exponent`; 1 when the exponent is zero.
    #[must_use]
    pub fn var_pow(var: V, exponent: u32) -> Self {
        let mut powers = SmallVec::new();
        if exponent > 0 {
            powers.push(Power::new(var, exponent));
        }
        Self { powers }
    }

    /// Builds a monomial from `(variable, exponent)` pairs in any order.
    ///
    /// Repeated variables are merged and zero exponents dropped.
    pub fn from_exponents<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, u32)>,
    {
        pairs
            .into_iter()
            .fold(Self::one(), |acc, (v, e)| acc.mul(&Self::var_pow(v, e)))
    }

    /// Returns the powers in descending variable order.
    #[must_use]
    pub fn powers(&self) -> &[Power<V>] {
        &self.powers
    }

    /// Returns true for the empty product.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.powers.is_empty()
    }

    /// Returns the exponent of `var` (zero when absent).
    #[must_use]
    pub fn degree_in(&self, var: V) -> u32 {
        self.powers
            .iter()
            .find(|p| p.var() == var)
            .map_or(0, Power::exponent)
    }

    /// Returns the sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.powers.iter().map(Power::exponent).sum()
    }

    /// Returns the greatest variable, if any.
    #[must_use]
    pub fn leading_var(&self) -> Option<V> {
        self.powers.first().map(Power::var)
    }

    /// Returns true if `var` occurs.
    #[must_use]
    pub fn contains(&self, var: V) -> bool {
        self.powers.iter().any(|p| p.var() == var)
    }

    /// Iterates over the variables in descending order.
    pub fn variables(&self) -> impl Iterator<Item = V> + '_ {
        self.powers.iter().map(Power::var)
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.merge_with(other, |a, b| a + b)
    }

    /// Divides by another monomial if possible.
    ///
    /// Returns `Some(quotient)` if `other` divides `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        let mut powers = SmallVec::new();
        let mut rest = other.powers.iter().peekable();

        for p in &self.powers {
            match rest.peek().map(|q| **q) {
                Some(q) if q.var() > p.var() => return None,
                Some(q) if q.var() == p.var() => {
                    rest.next();
                    match p.exponent().checked_sub(q.exponent()) {
                        None => return None,
                        Some(0) => {}
                        Some(e) => powers.push(Power::new(p.var(), e)),
                    }
                }
                _ => powers.push(*p),
            }
        }

        if rest.next().is_some() {
            return None;
        }
        Some(Self { powers })
    }

    /// Returns true if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.powers
            .iter()
            .all(|p| other.degree_in(p.var()) >= p.exponent())
    }

    /// Computes the greatest common divisor of two monomials.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let powers = self
            .powers
            .iter()
            .filter_map(|p| {
                let e = p.exponent().min(other.degree_in(p.var()));
                (e > 0).then(|| Power::new(p.var(), e))
            })
            .collect();
        Self { powers }
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        self.merge_with(other, u32::max)
    }

    /// Removes `var`, returning the remaining monomial and its exponent.
    #[must_use]
    pub fn without(&self, var: V) -> (Self, u32) {
        let exponent = self.degree_in(var);
        let powers = self.powers.iter().filter(|p| p.var() != var).copied().collect();
        (Self { powers }, exponent)
    }

    fn merge_with(&self, other: &Self, combine: impl Fn(u32, u32) -> u32) -> Self {
        let mut powers = SmallVec::with_capacity(self.powers.len() + other.powers.len());
        let mut a = self.powers.iter().peekable();
        let mut b = other.powers.iter().peekable();

        loop {
            match (a.peek().map(|p| **p), b.peek().map(|q| **q)) {
                (Some(p), Some(q)) if p.var() == q.var() => {
                    powers.push(Power::new(p.var(), combine(p.exponent(), q.exponent())));
                    a.next();
                    b.next();
                }
                (Some(p), Some(q)) if p.var() > q.var() => {
                    powers.push(p);
                    a.next();
                }
                (_, Some(q)) => {
                    powers.push(q);
                    b.next();
                }
                (Some(p), None) => {
                    powers.push(p);
                    a.next();
                }
                (None, None) => break,
            }
        }

        Self { powers }
    }
}

impl<V: Variable> fmt::Display for Monomial<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.powers.is_empty() {
            return write!(f, "1");
        }
        for (i, p) in self.powers.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
