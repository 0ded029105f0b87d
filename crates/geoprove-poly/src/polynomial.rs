//! Sparse multivariate polynomials.
//!
//! Terms are kept in a `BTreeMap` keyed by monomial, so like terms are
//! merged on insertion and the leading term is the greatest key. A
//! coefficient that vanishes under the domain's zero test is removed on the
//! spot, so no stored term is ever zero.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use geoprove_rings::Coefficient;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::term::Term;
use crate::variable::Variable;

/// A sparse multivariate polynomial over variables `V` with coefficients `C`.
///
/// Arithmetic consumes the receiver and returns the result, so a polynomial
/// that is still needed elsewhere has to be cloned first.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<V: Variable, C> {
    terms: BTreeMap<Monomial<V>, C>,
}

impl<V: Variable, C: Coefficient> Default for Polynomial<V, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<V: Variable, C: Coefficient> Polynomial<V, C> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::from_term(Term::constant(c))
    }

    /// Creates the polynomial `var`.
    #[must_use]
    pub fn var(var: V) -> Self {
        Self::from_term(Term::var_pow(C::one(), var, 1))
    }

    /// Creates a single-term polynomial.
    #[must_use]
    pub fn from_term(term: Term<V, C>) -> Self {
        Self::zero().add_term(term)
    }

    /// Creates a polynomial from terms; like terms are merged.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term<V, C>>,
    {
        let mut poly = Self::zero();
        for term in terms {
            let (m, c) = term.into_parts();
            poly.accumulate(m, c);
        }
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if the polynomial has no variables.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }

    /// Returns the constant coefficient if the polynomial is constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<C> {
        if self.is_zero() {
            Some(C::zero())
        } else if self.is_constant() {
            self.terms.values().next().cloned()
        } else {
            None
        }
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(monomial, coefficient)` pairs, leading term first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Monomial<V>, &C)> + '_ {
        self.terms.iter().rev()
    }

    /// Iterates over the terms, leading term first.
    pub fn terms(&self) -> impl Iterator<Item = Term<V, C>> + '_ {
        self.iter().map(|(m, c)| Term::new(c.clone(), m.clone()))
    }

    /// Consumes the polynomial into its terms, leading term first.
    pub fn into_terms(self) -> impl Iterator<Item = Term<V, C>> {
        self.terms.into_iter().rev().map(|(m, c)| Term::new(c, m))
    }

    /// Adds `coeff * monomial` in place, dropping the entry if it cancels.
    pub(crate) fn accumulate(&mut self, monomial: Monomial<V>, coeff: C) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let sum = slot.get().clone() + coeff;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// Adds a term, merging it with a like term if present.
    ///
    /// A zero term is dropped.
    #[must_use]
    pub fn add_term(mut self, term: Term<V, C>) -> Self {
        let (m, c) = term.into_parts();
        self.accumulate(m, c);
        self
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(mut self, other: &Self) -> Self {
        for (m, c) in &other.terms {
            self.accumulate(m.clone(), c.clone());
        }
        self
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(mut self, other: &Self) -> Self {
        for (m, c) in &other.terms {
            self.accumulate(m.clone(), -c.clone());
        }
        self
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn invert(self) -> Self {
        Self {
            terms: self.terms.into_iter().map(|(m, c)| (m, -c)).collect(),
        }
    }

    /// Multiplies by a term.
    #[must_use]
    pub fn mul_term(self, term: &Term<V, C>) -> Self {
        if term.is_zero() {
            return Self::zero();
        }
        let mut result = Self::zero();
        for (m, c) in self.terms {
            result.accumulate(
                m.mul(term.monomial()),
                c * term.coefficient().clone(),
            );
        }
        result
    }

    /// Multiplies by a monomial.
    #[must_use]
    pub fn mul_monomial(self, monomial: &Monomial<V>) -> Self {
        Self {
            terms: self
                .terms
                .into_iter()
                .map(|(m, c)| (m.mul(monomial), c))
                .collect(),
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn mul_constant(self, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut result = Self::zero();
        for (m, x) in self.terms {
            result.accumulate(m, x * c.clone());
        }
        result
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// Every term pair is merged into the result, since distinct pairs can
    /// land on the same monomial.
    #[must_use]
    pub fn mul(self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut result = Self::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                result.accumulate(m1.mul(m2), c1.clone() * c2.clone());
            }
        }
        result
    }

    /// Computes self^n by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone().mul(&base);
            }
        }

        result
    }

    /// Computes the total degree (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms
            .keys()
            .map(Monomial::total_degree)
            .max()
            .unwrap_or(0)
    }

    /// Returns the degree in `var`.
    #[must_use]
    pub fn degree_in(&self, var: V) -> u32 {
        self.terms
            .keys()
            .map(|m| m.degree_in(var))
            .max()
            .unwrap_or(0)
    }

    /// Returns the leading term under the lexicographic order.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term<V, C>> {
        self.terms
            .last_key_value()
            .map(|(m, c)| Term::new(c.clone(), m.clone()))
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial<V>> {
        self.terms.last_key_value().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<&C> {
        self.terms.last_key_value().map(|(_, c)| c)
    }

    /// Returns the greatest variable occurring in the polynomial.
    #[must_use]
    pub fn leading_var(&self) -> Option<V> {
        self.leading_monomial().and_then(Monomial::leading_var)
    }

    /// Returns the coefficient of `var^degree`, a polynomial free of `var`.
    #[must_use]
    pub fn coefficient_of(&self, var: V, degree: u32) -> Self {
        let mut result = Self::zero();
        for (m, c) in &self.terms {
            let (rest, e) = m.without(var);
            if e == degree {
                result.accumulate(rest, c.clone());
            }
        }
        result
    }

    /// Returns the coefficient of the highest power of `var`.
    #[must_use]
    pub fn leading_coefficient_in(&self, var: V) -> Self {
        self.coefficient_of(var, self.degree_in(var))
    }

    /// Returns true if `var` occurs.
    #[must_use]
    pub fn contains(&self, var: V) -> bool {
        self.terms.keys().any(|m| m.contains(var))
    }

    /// Returns the set of occurring variables.
    #[must_use]
    pub fn variables(&self) -> BTreeSet<V> {
        self.terms.keys().flat_map(Monomial::variables).collect()
    }

    /// Equality under the coefficient domain's zero test.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.clone().sub(other).is_zero()
    }

    /// Computes the greatest monomial dividing every term.
    #[must_use]
    pub fn content_monomial(&self) -> Monomial<V> {
        let mut keys = self.terms.keys();
        let Some(first) = keys.next() else {
            return Monomial::one();
        };
        keys.fold(first.clone(), |acc, m| acc.gcd(m))
    }

    /// Divides every term by `monomial`.
    ///
    /// Returns `None` if some term is not divisible.
    #[must_use]
    pub fn div_monomial(&self, monomial: &Monomial<V>) -> Option<Self> {
        let mut terms = BTreeMap::new();
        for (m, c) in &self.terms {
            terms.insert(m.div(monomial)?, c.clone());
        }
        Some(Self { terms })
    }

    /// Multivariate division by leading terms.
    ///
    /// Returns `(quotient, remainder)` with `self = quotient * divisor +
    /// remainder`, where no term of the remainder is divisible by the
    /// divisor's leading term.
    ///
    /// # Errors
    ///
    /// Returns `PolyError::ZeroDivisor` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let lead = divisor.leading_term().ok_or(PolyError::ZeroDivisor)?;
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();
        let mut p = self.clone();

        while let Some(lt) = p.leading_term() {
            match lt.clone().div(&lead) {
                Some(q) => {
                    p = p.sub(&divisor.clone().mul_term(&q));
                    quotient = quotient.add_term(q);
                }
                None => {
                    p = p.sub(&Self::from_term(lt.clone()));
                    remainder = remainder.add_term(lt);
                }
            }
        }

        Ok((quotient, remainder))
    }

    /// Exact division.
    ///
    /// Returns `None` if `divisor` is zero or leaves a remainder.
    #[must_use]
    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        let (q, r) = self.div_rem(divisor).ok()?;
        r.is_zero().then_some(q)
    }

    /// Applies `f` to every coefficient, dropping those that become zero.
    #[must_use]
    pub fn map_coefficients<D, F>(&self, mut f: F) -> Polynomial<V, D>
    where
        D: Coefficient,
        F: FnMut(&C) -> D,
    {
        let mut result = Polynomial::zero();
        for (m, c) in &self.terms {
            result.accumulate(m.clone(), f(c));
        }
        result
    }

    /// Replaces every coefficient and every variable by a polynomial in a
    /// new ring and expands the result.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `var`.
    pub fn try_substitute<W, D, E, FC, FV>(
        &self,
        mut coeff: FC,
        mut var: FV,
    ) -> Result<Polynomial<W, D>, E>
    where
        W: Variable,
        D: Coefficient,
        FC: FnMut(&C) -> Polynomial<W, D>,
        FV: FnMut(V) -> Result<Polynomial<W, D>, E>,
    {
        let mut result = Polynomial::zero();
        for (m, c) in &self.terms {
            let mut product = coeff(c);
            for p in m.powers() {
                if product.is_zero() {
                    break;
                }
                product = product.mul(&var(p.var())?.pow(p.exponent()));
            }
            result = result.add(&product);
        }
        Ok(result)
    }

    /// Evaluates the polynomial at a point.
    pub fn evaluate<F>(&self, mut value: F) -> C
    where
        F: FnMut(V) -> C,
    {
        self.terms.iter().fold(C::zero(), |acc, (m, c)| {
            let term = m
                .powers()
                .iter()
                .fold(c.clone(), |t, p| t * value(p.var()).pow(p.exponent()));
            acc + term
        })
    }
}

impl<V: Variable, C: Coefficient> fmt::Display for Polynomial<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (m, c)) in self.iter().enumerate() {
            let (sign, magnitude) = if c.is_negative() {
                ("-", -c.clone())
            } else {
                ("+", c.clone())
            };
            match (i, sign) {
                (0, "-") => write!(f, "-")?,
                (0, _) => {}
                _ => write!(f, " {sign} ")?,
            }
            write!(f, "{}", Term::new(magnitude, m.clone()))?;
        }
        Ok(())
    }
}
