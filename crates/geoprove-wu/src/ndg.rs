//! Non-degeneracy conditions.
//!
//! Triangulation divides by leading coefficients. Whenever such a
//! coefficient is not a plain number, the proof only holds where it does
//! not vanish, and the coefficient is kept as a side condition. The
//! geometry layer later attaches human-readable descriptions.

use std::cmp::Reverse;
use std::fmt;

use geoprove_poly::{XPolynomial, XVar};
use geoprove_rings::Coefficient;

/// A geometric reading of a non-degeneracy condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NdgDescription {
    /// Labels of the points involved.
    pub points: Vec<String>,
    /// How many of them are free points.
    pub free_points: usize,
    /// How many of them are constructed points.
    pub dependent_points: usize,
    /// Description, e.g. "A, B and C are not collinear".
    pub text: String,
}

impl NdgDescription {
    fn rank(&self) -> (usize, Reverse<usize>, usize) {
        (self.dependent_points, Reverse(self.free_points), self.text.len())
    }
}

/// A polynomial that must not vanish for the proof to apply.
#[derive(Clone, Debug)]
pub struct NdgCondition<C: Coefficient> {
    polynomial: XPolynomial<C>,
    variable: Option<XVar>,
    descriptions: Vec<NdgDescription>,
}

impl<C: Coefficient> NdgCondition<C> {
    /// Creates a condition `polynomial != 0` raised while eliminating
    /// `variable`.
    #[must_use]
    pub fn new(polynomial: XPolynomial<C>, variable: Option<XVar>) -> Self {
        Self {
            polynomial,
            variable,
            descriptions: Vec::new(),
        }
    }

    /// Returns the polynomial.
    #[must_use]
    pub fn polynomial(&self) -> &XPolynomial<C> {
        &self.polynomial
    }

    /// Returns the variable whose elimination raised the condition.
    #[must_use]
    pub fn variable(&self) -> Option<XVar> {
        self.variable
    }

    /// Adds a candidate description.
    pub fn add_description(&mut self, description: NdgDescription) {
        if !self.descriptions.contains(&description) {
            self.descriptions.push(description);
        }
    }

    /// Returns every candidate description.
    #[must_use]
    pub fn descriptions(&self) -> &[NdgDescription] {
        &self.descriptions
    }

    /// Returns the preferred description: fewest constructed points, then
    /// most free points, then the shortest text.
    #[must_use]
    pub fn best_description(&self) -> Option<&NdgDescription> {
        self.descriptions.iter().min_by_key(|d| d.rank())
    }
}

impl<C: Coefficient> fmt::Display for NdgCondition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_description() {
            Some(d) => write!(f, "{}", d.text),
            None => write!(f, "{} != 0", self.polynomial),
        }
    }
}

#[cfg(test)]
mod tests {
    use geoprove_poly::{UFraction, UPolynomial, UVar};
    use geoprove_rings::Q;

    use super::*;

    fn description(text: &str, free: usize, dependent: usize) -> NdgDescription {
        NdgDescription {
            points: Vec::new(),
            free_points: free,
            dependent_points: dependent,
            text: text.to_string(),
        }
    }

    fn condition() -> NdgCondition<Q> {
        let p = XPolynomial::constant(UFraction::from_poly(UPolynomial::var(UVar(1))));
        NdgCondition::new(p, Some(XVar(2)))
    }

    #[test]
    fn test_fewer_dependent_points_win() {
        let mut ndg = condition();
        ndg.add_description(description("A, M and B are not collinear", 2, 1));
        ndg.add_description(description("A, B and C are distinct", 3, 0));
        assert_eq!(ndg.best_description().unwrap().text, "A, B and C are distinct");
    }

    #[test]
    fn test_more_free_points_then_shorter_text() {
        let mut ndg = condition();
        ndg.add_description(description("A != B", 2, 0));
        ndg.add_description(description("A, B and C long", 3, 0));
        assert_eq!(ndg.best_description().unwrap().text, "A, B and C long");

        let mut ndg = condition();
        ndg.add_description(description("lines AB and CD meet", 4, 0));
        ndg.add_description(description("AB not parallel CD", 4, 0));
        assert_eq!(ndg.best_description().unwrap().text, "AB not parallel CD");
    }

    #[test]
    fn test_display_falls_back_to_polynomial() {
        let ndg = condition();
        assert_eq!(ndg.to_string(), "u1 != 0");
        assert_eq!(ndg.variable(), Some(XVar(2)));
    }
}
