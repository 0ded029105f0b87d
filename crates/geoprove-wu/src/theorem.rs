//! Algebraic form of a geometry theorem.

use geoprove_poly::XPolynomial;
use geoprove_rings::Coefficient;

use crate::system::XPolySystem;

/// Hypothesis polynomials plus the statement polynomial to prove.
#[derive(Clone, Debug)]
pub struct GeoTheorem<C: Coefficient> {
    name: String,
    hypotheses: Vec<XPolynomial<C>>,
    statement: Option<XPolynomial<C>>,
}

impl<C: Coefficient> GeoTheorem<C> {
    /// Creates a theorem with no hypotheses and no statement.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hypotheses: Vec::new(),
            statement: None,
        }
    }

    /// Adds a hypothesis polynomial.
    pub fn add_hypothesis(&mut self, polynomial: XPolynomial<C>) {
        self.hypotheses.push(polynomial);
    }

    /// Sets the statement polynomial.
    pub fn set_statement(&mut self, polynomial: XPolynomial<C>) {
        self.statement = Some(polynomial);
    }

    /// Builder form of [`GeoTheorem::add_hypothesis`].
    #[must_use]
    pub fn with_hypothesis(mut self, polynomial: XPolynomial<C>) -> Self {
        self.add_hypothesis(polynomial);
        self
    }

    /// Builder form of [`GeoTheorem::set_statement`].
    #[must_use]
    pub fn with_statement(mut self, polynomial: XPolynomial<C>) -> Self {
        self.set_statement(polynomial);
        self
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hypothesis polynomials in construction order.
    #[must_use]
    pub fn hypotheses(&self) -> &[XPolynomial<C>] {
        &self.hypotheses
    }

    /// Returns the statement polynomial, if set.
    #[must_use]
    pub fn statement(&self) -> Option<&XPolynomial<C>> {
        self.statement.as_ref()
    }

    /// Builds the (not yet triangulated) hypothesis system.
    #[must_use]
    pub fn system(&self) -> XPolySystem<C> {
        XPolySystem::from_polynomials(self.hypotheses.iter().cloned())
    }
}
