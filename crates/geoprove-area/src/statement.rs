//! Statements as lists of expressions that must vanish.

use geoprove_core::ProverError;
use geoprove_geometry::Statement;

use crate::expr::Expr;

/// A conjunction of `expression = 0` claims.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaMethodTheoremStatement {
    description: String,
    expressions: Vec<Expr>,
}

impl AreaMethodTheoremStatement {
    /// Creates an empty statement.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), expressions: Vec::new() }
    }

    /// Adds a claim.
    #[must_use]
    pub fn with_expression(mut self, expr: Expr) -> Self {
        self.expressions.push(expr);
        self
    }

    /// Adds a claim.
    pub fn push(&mut self, expr: Expr) {
        self.expressions.push(expr);
    }

    /// Translates a geometric statement.
    ///
    /// - collinear `ABC`: `S_ABC`
    /// - `AB` parallel to `CD`: `S_ACD - S_BCD`
    /// - `AB` perpendicular to `CD`: `P_ACD - P_BCD`
    /// - `|AB| = |CD|`: `P_ABA - P_CDC`
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Unsupported` for concyclicity.
    pub fn from_statement(statement: &Statement, description: impl Into<String>) -> Result<Self, ProverError> {
        let expr = match *statement {
            Statement::Collinear(a, b, c) => Expr::area(a, b, c),
            Statement::Parallel(a, b, c, d) => Expr::area(a, c, d) - Expr::area(b, c, d),
            Statement::Perpendicular(a, b, c, d) => {
                Expr::pythagoras(a, c, d) - Expr::pythagoras(b, c, d)
            }
            Statement::EqualSegments(a, b, c, d) => {
                Expr::pythagoras(a, b, a) - Expr::pythagoras(c, d, c)
            }
            Statement::Concyclic(..) => {
                return Err(ProverError::Unsupported {
                    method: "area method",
                    what: "concyclicity statements".to_string(),
                });
            }
        };
        Ok(Self::new(description).with_expression(expr))
    }

    /// What the statement claims.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The claims.
    #[must_use]
    pub fn expressions(&self) -> &[Expr] {
        &self.expressions
    }
}
