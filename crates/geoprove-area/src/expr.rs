//! Area-method expressions.
//!
//! Expressions are immutable trees over geometric quantities. Every
//! rewriting pass builds a new tree. The `std::ops` impls build raw nodes
//! without simplifying; the passes do the cleaning up.

use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use geoprove_core::{LabelId, LabelInterner};
use geoprove_poly::UVar;
use geoprove_rings::Real;

/// A geometric quantity, the atom of area-method expressions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Quantity {
    /// Signed area of triangle `ABC`.
    Area(LabelId, LabelId, LabelId),
    /// Pythagoras difference `P_ABC = AB² + CB² - AC²`.
    Pythagoras(LabelId, LabelId, LabelId),
    /// Ratio `AB / CD` of parallel directed segments.
    Ratio(LabelId, LabelId, LabelId, LabelId),
    /// A free numeric parameter.
    Parameter(UVar),
}

impl Quantity {
    /// The points the quantity mentions, with repetitions.
    #[must_use]
    pub fn points(&self) -> Vec<LabelId> {
        match *self {
            Quantity::Area(a, b, c) | Quantity::Pythagoras(a, b, c) => vec![a, b, c],
            Quantity::Ratio(a, b, c, d) => vec![a, b, c, d],
            Quantity::Parameter(_) => Vec::new(),
        }
    }

    /// Number of times `point` occurs.
    #[must_use]
    pub fn occurrences(&self, point: LabelId) -> usize {
        self.points().into_iter().filter(|&p| p == point).count()
    }

    /// Returns true if the quantity mentions `point`.
    #[must_use]
    pub fn contains(&self, point: LabelId) -> bool {
        self.occurrences(point) > 0
    }

    fn write_with(&self, f: &mut impl fmt::Write, name: &dyn Fn(LabelId) -> String) -> fmt::Result {
        match *self {
            Quantity::Area(a, b, c) => write!(f, "S[{}{}{}]", name(a), name(b), name(c)),
            Quantity::Pythagoras(a, b, c) => write!(f, "P[{}{}{}]", name(a), name(b), name(c)),
            Quantity::Ratio(a, b, c, d) => {
                write!(f, "{}{}/{}{}", name(a), name(b), name(c), name(d))
            }
            Quantity::Parameter(u) => write!(f, "{u}"),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &|id| id.to_string())
    }
}

/// A numeric coefficient times a multiset of quantities.
#[derive(Clone, Debug, PartialEq)]
pub struct BigProduct {
    /// Numeric coefficient.
    pub coeff: Real,
    /// Factors in ascending order, repeated for powers.
    pub factors: Vec<Quantity>,
}

impl BigProduct {
    /// Creates a product, sorting the factors.
    #[must_use]
    pub fn new(coeff: Real, mut factors: Vec<Quantity>) -> Self {
        factors.sort_unstable();
        Self { coeff, factors }
    }

    /// Multiplies two products.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut factors = self.factors.clone();
        factors.extend_from_slice(&other.factors);
        Self::new(self.coeff * other.coeff, factors)
    }
}

/// An area-method expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A number.
    Number(Real),
    /// A geometric quantity.
    Quantity(Quantity),
    /// Binary product.
    Product(Box<Expr>, Box<Expr>),
    /// Flattened product of quantities.
    BigProduct(BigProduct),
    /// Binary sum.
    Sum(Box<Expr>, Box<Expr>),
    /// Quotient.
    Fraction(Box<Expr>, Box<Expr>),
    /// Additive inverse.
    Neg(Box<Expr>),
}

impl Expr {
    /// A number.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Expr::Number(Real(value))
    }

    /// Zero.
    #[must_use]
    pub fn zero() -> Self {
        Expr::number(0.0)
    }

    /// One.
    #[must_use]
    pub fn one() -> Self {
        Expr::number(1.0)
    }

    /// `S_ABC`.
    #[must_use]
    pub fn area(a: LabelId, b: LabelId, c: LabelId) -> Self {
        Expr::Quantity(Quantity::Area(a, b, c))
    }

    /// `P_ABC`.
    #[must_use]
    pub fn pythagoras(a: LabelId, b: LabelId, c: LabelId) -> Self {
        Expr::Quantity(Quantity::Pythagoras(a, b, c))
    }

    /// `AB / CD`.
    #[must_use]
    pub fn ratio(a: LabelId, b: LabelId, c: LabelId, d: LabelId) -> Self {
        Expr::Quantity(Quantity::Ratio(a, b, c, d))
    }

    /// A free parameter.
    #[must_use]
    pub fn parameter(u: UVar) -> Self {
        Expr::Quantity(Quantity::Parameter(u))
    }

    /// Returns the number if the expression is one.
    #[must_use]
    pub fn as_number(&self) -> Option<Real> {
        match self {
            Expr::Number(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns true for the number zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(|r| r == Real(0.0))
    }

    /// Returns true for the number one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(|r| r == Real(1.0))
    }

    /// Returns true if any quantity mentions `point`.
    #[must_use]
    pub fn contains(&self, point: LabelId) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Quantity(q) => q.contains(point),
            Expr::BigProduct(p) => p.factors.iter().any(|q| q.contains(point)),
            Expr::Product(a, b) | Expr::Sum(a, b) | Expr::Fraction(a, b) => {
                a.contains(point) || b.contains(point)
            }
            Expr::Neg(a) => a.contains(point),
        }
    }

    /// Number of nodes, counting every big-product factor.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Quantity(_) => 1,
            Expr::BigProduct(p) => 1 + p.factors.len(),
            Expr::Product(a, b) | Expr::Sum(a, b) | Expr::Fraction(a, b) => 1 + a.size() + b.size(),
            Expr::Neg(a) => 1 + a.size(),
        }
    }

    /// Collects every distinct quantity.
    #[must_use]
    pub fn quantities(&self) -> Vec<Quantity> {
        let mut out = Vec::new();
        self.collect_quantities(&mut out);
        out.sort_unstable();
        out.dedup();
        out
    }

    fn collect_quantities(&self, out: &mut Vec<Quantity>) {
        match self {
            Expr::Number(_) => {}
            Expr::Quantity(q) => out.push(*q),
            Expr::BigProduct(p) => out.extend_from_slice(&p.factors),
            Expr::Product(a, b) | Expr::Sum(a, b) | Expr::Fraction(a, b) => {
                a.collect_quantities(out);
                b.collect_quantities(out);
            }
            Expr::Neg(a) => a.collect_quantities(out),
        }
    }

    /// Rebuilds the tree with every quantity replaced by `f(quantity)`.
    ///
    /// Big products are unfolded into binary products of the mapped
    /// factors.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `f`.
    pub fn try_map_quantities<E, F>(&self, f: &mut F) -> Result<Expr, E>
    where
        F: FnMut(Quantity) -> Result<Expr, E>,
    {
        Ok(match self {
            Expr::Number(r) => Expr::Number(*r),
            Expr::Quantity(q) => f(*q)?,
            Expr::BigProduct(p) => {
                let mut acc = Expr::Number(p.coeff);
                for q in &p.factors {
                    acc = acc * f(*q)?;
                }
                acc
            }
            Expr::Product(a, b) => a.try_map_quantities(f)? * b.try_map_quantities(f)?,
            Expr::Sum(a, b) => a.try_map_quantities(f)? + b.try_map_quantities(f)?,
            Expr::Fraction(a, b) => a.try_map_quantities(f)? / b.try_map_quantities(f)?,
            Expr::Neg(a) => -a.try_map_quantities(f)?,
        })
    }

    /// Infallible form of [`try_map_quantities`](Self::try_map_quantities).
    #[must_use]
    pub fn map_quantities<F>(&self, mut f: F) -> Expr
    where
        F: FnMut(Quantity) -> Expr,
    {
        match self.try_map_quantities::<Infallible, _>(&mut |q| Ok(f(q))) {
            Ok(e) => e,
            Err(never) => match never {},
        }
    }

    /// Renders the expression with point names.
    #[must_use]
    pub fn render(&self, labels: &LabelInterner) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_with(&mut out, &|id| labels.display(id));
        out
    }

    fn write_with(&self, f: &mut impl fmt::Write, name: &dyn Fn(LabelId) -> String) -> fmt::Result {
        match self {
            Expr::Number(r) => write!(f, "{r}"),
            Expr::Quantity(q) => q.write_with(f, name),
            Expr::BigProduct(p) => {
                write!(f, "{}", p.coeff)?;
                for q in &p.factors {
                    write!(f, "*")?;
                    q.write_with(f, name)?;
                }
                Ok(())
            }
            Expr::Product(a, b) => {
                write!(f, "(")?;
                a.write_with(f, name)?;
                write!(f, " * ")?;
                b.write_with(f, name)?;
                write!(f, ")")
            }
            Expr::Sum(a, b) => {
                write!(f, "(")?;
                a.write_with(f, name)?;
                write!(f, " + ")?;
                b.write_with(f, name)?;
                write!(f, ")")
            }
            Expr::Fraction(a, b) => {
                write!(f, "(")?;
                a.write_with(f, name)?;
                write!(f, ") / (")?;
                b.write_with(f, name)?;
                write!(f, ")")
            }
            Expr::Neg(a) => {
                write!(f, "-")?;
                a.write_with(f, name)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &|id| id.to_string())
    }
}

impl From<Quantity> for Expr {
    fn from(q: Quantity) -> Self {
        Expr::Quantity(q)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Sum(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sum(Box::new(self), Box::new(Expr::Neg(Box::new(rhs))))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Product(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Fraction(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}
