//! Deciding an eliminated expression in free-point coordinates.
//!
//! Once every dependent point is gone, the remaining quantities are
//! polynomials in the coordinates of the free points, which are
//! algebraically independent. Substituting those coordinates turns the
//! expression into a quotient of u-polynomials, and the statement holds
//! exactly when the numerator is the zero polynomial.

use geoprove_core::{Budget, LabelId, ProverError};
use geoprove_poly::{UPolynomial, UVar};
use geoprove_rings::Real;
use geoprove_wu::ProverContext;

use crate::construction::AreaConstructions;
use crate::expr::{Expr, Quantity};

type Poly = UPolynomial<Real>;

/// Numerator and denominator of an expression in coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateFraction {
    /// Numerator.
    pub numerator: Poly,
    /// Denominator, never the zero polynomial.
    pub denominator: Poly,
}

impl CoordinateFraction {
    fn polynomial(p: Poly) -> Self {
        Self { numerator: p, denominator: Poly::one() }
    }

    /// Returns true if the fraction is identically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

struct Evaluator<'a> {
    constructions: &'a AreaConstructions,
    ctx: &'a ProverContext,
    budget: &'a mut Budget,
}

fn coordinate(u: UVar) -> Poly {
    if u.is_origin() {
        Poly::zero()
    } else {
        Poly::var(u)
    }
}

impl Evaluator<'_> {
    fn mul(&mut self, a: &Poly, b: &Poly) -> Result<Poly, ProverError> {
        let product = self.ctx.multiplier().mul(a, b);
        self.budget.check(product.len())?;
        Ok(product)
    }

    fn point(&self, p: LabelId) -> Result<(Poly, Poly), ProverError> {
        let (x, y) = self.constructions.free_coordinates(p).ok_or_else(|| {
            ProverError::General(format!(
                "point {} is still present after elimination",
                self.constructions.labels().display(p)
            ))
        })?;
        Ok((coordinate(x), coordinate(y)))
    }

    /// `(b - a) . (d - c)` and `(b - a) x (d - c)`.
    fn dot_cross(
        &mut self,
        a: LabelId,
        b: LabelId,
        c: LabelId,
        d: LabelId,
    ) -> Result<(Poly, Poly), ProverError> {
        let (ax, ay) = self.point(a)?;
        let (bx, by) = self.point(b)?;
        let (cx, cy) = self.point(c)?;
        let (dx, dy) = self.point(d)?;
        let (ux, uy) = (bx.sub(&ax), by.sub(&ay));
        let (vx, vy) = (dx.sub(&cx), dy.sub(&cy));
        let dot = self.mul(&ux, &vx)?.add(&self.mul(&uy, &vy)?);
        let cross = self.mul(&ux, &vy)?.sub(&self.mul(&uy, &vx)?);
        Ok((dot, cross))
    }

    fn quantity(&mut self, q: Quantity) -> Result<CoordinateFraction, ProverError> {
        Ok(match q {
            Quantity::Area(a, b, c) => {
                let (_, cross) = self.dot_cross(a, b, a, c)?;
                CoordinateFraction::polynomial(cross.mul_constant(&Real(0.5)))
            }
            Quantity::Pythagoras(a, b, c) => {
                let (dot, _) = self.dot_cross(b, a, b, c)?;
                CoordinateFraction::polynomial(dot.mul_constant(&Real(2.0)))
            }
            Quantity::Ratio(a, b, c, d) => {
                let (numerator, _) = self.dot_cross(a, b, c, d)?;
                let (denominator, _) = self.dot_cross(c, d, c, d)?;
                if denominator.is_zero() {
                    return Err(ProverError::General(format!("ratio {q} has a zero denominator")));
                }
                CoordinateFraction { numerator, denominator }
            }
            Quantity::Parameter(u) => CoordinateFraction::polynomial(coordinate(u)),
        })
    }

    fn expr(&mut self, e: &Expr) -> Result<CoordinateFraction, ProverError> {
        self.budget.check_time()?;
        Ok(match e {
            Expr::Number(r) => CoordinateFraction::polynomial(Poly::constant(*r)),
            Expr::Quantity(q) => self.quantity(*q)?,
            Expr::BigProduct(p) => {
                let mut acc = CoordinateFraction::polynomial(Poly::constant(p.coeff));
                for q in &p.factors {
                    let f = self.quantity(*q)?;
                    acc = self.times(&acc, &f)?;
                }
                acc
            }
            Expr::Product(a, b) => {
                let (fa, fb) = (self.expr(a)?, self.expr(b)?);
                self.times(&fa, &fb)?
            }
            Expr::Sum(a, b) => {
                let (fa, fb) = (self.expr(a)?, self.expr(b)?);
                if fa.denominator == fb.denominator {
                    CoordinateFraction {
                        numerator: fa.numerator.add(&fb.numerator),
                        denominator: fa.denominator,
                    }
                } else {
                    let left = self.mul(&fa.numerator, &fb.denominator)?;
                    let right = self.mul(&fb.numerator, &fa.denominator)?;
                    CoordinateFraction {
                        numerator: left.add(&right),
                        denominator: self.mul(&fa.denominator, &fb.denominator)?,
                    }
                }
            }
            Expr::Fraction(a, b) => {
                let (fa, fb) = (self.expr(a)?, self.expr(b)?);
                if fb.numerator.is_zero() {
                    return Err(ProverError::General(format!("{b} vanishes in coordinates")));
                }
                CoordinateFraction {
                    numerator: self.mul(&fa.numerator, &fb.denominator)?,
                    denominator: self.mul(&fa.denominator, &fb.numerator)?,
                }
            }
            Expr::Neg(a) => {
                let f = self.expr(a)?;
                CoordinateFraction { numerator: f.numerator.invert(), denominator: f.denominator }
            }
        })
    }

    fn times(
        &mut self,
        a: &CoordinateFraction,
        b: &CoordinateFraction,
    ) -> Result<CoordinateFraction, ProverError> {
        Ok(CoordinateFraction {
            numerator: self.mul(&a.numerator, &b.numerator)?,
            denominator: self.mul(&a.denominator, &b.denominator)?,
        })
    }
}

/// Rewrites an expression over free points in their coordinates.
///
/// # Errors
///
/// - `ProverError::General` if a dependent point remains or a denominator
///   vanishes identically
/// - the budget's errors when the polynomials grow too large or too slow
pub fn to_coordinates(
    expr: &Expr,
    constructions: &AreaConstructions,
    ctx: &ProverContext,
    budget: &mut Budget,
) -> Result<CoordinateFraction, ProverError> {
    Evaluator { constructions, ctx, budget }.expr(expr)
}

#[cfg(test)]
mod tests {
    use geoprove_core::{Phase, ProverConfig};

    use super::*;
    use crate::construction::AmConstruction;

    fn setup() -> (AreaConstructions, [LabelId; 3]) {
        let mut am = AreaConstructions::new();
        let a = am.add_free("A").unwrap();
        let b = am.add_free("B").unwrap();
        let c = am.add_free("C").unwrap();
        (am, [a, b, c])
    }

    #[test]
    fn test_area_in_coordinates() {
        let (am, [a, b, c]) = setup();
        let ctx = ProverContext::sequential(ProverConfig::default());
        let mut budget = ctx.budget(Phase::AreaMethod);
        // A = (0, 0), B = (0, u1), C = (u2, u3)
        let f = to_coordinates(&Expr::area(a, b, c), &am, &ctx, &mut budget).unwrap();
        let expected = Poly::var(UVar(1)).mul(&Poly::var(UVar(2))).mul_constant(&Real(-0.5));
        assert!(f.numerator.approx_eq(&expected));
        assert_eq!(f.denominator, Poly::one());
    }

    #[test]
    fn test_pythagoras_of_repeated_point_is_twice_squared_length() {
        let (am, [a, b, _]) = setup();
        let ctx = ProverContext::sequential(ProverConfig::default());
        let mut budget = ctx.budget(Phase::AreaMethod);
        let f = to_coordinates(&Expr::pythagoras(a, b, a), &am, &ctx, &mut budget).unwrap();
        let expected = Poly::var(UVar(1)).pow(2).mul_constant(&Real(2.0));
        assert!(f.numerator.approx_eq(&expected));
    }

    #[test]
    fn test_identity_vanishes() {
        let (am, [a, b, c]) = setup();
        let ctx = ProverContext::sequential(ProverConfig::default());
        let mut budget = ctx.budget(Phase::AreaMethod);
        // S_ABC + S_BAC = 0 with no canonicalisation
        let e = Expr::area(a, b, c) + Expr::area(b, a, c);
        assert!(to_coordinates(&e, &am, &ctx, &mut budget).unwrap().is_zero());
        let e = Expr::area(a, b, c) / Expr::pythagoras(a, b, c) - Expr::area(c, a, b) / Expr::pythagoras(c, b, a);
        assert!(to_coordinates(&e, &am, &ctx, &mut budget).unwrap().is_zero());
    }

    #[test]
    fn test_dependent_point_is_rejected() {
        let (mut am, [a, b, c]) = setup();
        let m = am
            .add("M", |point| AmConstruction::Ratio { point, w: a, u: a, v: b, r: Expr::number(0.5) })
            .unwrap();
        let ctx = ProverContext::sequential(ProverConfig::default());
        let mut budget = ctx.budget(Phase::AreaMethod);
        let err = to_coordinates(&Expr::area(a, c, m), &am, &ctx, &mut budget).unwrap_err();
        assert!(matches!(err, ProverError::General(_)));
    }
}
