//! Condition templates and their instantiation.
//!
//! A template is a symbolic polynomial over the coordinates of placeholder
//! points (the labels in [`slot`]). Instantiation binds every placeholder
//! to the coordinates of a concrete point and expands the template into an
//! x-polynomial.

use std::fmt;

use geoprove_core::{LabelId, ProverError};
use geoprove_poly::{Polynomial, SymbolicPolynomial, SymbolicVar, UFraction, XPolynomial};
use geoprove_rings::Coefficient;
use geoprove_wu::ProverContext;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::construction::Ratio;

/// Placeholder labels used inside templates.
pub mod slot {
    use geoprove_core::LabelId;

    /// First point.
    pub const A: LabelId = LabelId::from_raw(0);
    /// Second point.
    pub const B: LabelId = LabelId::from_raw(1);
    /// Third point.
    pub const C: LabelId = LabelId::from_raw(2);
    /// Fourth point.
    pub const D: LabelId = LabelId::from_raw(3);
    /// The constructed point.
    pub const P: LabelId = LabelId::from_raw(4);
    /// A parameter, bound as the point `(t, 0)`.
    pub const T: LabelId = LabelId::from_raw(5);
}

/// A geometric condition expressible as one polynomial equation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Condition {
    /// `A`, `B` and `C` are collinear.
    Collinear,
    /// `AB` is parallel to `CD`.
    Parallel,
    /// `AB` is perpendicular to `CD`.
    Perpendicular,
    /// `|AB| = |CD|`.
    EqualSegments,
    /// `A`, `B`, `C` and `D` lie on one circle.
    Concyclic,
    /// `P.x` is the mean of `A.x` and `B.x`.
    MidpointX,
    /// `P.y` is the mean of `A.y` and `B.y`.
    MidpointY,
    /// `P.x = A.x + T.x * (B.x - A.x)`.
    PointOnLineX,
    /// `P.y = A.y + T.x * (B.y - A.y)`.
    PointOnLineY,
    /// `P.x = C.x + r * (B.x - A.x)`.
    RatioX(Ratio),
    /// `P.y = C.y + r * (B.y - A.y)`.
    RatioY(Ratio),
    /// `P.x = A.x - r * (B.y - A.y)`.
    PerpendicularRatioX(Ratio),
    /// `P.y = A.y + r * (B.x - A.x)`.
    PerpendicularRatioY(Ratio),
}

fn x<C: Coefficient>(label: LabelId) -> SymbolicPolynomial<C> {
    Polynomial::var(SymbolicVar::x(label))
}

fn y<C: Coefficient>(label: LabelId) -> SymbolicPolynomial<C> {
    Polynomial::var(SymbolicVar::y(label))
}

fn dx<C: Coefficient>(from: LabelId, to: LabelId) -> SymbolicPolynomial<C> {
    x(to).sub(&x(from))
}

fn dy<C: Coefficient>(from: LabelId, to: LabelId) -> SymbolicPolynomial<C> {
    y(to).sub(&y(from))
}

fn scaled<C: Coefficient>(p: SymbolicPolynomial<C>, k: i64) -> SymbolicPolynomial<C> {
    p.mul_constant(&C::from_i64(k))
}

fn squared_distance<C: Coefficient>(a: LabelId, b: LabelId) -> SymbolicPolynomial<C> {
    let dx = dx(a, b);
    let dy = dy(a, b);
    dx.pow(2).add(&dy.pow(2))
}

/// Laplace expansion along the first row.
fn determinant<C: Coefficient>(rows: &[Vec<SymbolicPolynomial<C>>]) -> SymbolicPolynomial<C> {
    match rows.len() {
        0 => Polynomial::one(),
        1 => rows[0][0].clone(),
        n => {
            let mut det = Polynomial::zero();
            for col in 0..n {
                if rows[0][col].is_zero() {
                    continue;
                }
                let minor: Vec<Vec<_>> = rows[1..]
                    .iter()
                    .map(|row| {
                        row.iter()
                            .enumerate()
                            .filter(|&(j, _)| j != col)
                            .map(|(_, p)| p.clone())
                            .collect()
                    })
                    .collect();
                let term = rows[0][col].clone().mul(&determinant(&minor));
                det = if col % 2 == 0 { det.add(&term) } else { det.sub(&term) };
            }
            det
        }
    }
}

impl Condition {
    /// The placeholder labels the template mentions.
    #[must_use]
    pub fn slots(&self) -> &'static [LabelId] {
        use slot::{A, B, C, D, P, T};
        match self {
            Condition::Collinear => &[A, B, C],
            Condition::Parallel
            | Condition::Perpendicular
            | Condition::EqualSegments
            | Condition::Concyclic => &[A, B, C, D],
            Condition::MidpointX
            | Condition::MidpointY
            | Condition::PerpendicularRatioX(_)
            | Condition::PerpendicularRatioY(_) => &[P, A, B],
            Condition::PointOnLineX | Condition::PointOnLineY => &[P, A, B, T],
            Condition::RatioX(_) | Condition::RatioY(_) => &[P, A, B, C],
        }
    }

    /// Builds the template polynomial; the condition holds iff it vanishes.
    #[must_use]
    pub fn template<C: Coefficient>(&self) -> SymbolicPolynomial<C> {
        use slot::{A, B, C as SC, D, P, T};
        match *self {
            Condition::Collinear => dx(A, B).mul(&dy(A, SC)).sub(&dx(A, SC).mul(&dy(A, B))),
            Condition::Parallel => dx(A, B).mul(&dy(SC, D)).sub(&dx(SC, D).mul(&dy(A, B))),
            Condition::Perpendicular => dx(A, B).mul(&dx(SC, D)).add(&dy(A, B).mul(&dy(SC, D))),
            Condition::EqualSegments => squared_distance(A, B).sub(&squared_distance(SC, D)),
            Condition::Concyclic => {
                let rows: Vec<Vec<_>> = [A, B, SC, D]
                    .into_iter()
                    .map(|l| vec![x(l).pow(2).add(&y(l).pow(2)), x(l), y(l), Polynomial::one()])
                    .collect();
                determinant(&rows)
            }
            Condition::MidpointX => scaled(x(P), 2).sub(&x(A)).sub(&x(B)),
            Condition::MidpointY => scaled(y(P), 2).sub(&y(A)).sub(&y(B)),
            Condition::PointOnLineX => x(P).sub(&x(A)).sub(&x(T).mul(&dx(A, B))),
            Condition::PointOnLineY => y(P).sub(&y(A)).sub(&x(T).mul(&dy(A, B))),
            Condition::RatioX(r) => {
                let r: C = r.to_coefficient();
                x(P).sub(&x(SC)).sub(&dx(A, B).mul_constant(&r))
            }
            Condition::RatioY(r) => {
                let r: C = r.to_coefficient();
                y(P).sub(&y(SC)).sub(&dy(A, B).mul_constant(&r))
            }
            Condition::PerpendicularRatioX(r) => {
                let r: C = r.to_coefficient();
                x(P).sub(&x(A)).add(&dy(A, B).mul_constant(&r))
            }
            Condition::PerpendicularRatioY(r) => {
                let r: C = r.to_coefficient();
                y(P).sub(&y(A)).sub(&dx(A, B).mul_constant(&r))
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Collinear => write!(f, "collinear"),
            Condition::Parallel => write!(f, "parallel"),
            Condition::Perpendicular => write!(f, "perpendicular"),
            Condition::EqualSegments => write!(f, "equal segments"),
            Condition::Concyclic => write!(f, "concyclic"),
            Condition::MidpointX => write!(f, "midpoint (x)"),
            Condition::MidpointY => write!(f, "midpoint (y)"),
            Condition::PointOnLineX => write!(f, "point on line (x)"),
            Condition::PointOnLineY => write!(f, "point on line (y)"),
            Condition::RatioX(r) => write!(f, "ratio {r} (x)"),
            Condition::RatioY(r) => write!(f, "ratio {r} (y)"),
            Condition::PerpendicularRatioX(r) => write!(f, "perpendicular ratio {r} (x)"),
            Condition::PerpendicularRatioY(r) => write!(f, "perpendicular ratio {r} (y)"),
        }
    }
}

/// Binds placeholder labels to concrete coordinates.
#[derive(Clone, Debug)]
pub struct PointLabelMap<C: Coefficient> {
    bindings: FxHashMap<LabelId, (XPolynomial<C>, XPolynomial<C>)>,
}

impl<C: Coefficient> Default for PointLabelMap<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coefficient> PointLabelMap<C> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    /// Binds `label` to the point `(x, y)`, replacing any earlier binding.
    pub fn bind(&mut self, label: LabelId, x: XPolynomial<C>, y: XPolynomial<C>) {
        self.bindings.insert(label, (x, y));
    }

    /// Builder form of [`bind`](Self::bind).
    #[must_use]
    pub fn with(mut self, label: LabelId, x: XPolynomial<C>, y: XPolynomial<C>) -> Self {
        self.bind(label, x, y);
        self
    }

    /// Returns true if `label` is bound.
    #[must_use]
    pub fn contains(&self, label: LabelId) -> bool {
        self.bindings.contains_key(&label)
    }

    /// Looks up the value of one symbolic coordinate.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` if the label is unbound.
    pub fn coordinate(&self, var: SymbolicVar) -> Result<&XPolynomial<C>, ProverError> {
        let (x, y) = self
            .bindings
            .get(&var.label)
            .ok_or_else(|| ProverError::Null(format!("no point bound to {}", var.label)))?;
        Ok(match var.axis {
            geoprove_poly::Axis::X => x,
            geoprove_poly::Axis::Y => y,
        })
    }
}

/// Expands `template` with the coordinates in `map`.
///
/// # Errors
///
/// Returns `ProverError::Null` if the template mentions an unbound label.
pub fn instantiate_condition<C: Coefficient>(
    ctx: &ProverContext,
    template: &SymbolicPolynomial<C>,
    map: &PointLabelMap<C>,
) -> Result<XPolynomial<C>, ProverError> {
    let mut result = XPolynomial::zero();
    for (monomial, coeff) in template.iter() {
        let mut product = XPolynomial::constant(UFraction::constant(coeff.clone()));
        for power in monomial.powers() {
            let value = map.coordinate(power.var())?;
            product = ctx.multiplier().mul(&product, &value.pow(power.exponent()));
            if product.is_zero() {
                break;
            }
        }
        result = result.add(&product);
    }
    trace!(terms = result.term_count(), "condition instantiated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use geoprove_poly::{UPolynomial, UVar, XVar};
    use geoprove_rings::Q;

    use super::*;

    fn u(i: u32) -> XPolynomial<Q> {
        XPolynomial::from_uvar(UVar(i))
    }

    fn xv(i: u32) -> XPolynomial<Q> {
        XPolynomial::var(XVar(i))
    }

    fn ctx() -> ProverContext {
        ProverContext::default()
    }

    #[test]
    fn test_collinear_of_points_on_axis() {
        // A = (0, 0), B = (u1, 0), C = (u2, 0)
        let map = PointLabelMap::new()
            .with(slot::A, u(0), u(0))
            .with(slot::B, u(1), u(0))
            .with(slot::C, u(2), u(0));
        let p = instantiate_condition(&ctx(), &Condition::Collinear.template(), &map).unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn test_collinear_generic_triangle() {
        // A = (0, 0), B = (u1, 0), C = (u2, u3): u1*u3
        let map = PointLabelMap::new()
            .with(slot::A, u(0), u(0))
            .with(slot::B, u(1), u(0))
            .with(slot::C, u(2), u(3));
        let p = instantiate_condition(&ctx(), &Condition::Collinear.template(), &map).unwrap();
        let expected = XPolynomial::from_u(UPolynomial::var(UVar(1)).mul(&UPolynomial::var(UVar(3))));
        assert_eq!(p, expected);
    }

    #[test]
    fn test_midpoint_template() {
        // M = (x1, x2) midpoint of (0, 0) and (u1, u2): 2*x1 - u1
        let map = PointLabelMap::new()
            .with(slot::P, xv(1), xv(2))
            .with(slot::A, u(0), u(0))
            .with(slot::B, u(1), u(2));
        let p = instantiate_condition(&ctx(), &Condition::MidpointX.template(), &map).unwrap();
        let two = XPolynomial::constant(UFraction::from_i64(2));
        assert_eq!(p, xv(1).mul(&two).sub(&u(1)));
    }

    #[test]
    fn test_concyclic_square() {
        // the unit square's corners lie on one circle
        let one = XPolynomial::<Q>::one();
        let zero = XPolynomial::<Q>::zero();
        let map = PointLabelMap::new()
            .with(slot::A, zero.clone(), zero.clone())
            .with(slot::B, one.clone(), zero.clone())
            .with(slot::C, one.clone(), one.clone())
            .with(slot::D, zero, one);
        let p = instantiate_condition(&ctx(), &Condition::Concyclic.template(), &map).unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn test_concyclic_detects_off_circle_point() {
        // (2, 2) is not on the circle through (0,0), (1,0) and (0,1)
        let one = XPolynomial::<Q>::one();
        let two = XPolynomial::constant(UFraction::from_i64(2));
        let zero = XPolynomial::<Q>::zero();
        let map = PointLabelMap::new()
            .with(slot::A, zero.clone(), zero.clone())
            .with(slot::B, one.clone(), zero.clone())
            .with(slot::C, zero, one)
            .with(slot::D, two.clone(), two);
        let p = instantiate_condition(&ctx(), &Condition::Concyclic.template(), &map).unwrap();
        assert!(!p.is_zero());
        assert!(p.is_constant());
    }

    #[test]
    fn test_perpendicular_ratio_rotates() {
        // P = A + 1*rot90(B - A) with A = (0,0), B = (1,0) gives (0, 1)
        let one = XPolynomial::<Q>::one();
        let zero = XPolynomial::<Q>::zero();
        let map = PointLabelMap::new()
            .with(slot::P, zero.clone(), one.clone())
            .with(slot::A, zero.clone(), zero.clone())
            .with(slot::B, one, zero);
        let r = Ratio::new(1, 1);
        for condition in [Condition::PerpendicularRatioX(r), Condition::PerpendicularRatioY(r)] {
            let p = instantiate_condition(&ctx(), &condition.template(), &map).unwrap();
            assert!(p.is_zero(), "{condition}");
        }
    }

    #[test]
    fn test_missing_label_is_null() {
        let map = PointLabelMap::new().with(slot::A, u(0), u(0));
        let err = instantiate_condition(&ctx(), &Condition::Collinear.template::<Q>(), &map)
            .unwrap_err();
        assert!(matches!(err, ProverError::Null(_)));
    }

    #[test]
    fn test_template_mentions_only_its_slots() {
        let conditions = [
            Condition::Collinear,
            Condition::Concyclic,
            Condition::PointOnLineY,
            Condition::RatioX(Ratio::HALF),
            Condition::PerpendicularRatioY(Ratio::HALF),
        ];
        for condition in conditions {
            let template = condition.template::<Q>();
            for var in template.variables() {
                assert!(condition.slots().contains(&var.label), "{condition}: {var}");
            }
        }
    }
}
