//! Point elimination lemmas.
//!
//! Each lemma rewrites a quantity mentioning a constructed point `Y` into
//! quantities over the points `Y` was built from. Conventions:
//!
//! - `S_ABC` is the signed area, half the cross product `(B - A) x (C - A)`.
//! - `P_ABC` is `2 (A - B) . (C - B)`, so `P_ABA = 2 AB²`.
//! - `AB / CD` is the ratio of parallel directed segments.
//!
//! Ratios containing `Y` are only eliminated when `Y` occurs once in the
//! numerator segment, once in the denominator segment, or once in each
//! (the co-side case).

use geoprove_core::{LabelId, ProverError};

use crate::construction::AmConstruction;
use crate::expr::{Expr, Quantity};
use crate::facts::CollinearityFacts;

fn s(a: LabelId, b: LabelId, c: LabelId) -> Expr {
    Expr::area(a, b, c)
}

fn p(a: LabelId, b: LabelId, c: LabelId) -> Expr {
    Expr::pythagoras(a, b, c)
}

fn n(value: f64) -> Expr {
    Expr::number(value)
}

/// Shape of a quantity relative to the eliminated point `Y`.
enum Position {
    /// `S_ABY`.
    AreaEnd(LabelId, LabelId),
    /// `P_ABY`.
    PythagorasEnd(LabelId, LabelId),
    /// `P_AYB`.
    PythagorasMiddle(LabelId, LabelId),
    /// `sign * AY / CD`.
    OneSide(f64, LabelId, LabelId, LabelId),
    /// `sign * AB / CY`.
    Reciprocal(f64, LabelId, LabelId, LabelId),
    /// `sign * AY / BY`.
    CoSide(f64, LabelId, LabelId),
    /// The quantity vanishes.
    Zero,
}

fn classify(q: Quantity, y: LabelId) -> Result<Option<Position>, ProverError> {
    Ok(Some(match q {
        Quantity::Parameter(_) => return Ok(None),
        Quantity::Area(a, b, c) => match q.occurrences(y) {
            0 => return Ok(None),
            1 if c == y => Position::AreaEnd(a, b),
            1 if a == y => Position::AreaEnd(b, c),
            1 => Position::AreaEnd(c, a),
            _ => Position::Zero,
        },
        Quantity::Pythagoras(a, b, c) => match (a == y, b == y, c == y) {
            (false, false, false) => return Ok(None),
            (false, true, false) => Position::PythagorasMiddle(a, c),
            (false, false, true) => Position::PythagorasEnd(a, b),
            (true, false, false) => Position::PythagorasEnd(c, b),
            // P_YBY = P_BYB
            (true, false, true) => Position::PythagorasMiddle(b, b),
            _ => Position::Zero,
        },
        Quantity::Ratio(a, b, c, d) => {
            let mut sign = 1.0;
            let (a, b) = if a == y && b != y {
                sign = -sign;
                (b, a)
            } else {
                (a, b)
            };
            let (c, d) = if c == y && d != y {
                sign = -sign;
                (d, c)
            } else {
                (c, d)
            };
            if c == d {
                return Err(ProverError::General(format!("ratio {q} has an empty denominator")));
            }
            match (b == y, d == y) {
                (false, false) => return Ok(None),
                _ if a == b => Position::Zero,
                (true, false) => Position::OneSide(sign, a, c, d),
                (false, true) => Position::Reciprocal(sign, c, a, b),
                (true, true) => Position::CoSide(sign, a, c),
            }
        }
    }))
}

/// Weights of `Y = r_u U + r_v V` on line `UV`, as fractions.
fn line_weights(step: &AmConstruction) -> Option<(Expr, Expr, LabelId, LabelId)> {
    match *step {
        AmConstruction::Intersection { u, v, p: pp, q, .. } => {
            let den = s(u, pp, q) - s(v, pp, q);
            Some((-s(v, pp, q) / den.clone(), s(u, pp, q) / den, u, v))
        }
        AmConstruction::Foot { p: pp, u, v, .. } => Some((
            p(pp, v, u) / p(u, v, u),
            p(pp, u, v) / p(u, v, u),
            u,
            v,
        )),
        _ => None,
    }
}

fn area_end(step: &AmConstruction, a: LabelId, b: LabelId) -> Expr {
    match step {
        AmConstruction::Intersection { u, v, p: pp, q, .. } => {
            let (u, v, pp, q) = (*u, *v, *pp, *q);
            (s(u, pp, q) * s(a, b, v) - s(v, pp, q) * s(a, b, u)) / (s(u, pp, q) - s(v, pp, q))
        }
        AmConstruction::Foot { p: pp, u, v, .. } => {
            let (u, v, pp) = (*u, *v, *pp);
            (p(pp, v, u) * s(a, b, u) + p(pp, u, v) * s(a, b, v)) / p(u, v, u)
        }
        AmConstruction::Ratio { w, u, v, r, .. } => {
            s(a, b, *w) + r.clone() * (s(a, b, *v) - s(a, b, *u))
        }
        AmConstruction::PerpRatio { u, v, r, .. } => {
            s(a, b, *u) + r.clone() / n(4.0) * (p(b, *u, *v) - p(a, *u, *v))
        }
        AmConstruction::Free { .. } => s(a, b, step.point()),
    }
}

fn pythagoras_end(step: &AmConstruction, a: LabelId, b: LabelId) -> Expr {
    match step {
        AmConstruction::Intersection { u, v, p: pp, q, .. } => {
            let (u, v, pp, q) = (*u, *v, *pp, *q);
            (s(u, pp, q) * p(a, b, v) - s(v, pp, q) * p(a, b, u)) / (s(u, pp, q) - s(v, pp, q))
        }
        AmConstruction::Foot { p: pp, u, v, .. } => {
            let (u, v, pp) = (*u, *v, *pp);
            (p(pp, v, u) * p(a, b, u) + p(pp, u, v) * p(a, b, v)) / p(u, v, u)
        }
        AmConstruction::Ratio { w, u, v, r, .. } => {
            p(a, b, *w) + r.clone() * (p(a, b, *v) - p(a, b, *u))
        }
        AmConstruction::PerpRatio { u, v, r, .. } => {
            p(a, b, *u) + n(4.0) * r.clone() * (s(a, *u, *v) - s(b, *u, *v))
        }
        AmConstruction::Free { .. } => p(a, b, step.point()),
    }
}

fn pythagoras_middle(step: &AmConstruction, a: LabelId, b: LabelId) -> Expr {
    if let Some((ru, rv, u, v)) = line_weights(step) {
        return ru.clone() * p(a, u, b) + rv.clone() * p(a, v, b) - ru * rv * p(u, v, u);
    }
    match step {
        AmConstruction::Ratio { w, u, v, r, .. } => {
            let (w, u, v) = (*w, *u, *v);
            p(a, w, b) - r.clone() * (p(v, w, a) - p(u, w, a) + p(v, w, b) - p(u, w, b))
                + r.clone() * r.clone() * p(u, v, u)
        }
        AmConstruction::PerpRatio { u, v, r, .. } => {
            let (u, v) = (*u, *v);
            p(a, u, b) - n(4.0) * r.clone() * (s(a, u, v) + s(b, u, v))
                + r.clone() * r.clone() * p(u, v, u)
        }
        _ => p(a, step.point(), b),
    }
}

/// `AY / CD` with `Y` not in `CD`.
fn one_side(
    step: &AmConstruction,
    facts: &CollinearityFacts,
    a: LabelId,
    c: LabelId,
    d: LabelId,
) -> Expr {
    let y = step.point();
    match step {
        AmConstruction::Intersection { u, v, p: pp, q, .. } => {
            let (u, v, pp, q) = (*u, *v, *pp, *q);
            if facts.on_line(a, u, v) {
                s(a, pp, q) / (s(c, pp, q) - s(d, pp, q))
            } else {
                s(a, u, v) / (s(c, u, v) - s(d, u, v))
            }
        }
        AmConstruction::Foot { p: pp, u, v, .. } => {
            let (u, v, pp) = (*u, *v, *pp);
            if facts.on_line(a, u, v) {
                (p(pp, c, d) - p(a, c, d)) / p(c, d, c)
            } else {
                s(a, u, v) / (s(c, u, v) - s(d, u, v))
            }
        }
        AmConstruction::Ratio { w, u, v, r, .. } => {
            let (w, u, v) = (*w, *u, *v);
            if facts.collinear(a, w, y) {
                Expr::ratio(a, w, c, d) + r.clone() * Expr::ratio(u, v, c, d)
            } else {
                (s(a, u, v) - s(w, u, v)) / (s(c, u, v) - s(d, u, v))
            }
        }
        AmConstruction::PerpRatio { u, v, r, .. } => {
            let (u, v) = (*u, *v);
            if facts.collinear(a, u, y) {
                (r.clone() * p(u, v, u) - n(4.0) * s(a, u, v))
                    / (n(4.0) * (s(d, u, v) - s(c, u, v)))
            } else {
                p(a, u, v) / (p(c, u, v) - p(d, u, v))
            }
        }
        AmConstruction::Free { .. } => Expr::ratio(a, y, c, d),
    }
}

/// `AY / BY`.
fn co_side(step: &AmConstruction, facts: &CollinearityFacts, a: LabelId, b: LabelId) -> Expr {
    let y = step.point();
    match step {
        AmConstruction::Intersection { u, v, p: pp, q, .. } => {
            let (u, v, pp, q) = (*u, *v, *pp, *q);
            if facts.on_line(a, u, v) || facts.on_line(b, u, v) {
                s(a, pp, q) / s(b, pp, q)
            } else {
                s(a, u, v) / s(b, u, v)
            }
        }
        AmConstruction::Foot { p: pp, u, v, .. } => {
            let (u, v, pp) = (*u, *v, *pp);
            if facts.on_line(a, u, v) || facts.on_line(b, u, v) {
                (p(pp, u, v) - p(a, u, v)) / (p(pp, u, v) - p(b, u, v))
            } else {
                s(a, u, v) / s(b, u, v)
            }
        }
        AmConstruction::Ratio { w, u, v, r, .. } => {
            let (w, u, v) = (*w, *u, *v);
            if facts.collinear(a, w, y) || facts.collinear(b, w, y) {
                (Expr::ratio(a, w, u, v) + r.clone()) / (Expr::ratio(b, w, u, v) + r.clone())
            } else {
                (s(a, u, v) - s(w, u, v)) / (s(b, u, v) - s(w, u, v))
            }
        }
        AmConstruction::PerpRatio { u, v, r, .. } => {
            let (u, v) = (*u, *v);
            if facts.collinear(a, u, y) || facts.collinear(b, u, y) {
                (r.clone() * p(u, v, u) - n(4.0) * s(a, u, v))
                    / (r.clone() * p(u, v, u) - n(4.0) * s(b, u, v))
            } else {
                p(a, u, v) / p(b, u, v)
            }
        }
        AmConstruction::Free { .. } => Expr::ratio(a, y, b, y),
    }
}

fn signed(sign: f64, e: Expr) -> Expr {
    if sign < 0.0 {
        -e
    } else {
        e
    }
}

/// Rewrites one quantity so that it no longer mentions the point built by
/// `step`.
///
/// # Errors
///
/// Returns `ProverError::General` for a ratio whose denominator segment
/// is degenerate.
pub fn eliminate_quantity(
    q: Quantity,
    step: &AmConstruction,
    facts: &CollinearityFacts,
) -> Result<Expr, ProverError> {
    let y = step.point();
    let Some(position) = classify(q, y)? else {
        return Ok(Expr::Quantity(q));
    };
    Ok(match position {
        Position::AreaEnd(a, b) => area_end(step, a, b),
        Position::PythagorasEnd(a, b) => pythagoras_end(step, a, b),
        Position::PythagorasMiddle(a, b) => pythagoras_middle(step, a, b),
        Position::OneSide(sign, a, c, d) => signed(sign, one_side(step, facts, a, c, d)),
        Position::Reciprocal(sign, c, a, b) => {
            signed(sign, Expr::one() / one_side(step, facts, c, a, b))
        }
        Position::CoSide(sign, a, b) => signed(sign, co_side(step, facts, a, b)),
        Position::Zero => Expr::zero(),
    })
}

/// Eliminates the point built by `step` from every quantity of `expr`.
///
/// Free points are left in place.
///
/// # Errors
///
/// See [`eliminate_quantity`].
pub fn eliminate(
    expr: &Expr,
    step: &AmConstruction,
    facts: &CollinearityFacts,
) -> Result<Expr, ProverError> {
    if step.is_free() || !expr.contains(step.point()) {
        return Ok(expr.clone());
    }
    expr.try_map_quantities(&mut |q| eliminate_quantity(q, step, facts))
}

#[cfg(test)]
mod tests {
    use geoprove_poly::UVar;

    use super::*;

    fn ids() -> [LabelId; 6] {
        [0, 1, 2, 3, 4, 5].map(LabelId::from_raw)
    }

    #[test]
    fn test_ratio_area_end() {
        let [a, b, c, m, ..] = ids();
        let step = AmConstruction::Ratio { point: m, w: a, u: a, v: b, r: n(0.5) };
        let facts = CollinearityFacts::new();
        // S_CAM with M last after rotation
        let e = eliminate_quantity(Quantity::Area(m, c, a), &step, &facts).unwrap();
        assert_eq!(e, s(c, a, a) + n(0.5) * (s(c, a, b) - s(c, a, a)));
    }

    #[test]
    fn test_point_free_quantities_are_untouched() {
        let [a, b, c, m, ..] = ids();
        let step = AmConstruction::Ratio { point: m, w: a, u: a, v: b, r: n(0.5) };
        let facts = CollinearityFacts::new();
        let q = Quantity::Pythagoras(a, b, c);
        assert_eq!(eliminate_quantity(q, &step, &facts).unwrap(), Expr::Quantity(q));
        let u = Quantity::Parameter(UVar(3));
        assert_eq!(eliminate_quantity(u, &step, &facts).unwrap(), Expr::Quantity(u));
    }

    #[test]
    fn test_repeated_point_vanishes() {
        let [a, b, _, m, ..] = ids();
        let step = AmConstruction::Ratio { point: m, w: a, u: a, v: b, r: n(0.5) };
        let facts = CollinearityFacts::new();
        assert!(eliminate_quantity(Quantity::Area(m, a, m), &step, &facts).unwrap().is_zero());
        assert!(eliminate_quantity(Quantity::Pythagoras(a, m, m), &step, &facts)
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_foot_pythagoras_end_uses_projection_weights() {
        let [a, b, c, f, ..] = ids();
        let step = AmConstruction::Foot { point: f, p: c, u: a, v: b };
        let facts = CollinearityFacts::new();
        let e = eliminate_quantity(Quantity::Pythagoras(f, a, b), &step, &facts).unwrap();
        // P_FAB = P_BAF
        assert_eq!(e, (p(c, b, a) * p(b, a, a) + p(c, a, b) * p(b, a, b)) / p(a, b, a));
    }

    #[test]
    fn test_ratio_orientation() {
        let [a, b, c, d, y, _] = ids();
        let step = AmConstruction::Intersection { point: y, u: a, v: b, p: c, q: d };
        let mut facts = CollinearityFacts::new();
        facts.add_to_line(a, b, y);
        facts.add_to_line(c, d, y);

        // YA/CD = -(AY/CD); A is on AB so the PQ form applies
        let e = eliminate_quantity(Quantity::Ratio(y, a, c, d), &step, &facts).unwrap();
        assert_eq!(e, -(s(a, c, d) / (s(c, c, d) - s(d, c, d))));

        // AB/CY = 1 / (CY/AB); C is off AB so the UV form applies
        let e = eliminate_quantity(Quantity::Ratio(a, b, c, y), &step, &facts).unwrap();
        assert_eq!(e, Expr::one() / (s(c, a, b) / (s(a, a, b) - s(b, a, b))));

        // AY/BY with both on AB
        let e = eliminate_quantity(Quantity::Ratio(a, y, b, y), &step, &facts).unwrap();
        assert_eq!(e, s(a, c, d) / s(b, c, d));
    }

    #[test]
    fn test_degenerate_ratio_is_an_error() {
        let [a, b, c, _, y, _] = ids();
        let step = AmConstruction::Foot { point: y, p: c, u: a, v: b };
        let facts = CollinearityFacts::new();
        let err = eliminate_quantity(Quantity::Ratio(a, y, y, y), &step, &facts).unwrap_err();
        assert!(matches!(err, ProverError::General(_)));
    }

    #[test]
    fn test_free_step_is_a_no_op() {
        let [a, b, c, ..] = ids();
        let e = s(a, b, c);
        let out = eliminate(&e, &AmConstruction::Free { point: c }, &CollinearityFacts::new()).unwrap();
        assert_eq!(out, e);
    }
}
