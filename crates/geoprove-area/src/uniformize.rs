//! Canonical forms of geometric quantities.
//!
//! Equal quantities written differently (`S_ABC`, `S_BCA`, `-S_ACB`) are
//! brought to one representative so that later passes can cancel them.
//! Quantities that vanish by the known collinearity facts, or because a
//! point repeats, become zero.

use geoprove_core::LabelId;

use crate::expr::{Expr, Quantity};
use crate::facts::CollinearityFacts;

fn signed(q: Quantity, negate: bool) -> Expr {
    if negate {
        -Expr::Quantity(q)
    } else {
        Expr::Quantity(q)
    }
}

fn area(a: LabelId, b: LabelId, c: LabelId, facts: &CollinearityFacts) -> Expr {
    if facts.collinear(a, b, c) {
        return Expr::zero();
    }
    // cyclic rotations keep the sign; put the smallest label first
    let (a, b, c) = if a < b && a < c {
        (a, b, c)
    } else if b < a && b < c {
        (b, c, a)
    } else {
        (c, a, b)
    };
    if b < c {
        signed(Quantity::Area(a, b, c), false)
    } else {
        signed(Quantity::Area(a, c, b), true)
    }
}

fn pythagoras(a: LabelId, b: LabelId, c: LabelId) -> Expr {
    if a == b || b == c {
        return Expr::zero();
    }
    if a == c {
        // P_ABA = P_BAB = 2 AB²
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        return Expr::Quantity(Quantity::Pythagoras(lo, hi, lo));
    }
    if a < c {
        Expr::Quantity(Quantity::Pythagoras(a, b, c))
    } else {
        Expr::Quantity(Quantity::Pythagoras(c, b, a))
    }
}

fn ratio(a: LabelId, b: LabelId, c: LabelId, d: LabelId) -> Expr {
    if a == b {
        return Expr::zero();
    }
    let (a, b, flip_num) = if a < b { (a, b, false) } else { (b, a, true) };
    let (c, d, flip_den) = if c <= d { (c, d, false) } else { (d, c, true) };
    let negate = flip_num != flip_den;
    if (a, b) == (c, d) {
        return if negate { Expr::number(-1.0) } else { Expr::one() };
    }
    signed(Quantity::Ratio(a, b, c, d), negate)
}

/// Brings one quantity to canonical form.
#[must_use]
pub fn uniformize_quantity(q: Quantity, facts: &CollinearityFacts) -> Expr {
    match q {
        Quantity::Area(a, b, c) => area(a, b, c, facts),
        Quantity::Pythagoras(a, b, c) => pythagoras(a, b, c),
        Quantity::Ratio(a, b, c, d) => ratio(a, b, c, d),
        Quantity::Parameter(_) => Expr::Quantity(q),
    }
}

/// Brings every quantity of `expr` to canonical form.
#[must_use]
pub fn uniformize(expr: &Expr, facts: &CollinearityFacts) -> Expr {
    expr.map_quantities(|q| uniformize_quantity(q, facts))
}
