//! Local simplification of area-method expressions.
//!
//! One pass rewrites the tree bottom-up with a fixed rule set: numeric
//! folding, absorption of zero and one, cancellation of `x - x` and
//! `x / x`, sign extraction from products and quotients, and flattening of
//! nested fractions. [`simplify`] repeats passes until nothing changes.

use geoprove_core::ProverError;
use geoprove_rings::Real;
use tracing::trace;

use crate::expr::{BigProduct, Expr};

fn is_negation_of(a: &Expr, b: &Expr) -> bool {
    matches!(b, Expr::Neg(inner) if **inner == *a) || matches!(a, Expr::Neg(inner) if **inner == *b)
}

fn sum(a: Expr, b: Expr) -> Expr {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return Expr::Number(x + y);
    }
    if is_negation_of(&a, &b) {
        return Expr::zero();
    }
    a + b
}

fn product(a: Expr, b: Expr) -> Expr {
    if a.is_zero() || b.is_zero() {
        return Expr::zero();
    }
    if a.is_one() {
        return b;
    }
    if b.is_one() {
        return a;
    }
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return Expr::Number(x * y);
    }
    match (a, b) {
        (Expr::Neg(x), y) | (y, Expr::Neg(x)) => -(*x * y),
        (Expr::Number(r), y) | (y, Expr::Number(r)) if r == Real(-1.0) => -y,
        (x, y) => x * y,
    }
}

fn fraction(a: Expr, b: Expr) -> Result<Expr, ProverError> {
    if b.is_zero() {
        return Err(ProverError::General(format!("division by zero in {a} / {b}")));
    }
    if a.is_zero() {
        return Ok(Expr::zero());
    }
    if b.is_one() {
        return Ok(a);
    }
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return Ok(Expr::Number(x / y));
    }
    if a == b {
        return Ok(Expr::one());
    }
    Ok(match (a, b) {
        (Expr::Neg(x), y) => -(*x / y),
        (x, Expr::Neg(y)) => -(x / *y),
        (Expr::Fraction(x, y), z) => *x / (*y * z),
        (x, Expr::Fraction(y, z)) => (x * *z) / *y,
        (x, y) => x / y,
    })
}

fn big_product(p: &BigProduct) -> Expr {
    if p.coeff == Real(0.0) {
        return Expr::zero();
    }
    match p.factors.as_slice() {
        [] => Expr::Number(p.coeff),
        [q] if p.coeff == Real(1.0) => Expr::Quantity(*q),
        _ => Expr::BigProduct(p.clone()),
    }
}

/// Runs one bottom-up rewriting pass.
///
/// # Errors
///
/// Returns `ProverError::General` when a denominator simplifies to zero.
pub fn simplify_once(expr: &Expr) -> Result<Expr, ProverError> {
    Ok(match expr {
        Expr::Number(_) | Expr::Quantity(_) => expr.clone(),
        Expr::BigProduct(p) => big_product(p),
        Expr::Neg(a) => match simplify_once(a)? {
            Expr::Number(r) => Expr::Number(-r),
            Expr::Neg(inner) => *inner,
            other => -other,
        },
        Expr::Sum(a, b) => sum(simplify_once(a)?, simplify_once(b)?),
        Expr::Product(a, b) => product(simplify_once(a)?, simplify_once(b)?),
        Expr::Fraction(a, b) => fraction(simplify_once(a)?, simplify_once(b)?)?,
    })
}

/// Simplifies until a fixpoint or until `max_passes` passes have run.
///
/// # Errors
///
/// Returns `ProverError::General` when a denominator simplifies to zero.
pub fn simplify(expr: &Expr, max_passes: usize) -> Result<Expr, ProverError> {
    let mut current = expr.clone();
    for pass in 0..max_passes {
        let next = simplify_once(&current)?;
        if next == current {
            trace!(target: "area", passes = pass + 1, size = next.size(), "simplified");
            return Ok(next);
        }
        current = next;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use geoprove_core::LabelId;

    use super::*;

    fn s() -> Expr {
        let [a, b, c] = [0, 1, 2].map(LabelId::from_raw);
        Expr::area(a, b, c)
    }

    fn p() -> Expr {
        let [a, b] = [0, 1].map(LabelId::from_raw);
        Expr::pythagoras(a, b, a)
    }

    #[test]
    fn test_cancellation() {
        assert!(simplify(&(s() - s()), 8).unwrap().is_zero());
        assert_eq!(simplify(&(s() / s()), 8).unwrap(), Expr::one());
        assert_eq!(simplify(&(-(-s())), 8).unwrap(), s());
    }

    #[test]
    fn test_numeric_folding() {
        let e = (Expr::number(2.0) + Expr::number(3.0)) * s() * Expr::one() + Expr::zero();
        assert_eq!(simplify(&e, 8).unwrap(), Expr::number(5.0) * s());
        assert_eq!(simplify(&(Expr::number(1.0) / Expr::number(4.0)), 8).unwrap(), Expr::number(0.25));
    }

    #[test]
    fn test_signs_move_outwards() {
        let e = (-s()) * p();
        assert_eq!(simplify(&e, 8).unwrap(), -(s() * p()));
        let e = s() / (-p());
        assert_eq!(simplify(&e, 8).unwrap(), -(s() / p()));
        let e = Expr::number(-1.0) * p();
        assert_eq!(simplify(&e, 8).unwrap(), -p());
    }

    #[test]
    fn test_nested_fractions_flatten() {
        let e = (s() / p()) / s();
        assert_eq!(simplify_once(&e).unwrap(), s() / (p() * s()));
        let e = s() / (p() / s());
        assert_eq!(simplify_once(&e).unwrap(), (s() * s()) / p());
    }

    #[test]
    fn test_zero_denominator_is_an_error() {
        let e = s() / (p() - p());
        assert!(matches!(simplify(&e, 8), Err(ProverError::General(_))));
    }

    #[test]
    fn test_pass_cap_is_respected() {
        let e = -(-(-(-s())));
        // one pass strips both double negations bottom-up
        assert_eq!(simplify(&e, 1).unwrap(), s());
    }
}
