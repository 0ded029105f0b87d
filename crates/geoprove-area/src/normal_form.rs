//! Normal forms used to decide whether an eliminated expression vanishes.
//!
//! After elimination the expression is brought to a single fraction, its
//! numerator is expanded into a right-nested sum of [`BigProduct`]s, and
//! like products are grouped. A statement holds by the area method when
//! the grouped numerator is zero.

use std::collections::BTreeMap;

use geoprove_core::{Budget, ProverError};
use geoprove_rings::Real;
use tracing::trace;

use crate::expr::{BigProduct, Expr, Quantity};

fn times(a: Expr, b: Expr) -> Expr {
    if a.is_one() {
        b
    } else if b.is_one() {
        a
    } else {
        a * b
    }
}

fn split(expr: &Expr) -> (Expr, Expr) {
    match expr {
        Expr::Number(_) | Expr::Quantity(_) | Expr::BigProduct(_) => (expr.clone(), Expr::one()),
        Expr::Sum(a, b) => {
            let (na, da) = split(a);
            let (nb, db) = split(b);
            if da == db {
                return (na + nb, da);
            }
            (times(na, db.clone()) + times(nb, da.clone()), times(da, db))
        }
        Expr::Product(a, b) => {
            let (na, da) = split(a);
            let (nb, db) = split(b);
            (times(na, nb), times(da, db))
        }
        Expr::Fraction(a, b) => {
            let (na, da) = split(a);
            let (nb, db) = split(b);
            (times(na, db), times(da, nb))
        }
        Expr::Neg(a) => {
            let (na, da) = split(a);
            (-na, da)
        }
    }
}

/// Rewrites `expr` as a single quotient `num / den`.
///
/// Returns the numerator alone when the denominator is one.
#[must_use]
pub fn reduce_to_single_fraction(expr: &Expr) -> Expr {
    let (num, den) = split(expr);
    if den.is_one() {
        num
    } else {
        num / den
    }
}

fn expand(expr: &Expr, budget: &mut Budget) -> Result<Vec<BigProduct>, ProverError> {
    let terms = match expr {
        Expr::Number(r) => {
            if *r == Real(0.0) {
                Vec::new()
            } else {
                vec![BigProduct::new(*r, Vec::new())]
            }
        }
        Expr::Quantity(q) => vec![BigProduct::new(Real(1.0), vec![*q])],
        Expr::BigProduct(p) => vec![p.clone()],
        Expr::Sum(a, b) => {
            let mut out = expand(a, budget)?;
            out.extend(expand(b, budget)?);
            out
        }
        Expr::Neg(a) => expand(a, budget)?
            .into_iter()
            .map(|p| BigProduct { coeff: -p.coeff, factors: p.factors })
            .collect(),
        Expr::Product(a, b) => {
            let left = expand(a, budget)?;
            let right = expand(b, budget)?;
            budget.check(left.len() * right.len())?;
            left.iter()
                .flat_map(|x| right.iter().map(move |y| x.mul(y)))
                .collect()
        }
        Expr::Fraction(..) => {
            return Err(ProverError::General(format!(
                "cannot expand quotient {expr} into a sum of products"
            )));
        }
    };
    budget.observe(terms.len())?;
    Ok(terms)
}

fn right_nested(products: Vec<BigProduct>) -> Expr {
    products
        .into_iter()
        .rev()
        .fold(None, |acc: Option<Expr>, p| {
            let leaf = Expr::BigProduct(p);
            Some(match acc {
                None => leaf,
                Some(rest) => leaf + rest,
            })
        })
        .unwrap_or_else(Expr::zero)
}

/// Expands a fraction-free expression into `p1 + (p2 + (... + pn))` with
/// every `pi` a [`BigProduct`].
///
/// # Errors
///
/// Returns `ProverError::General` if `expr` still contains a quotient, and
/// the budget's errors when the expansion grows too large or too slow.
pub fn reduce_to_right_associative_form(
    expr: &Expr,
    budget: &mut Budget,
) -> Result<Expr, ProverError> {
    let products = expand(expr, budget)?;
    trace!(target: "area", products = products.len(), "expanded");
    Ok(right_nested(products))
}

/// Collects the terms of a sum of products; `false` if `expr` is not one.
fn leaves(expr: &Expr, out: &mut Vec<BigProduct>) -> bool {
    match expr {
        Expr::Sum(a, b) => leaves(a, out) && leaves(b, out),
        Expr::BigProduct(p) => {
            out.push(p.clone());
            true
        }
        Expr::Number(r) => {
            out.push(BigProduct::new(*r, Vec::new()));
            true
        }
        Expr::Quantity(q) => {
            out.push(BigProduct::new(Real(1.0), vec![*q]));
            true
        }
        Expr::Neg(a) => {
            let start = out.len();
            let ok = leaves(a, out);
            for p in &mut out[start..] {
                p.coeff = -p.coeff;
            }
            ok
        }
        Expr::Product(..) | Expr::Fraction(..) => false,
    }
}

/// Combines products with the same factors, dropping those whose
/// coefficients cancel.
#[must_use]
pub fn group_products(products: Vec<BigProduct>) -> Vec<BigProduct> {
    let mut grouped: BTreeMap<Vec<Quantity>, Real> = BTreeMap::new();
    for p in products {
        let entry = grouped.entry(p.factors).or_insert(Real(0.0));
        *entry = *entry + p.coeff;
    }
    grouped
        .into_iter()
        .filter(|(_, coeff)| *coeff != Real(0.0))
        .map(|(factors, coeff)| BigProduct { coeff, factors })
        .collect()
}

/// Groups like terms of a right-nested sum of products.
///
/// Expressions that are not sums of products are returned unchanged.
#[must_use]
pub fn group_sum_of_products(expr: &Expr) -> Expr {
    let mut products = Vec::new();
    if !leaves(expr, &mut products) {
        return expr.clone();
    }
    right_nested(group_products(products))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use geoprove_core::{LabelId, Phase};

    use super::*;

    fn budget() -> Budget {
        Budget::with_limits(Phase::AreaMethod, Duration::from_secs(60), 1_000)
    }

    fn quantities() -> (Expr, Expr) {
        let [a, b, c] = [0, 1, 2].map(LabelId::from_raw);
        (Expr::area(a, b, c), Expr::pythagoras(a, b, c))
    }

    #[test]
    fn test_single_fraction() {
        let (s, p) = quantities();
        let e = s.clone() / p.clone() + Expr::one();
        assert_eq!(reduce_to_single_fraction(&e), (s + p.clone()) / p);
    }

    #[test]
    fn test_shared_denominator_is_kept_once() {
        let (s, p) = quantities();
        let e = s.clone() / p.clone() - s.clone() / p.clone();
        assert_eq!(reduce_to_single_fraction(&e), (s.clone() + -s) / p);
    }

    #[test]
    fn test_expansion_is_right_nested() {
        let (s, p) = quantities();
        let e = (s.clone() + p.clone()) * s.clone();
        let out = reduce_to_right_associative_form(&e, &mut budget()).unwrap();
        let Expr::Sum(first, rest) = out else {
            panic!("expected a sum");
        };
        assert!(matches!(*first, Expr::BigProduct(_)));
        assert!(matches!(*rest, Expr::BigProduct(_)));
    }

    #[test]
    fn test_grouping_cancels() {
        let (s, p) = quantities();
        let e = s.clone() * p.clone() - p.clone() * s.clone() + Expr::number(2.0) * s.clone()
            - s.clone();
        let ra = reduce_to_right_associative_form(&e, &mut budget()).unwrap();
        let grouped = group_sum_of_products(&ra);
        let Expr::Quantity(q) = s else { unreachable!() };
        assert_eq!(grouped, Expr::BigProduct(BigProduct::new(Real(1.0), vec![q])));

        let zero = reduce_to_right_associative_form(&(p.clone() - p), &mut budget()).unwrap();
        assert!(group_sum_of_products(&zero).is_zero());
    }

    #[test]
    fn test_quotients_cannot_be_expanded() {
        let (s, p) = quantities();
        let err = reduce_to_right_associative_form(&(s / p), &mut budget()).unwrap_err();
        assert!(matches!(err, ProverError::General(_)));
    }

    #[test]
    fn test_expansion_respects_space_limit() {
        let (s, p) = quantities();
        let mut tight = Budget::with_limits(Phase::AreaMethod, Duration::from_secs(60), 3);
        let e = (s.clone() + p.clone()) * (s + p);
        let err = reduce_to_right_associative_form(&e, &mut tight).unwrap_err();
        assert!(matches!(err, ProverError::SpaceLimit { terms: 4, .. }));
    }
}
