//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use geoprove_rings::{Real, Q};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::{Monomial, Multiplier, Polynomial, Power, Term, UVar, XVar};

    type P = Polynomial<XVar, Q>;

    // Terms in x1..x3 with exponents up to 3 and small integer coefficients
    fn small_poly() -> impl Strategy<Value = P> {
        proptest::collection::vec((-6i64..6i64, 0u32..3, 0u32..3, 0u32..2), 0..6).prop_map(
            |terms| {
                P::from_terms(terms.into_iter().map(|(c, e1, e2, e3)| {
                    Term::new(
                        Q::from_integer(c),
                        Monomial::from_exponents([(XVar(1), e1), (XVar(2), e2), (XVar(3), e3)]),
                    )
                }))
            },
        )
    }

    fn divisor_in_x1() -> impl Strategy<Value = P> {
        small_poly().prop_filter("divisor must mention x1", |p| p.contains(XVar(1)))
    }

    fn random_real_poly(rng: &mut ChaCha8Rng, terms: usize) -> Polynomial<UVar, Real> {
        Polynomial::from_terms((0..terms).map(|_| {
            let coeff = Real(f64::from(rng.gen_range(-20i32..20)) / 4.0);
            let monomial = Monomial::from_exponents(
                (1..=4).map(|v| (UVar(v), rng.gen_range(0u32..4))),
            );
            Term::new(coeff, monomial)
        }))
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.clone().add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.clone().add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.clone().mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.clone().mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.clone().mul(&b.clone().add(&c));
            let right = a.clone().mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            prop_assert!(a.clone().mul(&P::zero()).is_zero());
            prop_assert!(P::zero().mul(&a).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.clone().add(&a.invert()).is_zero());
        }

        #[test]
        fn prem_lowers_degree(f in small_poly(), g in divisor_in_x1()) {
            let r = f.pseudo_remainder(&g, XVar(1)).unwrap();
            prop_assert!(r.is_zero() || r.degree_in(XVar(1)) < g.degree_in(XVar(1)));
        }

        #[test]
        fn prem_idempotent(f in small_poly(), g in divisor_in_x1()) {
            let r = f.pseudo_remainder(&g, XVar(1)).unwrap();
            prop_assert_eq!(r.pseudo_remainder(&g, XVar(1)).unwrap(), r);
        }

        #[test]
        fn prem_of_multiple_is_zero(f in small_poly(), g in divisor_in_x1()) {
            let multiple = f.mul(&g);
            prop_assert!(multiple.pseudo_remainder(&g, XVar(1)).unwrap().is_zero());
        }
    }

    #[test]
    fn power_mul_same_variable() {
        let p = Power::new(UVar(1), 3).mul(&Power::new(UVar(1), 4)).unwrap();
        assert_eq!(p, Power::new(UVar(1), 7));
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        for round in 0..4 {
            let a = random_real_poly(&mut rng, 50 + round * 10);
            let b = random_real_poly(&mut rng, 60);
            assert!(a.len() > 20 && b.len() > 20);
            let expected = a.clone().mul(&b);

            for workers in [1, 2, 4, 8] {
                let multiplier = Multiplier::new(workers, 0).unwrap();
                let product = multiplier.mul(&a, &b);
                assert!(
                    product.approx_eq(&expected),
                    "round {round}, workers {workers}"
                );
            }
        }
    }
}
