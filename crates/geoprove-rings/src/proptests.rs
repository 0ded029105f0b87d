//! Property-based tests for the coefficient domains.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Coefficient, Real, Q};

    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn small_real() -> impl Strategy<Value = Real> {
        (-1000i32..1000i32).prop_map(|n| Real::from(n) * Real(0.25))
    }

    proptest! {
        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn q_inverse(a in small_q()) {
            if let Some(inv) = a.inv() {
                prop_assert!((a * inv).is_one());
            } else {
                prop_assert!(a.is_zero());
            }
        }

        #[test]
        fn real_additive_inverse_is_zero(a in small_real()) {
            prop_assert!((a + (-a)).is_zero());
        }

        #[test]
        fn real_associative_up_to_epsilon(a in small_real(), b in small_real(), c in small_real()) {
            prop_assert!(((a * b) * c).approx_eq(&(a * (b * c))));
        }

        #[test]
        fn pow_matches_repeated_product(a in small_q(), n in 0u32..6u32) {
            let mut expected = Q::one();
            for _ in 0..n {
                expected = expected * a.clone();
            }
            prop_assert_eq!(a.pow(n), expected);
        }
    }
}
