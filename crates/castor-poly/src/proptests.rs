//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use castor_rings::Q;

    use crate::algorithms::gcd::{div_rem, poly_gcd};
    use crate::dense::DensePoly;

    fn qpoly() -> impl Strategy<Value = DensePoly<Q>> {
        prop::collection::vec(-20i64..20, 1..6)
            .prop_map(|cs| DensePoly::new(cs.into_iter().map(Q::from_integer).collect()))
    }

    proptest! {
        #[test]
        fn add_commutative(a in qpoly(), b in qpoly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn mul_commutative(a in qpoly(), b in qpoly()) {
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }

        #[test]
        fn mul_distributes_over_add(a in qpoly(), b in qpoly(), c in qpoly()) {
            let lhs = a.mul(&b.add(&c)).unwrap();
            let rhs = a.mul(&b).unwrap().add(&a.mul(&c).unwrap());
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn eval_is_a_ring_homomorphism(a in qpoly(), b in qpoly(), x in -10i64..10) {
            let x = Q::from_integer(x);
            prop_assert_eq!(
                a.add(&b).eval(&x),
                a.eval(&x) + b.eval(&x)
            );
            prop_assert_eq!(
                a.mul(&b).unwrap().eval(&x),
                a.eval(&x) * b.eval(&x)
            );
        }

        #[test]
        fn derivative_product_rule(a in qpoly(), b in qpoly()) {
            // (ab)' = a'b + ab'
            let lhs = a.mul(&b).unwrap().derivative();
            let rhs = a.derivative().mul(&b).unwrap()
                .add(&a.mul(&b.derivative()).unwrap());
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn div_rem_satisfies_euclidean_identity(a in qpoly(), b in qpoly()) {
            prop_assume!(!b.is_zero());
            let (quot, rem) = div_rem(&a, &b).unwrap();
            prop_assert_eq!(quot.mul(&b).unwrap().add(&rem), a);
            prop_assert!(rem.is_zero() || rem.degree() < b.degree());
        }

        #[test]
        fn gcd_divides_both_inputs(a in qpoly(), b in qpoly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let g = poly_gcd(&a, &b).unwrap();
            let (_, ra) = div_rem(&a, &g).unwrap();
            let (_, rb) = div_rem(&b, &g).unwrap();
            prop_assert!(ra.is_zero());
            prop_assert!(rb.is_zero());
        }

        #[test]
        fn shift_matches_monomial_multiplication(a in qpoly(), k in 0usize..5) {
            let shifted = a.shift(k).unwrap();
            let monomial = DensePoly::monomial(Q::from_integer(1), k);
            prop_assert_eq!(shifted, a.mul(&monomial).unwrap());
        }
    }
}
