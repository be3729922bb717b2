//! Property-based tests for the algebraic wrappers and quotients.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::traits::{Field, Ring, UnitaryRing};
    use crate::{Zp, Z};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        // Z ring axioms through the wrapper

        #[test]
        fn z_add_commutative(a in small_int(), b in small_int()) {
            prop_assert_eq!(Z::new(a) + Z::new(b), Z::new(b) + Z::new(a));
        }

        #[test]
        fn z_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            let c = Z::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn z_mul_by_scalar_matches_mul(a in small_int(), n in -50i64..50i64) {
            prop_assert_eq!(Z::new(a).mul_by_scalar(n), Z::new(a) * Z::new(n));
        }

        // Zp modular arithmetic

        #[test]
        fn zp_add_commutative(a in small_int(), b in small_int()) {
            const P: u64 = 998_244_353;
            let a = Zp::<P>::from_signed(a);
            let b = Zp::<P>::from_signed(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn zp_mul_commutative(a in small_int(), b in small_int()) {
            const P: u64 = 998_244_353;
            let a = Zp::<P>::from_signed(a);
            let b = Zp::<P>::from_signed(b);
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn zp_inverse(a in 1i64..1000i64) {
            const P: u64 = 998_244_353;
            let a = Zp::<P>::from_signed(a);
            let inv = a.try_inverse().expect("nonzero element mod a prime");
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn zp_field_inv_agrees_with_try_inverse(a in 1i64..1000i64) {
            const P: u64 = 13;
            let a = Zp::<P>::from_signed(a);
            match a.inv() {
                Some(inv) => prop_assert!((a * inv).is_one()),
                None => prop_assert!(a.is_zero()),
            }
        }

        #[test]
        fn zp_fermat_little_theorem(a in 1i64..1000i64) {
            const P: u64 = 13;
            let a = Zp::<P>::from_signed(a);
            if !a.is_zero() {
                // a^(p-1) = 1 (mod p) for a != 0
                prop_assert!(a.pow(u32::try_from(P).unwrap() - 1).is_one());
            }
        }
    }
}
