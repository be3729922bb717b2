//! Ideals as stateless canonicalization policies.

use castor_integers::{ArithmeticError, Integer, Natural};
use num_traits::{One, Zero};

use crate::integers::Z;
use crate::traits::Ring;

/// An ideal of a ring.
///
/// The ideal is a policy type, not a value: membership and coset
/// canonicalization are associated functions, so a quotient ring can
/// carry the ideal purely in its type.
pub trait Ideal<R: Ring> {
    /// Returns true if `x` lies in the ideal.
    fn contains(x: &R) -> bool;

    /// Maps `x` to the canonical representative of its coset.
    ///
    /// Two elements of the same coset must map to the same
    /// representative, and `representative(representative(x)) ==
    /// representative(x)`.
    fn representative(x: &R) -> R;
}

/// A maximal ideal, so the quotient by it is a field.
pub trait MaximalIdeal<R: Ring>: Ideal<R> {
    /// The representative of the multiplicative inverse of the coset of
    /// `x`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotInvertible`] if the coset of `x`
    /// has no inverse in the quotient.
    fn inverse(x: &R) -> Result<R, ArithmeticError>;
}

/// The principal ideal N·Z of the integers.
///
/// The canonical coset representative is the Euclidean remainder, which
/// always lies in `[0, N)`. `N` is never checked for primality: a
/// composite modulus is accepted, and elements sharing a factor with it
/// surface as [`ArithmeticError::NotInvertible`]. A zero `N` makes every
/// associated function panic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PrincipalIdealZ<const N: u64>;

impl<const N: u64> PrincipalIdealZ<N> {
    fn modulus() -> Integer {
        Integer::from(Natural::from(N))
    }
}

impl<const N: u64> Ideal<Z> for PrincipalIdealZ<N> {
    fn contains(x: &Z) -> bool {
        x.0.checked_rem(&Self::modulus())
            .expect("modulus is nonzero")
            .is_zero()
    }

    fn representative(x: &Z) -> Z {
        Z(x.0
            .checked_rem(&Self::modulus())
            .expect("modulus is nonzero"))
    }
}

impl<const N: u64> MaximalIdeal<Z> for PrincipalIdealZ<N> {
    /// Extended Euclidean algorithm on `(x mod N, N)`, tracking the
    /// Bezout coefficient of `x`.
    fn inverse(x: &Z) -> Result<Z, ArithmeticError> {
        let n = Self::modulus();
        let a = x.0.checked_rem(&n)?;
        if a.is_zero() {
            return Err(ArithmeticError::NotInvertible(format!(
                "{} is a multiple of the modulus {N}",
                x.0
            )));
        }

        let mut t = Integer::zero();
        let mut new_t = Integer::one();
        let mut r = n.clone();
        let mut new_r = a;

        while !new_r.is_zero() {
            let quotient = r.checked_div(&new_r)?;
            (t, new_t) = (new_t.clone(), &t - &(&quotient * &new_t));
            (r, new_r) = (new_r.clone(), &r - &(&quotient * &new_r));
        }

        if r > Integer::one() {
            return Err(ArithmeticError::NotInvertible(format!(
                "{} shares the factor {r} with the modulus {N}",
                x.0
            )));
        }

        if t.is_negative() {
            t = t + n;
        }
        Ok(Z(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Mod5 = PrincipalIdealZ<5>;
    type Mod6 = PrincipalIdealZ<6>;
    type Mod7 = PrincipalIdealZ<7>;

    #[test]
    fn test_contains() {
        assert!(Mod5::contains(&Z::new(10)));
        assert!(Mod5::contains(&Z::new(0)));
        assert!(Mod5::contains(&Z::new(-15)));
        assert!(!Mod5::contains(&Z::new(7)));
    }

    #[test]
    fn test_representative_is_euclidean() {
        assert_eq!(Mod5::representative(&Z::new(13)), Z::new(3));
        // -3 mod 5 = 2, -3 mod 7 = 4
        assert_eq!(Mod5::representative(&Z::new(-3)), Z::new(2));
        assert_eq!(Mod7::representative(&Z::new(-3)), Z::new(4));
        assert_eq!(Mod5::representative(&Z::new(-7)), Z::new(3));
    }

    #[test]
    fn test_inverse_mod_prime() {
        // 3 * 5 = 15 = 1 (mod 7)
        assert_eq!(Mod7::inverse(&Z::new(3)).unwrap(), Z::new(5));
        // Negative inputs are folded first: -4 = 3 (mod 7)
        assert_eq!(Mod7::inverse(&Z::new(-4)).unwrap(), Z::new(5));
    }

    #[test]
    fn test_inverse_of_multiple_fails() {
        assert!(matches!(
            Mod7::inverse(&Z::new(14)),
            Err(ArithmeticError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_inverse_mod_composite() {
        // gcd(2, 6) = 2, so 2 has no inverse mod 6; 5 is coprime.
        assert!(matches!(
            Mod6::inverse(&Z::new(2)),
            Err(ArithmeticError::NotInvertible(_))
        ));
        assert_eq!(Mod6::inverse(&Z::new(5)).unwrap(), Z::new(5));
    }
}
