//! # castor-rings
//!
//! Algebraic structures for Castor CAS.
//!
//! This crate provides:
//! - Operation types and composed structure predicates (`ops`)
//! - Element-level traits: `Ring`, `UnitaryRing`, `Field`, `SignedRing`
//! - Concrete carriers: `Z`, `Q`
//! - Ideals and quotient structures: `PrincipalIdealZ`, `FactorRing`,
//!   `FactorField`, `Zp`
//!
//! ## Predicate Hierarchy
//!
//! ```text
//! Magma
//!  └── Semigroup (+ Associative)
//!       └── Monoid (+ HasIdentity)
//!            └── Group (+ HasInverse)
//!                 └── AbelianGroup (+ Commutative)
//! ```
//!
//! A carrier type is a `Ring` by naming an `AddOp` that is an
//! `AbelianGroup` and a `MulOp` that is a distributing `Semigroup`;
//! `UnitaryRing` and `Field` strengthen the bounds on `MulOp` instead of
//! introducing new carrier types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factor;
pub mod ideal;
pub mod integers;
pub mod ops;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use factor::{FactorField, FactorRing, Zp};
pub use ideal::{Ideal, MaximalIdeal, PrincipalIdealZ};
pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, Ring, SignedRing, UnitaryRing};
