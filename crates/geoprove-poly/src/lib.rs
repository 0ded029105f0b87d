//! # geoprove-poly
//!
//! Sparse multivariate polynomial algebra for the geoprove theorem prover.
//!
//! This crate provides:
//! - Coordinate variables: `UVar` (free parameters), `XVar` (dependent
//!   coordinates) and `SymbolicVar` (placeholder point coordinates)
//! - `Power`, `Monomial` and `Term` building blocks
//! - A single generic `Polynomial<V, C>` over a variable type and a
//!   coefficient domain
//! - `UFraction`, the quotient-of-u-polynomials coefficient of `XPolynomial`
//! - Multivariate division and pseudo-division
//! - Parallel multiplication on a rayon worker pool
//!
//! ## Flavours
//!
//! | alias | variables | coefficients |
//! |-------|-----------|--------------|
//! | `UPolynomial<C>` | `UVar` | `C` |
//! | `XPolynomial<C>` | `XVar` | `UFraction<C>` |
//! | `SymbolicPolynomial<C>` | `SymbolicVar` | `C` |
//!
//! Arithmetic consumes the receiver and returns it, so a shared polynomial
//! has to be cloned explicitly before it is modified.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod division;
pub mod error;
pub mod flavors;
pub mod monomial;
pub mod parallel;
pub mod polynomial;
pub mod power;
pub mod term;
pub mod ufraction;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use flavors::{SymbolicPolynomial, UPolynomial, XPolynomial};
pub use monomial::Monomial;
pub use parallel::Multiplier;
pub use polynomial::Polynomial;
pub use power::Power;
pub use term::Term;
pub use ufraction::UFraction;
pub use variable::{Axis, SymbolicVar, UVar, Variable, XVar};
