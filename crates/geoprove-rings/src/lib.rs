//! # geoprove-rings
//!
//! Coefficient domains for geoprove polynomials.
//!
//! This crate provides:
//! - The `Coefficient` trait every polynomial coefficient implements
//! - `Real`: double precision with an epsilon-tolerant zero test
//! - `Q`: exact rationals backed by `dashu`
//!
//! All numeric zero and equality tests in the prover go through
//! `Coefficient::is_zero` / `Coefficient::approx_eq`, so `Real` applies its
//! epsilon everywhere and `Q` is exact everywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;
pub mod real;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use rational::Q;
pub use real::Real;
pub use traits::Coefficient;
