//! # geoprove-wu
//!
//! Wu's method for geometry theorem proving.
//!
//! Hypotheses and the statement are polynomials in the dependent
//! coordinates `x1, x2, ...` with coefficients in the free parameters. The
//! hypothesis system is first brought into triangular form, one polynomial
//! per eliminated variable; the statement is then reduced by successive
//! pseudo-division. A zero final remainder proves the theorem under the
//! non-degeneracy conditions collected along the way.
//!
//! This crate provides:
//! - `ProverContext`: configuration plus the shared multiplier
//! - `XPolySystem`: hypotheses and triangulation
//! - `NdgCondition`: non-degeneracy side conditions
//! - `GeoTheorem` and `WuProver`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod ndg;
pub mod prover;
pub mod system;
pub mod theorem;

pub use context::ProverContext;
pub use ndg::{NdgCondition, NdgDescription};
pub use prover::{ProofOutcome, ProofStats, Verdict, WuProver};
pub use system::{Hypothesis, XPolySystem};
pub use theorem::GeoTheorem;
