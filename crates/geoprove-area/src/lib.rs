//! # geoprove-area
//!
//! Coordinate-free proofs by the area method.
//!
//! Statements are written with signed areas `S_ABC`, Pythagoras differences
//! `P_ABC` and ratios of parallel segments. Constructed points are removed
//! one by one, most recent first, by elimination lemmas tied to the
//! construction that produced them. What remains is an expression over free
//! points, which is zero exactly when the statement holds.
//!
//! This crate provides:
//! - The expression tree (`Expr`, `Quantity`, `BigProduct`)
//! - Area-method constructions (`AmConstruction`, `AreaConstructions`)
//! - The rewriting passes: uniformization, simplification, elimination and
//!   normal forms
//! - The prover (`AreaMethodProver`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod construction;
pub mod eliminate;
pub mod expr;
pub mod facts;
pub mod independent;
pub mod normal_form;
pub mod prover;
pub mod simplify;
pub mod statement;
pub mod uniformize;

pub use construction::{AmConstruction, AreaConstructions};
pub use eliminate::{eliminate, eliminate_quantity};
pub use expr::{BigProduct, Expr, Quantity};
pub use facts::CollinearityFacts;
pub use independent::{to_coordinates, CoordinateFraction};
pub use normal_form::{
    group_products, group_sum_of_products, reduce_to_right_associative_form,
    reduce_to_single_fraction,
};
pub use prover::{AreaMethodProver, AreaOutcome, AreaStats};
pub use simplify::{simplify, simplify_once};
pub use statement::AreaMethodTheoremStatement;
pub use uniformize::{uniformize, uniformize_quantity};
