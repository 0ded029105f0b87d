//! # geoprove-core
//!
//! Shared vocabulary for the geoprove theorem prover.
//!
//! This crate provides:
//! - Bijective interning of point labels (`LabelInterner`, `LabelId`)
//! - The error taxonomy shared by every prover phase (`ProverError`, `ResultCode`)
//! - Run configuration (`ProverConfig`)
//! - Per-phase space/time budgets (`Budget`, `Phase`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod budget;
pub mod config;
pub mod error;
pub mod intern;

pub use budget::{Budget, Phase};
pub use config::ProverConfig;
pub use error::{ProverError, ResultCode};
pub use intern::{LabelId, LabelInterner};
