//! # geoprove-geometry
//!
//! The bridge between constructions and algebra.
//!
//! A `ConstructionProtocol` records points built step by step: free points,
//! midpoints, intersections, feet of perpendiculars and so on. Every point
//! gets coordinates (free parameters `u` or dependent variables `x`) and
//! every construction step contributes hypothesis conditions. Conditions
//! are written once as symbolic templates over placeholder labels and
//! instantiated against concrete points.
//!
//! This crate provides:
//! - `ConstructionProtocol`, `Construction`, `Ratio`, `Coordinate`
//! - `Condition` templates, `PointLabelMap` and `instantiate_condition`
//! - `Statement` and the translation to a `GeoTheorem`
//! - `describe_ndg` for readable non-degeneracy conditions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod condition;
pub mod construction;
pub mod ndg;
pub mod protocol;
pub mod statement;

pub use condition::{instantiate_condition, slot, Condition, PointLabelMap};
pub use construction::{Construction, Coordinate, GeoPoint, Ratio};
pub use ndg::{describe_ndg, describe_ndgs};
pub use protocol::ConstructionProtocol;
pub use statement::Statement;
