//! # geoprove
//!
//! An automated theorem prover for plane geometry.
//!
//! Constructions are described step by step in a `ConstructionProtocol`;
//! a `Statement` names the claim. Two methods decide it:
//!
//! - **Wu's method** turns every step into a polynomial hypothesis over
//!   free parameters `u` and dependent coordinates `x`, triangulates the
//!   system by pseudo-division and reduces the statement polynomial to a
//!   final remainder.
//! - **The area method** rewrites the statement in signed areas and
//!   Pythagoras differences and eliminates constructed points until only
//!   free points remain.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use geoprove::prelude::*;
//!
//! let mut protocol = ConstructionProtocol::new();
//! for label in ["A", "B", "C"] {
//!     protocol.add_free_point(label)?;
//! }
//! protocol.add_midpoint("M", "A", "C")?;
//! protocol.add_midpoint("N", "B", "C")?;
//! let statement = protocol.parallel("M", "N", "A", "B")?;
//!
//! let report = prove(&protocol, &statement, Method::Wu, &ProverContext::default())?;
//! assert_eq!(report.verdict, Verdict::True);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod driver;

pub use geoprove_area as area;
pub use geoprove_core as core;
pub use geoprove_geometry as geometry;
pub use geoprove_poly as poly;
pub use geoprove_rings as rings;
pub use geoprove_wu as wu;

pub use driver::{prove, Method, Report};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::driver::{prove, Method, Report};
    pub use geoprove_area::{AreaMethodProver, AreaMethodTheoremStatement, Expr};
    pub use geoprove_core::{ProverConfig, ProverError, ResultCode};
    pub use geoprove_geometry::{ConstructionProtocol, Ratio, Statement};
    pub use geoprove_poly::{Multiplier, UPolynomial, XPolynomial};
    pub use geoprove_rings::{Coefficient, Real, Q};
    pub use geoprove_wu::{GeoTheorem, ProverContext, Verdict, WuProver};
}
