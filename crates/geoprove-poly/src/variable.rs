//! Coordinate variables.
//!
//! Each variable kind is its own type, so a polynomial's flavour is fixed
//! at compile time. Within a kind, variables are totally ordered; the
//! greatest variable of a monomial is its leading variable.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use geoprove_core::LabelId;

/// A polynomial variable.
pub trait Variable: Copy + Eq + Ord + Hash + Debug + Display + Send + Sync {}

/// An independent coordinate parameter, introduced for free points.
///
/// Index 0 is reserved for the coordinate origin and stands for the value
/// zero when a point's coordinates are instantiated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct UVar(pub u32);

impl UVar {
    /// The reserved zero coordinate.
    pub const ORIGIN: UVar = UVar(0);

    /// Returns the index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns true for the reserved zero coordinate.
    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.0 == 0
    }
}

impl Display for UVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.0)
    }
}

impl Variable for UVar {}

/// A dependent coordinate, determined by earlier construction steps.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct XVar(pub u32);

impl XVar {
    /// Returns the index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl Display for XVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl Variable for XVar {}

/// Which coordinate of a point a symbolic variable denotes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Axis {
    /// The abscissa.
    X,
    /// The ordinate.
    Y,
}

/// A placeholder coordinate of a labelled point.
///
/// Ordered by axis, then by interned label id. Interning is bijective, so
/// two symbolic variables are equal exactly when they name the same
/// coordinate of the same label.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SymbolicVar {
    /// Coordinate axis.
    pub axis: Axis,
    /// Point label.
    pub label: LabelId,
}

impl SymbolicVar {
    /// The x coordinate of `label`.
    #[must_use]
    pub const fn x(label: LabelId) -> Self {
        Self { axis: Axis::X, label }
    }

    /// The y coordinate of `label`.
    #[must_use]
    pub const fn y(label: LabelId) -> Self {
        Self { axis: Axis::Y, label }
    }
}

impl Display for SymbolicVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            Axis::X => write!(f, "x[{}]", self.label),
            Axis::Y => write!(f, "y[{}]", self.label),
        }
    }
}

impl Variable for SymbolicVar {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_ordering() {
        assert!(XVar(3) > XVar(2));
        assert!(UVar(1) < UVar(10));
        assert!(UVar::ORIGIN.is_origin());
    }

    #[test]
    fn test_symbolic_ordering() {
        let a = LabelId::from_raw(0);
        let b = LabelId::from_raw(1);

        // axis first, then label
        assert!(SymbolicVar::x(b) < SymbolicVar::y(a));
        assert!(SymbolicVar::x(a) < SymbolicVar::x(b));
        assert_ne!(SymbolicVar::x(a), SymbolicVar::y(a));
    }

    #[test]
    fn test_display() {
        assert_eq!(UVar(2).to_string(), "u2");
        assert_eq!(XVar(5).to_string(), "x5");
        assert_eq!(SymbolicVar::y(LabelId::from_raw(4)).to_string(), "y[#4]");
    }
}
