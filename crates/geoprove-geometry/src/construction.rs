//! Construction steps and point coordinates.

use std::fmt;

use geoprove_core::LabelId;
use geoprove_poly::{UVar, XPolynomial, XVar};
use geoprove_rings::Coefficient;

/// An exact ratio `num / den` used by ratio constructions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Ratio {
    /// Numerator.
    pub num: i64,
    /// Denominator, never zero.
    pub den: i64,
}

impl Ratio {
    /// One half.
    pub const HALF: Ratio = Ratio { num: 1, den: 2 };

    /// Creates `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "ratio denominator cannot be zero");
        Self { num, den }
    }

    /// Embeds the ratio into a coefficient domain.
    #[must_use]
    pub fn to_coefficient<C: Coefficient>(self) -> C {
        C::from_ratio(self.num, self.den)
    }

    /// Returns true for a zero ratio.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.num == 0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// One coordinate of a point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Coordinate {
    /// A free parameter; `UVar::ORIGIN` is the value zero.
    Param(UVar),
    /// A dependent coordinate fixed by hypotheses.
    Dependent(XVar),
}

impl Coordinate {
    /// The coordinate as an x-polynomial.
    #[must_use]
    pub fn to_polynomial<C: Coefficient>(self) -> XPolynomial<C> {
        match self {
            Coordinate::Param(u) => XPolynomial::from_uvar(u),
            Coordinate::Dependent(x) => XPolynomial::var(x),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Param(u) if u.is_origin() => write!(f, "0"),
            Coordinate::Param(u) => write!(f, "{u}"),
            Coordinate::Dependent(x) => write!(f, "{x}"),
        }
    }
}

/// A point with its coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GeoPoint {
    /// Interned label.
    pub label: LabelId,
    /// Abscissa.
    pub x: Coordinate,
    /// Ordinate.
    pub y: Coordinate,
    /// True for free points.
    pub free: bool,
}

/// One step of a construction protocol.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Construction {
    /// A free point.
    Free {
        /// The new point.
        point: LabelId,
    },
    /// The midpoint of `a` and `b`.
    Midpoint {
        /// The new point.
        point: LabelId,
        /// First endpoint.
        a: LabelId,
        /// Second endpoint.
        b: LabelId,
    },
    /// A point `a + t * (b - a)` for a free parameter `t`.
    PointOnLine {
        /// The new point.
        point: LabelId,
        /// First point of the line.
        a: LabelId,
        /// Second point of the line.
        b: LabelId,
        /// The position parameter.
        parameter: UVar,
    },
    /// The intersection of lines `ab` and `cd`.
    IntersectionOfLines {
        /// The new point.
        point: LabelId,
        /// First point of the first line.
        a: LabelId,
        /// Second point of the first line.
        b: LabelId,
        /// First point of the second line.
        c: LabelId,
        /// Second point of the second line.
        d: LabelId,
    },
    /// The foot of the perpendicular from `from` to line `ab`.
    Foot {
        /// The new point.
        point: LabelId,
        /// The point dropped onto the line.
        from: LabelId,
        /// First point of the line.
        a: LabelId,
        /// Second point of the line.
        b: LabelId,
    },
    /// The point `w + r * (v - u)`.
    RatioPoint {
        /// The new point.
        point: LabelId,
        /// Base point.
        w: LabelId,
        /// Start of the direction.
        u: LabelId,
        /// End of the direction.
        v: LabelId,
        /// The ratio.
        ratio: Ratio,
    },
    /// The point `u + r * rot90(v - u)`.
    PerpendicularRatioPoint {
        /// The new point.
        point: LabelId,
        /// Base point.
        u: LabelId,
        /// End of the rotated direction.
        v: LabelId,
        /// The ratio.
        ratio: Ratio,
    },
    /// A point on the circle around `center` through `through`.
    PointOnCircle {
        /// The new point.
        point: LabelId,
        /// Centre.
        center: LabelId,
        /// A point on the circle.
        through: LabelId,
        /// The free abscissa.
        parameter: UVar,
    },
    /// The circumcentre of `a`, `b` and `c`.
    Circumcenter {
        /// The new point.
        point: LabelId,
        /// First vertex.
        a: LabelId,
        /// Second vertex.
        b: LabelId,
        /// Third vertex.
        c: LabelId,
    },
}

impl Construction {
    /// Returns the constructed point.
    #[must_use]
    pub fn point(&self) -> LabelId {
        match *self {
            Construction::Free { point }
            | Construction::Midpoint { point, .. }
            | Construction::PointOnLine { point, .. }
            | Construction::IntersectionOfLines { point, .. }
            | Construction::Foot { point, .. }
            | Construction::RatioPoint { point, .. }
            | Construction::PerpendicularRatioPoint { point, .. }
            | Construction::PointOnCircle { point, .. }
            | Construction::Circumcenter { point, .. } => point,
        }
    }

    /// Returns the points the construction depends on.
    #[must_use]
    pub fn inputs(&self) -> Vec<LabelId> {
        match *self {
            Construction::Free { .. } => Vec::new(),
            Construction::Midpoint { a, b, .. } | Construction::PointOnLine { a, b, .. } => {
                vec![a, b]
            }
            Construction::IntersectionOfLines { a, b, c, d, .. } => vec![a, b, c, d],
            Construction::Foot { from, a, b, .. } => vec![from, a, b],
            Construction::RatioPoint { w, u, v, .. } => vec![w, u, v],
            Construction::PerpendicularRatioPoint { u, v, .. } => vec![u, v],
            Construction::PointOnCircle { center, through, .. } => vec![center, through],
            Construction::Circumcenter { a, b, c, .. } => vec![a, b, c],
        }
    }

    /// Short name of the construction kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Construction::Free { .. } => "free point",
            Construction::Midpoint { .. } => "midpoint",
            Construction::PointOnLine { .. } => "point on line",
            Construction::IntersectionOfLines { .. } => "intersection of lines",
            Construction::Foot { .. } => "foot",
            Construction::RatioPoint { .. } => "ratio point",
            Construction::PerpendicularRatioPoint { .. } => "perpendicular ratio point",
            Construction::PointOnCircle { .. } => "point on circle",
            Construction::Circumcenter { .. } => "circumcenter",
        }
    }
}

#[cfg(test)]
mod tests {
    use geoprove_rings::{Real, Q};

    use super::*;

    #[test]
    fn test_ratio_embedding() {
        assert_eq!(Ratio::HALF.to_coefficient::<Q>(), Q::new(1, 2));
        assert_eq!(Ratio::new(-3, 4).to_coefficient::<Real>(), Real(-0.75));
        assert_eq!(Ratio::new(2, 1).to_string(), "2");
    }

    #[test]
    fn test_origin_coordinate_is_zero() {
        assert!(Coordinate::Param(UVar::ORIGIN).to_polynomial::<Q>().is_zero());
        assert_eq!(Coordinate::Param(UVar::ORIGIN).to_string(), "0");
        assert_eq!(Coordinate::Dependent(XVar(2)).to_string(), "x2");
    }

    #[test]
    fn test_inputs() {
        let [p, a, b, c, d] = [0, 1, 2, 3, 4].map(LabelId::from_raw);
        let step = Construction::IntersectionOfLines { point: p, a, b, c, d };
        assert_eq!(step.point(), p);
        assert_eq!(step.inputs(), vec![a, b, c, d]);
        assert_eq!(Construction::Free { point: p }.inputs(), Vec::new());
    }
}
