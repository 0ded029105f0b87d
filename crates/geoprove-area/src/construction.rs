//! Area-method constructions.
//!
//! The area method understands constructions that place a point as an
//! affine or rotated combination of earlier points. Circle constructions
//! have no such description and are rejected.

use geoprove_core::{LabelId, LabelInterner, ProverError};
use geoprove_geometry::{Construction, ConstructionProtocol, Coordinate};
use geoprove_poly::UVar;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::expr::Expr;
use crate::facts::CollinearityFacts;

const METHOD: &str = "area method";

/// One area-method construction step.
#[derive(Clone, Debug, PartialEq)]
pub enum AmConstruction {
    /// A free point.
    Free {
        /// The new point.
        point: LabelId,
    },
    /// The intersection of lines `uv` and `pq`.
    Intersection {
        /// The new point.
        point: LabelId,
        /// First point of the first line.
        u: LabelId,
        /// Second point of the first line.
        v: LabelId,
        /// First point of the second line.
        p: LabelId,
        /// Second point of the second line.
        q: LabelId,
    },
    /// The foot of the perpendicular from `p` onto line `uv`.
    Foot {
        /// The new point.
        point: LabelId,
        /// The dropped point.
        p: LabelId,
        /// First point of the line.
        u: LabelId,
        /// Second point of the line.
        v: LabelId,
    },
    /// The point `w + r * (v - u)`.
    Ratio {
        /// The new point.
        point: LabelId,
        /// Base point.
        w: LabelId,
        /// Start of the direction.
        u: LabelId,
        /// End of the direction.
        v: LabelId,
        /// The ratio, free of the new point.
        r: Expr,
    },
    /// The point `u + r * rot90(v - u)`.
    PerpRatio {
        /// The new point.
        point: LabelId,
        /// Base point.
        u: LabelId,
        /// End of the rotated direction.
        v: LabelId,
        /// The ratio, free of the new point.
        r: Expr,
    },
}

impl AmConstruction {
    /// The constructed point.
    #[must_use]
    pub fn point(&self) -> LabelId {
        match *self {
            AmConstruction::Free { point }
            | AmConstruction::Intersection { point, .. }
            | AmConstruction::Foot { point, .. }
            | AmConstruction::Ratio { point, .. }
            | AmConstruction::PerpRatio { point, .. } => point,
        }
    }

    /// The points the step depends on.
    #[must_use]
    pub fn inputs(&self) -> Vec<LabelId> {
        match *self {
            AmConstruction::Free { .. } => Vec::new(),
            AmConstruction::Intersection { u, v, p, q, .. } => vec![u, v, p, q],
            AmConstruction::Foot { p, u, v, .. } => vec![p, u, v],
            AmConstruction::Ratio { w, u, v, .. } => vec![w, u, v],
            AmConstruction::PerpRatio { u, v, .. } => vec![u, v],
        }
    }

    /// Returns true for free points.
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, AmConstruction::Free { .. })
    }
}

/// An ordered sequence of area-method constructions.
#[derive(Clone, Debug)]
pub struct AreaConstructions {
    labels: LabelInterner,
    steps: Vec<AmConstruction>,
    facts: CollinearityFacts,
    free: FxHashMap<LabelId, (UVar, UVar)>,
    next_u: u32,
}

impl Default for AreaConstructions {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaConstructions {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: LabelInterner::new(),
            steps: Vec::new(),
            facts: CollinearityFacts::new(),
            free: FxHashMap::default(),
            next_u: 1,
        }
    }

    /// Translates a construction protocol.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Unsupported` for circle constructions.
    pub fn from_protocol(protocol: &ConstructionProtocol) -> Result<Self, ProverError> {
        let mut out = Self::new();
        out.labels = protocol.labels().clone();

        for step in protocol.steps() {
            let translated = match *step {
                Construction::Free { point } => {
                    let geo = protocol
                        .point(point)
                        .ok_or_else(|| ProverError::Null(format!("unknown point {point}")))?;
                    let (Coordinate::Param(x), Coordinate::Param(y)) = (geo.x, geo.y) else {
                        return Err(ProverError::General(format!(
                            "free point {} has dependent coordinates",
                            protocol.name(point)
                        )));
                    };
                    out.bump_parameters(x.max(y));
                    out.free.insert(point, (x, y));
                    AmConstruction::Free { point }
                }
                Construction::Midpoint { point, a, b } => AmConstruction::Ratio {
                    point,
                    w: a,
                    u: a,
                    v: b,
                    r: Expr::number(0.5),
                },
                Construction::PointOnLine { point, a, b, parameter } => {
                    out.bump_parameters(parameter);
                    AmConstruction::Ratio {
                        point,
                        w: a,
                        u: a,
                        v: b,
                        r: Expr::parameter(parameter),
                    }
                }
                Construction::IntersectionOfLines { point, a, b, c, d } => {
                    AmConstruction::Intersection { point, u: a, v: b, p: c, q: d }
                }
                Construction::Foot { point, from, a, b } => {
                    AmConstruction::Foot { point, p: from, u: a, v: b }
                }
                Construction::RatioPoint { point, w, u, v, ratio } => AmConstruction::Ratio {
                    point,
                    w,
                    u,
                    v,
                    r: ratio_expr(ratio.num, ratio.den),
                },
                Construction::PerpendicularRatioPoint { point, u, v, ratio } => {
                    AmConstruction::PerpRatio {
                        point,
                        u,
                        v,
                        r: ratio_expr(ratio.num, ratio.den),
                    }
                }
                Construction::PointOnCircle { .. } | Construction::Circumcenter { .. } => {
                    return Err(ProverError::Unsupported {
                        method: METHOD,
                        what: format!("{} {}", step.kind(), protocol.name(step.point())),
                    });
                }
            };
            out.record(translated)?;
        }
        Ok(out)
    }

    fn bump_parameters(&mut self, u: UVar) {
        self.next_u = self.next_u.max(u.index() + 1);
    }

    /// Adds a free point, giving it fresh coordinates.
    ///
    /// The first free point is the origin and the second lies on the
    /// y-axis.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::General` if the label is taken.
    pub fn add_free(&mut self, label: &str) -> Result<LabelId, ProverError> {
        self.check_new(label)?;
        let point = self.labels.intern(label);
        let coordinates = match self.free.len() {
            0 => (UVar::ORIGIN, UVar::ORIGIN),
            1 => (UVar::ORIGIN, self.fresh_u()),
            _ => {
                let x = self.fresh_u();
                (x, self.fresh_u())
            }
        };
        self.free.insert(point, coordinates);
        self.record(AmConstruction::Free { point })?;
        Ok(point)
    }

    /// Adds a dependent point built by `make` from the new point's id.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::General` if the label is taken and
    /// `ProverError::Null` if an input point is unknown.
    pub fn add<F>(&mut self, label: &str, make: F) -> Result<LabelId, ProverError>
    where
        F: FnOnce(LabelId) -> AmConstruction,
    {
        self.check_new(label)?;
        let point = self.labels.intern(label);
        let step = make(point);
        if step.point() != point || step.is_free() {
            return Err(ProverError::General(format!(
                "construction of {label} must be a dependent step for that point"
            )));
        }
        self.record(step)?;
        Ok(point)
    }

    /// Allocates a fresh free parameter.
    pub fn fresh_parameter(&mut self) -> Expr {
        Expr::parameter(self.fresh_u())
    }

    fn fresh_u(&mut self) -> UVar {
        let u = UVar(self.next_u);
        self.next_u += 1;
        u
    }

    fn check_new(&self, label: &str) -> Result<(), ProverError> {
        match self.labels.get(label) {
            Some(id) if self.step_of(id).is_some() => {
                Err(ProverError::General(format!("point {label} already defined")))
            }
            _ => Ok(()),
        }
    }

    fn record(&mut self, step: AmConstruction) -> Result<(), ProverError> {
        for input in step.inputs() {
            if self.step_of(input).is_none() {
                return Err(ProverError::Null(format!(
                    "unknown point {} used by {}",
                    self.labels.display(input),
                    self.labels.display(step.point())
                )));
            }
        }

        match step {
            AmConstruction::Intersection { point, u, v, p, q } => {
                self.facts.add_to_line(u, v, point);
                self.facts.add_to_line(p, q, point);
            }
            AmConstruction::Foot { point, u, v, .. } => self.facts.add_to_line(u, v, point),
            AmConstruction::Ratio { point, w, u, v, .. } => {
                if self.facts.collinear(w, u, v) {
                    self.facts.add_to_line(u, v, point);
                }
            }
            AmConstruction::Free { .. } | AmConstruction::PerpRatio { .. } => {}
        }

        debug!(
            target: "area",
            point = %self.labels.display(step.point()),
            free = step.is_free(),
            "area construction"
        );
        self.steps.push(step);
        Ok(())
    }

    /// The label table.
    #[must_use]
    pub fn labels(&self) -> &LabelInterner {
        &self.labels
    }

    /// The steps in construction order.
    #[must_use]
    pub fn steps(&self) -> &[AmConstruction] {
        &self.steps
    }

    /// The collinearity facts implied by the steps.
    #[must_use]
    pub fn facts(&self) -> &CollinearityFacts {
        &self.facts
    }

    /// Looks up the step that built `point`.
    #[must_use]
    pub fn step_of(&self, point: LabelId) -> Option<&AmConstruction> {
        self.steps.iter().find(|s| s.point() == point)
    }

    /// Looks up a point id by label.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown label.
    pub fn point_id(&self, label: &str) -> Result<LabelId, ProverError> {
        self.labels
            .get(label)
            .filter(|&id| self.step_of(id).is_some())
            .ok_or_else(|| ProverError::Null(format!("unknown point {label}")))
    }

    /// Coordinates of a free point.
    #[must_use]
    pub fn free_coordinates(&self, point: LabelId) -> Option<(UVar, UVar)> {
        self.free.get(&point).copied()
    }

    /// Dependent points, most recent first.
    #[must_use]
    pub fn elimination_order(&self) -> Vec<LabelId> {
        self.steps
            .iter()
            .rev()
            .filter(|s| !s.is_free())
            .map(AmConstruction::point)
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio_expr(num: i64, den: i64) -> Expr {
    Expr::number(num as f64 / den as f64)
}

#[cfg(test)]
mod tests {
    use geoprove_geometry::Ratio;

    use super::*;

    #[test]
    fn test_from_protocol_translates_steps() {
        let mut protocol = ConstructionProtocol::new();
        protocol.add_free_point("A").unwrap();
        protocol.add_free_point("B").unwrap();
        protocol.add_free_point("C").unwrap();
        protocol.add_midpoint("M", "A", "B").unwrap();
        protocol.add_point_on_line("P", "B", "C").unwrap();
        protocol.add_perpendicular_ratio_point("Q", "A", "B", Ratio::new(1, 1)).unwrap();

        let am = AreaConstructions::from_protocol(&protocol).unwrap();
        let [a, b, m, p, q] = ["A", "B", "M", "P", "Q"].map(|l| am.point_id(l).unwrap());
        assert_eq!(am.steps().len(), 6);
        assert_eq!(am.elimination_order(), vec![q, p, m]);
        assert!(am.facts().collinear(a, b, m));
        assert_eq!(am.free_coordinates(a), Some((UVar::ORIGIN, UVar::ORIGIN)));
        assert_eq!(am.free_coordinates(b), Some((UVar::ORIGIN, UVar(1))));

        // the parameter of P is u4, so fresh parameters start after it
        let mut am = am;
        assert_eq!(am.fresh_parameter(), Expr::parameter(UVar(5)));
    }

    #[test]
    fn test_circle_constructions_are_unsupported() {
        let mut protocol = ConstructionProtocol::new();
        for l in ["A", "B", "C"] {
            protocol.add_free_point(l).unwrap();
        }
        protocol.add_circumcenter("O", "A", "B", "C").unwrap();
        let err = AreaConstructions::from_protocol(&protocol).unwrap_err();
        assert!(matches!(err, ProverError::Unsupported { method: "area method", .. }));
    }

    #[test]
    fn test_direct_construction() {
        let mut am = AreaConstructions::new();
        let a = am.add_free("A").unwrap();
        let b = am.add_free("B").unwrap();
        let m = am
            .add("M", |point| AmConstruction::Ratio { point, w: a, u: a, v: b, r: Expr::number(0.5) })
            .unwrap();
        assert!(am.facts().on_line(m, a, b));
        assert!(matches!(am.add_free("M"), Err(ProverError::General(_))));

        let ghost = LabelId::from_raw(42);
        let err = am
            .add("X", |point| AmConstruction::Foot { point, p: ghost, u: a, v: b })
            .unwrap_err();
        assert!(matches!(err, ProverError::Null(_)));
    }
}
