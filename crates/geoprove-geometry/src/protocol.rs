//! Construction protocols.
//!
//! Points are added one step at a time. Each step allocates coordinates
//! for the new point and records the conditions tying it to earlier
//! points. The protocol is coefficient-agnostic; conditions are only
//! expanded into polynomials when a theorem is built.
//!
//! Coordinates follow the usual normalisation: the first free point is
//! the origin, the second lies on the y-axis, every later free point gets
//! two fresh parameters and every constructed point gets fresh dependent
//! variables, except where a coordinate is forced to equal one already
//! known.

use geoprove_core::{LabelId, LabelInterner, ProverError};
use geoprove_poly::{UVar, XPolynomial, XVar};
use geoprove_rings::Coefficient;
use geoprove_wu::{GeoTheorem, ProverContext};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::condition::{instantiate_condition, slot, Condition, PointLabelMap};
use crate::construction::{Construction, Coordinate, GeoPoint, Ratio};
use crate::statement::Statement;

/// A condition template together with the points bound to its slots.
#[derive(Clone, Debug)]
struct ConditionUse {
    condition: Condition,
    bindings: Vec<(LabelId, LabelId)>,
    parameter: Option<UVar>,
}

impl ConditionUse {
    fn new(condition: Condition, bindings: Vec<(LabelId, LabelId)>) -> Self {
        Self {
            condition,
            bindings,
            parameter: None,
        }
    }
}

/// An ordered list of construction steps.
#[derive(Clone, Debug)]
pub struct ConstructionProtocol {
    labels: LabelInterner,
    steps: Vec<Construction>,
    points: FxHashMap<LabelId, GeoPoint>,
    uses: Vec<ConditionUse>,
    x_owner: FxHashMap<XVar, LabelId>,
    u_owner: FxHashMap<UVar, LabelId>,
    next_u: u32,
    next_x: u32,
    free_points: usize,
}

impl Default for ConstructionProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstructionProtocol {
    /// Creates an empty protocol.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: LabelInterner::new(),
            steps: Vec::new(),
            points: FxHashMap::default(),
            uses: Vec::new(),
            x_owner: FxHashMap::default(),
            u_owner: FxHashMap::default(),
            next_u: 1,
            next_x: 1,
            free_points: 0,
        }
    }

    /// The label table.
    #[must_use]
    pub fn labels(&self) -> &LabelInterner {
        &self.labels
    }

    /// The construction steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Construction] {
        &self.steps
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no point has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Looks up a point by id.
    #[must_use]
    pub fn point(&self, id: LabelId) -> Option<&GeoPoint> {
        self.points.get(&id)
    }

    /// Looks up a point id by label.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown label.
    pub fn point_id(&self, label: &str) -> Result<LabelId, ProverError> {
        self.labels
            .get(label)
            .filter(|id| self.points.contains_key(id))
            .ok_or_else(|| ProverError::Null(format!("unknown point {label}")))
    }

    /// Returns the position and step that constructed `id`.
    #[must_use]
    pub fn step_of(&self, id: LabelId) -> Option<(usize, &Construction)> {
        self.steps.iter().enumerate().find(|(_, s)| s.point() == id)
    }

    /// The point whose coordinate is the dependent variable `x`.
    #[must_use]
    pub fn owner_of_x(&self, x: XVar) -> Option<LabelId> {
        self.x_owner.get(&x).copied()
    }

    /// The point whose coordinate (or position parameter) is `u`.
    #[must_use]
    pub fn owner_of_u(&self, u: UVar) -> Option<LabelId> {
        self.u_owner.get(&u).copied()
    }

    /// Human-readable name of a point.
    #[must_use]
    pub fn name(&self, id: LabelId) -> String {
        self.labels.display(id)
    }

    fn fresh_u(&mut self, owner: LabelId) -> UVar {
        let u = UVar(self.next_u);
        self.next_u += 1;
        self.u_owner.insert(u, owner);
        u
    }

    fn fresh_x(&mut self, owner: LabelId) -> Coordinate {
        let x = XVar(self.next_x);
        self.next_x += 1;
        self.x_owner.insert(x, owner);
        Coordinate::Dependent(x)
    }

    fn coords(&self, id: LabelId) -> (Coordinate, Coordinate) {
        self.points
            .get(&id)
            .map_or((Coordinate::Param(UVar::ORIGIN), Coordinate::Param(UVar::ORIGIN)), |p| {
                (p.x, p.y)
            })
    }

    /// Validates the input labels and reserves the new one.
    fn begin(&mut self, label: &str, inputs: &[&str]) -> Result<(LabelId, Vec<LabelId>), ProverError> {
        let ids = inputs
            .iter()
            .map(|l| self.point_id(l))
            .collect::<Result<Vec<_>, _>>()?;
        if self.labels.get(label).is_some_and(|id| self.points.contains_key(&id)) {
            return Err(ProverError::General(format!("point {label} already defined")));
        }
        Ok((self.labels.intern(label), ids))
    }

    fn finish(&mut self, step: Construction, x: Coordinate, y: Coordinate, uses: Vec<ConditionUse>) {
        let point = step.point();
        let free = matches!(step, Construction::Free { .. });
        self.points.insert(point, GeoPoint { label: point, x, y, free });
        debug!(
            target: "geometry",
            point = %self.labels.display(point),
            kind = step.kind(),
            %x,
            %y,
            conditions = uses.len(),
            "construction step"
        );
        self.steps.push(step);
        self.uses.extend(uses);
    }

    /// Adds a free point.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::General` if the label is taken.
    pub fn add_free_point(&mut self, label: &str) -> Result<LabelId, ProverError> {
        let (point, _) = self.begin(label, &[])?;
        let (x, y) = match self.free_points {
            0 => (Coordinate::Param(UVar::ORIGIN), Coordinate::Param(UVar::ORIGIN)),
            1 => (Coordinate::Param(UVar::ORIGIN), Coordinate::Param(self.fresh_u(point))),
            _ => {
                let x = self.fresh_u(point);
                (Coordinate::Param(x), Coordinate::Param(self.fresh_u(point)))
            }
        };
        self.free_points += 1;
        self.finish(Construction::Free { point }, x, y, Vec::new());
        Ok(point)
    }

    /// Adds the midpoint of `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_midpoint(&mut self, label: &str, a: &str, b: &str) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[a, b])?;
        let (a, b) = (ids[0], ids[1]);
        let (ax, ay) = self.coords(a);
        let (bx, by) = self.coords(b);
        let bindings = vec![(slot::P, point), (slot::A, a), (slot::B, b)];

        let mut uses = Vec::new();
        let x = if ax == bx {
            ax
        } else {
            uses.push(ConditionUse::new(Condition::MidpointX, bindings.clone()));
            self.fresh_x(point)
        };
        let y = if ay == by {
            ay
        } else {
            uses.push(ConditionUse::new(Condition::MidpointY, bindings));
            self.fresh_x(point)
        };
        self.finish(Construction::Midpoint { point, a, b }, x, y, uses);
        Ok(point)
    }

    /// Adds a point on line `ab` at a free position.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_point_on_line(&mut self, label: &str, a: &str, b: &str) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[a, b])?;
        let (a, b) = (ids[0], ids[1]);
        let parameter = self.fresh_u(point);
        let (ax, ay) = self.coords(a);
        let (bx, by) = self.coords(b);
        let bindings = vec![(slot::P, point), (slot::A, a), (slot::B, b)];

        let mut uses = Vec::new();
        let x = if ax == bx {
            ax
        } else {
            uses.push(ConditionUse {
                condition: Condition::PointOnLineX,
                bindings: bindings.clone(),
                parameter: Some(parameter),
            });
            self.fresh_x(point)
        };
        let y = if ay == by {
            ay
        } else {
            uses.push(ConditionUse {
                condition: Condition::PointOnLineY,
                bindings,
                parameter: Some(parameter),
            });
            self.fresh_x(point)
        };
        let step = Construction::PointOnLine { point, a, b, parameter };
        self.finish(step, x, y, uses);
        Ok(point)
    }

    /// Adds the intersection of lines `ab` and `cd`.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_intersection(
        &mut self,
        label: &str,
        a: &str,
        b: &str,
        c: &str,
        d: &str,
    ) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[a, b, c, d])?;
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        let x = self.fresh_x(point);
        let y = self.fresh_x(point);
        let uses = vec![
            ConditionUse::new(
                Condition::Collinear,
                vec![(slot::A, a), (slot::B, b), (slot::C, point)],
            ),
            ConditionUse::new(
                Condition::Collinear,
                vec![(slot::A, c), (slot::B, d), (slot::C, point)],
            ),
        ];
        self.finish(Construction::IntersectionOfLines { point, a, b, c, d }, x, y, uses);
        Ok(point)
    }

    /// Adds the foot of the perpendicular from `from` onto line `ab`.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_foot(&mut self, label: &str, from: &str, a: &str, b: &str) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[from, a, b])?;
        let (from, a, b) = (ids[0], ids[1], ids[2]);
        let x = self.fresh_x(point);
        let y = self.fresh_x(point);
        let uses = vec![
            ConditionUse::new(
                Condition::Collinear,
                vec![(slot::A, a), (slot::B, b), (slot::C, point)],
            ),
            ConditionUse::new(
                Condition::Perpendicular,
                vec![(slot::A, from), (slot::B, point), (slot::C, a), (slot::D, b)],
            ),
        ];
        self.finish(Construction::Foot { point, from, a, b }, x, y, uses);
        Ok(point)
    }

    /// Adds the point `w + ratio * (v - u)`.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_ratio_point(
        &mut self,
        label: &str,
        w: &str,
        u: &str,
        v: &str,
        ratio: Ratio,
    ) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[w, u, v])?;
        let (w, u, v) = (ids[0], ids[1], ids[2]);
        let (wx, wy) = self.coords(w);
        let (ux, uy) = self.coords(u);
        let (vx, vy) = self.coords(v);
        let bindings = vec![(slot::P, point), (slot::A, u), (slot::B, v), (slot::C, w)];

        let mut uses = Vec::new();
        let x = if ux == vx || ratio.is_zero() {
            wx
        } else {
            uses.push(ConditionUse::new(Condition::RatioX(ratio), bindings.clone()));
            self.fresh_x(point)
        };
        let y = if uy == vy || ratio.is_zero() {
            wy
        } else {
            uses.push(ConditionUse::new(Condition::RatioY(ratio), bindings));
            self.fresh_x(point)
        };
        self.finish(Construction::RatioPoint { point, w, u, v, ratio }, x, y, uses);
        Ok(point)
    }

    /// Adds the point `u + ratio * rot90(v - u)`.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_perpendicular_ratio_point(
        &mut self,
        label: &str,
        u: &str,
        v: &str,
        ratio: Ratio,
    ) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[u, v])?;
        let (u, v) = (ids[0], ids[1]);
        let (ux, uy) = self.coords(u);
        let (vx, vy) = self.coords(v);
        let bindings = vec![(slot::P, point), (slot::A, u), (slot::B, v)];

        let mut uses = Vec::new();
        let x = if uy == vy || ratio.is_zero() {
            ux
        } else {
            uses.push(ConditionUse::new(Condition::PerpendicularRatioX(ratio), bindings.clone()));
            self.fresh_x(point)
        };
        let y = if ux == vx || ratio.is_zero() {
            uy
        } else {
            uses.push(ConditionUse::new(Condition::PerpendicularRatioY(ratio), bindings));
            self.fresh_x(point)
        };
        let step = Construction::PerpendicularRatioPoint { point, u, v, ratio };
        self.finish(step, x, y, uses);
        Ok(point)
    }

    /// Adds a point on the circle around `center` through `through`.
    ///
    /// The abscissa is a fresh parameter and the ordinate is dependent.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_point_on_circle(
        &mut self,
        label: &str,
        center: &str,
        through: &str,
    ) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[center, through])?;
        let (center, through) = (ids[0], ids[1]);
        let parameter = self.fresh_u(point);
        let y = self.fresh_x(point);
        let uses = vec![ConditionUse::new(
            Condition::EqualSegments,
            vec![(slot::A, center), (slot::B, point), (slot::C, center), (slot::D, through)],
        )];
        let step = Construction::PointOnCircle { point, center, through, parameter };
        self.finish(step, Coordinate::Param(parameter), y, uses);
        Ok(point)
    }

    /// Adds the circumcentre of triangle `abc`.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown input and
    /// `ProverError::General` if the label is taken.
    pub fn add_circumcenter(&mut self, label: &str, a: &str, b: &str, c: &str) -> Result<LabelId, ProverError> {
        let (point, ids) = self.begin(label, &[a, b, c])?;
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        let x = self.fresh_x(point);
        let y = self.fresh_x(point);
        let uses = [b, c]
            .into_iter()
            .map(|other| {
                ConditionUse::new(
                    Condition::EqualSegments,
                    vec![(slot::A, point), (slot::B, a), (slot::C, point), (slot::D, other)],
                )
            })
            .collect();
        self.finish(Construction::Circumcenter { point, a, b, c }, x, y, uses);
        Ok(point)
    }

    /// Builds a collinearity statement from labels.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown label.
    pub fn collinear(&self, a: &str, b: &str, c: &str) -> Result<Statement, ProverError> {
        Ok(Statement::Collinear(self.point_id(a)?, self.point_id(b)?, self.point_id(c)?))
    }

    /// Builds a parallelism statement from labels.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown label.
    pub fn parallel(&self, a: &str, b: &str, c: &str, d: &str) -> Result<Statement, ProverError> {
        let [a, b, c, d] = self.four(a, b, c, d)?;
        Ok(Statement::Parallel(a, b, c, d))
    }

    /// Builds a perpendicularity statement from labels.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown label.
    pub fn perpendicular(&self, a: &str, b: &str, c: &str, d: &str) -> Result<Statement, ProverError> {
        let [a, b, c, d] = self.four(a, b, c, d)?;
        Ok(Statement::Perpendicular(a, b, c, d))
    }

    /// Builds an equal-length statement from labels.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown label.
    pub fn equal_segments(&self, a: &str, b: &str, c: &str, d: &str) -> Result<Statement, ProverError> {
        let [a, b, c, d] = self.four(a, b, c, d)?;
        Ok(Statement::EqualSegments(a, b, c, d))
    }

    /// Builds a concyclicity statement from labels.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` for an unknown label.
    pub fn concyclic(&self, a: &str, b: &str, c: &str, d: &str) -> Result<Statement, ProverError> {
        let [a, b, c, d] = self.four(a, b, c, d)?;
        Ok(Statement::Concyclic(a, b, c, d))
    }

    fn four(&self, a: &str, b: &str, c: &str, d: &str) -> Result<[LabelId; 4], ProverError> {
        Ok([self.point_id(a)?, self.point_id(b)?, self.point_id(c)?, self.point_id(d)?])
    }

    /// Binds template slots to the coordinates of protocol points.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` if a bound point is not in the protocol.
    pub fn point_map<C: Coefficient>(
        &self,
        bindings: &[(LabelId, LabelId)],
    ) -> Result<PointLabelMap<C>, ProverError> {
        let mut map = PointLabelMap::new();
        for &(slot, id) in bindings {
            let point = self
                .points
                .get(&id)
                .ok_or_else(|| ProverError::Null(format!("unknown point {id}")))?;
            map.bind(slot, point.x.to_polynomial(), point.y.to_polynomial());
        }
        Ok(map)
    }

    /// Expands every recorded condition, and the statement, into a theorem.
    ///
    /// Conditions that vanish identically are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ProverError::Null` if the statement mentions a point that is
    /// not in the protocol.
    pub fn to_theorem<C: Coefficient>(
        &self,
        name: &str,
        statement: &Statement,
        ctx: &ProverContext,
    ) -> Result<GeoTheorem<C>, ProverError> {
        let mut theorem = GeoTheorem::new(name);
        for condition_use in &self.uses {
            let mut map = self.point_map(&condition_use.bindings)?;
            if let Some(t) = condition_use.parameter {
                map.bind(slot::T, XPolynomial::from_uvar(t), XPolynomial::zero());
            }
            let template = condition_use.condition.template();
            let polynomial = instantiate_condition(ctx, &template, &map)?;
            if polynomial.is_zero() {
                warn!(
                    target: "geometry",
                    condition = %condition_use.condition,
                    "hypothesis vanishes identically, skipped"
                );
                continue;
            }
            theorem.add_hypothesis(polynomial);
        }

        let (condition, bindings) = statement.condition();
        let map = self.point_map(&bindings)?;
        let polynomial = instantiate_condition(ctx, &condition.template(), &map)?;
        theorem.set_statement(polynomial);
        debug!(
            target: "geometry",
            theorem = name,
            hypotheses = theorem.hypotheses().len(),
            statement = %statement.describe(&self.labels),
            "theorem built"
        );
        Ok(theorem)
    }
}

#[cfg(test)]
mod tests {
    use geoprove_poly::{UFraction, UPolynomial};
    use geoprove_rings::{Real, Q};
    use geoprove_wu::{Verdict, WuProver};

    use super::*;

    fn ctx() -> ProverContext {
        ProverContext::default()
    }

    fn triangle() -> ConstructionProtocol {
        let mut p = ConstructionProtocol::new();
        p.add_free_point("A").unwrap();
        p.add_free_point("B").unwrap();
        p.add_free_point("C").unwrap();
        p
    }

    fn prove(protocol: &ConstructionProtocol, statement: &Statement) -> Verdict {
        let theorem = protocol.to_theorem::<Q>("t", statement, &ctx()).unwrap();
        WuProver::new().prove(&theorem, &ctx()).unwrap().verdict
    }

    #[test]
    fn test_free_point_coordinates() {
        let p = triangle();
        let [a, b, c] = ["A", "B", "C"].map(|l| *p.point(p.point_id(l).unwrap()).unwrap());
        assert_eq!((a.x, a.y), (Coordinate::Param(UVar::ORIGIN), Coordinate::Param(UVar::ORIGIN)));
        assert_eq!((b.x, b.y), (Coordinate::Param(UVar::ORIGIN), Coordinate::Param(UVar(1))));
        assert_eq!((c.x, c.y), (Coordinate::Param(UVar(2)), Coordinate::Param(UVar(3))));
        assert!(a.free && b.free && c.free);
        assert_eq!(p.owner_of_u(UVar(3)), Some(c.label));
    }

    #[test]
    fn test_midpoint_reuses_shared_coordinate() {
        let mut p = ConstructionProtocol::new();
        p.add_free_point("A").unwrap();
        p.add_free_point("B").unwrap();
        let m = p.add_midpoint("M", "A", "B").unwrap();
        let point = p.point(m).unwrap();
        assert_eq!(point.x, Coordinate::Param(UVar::ORIGIN));
        assert_eq!(point.y, Coordinate::Dependent(XVar(1)));
        assert_eq!(p.owner_of_x(XVar(1)), Some(m));

        // the only hypothesis is 2*x1 - u1
        let statement = Statement::Collinear(p.point_id("A").unwrap(), m, p.point_id("B").unwrap());
        let theorem = p.to_theorem::<Q>("midpoint", &statement, &ctx()).unwrap();
        let expected = XPolynomial::var(XVar(1))
            .mul_constant(&UFraction::from_i64(2))
            .sub(&XPolynomial::from_u(UPolynomial::var(UVar(1))));
        assert_eq!(theorem.hypotheses(), &[expected]);
        assert!(theorem.statement().is_some_and(|s| s.is_zero()));
    }

    #[test]
    fn test_midline_is_parallel() {
        let mut p = triangle();
        p.add_midpoint("M", "C", "A").unwrap();
        p.add_midpoint("N", "C", "B").unwrap();
        let statement = p.parallel("M", "N", "A", "B").unwrap();
        assert_eq!(prove(&p, &statement), Verdict::True);
    }

    #[test]
    fn test_midline_is_not_perpendicular() {
        let mut p = triangle();
        p.add_midpoint("M", "C", "A").unwrap();
        p.add_midpoint("N", "C", "B").unwrap();
        let statement = p.perpendicular("M", "N", "A", "B").unwrap();
        assert_eq!(prove(&p, &statement), Verdict::False);
    }

    #[test]
    fn test_circumcenter_is_equidistant() {
        let mut p = triangle();
        p.add_circumcenter("O", "A", "B", "C").unwrap();
        let statement = p.equal_segments("O", "B", "O", "C").unwrap();
        assert_eq!(prove(&p, &statement), Verdict::True);
    }

    #[test]
    fn test_diagonals_of_parallelogram_bisect() {
        let mut p = triangle();
        p.add_ratio_point("D", "C", "B", "A", Ratio::new(1, 1)).unwrap();
        p.add_intersection("O", "A", "C", "B", "D").unwrap();
        let statement = p.equal_segments("O", "A", "O", "C").unwrap();
        let theorem = p.to_theorem::<Q>("parallelogram", &statement, &ctx()).unwrap();
        let outcome = WuProver::new().prove(&theorem, &ctx()).unwrap();
        assert_eq!(outcome.verdict, Verdict::True);
        assert!(!outcome.ndg_conditions.is_empty());
    }

    #[test]
    fn test_foot_lies_on_line() {
        let mut p = triangle();
        p.add_foot("F", "C", "A", "B").unwrap();
        let statement = p.collinear("A", "B", "F").unwrap();
        assert_eq!(prove(&p, &statement), Verdict::True);
        let statement = p.perpendicular("C", "F", "A", "B").unwrap();
        assert_eq!(prove(&p, &statement), Verdict::True);
    }

    #[test]
    fn test_point_on_line_stays_collinear() {
        let mut p = triangle();
        p.add_point_on_line("P", "B", "C").unwrap();
        let statement = p.collinear("B", "C", "P").unwrap();
        assert_eq!(prove(&p, &statement), Verdict::True);
    }

    #[test]
    fn test_thales_on_circle() {
        // P on the circle with diameter AB sees AB at a right angle
        let mut p = ConstructionProtocol::new();
        p.add_free_point("A").unwrap();
        p.add_free_point("O").unwrap();
        p.add_ratio_point("B", "O", "A", "O", Ratio::new(1, 1)).unwrap();
        p.add_point_on_circle("P", "O", "A").unwrap();
        let statement = p.perpendicular("P", "A", "P", "B").unwrap();
        assert_eq!(prove(&p, &statement), Verdict::True);
    }

    #[test]
    fn test_real_coefficients() {
        let mut p = triangle();
        p.add_midpoint("M", "C", "A").unwrap();
        p.add_midpoint("N", "C", "B").unwrap();
        let statement = p.parallel("M", "N", "A", "B").unwrap();
        let theorem = p.to_theorem::<Real>("midline", &statement, &ctx()).unwrap();
        let outcome = WuProver::new().prove(&theorem, &ctx()).unwrap();
        assert_eq!(outcome.verdict, Verdict::True);
    }

    #[test]
    fn test_unknown_and_duplicate_labels() {
        let mut p = triangle();
        assert!(matches!(p.add_midpoint("M", "A", "Z"), Err(ProverError::Null(_))));
        assert!(matches!(p.add_free_point("A"), Err(ProverError::General(_))));
        assert!(matches!(p.collinear("A", "B", "Q"), Err(ProverError::Null(_))));
        assert_eq!(p.len(), 3);
        assert!(p.labels().get("Z").is_none());
    }

    #[test]
    fn test_statement_with_foreign_point_is_null() {
        let p = triangle();
        let statement = Statement::Collinear(
            p.point_id("A").unwrap(),
            p.point_id("B").unwrap(),
            LabelId::from_raw(99),
        );
        let err = p.to_theorem::<Q>("t", &statement, &ctx()).unwrap_err();
        assert!(matches!(err, ProverError::Null(_)));
    }
}
