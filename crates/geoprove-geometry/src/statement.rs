//! Theorem statements over constructed points.

use geoprove_core::{LabelId, LabelInterner};

use crate::condition::{slot, Condition};

/// The claim a theorem makes about its points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Statement {
    /// Three points are collinear.
    Collinear(LabelId, LabelId, LabelId),
    /// Line `AB` is parallel to line `CD`.
    Parallel(LabelId, LabelId, LabelId, LabelId),
    /// Line `AB` is perpendicular to line `CD`.
    Perpendicular(LabelId, LabelId, LabelId, LabelId),
    /// Segment `AB` has the length of segment `CD`.
    EqualSegments(LabelId, LabelId, LabelId, LabelId),
    /// Four points lie on one circle.
    Concyclic(LabelId, LabelId, LabelId, LabelId),
}

impl Statement {
    /// The condition template and the point bound to each of its slots.
    #[must_use]
    pub fn condition(&self) -> (Condition, Vec<(LabelId, LabelId)>) {
        match *self {
            Statement::Collinear(a, b, c) => (
                Condition::Collinear,
                vec![(slot::A, a), (slot::B, b), (slot::C, c)],
            ),
            Statement::Parallel(a, b, c, d) => (Condition::Parallel, four(a, b, c, d)),
            Statement::Perpendicular(a, b, c, d) => (Condition::Perpendicular, four(a, b, c, d)),
            Statement::EqualSegments(a, b, c, d) => (Condition::EqualSegments, four(a, b, c, d)),
            Statement::Concyclic(a, b, c, d) => (Condition::Concyclic, four(a, b, c, d)),
        }
    }

    /// The points the statement mentions, in order.
    #[must_use]
    pub fn points(&self) -> Vec<LabelId> {
        self.condition().1.into_iter().map(|(_, p)| p).collect()
    }

    /// Renders the statement with point names.
    #[must_use]
    pub fn describe(&self, labels: &LabelInterner) -> String {
        let name = |id: LabelId| labels.display(id);
        match *self {
            Statement::Collinear(a, b, c) => {
                format!("{}, {} and {} are collinear", name(a), name(b), name(c))
            }
            Statement::Parallel(a, b, c, d) => format!(
                "{}{} is parallel to {}{}",
                name(a),
                name(b),
                name(c),
                name(d)
            ),
            Statement::Perpendicular(a, b, c, d) => format!(
                "{}{} is perpendicular to {}{}",
                name(a),
                name(b),
                name(c),
                name(d)
            ),
            Statement::EqualSegments(a, b, c, d) => {
                format!("|{}{}| = |{}{}|", name(a), name(b), name(c), name(d))
            }
            Statement::Concyclic(a, b, c, d) => format!(
                "{}, {}, {} and {} are concyclic",
                name(a),
                name(b),
                name(c),
                name(d)
            ),
        }
    }
}

fn four(a: LabelId, b: LabelId, c: LabelId, d: LabelId) -> Vec<(LabelId, LabelId)> {
    vec![(slot::A, a), (slot::B, b), (slot::C, c), (slot::D, d)]
}
