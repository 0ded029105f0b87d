//! Geometric readings of non-degeneracy conditions.
//!
//! Two kinds of description are attached. When the condition was raised
//! while eliminating a coordinate of a constructed point, the construction
//! itself says what must not degenerate (two lines that must meet, a line
//! that needs two distinct points). Independently, the condition is read
//! back through the points that own its variables.

use std::collections::BTreeSet;

use geoprove_core::LabelId;
use geoprove_rings::Coefficient;
use geoprove_wu::{NdgCondition, NdgDescription};

use crate::construction::Construction;
use crate::protocol::ConstructionProtocol;

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

fn description(protocol: &ConstructionProtocol, points: &[LabelId], text: String) -> NdgDescription {
    let free_points = points
        .iter()
        .filter(|&&p| protocol.point(p).is_some_and(|g| g.free))
        .count();
    NdgDescription {
        points: points.iter().map(|&p| protocol.name(p)).collect(),
        free_points,
        dependent_points: points.len() - free_points,
        text,
    }
}

fn distinct(protocol: &ConstructionProtocol, a: LabelId, b: LabelId) -> NdgDescription {
    let text = format!("{} and {} are distinct", protocol.name(a), protocol.name(b));
    description(protocol, &[a, b], text)
}

/// What a construction step needs in order not to degenerate.
fn construction_description(
    protocol: &ConstructionProtocol,
    step: &Construction,
) -> Option<NdgDescription> {
    let name = |id| protocol.name(id);
    match *step {
        Construction::IntersectionOfLines { a, b, c, d, .. } => {
            let text = format!(
                "lines {}{} and {}{} are not parallel",
                name(a),
                name(b),
                name(c),
                name(d)
            );
            Some(description(protocol, &[a, b, c, d], text))
        }
        Construction::Foot { a, b, .. } | Construction::PointOnLine { a, b, .. } => {
            Some(distinct(protocol, a, b))
        }
        Construction::Circumcenter { a, b, c, .. } => {
            let text = format!("{} are not collinear", join_names(&[name(a), name(b), name(c)]));
            Some(description(protocol, &[a, b, c], text))
        }
        Construction::PointOnCircle { center, through, .. } => {
            Some(distinct(protocol, center, through))
        }
        Construction::RatioPoint { u, v, .. } | Construction::PerpendicularRatioPoint { u, v, .. } => {
            Some(distinct(protocol, u, v))
        }
        Construction::Midpoint { a, b, .. } => Some(distinct(protocol, a, b)),
        Construction::Free { .. } => None,
    }
}

/// Points owning the variables of the condition, in construction order.
fn owners<C: Coefficient>(protocol: &ConstructionProtocol, ndg: &NdgCondition<C>) -> Vec<LabelId> {
    let polynomial = ndg.polynomial();
    let mut found = BTreeSet::new();
    for x in polynomial.variables() {
        if let Some(owner) = protocol.owner_of_x(x) {
            found.insert(owner);
        }
    }
    for (_, coeff) in polynomial.iter() {
        let us = coeff.numerator().variables().into_iter().chain(coeff.denominator().variables());
        for u in us {
            if let Some(owner) = protocol.owner_of_u(u) {
                found.insert(owner);
            }
        }
    }
    let mut points: Vec<LabelId> = found.into_iter().collect();
    points.sort_by_key(|&p| protocol.step_of(p).map_or(usize::MAX, |(i, _)| i));
    points
}

/// Attaches geometric descriptions to one condition.
pub fn describe_ndg<C: Coefficient>(protocol: &ConstructionProtocol, ndg: &mut NdgCondition<C>) {
    if let Some(var) = ndg.variable() {
        let step = protocol
            .owner_of_x(var)
            .and_then(|owner| protocol.step_of(owner))
            .and_then(|(_, step)| construction_description(protocol, step));
        if let Some(d) = step {
            ndg.add_description(d);
        }
    }

    let points = owners(protocol, ndg);
    if !points.is_empty() {
        let names: Vec<String> = points.iter().map(|&p| protocol.name(p)).collect();
        let text = if points.len() == 1 {
            format!("{} is in general position", names[0])
        } else {
            format!("{} are in general position", join_names(&names))
        };
        ndg.add_description(description(protocol, &points, text));
    }
}

/// Attaches descriptions to every condition.
pub fn describe_ndgs<C: Coefficient>(protocol: &ConstructionProtocol, ndgs: &mut [NdgCondition<C>]) {
    for ndg in ndgs {
        describe_ndg(protocol, ndg);
    }
}
