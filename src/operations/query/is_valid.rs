use std::collections::HashMap;

use thiserror::Error;

use super::pass_through::find_pass_through_vertex;
use crate::geometry::Polygon;
use crate::math::predicates::segments_properly_intersect;
use crate::math::Point;

/// The first check a polygon fails.
///
/// Edges are identified by the index of their start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Defect {
    #[error("polygon has {count} point(s), at least 2 are required")]
    TooFewPoints { count: usize },

    #[error("polygon is not closed: first point {first} differs from last point {last}")]
    NotClosed { first: Point, last: Point },

    #[error("vertex {point} repeats at indices {first} and {second}")]
    DuplicateVertex {
        point: Point,
        first: usize,
        second: usize,
    },

    #[error("edges {edge_a} and {edge_b} cross")]
    SelfIntersection { edge_a: usize, edge_b: usize },

    #[error("edges {edge_a} and {edge_b} cross between connected contours")]
    InternalEdgeCrossing { edge_a: usize, edge_b: usize },

    #[error("vertex {vertex} at index {index} lies inside edge {edge}")]
    PassThroughVertex {
        vertex: Point,
        index: usize,
        edge: usize,
    },
}

/// Decides whether a polygon is a valid simple closed contour.
///
/// Checks run in order and stop at the first failure:
///
/// 1. at least 2 points, first equals last
/// 2. no interior point repeats
/// 3. no two edges at least two apart cross
/// 4. no two distinct edges cross (connected-contour sweep)
/// 5. no vertex lies strictly inside an edge it is not an endpoint of
pub struct IsValid<'a> {
    polygon: &'a Polygon,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the validation, returning `true` if the polygon is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.check().is_ok()
    }

    /// Runs the checks and reports the first defect found.
    ///
    /// # Errors
    ///
    /// Returns the [`Defect`] of the first failing check.
    pub fn check(&self) -> Result<(), Defect> {
        let points = self.polygon.points();
        let result = check_closed(points)
            .and_then(|()| check_unique_interior(points))
            .and_then(|()| check_self_intersection(points))
            .and_then(|()| check_internal_edges(points))
            .and_then(|()| check_pass_through(points));
        if let Err(defect) = &result {
            tracing::debug!(%defect, points = points.len(), "polygon rejected");
        }
        result
    }
}

fn check_closed(points: &[Point]) -> Result<(), Defect> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Err(Defect::TooFewPoints { count: 0 });
    };
    if points.len() < 2 {
        return Err(Defect::TooFewPoints {
            count: points.len(),
        });
    }
    if first != last {
        return Err(Defect::NotClosed { first, last });
    }
    Ok(())
}

/// The closing point is excluded; it repeats the first by construction.
fn check_unique_interior(points: &[Point]) -> Result<(), Defect> {
    let mut seen: HashMap<Point, usize> = HashMap::with_capacity(points.len());
    for (second, &point) in points[..points.len() - 1].iter().enumerate() {
        if let Some(&first) = seen.get(&point) {
            return Err(Defect::DuplicateVertex {
                point,
                first,
                second,
            });
        }
        seen.insert(point, second);
    }
    Ok(())
}

/// Finds the first pair of edges `(i, j)` with `j >= i + gap` that properly
/// cross.
fn first_crossing(points: &[Point], gap: usize) -> Option<(usize, usize)> {
    let edge_count = points.len().saturating_sub(1);
    for i in 0..edge_count {
        for j in (i + gap)..edge_count {
            if segments_properly_intersect(points[i], points[i + 1], points[j], points[j + 1]) {
                return Some((i, j));
            }
        }
    }
    None
}

fn check_self_intersection(points: &[Point]) -> Result<(), Defect> {
    match first_crossing(points, 2) {
        Some((edge_a, edge_b)) => Err(Defect::SelfIntersection { edge_a, edge_b }),
        None => Ok(()),
    }
}

fn check_internal_edges(points: &[Point]) -> Result<(), Defect> {
    match first_crossing(points, 1) {
        Some((edge_a, edge_b)) => Err(Defect::InternalEdgeCrossing { edge_a, edge_b }),
        None => Ok(()),
    }
}

fn check_pass_through(points: &[Point]) -> Result<(), Defect> {
    match find_pass_through_vertex(points) {
        Some(hit) => Err(Defect::PassThroughVertex {
            vertex: hit.vertex,
            index: hit.index,
            edge: hit.edge,
        }),
        None => Ok(()),
    }
}
