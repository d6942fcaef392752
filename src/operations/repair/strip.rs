use crate::math::Point;
use crate::operations::query::find_pass_through_vertex;

/// Removes pass-through vertices from a point sequence until none remain.
///
/// Every removal shortens the sequence, so the loop is capped at the input
/// length.
#[derive(Debug)]
pub struct StripPassThrough {
    points: Vec<Point>,
}

impl StripPassThrough {
    /// Creates a new strip operation.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Executes the operation, returning the cleaned sequence.
    #[must_use]
    pub fn execute(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        for _ in 0..self.points.len() {
            let Some(hit) = find_pass_through_vertex(&points) else {
                return points;
            };
            tracing::trace!(vertex = %hit.vertex, edge = hit.edge, "stripping pass-through vertex");
            points = remove_vertex(&points, hit.index);
        }
        if find_pass_through_vertex(&points).is_some() {
            tracing::warn!(points = points.len(), "pass-through stripping hit its iteration cap");
        }
        points
    }

    /// Removes the first pass-through vertex, if any, and returns the result.
    ///
    /// A single correction: one removal can expose another pass-through
    /// vertex, which this call leaves in place.
    #[must_use]
    pub fn strip_one(points: &[Point]) -> Vec<Point> {
        match find_pass_through_vertex(points) {
            Some(hit) => remove_vertex(points, hit.index),
            None => points.to_vec(),
        }
    }
}

/// Removes the vertex at `index`.
///
/// Removing the seam of a closed sequence (index 0 or the closing index)
/// re-closes it on the next point.
fn remove_vertex(points: &[Point], index: usize) -> Vec<Point> {
    let last = points.len().saturating_sub(1);
    let closed = points.len() > 1 && points[0] == points[last];
    if closed && (index == 0 || index == last) {
        let mut out = points[1..last].to_vec();
        if let Some(&first) = out.first() {
            out.push(first);
        }
        return out;
    }
    let mut out = points.to_vec();
    out.remove(index);
    out
}
