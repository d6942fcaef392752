use super::{Point, COLLINEAR_TOLERANCE};

/// Twice the signed area of triangle `(a, b, p)`.
///
/// Positive when `p` lies left of the directed line `a → b`, negative when it
/// lies right, zero when the three points are collinear.
#[must_use]
pub fn direction(a: Point, b: Point, p: Point) -> f64 {
    (b - a).perp(&(p - a))
}

/// Returns `true` if segments `p1–p2` and `p3–p4` cross at a single interior
/// point.
///
/// Each segment's endpoints must lie strictly on opposite sides of the other
/// segment. Touching at an endpoint and collinear overlap are not proper
/// intersections.
#[must_use]
pub fn segments_properly_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = direction(p3, p4, p1);
    let d2 = direction(p3, p4, p2);
    let d3 = direction(p1, p2, p3);
    let d4 = direction(p1, p2, p4);
    straddles(d1, d2) && straddles(d3, d4)
}

fn straddles(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Returns `true` if `point` lies on segment `p1–p2`, endpoints included.
///
/// Collinearity uses the absolute [`COLLINEAR_TOLERANCE`] on the cross
/// product; the projection of `point - p1` onto `p2 - p1` must fall within
/// `[0, |p2 - p1|²]`.
#[must_use]
pub fn point_on_segment(p1: Point, p2: Point, point: Point) -> bool {
    let seg = p2 - p1;
    let rel = point - p1;
    if seg.perp(&rel).abs() > COLLINEAR_TOLERANCE {
        return false;
    }
    let dot = rel.dot(&seg);
    dot >= 0.0 && dot <= seg.norm_squared()
}

/// Like [`point_on_segment`], but a point equal to either endpoint does not
/// count.
#[must_use]
pub fn point_strictly_on_segment(p1: Point, p2: Point, point: Point) -> bool {
    point != p1 && point != p2 && point_on_segment(p1, p2, point)
}

/// Returns `true` if `a → b` is a non-degenerate vertical segment.
#[must_use]
pub fn is_vertical(a: Point, b: Point) -> bool {
    a.x().to_bits() == b.x().to_bits() && a != b
}

/// Overlapping y-extent `(low, high)` of two vertical segments on the same x.
///
/// Returns `None` if either segment is not vertical, the segments lie on
/// different x, or their y-ranges are disjoint. Ranges that only touch give
/// `low == high`.
#[must_use]
pub fn vertical_overlap(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<(f64, f64)> {
    if !is_vertical(a0, a1) || !is_vertical(b0, b1) || a0.x().to_bits() != b0.x().to_bits() {
        return None;
    }
    let low = a0.y().min(a1.y()).max(b0.y().min(b1.y()));
    let high = a0.y().max(a1.y()).min(b0.y().max(b1.y()));
    (low <= high).then_some((low, high))
}
