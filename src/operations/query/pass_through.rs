use crate::math::predicates::point_strictly_on_segment;
use crate::math::Point;

/// A vertex lying strictly inside an edge it is not an endpoint of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassThrough {
    /// Index of the start point of the edge.
    pub edge: usize,
    /// Index of the offending vertex.
    pub index: usize,
    pub vertex: Point,
}

/// Finds the first pass-through vertex.
///
/// Edges are scanned in sequence order and, for each edge, vertices in
/// sequence order. Vertices equal to either endpoint of the edge are skipped.
/// Because equal points produce equal answers, the reported index is the first
/// occurrence of the offending vertex.
#[must_use]
pub fn find_pass_through_vertex(points: &[Point]) -> Option<PassThrough> {
    for (edge, w) in points.windows(2).enumerate() {
        let (p1, p2) = (w[0], w[1]);
        for (index, &vertex) in points.iter().enumerate() {
            if vertex == p1 || vertex == p2 {
                continue;
            }
            if point_strictly_on_segment(p1, p2, vertex) {
                return Some(PassThrough {
                    edge,
                    index,
                    vertex,
                });
            }
        }
    }
    None
}

/// Returns `true` if any vertex lies strictly inside a non-incident edge.
#[must_use]
pub fn has_pass_through_vertex(points: &[Point]) -> bool {
    find_pass_through_vertex(points).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    #[test]
    fn square_has_none() {
        let square = Polygon::from_coords(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]);
        assert!(!has_pass_through_vertex(square.points()));
    }

    #[test]
    fn spike_vertex_is_found() {
        let spike = Polygon::from_coords(&[[0, 0], [10, 0], [5, 0], [5, 5], [0, 5], [0, 0]]);
        assert_eq!(
            find_pass_through_vertex(spike.points()),
            Some(PassThrough {
                edge: 0,
                index: 2,
                vertex: Point::new(5.0, 0.0),
            })
        );
    }

    #[test]
    fn earliest_edge_wins() {
        // (3, 0) sits inside edge 0; (10, 4) sits inside edge 2 but is found later.
        let shape = Polygon::from_coords(&[
            [0, 0],
            [6, 0],
            [10, 0],
            [10, 8],
            [10, 4],
            [3, 0],
            [0, 0],
        ]);
        let hit = find_pass_through_vertex(shape.points());
        assert_eq!(hit.map(|h| (h.edge, h.index)), Some((0, 5)));
    }

    #[test]
    fn short_inputs() {
        assert!(!has_pass_through_vertex(&[]));
        assert!(!has_pass_through_vertex(&[Point::new(1.0, 1.0)]));
    }
}
