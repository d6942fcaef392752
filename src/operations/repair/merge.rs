use crate::geometry::Polygon;
use crate::math::predicates::vertical_overlap;
use crate::math::Point;

/// Vertical boundary shared by an outer and an inner contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonLine {
    /// Index of the outer contour's edge on the line.
    pub outer_edge: usize,
    /// Index of the inner contour's edge on the line.
    pub inner_edge: usize,
    /// Lower end of the overlap.
    pub start: Point,
    /// Upper end of the overlap.
    pub end: Point,
}

/// Merges two contours that share a vertical boundary segment into one.
///
/// Only vertical shared boundaries are recognised. Horizontal and diagonal
/// ones are left alone.
#[derive(Debug)]
pub struct MergeOnCommonLine<'a> {
    outer: &'a Polygon,
    inner: &'a Polygon,
}

impl<'a> MergeOnCommonLine<'a> {
    /// Creates a new merge operation.
    #[must_use]
    pub fn new(outer: &'a Polygon, inner: &'a Polygon) -> Self {
        Self { outer, inner }
    }

    /// Finds the first outer vertical edge, in sequence order, whose y-range
    /// overlaps a vertical inner edge on the same x.
    ///
    /// Narrower than [`vertical_overlap`], which also accepts edges meeting at
    /// a single point: the overlap here must have positive length. A
    /// single-point contact shares no boundary segment, and splicing there
    /// would leave a duplicate vertex.
    #[must_use]
    pub fn find_common_line(&self) -> Option<CommonLine> {
        self.outer.edges().find_map(|oe| {
            self.inner.edges().find_map(|ie| {
                let (low, high) = vertical_overlap(oe.start, oe.end, ie.start, ie.end)?;
                if high <= low {
                    return None;
                }
                let x = oe.start.x();
                Some(CommonLine {
                    outer_edge: oe.index,
                    inner_edge: ie.index,
                    start: Point::new(x, low),
                    end: Point::new(x, high),
                })
            })
        })
    }

    /// Splices the inner contour into the outer one along their common line.
    ///
    /// The result follows the outer contour up to the start of its shared
    /// edge, walks the inner contour the long way round, then resumes the
    /// outer contour at the end of its shared edge. The inner contour is
    /// walked forward when the two shared edges run in opposite directions and
    /// backward otherwise, so both contours keep their winding.
    ///
    /// Returns `None` if the contours share no vertical line.
    #[must_use]
    pub fn try_execute(&self) -> Option<Polygon> {
        let line = self.find_common_line()?;
        let outer = self.outer.points();
        let ring = open_ring(self.inner.points());
        let m = ring.len();

        let (o0, o1) = (outer[line.outer_edge], outer[line.outer_edge + 1]);
        let inner = self.inner.points();
        let (i0, i1) = (inner[line.inner_edge], inner[line.inner_edge + 1]);
        let outer_rising = o1.y() > o0.y();
        let inner_rising = i1.y() > i0.y();

        let a = line.inner_edge % m;
        let b = (line.inner_edge + 1) % m;
        let walk: Vec<Point> = if outer_rising == inner_rising {
            (0..m).map(|k| ring[(a + m - k) % m]).collect()
        } else {
            (0..m).map(|k| ring[(b + k) % m]).collect()
        };

        let mut merged = Vec::with_capacity(outer.len() + m);
        for &p in outer[..=line.outer_edge]
            .iter()
            .chain(&walk)
            .chain(&outer[line.outer_edge + 1..])
        {
            if merged.last() != Some(&p) {
                merged.push(p);
            }
        }

        tracing::debug!(
            outer_edge = line.outer_edge,
            inner_edge = line.inner_edge,
            start = %line.start,
            end = %line.end,
            points = merged.len(),
            "merged contours on common line"
        );
        Some(Polygon::new(merged).closed())
    }

    /// Executes the merge, returning the outer contour unchanged when there is
    /// no vertical common line.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        self.try_execute().unwrap_or_else(|| self.outer.clone())
    }
}

/// Drops the closing duplicate of a closed sequence.
fn open_ring(points: &[Point]) -> &[Point] {
    match points {
        [first, .., last] if first == last => &points[..points.len() - 1],
        _ => points,
    }
}
