use std::collections::HashMap;

use crate::geometry::Polygon;
use crate::math::Point;

/// Points that occur more than once in a sequence, with every index at which
/// they occur.
///
/// A repeated point is a marker: it opens a contour where it first appears and
/// closes it where it appears again.
#[derive(Debug, Clone, Default)]
pub struct MarkerTable {
    occurrences: HashMap<Point, Vec<usize>>,
}

impl MarkerTable {
    /// Builds the table for `points`.
    #[must_use]
    pub fn new(points: &[Point]) -> Self {
        let mut occurrences: HashMap<Point, Vec<usize>> = HashMap::new();
        for (i, &p) in points.iter().enumerate() {
            occurrences.entry(p).or_default().push(i);
        }
        occurrences.retain(|_, indices| indices.len() > 1);
        Self { occurrences }
    }

    #[must_use]
    pub fn is_marker(&self, point: Point) -> bool {
        self.occurrences.contains_key(&point)
    }

    /// Ascending indices at which `point` occurs; empty for non-markers.
    #[must_use]
    pub fn occurrences(&self, point: Point) -> &[usize] {
        self.occurrences.get(&point).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    fn next_unvisited(&self, point: Point, after: usize, visited: &[bool]) -> Option<usize> {
        self.occurrences(point)
            .iter()
            .copied()
            .find(|&i| i > after && !visited[i])
    }
}

/// An open contour on the scan stack.
#[derive(Debug, Clone)]
struct Frame {
    opener: Point,
    points: Vec<Point>,
    cursor: usize,
}

/// Outcome of a single [`ContourScan::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A marker at `index` opened a contour; `depth` counts open contours
    /// including the new one.
    Opened { index: usize, depth: usize },
    /// The point at `index` was appended to the innermost open contour.
    Appended { index: usize },
    /// The point at `index` lies outside every contour and was dropped.
    Skipped { index: usize },
    /// The innermost contour closed. `synthetic` is set when the input ran out
    /// and the opener was re-appended to close it.
    Closed { contour: Polygon, synthetic: bool },
    /// Every point has been consumed and no contour is open.
    Finished,
}

/// Step-wise contour extraction over a flat point sequence.
///
/// Keeps a stack of open contours. The innermost contour receives every
/// unvisited point in order. Reaching its opener again closes it. Reaching a
/// different marker keeps that point as the shared boundary vertex and opens
/// a nested contour at the marker's next unvisited occurrence, which is
/// scanned to completion before the enclosing contour resumes. Each index is
/// visited at most once, so no point lands in two contours.
#[derive(Debug)]
pub struct ContourScan<'a> {
    points: &'a [Point],
    markers: MarkerTable,
    visited: Vec<bool>,
    stack: Vec<Frame>,
    next_top_level: usize,
}

impl<'a> ContourScan<'a> {
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            markers: MarkerTable::new(points),
            visited: vec![false; points.len()],
            stack: Vec::new(),
            next_top_level: 0,
        }
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    /// Number of currently open contours.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Advances the scan by one point, one opening, or one closing.
    pub fn step(&mut self) -> ScanEvent {
        let Some(frame) = self.stack.last_mut() else {
            return self.step_idle();
        };

        while frame.cursor < self.points.len() && self.visited[frame.cursor] {
            frame.cursor += 1;
        }
        if frame.cursor >= self.points.len() {
            return self.close(true);
        }

        let index = frame.cursor;
        frame.cursor += 1;
        self.visited[index] = true;
        let point = self.points[index];
        frame.points.push(point);

        if point == frame.opener {
            return self.close(false);
        }
        if let Some(nested) = self.markers.next_unvisited(point, index, &self.visited) {
            self.open(nested);
            return ScanEvent::Opened {
                index: nested,
                depth: self.stack.len(),
            };
        }
        ScanEvent::Appended { index }
    }

    fn step_idle(&mut self) -> ScanEvent {
        while self.next_top_level < self.points.len() {
            let index = self.next_top_level;
            self.next_top_level += 1;
            if self.visited[index] {
                continue;
            }
            if self.markers.is_marker(self.points[index]) {
                self.open(index);
                return ScanEvent::Opened {
                    index,
                    depth: self.stack.len(),
                };
            }
            self.visited[index] = true;
            return ScanEvent::Skipped { index };
        }
        ScanEvent::Finished
    }

    fn open(&mut self, index: usize) {
        self.visited[index] = true;
        let opener = self.points[index];
        self.stack.push(Frame {
            opener,
            points: vec![opener],
            cursor: index + 1,
        });
    }

    fn close(&mut self, synthetic: bool) -> ScanEvent {
        let Some(mut frame) = self.stack.pop() else {
            return ScanEvent::Finished;
        };
        if synthetic {
            frame.points.push(frame.opener);
        }
        ScanEvent::Closed {
            contour: Polygon::new(frame.points),
            synthetic,
        }
    }
}

/// Splits a flat point sequence into closed contours.
///
/// Contours are returned in the order they close, so nested contours come
/// before the contours enclosing them. A sequence without repeated points
/// yields no contours.
#[derive(Debug)]
pub struct ExtractContours<'a> {
    points: &'a [Point],
}

impl<'a> ExtractContours<'a> {
    /// Creates a new extraction.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }

    /// Executes the extraction.
    #[must_use]
    pub fn execute(&self) -> Vec<Polygon> {
        let mut scan = ContourScan::new(self.points);
        let mut contours = Vec::new();
        loop {
            match scan.step() {
                ScanEvent::Closed { contour, synthetic } => {
                    tracing::trace!(points = contour.len(), synthetic, "contour closed");
                    contours.push(contour);
                }
                ScanEvent::Finished => break,
                ScanEvent::Opened { .. } | ScanEvent::Appended { .. } | ScanEvent::Skipped { .. } => {}
            }
        }
        contours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[[i32; 2]]) -> Vec<Point> {
        Polygon::from_coords(coords).into_points()
    }

    fn poly(coords: &[[i32; 2]]) -> Polygon {
        Polygon::from_coords(coords)
    }

    #[test]
    fn marker_table_records_repeats_only() {
        let points = pts(&[[0, 0], [10, 0], [0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]);
        let table = MarkerTable::new(&points);
        assert_eq!(table.len(), 2);
        assert_eq!(table.occurrences(Point::new(0.0, 0.0)), &[0, 2, 6]);
        assert_eq!(table.occurrences(Point::new(10.0, 0.0)), &[1, 3]);
        assert!(!table.is_marker(Point::new(10.0, 10.0)));
        assert!(table.occurrences(Point::new(10.0, 10.0)).is_empty());
    }

    #[test]
    fn simple_polygon_is_one_contour() {
        let square = pts(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]);
        let contours = ExtractContours::new(&square).execute();
        assert_eq!(contours, vec![Polygon::new(square)]);
    }

    #[test]
    fn no_markers_no_contours() {
        let path = pts(&[[0, 0], [10, 0], [10, 10]]);
        assert!(ExtractContours::new(&path).execute().is_empty());
    }

    #[test]
    fn concatenated_squares_split_in_order() {
        let points = pts(&[
            [0, 0],
            [10, 0],
            [10, 10],
            [0, 10],
            [0, 0],
            [3, 3],
            [7, 3],
            [7, 7],
            [3, 7],
            [3, 3],
        ]);
        let contours = ExtractContours::new(&points).execute();
        assert_eq!(
            contours,
            vec![
                poly(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]),
                poly(&[[3, 3], [7, 3], [7, 7], [3, 7], [3, 3]]),
            ]
        );
    }

    #[test]
    fn leading_points_outside_contours_are_dropped() {
        let points = pts(&[[5, 5], [0, 0], [10, 0], [10, 10], [0, 0]]);
        let contours = ExtractContours::new(&points).execute();
        assert_eq!(contours, vec![poly(&[[0, 0], [10, 0], [10, 10], [0, 0]])]);
    }

    #[test]
    fn shared_vertex_opens_nested_contour() {
        // Two rectangles glued along x = 10; (10, 0) and (10, 10) are shared.
        let points = pts(&[
            [0, 0],
            [10, 0],
            [10, 10],
            [0, 10],
            [0, 0],
            [10, 0],
            [20, 0],
            [20, 10],
            [10, 10],
            [10, 0],
        ]);
        let contours = ExtractContours::new(&points).execute();
        assert_eq!(
            contours,
            vec![
                poly(&[[10, 0], [20, 0], [20, 10], [10, 10], [10, 0]]),
                poly(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]),
            ]
        );
    }

    #[test]
    fn repeated_leading_points_yield_square_and_sliver() {
        let points = pts(&[[0, 0], [10, 0], [0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]);
        let contours = ExtractContours::new(&points).execute();
        assert_eq!(
            contours,
            vec![
                poly(&[[10, 0], [10, 10], [0, 10], [0, 0], [10, 0]]),
                poly(&[[0, 0], [10, 0], [0, 0]]),
            ]
        );
    }

    #[test]
    fn points_between_contours_are_dropped() {
        let points = pts(&[[0, 0], [4, 0], [4, 4], [0, 0], [8, 8], [9, 9], [8, 8], [12, 8]]);
        let contours = ExtractContours::new(&points).execute();
        assert_eq!(
            contours,
            vec![
                poly(&[[0, 0], [4, 0], [4, 4], [0, 0]]),
                poly(&[[8, 8], [9, 9], [8, 8]]),
            ]
        );
    }

    #[test]
    fn unclosed_tail_is_closed_synthetically() {
        // The third (0, 0) opens a contour that never sees its opener again.
        let points = pts(&[[0, 0], [4, 0], [0, 0], [6, 6], [0, 0], [7, 7]]);
        let mut scan = ContourScan::new(&points);
        let mut closings = Vec::new();
        loop {
            match scan.step() {
                ScanEvent::Closed { contour, synthetic } => closings.push((contour, synthetic)),
                ScanEvent::Finished => break,
                _ => {}
            }
        }
        assert_eq!(
            closings,
            vec![
                (poly(&[[0, 0], [4, 0], [0, 0]]), false),
                (poly(&[[0, 0], [7, 7], [0, 0]]), true),
            ]
        );
    }

    #[test]
    fn single_nesting_level_step_by_step() {
        // Outer contour opened by (0, 0); (5, 0) is shared with a nested
        // triangle that starts at its second occurrence.
        let points = pts(&[[0, 0], [5, 0], [5, 5], [0, 0], [5, 0], [8, 0], [8, 3], [5, 0]]);
        let mut scan = ContourScan::new(&points);

        assert_eq!(scan.step(), ScanEvent::Opened { index: 0, depth: 1 });
        assert_eq!(scan.step(), ScanEvent::Opened { index: 4, depth: 2 });
        assert_eq!(scan.depth(), 2);
        assert_eq!(scan.step(), ScanEvent::Appended { index: 5 });
        assert_eq!(scan.step(), ScanEvent::Appended { index: 6 });
        assert_eq!(
            scan.step(),
            ScanEvent::Closed {
                contour: poly(&[[5, 0], [8, 0], [8, 3], [5, 0]]),
                synthetic: false,
            }
        );
        assert_eq!(scan.depth(), 1);
        assert_eq!(scan.step(), ScanEvent::Appended { index: 2 });
        assert_eq!(
            scan.step(),
            ScanEvent::Closed {
                contour: poly(&[[0, 0], [5, 0], [5, 5], [0, 0]]),
                synthetic: false,
            }
        );
        assert_eq!(scan.step(), ScanEvent::Finished);
        assert_eq!(scan.depth(), 0);
    }

    #[test]
    fn skipped_points_are_reported() {
        let points = pts(&[[9, 9], [0, 0], [1, 0], [0, 0]]);
        let mut scan = ContourScan::new(&points);
        assert_eq!(scan.step(), ScanEvent::Skipped { index: 0 });
        assert_eq!(scan.step(), ScanEvent::Opened { index: 1, depth: 1 });
        assert_eq!(scan.markers().len(), 1);
    }

    #[test]
    fn empty_input() {
        let mut scan = ContourScan::new(&[]);
        assert_eq!(scan.step(), ScanEvent::Finished);
        assert!(ExtractContours::new(&[]).execute().is_empty());
    }
}
