use crate::error::Result;
use crate::math::Point;

/// An ordered sequence of points describing a path.
///
/// Consecutive points define the edges. The path is closed when its first and
/// last points are equal; a polygon built from raw input carries no other
/// guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

/// A segment between two consecutive points, tagged with the index of its
/// start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub index: usize,
    pub start: Point,
    pub end: Point,
}

impl Polygon {
    /// Creates a polygon from points, kept in the given order.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a polygon from integer coordinate pairs.
    #[must_use]
    pub fn from_coords(coords: &[[i32; 2]]) -> Self {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Creates a polygon from floating-point coordinate pairs.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for the first pair containing NaN or
    /// an infinite value.
    pub fn try_from_coords(coords: &[[f64; 2]]) -> Result<Self> {
        let points = coords
            .iter()
            .map(|&[x, y]| Point::try_new(x, y))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(points))
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns `true` if the polygon is non-empty and its first point equals
    /// its last.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Iterates over the edges between consecutive points.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.points.windows(2).enumerate().map(|(index, w)| Edge {
            index,
            start: w[0],
            end: w[1],
        })
    }

    /// Returns a copy closed by re-appending the first point if needed.
    #[must_use]
    pub fn closed(&self) -> Self {
        let mut points = self.points.clone();
        if let Some(first) = self.first() {
            if !self.is_closed() {
                points.push(first);
            }
        }
        Self::new(points)
    }

    /// Concatenates polygons into one flat point sequence.
    #[must_use]
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Polygon>) -> Self {
        Self::new(
            parts
                .into_iter()
                .flat_map(|p| p.points.iter().copied())
                .collect(),
        )
    }

    /// Number of distinct points.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        let mut seen = std::collections::HashSet::with_capacity(self.points.len());
        self.points.iter().filter(|p| seen.insert(**p)).count()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
