use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

use super::Vector2;
use crate::error::{GeometryError, Result};

/// Immutable 2D point with exact (bitwise) equality.
///
/// Vertex identity never uses a tolerance: two points are the same vertex only
/// when both coordinates are identical. `-0.0` is stored as `0.0` so equality
/// agrees with `==` on the coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: normalize_zero(x),
            y: normalize_zero(y),
        }
    }

    /// Creates a point, rejecting NaN and infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if either coordinate is not finite.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeometryError::NonFinite { x, y }.into());
        }
        Ok(Self::new(x, y))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    fn key(self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Sub for Point {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn exact_equality() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.000_000_000_1));
    }

    #[test]
    fn negative_zero_is_zero() {
        let a = Point::new(-0.0, 0.0);
        let b = Point::new(0.0, -0.0);
        assert_eq!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(!seen.insert(b));
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Point::try_new(f64::NAN, 0.0).is_err());
        assert!(Point::try_new(0.0, f64::INFINITY).is_err());
        assert_eq!(Point::try_new(3.0, 4.0).unwrap(), Point::new(3.0, 4.0));
    }

    #[test]
    fn from_integer_pair() {
        let p = Point::from([10, -3]);
        assert_eq!(p, Point::new(10.0, -3.0));
    }

    #[test]
    fn subtraction_yields_vector() {
        let v = Point::new(4.0, 6.0) - Point::new(1.0, 2.0);
        approx::assert_relative_eq!(v.x, 3.0);
        approx::assert_relative_eq!(v.y, 4.0);
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = Point::new(1.5, -2.5);
        let q: nalgebra::Point2<f64> = p.into();
        assert_eq!(Point::from(q), p);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "(1, 2.5)");
    }
}
