pub mod point;
pub mod predicates;

pub use point::Point;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Absolute threshold on the cross product below which a point counts as
/// collinear with a segment.
///
/// Not scale-normalised: very large or very small coordinates shift what
/// "collinear" means.
pub const COLLINEAR_TOLERANCE: f64 = 1e-7;
