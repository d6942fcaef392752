pub mod polygon;

pub use polygon::{Edge, Polygon};
