pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, ShapefixError};
pub use geometry::Polygon;
pub use math::Point;
pub use operations::query::{Defect, IsValid};
pub use operations::repair::{Repair, RepairOptions};
