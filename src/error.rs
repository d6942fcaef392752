use thiserror::Error;

/// Top-level error type for shapefix.
#[derive(Debug, Error)]
pub enum ShapefixError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to point construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors related to validation and repair operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("empty input: at least one point is required")]
    EmptyInput,
}

/// Convenience type alias for results using [`ShapefixError`].
pub type Result<T> = std::result::Result<T, ShapefixError>;
