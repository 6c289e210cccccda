use thiserror::Error;

/// Error type for invalid operations.
///
/// Ordinary data conditions (missing cells, degenerate marginals) are not
/// errors: they produce NaN values that callers must tolerate. Only invalid
/// configuration is reported through this type.
#[derive(Error, Debug)]
pub enum HabverError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid temperature unit '{0}'. Provide temperature unit 'C' or 'K'")]
    InvalidUnit(String),
    #[error("Unknown verification mode '{0}'. Expected 'all', 'complex' or 'microbial'")]
    UnknownMode(String),
    #[error("Input field '{0}' was not provided")]
    MissingVariable(String),
    #[error("Field shapes do not match: {lhs:?} vs {rhs:?}")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },
    #[error("Field has no dimension named '{0}'")]
    UnknownDimension(String),
    #[error("Dimension '{0}' has no coordinate values")]
    MissingCoordinate(String),
    #[error("Value {0} is not a valid habitability category")]
    InvalidCategory(f64),
    #[error("Got {provided} dimension names for an array of dimensionality {ndim}")]
    DimensionCountMismatch { provided: usize, ndim: usize },
    #[error("Coordinate for dimension '{dim}' has length {coord_len}, expected {dim_len}")]
    CoordinateLengthMismatch {
        dim: String,
        coord_len: usize,
        dim_len: usize,
    },
}

/// Convenience type for `Result<T, HabverError>`.
pub type HabverResult<T> = Result<T, HabverError>;
