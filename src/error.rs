use thiserror::Error;

/// Top-level error type for the Linea path geometry core.
#[derive(Debug, Error)]
pub enum LineaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to segment and path geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("segment {index} does not start where the previous one ends (gap {gap})")]
    Disconnected { index: usize, gap: f64 },
}

/// Errors raised while reading path data.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed path data: {0}")]
    Syntax(#[from] svgtypes::Error),

    #[error("path data starts a disconnected subpath at ({x}, {y})")]
    Disconnected { x: f64, y: f64 },
}

/// Errors related to path operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("kink at the start of segment {segment} cannot be smoothed")]
    UnfixableKink { segment: usize },
}

/// Errors related to geometry export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path has no line content to export")]
    EmptyPath,
}

/// Convenience type alias for results using [`LineaError`].
pub type Result<T> = std::result::Result<T, LineaError>;

/// Fails with [`GeometryError::ParameterOutOfRange`] unless `value` lies in `[min, max]`.
pub(crate) fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

/// Fails with [`GeometryError::InvalidParameter`] unless `value` is finite and positive.
pub(crate) fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::InvalidParameter(format!(
            "{parameter} must be positive and finite, got {value}"
        ))
        .into());
    }
    Ok(())
}
