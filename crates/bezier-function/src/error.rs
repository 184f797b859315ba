//! Error types for curve construction, evaluation and inversion.

/// Broad classification of a [`CurveError`].
///
/// Every failure is one of two kinds: a rejected argument at construction
/// (or call) time, or an index that does not fit the curve or buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value violates a dimensional or threshold precondition.
    InvalidArgument,
    /// An output buffer or axis index does not fit the curve.
    IndexOutOfBounds,
}

/// Error type for curve operations.
///
/// All errors are detected synchronously at the point where the violated
/// precondition is first observable; nothing is retried or recovered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// The curve was given zero coordinate components per control point.
    #[error("Curve dimensions must be at least 1")]
    ZeroDimensions,

    /// The flattened data does not divide evenly into control points.
    #[error("The number of values ({len}) must be a multiple of {dimensions}")]
    UnevenData {
        /// Length of the supplied data.
        len: usize,
        /// Requested dimensionality.
        dimensions: usize,
    },

    /// Fewer than two control points were supplied.
    #[error("Number of control points must be at least 2, got {points}")]
    TooFewControlPoints {
        /// Number of complete control points supplied.
        points: usize,
    },

    /// The inverse search threshold is zero, negative or NaN.
    #[error("Threshold must be greater than 0, got {threshold}")]
    InvalidThreshold {
        /// The rejected threshold.
        threshold: f64,
    },

    /// The curve has the wrong dimensionality for the requested operation.
    #[error("Curve must be {expected}D, got {actual}D")]
    DimensionMismatch {
        /// Dimensionality the operation requires.
        expected: usize,
        /// Dimensionality of the curve.
        actual: usize,
    },

    /// The output buffer cannot hold a point at the given offset.
    #[error("Output buffer of length {len} cannot hold {required} values at offset {offset}")]
    OutputBufferTooSmall {
        /// Length of the output buffer.
        len: usize,
        /// Requested write offset.
        offset: usize,
        /// Number of values a point needs.
        required: usize,
    },

    /// The target axis is not a component of the curve.
    #[error("Target axis {axis} is out of bounds for a {dimensions}D curve")]
    AxisOutOfBounds {
        /// The requested axis.
        axis: usize,
        /// Dimensionality of the curve.
        dimensions: usize,
    },
}

impl CurveError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroDimensions
            | Self::UnevenData { .. }
            | Self::TooFewControlPoints { .. }
            | Self::InvalidThreshold { .. }
            | Self::DimensionMismatch { .. } => ErrorKind::InvalidArgument,
            Self::OutputBufferTooSmall { .. } | Self::AxisOutOfBounds { .. } => {
                ErrorKind::IndexOutOfBounds
            }
        }
    }

    /// Returns true for [`ErrorKind::InvalidArgument`] errors.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns true for [`ErrorKind::IndexOutOfBounds`] errors.
    pub fn is_out_of_bounds(&self) -> bool {
        self.kind() == ErrorKind::IndexOutOfBounds
    }
}

/// A specialized `Result` type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;
