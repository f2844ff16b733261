//! Error types for spectrum interpolation.
//!
//! This module provides structured error handling:
//! - `InterpolationError`: Errors from the underlying interpolation primitives
//! - `InterpClError`: Errors from resampling an angular power spectrum
//! - `Branch`: The interpolation branch an error refers to

use std::fmt;
use thiserror::Error;

/// Interpolation primitive errors.
///
/// Raised by the 1D interpolators in [`crate::math::interpolators`] and
/// passed through unchanged by the spectrum interpolator.
///
/// # Examples
/// ```
/// use interpcl::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissae are not strictly increasing after sorting (duplicate x).
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Interpolation branch of the spectrum interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Modes at or below the threshold, interpolated on linear axes.
    Linear,
    /// Modes above the threshold, interpolated on log-log axes.
    LogLog,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Linear => write!(f, "linear"),
            Branch::LogLog => write!(f, "log-log"),
        }
    }
}

/// Angular power spectrum interpolation errors.
///
/// # Examples
/// ```
/// use interpcl::types::InterpClError;
///
/// let err = InterpClError::ShapeMismatch { modes: 3, values: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Shape mismatch: 3 modes but 2 values"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpClError {
    /// Input modes and values differ in length.
    #[error("Shape mismatch: {modes} modes but {values} values")]
    ShapeMismatch {
        /// Number of input modes
        modes: usize,
        /// Number of input values
        values: usize,
    },

    /// A branch with requested output modes has fewer than two usable points.
    #[error("Insufficient points for {branch} branch: got {got}, need at least 2")]
    InsufficientPoints {
        /// Branch that lacks points
        branch: Branch,
        /// Number of usable points
        got: usize,
    },

    /// No strictly positive (mode, value) pairs remain for the log-log branch.
    #[error("Invalid domain for {branch} branch: no strictly positive mode/value pairs")]
    InvalidDomain {
        /// Branch whose domain is empty
        branch: Branch,
    },

    /// Output modes cannot be represented or allocated.
    #[error("Invalid output modes: {0}")]
    InvalidModes(String),

    /// Error raised by the interpolation primitive.
    #[error("Interpolation failed: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
