//! Interpolation methods for numerical computation.
//!
//! This module provides the 1D interpolation primitives used to resample
//! angular power spectra. They are generic over `T: num_traits::Float`.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Interpolate inside the domain
//! - `extrapolate(x: T) -> T`: Evaluate the fitted curve anywhere
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! [`InterpKind`] selects an interpolator at runtime.
//!
//! ## Example
//!
//! ```
//! use interpcl::math::interpolators::{InterpKind, Interpolator};
//!
//! let interp = InterpKind::Linear.build(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
//! assert_eq!(interp.domain(), (0.0, 2.0));
//! assert!((interp.interpolate(1.5).unwrap() - 2.5).abs() < 1e-10);
//! ```

mod cubic_spline;
mod linear;
mod traits;

pub use cubic_spline::CubicSplineInterpolator;
pub use linear::LinearInterpolator;
pub use traits::Interpolator;

use crate::types::InterpolationError;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Interpolation scheme used to fit a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpKind {
    /// Piecewise linear.
    #[default]
    Linear,
    /// Natural cubic spline (needs at least 3 points).
    CubicSpline,
}

impl InterpKind {
    /// Fit an interpolator of this kind to `(xs, ys)`.
    pub fn build<T: Float + 'static>(
        &self,
        xs: &[T],
        ys: &[T],
    ) -> Result<Box<dyn Interpolator<T>>, InterpolationError> {
        let interp: Box<dyn Interpolator<T>> = match self {
            InterpKind::Linear => Box::new(LinearInterpolator::new(xs, ys)?),
            InterpKind::CubicSpline => Box::new(CubicSplineInterpolator::new(xs, ys)?),
        };
        Ok(interp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_linear() {
        assert_eq!(InterpKind::default(), InterpKind::Linear);
    }

    #[test]
    fn test_build_dispatches_by_kind() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 4.0];

        let linear = InterpKind::Linear.build(&xs, &ys).unwrap();
        assert!((linear.interpolate(0.5).unwrap() - 0.5).abs() < 1e-12);

        let spline = InterpKind::CubicSpline.build(&xs, &ys).unwrap();
        assert!((spline.interpolate(0.5).unwrap() - 0.3125).abs() < 1e-12);
    }

    #[test]
    fn test_build_propagates_primitive_errors() {
        let result = InterpKind::CubicSpline.build(&[0.0, 1.0], &[0.0, 1.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::InsufficientData { got: 2, need: 3 })
        ));
    }
}
