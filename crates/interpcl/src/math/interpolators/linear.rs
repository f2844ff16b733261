//! Linear interpolation implementation.

use super::traits::{find_segment, out_of_bounds, sorted_pairs};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores sorted (x, y) data points and performs linear interpolation
/// between adjacent points. Extrapolation continues the first and last
/// segments as straight lines.
///
/// # Construction
///
/// Data points are automatically sorted by x-coordinate during construction.
/// At least 2 data points with distinct x are required.
///
/// # Example
///
/// ```
/// use interpcl::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// assert!((interp.extrapolate(4.0) - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::NonMonotonicData)` - Repeated x-coordinate
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths or non-finite x
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let (xs, ys) = sorted_pairs(xs, ys, 2)?;
        Ok(Self { xs, ys })
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    fn eval(&self, x: T) -> T {
        let i = find_segment(&self.xs, x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x` using piecewise linear interpolation.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if !self.contains(x) {
            return Err(out_of_bounds(x, self.domain()));
        }
        Ok(self.eval(x))
    }

    #[inline]
    fn extrapolate(&self, x: T) -> T {
        self.eval(x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
