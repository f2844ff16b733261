//! Natural cubic spline interpolation.

use super::traits::{find_segment, out_of_bounds, sorted_pairs};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents a cubic polynomial: `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

/// Natural cubic spline interpolator with C² continuity.
///
/// Stores sorted (x, y) data points and computes natural cubic spline
/// coefficients with zero second derivative at boundaries. Extrapolation
/// evaluates the cubic of the first or last segment beyond the domain.
///
/// # Construction
///
/// Data points are automatically sorted by x-coordinate during construction.
/// At least 3 data points are required.
///
/// # Example
///
/// ```
/// use interpcl::math::interpolators::{Interpolator, CubicSplineInterpolator};
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// let y = interp.interpolate(2.0).unwrap();
/// assert!((y - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Polynomial coefficients for each segment
    coeffs: Vec<SplineCoeffs<T>>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Ok(CubicSplineInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 data points
    /// * `Err(InterpolationError::NonMonotonicData)` - Repeated x-coordinate
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths or non-finite x
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let (xs, ys) = sorted_pairs(xs, ys, 3)?;
        let coeffs = Self::compute_coefficients(&xs, &ys);
        Ok(Self { xs, coeffs })
    }

    /// Compute natural cubic spline coefficients.
    ///
    /// Solves the tridiagonal system for the interior second derivatives
    /// `M[1..n-1]` with the Thomas algorithm; `M[0] = M[n-1] = 0`.
    fn compute_coefficients(xs: &[T], ys: &[T]) -> Vec<SplineCoeffs<T>> {
        let n = xs.len();
        let two = T::one() + T::one();
        let six = two + two + two;

        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

        // Row k is the equation for interior knot i = k + 1:
        // h[k]*M[k] + 2*(h[k]+h[k+1])*M[k+1] + h[k+1]*M[k+2] = rhs[k]
        let interior = n - 2;
        let mut c_prime: Vec<T> = Vec::with_capacity(interior);
        let mut d_prime: Vec<T> = Vec::with_capacity(interior);

        for k in 0..interior {
            let diag = two * (h[k] + h[k + 1]);
            let sup = if k + 1 < interior { h[k + 1] } else { T::zero() };
            let rhs = six * ((ys[k + 2] - ys[k + 1]) / h[k + 1] - (ys[k + 1] - ys[k]) / h[k]);

            if k == 0 {
                c_prime.push(sup / diag);
                d_prime.push(rhs / diag);
            } else {
                let denom = diag - h[k] * c_prime[k - 1];
                c_prime.push(sup / denom);
                d_prime.push((rhs - h[k] * d_prime[k - 1]) / denom);
            }
        }

        let mut m: Vec<T> = vec![T::zero(); n];
        for k in (0..interior).rev() {
            m[k + 1] = d_prime[k] - c_prime[k] * m[k + 2];
        }

        (0..n - 1)
            .map(|i| SplineCoeffs {
                a: ys[i],
                b: (ys[i + 1] - ys[i]) / h[i] - h[i] * (two * m[i] + m[i + 1]) / six,
                c: m[i] / two,
                d: (m[i + 1] - m[i]) / (six * h[i]),
            })
            .collect()
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
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
        let SplineCoeffs { a, b, c, d } = self.coeffs[i];
        let dx = x - self.xs[i];
        a + dx * (b + dx * (c + dx * d))
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Interpolate value at point `x` using the cubic spline.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³
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
