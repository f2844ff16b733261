//! Core interpolation trait.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolation over a fitted set of (x, y) points.
///
/// Implementors are generic over `T: Float` so the same primitive serves
/// `f32` and `f64` callers.
pub trait Interpolator<T: Float> {
    /// Interpolate the value at `x`.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside [`domain`](Self::domain)
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Evaluate the fitted curve at `x`, continuing the boundary segments
    /// beyond the domain.
    ///
    /// Inside the domain this agrees with [`interpolate`](Self::interpolate).
    fn extrapolate(&self, x: T) -> T;

    /// Return the valid interpolation domain `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Whether `x` lies inside the closed interpolation domain.
    #[inline]
    fn contains(&self, x: T) -> bool {
        let (x_min, x_max) = self.domain();
        x >= x_min && x <= x_max
    }
}

/// Out-of-bounds error for a query against `domain`.
pub(crate) fn out_of_bounds<T: Float>(x: T, domain: (T, T)) -> InterpolationError {
    InterpolationError::OutOfBounds {
        x: x.to_f64().unwrap_or(f64::NAN),
        min: domain.0.to_f64().unwrap_or(f64::NAN),
        max: domain.1.to_f64().unwrap_or(f64::NAN),
    }
}

/// Validate and sort (x, y) data for construction of an interpolator.
///
/// Pairs are sorted by x. Requires equal lengths, at least `need` points,
/// finite abscissae and strictly increasing x after sorting.
pub(crate) fn sorted_pairs<T: Float>(
    xs: &[T],
    ys: &[T],
    need: usize,
) -> Result<(Vec<T>, Vec<T>), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.len() < need {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need,
        });
    }

    if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
        return Err(InterpolationError::InvalidInput(format!(
            "x at index {} is not finite",
            i
        )));
    }

    let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(i) = (1..pairs.len()).find(|&i| pairs[i].0 <= pairs[i - 1].0) {
        return Err(InterpolationError::NonMonotonicData { index: i });
    }

    Ok(pairs.into_iter().unzip())
}

/// Segment index `i` with `xs[i] <= x < xs[i+1]`, clamped to `[0, n-2]`.
///
/// Clamping makes queries outside the domain fall on the boundary segments.
#[inline]
pub(crate) fn find_segment<T: Float>(xs: &[T], x: T) -> usize {
    let pos = xs.partition_point(|&xi| xi <= x);
    if pos == 0 {
        0
    } else if pos >= xs.len() {
        xs.len() - 2
    } else {
        pos - 1
    }
}
