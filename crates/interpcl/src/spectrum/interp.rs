//! Resampling of angular power spectra.

use super::config::{Extrapolation, InterpClConfig};
use super::modes::OutputModes;
use crate::math::interpolators::Interpolator;
use crate::types::{Branch, InterpClError, InterpolationError};
use tracing::{field, trace, Span};

/// Value at a query point: either from the fitted curve (on the branch's
/// axes) or a fill value to be written as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Sample {
    Fitted(f64),
    Filled(f64),
}

/// Interpolate an angular power spectrum `C(l)` to the given output modes.
///
/// Output modes at or below `config.lin_log_threshold` are interpolated on
/// linear axes from all input pairs. Output modes above it are interpolated
/// on log-log axes from the input pairs with strictly positive mode and value.
/// Outside the range of the fitted input modes the
/// [`Extrapolation`] policy applies. Finally mode 0 is set to zero unless
/// `compute_monopole`, and mode 1 unless `compute_dipole`.
///
/// # Arguments
///
/// * `output_modes` - Output modes; see [`OutputModes`]
/// * `modes` - Input modes `l`, in any order
/// * `values` - Input values `C(l)`, one per input mode
/// * `config` - Interpolation configuration
///
/// # Errors
///
/// * `ShapeMismatch` - `modes` and `values` differ in length
/// * `InsufficientPoints` - A branch with output modes has fewer than 2 usable points
/// * `InvalidDomain` - The log-log branch has no positive pairs, or a
///   non-positive output mode (threshold below zero)
/// * `Interpolation` - Raised by the interpolation primitive
/// * `InvalidModes` - `lmax` too large to represent or allocate
/// * `Config` - Invalid configuration
///
/// # Examples
///
/// ```
/// use interpcl::spectrum::{interpcl, InterpClConfig, OutputModes};
///
/// let l: Vec<f64> = (0..20).map(|i| 2.0 * 50f64.powf(i as f64 / 19.0)).collect();
/// let cl: Vec<f64> = l.iter().map(|l| (-(l.ln() - 10f64.ln()).powi(2) / 5.0).exp()).collect();
///
/// let out = interpcl(OutputModes::Auto, &l, &cl, &InterpClConfig::default()).unwrap();
/// assert_eq!(out.len(), 101);
/// assert_eq!(out[0], 0.0);
/// assert!(out[1] != 0.0);
/// ```
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(points = modes.len(), outputs = field::Empty)
)]
pub fn interpcl(
    output_modes: impl Into<OutputModes>,
    modes: &[f64],
    values: &[f64],
    config: &InterpClConfig,
) -> Result<Vec<f64>, InterpClError> {
    if modes.len() != values.len() {
        return Err(InterpClError::ShapeMismatch {
            modes: modes.len(),
            values: values.len(),
        });
    }
    config.validate()?;

    let lout = output_modes.into().resolve(modes)?;
    Span::current().record("outputs", lout.len());
    let threshold = config.lin_log_threshold;

    let (low, high): (Vec<usize>, Vec<usize>) =
        (0..lout.len()).partition(|&i| lout[i] <= threshold);

    let mut clout = vec![0.0; lout.len()];

    if !low.is_empty() {
        trace!(
            branch = %Branch::Linear,
            points = modes.len(),
            outputs = low.len(),
            "fitting branch"
        );

        if modes.len() < 2 {
            return Err(InterpClError::InsufficientPoints {
                branch: Branch::Linear,
                got: modes.len(),
            });
        }

        let interp = config.options.kind.build(modes, values)?;
        for &i in &low {
            clout[i] = match sample(&*interp, lout[i], config)? {
                Sample::Fitted(y) | Sample::Filled(y) => y,
            };
        }
    }

    if !high.is_empty() {
        let (log_l, log_cl): (Vec<f64>, Vec<f64>) = modes
            .iter()
            .zip(values)
            .filter(|&(&l, &cl)| l > 0.0 && cl > 0.0)
            .map(|(l, cl)| (l.ln(), cl.ln()))
            .unzip();

        trace!(
            branch = %Branch::LogLog,
            points = log_l.len(),
            outputs = high.len(),
            "fitting branch"
        );

        if log_l.is_empty() || high.iter().any(|&i| lout[i] <= 0.0) {
            return Err(InterpClError::InvalidDomain {
                branch: Branch::LogLog,
            });
        }
        if log_l.len() < 2 {
            return Err(InterpClError::InsufficientPoints {
                branch: Branch::LogLog,
                got: log_l.len(),
            });
        }

        let interp = config.options.kind.build(&log_l, &log_cl)?;
        for &i in &high {
            clout[i] = match sample(&*interp, lout[i].ln(), config)? {
                Sample::Fitted(y) => y.exp(),
                Sample::Filled(y) => y,
            };
        }
    }

    for (l, cl) in lout.iter().zip(clout.iter_mut()) {
        if (*l == 0.0 && !config.compute_monopole) || (*l == 1.0 && !config.compute_dipole) {
            *cl = 0.0;
        }
    }

    Ok(clout)
}

/// Evaluate `interp` at `x`, applying the out-of-range policy.
fn sample(
    interp: &dyn Interpolator<f64>,
    x: f64,
    config: &InterpClConfig,
) -> Result<Sample, InterpolationError> {
    if interp.contains(x) || config.options.bounds_error {
        return interp.interpolate(x).map(Sample::Fitted);
    }

    Ok(match config.extrapolation {
        Extrapolation::Extrapolate => Sample::Fitted(interp.extrapolate(x)),
        Extrapolation::Fill { below, above } => {
            let (x_min, _) = interp.domain();
            Sample::Filled(if x < x_min { below } else { above })
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolators::InterpKind;
    use approx::assert_relative_eq;

    fn lognormal_spectrum() -> (Vec<f64>, Vec<f64>) {
        let l: Vec<f64> = (0..20)
            .map(|i| 2.0 * 50f64.powf(i as f64 / 19.0))
            .collect();
        let cl = l
            .iter()
            .map(|l| (-(l.ln() - 10f64.ln()).powi(2) / 5.0).exp())
            .collect();
        (l, cl)
    }

    #[test]
    fn test_shape_mismatch() {
        let result = interpcl(5usize, &[1.0, 2.0, 3.0], &[1.0, 2.0], &InterpClConfig::default());
        assert_eq!(
            result.unwrap_err(),
            InterpClError::ShapeMismatch {
                modes: 3,
                values: 2
            }
        );
    }

    #[test]
    fn test_linear_branch_below_threshold() {
        let config = InterpClConfig::default().with_monopole(true);
        let out = interpcl(4usize, &[0.0, 2.0, 4.0], &[1.0, 3.0, 5.0], &config).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_log_log_branch_is_exact_for_power_laws() {
        // C(l) = l^-2 is a straight line on log-log axes
        let l = [12.0, 20.0, 50.0, 100.0];
        let cl: Vec<f64> = l.iter().map(|l: &f64| l.powi(-2)).collect();
        let config = InterpClConfig::default().with_lin_log_threshold(10.0);

        let out = interpcl(vec![15.0, 30.0, 200.0], &l, &cl, &config).unwrap();
        assert_relative_eq!(out[0], 15f64.powi(-2), max_relative = 1e-12);
        assert_relative_eq!(out[1], 30f64.powi(-2), max_relative = 1e-12);
        assert_relative_eq!(out[2], 200f64.powi(-2), max_relative = 1e-12);
    }

    #[test]
    fn test_log_log_branch_skips_non_positive_pairs() {
        let l = [0.0, 12.0, 20.0, 30.0];
        let cl = [5.0, 144.0, -1.0, 900.0];
        let out = interpcl(vec![12.0, 30.0], &l, &cl, &InterpClConfig::default()).unwrap();
        assert_relative_eq!(out[0], 144.0, max_relative = 1e-12);
        assert_relative_eq!(out[1], 900.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_domain_without_positive_pairs() {
        let result = interpcl(vec![20.0], &[0.0, 15.0], &[1.0, 0.0], &InterpClConfig::default());
        assert_eq!(
            result.unwrap_err(),
            InterpClError::InvalidDomain {
                branch: Branch::LogLog
            }
        );
    }

    #[test]
    fn test_invalid_domain_for_non_positive_high_mode() {
        let config = InterpClConfig::default().with_lin_log_threshold(-1.0);
        let result = interpcl(vec![0.0], &[1.0, 2.0], &[1.0, 2.0], &config);
        assert!(matches!(result, Err(InterpClError::InvalidDomain { .. })));
    }

    #[test]
    fn test_insufficient_points_in_log_branch() {
        let result = interpcl(vec![20.0], &[0.0, 15.0], &[1.0, 2.0], &InterpClConfig::default());
        assert_eq!(
            result.unwrap_err(),
            InterpClError::InsufficientPoints {
                branch: Branch::LogLog,
                got: 1
            }
        );
    }

    #[test]
    fn test_insufficient_points_in_linear_branch() {
        let result = interpcl(vec![3.0], &[5.0], &[1.0], &InterpClConfig::default());
        assert_eq!(
            result.unwrap_err(),
            InterpClError::InsufficientPoints {
                branch: Branch::Linear,
                got: 1
            }
        );
    }

    #[test]
    fn test_branch_without_outputs_needs_no_points() {
        // no output above the threshold, so the missing log-log data is irrelevant
        let out = interpcl(3usize, &[0.0, 4.0], &[0.0, 4.0], &InterpClConfig::default()).unwrap();
        assert_eq!(out, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fill_values_written_as_is() {
        let (l, cl) = lognormal_spectrum();
        let config = InterpClConfig::default()
            .with_monopole(true)
            .with_extrapolation(Extrapolation::Fill {
                below: -1.0,
                above: 7.0,
            });

        let out = interpcl(150usize, &l, &cl, &config).unwrap();
        assert_eq!(out[0], -1.0);
        assert_eq!(out[1], -1.0);
        assert!(out[2] > 0.0);
        assert!(out[100] > 0.0);
        assert_eq!(out[101], 7.0);
        assert_eq!(out[150], 7.0);
    }

    #[test]
    fn test_bounds_error_reports_out_of_bounds() {
        let (l, cl) = lognormal_spectrum();
        let config = InterpClConfig::default()
            .with_extrapolation(Extrapolation::zero_fill())
            .with_bounds_error(true);

        let result = interpcl(vec![5.0, 150.0], &l, &cl, &config);
        assert!(matches!(
            result,
            Err(InterpClError::Interpolation(
                InterpolationError::OutOfBounds { .. }
            ))
        ));

        assert!(interpcl(vec![5.0, 50.0], &l, &cl, &config).is_ok());
    }

    #[test]
    fn test_cubic_spline_reproduces_knots() {
        let (l, cl) = lognormal_spectrum();
        let config = InterpClConfig::default().with_kind(InterpKind::CubicSpline);

        let out = interpcl(l.clone(), &l, &cl, &config).unwrap();
        for (got, want) in out.iter().zip(&cl) {
            assert_relative_eq!(*got, *want, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_cubic_spline_insufficient_data_passes_through() {
        let config = InterpClConfig::default().with_kind(InterpKind::CubicSpline);
        let result = interpcl(3usize, &[1.0, 2.0], &[1.0, 2.0], &config);
        assert_eq!(
            result.unwrap_err(),
            InterpClError::Interpolation(InterpolationError::InsufficientData { got: 2, need: 3 })
        );
    }

    #[test]
    fn test_monopole_and_dipole_forced_in_explicit_modes() {
        let config = InterpClConfig::default().with_dipole(false);
        let out = interpcl(vec![1.0, 0.0, 2.0, 1.0], &[0.0, 4.0], &[4.0, 8.0], &config).unwrap();
        assert_eq!(out, vec![0.0, 0.0, 6.0, 0.0]);
    }

    #[test]
    fn test_huge_auto_lmax_returns_error() {
        let result = interpcl(
            OutputModes::Auto,
            &[1.0, 1e300],
            &[1.0, 1.0],
            &InterpClConfig::default(),
        );
        assert!(matches!(result, Err(InterpClError::InvalidModes(_))));
    }

    #[test]
    fn test_negative_modes_use_linear_branch() {
        let config = InterpClConfig::default().with_monopole(true);
        let out = interpcl(vec![-1.0, 0.5], &[0.0, 2.0], &[1.0, 3.0], &config).unwrap();
        assert_eq!(out, vec![0.0, 1.5]);

        let config = config.with_extrapolation(Extrapolation::Fill {
            below: 9.0,
            above: 0.0,
        });
        let out = interpcl(vec![-1.0], &[0.0, 2.0], &[1.0, 3.0], &config).unwrap();
        assert_eq!(out, vec![9.0]);
    }

    #[test]
    fn test_duplicate_input_modes_rejected() {
        let result = interpcl(
            3usize,
            &[1.0, 2.0, 2.0],
            &[1.0, 2.0, 3.0],
            &InterpClConfig::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            InterpClError::Interpolation(InterpolationError::NonMonotonicData { index: 2 })
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let l = vec![3.0, 1.0, 2.0];
        let cl = vec![9.0, 1.0, 4.0];
        let _ = interpcl(3usize, &l, &cl, &InterpClConfig::default()).unwrap();
        assert_eq!(l, vec![3.0, 1.0, 2.0]);
        assert_eq!(cl, vec![9.0, 1.0, 4.0]);
    }
}
