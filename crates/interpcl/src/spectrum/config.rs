//! Configuration for angular power spectrum interpolation.
//!
//! Configuration can be built in code with the `with_*` methods or loaded
//! from TOML:
//!
//! ```toml
//! lin_log_threshold = 20.0
//! compute_monopole = true
//!
//! [extrapolation]
//! policy = "fill"
//! below = 0.0
//! above = 0.0
//!
//! [options]
//! kind = "cubic_spline"
//! ```

use crate::math::interpolators::InterpKind;
use crate::types::{InterpClError, InterpolationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default boundary between the linear and log-log branches.
pub const DEFAULT_LIN_LOG_THRESHOLD: f64 = 10.0;

/// Rule for output modes outside the range of the fitted input modes.
///
/// The same policy applies to both branches. Fill values are written as-is,
/// also for modes in the log-log branch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum Extrapolation {
    /// Continue the fitted curve beyond the input range.
    #[default]
    Extrapolate,
    /// Write fixed values below and above the input range.
    Fill {
        /// Value for modes below the smallest input mode
        #[serde(default)]
        below: f64,
        /// Value for modes above the largest input mode
        #[serde(default)]
        above: f64,
    },
}

impl Extrapolation {
    /// Fill with zero on both sides.
    pub fn zero_fill() -> Self {
        Extrapolation::Fill {
            below: 0.0,
            above: 0.0,
        }
    }
}

/// Options forwarded to the interpolation primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpOptions {
    /// Interpolation scheme for both branches
    pub kind: InterpKind,
    /// Fail with `OutOfBounds` for modes outside the input range
    pub bounds_error: bool,
}

impl InterpOptions {
    /// Check the options against the extrapolation policy.
    ///
    /// Raising on out-of-range modes cannot be combined with extrapolation.
    pub fn validate(&self, extrapolation: &Extrapolation) -> Result<(), InterpolationError> {
        if self.bounds_error && matches!(extrapolation, Extrapolation::Extrapolate) {
            return Err(InterpolationError::InvalidInput(
                "cannot extrapolate and raise on out-of-bounds modes at the same time".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration of [`interpcl`](crate::spectrum::interpcl).
///
/// # Examples
///
/// ```
/// use interpcl::spectrum::{Extrapolation, InterpClConfig};
///
/// let config = InterpClConfig::default()
///     .with_lin_log_threshold(20.0)
///     .with_extrapolation(Extrapolation::zero_fill())
///     .with_dipole(false);
///
/// assert_eq!(config.lin_log_threshold, 20.0);
/// assert!(!config.compute_monopole);
/// assert!(!config.compute_dipole);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpClConfig {
    /// Modes at or below this value use linear axes, above it log-log axes
    pub lin_log_threshold: f64,
    /// Out-of-range policy
    pub extrapolation: Extrapolation,
    /// Keep the interpolated monopole; when false mode 0 is set to zero
    pub compute_monopole: bool,
    /// Keep the interpolated dipole; when false mode 1 is set to zero
    pub compute_dipole: bool,
    /// Options for the interpolation primitive
    pub options: InterpOptions,
}

impl Default for InterpClConfig {
    fn default() -> Self {
        Self {
            lin_log_threshold: DEFAULT_LIN_LOG_THRESHOLD,
            extrapolation: Extrapolation::default(),
            compute_monopole: false,
            compute_dipole: true,
            options: InterpOptions::default(),
        }
    }
}

impl InterpClConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lin_log_threshold(mut self, threshold: f64) -> Self {
        self.lin_log_threshold = threshold;
        self
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    pub fn with_monopole(mut self, compute: bool) -> Self {
        self.compute_monopole = compute;
        self
    }

    pub fn with_dipole(mut self, compute: bool) -> Self {
        self.compute_dipole = compute;
        self
    }

    pub fn with_kind(mut self, kind: InterpKind) -> Self {
        self.options.kind = kind;
        self
    }

    pub fn with_bounds_error(mut self, bounds_error: bool) -> Self {
        self.options.bounds_error = bounds_error;
        self
    }

    /// Parse a configuration from a TOML document.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, InterpClError> {
        let config: InterpClConfig = toml::from_str(content)
            .map_err(|e| InterpClError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InterpClError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| InterpClError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), InterpClError> {
        if !self.lin_log_threshold.is_finite() {
            return Err(InterpClError::Config(format!(
                "lin_log_threshold must be finite, got {}",
                self.lin_log_threshold
            )));
        }
        self.options.validate(&self.extrapolation)?;
        Ok(())
    }
}
