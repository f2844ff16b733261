//! # interpcl: Interpolation of angular power spectra
//!
//! Fills in an angular power spectrum `C(l)` at all integer modes
//! `l = 0, 1, ..., lmax` (or at arbitrary modes) given the spectrum at a
//! sparse, irregular set of input modes.
//!
//! ## Scheme
//!
//! - Modes at or below a threshold (default 10) are interpolated on linear axes
//! - Modes above it are interpolated on log-log axes, from input pairs with
//!   positive mode and value
//! - Outside the input range the fitted curve is continued, or fixed fill
//!   values are written
//! - The monopole (`l = 0`) is set to zero by default, the dipole (`l = 1`)
//!   on request
//!
//! ## Modules
//!
//! - `spectrum`: [`interpcl`](spectrum::interpcl) and its configuration
//! - `math::interpolators`: linear and natural cubic spline primitives
//! - `types`: error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use interpcl::spectrum::{interpcl, InterpClConfig};
//!
//! let l = [2.0, 5.0, 20.0, 100.0];
//! let cl = [1.0, 0.8, 0.1, 0.01];
//!
//! let config = InterpClConfig::default().with_dipole(false);
//! let out = interpcl(200usize, &l, &cl, &config).unwrap();
//!
//! assert_eq!(out.len(), 201);
//! assert_eq!(out[0], 0.0);
//! assert_eq!(out[1], 0.0);
//! assert!((out[20] - 0.1).abs() < 1e-12);
//! ```
//!
//! ## Logging
//!
//! Calls are instrumented with `tracing` at `debug`/`trace` level; install a
//! subscriber in the application to see them.

pub mod math;
pub mod spectrum;
pub mod types;
