//! Numerical building blocks.
//!
//! - `interpolators`: 1D interpolation primitives with optional extrapolation

pub mod interpolators;
