//! Core types shared across the crate.
//!
//! This module provides:
//! - `error`: Structured error types for interpolation primitives and spectrum resampling
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`], [`InterpClError`] and [`Branch`]
//! are re-exported at this module level.

pub mod error;

pub use error::{Branch, InterpClError, InterpolationError};
