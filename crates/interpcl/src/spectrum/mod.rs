//! Angular power spectrum interpolation.
//!
//! - `config`: [`InterpClConfig`], [`Extrapolation`] and [`InterpOptions`]
//! - `modes`: [`OutputModes`] resolution
//! - `interp`: the [`interpcl`] function

pub mod config;
pub mod interp;
pub mod modes;

pub use config::{Extrapolation, InterpClConfig, InterpOptions, DEFAULT_LIN_LOG_THRESHOLD};
pub use interp::interpcl;
pub use modes::OutputModes;
