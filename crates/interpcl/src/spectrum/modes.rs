//! Output mode specification.

use crate::types::InterpClError;

/// Modes at which the spectrum is evaluated.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputModes {
    /// All integer modes from 0 to the largest input mode (rounded down).
    #[default]
    Auto,
    /// All integer modes `0, 1, ..., lmax`.
    Lmax(usize),
    /// An explicit sequence of modes, in output order.
    Modes(Vec<f64>),
}

impl OutputModes {
    /// Expand to a concrete sequence of modes.
    ///
    /// `Auto` uses `floor(max(input_modes))`; with no finite non-negative
    /// input mode the result is empty.
    ///
    /// # Errors
    ///
    /// `InvalidModes` if `lmax` does not fit in `usize` or the dense
    /// sequence cannot be allocated.
    pub fn resolve(&self, input_modes: &[f64]) -> Result<Vec<f64>, InterpClError> {
        match self {
            OutputModes::Auto => {
                let lmax = input_modes
                    .iter()
                    .copied()
                    .filter(|l| l.is_finite())
                    .fold(f64::NEG_INFINITY, f64::max);
                if lmax < 0.0 {
                    return Ok(Vec::new());
                }
                // usize::MAX as f64 rounds up, so anything at or above it overflows
                if lmax.floor() >= usize::MAX as f64 {
                    return Err(InterpClError::InvalidModes(format!(
                        "largest input mode {} exceeds the representable lmax",
                        lmax
                    )));
                }
                dense(lmax.floor() as usize)
            }
            OutputModes::Lmax(lmax) => dense(*lmax),
            OutputModes::Modes(modes) => Ok(modes.clone()),
        }
    }
}

fn dense(lmax: usize) -> Result<Vec<f64>, InterpClError> {
    let len = lmax
        .checked_add(1)
        .ok_or_else(|| InterpClError::InvalidModes(format!("lmax {} overflows", lmax)))?;

    let mut modes = Vec::new();
    modes.try_reserve_exact(len).map_err(|e| {
        InterpClError::InvalidModes(format!("cannot allocate {} modes: {}", len, e))
    })?;
    modes.extend((0..len).map(|l| l as f64));
    Ok(modes)
}

impl From<usize> for OutputModes {
    fn from(lmax: usize) -> Self {
        OutputModes::Lmax(lmax)
    }
}

impl From<Option<usize>> for OutputModes {
    fn from(lmax: Option<usize>) -> Self {
        lmax.map_or(OutputModes::Auto, OutputModes::Lmax)
    }
}

impl From<Vec<f64>> for OutputModes {
    fn from(modes: Vec<f64>) -> Self {
        OutputModes::Modes(modes)
    }
}

impl From<&[f64]> for OutputModes {
    fn from(modes: &[f64]) -> Self {
        OutputModes::Modes(modes.to_vec())
    }
}
