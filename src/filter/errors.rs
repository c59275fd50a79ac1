//! Error types for the filter layer.

use std::fmt;

use crate::grid::errors::GridError;

/// Which stochastic noise model an operation concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseModel {
    /// Motion (process) noise
    Motion,
    /// Observation (measurement) noise
    Observation,
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseModel::Motion => write!(f, "motion"),
            NoiseModel::Observation => write!(f, "observation"),
        }
    }
}

/// Errors that can occur in the filter layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A noise matrix was not square, or its entries did not sum to
    /// exactly 1.0
    InvalidNoise {
        /// Which noise model was being set
        model: NoiseModel,
    },

    /// Sampling was attempted with no positive-probability cells
    NoPositiveCells,

    /// The nonzero-cell weights did not sum to exactly 1.0; the belief has
    /// not been kept normalized
    UnnormalizedWeights {
        /// The sum the weights actually reached
        sum: f64,
    },

    /// An operation of the stepping contract was invoked on the base type
    NotImplemented {
        /// Name of the operation
        operation: &'static str,
    },

    /// A grid or axis operation failed
    Grid(GridError),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidNoise { model } => {
                write!(f, "{} noise must be a square matrix that sums to 1.", model)
            }
            FilterError::NoPositiveCells => {
                write!(f, "There are no cells with positive values!")
            }
            FilterError::UnnormalizedWeights { sum } => {
                write!(f, "The probabilities for the nonzero keys sum to {}.", sum)
            }
            FilterError::NotImplemented { operation } => {
                write!(f, "{} is not implemented on the filter base", operation)
            }
            FilterError::Grid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for FilterError {
    fn from(e: GridError) -> Self {
        FilterError::Grid(e)
    }
}
