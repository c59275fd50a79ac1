//! Construction parameters for the filter base.

use nalgebra::DMatrix;

use crate::grid::{GridAxis, GridIndex, DEFAULT_ZERO_THRESHOLD};

/// Construction parameters for
/// [`HistogramFilterBase`](super::HistogramFilterBase).
///
/// Only the two axes are required; everything else defaults. The `with_*`
/// methods consume and return the config for chaining.
#[derive(Debug, Clone)]
pub struct HistogramFilterConfig {
    /// The x (column) axis of the belief grid
    pub x_axis: GridAxis,
    /// The y (row) axis of the belief grid
    pub y_axis: GridAxis,
    /// Threshold below which belief writes are coerced to zero
    pub zero_threshold: f64,
    /// Cells to forward to the grid's unusable-cell hook
    pub unusable_cells: Vec<GridIndex>,
    /// Motion noise matrix; absent means the 1x1 identity
    pub motion_noise: Option<DMatrix<f64>>,
    /// Observation noise matrix; absent means the 1x1 identity
    pub observation_noise: Option<DMatrix<f64>>,
}

impl HistogramFilterConfig {
    /// Create a config with default threshold, no unusable cells, and
    /// identity noise models.
    pub fn new(x_axis: GridAxis, y_axis: GridAxis) -> Self {
        Self {
            x_axis,
            y_axis,
            zero_threshold: DEFAULT_ZERO_THRESHOLD,
            unusable_cells: Vec::new(),
            motion_noise: None,
            observation_noise: None,
        }
    }

    /// Set the belief grid's zero threshold.
    pub fn with_zero_threshold(mut self, zero_threshold: f64) -> Self {
        self.zero_threshold = zero_threshold;
        self
    }

    /// Set the cells forwarded to the grid's unusable-cell hook.
    pub fn with_unusable_cells<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = GridIndex>,
    {
        self.unusable_cells = cells.into_iter().collect();
        self
    }

    /// Set the initial motion noise matrix.
    pub fn with_motion_noise(mut self, noise: DMatrix<f64>) -> Self {
        self.motion_noise = Some(noise);
        self
    }

    /// Set the initial observation noise matrix.
    pub fn with_observation_noise(mut self, noise: DMatrix<f64>) -> Self {
        self.observation_noise = Some(noise);
        self
    }
}
