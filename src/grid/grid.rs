//! Dense 2-D belief storage with nonzero-cell bookkeeping.

use std::collections::HashSet;

use nalgebra::DMatrix;

use super::axis::GridAxis;
use super::errors::GridError;
use super::{GridIndex, GridKey, GridValue, DEFAULT_ZERO_THRESHOLD};

// allclose tolerances for the data comparison in `PartialEq`.
const RTOL: f64 = 1e-5;
const ATOL: f64 = 1e-8;

/// Dense 2-D array of probability mass addressed by continuous coordinate
/// pairs, plus exact tracking of the cells at or above the zero threshold.
///
/// The array has shape `(y_axis.n_bins, x_axis.n_bins)`: rows follow the
/// y-axis, columns the x-axis. Both axes are ingested via
/// [`GridAxis::copy`], so a caller mutating nothing it still holds can
/// never alias grid state.
///
/// Every mutation goes through [`set`](Self::set); it alone maintains the
/// invariant that the nonzero-cell set is exactly the set of index pairs
/// whose stored value is `>= zero_threshold`, and that sub-threshold values
/// are stored as exactly `0.0`.
#[derive(Debug)]
pub struct Grid {
    x_axis: GridAxis,
    y_axis: GridAxis,
    zero_threshold: f64,
    data: DMatrix<GridValue>,
    nonzero_cells: HashSet<GridIndex>,
    sig_digits: u32,
    volume: f64,
}

impl Grid {
    /// Create a grid with the default zero threshold,
    /// [`DEFAULT_ZERO_THRESHOLD`].
    pub fn new(x_axis: &GridAxis, y_axis: &GridAxis) -> Result<Self, GridError> {
        Self::with_zero_threshold(x_axis, y_axis, DEFAULT_ZERO_THRESHOLD)
    }

    /// Create a grid with a custom zero threshold.
    ///
    /// # Errors
    /// Fails if the axis names are identical or the threshold is negative.
    pub fn with_zero_threshold(
        x_axis: &GridAxis,
        y_axis: &GridAxis,
        zero_threshold: f64,
    ) -> Result<Self, GridError> {
        let x_axis = x_axis.copy();
        let y_axis = y_axis.copy();

        if x_axis.name() == y_axis.name() {
            return Err(GridError::DuplicateAxisName {
                name: x_axis.name().to_string(),
            });
        }
        if zero_threshold < 0.0 {
            return Err(GridError::NegativeZeroThreshold {
                threshold: zero_threshold,
            });
        }

        let sig_digits = 8;
        let volume = round_to(x_axis.size() * y_axis.size(), sig_digits);
        let data = DMatrix::zeros(y_axis.n_bins(), x_axis.n_bins());

        log::debug!(
            "allocated {}x{} belief grid for {} / {}",
            y_axis.n_bins(),
            x_axis.n_bins(),
            x_axis,
            y_axis
        );

        Ok(Self {
            x_axis,
            y_axis,
            zero_threshold,
            data,
            nonzero_cells: HashSet::new(),
            sig_digits,
            volume,
        })
    }

    /// Read-only view of the dense array.
    ///
    /// All writes go through [`set`](Self::set), which owns the
    /// nonzero-set bookkeeping.
    #[inline]
    pub fn data(&self) -> &DMatrix<GridValue> {
        &self.data
    }

    /// The x (column) axis.
    #[inline]
    pub fn x_axis(&self) -> &GridAxis {
        &self.x_axis
    }

    /// The y (row) axis.
    #[inline]
    pub fn y_axis(&self) -> &GridAxis {
        &self.y_axis
    }

    /// Threshold below which written values are coerced to zero.
    #[inline]
    pub fn zero_threshold(&self) -> f64 {
        self.zero_threshold
    }

    /// Area of one cell, `x_axis.size * y_axis.size`, rounded to 8 decimal
    /// digits. Computed once at construction.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Convert a coordinate pair `(x_key, y_key)` to an index pair
    /// `(row, col)`.
    pub fn grid_index(&self, key: GridKey) -> Result<GridIndex, GridError> {
        let (x_key, y_key) = key;
        let col = self.x_axis.get_index(x_key)?;
        let row = self.y_axis.get_index(y_key)?;
        Ok((row, col))
    }

    /// Convert an index pair `(row, col)` to the coordinate pair
    /// `(x_key, y_key)` of the cell's center.
    pub fn cell_key(&self, index: GridIndex) -> Result<GridKey, GridError> {
        let (row, col) = index;
        let y_key = self.y_axis.get_key(row)?;
        let x_key = self.x_axis.get_key(col)?;
        Ok((x_key, y_key))
    }

    /// Value stored in the cell containing `key`.
    ///
    /// # Errors
    /// Propagates the axes' out-of-bounds failures unchanged.
    pub fn get(&self, key: GridKey) -> Result<GridValue, GridError> {
        let index = self.grid_index(key)?;
        Ok(self.data[index])
    }

    /// Write `value` into the cell containing `key`.
    ///
    /// Values at or above the zero threshold are stored and the cell joins
    /// the nonzero set; values below it are stored as exactly `0.0` and the
    /// cell leaves the set.
    pub fn set(&mut self, key: GridKey, value: GridValue) -> Result<(), GridError> {
        let index = self.grid_index(key)?;
        if value >= self.zero_threshold {
            self.nonzero_cells.insert(index);
            self.data[index] = value;
        } else {
            self.nonzero_cells.remove(&index);
            self.data[index] = 0.0;
        }
        Ok(())
    }

    /// Unordered snapshot of the cells currently at or above the zero
    /// threshold.
    pub fn nonzero_cells(&self) -> Vec<GridIndex> {
        self.nonzero_cells.iter().copied().collect()
    }

    /// [`nonzero_cells`](Self::nonzero_cells) mapped through
    /// [`cell_key`](Self::cell_key). Order follows the cell snapshot and is
    /// not otherwise stable across calls.
    pub fn nonzero_keys(&self) -> Result<Vec<GridKey>, GridError> {
        self.nonzero_cells
            .iter()
            .map(|&index| self.cell_key(index))
            .collect()
    }

    /// Accept a collection of cells to exclude from use.
    ///
    /// Currently ignores the list; no cell masking is applied.
    pub fn set_unusable_cells<I>(&mut self, _cells: I)
    where
        I: IntoIterator<Item = GridIndex>,
    {
    }

    /// Fully independent duplicate: array contents and nonzero set are
    /// copied, axes are duplicated by value.
    pub fn copy(&self) -> Grid {
        Grid {
            x_axis: self.x_axis.copy(),
            y_axis: self.y_axis.copy(),
            zero_threshold: self.zero_threshold,
            data: self.data.clone(),
            nonzero_cells: self.nonzero_cells.clone(),
            sig_digits: self.sig_digits,
            volume: self.volume,
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.x_axis == other.x_axis
            && self.y_axis == other.y_axis
            && self.zero_threshold == other.zero_threshold
            && self.sig_digits == other.sig_digits
            && self.nonzero_cells == other.nonzero_cells
            && allclose(&self.data, &other.data)
    }
}

/// Elementwise `|a - b| <= ATOL + RTOL * |b|` over equally shaped matrices.
fn allclose(a: &DMatrix<f64>, b: &DMatrix<f64>) -> bool {
    a.shape() == b.shape()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).abs() <= ATOL + RTOL * y.abs())
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
