//! Axis discretization and the dense 2-D belief grid.
//!
//! This module provides the coordinate machinery of the filter:
//!
//! - [`GridAxis`] - one dimension's discretization of a continuous range
//!   into equal-width bins, converting key ↔ index in both directions
//! - [`Grid`] - two axes composed into a dense 2-D array of probability
//!   values, with incremental tracking of the cells at or above the zero
//!   threshold
//!
//! # Coordinate convention
//!
//! A coordinate pair is `(x_key, y_key)`; an index pair is
//! `(row_index, col_index)` where the row comes from the y-axis and the
//! column from the x-axis. The transposition is deliberate and applies to
//! every key ↔ index conversion in this module.

pub mod axis;
pub mod errors;

mod grid;

pub use axis::GridAxis;
pub use grid::Grid;

/// The integer used to access a particular axis of the array.
pub type AxisIndex = usize;

/// A pair of axis indices. Format: `(row_index, column_index)`.
pub type GridIndex = (AxisIndex, AxisIndex);

/// The continuous value used to address a particular axis. A key is
/// converted to an [`AxisIndex`] before the array is touched.
pub type AxisKey = f64;

/// A pair of axis keys. Format: `(x_key, y_key)`.
pub type GridKey = (AxisKey, AxisKey);

/// The type of each value in the array.
pub type GridValue = f64;

/// Default rounding guard added before truncating a continuous bin
/// position to an index.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default threshold below which a written value is stored as exactly zero
/// and excluded from the nonzero-cell set.
pub const DEFAULT_ZERO_THRESHOLD: f64 = 1e-5;
