//! One-dimensional axis discretization.
//!
//! A [`GridAxis`] is an immutable, bounded, evenly spaced binning of a
//! continuous range. It converts between a continuous coordinate ("key")
//! and a bin number ("index") in both directions and is the sole authority
//! on rounding and boundary behavior for its dimension.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::errors::GridError;
use super::{AxisIndex, AxisKey, DEFAULT_EPSILON};

/// One dimension's discretization of a continuous range `[min, max]` into
/// `n_bins` equal-width bins.
///
/// Immutable after construction. Equality and hashing consider only
/// `(name, min, max, size)`; the rounding guard `epsilon` is excluded, so
/// two axes differing only in epsilon compare equal.
///
/// The key → index conversion adds `epsilon` before truncating so that a
/// key sitting exactly on a bin boundary, but represented as a float a hair
/// below it, still lands in the upper bin.
#[derive(Debug, Clone, Serialize)]
pub struct GridAxis {
    name: String,
    min: f64,
    max: f64,
    size: f64,
    epsilon: f64,
    #[serde(skip)]
    n_bins: usize,
    #[serde(skip)]
    half_size: f64,
}

impl GridAxis {
    /// Create an axis with the default rounding guard.
    ///
    /// # Errors
    /// Fails if `name` is empty, `min < max` does not hold, `size` is not
    /// positive, or `size` exceeds the span (no complete bin would fit).
    pub fn new(
        name: impl Into<String>,
        min: f64,
        max: f64,
        size: f64,
    ) -> Result<Self, GridError> {
        Self::with_epsilon(name, min, max, size, DEFAULT_EPSILON)
    }

    /// Create an axis with a custom rounding guard.
    pub fn with_epsilon(
        name: impl Into<String>,
        min: f64,
        max: f64,
        size: f64,
        epsilon: f64,
    ) -> Result<Self, GridError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GridError::EmptyAxisName);
        }
        if !(min < max) {
            return Err(GridError::InvalidBounds { name, min, max });
        }
        if !(size > 0.0) {
            return Err(GridError::InvalidBinSize { name, size });
        }
        if !(epsilon > 0.0) {
            return Err(GridError::InvalidEpsilon { name, epsilon });
        }

        let n_bins = ((max - min) / size) as usize;
        if n_bins == 0 {
            return Err(GridError::EmptySpan {
                name,
                min,
                max,
                size,
            });
        }

        Ok(Self {
            name,
            min,
            max,
            size,
            epsilon,
            n_bins,
            half_size: size / 2.0,
        })
    }

    /// Axis name, used in error messages and equality.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower bound of the continuous range.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the continuous range.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Bin width.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Rounding guard added before truncation in [`get_index`](Self::get_index).
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Number of complete bins, `floor((max - min) / size)`.
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Whether `key` lies in `[min, max]`.
    #[inline]
    pub fn is_valid_key(&self, key: AxisKey) -> bool {
        self.min <= key && key <= self.max
    }

    /// Whether `index` lies in `[0, n_bins)`.
    #[inline]
    pub fn is_valid_index(&self, index: AxisIndex) -> bool {
        index < self.n_bins
    }

    /// Fresh axis with the same `(name, min, max, size)` and the rounding
    /// guard reset to the default.
    pub fn copy(&self) -> GridAxis {
        GridAxis {
            name: self.name.clone(),
            min: self.min,
            max: self.max,
            size: self.size,
            epsilon: DEFAULT_EPSILON,
            n_bins: self.n_bins,
            half_size: self.half_size,
        }
    }

    /// Convert a continuous key to its bin index.
    ///
    /// `key == max` maps to the last bin, `n_bins - 1`; a pure division
    /// would push the upper boundary one bin past the end. Every other key
    /// is converted as `trunc((key - min) / size + epsilon)`, the epsilon
    /// nudge countering representation error for keys that sit exactly on a
    /// bin boundary.
    ///
    /// # Errors
    /// [`GridError::KeyOutOfBounds`] if `key` lies outside `[min, max]`.
    pub fn get_index(&self, key: AxisKey) -> Result<AxisIndex, GridError> {
        if !self.is_valid_key(key) {
            return Err(GridError::KeyOutOfBounds {
                axis: self.name.clone(),
                key,
                min: self.min,
                max: self.max,
            });
        }
        if key < self.max {
            let index = ((key - self.min) / self.size + self.epsilon) as usize;
            // Keys in a ragged remainder past the last complete bin fold
            // into that bin.
            Ok(index.min(self.n_bins - 1))
        } else {
            Ok(self.n_bins - 1)
        }
    }

    /// Convert a bin index to the continuous coordinate of its center,
    /// `index * size + min + size / 2`.
    ///
    /// Inverse of [`get_index`](Self::get_index) up to half a bin width:
    /// `get_index(get_key(i)) == i` for every valid `i`, but an arbitrary
    /// key is never reproduced exactly (keys snap to bin centers).
    ///
    /// # Errors
    /// [`GridError::IndexOutOfBounds`] if `index` is not below `n_bins`.
    pub fn get_key(&self, index: AxisIndex) -> Result<AxisKey, GridError> {
        if !self.is_valid_index(index) {
            return Err(GridError::IndexOutOfBounds {
                axis: self.name.clone(),
                index,
                n_bins: self.n_bins,
            });
        }
        Ok((index as f64) * self.size + self.min + self.half_size)
    }
}

impl PartialEq for GridAxis {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.min == other.min
            && self.max == other.max
            && self.size == other.size
    }
}

// Construction rejects NaN bounds and sizes (the ordered comparisons fail),
// so equality over the float fields is reflexive.
impl Eq for GridAxis {}

impl Hash for GridAxis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.min.to_bits().hash(state);
        self.max.to_bits().hash(state);
        self.size.to_bits().hash(state);
    }
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridAxis({}, {}, {}, {})",
            self.name, self.min, self.max, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_key_round_trip() {
        let axes = [
            GridAxis::new("x", 0.0, 1.0, 0.1).unwrap(),
            GridAxis::new("y", -1.0, 0.0, 0.1).unwrap(),
            GridAxis::new("z", -2.5, 7.5, 0.25).unwrap(),
        ];
        for axis in &axes {
            for i in 0..axis.n_bins() {
                let key = axis.get_key(i).unwrap();
                assert_eq!(axis.get_index(key).unwrap(), i, "{}", axis);
            }
        }
    }

    #[test]
    fn test_upper_boundary_maps_to_last_bin() {
        let axis = GridAxis::new("x", 0.0, 1.0, 0.1).unwrap();
        assert_eq!(axis.get_index(1.0).unwrap(), axis.n_bins() - 1);
    }

    #[test]
    fn test_boundary_key_lands_in_upper_bin() {
        // 0.3 / 0.1 is 2.9999999999999996 in floats; the epsilon nudge must
        // keep the key in bin 3.
        let axis = GridAxis::new("x", 0.0, 1.0, 0.1).unwrap();
        assert_eq!(axis.get_index(0.3).unwrap(), 3);
    }

    #[test]
    fn test_ragged_span_folds_into_last_bin() {
        // Span 1.0 with size 0.3 leaves a remainder past bin 2.
        let axis = GridAxis::new("x", 0.0, 1.0, 0.3).unwrap();
        assert_eq!(axis.n_bins(), 3);
        assert_eq!(axis.get_index(0.95).unwrap(), 2);
    }

    #[test]
    fn test_copy_resets_epsilon() {
        let axis = GridAxis::with_epsilon("x", 0.0, 1.0, 0.1, 1e-3).unwrap();
        let copied = axis.copy();
        assert_eq!(axis, copied);
        assert_eq!(copied.epsilon(), DEFAULT_EPSILON);
    }

    #[test]
    fn test_eq_ignores_epsilon() {
        let a = GridAxis::new("x", 0.0, 1.0, 0.1).unwrap();
        let b = GridAxis::with_epsilon("x", 0.0, 1.0, 0.1, 1e-2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_axes_collapse_in_hash_set() {
        let mut set = std::collections::HashSet::new();
        set.insert(GridAxis::new("x", 0.0, 1.0, 0.1).unwrap());
        set.insert(GridAxis::with_epsilon("x", 0.0, 1.0, 0.1, 1e-2).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_size_larger_than_span_rejected() {
        let err = GridAxis::new("x", 0.0, 1.0, 2.0).unwrap_err();
        assert!(matches!(err, GridError::EmptySpan { .. }));
    }

    #[test]
    fn test_display() {
        let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
        assert_eq!(axis.to_string(), "GridAxis(X, 0, 1, 0.1)");
    }
}
