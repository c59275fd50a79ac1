//! Filter base: belief ownership, noise validation, belief sampling.

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Grid, GridKey, GridValue};

use super::config::HistogramFilterConfig;
use super::errors::{FilterError, NoiseModel};
use super::traits::HistogramFilter;

/// Common state and machinery for grid-based Bayes filters.
///
/// Owns the belief [`Grid`], the motion and observation noise matrices,
/// and a reusable random generator for belief sampling. Concrete filters
/// hold one of these and implement [`HistogramFilter`] on themselves; the
/// base's own trait impl fails both operations with
/// [`FilterError::NotImplemented`].
///
/// The generator is constructed once and reused across all sampling calls.
/// [`new`](Self::new) seeds it from entropy; [`with_rng`](Self::with_rng)
/// accepts a caller-built generator, which makes sampling deterministic
/// when the generator is (e.g. [`SimpleRng`](crate::common::rng::SimpleRng)
/// or a seeded `StdRng`).
pub struct HistogramFilterBase<R: Rng = StdRng> {
    grid: Grid,
    motion_noise: DMatrix<f64>,
    observation_noise: DMatrix<f64>,
    rng: R,
}

impl HistogramFilterBase<StdRng> {
    /// Build a filter base from `config`, seeding the sampler from entropy.
    pub fn new(config: HistogramFilterConfig) -> Result<Self, FilterError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> HistogramFilterBase<R> {
    /// Build a filter base from `config` with a caller-supplied generator.
    ///
    /// # Errors
    /// Fails if the grid cannot be constructed (duplicate axis names,
    /// negative threshold) or an initial noise matrix is invalid.
    pub fn with_rng(config: HistogramFilterConfig, rng: R) -> Result<Self, FilterError> {
        let HistogramFilterConfig {
            x_axis,
            y_axis,
            zero_threshold,
            unusable_cells,
            motion_noise,
            observation_noise,
        } = config;

        let mut grid = Grid::with_zero_threshold(&x_axis, &y_axis, zero_threshold)?;
        grid.set_unusable_cells(unusable_cells);

        let mut filter = Self {
            grid,
            motion_noise: identity_noise(),
            observation_noise: identity_noise(),
            rng,
        };
        filter.set_motion_noise(motion_noise.as_ref())?;
        filter.set_observation_noise(observation_noise.as_ref())?;
        Ok(filter)
    }

    /// The belief grid.
    #[inline]
    pub fn belief(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the belief grid, for concrete filters' predict
    /// and update steps.
    #[inline]
    pub fn belief_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The current motion noise matrix.
    #[inline]
    pub fn motion_noise(&self) -> &DMatrix<f64> {
        &self.motion_noise
    }

    /// The current observation noise matrix.
    #[inline]
    pub fn observation_noise(&self) -> &DMatrix<f64> {
        &self.observation_noise
    }

    /// Belief value in the cell containing `key`. Forwards to
    /// [`Grid::get`].
    pub fn get(&self, key: GridKey) -> Result<GridValue, FilterError> {
        Ok(self.grid.get(key)?)
    }

    /// Write a belief value into the cell containing `key`. Forwards to
    /// [`Grid::set`].
    pub fn set(&mut self, key: GridKey, value: GridValue) -> Result<(), FilterError> {
        Ok(self.grid.set(key, value)?)
    }

    /// Replace the motion noise matrix. `None` installs the 1x1 identity.
    ///
    /// The matrix must be square and its entries must sum to exactly
    /// `1.0`; on rejection the previously stored matrix is untouched. A
    /// private clone is stored, so later mutation of the caller's matrix
    /// cannot reach filter state.
    pub fn set_motion_noise(&mut self, noise: Option<&DMatrix<f64>>) -> Result<(), FilterError> {
        self.motion_noise = validate_noise(noise, NoiseModel::Motion)?;
        Ok(())
    }

    /// Replace the observation noise matrix. `None` installs the 1x1
    /// identity. Same contract as [`set_motion_noise`](Self::set_motion_noise).
    pub fn set_observation_noise(
        &mut self,
        noise: Option<&DMatrix<f64>>,
    ) -> Result<(), FilterError> {
        self.observation_noise = validate_noise(noise, NoiseModel::Observation)?;
        Ok(())
    }

    /// Draw `n_samples` coordinate pairs from the belief, with
    /// replacement, weighted by each nonzero cell's probability mass.
    ///
    /// The nonzero weights must sum to exactly `1.0`: the filter never
    /// renormalizes, so concrete filters are responsible for keeping the
    /// belief normalized after every predict/update. Because the check is
    /// exact, sequential accumulation of mathematically normalized values
    /// can still fail it; callers wanting sampling must keep cell values
    /// exactly representable (e.g. dyadic rationals).
    ///
    /// # Errors
    /// [`FilterError::NoPositiveCells`] if no cell holds positive mass;
    /// [`FilterError::UnnormalizedWeights`] if the weights do not sum to
    /// `1.0`.
    pub fn sample(&mut self, n_samples: usize) -> Result<Vec<GridKey>, FilterError> {
        // Fixed traversal order keeps sampling reproducible for a given
        // generator.
        let mut cells = self.grid.nonzero_cells();
        cells.sort_unstable();
        if cells.is_empty() {
            return Err(FilterError::NoPositiveCells);
        }

        let mut keys = Vec::with_capacity(cells.len());
        let mut weights = Vec::with_capacity(cells.len());
        for &index in &cells {
            keys.push(self.grid.cell_key(index)?);
            weights.push(self.grid.data()[index]);
        }
        let sum: f64 = weights.iter().sum();
        if sum != 1.0 {
            return Err(FilterError::UnnormalizedWeights { sum });
        }

        log::trace!(
            "drawing {} samples from {} nonzero cells",
            n_samples,
            keys.len()
        );

        let mut samples = Vec::with_capacity(n_samples);
        for _ in 0..n_samples {
            let u: f64 = self.rng.gen();
            let mut acc = 0.0;
            let mut chosen = keys[keys.len() - 1];
            for (&key, &weight) in keys.iter().zip(&weights) {
                acc += weight;
                if u < acc {
                    chosen = key;
                    break;
                }
            }
            samples.push(chosen);
        }
        Ok(samples)
    }
}

impl<R: Rng> HistogramFilter for HistogramFilterBase<R> {
    type Command = DVector<f64>;
    type Observation = DVector<f64>;

    fn predict(&mut self, _command: &Self::Command) -> Result<(), FilterError> {
        Err(FilterError::NotImplemented {
            operation: "predict",
        })
    }

    fn update(
        &mut self,
        _observation: &Self::Observation,
        _noise: Option<&DMatrix<f64>>,
    ) -> Result<(), FilterError> {
        Err(FilterError::NotImplemented {
            operation: "update",
        })
    }
}

/// The default noise model: the 1x1 identity `[[1.0]]`.
fn identity_noise() -> DMatrix<f64> {
    DMatrix::from_element(1, 1, 1.0)
}

/// Resolve an optional caller matrix into an owned, validated noise
/// matrix.
fn validate_noise(
    noise: Option<&DMatrix<f64>>,
    model: NoiseModel,
) -> Result<DMatrix<f64>, FilterError> {
    let noise = match noise {
        Some(noise) => noise.clone(),
        None => identity_noise(),
    };
    if noise.nrows() != noise.ncols() || noise.sum() != 1.0 {
        return Err(FilterError::InvalidNoise { model });
    }
    Ok(noise)
}
