//! The stepping contract for concrete histogram filters.

use nalgebra::DMatrix;

use super::errors::FilterError;

/// The two-step contract every concrete histogram filter provides.
///
/// A concrete filter mutates its belief grid in place: `predict` applies a
/// motion model for a control command, `update` folds in an observation
/// likelihood. The base type declares both but implements neither; invoking
/// them on [`HistogramFilterBase`](super::HistogramFilterBase) fails with
/// [`FilterError::NotImplemented`].
///
/// Command and observation shapes are filter-specific and unconstrained
/// here.
pub trait HistogramFilter {
    /// The control-command type consumed by `predict`
    type Command;

    /// The observation type consumed by `update`
    type Observation;

    /// Apply the motion model for `command`, mutating the belief in place.
    fn predict(&mut self, command: &Self::Command) -> Result<(), FilterError>;

    /// Fold the observation into the belief, mutating it in place.
    ///
    /// # Arguments
    /// * `observation` - The measurement to incorporate
    /// * `noise` - Optional noise matrix overriding the configured
    ///   observation noise for this step
    fn update(
        &mut self,
        observation: &Self::Observation,
        noise: Option<&DMatrix<f64>>,
    ) -> Result<(), FilterError>;
}
