/*!
# Histogram Bayes filter base

Rust implementation of the indexing and bookkeeping layer a grid-based
(histogram) Bayes filter is built on: a discretized 2-D probability-mass
grid ("belief") over a pair of continuous axes.

## Features

- Bounded, evenly spaced 1-D discretizations with key ↔ bin-index
  conversion in both directions ([`GridAxis`])
- Dense 2-D belief storage addressed by continuous coordinates, with
  incremental tracking of the cells holding significant mass ([`Grid`])
- A filter base owning the belief, validated motion/observation noise
  matrices, and weighted sampling from the current belief
  ([`HistogramFilterBase`])
- A typed predict/update contract for concrete filters ([`HistogramFilter`])

## Modules

- [`grid`] - Axis discretization and the dense belief grid
- [`filter`] - Filter base, construction config, stepping contract
- [`common`] - Low-level utilities (deterministic RNG)

## Example

```rust,no_run
use histogram_bayes_filter_rs::{GridAxis, HistogramFilterBase, HistogramFilterConfig};

let x = GridAxis::new("x", 0.0, 1.0, 0.2).unwrap();
let y = GridAxis::new("y", 0.0, 1.0, 0.2).unwrap();

let config = HistogramFilterConfig::new(x, y);
let mut filter = HistogramFilterBase::new(config).unwrap();

// Place all probability mass in two cells, then sample from the belief.
filter.set((0.05, 0.05), 0.75).unwrap();
filter.set((0.2, 0.8), 0.25).unwrap();
let samples = filter.sample(10).unwrap();
assert_eq!(samples.len(), 10);
```
*/

/// Axis discretization and the dense 2-D belief grid
pub mod grid;

/// Filter base, construction config, and the predict/update contract
pub mod filter;

/// Low-level utilities (deterministic RNG)
pub mod common;

// Re-exports for convenience
pub use grid::errors::GridError;
pub use grid::{AxisIndex, AxisKey, Grid, GridAxis, GridIndex, GridKey, GridValue};
pub use filter::errors::{FilterError, NoiseModel};
pub use filter::{HistogramFilter, HistogramFilterBase, HistogramFilterConfig};
pub use common::rng::SimpleRng;
