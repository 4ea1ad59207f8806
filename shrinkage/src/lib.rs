//! Synthetic data, regularization paths and metrics for comparing
//! Lasso and Ridge shrinkage

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

#[cfg(test)]
use pretty_env_logger as _;
#[cfg(test)]
use round as _;

mod dataset;
mod error;
mod evaluate;
mod family;
pub mod metrics;
mod params;
mod report;
mod split;
mod sweep;

pub use dataset::Dataset;
pub use error::{Result, ShrinkageError};
pub use evaluate::{evaluate, Evaluation, FamilyMetrics};
pub use family::Family;
pub use params::Params;
pub use report::Report;
pub use split::{Split, Subset, TEST_FRACTION};
pub use sweep::{log_space, strength_grid, sweep, CoefficientPath, GRID_LEN};
