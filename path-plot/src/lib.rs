//! Charts and tables for a shrinkage `Report`

#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod error;
pub mod plot;
mod table;

pub use error::{PlotError, Result};
pub use plot::plot_paths;
pub use table::{coefficient_table, metrics_table, TableBuilder, MAX_COEFFICIENT_ROWS};
