//! Dashboards module - the two linked Play Store compositions

pub mod heatmap;
pub mod linked;

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::vega::DataError;

/// Errors composing a dashboard from a cleaned frame.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Cleaned dataset has no install counts")]
    NoInstallCounts,
}
