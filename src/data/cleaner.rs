//! Data Cleaner Module
//! Drops incomplete rows and normalizes the numeric columns the dashboards read.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Required column '{0}' not present in CSV")]
    MissingColumn(String),
    #[error("No rows left after cleaning")]
    EmptyDataset,
}

/// Columns the dashboards encode, in cleaned-frame order.
pub const APP: &str = "App";
pub const CATEGORY: &str = "Category";
pub const CONTENT_RATING: &str = "Content Rating";
pub const RATING: &str = "Rating";
pub const REVIEWS: &str = "Reviews";
pub const INSTALLS: &str = "Installs";

/// Handles row filtering and numeric normalization.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean the raw frame for a dashboard.
    ///
    /// Rows with a missing value in any of `required` are dropped first.
    /// `Installs` strings are then parsed to integers and `Reviews`/`Rating`
    /// coerced to floats, with unparseable values kept as nulls. The result
    /// carries exactly the columns the charts encode.
    pub fn clean(df: &DataFrame, required: &[&str]) -> Result<DataFrame, CleanError> {
        for name in required {
            if df.column(name).is_err() {
                return Err(CleanError::MissingColumn((*name).to_string()));
            }
        }

        let complete = Self::drop_incomplete(df, required)?;

        let apps = Self::string_values(&complete, APP)?;
        let categories = Self::string_values(&complete, CATEGORY)?;
        let content_ratings = Self::string_values(&complete, CONTENT_RATING)?;
        let ratings = Self::float_values(&complete, RATING)?;
        let reviews = Self::float_values(&complete, REVIEWS)?;
        let installs = Self::install_values(&complete)?;

        let cleaned = DataFrame::new(vec![
            Column::new(APP.into(), apps),
            Column::new(CATEGORY.into(), categories),
            Column::new(CONTENT_RATING.into(), content_ratings),
            Column::new(RATING.into(), ratings),
            Column::new(REVIEWS.into(), reviews),
            Column::new(INSTALLS.into(), installs),
        ])?;

        if cleaned.height() == 0 {
            return Err(CleanError::EmptyDataset);
        }

        tracing::info!(
            rows = cleaned.height(),
            dropped = df.height() - cleaned.height(),
            "cleaned dataset"
        );
        Ok(cleaned)
    }

    /// Parse an install count like `"1,000,000+"`.
    ///
    /// Separators and the trailing `+` are stripped; anything that is not a
    /// plain digit string afterwards (e.g. `"Free"`) counts as zero.
    pub fn parse_installs(raw: &str) -> i64 {
        let digits: String = raw.chars().filter(|c| *c != '+' && *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return 0;
        }
        digits.parse().unwrap_or(0)
    }

    fn drop_incomplete(df: &DataFrame, required: &[&str]) -> Result<DataFrame, CleanError> {
        let mut keep = lit(true);
        for name in required {
            let mut present = col(*name).is_not_null();
            // A float NaN means a blank cell in this export.
            if df.column(name)?.dtype().is_float() {
                present = present.and(col(*name).is_not_nan());
            }
            keep = keep.and(present);
        }
        Ok(df.clone().lazy().filter(keep).collect()?)
    }

    fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, CleanError> {
        let column = df.column(name)?.cast(&DataType::String)?;
        let ca = column.str()?;
        Ok((0..ca.len()).map(|i| ca.get(i).map(str::to_string)).collect())
    }

    fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, CleanError> {
        let column = df.column(name)?.cast(&DataType::Float64)?;
        let ca = column.f64()?;
        Ok((0..ca.len())
            .map(|i| ca.get(i).filter(|v| !v.is_nan()))
            .collect())
    }

    fn install_values(df: &DataFrame) -> Result<Vec<i64>, CleanError> {
        let column = df.column(INSTALLS)?.cast(&DataType::String)?;
        let ca = column.str()?;
        Ok((0..ca.len())
            .map(|i| ca.get(i).map(Self::parse_installs).unwrap_or(0))
            .collect())
    }
}
