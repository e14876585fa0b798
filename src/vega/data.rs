//! Inline dataset embedding: cleaned DataFrame rows as spec `values`.

use polars::prelude::*;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Column '{column}' has unsupported dtype {dtype} for embedding")]
    UnsupportedDtype { column: String, dtype: String },
}

/// Top-level `data` block holding the rows shared by every view.
#[derive(Serialize, Debug, Clone)]
pub struct InlineData {
    pub values: Vec<Map<String, Value>>,
}

/// Convert a cleaned frame into embeddable records.
///
/// Supports the string/f64/i64 columns the cleaner produces; nulls become
/// JSON nulls so the runtime's aggregates skip them.
pub fn records(df: &DataFrame) -> Result<InlineData, DataError> {
    let mut rows = vec![Map::new(); df.height()];

    for column in df.get_columns() {
        let name = column.name().to_string();
        match column.dtype() {
            DataType::String => {
                let ca = column.str()?;
                for (i, row) in rows.iter_mut().enumerate() {
                    let value = ca
                        .get(i)
                        .map_or(Value::Null, |s| Value::String(s.to_string()));
                    row.insert(name.clone(), value);
                }
            }
            DataType::Float64 => {
                let ca = column.f64()?;
                for (i, row) in rows.iter_mut().enumerate() {
                    let value = ca
                        .get(i)
                        .and_then(Number::from_f64)
                        .map_or(Value::Null, Value::Number);
                    row.insert(name.clone(), value);
                }
            }
            DataType::Int64 => {
                let ca = column.i64()?;
                for (i, row) in rows.iter_mut().enumerate() {
                    let value = ca.get(i).map_or(Value::Null, |n| Value::Number(n.into()));
                    row.insert(name.clone(), value);
                }
            }
            other => {
                return Err(DataError::UnsupportedDtype {
                    column: name,
                    dtype: other.to_string(),
                })
            }
        }
    }

    Ok(InlineData { values: rows })
}
