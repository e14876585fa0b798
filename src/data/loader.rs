//! CSV Data Loader Module
//! Reads the Play Store metadata export with Polars.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("CSV contained no rows: {0}")]
    Empty(String),
}

/// Loads the raw app-metadata CSV with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Read a CSV file into a DataFrame.
    ///
    /// Schema inference runs over the first 10k rows, and malformed rows are
    /// skipped instead of aborting the load; the Play Store export contains
    /// a few rows with shifted columns.
    pub fn load_csv(file_path: &str) -> Result<DataFrame, LoaderError> {
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10_000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        if df.height() == 0 {
            return Err(LoaderError::Empty(file_path.to_string()));
        }

        tracing::info!(rows = df.height(), path = file_path, "loaded CSV");
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_csv() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "App,Rating").unwrap();
        writeln!(file, "Photo Editor,4.1").unwrap();
        writeln!(file, "Sketch It,4.5").unwrap();
        file.flush().unwrap();

        let df = DataLoader::load_csv(file.path().to_str().unwrap()).unwrap();
        assert_eq!(df.height(), 2);
        assert!(df.column("App").is_ok());
        assert!(df.column("Rating").is_ok());
    }

    #[test]
    fn test_load_csv_header_only_is_empty() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "App,Rating").unwrap();
        file.flush().unwrap();

        let err = DataLoader::load_csv(file.path().to_str().unwrap());
        assert!(matches!(err, Err(LoaderError::Empty(_))));
    }

    #[test]
    fn test_load_csv_missing_file() {
        assert!(DataLoader::load_csv("no_such_file.csv").is_err());
    }
}
