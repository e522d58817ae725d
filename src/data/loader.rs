//! CSV Data Loader Module
//! Reads the four prime datasets with Polars and converts them into typed tables.

use crate::config::DatasetPaths;
use crate::data::tables::{
    CountingFunctionTable, DenseTable, GapsTable, PropertiesTable, TableError,
};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("dataset not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read CSV {}: {source}", .path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("invalid dataset {}: {source}", .path.display())]
    InvalidTable {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

/// All four datasets, fully loaded.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub counting_function: CountingFunctionTable,
    pub gaps: GapsTable,
    pub dense: DenseTable,
    pub properties: PropertiesTable,
}

/// Loads the prime datasets from a fixed set of paths.
pub struct DatasetLoader {
    paths: DatasetPaths,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(DatasetPaths::default())
    }
}

impl DatasetLoader {
    pub fn new(paths: DatasetPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &DatasetPaths {
        &self.paths
    }

    /// Load every dataset. The first failure aborts the whole load.
    pub fn load_all(&self) -> Result<Datasets, LoaderError> {
        let counting_function = Self::load_table(&self.paths.counting_function)?;
        let gaps = Self::load_table(&self.paths.gaps)?;
        let dense = DenseTable::from(&Self::load_csv(&self.paths.dense)?);
        let properties = Self::load_table(&self.paths.properties)?;

        Ok(Datasets {
            counting_function,
            gaps,
            dense,
            properties,
        })
    }

    /// Load a CSV file using Polars.
    pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let csv_error = |source| LoaderError::CsvError {
            path: path.to_path_buf(),
            source,
        };

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()
            .map_err(csv_error)?
            .collect()
            .map_err(csv_error)?;

        info!(path = %path.display(), rows = df.height(), "loaded dataset");
        debug!(columns = ?df.get_column_names(), "dataset schema");

        Ok(df)
    }

    fn load_table<T>(path: &Path) -> Result<T, LoaderError>
    where
        T: for<'a> TryFrom<&'a DataFrame, Error = TableError>,
    {
        let df = Self::load_csv(path)?;
        T::try_from(&df).map_err(|source| LoaderError::InvalidTable {
            path: path.to_path_buf(),
            source,
        })
    }
}
