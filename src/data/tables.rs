//! Typed Tables Module
//! Converts loaded DataFrames into the column layouts the analyses consume.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("column '{column}' has no value at row {row}")]
    NullValue { column: String, row: usize },
    #[error("column '{column}' row {row}: '{value}' is not a number")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedType { column: String, dtype: String },
    #[error("column '{column}' row {row}: '{value}' is not a boolean")]
    InvalidFlag {
        column: String,
        row: usize,
        value: String,
    },
}

/// One sample of the prime-counting function and its approximations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountingSample {
    pub x: f64,
    pub pi_x: f64,
    pub pnt_approximation: f64,
    pub li_approximation: f64,
    pub pnt_relative_error: f64,
    pub li_relative_error: f64,
}

/// π(x) sampled at chosen x values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountingFunctionTable {
    pub rows: Vec<CountingSample>,
}

impl CountingFunctionTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TryFrom<&DataFrame> for CountingFunctionTable {
    type Error = TableError;

    fn try_from(df: &DataFrame) -> Result<Self, Self::Error> {
        let x = f64_column(df, "x")?;
        let pi_x = f64_column(df, "pi_x")?;
        let pnt_approximation = f64_column(df, "pnt_approximation")?;
        let li_approximation = f64_column(df, "li_approximation")?;
        let pnt_relative_error = f64_column(df, "pnt_relative_error")?;
        let li_relative_error = f64_column(df, "li_relative_error")?;

        let rows = (0..df.height())
            .map(|i| CountingSample {
                x: x[i],
                pi_x: pi_x[i],
                pnt_approximation: pnt_approximation[i],
                li_approximation: li_approximation[i],
                pnt_relative_error: pnt_relative_error[i],
                li_relative_error: li_relative_error[i],
            })
            .collect();

        Ok(Self { rows })
    }
}

/// Consecutive-prime gaps, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GapsTable {
    pub gap: Vec<f64>,
    pub log_prime: Vec<f64>,
    pub gap_over_log: Vec<f64>,
}

impl GapsTable {
    pub fn len(&self) -> usize {
        self.gap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gap.is_empty()
    }
}

impl TryFrom<&DataFrame> for GapsTable {
    type Error = TableError;

    fn try_from(df: &DataFrame) -> Result<Self, Self::Error> {
        Ok(Self {
            gap: f64_column(df, "gap")?,
            log_prime: f64_column(df, "log_prime")?,
            gap_over_log: f64_column(df, "gap_over_log")?,
        })
    }
}

/// Dense sampling of π(x). Only the row count is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DenseTable {
    pub row_count: usize,
}

impl From<&DataFrame> for DenseTable {
    fn from(df: &DataFrame) -> Self {
        Self {
            row_count: df.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeProperty {
    pub prime: i64,
    pub is_twin_prime: bool,
}

/// Enumerated primes with their twin-prime flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesTable {
    pub rows: Vec<PrimeProperty>,
}

impl PropertiesTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TryFrom<&DataFrame> for PropertiesTable {
    type Error = TableError;

    fn try_from(df: &DataFrame) -> Result<Self, Self::Error> {
        let primes = i64_column(df, "prime")?;
        let flags = bool_column(df, "is_twin_prime")?;

        let rows = primes
            .into_iter()
            .zip(flags)
            .map(|(prime, is_twin_prime)| PrimeProperty {
                prime,
                is_twin_prime,
            })
            .collect();

        Ok(Self { rows })
    }
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, TableError> {
    df.column(name)
        .map_err(|_| TableError::MissingColumn(name.to_string()))
}

/// Cast a column to a numeric type.
///
/// Cells that are present but fail the conversion are reported with their
/// original text instead of surfacing later as nulls.
fn numeric_column(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Column, TableError> {
    let raw = column(df, name)?;
    let values = raw.cast(dtype)?;

    let cast_nulls = values.is_null();
    let raw_nulls = raw.is_null();
    let failed = (&cast_nulls)
        .into_iter()
        .zip(&raw_nulls)
        .position(|(cast_null, raw_null)| cast_null == Some(true) && raw_null == Some(false));

    if let Some(row) = failed {
        let value = raw.get(row)?.to_string().trim_matches('"').to_string();
        return Err(TableError::NotNumeric {
            column: name.to_string(),
            row,
            value,
        });
    }

    Ok(values)
}

/// Extract a column as f64 values, rejecting nulls.
fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, TableError> {
    let values = numeric_column(df, name, &DataType::Float64)?;
    let ca = values.f64()?;

    ca.into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| TableError::NullValue {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}

fn i64_column(df: &DataFrame, name: &str) -> Result<Vec<i64>, TableError> {
    let values = numeric_column(df, name, &DataType::Int64)?;
    let ca = values.i64()?;

    ca.into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| TableError::NullValue {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}

/// Extract a boolean flag column.
///
/// Accepts native booleans, `true`/`false` text in any case, or integers
/// (non-zero is true).
fn bool_column(df: &DataFrame, name: &str) -> Result<Vec<bool>, TableError> {
    let col = column(df, name)?;
    let null = |row| TableError::NullValue {
        column: name.to_string(),
        row,
    };

    match col.dtype() {
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| null(row)))
            .collect(),
        DataType::String => col
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                let v = v.ok_or_else(|| null(row))?;
                match v.trim().to_ascii_lowercase().as_str() {
                    "true" => Ok(true),
                    "false" => Ok(false),
                    _ => Err(TableError::InvalidFlag {
                        column: name.to_string(),
                        row,
                        value: v.to_string(),
                    }),
                }
            })
            .collect(),
        dtype if dtype.is_integer() => Ok(i64_column(df, name)?
            .into_iter()
            .map(|v| v != 0)
            .collect()),
        dtype => Err(TableError::UnsupportedType {
            column: name.to_string(),
            dtype: dtype.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: Vec<Column>) -> DataFrame {
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn counting_table_reads_integer_and_float_columns() {
        let df = frame(vec![
            Column::new("x".into(), vec![10i64, 100]),
            Column::new("pi_x".into(), vec![4i64, 25]),
            Column::new("pnt_approximation".into(), vec![4.3, 21.7]),
            Column::new("li_approximation".into(), vec![4.8, 29.1]),
            Column::new("pnt_relative_error".into(), vec![0.07, 0.13]),
            Column::new("li_relative_error".into(), vec![0.05, 0.16]),
        ]);

        let table = CountingFunctionTable::try_from(&df).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].x, 100.0);
        assert_eq!(table.rows[0].pi_x, 4.0);
        assert_eq!(table.rows[1].li_relative_error, 0.16);
    }

    #[test]
    fn missing_column_is_named() {
        let df = frame(vec![
            Column::new("gap".into(), vec![2i64, 4]),
            Column::new("log_prime".into(), vec![1.1, 1.6]),
        ]);

        let err = GapsTable::try_from(&df).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(ref c) if c == "gap_over_log"));
        assert!(err.to_string().contains("gap_over_log"));
    }

    #[test]
    fn null_cell_is_rejected() {
        let df = frame(vec![
            Column::new("gap".into(), vec![Some(2.0), None]),
            Column::new("log_prime".into(), vec![1.1, 1.6]),
            Column::new("gap_over_log".into(), vec![1.8, 2.5]),
        ]);

        let err = GapsTable::try_from(&df).unwrap_err();
        assert!(matches!(err, TableError::NullValue { row: 1, .. }));
    }

    #[test]
    fn non_numeric_cell_is_named() {
        let df = frame(vec![
            Column::new("gap".into(), vec!["2", "abc"]),
            Column::new("log_prime".into(), vec![1.1, 1.6]),
            Column::new("gap_over_log".into(), vec![1.8, 2.5]),
        ]);

        let err = GapsTable::try_from(&df).unwrap_err();
        match err {
            TableError::NotNumeric { column, row, value } => {
                assert_eq!(column, "gap");
                assert_eq!(row, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn twin_flag_accepts_text_booleans() {
        let df = frame(vec![
            Column::new("prime".into(), vec![2i64, 3, 5]),
            Column::new("is_twin_prime".into(), vec!["False", "True", "true"]),
        ]);

        let table = PropertiesTable::try_from(&df).unwrap();
        let flags: Vec<bool> = table.rows.iter().map(|r| r.is_twin_prime).collect();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn twin_flag_accepts_native_and_integer_columns() {
        let native = frame(vec![
            Column::new("prime".into(), vec![3i64, 23]),
            Column::new("is_twin_prime".into(), vec![true, false]),
        ]);
        let numeric = frame(vec![
            Column::new("prime".into(), vec![3i64, 23]),
            Column::new("is_twin_prime".into(), vec![1i64, 0]),
        ]);

        let a = PropertiesTable::try_from(&native).unwrap();
        let b = PropertiesTable::try_from(&numeric).unwrap();
        assert_eq!(a, b);
        assert!(a.rows[0].is_twin_prime);
    }

    #[test]
    fn twin_flag_rejects_other_text() {
        let df = frame(vec![
            Column::new("prime".into(), vec![3i64]),
            Column::new("is_twin_prime".into(), vec!["maybe"]),
        ]);

        let err = PropertiesTable::try_from(&df).unwrap_err();
        assert!(matches!(err, TableError::InvalidFlag { row: 0, .. }));
    }

    #[test]
    fn dense_keeps_row_count() {
        let df = frame(vec![Column::new("x".into(), vec![1i64, 2, 3])]);
        assert_eq!(DenseTable::from(&df).row_count, 3);
    }
}
