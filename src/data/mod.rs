//! Data module - CSV loading and typed tables

mod loader;
mod tables;

pub use loader::{DatasetLoader, Datasets};
pub use tables::{
    CountingFunctionTable, CountingSample, DenseTable, GapsTable, PrimeProperty, PropertiesTable,
};
