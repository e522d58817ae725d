//! Dataset locations.

use std::path::{Path, PathBuf};

pub const COUNTING_FUNCTION_FILE: &str = "prime_counting_function.csv";
pub const GAPS_FILE: &str = "prime_gaps_analysis.csv";
pub const DENSE_FILE: &str = "prime_distribution_dense.csv";
pub const PROPERTIES_FILE: &str = "primes_properties.csv";

/// Paths of the four input datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub counting_function: PathBuf,
    pub gaps: PathBuf,
    pub dense: PathBuf,
    pub properties: PathBuf,
}

impl Default for DatasetPaths {
    /// Fixed names, relative to the working directory.
    fn default() -> Self {
        Self {
            counting_function: PathBuf::from(COUNTING_FUNCTION_FILE),
            gaps: PathBuf::from(GAPS_FILE),
            dense: PathBuf::from(DENSE_FILE),
            properties: PathBuf::from(PROPERTIES_FILE),
        }
    }
}

impl DatasetPaths {
    /// Same fixed names, rooted under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            counting_function: dir.join(COUNTING_FUNCTION_FILE),
            gaps: dir.join(GAPS_FILE),
            dense: dir.join(DENSE_FILE),
            properties: dir.join(PROPERTIES_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_relative() {
        let paths = DatasetPaths::default();
        assert_eq!(paths.gaps, PathBuf::from("prime_gaps_analysis.csv"));
        assert!(paths.properties.is_relative());
    }

    #[test]
    fn in_dir_roots_every_file() {
        let paths = DatasetPaths::in_dir("/data");
        assert_eq!(
            paths.counting_function,
            PathBuf::from("/data/prime_counting_function.csv")
        );
        assert_eq!(paths.dense, PathBuf::from("/data/prime_distribution_dense.csv"));
    }
}
