//! Configuration for data source locations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the two source datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file with one row per near-Earth object
    pub neo_csv_path: PathBuf,
    /// JSON file with the close-approach feed
    pub cad_json_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            neo_csv_path: PathBuf::from("data/neos.csv"),
            cad_json_path: PathBuf::from("data/cad.json"),
        }
    }
}
