//! neotrace-core: in-memory linking database for near-Earth objects and
//! their close approaches
//!
//! Loads NEO records from a CSV source and close-approach records from the
//! JPL JSON feed, links every approach to its parent object, and answers
//! designation/name lookups plus filtered, lazily-produced queries whose
//! results can be exported as CSV or JSON.

pub mod config;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod query;
pub mod storage;
pub mod types;

pub use config::DataConfig;
pub use error::{Error, Result};
pub use ingestion::{load_approaches, load_neos};
pub use query::{limit, ApproachFilter, LinkedApproach, Query};
pub use storage::NeoDatabase;
pub use types::{CloseApproach, NearEarthObject};
