//! Filtered, lazily-produced views over the linked database

mod filters;

pub use filters::{limit, ApproachFilter, LinkedApproach, Query};
