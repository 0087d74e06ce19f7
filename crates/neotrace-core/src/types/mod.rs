//! Core entity types for the close-approach database

pub mod approach;
pub mod neo;

pub use approach::CloseApproach;
pub use neo::NearEarthObject;
