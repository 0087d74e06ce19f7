//! Source-file loaders for the NEO and close-approach datasets

mod loader;

pub use loader::{load_approaches, load_neos};
