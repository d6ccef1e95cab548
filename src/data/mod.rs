//! Data module - dataset types and JSON loading

mod dataset;
mod loader;

pub use dataset::{CategoryMapping, DatasetBundle, DatasetError};
pub use loader::{DatasetLoader, LoaderError};
