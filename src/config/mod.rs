//! Rate dataset configuration for the salary simulator.
//!
//! This module provides functionality to load the IRS withholding rate
//! dataset (metadata plus tables I–VII) from YAML or JSON documents.
//!
//! # Example
//!
//! ```no_run
//! use salary_simulator::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/continente-2026.yaml").unwrap();
//! println!("Loaded dataset valid from {}", loader.metadata().valid_from);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Band, DatasetMetadata, Deduction, DependentsAssumption, RateDataset, RateTable, TableId,
};
