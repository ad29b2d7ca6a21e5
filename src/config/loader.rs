//! Rate dataset loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the IRS
//! withholding rate dataset from a YAML or JSON document.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::calculation::DeductionFormula;
use crate::error::{EngineError, EngineResult};

use super::types::{DatasetMetadata, Deduction, RateDataset, RateTable, TableId};

/// Loads, validates and provides access to the withholding rate dataset.
///
/// The dataset is a single document with a `meta` section and a list of
/// `tables`. The format is chosen from the file extension: `.yaml`/`.yml`
/// are read with `serde_yaml`, `.json` with `serde_json`.
///
/// # Example
///
/// ```no_run
/// use salary_simulator::config::{ConfigLoader, TableId};
///
/// let loader = ConfigLoader::load("./config/continente-2026.yaml").unwrap();
///
/// println!("Dataset for {}", loader.metadata().region);
/// let table = loader.get_table(TableId::I).unwrap();
/// println!("Table I has {} bands", table.bands.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dataset: RateDataset,
}

impl ConfigLoader {
    /// Loads the dataset from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML/JSON or lacks required fields (`ConfigParseError`)
    /// - A table breaks a structural rule (`InvalidDataset`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_simulator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/continente-2026.yaml")?;
    /// # Ok::<(), salary_simulator::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let dataset = if is_json {
            Self::parse_json(&content, &path_str)?
        } else {
            Self::parse_yaml(&content, &path_str)?
        };

        Self::from_dataset(dataset)
    }

    /// Loads the dataset from a YAML document held in memory.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::from_dataset(Self::parse_yaml(content, "<yaml>")?)
    }

    /// Loads the dataset from a JSON document held in memory.
    pub fn from_json_str(content: &str) -> EngineResult<Self> {
        Self::from_dataset(Self::parse_json(content, "<json>")?)
    }

    /// Wraps an already-built dataset after validating it.
    pub fn from_dataset(dataset: RateDataset) -> EngineResult<Self> {
        validate_dataset(&dataset)?;

        info!(
            country = %dataset.meta.country,
            region = %dataset.meta.region,
            valid_from = %dataset.meta.valid_from,
            valid_to = %dataset.meta.valid_to,
            tables = dataset.tables.len(),
            "Loaded withholding rate dataset"
        );

        Ok(Self { dataset })
    }

    fn parse_yaml(content: &str, source: &str) -> EngineResult<RateDataset> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    fn parse_json(content: &str, source: &str) -> EngineResult<RateDataset> {
        serde_json::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> &RateDataset {
        &self.dataset
    }

    /// Consumes the loader and returns the dataset.
    pub fn into_dataset(self) -> RateDataset {
        self.dataset
    }

    /// Returns the dataset metadata.
    pub fn metadata(&self) -> &DatasetMetadata {
        self.dataset.metadata()
    }

    /// Gets a table by its id, or `TableNotFound`.
    pub fn get_table(&self, id: TableId) -> EngineResult<&RateTable> {
        self.dataset
            .table(id)
            .ok_or(EngineError::TableNotFound { table: id })
    }
}

/// Checks the structural rules every table must satisfy.
///
/// Each table id appears once, bounded bands have strictly increasing
/// `upTo` values, exactly one band is open-ended and every formula
/// deduction parses.
fn validate_dataset(dataset: &RateDataset) -> EngineResult<()> {
    let mut seen = HashSet::new();

    for table in &dataset.tables {
        let invalid = |message: String| EngineError::InvalidDataset {
            table: table.id.to_string(),
            message,
        };

        if !seen.insert(table.id) {
            return Err(invalid("table id appears more than once".to_string()));
        }

        let open_bands = table.bands.iter().filter(|band| band.is_open()).count();
        if open_bands != 1 {
            return Err(invalid(format!(
                "expected exactly one open-ended band, found {}",
                open_bands
            )));
        }

        if table
            .bands
            .iter()
            .any(|band| band.is_open() && band.over.is_none())
        {
            return Err(invalid("open-ended band is missing 'over'".to_string()));
        }

        let mut bounds: Vec<_> = table.bands.iter().filter_map(|band| band.up_to).collect();
        bounds.sort();
        if bounds.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(invalid("duplicate 'upTo' bound".to_string()));
        }

        for band in &table.bands {
            if let Deduction::Formula { formula } = &band.deduction {
                DeductionFormula::from_str(formula)?;
            }
        }
    }

    Ok(())
}
