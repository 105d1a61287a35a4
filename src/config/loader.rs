//! Tax table loading functionality.
//!
//! This module provides the [`TaxTableLoader`] type for loading payroll tax
//! tables from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{TableMetadata, TaxTables};

/// Loads and provides access to payroll tax tables.
///
/// The loader reads YAML files from a directory and selects the table
/// effective for a given computation date.
///
/// # Directory Structure
///
/// ```text
/// config/grupo2s/
/// ├── metadata.yaml        # Table set metadata
/// └── tables/
///     └── 2024-01-01.yaml  # Tables effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use grupo2s_engine::config::TaxTableLoader;
/// use chrono::NaiveDate;
///
/// let loader = TaxTableLoader::load("./config/grupo2s").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let tables = loader.tables_for(date).unwrap();
/// println!("INSS brackets: {}", tables.inss.brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct TaxTableLoader {
    metadata: TableMetadata,
    tables: Vec<TaxTables>,
}

impl TaxTableLoader {
    /// Loads tax tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/grupo2s")
    ///
    /// # Returns
    ///
    /// Returns a `TaxTableLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tables directory contains no table files
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("metadata.yaml");
        let metadata = Self::load_yaml::<TableMetadata>(&metadata_path)?;

        let tables_dir = path.join("tables");
        let mut tables = Self::load_tables(&tables_dir)?;
        tables.sort_by_key(|t| t.effective_date);

        Ok(Self { metadata, tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all table files from the tables directory.
    fn load_tables(tables_dir: &Path) -> EngineResult<Vec<TaxTables>> {
        let tables_dir_str = tables_dir.display().to_string();

        if !tables_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: tables_dir_str,
            });
        }

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<TaxTables>(&path)?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", tables_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the table set metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Returns the tax table effective on the given date.
    ///
    /// The method finds the most recent table whose effective date is on or
    /// before the given date, or `TableNotFound` when the date precedes every
    /// loaded table.
    pub fn tables_for(&self, date: NaiveDate) -> EngineResult<&TaxTables> {
        self.tables
            .iter()
            .rev()
            .find(|t| t.effective_date <= date)
            .ok_or(EngineError::TableNotFound { date })
    }

    /// Returns the most recent tax table.
    pub fn latest(&self) -> &TaxTables {
        // load() rejects empty table sets, so the last element exists.
        &self.tables[self.tables.len() - 1]
    }
}
