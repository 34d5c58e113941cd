use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::ProgramRecord;

/// Errors that can occur while loading the program catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable program catalog
///
/// The store is the injected data source the engine ranks against; today
/// it is backed by a JSON file, but `from_records` keeps the origin
/// swappable (API response, database query, test fixture).
#[derive(Debug, Clone)]
pub struct CatalogStore {
    programs: Vec<ProgramRecord>,
}

impl CatalogStore {
    /// Load the catalog from a JSON file containing an array of programs
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let programs = Self::parse(&raw)?;

        tracing::info!(
            "Loaded {} programs from {}",
            programs.len(),
            path.as_ref().display()
        );

        Ok(Self { programs })
    }

    /// Build a store from already-loaded records
    pub fn from_records(programs: Vec<ProgramRecord>) -> Self {
        Self { programs }
    }

    fn parse(raw: &str) -> Result<Vec<ProgramRecord>, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn programs(&self) -> &[ProgramRecord] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
