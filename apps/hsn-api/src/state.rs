//! Application state shared by all HTTP handlers.

use hsn_core::{MasterDataError, MasterTable};

use crate::config::ServerConfig;

/// Read-only state: the master table, loaded once at startup. Handlers share
/// it through an `Arc`; no writer exists after construction, so no locking.
pub struct AppState {
    pub table: MasterTable,
}

impl AppState {
    /// Loads the master table from the configured dataset path. Failure here
    /// is fatal; the process must not serve validations without the table.
    pub fn new(config: &ServerConfig) -> Result<Self, MasterDataError> {
        let table = MasterTable::from_csv_path(&config.master_path)?;
        Ok(Self { table })
    }

    /// Wraps an already-built table, for tests that use synthetic data.
    pub fn with_table(table: MasterTable) -> Self {
        Self { table }
    }
}
