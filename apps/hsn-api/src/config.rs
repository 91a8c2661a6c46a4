//! Startup configuration, read once from the environment.

use std::path::PathBuf;

/// How the process serves validations after the table is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Serve HTTP on the configured port.
    Http,
    /// Run the interactive terminal prompt instead.
    Terminal,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the reference master dataset (CSV).
    pub master_path: PathBuf,
    pub mode: RunMode,
    pub port: u16,
}

impl ServerConfig {
    /// Reads configuration from `HSN_MASTER_PATH`, `TERMINAL_MODE` and
    /// `PORT`. Unset variables fall back to defaults; only the mode flag is
    /// presence-based (any non-empty value selects the terminal).
    pub fn from_env() -> Self {
        let master_path = std::env::var("HSN_MASTER_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/hsn_master.csv"));

        let mode = match std::env::var("TERMINAL_MODE") {
            Ok(v) if !v.is_empty() => RunMode::Terminal,
            _ => RunMode::Http,
        };

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        Self {
            master_path,
            mode,
            port,
        }
    }
}
