//! The reference master table: an immutable code → description lookup built
//! once at startup from a tabular dataset.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::MasterDataError;
use crate::types::ReferenceEntry;

/// Column names after header normalization.
const CODE_COLUMN: &str = "HSNCode";
const DESCRIPTION_COLUMN: &str = "Description";

/// Immutable mapping from normalized HSN code to its description.
///
/// Built once from the reference dataset; never mutated afterwards. Shared
/// read-only across concurrent validations without locking.
#[derive(Debug, Clone)]
pub struct MasterTable {
    entries: HashMap<String, String>,
}

impl MasterTable {
    /// Loads the master table from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, MasterDataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MasterDataError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_csv_reader(file)?;
        tracing::info!(
            path = %path.display(),
            codes = table.len(),
            "loaded HSN master data"
        );
        Ok(table)
    }

    /// Loads the master table from any CSV source.
    ///
    /// Header names are normalized before matching: surrounding whitespace is
    /// trimmed and internal spaces removed, so `"HSN Code "` matches
    /// `HSNCode`. Code and description values are trimmed per row. Rows whose
    /// code is empty after trimming are skipped. If the dataset contains the
    /// same code twice, the last row wins.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, MasterDataError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let code_idx = find_column(&headers, CODE_COLUMN)
            .ok_or(MasterDataError::MissingColumn(CODE_COLUMN))?;
        let description_idx = find_column(&headers, DESCRIPTION_COLUMN)
            .ok_or(MasterDataError::MissingColumn(DESCRIPTION_COLUMN))?;

        let mut entries = HashMap::new();
        for record in csv_reader.records() {
            let record = record?;
            let code = record.get(code_idx).unwrap_or("").trim();
            if code.is_empty() {
                continue;
            }
            let description = record.get(description_idx).unwrap_or("").trim();
            entries.insert(code.to_string(), description.to_string());
        }

        Ok(Self { entries })
    }

    /// Builds a table from in-memory entries, for callers that don't go
    /// through a dataset file (tests, mainly). Same last-wins rule.
    pub fn from_entries(entries: impl IntoIterator<Item = ReferenceEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.code.trim().to_string(), e.description.trim().to_string()))
                .collect(),
        }
    }

    /// Looks up the description for an exact code. No leading-zero
    /// normalization: `"0101"` and `"101"` are distinct keys.
    pub fn description(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds a column by normalized header name (trimmed, internal spaces
/// removed).
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| normalize_header(header) == name)
}

fn normalize_header(header: &str) -> String {
    header.trim().replace(' ', "")
}
