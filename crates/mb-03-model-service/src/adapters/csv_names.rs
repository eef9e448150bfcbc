//! CSV-backed name mapping
//!
//! Loaded once from a file with `ProductID` and `ProductName` columns. A
//! missing or malformed file leaves the mapping empty so every id falls back
//! to itself; display names are never allowed to stop the service.

use crate::ports::outbound::{ItemNameLookup, LookupError};
use mb_01_ingestion::{DelimitedFileSource, RecordSource};
use parking_lot::Mutex;
use shared_types::ItemId;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{error, info, warn};

const ID_COLUMN: &str = "ProductID";
const NAME_COLUMN: &str = "ProductName";

/// Name mapping read from a delimited file.
#[derive(Debug, Default)]
pub struct CsvNameLookup {
    names: HashMap<ItemId, String>,
    warned: Mutex<HashSet<ItemId>>,
}

impl CsvNameLookup {
    /// Load the mapping. Never fails; problems are logged and yield an
    /// empty (or partial) mapping.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let source = DelimitedFileSource::new(path);
        let names = match read_names(&source) {
            Ok(names) => {
                info!(
                    path = %source.path().display(),
                    names = names.len(),
                    "[mb-03] Loaded product names"
                );
                names
            }
            Err(reason) => {
                error!(
                    path = %source.path().display(),
                    %reason,
                    "[mb-03] Product names unavailable, ids will be shown"
                );
                HashMap::new()
            }
        };
        Self {
            names,
            warned: Mutex::new(HashSet::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn read_names(source: &DelimitedFileSource) -> Result<HashMap<ItemId, String>, String> {
    let stream = source.open().map_err(|e| e.to_string())?;
    let position = |column: &str| {
        stream
            .columns
            .iter()
            .position(|c| c.trim() == column)
            .ok_or_else(|| format!("missing column '{}'", column))
    };
    let id_idx = position(ID_COLUMN)?;
    let name_idx = position(NAME_COLUMN)?;

    let mut names = HashMap::new();
    for row in stream.rows {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, "[mb-03] Skipping unreadable product name row");
                continue;
            }
        };
        let (Some(id), Some(name)) = (row.get(id_idx), row.get(name_idx)) else {
            continue;
        };
        if let Some(id) = ItemId::parse(id) {
            names.insert(id, name.trim().to_string());
        }
    }
    Ok(names)
}

impl ItemNameLookup for CsvNameLookup {
    fn display_name(&self, id: &ItemId) -> Result<Option<String>, LookupError> {
        if let Some(name) = self.names.get(id) {
            return Ok(Some(name.clone()));
        }
        if self.warned.lock().insert(id.clone()) {
            warn!(item = %id, "[mb-03] No product name, using id");
        }
        Ok(None)
    }
}
