//! Outbound Ports (Driven Ports / SPI)

use shared_types::ItemId;
use thiserror::Error;

/// Failure to resolve a display name
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Name lookup unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed name entry for {id}: {reason}")]
    Malformed { id: String, reason: String },
}

/// Item id to display name mapping, used only when formatting output.
pub trait ItemNameLookup: Send + Sync {
    /// `Ok(None)` when the id is unknown.
    fn display_name(&self, id: &ItemId) -> Result<Option<String>, LookupError>;

    /// Display name, falling back to the id itself.
    fn name_or_id(&self, id: &ItemId) -> Result<String, LookupError> {
        Ok(self.display_name(id)?.unwrap_or_else(|| id.to_string()))
    }

    /// Names for every id, failing on the first lookup error.
    fn names(&self, ids: &[ItemId]) -> Result<Vec<String>, LookupError> {
        ids.iter().map(|id| self.name_or_id(id)).collect()
    }
}
