//! Fixed in-memory name mapping

use crate::ports::outbound::{ItemNameLookup, LookupError};
use shared_types::ItemId;
use std::collections::HashMap;

/// Names supplied up front; ids are normalized like item ids.
#[derive(Clone, Debug, Default)]
pub struct StaticNameLookup {
    names: HashMap<ItemId, String>,
}

impl StaticNameLookup {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(id, name)| (ItemId::new(id.as_ref()), name.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ItemNameLookup for StaticNameLookup {
    fn display_name(&self, id: &ItemId) -> Result<Option<String>, LookupError> {
        Ok(self.names.get(id).cloned())
    }
}
