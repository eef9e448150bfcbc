//! In-memory record source

use crate::domain::errors::IngestError;
use crate::ports::outbound::{RecordRow, RecordSource, RecordStream};

/// Record source over rows held in memory.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    name: String,
    columns: Vec<String>,
    rows: Vec<RecordRow>,
}

impl InMemorySource {
    pub fn new<S: AsRef<str>>(name: &str, columns: &[&str], rows: Vec<Vec<S>>) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.iter().map(|f| f.as_ref().to_string()).collect())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> Result<RecordStream, IngestError> {
        Ok(RecordStream {
            columns: self.columns.clone(),
            rows: Box::new(self.rows.clone().into_iter().map(Ok)),
        })
    }
}
