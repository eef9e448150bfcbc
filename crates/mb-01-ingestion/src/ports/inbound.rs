//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::IngestOutcome;
use crate::domain::errors::IngestError;
use crate::ports::outbound::RecordSource;
use shared_types::CancellationToken;

/// Primary Transaction Ingestion API
pub trait TransactionIngestionApi: Send + Sync {
    /// Join `detail` rows to `header` rows on the transaction key and group
    /// item identifiers into one transaction per key.
    ///
    /// Fails with `DataSource` when either source cannot be opened or read,
    /// and with `Schema` when the key or item column is missing. Detail rows
    /// with no matching header are dropped and counted.
    fn ingest(
        &self,
        header: &dyn RecordSource,
        detail: &dyn RecordSource,
        cancel: &CancellationToken,
    ) -> Result<IngestOutcome, IngestError>;
}
