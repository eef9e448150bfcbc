//! Transaction Ingestion Service
//!
//! Main service implementing TransactionIngestionApi.

use crate::algorithms::{HeaderKeyIndex, TransactionAccumulator};
use crate::config::IngestOptions;
use crate::domain::entities::{IngestOutcome, IngestStats};
use crate::domain::errors::IngestError;
use crate::domain::value_objects::ColumnIndex;
use crate::ports::inbound::TransactionIngestionApi;
use crate::ports::outbound::RecordSource;
use shared_types::{CancellationToken, ItemId, TransactionKey};
use tracing::{debug, info, warn};

/// Transaction Ingestion Service
///
/// Orchestrates the ingestion pipeline:
/// 1. Validate options
/// 2. Index header keys (sampled prefix)
/// 3. Stream detail rows (sampled prefix) in chunks
/// 4. Join, normalize, and fold rows into the accumulator
/// 5. Close remaining keys and return transactions ordered by key
pub struct TransactionIngestor {
    options: IngestOptions,
}

impl TransactionIngestor {
    /// Create a new ingestor with default options
    pub fn new() -> Self {
        Self {
            options: IngestOptions::default(),
        }
    }

    /// Create a new ingestor with custom options
    pub fn with_options(options: IngestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &IngestOptions {
        &self.options
    }
}

impl Default for TransactionIngestor {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionIngestionApi for TransactionIngestor {
    fn ingest(
        &self,
        header: &dyn RecordSource,
        detail: &dyn RecordSource,
        cancel: &CancellationToken,
    ) -> Result<IngestOutcome, IngestError> {
        // 1. Validate options
        self.options.validate()?;
        let limit = self.options.sample_limit;

        // 2. Index header keys
        let header_index = HeaderKeyIndex::load(
            header.name(),
            header.open()?,
            &self.options.key_column,
            limit,
        )?;
        info!(
            source = header.name(),
            rows = header_index.rows(),
            keys = header_index.key_count(),
            "[mb-01] Header keys indexed"
        );

        // 3. Resolve detail layout
        let detail_stream = detail.open()?;
        let key_idx =
            ColumnIndex::resolve(detail.name(), &detail_stream.columns, &self.options.key_column)?;
        let item_idx = ColumnIndex::resolve(
            detail.name(),
            &detail_stream.columns,
            &self.options.item_column,
        )?;

        let mut stats = IngestStats {
            header_rows: header_index.rows(),
            header_keys: header_index.key_count(),
            ..Default::default()
        };
        let mut accumulator = TransactionAccumulator::new(self.options.key_order);
        let mut rows_in_chunk = 0;

        // 4. Stream detail rows chunk by chunk
        for row in detail_stream.rows.take(limit.unwrap_or(usize::MAX)) {
            let row = row?;
            stats.detail_rows += 1;

            let key = TransactionKey::new(key_idx.field(detail.name(), stats.detail_rows, &row)?);
            let raw_item = item_idx.field(detail.name(), stats.detail_rows, &row)?;

            if !header_index.contains(&key) {
                stats.orphan_rows += 1;
            } else if let Some(item) = ItemId::parse(raw_item) {
                stats.joined_rows += 1;
                accumulator.push(key, item);
            } else {
                stats.blank_item_rows += 1;
            }

            rows_in_chunk += 1;
            if rows_in_chunk == self.options.chunk_size {
                rows_in_chunk = 0;
                stats.chunks += 1;
                accumulator.end_chunk();
                debug!(
                    chunk = stats.chunks,
                    rows_read = stats.detail_rows,
                    open_keys = accumulator.open_keys(),
                    "[mb-01] Processed detail chunk"
                );
                if cancel.is_cancelled() {
                    warn!(chunk = stats.chunks, "[mb-01] Ingestion cancelled");
                    return Err(IngestError::Cancelled);
                }
            }
        }

        if rows_in_chunk > 0 {
            stats.chunks += 1;
            accumulator.end_chunk();
        }

        // 5. Close remaining keys
        stats.late_rows = accumulator.late_rows();
        stats.peak_open_keys = accumulator.peak_open_keys();
        let transactions = accumulator.finish();

        if stats.orphan_rows > 0 {
            info!(
                orphan_rows = stats.orphan_rows,
                "[mb-01] Dropped detail rows without a matching header"
            );
        }
        if stats.late_rows > 0 {
            warn!(
                late_rows = stats.late_rows,
                "[mb-01] Detail input was not clustered by key; late rows merged"
            );
        }

        info!(
            transactions = transactions.len(),
            detail_rows = stats.detail_rows,
            joined_rows = stats.joined_rows,
            chunks = stats.chunks,
            "[mb-01] Ingestion complete"
        );

        Ok(IngestOutcome {
            transactions,
            stats,
        })
    }
}
