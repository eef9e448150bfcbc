//! Cross-subsystem flows: ingestion (mb-01) → mining (mb-02) → model service (mb-03).

mod flows;
