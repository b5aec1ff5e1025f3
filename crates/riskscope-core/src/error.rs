use thiserror::Error;

/// Failure taxonomy for the scoring and retrieval pipeline.
///
/// Ingestion and scoring errors abort the whole step; the session never
/// commits a partial corpus or a partial score set, so prior valid state
/// stays queryable after any of these.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The audit plan produced no process names after dropping blanks.
    #[error("audit plan produced an empty process catalog")]
    EmptyCatalog,

    /// The uploaded table has zero columns or only empty values.
    #[error("uploaded table has no usable narrative column")]
    NoUsableColumn,

    /// The operation needs a scored corpus that does not exist yet.
    #[error("no scored findings available; upload findings first")]
    NoData,

    /// The embedding provider rejected the batch or failed internally.
    #[error("embedding provider failed: {0}")]
    Embedding(String),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
