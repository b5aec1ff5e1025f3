//! Risk Scoring & Retrieval Engine.
//!
//! Turns raw audit finding text into normalized embeddings, scores each
//! finding against the three reference taxonomies, groups related findings
//! with density-based clustering, and answers nearest-neighbor queries.
//! All state lives in an [`AuditSession`] owned by the caller; mutating
//! operations take `&mut self`, so the borrow checker enforces the
//! single-writer region across the whole ingest → score → cluster → report
//! sequence.

mod cluster;
mod export;
mod ingest;
mod retrieve;
mod score;
mod session;
mod stats;
mod table;

#[cfg(test)]
mod testutil;

pub use cluster::{DBSCAN_EPS, DBSCAN_MIN_SAMPLES, MIN_CLUSTER_CORPUS};
pub use ingest::Upload;
pub use retrieve::{Advisory, RELEVANCE_FLOOR, TOP_K};
pub use riskscope_core::IngestMode;
pub use session::AuditSession;
pub use stats::{EngineStats, PREVIEW_LIMIT, ProcessSummary, TOP_PROCESS_LIMIT};
pub use table::narrative_column;
