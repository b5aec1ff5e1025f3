pub mod clause;
pub mod error;
pub mod record;
pub mod schema;

pub use clause::{FALLBACK_CLAUSE, ISO_CLAUSES, map_clause};
pub use error::EngineError;
pub use record::{Cluster, ClusterOutcome, Finding, IngestMode, RiskCategory, ScoredFinding};
pub use schema::report;
