//! Shared fixtures: a deterministic embedding stub, batch builders, and
//! scored-finding factories.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use riskscope_ai::EmbeddingProvider;
use riskscope_core::{RiskCategory, ScoredFinding};

pub(crate) const STUB_DIM: usize = 4;

/// Embedding provider with a fixed text → vector table. Unmapped texts
/// land on the last axis, orthogonal to anything tests place on the
/// first three.
pub(crate) struct StubProvider {
    vectors: HashMap<String, Vec<f32>>,
}

impl StubProvider {
    pub(crate) fn new() -> Self {
        Self {
            vectors: HashMap::new(),
        }
    }

    pub(crate) fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), STUB_DIM);
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub(crate) fn lookup(&self, text: &str) -> Vec<f32> {
        self.vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0, 0.0, 0.0, 1.0])
    }
}

impl EmbeddingProvider for StubProvider {
    fn encode(&mut self, texts: &[&str]) -> anyhow::Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.lookup(t)).collect())
    }

    fn dim(&self) -> usize {
        STUB_DIM
    }
}

/// L2-normalize, so cosine and dot agree like they do for real embeddings.
pub(crate) fn unit(v: Vec<f32>) -> Vec<f32> {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return v;
    }
    v.into_iter().map(|x| x / norm).collect()
}

/// Build an all-Utf8 batch from named, nullable columns.
pub(crate) fn string_batch(columns: &[(&str, Vec<Option<&str>>)]) -> RecordBatch {
    let fields: Vec<Field> = columns
        .iter()
        .map(|(name, _)| Field::new(*name, DataType::Utf8, true))
        .collect();
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|(_, values)| Arc::new(StringArray::from(values.clone())) as ArrayRef)
        .collect();
    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .expect("column lengths must agree")
}

pub(crate) fn scored_stub(finding: &str) -> ScoredFinding {
    scored_with(finding, "General Process", 50.0, RiskCategory::Moderate)
}

pub(crate) fn scored_with(
    finding: &str,
    process: &str,
    score: f64,
    category: RiskCategory,
) -> ScoredFinding {
    ScoredFinding {
        country: "Testland".to_string(),
        process: process.to_string(),
        iso_clause: "ISO 9001:2015 – General Process Control".to_string(),
        finding: finding.to_string(),
        critical_score: score,
        category,
        hidden_flag: false,
        hidden_reason: "Verbal-only instructions".to_string(),
        leakage_flag: false,
        leakage_reason: "Tribal knowledge".to_string(),
        audit_status: "Audited".to_string(),
        checklist_status: "Action Required".to_string(),
        business_reason: format!("Finding mapped to '{process}'."),
        remediation: format!("Review protocol for {process}."),
        schedule: "Annual".to_string(),
    }
}
