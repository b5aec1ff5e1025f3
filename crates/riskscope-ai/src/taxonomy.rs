//! Reference taxonomies: the replaceable process catalog and the two fixed
//! risk exemplar sets, each held with precomputed embeddings.

use riskscope_core::EngineError;
use tracing::info;

use crate::provider::EmbeddingProvider;

/// Seed process catalog used until an audit plan is uploaded.
pub const DEFAULT_PROCESSES: &[&str] = &[
    "General Process",
    "Management",
    "Operations",
    "Support",
    "Quality",
];

/// Exemplar phrases for hidden governance issues.
pub const HIDDEN_EXEMPLARS: &[&str] = &[
    "governance oversight failure",
    "accountability gap",
    "policy enforcement weakness",
    "segregation of duties violation",
    "systemic compliance weakness",
];

/// Exemplar phrases for control leakage.
pub const LEAKAGE_EXEMPLARS: &[&str] = &[
    "control override",
    "manual dependency",
    "approval bypass",
    "data integrity failure",
    "documentation weakness",
];

/// A labeled reference set with precomputed embeddings.
///
/// Labels and vectors are parallel and never empty, so an argmax over
/// similarities always resolves to a label. Ties keep the first index.
pub struct ReferenceSet {
    labels: Vec<String>,
    vectors: Vec<Vec<f32>>,
}

impl ReferenceSet {
    /// Embed `labels` in one batched call.
    ///
    /// Fails with [`EngineError::EmptyCatalog`] on an empty label list and
    /// commits nothing on provider failure.
    fn embed(
        provider: &mut dyn EmbeddingProvider,
        labels: Vec<String>,
    ) -> Result<Self, EngineError> {
        if labels.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        let refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
        let vectors = provider
            .encode(&refs)
            .map_err(|e| EngineError::Embedding(e.to_string()))?;
        Ok(Self { labels, vectors })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, idx: usize) -> &str {
        &self.labels[idx]
    }

    /// Max cosine similarity against the set and the index of the matching
    /// reference item. First index wins on exact ties.
    pub fn best_match(&self, embedding: &[f32]) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_sim = f32::NEG_INFINITY;
        for (i, vector) in self.vectors.iter().enumerate() {
            let sim = dot(embedding, vector);
            if sim > best_sim {
                best_sim = sim;
                best_idx = i;
            }
        }
        (best_idx, best_sim)
    }
}

/// The three named reference sets consumed by the scoring engine.
///
/// Exemplar sets are embedded once at bootstrap and immutable for the
/// session lifetime; the process catalog is replaced wholesale by
/// [`reload_processes`](Self::reload_processes).
pub struct TaxonomyStore {
    processes: ReferenceSet,
    hidden: ReferenceSet,
    leakage: ReferenceSet,
}

impl TaxonomyStore {
    /// Embed the fixed exemplar lists and the default process catalog.
    pub fn bootstrap(provider: &mut dyn EmbeddingProvider) -> Result<Self, EngineError> {
        let processes = ReferenceSet::embed(
            provider,
            DEFAULT_PROCESSES.iter().map(|s| s.to_string()).collect(),
        )?;
        let hidden = ReferenceSet::embed(
            provider,
            HIDDEN_EXEMPLARS.iter().map(|s| s.to_string()).collect(),
        )?;
        let leakage = ReferenceSet::embed(
            provider,
            LEAKAGE_EXEMPLARS.iter().map(|s| s.to_string()).collect(),
        )?;
        info!(
            processes = processes.len(),
            hidden = hidden.len(),
            leakage = leakage.len(),
            "bootstrapped reference taxonomies"
        );
        Ok(Self {
            processes,
            hidden,
            leakage,
        })
    }

    /// Replace the process catalog and recompute its embeddings.
    ///
    /// Blank names are dropped; an empty remainder fails with
    /// [`EngineError::EmptyCatalog`] and leaves the current catalog intact,
    /// as does a provider failure. Returns the new catalog size.
    pub fn reload_processes(
        &mut self,
        provider: &mut dyn EmbeddingProvider,
        names: &[String],
    ) -> Result<usize, EngineError> {
        let kept: Vec<String> = names
            .iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        let replacement = ReferenceSet::embed(provider, kept)?;
        self.processes = replacement;
        info!(count = self.processes.len(), "reloaded process catalog");
        Ok(self.processes.len())
    }

    pub fn processes(&self) -> &ReferenceSet {
        &self.processes
    }

    pub fn hidden(&self) -> &ReferenceSet {
        &self.hidden
    }

    pub fn leakage(&self) -> &ReferenceSet {
        &self.leakage
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
