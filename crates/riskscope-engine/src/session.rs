//! The audit session: single owner of the taxonomy, corpus, and every
//! derived view.
//!
//! Mutating operations take `&mut self`, so exclusive access across the
//! full ingest → score → cluster sequence is enforced by the borrow
//! checker rather than by convention; a server that shares a session wraps
//! it in a lock or an actor. State transitions are atomic: a failed step
//! leaves the previous corpus, catalog, and score set untouched.

use arrow::record_batch::RecordBatch;
use riskscope_ai::{EmbeddingProvider, TaxonomyStore};
use riskscope_core::{ClusterOutcome, EngineError, Finding, IngestMode, ScoredFinding};
use tracing::info;

use crate::cluster;
use crate::export;
use crate::ingest::{self, Upload};
use crate::retrieve::{self, Advisory};
use crate::score;
use crate::stats::{self, EngineStats};

pub struct AuditSession<P: EmbeddingProvider> {
    provider: P,
    taxonomy: TaxonomyStore,
    findings: Vec<Finding>,
    /// Parallel to `findings` once scored; cleared on any corpus change.
    embeddings: Vec<Vec<f32>>,
    scored: Option<Vec<ScoredFinding>>,
    clusters: Option<ClusterOutcome>,
}

impl<P: EmbeddingProvider> AuditSession<P> {
    /// Bootstrap a session: embed the exemplar sets and the default
    /// process catalog once.
    pub fn new(mut provider: P) -> Result<Self, EngineError> {
        let taxonomy = TaxonomyStore::bootstrap(&mut provider)?;
        Ok(Self {
            provider,
            taxonomy,
            findings: Vec::new(),
            embeddings: Vec::new(),
            scored: None,
            clusters: None,
        })
    }

    /// Replace the process catalog from an uploaded audit plan table.
    ///
    /// Invalidates the score set: process matches reflect taxonomy state
    /// at scoring time only. Returns the catalog size.
    pub fn load_plan(&mut self, table: &RecordBatch) -> Result<usize, EngineError> {
        let names = ingest::extract_process_names(table)?;
        let count = self
            .taxonomy
            .reload_processes(&mut self.provider, &names)?;
        self.scored = None;
        self.clusters = None;
        Ok(count)
    }

    /// Build the finding corpus from one or more uploads.
    ///
    /// All uploads are extracted before anything is committed, so a bad
    /// table cannot leave a partial corpus behind. Returns the resulting
    /// corpus size.
    pub fn ingest_findings(
        &mut self,
        uploads: &[Upload],
        mode: IngestMode,
    ) -> Result<usize, EngineError> {
        let mut incoming = Vec::new();
        for upload in uploads {
            incoming.extend(ingest::extract_findings(upload)?);
        }

        match mode {
            IngestMode::Append => {
                for finding in &mut self.findings {
                    finding.cluster_id = None;
                }
                self.findings.extend(incoming);
            }
            IngestMode::Overwrite => self.findings = incoming,
        }
        self.embeddings.clear();
        self.scored = None;
        self.clusters = None;

        info!(corpus = self.findings.len(), ?mode, "ingested findings");
        Ok(self.findings.len())
    }

    /// Score the whole corpus against the current taxonomy state.
    ///
    /// One batched embedding call covers every finding; the new score set
    /// replaces the old wholesale. An empty corpus scores to an empty set.
    pub fn rescore(&mut self) -> Result<usize, EngineError> {
        let texts: Vec<&str> = self.findings.iter().map(|f| f.text.as_str()).collect();
        let embeddings = self
            .provider
            .encode(&texts)
            .map_err(|e| EngineError::Embedding(e.to_string()))?;

        let scored: Vec<ScoredFinding> = self
            .findings
            .iter()
            .zip(&embeddings)
            .map(|(finding, embedding)| score::score_finding(&self.taxonomy, finding, embedding))
            .collect();

        self.embeddings = embeddings;
        self.scored = Some(scored);
        info!(scored = self.findings.len(), "rescored corpus");
        Ok(self.findings.len())
    }

    /// Group finding embeddings and write cluster ids back onto the corpus.
    ///
    /// Skips (typed, non-fatal) below [`cluster::MIN_CLUSTER_CORPUS`]
    /// findings. Requires a prior [`rescore`](Self::rescore) so the
    /// embeddings exist.
    pub fn analyze_clusters(&mut self) -> Result<ClusterOutcome, EngineError> {
        if self.findings.len() < cluster::MIN_CLUSTER_CORPUS {
            let outcome = ClusterOutcome::Skipped {
                found: self.findings.len(),
                required: cluster::MIN_CLUSTER_CORPUS,
            };
            self.clusters = Some(outcome.clone());
            return Ok(outcome);
        }
        if self.scored.is_none() {
            return Err(EngineError::NoData);
        }

        let labels = cluster::dbscan(
            &self.embeddings,
            cluster::DBSCAN_EPS,
            cluster::DBSCAN_MIN_SAMPLES,
        );
        for (finding, &label) in self.findings.iter_mut().zip(&labels) {
            finding.cluster_id = Some(label);
        }
        let clusters = cluster::summarize(&labels, &self.findings);
        info!(clusters = clusters.len(), "clustered corpus");

        let outcome = ClusterOutcome::Clustered { clusters };
        self.clusters = Some(outcome.clone());
        Ok(outcome)
    }

    /// Findings most relevant to a free-text query, as advisory tuples.
    ///
    /// Fails with [`EngineError::NoData`] when nothing has been scored.
    /// Takes `&mut self` because the embedding backend does.
    pub fn query(&mut self, text: &str) -> Result<Vec<Advisory>, EngineError> {
        let scored = match self.scored.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => return Err(EngineError::NoData),
        };

        let query_embeddings = self
            .provider
            .encode(&[text])
            .map_err(|e| EngineError::Embedding(e.to_string()))?;
        let query_embedding = query_embeddings
            .first()
            .ok_or_else(|| EngineError::Embedding("provider returned no vector".into()))?;

        Ok(retrieve::top_advisories(
            query_embedding,
            &self.embeddings,
            scored,
        ))
    }

    /// Fresh aggregation of the current scored state. Zero totals when
    /// nothing is scored; never an error.
    pub fn stats(&self) -> EngineStats {
        stats::aggregate(
            self.scored.as_deref().unwrap_or(&[]),
            self.clusters.as_ref(),
        )
    }

    /// The scored corpus as a report batch in export column order.
    ///
    /// Fails with [`EngineError::NoData`] when nothing has been scored.
    pub fn export_batch(&self) -> Result<RecordBatch, EngineError> {
        match self.scored.as_deref() {
            Some(scored) if !scored.is_empty() => export::report_batch(scored),
            _ => Err(EngineError::NoData),
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn scored(&self) -> Option<&[ScoredFinding]> {
        self.scored.as_deref()
    }

    pub fn process_count(&self) -> usize {
        self.taxonomy.processes().len()
    }
}
