//! Nearest-neighbor retrieval behind the conversational interface.

use riskscope_core::{RiskCategory, ScoredFinding};
use serde::Serialize;

/// Maximum findings returned per query.
pub const TOP_K: usize = 5;

/// Similarity below which a finding is not relevant to the query.
pub const RELEVANCE_FLOOR: f32 = 0.25;

/// One advisory line: a finding relevant to the query plus the guidance
/// already derived for it.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub category: RiskCategory,
    pub finding: String,
    pub remediation: String,
    pub schedule: String,
    pub similarity: f32,
}

/// Rank the scored corpus against a query embedding.
///
/// Returns at most [`TOP_K`] advisories with similarity at or above
/// [`RELEVANCE_FLOOR`], ordered by strictly non-increasing similarity;
/// ties keep original corpus order.
pub(crate) fn top_advisories(
    query_embedding: &[f32],
    embeddings: &[Vec<f32>],
    scored: &[ScoredFinding],
) -> Vec<Advisory> {
    let mut ranked: Vec<(usize, f32)> = embeddings
        .iter()
        .map(|e| dot(query_embedding, e))
        .enumerate()
        .collect();
    // Stable sort keeps corpus order between equal similarities.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .take(TOP_K)
        .filter(|&(_, similarity)| similarity >= RELEVANCE_FLOOR)
        .map(|(idx, similarity)| Advisory {
            category: scored[idx].category,
            finding: scored[idx].finding.clone(),
            remediation: scored[idx].remediation.clone(),
            schedule: scored[idx].schedule.clone(),
            similarity,
        })
        .collect()
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
