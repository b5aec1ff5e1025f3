//! Aggregation of scored findings for reporting.

use std::collections::BTreeMap;

use riskscope_core::{ClusterOutcome, ScoredFinding};
use serde::Serialize;

/// Scored findings shown in the preview, in corpus order.
pub const PREVIEW_LIMIT: usize = 50;

/// Processes kept in the per-process summary.
pub const TOP_PROCESS_LIMIT: usize = 10;

/// Count and mean risk of the findings mapped to one process.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    pub process: String,
    pub total_findings: usize,
    pub avg_risk: f64,
}

/// Snapshot of the current scored corpus, computed freshly per request.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub total_findings: usize,
    /// Findings per category display name.
    pub risk_counts: BTreeMap<String, usize>,
    /// Top processes by mean risk, descending; ties by process name.
    pub top_processes: Vec<ProcessSummary>,
    /// First [`PREVIEW_LIMIT`] scored findings in corpus order.
    pub recent_findings: Vec<ScoredFinding>,
    /// Latest clustering outcome, if a run has happened.
    pub deep_analysis: Option<ClusterOutcome>,
}

pub(crate) fn aggregate(scored: &[ScoredFinding], clusters: Option<&ClusterOutcome>) -> EngineStats {
    let mut risk_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_process: BTreeMap<&str, (usize, f64)> = BTreeMap::new();

    for finding in scored {
        *risk_counts.entry(finding.category.to_string()).or_default() += 1;
        let entry = by_process.entry(&finding.process).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += finding.critical_score;
    }

    let mut top_processes: Vec<ProcessSummary> = by_process
        .into_iter()
        .map(|(process, (count, sum))| ProcessSummary {
            process: process.to_string(),
            total_findings: count,
            avg_risk: sum / count as f64,
        })
        .collect();
    top_processes.sort_by(|a, b| {
        b.avg_risk
            .partial_cmp(&a.avg_risk)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.process.cmp(&b.process))
    });
    top_processes.truncate(TOP_PROCESS_LIMIT);

    EngineStats {
        total_findings: scored.len(),
        risk_counts,
        top_processes,
        recent_findings: scored.iter().take(PREVIEW_LIMIT).cloned().collect(),
        deep_analysis: clusters.cloned(),
    }
}
