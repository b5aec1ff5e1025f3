//! Composite risk scoring against the three reference taxonomies.
//!
//! The weighting favors process fit as the dominant signal while either
//! exemplar set can still push the score toward the ceiling; the square
//! root compresses the weighted sum so mid-similarity matches spread
//! usably across the 0-100 scale instead of collapsing near zero.

use riskscope_ai::TaxonomyStore;
use riskscope_core::{Finding, ISO_CLAUSES, RiskCategory, ScoredFinding, map_clause};

pub(crate) const WEIGHT_PROCESS: f32 = 0.5;
pub(crate) const WEIGHT_HIDDEN: f32 = 0.3;
pub(crate) const WEIGHT_LEAKAGE: f32 = 0.2;

/// Exemplar similarity above which the hidden/leakage flag raises,
/// independent of the composite category.
pub(crate) const FLAG_THRESHOLD: f32 = 0.35;

/// Score one finding from its embedding against the current taxonomy state.
pub(crate) fn score_finding(
    taxonomy: &TaxonomyStore,
    finding: &Finding,
    embedding: &[f32],
) -> ScoredFinding {
    let (idx_p, score_p) = taxonomy.processes().best_match(embedding);
    let process = taxonomy.processes().label(idx_p).to_string();

    let (idx_h, score_h) = taxonomy.hidden().best_match(embedding);
    let hidden = taxonomy.hidden().label(idx_h).to_string();

    let (idx_l, score_l) = taxonomy.leakage().best_match(embedding);
    let leakage = taxonomy.leakage().label(idx_l).to_string();

    // Negative similarity sums are clamped so the score stays in [0, 100].
    let weighted =
        (WEIGHT_PROCESS * score_p + WEIGHT_HIDDEN * score_h + WEIGHT_LEAKAGE * score_l).max(0.0);
    let risk = round2(f64::from(weighted).sqrt() * 100.0);
    let category = RiskCategory::from_score(risk);

    let iso_clause = map_clause(&process, ISO_CLAUSES).to_string();

    let business_reason = format!(
        "Finding mapped to '{process}' with significant control similarity. \
         Indicates {hidden}. Potential risk exposure via {leakage}."
    );

    ScoredFinding {
        country: finding.country.clone(),
        remediation: remediation_for(&process, &iso_clause, &finding.text),
        finding: finding.text.clone(),
        critical_score: risk,
        category,
        hidden_flag: score_h > FLAG_THRESHOLD,
        hidden_reason: hidden,
        leakage_flag: score_l > FLAG_THRESHOLD,
        leakage_reason: leakage,
        audit_status: if risk >= 40.0 { "Audited" } else { "Not Audited" }.to_string(),
        checklist_status: if risk >= 40.0 {
            "Action Required"
        } else {
            "Monitor"
        }
        .to_string(),
        business_reason,
        schedule: schedule_for(risk).to_string(),
        process,
        iso_clause,
    }
}

/// Remediation guidance: training-gap and document-control findings get
/// targeted actions, everything else a generic protocol review.
fn remediation_for(process: &str, clause: &str, finding_text: &str) -> String {
    let clause_lower = clause.to_lowercase();
    if clause_lower.contains("competence") || finding_text.to_lowercase().contains("training") {
        "Conduct Skill Gap Analysis (ILUO Matrix).".to_string()
    } else if clause_lower.contains("document") {
        "Update Control Plan in DMS.".to_string()
    } else {
        format!("Review protocol for {process}.")
    }
}

fn schedule_for(risk: f64) -> &'static str {
    if risk >= 90.0 {
        "IMMEDIATE (24hrs)"
    } else if risk >= 70.0 {
        "Urgent (7 days)"
    } else {
        "Annual"
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
