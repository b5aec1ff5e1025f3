//! Shared record types for the audit corpus and its derived views.

use serde::{Deserialize, Serialize};

/// One ingested audit finding.
///
/// `country` comes from a detected country column or defaults to the name
/// of the file the record arrived in. `cluster_id` is written back by the
/// clustering module; `-1` marks a noise point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub text: String,
    pub country: String,
    pub cluster_id: Option<i64>,
}

impl Finding {
    pub fn new(text: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            country: country.into(),
            cluster_id: None,
        }
    }
}

/// How an upload combines with the existing finding corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestMode {
    /// Concatenate onto the existing corpus, prior order preserved.
    Append,
    /// Replace the corpus entirely.
    Overwrite,
}

/// Risk band derived from the composite score.
///
/// Band boundaries are closed on the lower edge: a score of exactly 90
/// lands in `TopCritical`, exactly 70 in `High`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Top Critical")]
    TopCritical,
    High,
    Moderate,
    Low,
    Clear,
}

impl RiskCategory {
    /// Band for a composite score in `[0, 100]`.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::TopCritical
        } else if score >= 70.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Moderate
        } else if score >= 10.0 {
            Self::Low
        } else {
            Self::Clear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopCritical => "Top Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::Clear => "Clear",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view joining a finding with everything scoring derived from it.
///
/// Recomputed wholesale whenever the corpus or the process catalog changes;
/// never partially mutated. `process` and `iso_clause` reflect the taxonomy
/// state at scoring time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFinding {
    pub country: String,
    pub process: String,
    pub iso_clause: String,
    pub finding: String,
    /// Composite risk score, 0-100, rounded to two decimals.
    pub critical_score: f64,
    pub category: RiskCategory,
    pub hidden_flag: bool,
    /// The hidden-issue exemplar the finding matched most closely.
    pub hidden_reason: String,
    pub leakage_flag: bool,
    /// The leakage exemplar the finding matched most closely.
    pub leakage_reason: String,
    pub audit_status: String,
    pub checklist_status: String,
    pub business_reason: String,
    pub remediation: String,
    pub schedule: String,
}

/// One group produced by the clustering module.
///
/// Id `-1` is reserved for the noise cluster (points with insufficient
/// neighborhood density), which is surfaced as high-risk anomalies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: i64,
    pub label: String,
    pub risk_level: String,
    pub member_count: usize,
    /// Up to three example finding texts from the cluster.
    pub examples: Vec<String>,
}

/// Typed outcome of a clustering run.
///
/// Distinguishes "the corpus genuinely has no anomalies" from "clustering
/// did not run"; a broken run propagates as an `EngineError` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClusterOutcome {
    Clustered { clusters: Vec<Cluster> },
    Skipped { found: usize, required: usize },
}

impl ClusterOutcome {
    /// Clusters from a successful run, empty otherwise.
    pub fn clusters(&self) -> &[Cluster] {
        match self {
            Self::Clustered { clusters } => clusters,
            Self::Skipped { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_closed_below() {
        assert_eq!(RiskCategory::from_score(90.0), RiskCategory::TopCritical);
        assert_eq!(RiskCategory::from_score(89.99), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(70.0), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(69.99), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(40.0), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(39.99), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(10.0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(9.99), RiskCategory::Clear);
        assert_eq!(RiskCategory::from_score(0.0), RiskCategory::Clear);
        assert_eq!(RiskCategory::from_score(100.0), RiskCategory::TopCritical);
    }

    #[test]
    fn category_display_names() {
        assert_eq!(RiskCategory::TopCritical.to_string(), "Top Critical");
        assert_eq!(RiskCategory::Clear.to_string(), "Clear");
    }

    #[test]
    fn skipped_outcome_has_no_clusters() {
        let outcome = ClusterOutcome::Skipped {
            found: 3,
            required: 5,
        };
        assert!(outcome.clusters().is_empty());
    }
}
