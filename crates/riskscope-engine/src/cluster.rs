//! Density-based grouping of finding embeddings.
//!
//! DBSCAN over euclidean distance; on unit-norm embeddings that preserves
//! cosine ranking. Dense clusters surface systemic issues, noise points
//! surface rare anomalies worth individual review.

use riskscope_core::{Cluster, Finding};

/// Neighborhood radius. Tunable constant, not derived from the data.
pub const DBSCAN_EPS: f32 = 0.6;

/// Neighbors (the point itself included) required for a core point.
pub const DBSCAN_MIN_SAMPLES: usize = 3;

/// Below this corpus size clustering is statistically meaningless and the
/// run is skipped.
pub const MIN_CLUSTER_CORPUS: usize = 5;

/// Label for points with insufficient neighborhood density.
pub(crate) const NOISE: i64 = -1;

const UNCLASSIFIED: i64 = -2;
const NOISE_CLUSTER_LABEL: &str = "Unclassified Anomalies (Potential Rare Leakage)";
const EXAMPLE_LIMIT: usize = 3;
const LABEL_TEXT_LIMIT: usize = 50;

/// Classic DBSCAN. Every point ends with either a cluster id (assigned in
/// discovery order from 0) or [`NOISE`].
pub(crate) fn dbscan(embeddings: &[Vec<f32>], eps: f32, min_samples: usize) -> Vec<i64> {
    let n = embeddings.len();
    let mut labels = vec![UNCLASSIFIED; n];
    let mut next_cluster = 0i64;

    for point in 0..n {
        if labels[point] != UNCLASSIFIED {
            continue;
        }
        let neighbors = region_query(embeddings, point, eps);
        if neighbors.len() < min_samples {
            labels[point] = NOISE;
            continue;
        }

        labels[point] = next_cluster;
        let mut frontier: Vec<usize> = neighbors;
        while let Some(candidate) = frontier.pop() {
            if labels[candidate] == NOISE {
                // A border point previously dismissed as noise.
                labels[candidate] = next_cluster;
            }
            if labels[candidate] != UNCLASSIFIED {
                continue;
            }
            labels[candidate] = next_cluster;
            let reachable = region_query(embeddings, candidate, eps);
            if reachable.len() >= min_samples {
                frontier.extend(reachable);
            }
        }
        next_cluster += 1;
    }

    labels
}

/// Per distinct label (ascending, noise first), build a cluster record
/// with a derived name, risk level, member count, and example texts.
pub(crate) fn summarize(labels: &[i64], findings: &[Finding]) -> Vec<Cluster> {
    let mut distinct: Vec<i64> = labels.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    distinct
        .into_iter()
        .map(|id| {
            let members: Vec<usize> = (0..labels.len()).filter(|&i| labels[i] == id).collect();
            let (label, risk_level) = if id == NOISE {
                (NOISE_CLUSTER_LABEL.to_string(), "High")
            } else {
                let head: String = findings[members[0]]
                    .text
                    .chars()
                    .take(LABEL_TEXT_LIMIT)
                    .collect();
                (format!("Cluster {id}: {head}..."), "Medium")
            };
            Cluster {
                id,
                label,
                risk_level: risk_level.to_string(),
                member_count: members.len(),
                examples: members
                    .iter()
                    .take(EXAMPLE_LIMIT)
                    .map(|&i| findings[i].text.clone())
                    .collect(),
            }
        })
        .collect()
}

fn region_query(embeddings: &[Vec<f32>], point: usize, eps: f32) -> Vec<usize> {
    (0..embeddings.len())
        .filter(|&other| euclidean(&embeddings[point], &embeddings[other]) <= eps)
        .collect()
}

fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
