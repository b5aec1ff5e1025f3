//! Plain-text rendering of engine output for the terminal.

use riskscope_core::ClusterOutcome;
use riskscope_engine::{Advisory, EngineStats};

/// Print the aggregated dashboard view.
pub fn print_stats(stats: &EngineStats) {
    println!("=== Risk Overview ===");
    println!("  {:<26} {}", "total findings", stats.total_findings);
    println!();

    if !stats.risk_counts.is_empty() {
        println!("Findings by category");
        for (category, count) in &stats.risk_counts {
            println!("  {:<26} {}", category, count);
        }
        println!();
    }

    if !stats.top_processes.is_empty() {
        println!("Top processes by mean risk");
        for summary in &stats.top_processes {
            println!(
                "  {:<26} {:>7.2}  ({} findings)",
                summary.process, summary.avg_risk, summary.total_findings
            );
        }
        println!();
    }

    match &stats.deep_analysis {
        Some(ClusterOutcome::Clustered { clusters }) => {
            println!("Deep analysis");
            for cluster in clusters {
                println!(
                    "  [{}] {} ({} findings)",
                    cluster.risk_level, cluster.label, cluster.member_count
                );
                for example in &cluster.examples {
                    println!("      - {example}");
                }
            }
            println!();
        }
        Some(ClusterOutcome::Skipped { found, required }) => {
            println!("Deep analysis skipped: {found} findings, {required} required");
            println!();
        }
        None => {}
    }
}

/// Print query results in the consultative advisory format.
pub fn print_advisories(query: &str, advisories: &[Advisory]) {
    println!("=== Findings relevant to \"{query}\" ===");
    if advisories.is_empty() {
        println!("  No sufficiently relevant findings in the scored corpus.");
        return;
    }
    for advisory in advisories {
        println!(
            "**{} Risk**: {} (similarity {:.2})",
            advisory.category, advisory.finding, advisory.similarity
        );
        println!("  Remediation: {}", advisory.remediation);
        println!("  Schedule:    {}", advisory.schedule);
    }
}
