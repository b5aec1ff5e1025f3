//! One-shot audit run: load an optional plan, ingest finding files, score,
//! cluster, and report.

mod display;
mod load;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use riskscope_ai::OnnxEmbedder;
use riskscope_engine::{AuditSession, IngestMode, Upload};

#[derive(Parser)]
#[command(name = "riskscope", version, about = "Audit risk scoring and retrieval")]
struct Cli {
    /// Directory containing model.onnx and tokenizer.json.
    #[arg(long, env = "RISKSCOPE_MODEL_DIR")]
    model_dir: PathBuf,

    /// Audit plan CSV; its process names replace the default catalog.
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Finding CSVs to ingest, in order.
    #[arg(required = true)]
    findings: Vec<PathBuf>,

    /// Question to ask against the scored corpus.
    #[arg(long)]
    query: Option<String>,

    /// Write the full report CSV to this path.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Emit the overview as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("riskscope v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let embedder = OnnxEmbedder::load(&cli.model_dir).context("loading embedding model")?;
    let mut session = AuditSession::new(embedder).context("bootstrapping taxonomies")?;

    if let Some(plan_path) = &cli.plan {
        let plan = load::read_csv(plan_path)?;
        let count = session.load_plan(&plan).context("loading audit plan")?;
        eprintln!("  Loaded {count} processes from {}", plan_path.display());
    }

    let mut uploads = Vec::with_capacity(cli.findings.len());
    for path in &cli.findings {
        uploads.push(Upload::new(file_name(path), load::read_csv(path)?));
    }
    let corpus = session
        .ingest_findings(&uploads, IngestMode::Overwrite)
        .context("ingesting findings")?;
    eprintln!("  Ingested {corpus} findings from {} files", uploads.len());

    session.rescore().context("scoring findings")?;
    session.analyze_clusters().context("clustering findings")?;

    let stats = session.stats();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::print_stats(&stats);
    }

    if let Some(query) = &cli.query {
        let advisories = session.query(query).context("running query")?;
        display::print_advisories(query, &advisories);
    }

    if let Some(export_path) = &cli.export {
        let batch = session.export_batch().context("building report")?;
        load::write_csv(export_path, &batch)?;
        eprintln!("  Wrote report to {}", export_path.display());
    }

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
