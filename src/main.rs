use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faceval::{config, evaluate, pairs, report, store, EmbeddingStore, IndexTable, Metric};
use log::info;

#[derive(Parser)]
#[command(name = "faceval")]
#[command(
    version,
    about = "Pairwise face-verification accuracy over precomputed embeddings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate verification accuracy over a pairs file
    Evaluate {
        /// LFW-style pairs file (matched and mismatched lines)
        #[arg(short, long)]
        pairs: PathBuf,
        /// Embedding record file produced by an upstream encoder
        #[arg(short, long)]
        embeddings: PathBuf,
        /// Override the configured decision threshold
        #[arg(short, long)]
        threshold: Option<f32>,
    },
    /// Open config file in editor
    Config,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(None)?;

    match cli.command {
        Commands::Evaluate {
            pairs,
            embeddings,
            threshold,
        } => {
            let threshold = threshold.unwrap_or(cfg.threshold);
            run_evaluation(&pairs, &embeddings, cfg.metric, threshold)
        }
        Commands::Config => open_config(),
    }
}

fn run_evaluation(
    pairs_path: &std::path::Path,
    embeddings_path: &std::path::Path,
    metric: Metric,
    threshold: f32,
) -> Result<()> {
    let records = store::load_records(embeddings_path).context("loading embedding records")?;
    if records.is_empty() {
        anyhow::bail!(
            "no embeddings found in {}. Encode faces first.",
            embeddings_path.display()
        );
    }
    info!("Loaded {} embedding(s)", records.len());

    let embedding_store = EmbeddingStore::from_records(&records)?;
    let index_table = IndexTable::from_records(&records);

    let lists = pairs::load_pairs(pairs_path)?;
    info!(
        "Parsed {} matched and {} mismatched pair(s)",
        lists.matched.len(),
        lists.mismatched.len()
    );
    info!("Threshold: {:.2} ({:?} distance)", threshold, metric);

    let verification = evaluate(
        &lists.matched,
        &lists.mismatched,
        &index_table,
        &embedding_store,
        metric,
        threshold,
    )
    .context("evaluating pairs")?;

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &verification)?;
    Ok(())
}

fn open_config() -> Result<()> {
    let config_path = config::CONFIG_PATH.as_os_str();
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    info!("Opening config file: {:?}", config_path);

    let status = std::process::Command::new(editor)
        .arg(config_path)
        .status()
        .context("Failed to open editor")?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    Ok(())
}
