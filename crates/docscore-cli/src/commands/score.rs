//! Score command - score a single OCR JSON document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use docscore_core::{DocStatus, DocumentValidator};

/// Arguments for the score command.
#[derive(Args)]
pub struct ScoreArgs {
    /// Input OCR JSON file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Disable semantic similarity even if a model is configured
    #[arg(long)]
    no_semantic: bool,

    /// Print a short human-readable summary to stderr
    #[arg(long)]
    summary: bool,
}

pub async fn run(args: ScoreArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if args.no_semantic {
        config.semantic.enabled = false;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scoring file: {}", args.input.display());
    let validator = DocumentValidator::new(config);
    let result = validator.validate_path(&args.input)?;

    let content = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, content)?;
            info!("Wrote result to {}", path.display());
        }
        None => println!("{}", content),
    }

    if args.summary {
        let status_mark = match result.status {
            DocStatus::Parsed => style("parsed").green(),
            DocStatus::LowConfidence => style("low_confidence").yellow(),
            DocStatus::Failed => style("failed").red(),
        };
        eprintln!(
            "{} {} status={} score={} flags=[{}] in {:?}",
            style("✓").green(),
            result.doc_id,
            status_mark,
            result
                .dss_score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            result.dss_flags.iter().cloned().collect::<Vec<_>>().join(", "),
            start.elapsed(),
        );
    }

    Ok(())
}
