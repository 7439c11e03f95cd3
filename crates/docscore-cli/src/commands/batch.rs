//! Batch command - score multiple OCR JSON documents.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use docscore_core::{DocStatus, DocumentValidator, ValidationResult};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "ocr/*.json")
    #[arg(required = true)]
    input: String,

    /// Output directory for per-document results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Disable semantic similarity even if a model is configured
    #[arg(long)]
    no_semantic: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if args.no_semantic {
        config.semantic.enabled = false;
    }

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!("{} Found {} files to score", style("ℹ").blue(), files.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let validator = DocumentValidator::new(config);
    let mut results: Vec<(PathBuf, ValidationResult)> = Vec::with_capacity(files.len());

    for path in files {
        match validator.validate_path(&path) {
            Ok(result) => {
                if result.status == DocStatus::Failed {
                    warn!("{} scored as failed: {:?}", path.display(), result.error);
                }
                results.push((path, result));
            }
            // Unreadable or non-JSON file; the engine itself never fails.
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    if let Some(ref output_dir) = args.output_dir {
        for (path, result) in &results {
            let output_name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("document");
            let output_path = output_dir.join(format!("{}.result.json", output_name));
            fs::write(&output_path, serde_json::to_string(result)?)?;
            debug!("Wrote result to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!("{} Summary written to {}", style("✓").green(), summary_path.display());
    }

    let failed = results.iter().filter(|(_, r)| r.status == DocStatus::Failed).count();
    println!();
    println!(
        "{} Scored {} documents ({} failed) in {:?}",
        style("✓").green(),
        results.len(),
        failed,
        start.elapsed(),
    );

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[(PathBuf, ValidationResult)]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["file", "doc_id", "status", "dss_score", "dss_flags"])?;

    for (file, result) in results {
        let status = match result.status {
            DocStatus::Parsed => "parsed",
            DocStatus::LowConfidence => "low_confidence",
            DocStatus::Failed => "failed",
        };
        writer.write_record([
            file.display().to_string(),
            result.doc_id.clone(),
            status.to_string(),
            result
                .dss_score
                .map(|s| s.to_string())
                .unwrap_or_default(),
            result.dss_flags.iter().cloned().collect::<Vec<_>>().join(";"),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
