//! Run command implementation

use anyhow::{bail, Context, Result};
use dctext_core::{Pipeline, RunConfig, RunReport};
use indicatif::{ProgressBar, ProgressStyle};

/// Convert every raw file of the input directory and export the collection
pub fn run(config: RunConfig, json_report: bool) -> Result<()> {
    let input_dir = config.input_dir.clone();

    let mut pipeline = Pipeline::new(config)
        .context("Invalid configuration! Please check spelling and documentation.")?;

    let files = pipeline
        .input_files()
        .with_context(|| format!("Failed to list input directory: {}", input_dir.display()))?;

    if files.is_empty() {
        tracing::warn!("No metadata files found in {}", input_dir.display());
    } else {
        tracing::info!("Found {} metadata files", files.len());
    }

    let pb = if json_report {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    for path in &files {
        if let Some(name) = path.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        // a failed file is logged and recorded in the report
        let _ = pipeline.ingest(path);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = pipeline.finish();

    if json_report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    if !report.is_clean() {
        let failed = report.exports.iter().filter(|e| !e.is_success()).count();
        bail!(
            "Run completed with {} skipped files and {} failed exports",
            report.skipped.len(),
            failed
        );
    }

    Ok(())
}

fn print_summary(report: &RunReport) {
    println!("Run complete:");
    println!("  Parsed:  {}", report.parsed);
    println!("  Skipped: {}", report.skipped.len());
    for skipped in &report.skipped {
        println!("    {} ({})", skipped.path.display(), skipped.reason);
    }

    println!("Exports:");
    for export in &report.exports {
        match (&export.path, &export.error) {
            (Some(path), None) => println!("  {:<5} ok      {}", export.format, path.display()),
            (_, Some(error)) => println!("  {:<5} failed  {}", export.format, error),
            (None, None) => println!("  {:<5} skipped", export.format),
        }
    }
}
