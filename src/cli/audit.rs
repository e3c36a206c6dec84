//! Audit command - produce a trust score for a listing's signals.

use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::signals::{QualitySignals, RawQualitySignals};
use crate::quality::scorer::QualityReport;

/// Arguments for the audit command
#[derive(Args)]
pub struct AuditArgs {
    /// Quality signal bundle (JSON file)
    #[arg(required = true)]
    pub signals: PathBuf,
}

/// Execute the audit command
///
/// # Errors
///
/// Returns an error if the signal file cannot be read or parsed.
pub fn run(args: AuditArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.signals)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", args.signals.display()))?;
    let raw: RawQualitySignals = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", args.signals.display()))?;

    let signals = QualitySignals::from_raw(raw);
    if verbose {
        eprintln!(
            "Signals: tier={}, website={}, apply_url={}",
            signals.tier,
            signals.website.is_some(),
            signals.external_apply_url.is_some(),
        );
    }

    let report = QualityReport::audit(&signals);

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text(report: &QualityReport) {
    println!("\nQuality score: {}/100", report.score);
    println!("Version: {}", report.version);
    println!(
        "External domain mismatch: {}",
        if report.external_domain_mismatch {
            "YES"
        } else {
            "no"
        }
    );

    if report.flags.is_empty() {
        println!("\nNo integrity flags.");
    } else {
        println!("\nFlags:");
        for flag in &report.flags {
            println!("  ! {flag}");
        }
    }
}
