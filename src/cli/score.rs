//! Score command - rate how well a listing fits a candidate profile.
//!
//! Both inputs are JSON files in the raw record shape callers send to
//! the engine. The output is the persisted match shape plus the
//! presentation-only band.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::listing::{ListingFeatures, RawListing};
use crate::core::profile::{ProfileFeatures, RawProfile};
use crate::matching::engine::{MatchResult, MatchScorer};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Listing record (JSON file)
    #[arg(long, required = true)]
    pub listing: PathBuf,

    /// Candidate profile record (JSON file)
    #[arg(long, required = true)]
    pub profile: PathBuf,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if either input file cannot be read or parsed.
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let raw_listing: RawListing = read_json(&args.listing)?;
    let raw_profile: RawProfile = read_json(&args.profile)?;

    let listing = ListingFeatures::from_raw(raw_listing);
    let profile = ProfileFeatures::from_raw(raw_profile);

    if verbose {
        eprintln!(
            "Listing: {} required skills, {} preferred, {} majors",
            listing.required_skills.len(),
            listing.preferred_skills.len(),
            listing.majors.len(),
        );
        eprintln!(
            "Profile: {} skills, {} majors, remote_only={}",
            profile.skills.len(),
            profile.majors.len(),
            profile.remote_only,
        );
    }

    let result = MatchScorer::new().score(&listing, &profile);

    match format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "match_score": result.score,
                "match_reasons": result.reasons,
                "match_gaps": result.gaps,
                "matching_version": result.version,
                "band": result.band(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))
}

fn print_text(result: &MatchResult) {
    println!("\nMatch score: {}/100 ({:?})", result.score, result.band());
    println!("Version: {}", result.version);

    if !result.reasons.is_empty() {
        println!("\nReasons:");
        for reason in &result.reasons {
            println!("  + {reason}");
        }
    }

    if !result.gaps.is_empty() {
        println!("\nGaps:");
        for gap in &result.gaps {
            println!("  - {gap}");
        }
    }
}
