//! Command-line interface for match-engine.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Resolve free-text skill labels to canonical catalog ids
//! - **score**: Score a listing against a candidate profile
//! - **audit**: Audit a listing's employer trust signals
//! - **catalog**: List, show, or export skills from the catalog
//! - **serve**: Start the JSON API server
//!
//! ## Usage
//!
//! ```text
//! # Resolve messy skill labels
//! match-engine resolve "React.js" "Postgres" "Basket Weaving"
//!
//! # Score a listing/profile pair from JSON files
//! match-engine score --listing listing.json --profile profile.json
//!
//! # JSON output for scripting
//! match-engine score --listing listing.json --profile profile.json --format json
//!
//! # Audit trust signals
//! match-engine audit signals.json
//!
//! # Start API server
//! match-engine serve --port 8080
//! ```

use clap::{Parser, Subcommand};

pub mod audit;
pub mod catalog;
pub mod resolve;
pub mod score;

#[derive(Parser)]
#[command(name = "match-engine")]
#[command(version)]
#[command(about = "Deterministic match scoring, skill resolution, and listing quality audits")]
#[command(
    long_about = "match-engine is the scoring core of the internship marketplace.\n\nIt canonicalizes raw listing and profile records, then computes:\n- Match scores with ordered reasons and gaps, stamped with a matching version\n- Canonical skill ids for free-text labels, via alias and slug lookup\n- Listing trust scores with integrity flags"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve free-text skill labels to catalog ids
    Resolve(resolve::ResolveArgs),

    /// Score a listing against a candidate profile
    Score(score::ScoreArgs),

    /// Audit a listing's employer trust signals
    Audit(audit::AuditArgs),

    /// Manage the skill catalog
    Catalog(catalog::CatalogArgs),

    /// Start the JSON API server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
