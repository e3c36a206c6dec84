//! Resolve command - map free-text skill labels to canonical catalog ids.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::SkillCatalog;
use crate::cli::OutputFormat;
use crate::resolver::engine::{SkillResolution, SkillResolver};
use crate::utils::validation::validate_labels;

/// Arguments for the resolve command
#[derive(Args)]
pub struct ResolveArgs {
    /// Skill labels to resolve, as typed by users ("React.js", "Postgres")
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// Path to custom catalog file (defaults to embedded)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute the resolve command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the labels exceed
/// the request caps, or the lookup backend fails.
pub fn run(args: ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        SkillCatalog::load_from_file(path)?
    } else {
        SkillCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} skills", catalog.len());
    }

    let labels = validate_labels(&args.labels)?;

    let rt = tokio::runtime::Runtime::new()?;
    let resolver = SkillResolver::new(&catalog);
    let resolution = rt.block_on(resolver.resolve(&labels))?;

    match format {
        OutputFormat::Text => print_text(&resolution, &catalog),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
    }

    Ok(())
}

fn print_text(resolution: &SkillResolution, catalog: &SkillCatalog) {
    if resolution.skill_ids.is_empty() && resolution.unknown.is_empty() {
        println!("No labels to resolve.");
        return;
    }

    if !resolution.skill_ids.is_empty() {
        println!("Resolved ({}):", resolution.skill_ids.len());
        for id in &resolution.skill_ids {
            match catalog.get(id) {
                Some(skill) => println!("  {id}  {}", skill.name),
                None => println!("  {id}"),
            }
        }
    }

    if !resolution.unknown.is_empty() {
        println!("\nUnknown ({}):", resolution.unknown.len());
        for label in &resolution.unknown {
            println!("  {label}");
        }
    }
}
