//! Catalog command - list, show, or export skills from the catalog.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::SkillCatalog;
use crate::cli::OutputFormat;
use crate::core::types::SkillId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all skills in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show details of a specific skill
    Show {
        /// Skill ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog, format, verbose),
        CatalogCommands::Show { id, catalog } => run_show(&id, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(&output, catalog),
    }
}

fn load(catalog_path: Option<PathBuf>) -> anyhow::Result<SkillCatalog> {
    Ok(if let Some(path) = catalog_path {
        SkillCatalog::load_from_file(&path)?
    } else {
        SkillCatalog::load_embedded()?
    })
}

fn run_list(
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;

    if verbose {
        eprintln!("Loaded catalog with {} skills", catalog.len());
    }

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let id_width = catalog
                .skills
                .iter()
                .map(|s| s.id.0.len())
                .max()
                .unwrap_or(2)
                .max(2);
            let slug_width = catalog
                .skills
                .iter()
                .map(|s| s.slug.len())
                .max()
                .unwrap_or(4)
                .max(4);
            let name_width = catalog
                .skills
                .iter()
                .map(|s| s.name.len())
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Skill Catalog ({} skills)\n", catalog.len());
            println!(
                "{:<id_w$} {:<slug_w$} {:<name_w$} {:>7}",
                "ID",
                "Slug",
                "Name",
                "Aliases",
                id_w = id_width,
                slug_w = slug_width,
                name_w = name_width
            );
            println!("{}", "-".repeat(id_width + slug_width + name_width + 10));

            for s in &catalog.skills {
                println!(
                    "{:<id_w$} {:<slug_w$} {:<name_w$} {:>7}",
                    s.id.0,
                    s.slug,
                    s.name,
                    s.aliases.len(),
                    id_w = id_width,
                    slug_w = slug_width,
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .skills
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id.0,
                        "slug": s.slug,
                        "name": s.name,
                        "aliases": s.aliases,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn run_show(id: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;

    let skill_id = SkillId::new(id);
    let skill = catalog
        .get(&skill_id)
        .ok_or_else(|| anyhow::anyhow!("Skill '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Skill: {}\n", skill.name);
            println!("ID:   {}", skill.id);
            println!("Slug: {}", skill.slug);

            if skill.aliases.is_empty() {
                println!("\nNo aliases.");
            } else {
                println!("\nAliases:");
                for alias in &skill.aliases {
                    println!("  {alias}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(skill)?);
        }
    }

    Ok(())
}

fn run_export(output: &PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;
    let json = catalog.to_json()?;
    std::fs::write(output, json)?;
    println!("Exported {} skills to {}", catalog.len(), output.display());
    Ok(())
}
