//! CLI administration tool for cookbook-registry.
//!
//! Works on seed files offline, without a running server.
//!
//! # Usage
//!
//! ```bash
//! # Normalize a handwritten recipe name
//! cargo run --bin admin -- normalize "meatball--SUB_"
//!
//! # Expand a recipe from a seed file
//! cargo run --bin admin -- summarize --seed cookbook.json "Skibidi Spaghetti"
//!
//! # Validate every entry and every recipe in a seed file
//! cargo run --bin admin -- check --seed cookbook.json
//! ```

use cookbook_registry::api::dto::summary::SummaryResponse;
use cookbook_registry::domain::Cookbook;
use cookbook_registry::domain::aggregation::resolve;
use cookbook_registry::domain::entities::RecipeSummary;
use cookbook_registry::infrastructure::seed;
use cookbook_registry::utils::name_normalizer::normalize_name;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

/// CLI tool for working with cookbook seed files.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a recipe name
    Normalize {
        /// Free-form name, e.g. "big-chungus_broth!!"
        text: String,
    },

    /// Expand a recipe into its shopping list
    Summarize {
        /// Seed file with the cookbook entries
        #[arg(short, long)]
        seed: PathBuf,

        /// Recipe name (exact match)
        name: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register every seed entry and resolve every recipe, reporting failures
    Check {
        /// Seed file with the cookbook entries
        #[arg(short, long)]
        seed: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { text } => normalize(&text),
        Commands::Summarize { seed, name, json } => summarize(&seed, &name, json),
        Commands::Check { seed } => check(&seed),
    }
}

fn normalize(text: &str) -> Result<()> {
    let name = normalize_name(text).with_context(|| format!("Cannot normalize {text:?}"))?;
    println!("{}", name.bright_green());
    Ok(())
}

fn summarize(path: &Path, name: &str, as_json: bool) -> Result<()> {
    let cookbook = seed::load_cookbook(path)?;
    let summary = resolve(&cookbook, name)?;

    if as_json {
        let response = SummaryResponse::from(summary);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &RecipeSummary) {
    println!("{}", summary.name.bright_blue().bold());
    println!(
        "  {} {}",
        "Cook time:".bright_white(),
        summary.cook_time.to_string().cyan()
    );
    println!("  {}", "Ingredients:".bright_white());

    if summary.ingredients.is_empty() {
        println!("    {}", "(none)".dimmed());
    }

    for line in &summary.ingredients {
        println!("    {:>6} x {}", line.quantity.to_string().yellow(), line.name);
    }
}

/// Registers entries one by one, then resolves every stored recipe.
///
/// Unlike server start-up, a rejected entry does not stop the run.
fn check(path: &Path) -> Result<()> {
    let drafts = seed::read_drafts(path)?;
    let mut cookbook = Cookbook::new();
    let mut failures = 0;

    println!("{}", "Registering entries".bright_blue().bold());
    for (index, draft) in drafts.iter().enumerate() {
        if let Err(e) = cookbook.create(draft) {
            failures += 1;
            println!(
                "  {} #{} {}: {}",
                "✗".red(),
                index,
                draft.name.bright_white(),
                e.to_string().red()
            );
        }
    }
    println!(
        "  {} of {} entries registered",
        cookbook.len().to_string().cyan(),
        drafts.len()
    );

    println!();
    println!("{}", "Resolving recipes".bright_blue().bold());
    for recipe in cookbook.recipes() {
        match resolve(&cookbook, &recipe.name) {
            Ok(summary) => println!(
                "  {} {} (cook time {}, {} ingredient lines)",
                "✓".green(),
                recipe.name,
                summary.cook_time,
                summary.ingredients.len()
            ),
            Err(e) => {
                failures += 1;
                println!("  {} {}: {}", "✗".red(), recipe.name, e.to_string().red());
            }
        }
    }

    println!();
    if failures > 0 {
        anyhow::bail!("{failures} problem(s) found in {}", path.display());
    }

    println!("{}", "✅ Seed file is valid".green().bold());
    Ok(())
}
